//! Command implementation for the recuento CLI.

use log::{error, warn};

use crate::cli::args::RecuentoArgs;
use crate::cli::output::output_result;
use crate::error::Result;
use crate::pipeline::count_document;
use crate::report::save_report;

/// Execute the counting run described by the CLI arguments.
///
/// Extraction failures abort the run. Everything after a successful count
/// degrades gracefully: an empty document still prints its (empty) report,
/// and an export failure is reported without discarding the console results.
pub fn execute_command(args: RecuentoArgs) -> Result<()> {
    let config = args.count_config();

    if args.verbosity() > 1 {
        println!("Procesando documento: {}", args.document.display());
    }

    let table = count_document(&args.document, &config)?;

    if table.is_empty() {
        warn!(
            "no countable words in '{}' with the current configuration",
            args.document.display()
        );
    }

    output_result(&table, &args)?;

    if let Some(path) = &args.output {
        match save_report(&table, path) {
            Ok(()) => {
                if args.verbosity() > 0 {
                    println!("\nResultados guardados en: {}", path.display());
                }
            }
            // The console report above already succeeded; keep it valid.
            Err(e) => error!("{e}"),
        }
    }

    Ok(())
}
