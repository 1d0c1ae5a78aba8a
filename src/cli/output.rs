//! Output formatting for the recuento CLI.

use std::io::Write;

use crate::cli::args::{OutputFormat, RecuentoArgs};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::report::{self, ReportSummary};

/// Print the counting results in the requested format.
pub fn output_result(table: &FrequencyTable, args: &RecuentoArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(table, args),
        OutputFormat::Json => output_json(table, args),
    }
}

/// Human-readable statistics table on stdout.
fn output_human(table: &FrequencyTable, args: &RecuentoArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut w = stdout.lock();
    report::write_stats(&mut w, table, args.top_n)?;
    w.flush()?;
    Ok(())
}

/// JSON summary on stdout.
fn output_json(table: &FrequencyTable, args: &RecuentoArgs) -> Result<()> {
    let summary = ReportSummary::from_table(table, args.top_n);
    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}
