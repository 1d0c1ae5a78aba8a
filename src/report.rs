//! Report generation and export.
//!
//! Consumes a [`FrequencyTable`] to produce the console statistics table and
//! the persisted full listing. Output strings follow the original report
//! format (Spanish headers, two-decimal percentages).
//!
//! Export failures are [`RecuentoError::Export`] and never invalidate the
//! in-memory table or a console report that already printed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecuentoError, Result};
use crate::frequency::FrequencyTable;

/// Default file name for the persisted report.
pub const DEFAULT_REPORT_FILE: &str = "conteo_palabras.txt";

/// One row of the statistics report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub word: String,
    pub count: u64,
    pub percentage: f64,
}

/// Serializable summary of a counting run (for JSON output).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_words: u64,
    pub unique_words: usize,
    pub top: Vec<ReportRow>,
}

impl ReportSummary {
    /// Build a summary with the `top_n` highest-count rows.
    pub fn from_table(table: &FrequencyTable, top_n: usize) -> Self {
        let total = table.total_count();
        let top = table
            .top_n(top_n)
            .into_iter()
            .map(|(word, count)| ReportRow {
                word,
                count,
                percentage: percentage(count, total),
            })
            .collect();

        ReportSummary {
            total_words: total,
            unique_words: table.unique_words(),
            top,
        }
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    // Only reachable with total > 0: an empty table produces no rows.
    (count as f64 / total as f64) * 100.0
}

/// Write the statistics table for the top `top_n` words.
///
/// An empty table prints a "no data" notice instead of dividing by zero.
pub fn write_stats<W: Write>(w: &mut W, table: &FrequencyTable, top_n: usize) -> Result<()> {
    if table.is_empty() {
        writeln!(w, "No hay palabras para analizar.")?;
        return Ok(());
    }

    let separator = "=".repeat(50);

    writeln!(w, "{separator}")?;
    writeln!(w, "ESTADÍSTICAS DEL DOCUMENTO")?;
    writeln!(w, "{separator}")?;
    writeln!(w, "Total de palabras: {}", table.total_count())?;
    writeln!(w, "Palabras únicas: {}", table.unique_words())?;
    writeln!(w)?;
    writeln!(w, "{separator}")?;
    writeln!(w, "TOP {top_n} PALABRAS MÁS FRECUENTES")?;
    writeln!(w, "{separator}")?;
    writeln!(w, "{:<20} {:<10} {}", "Palabra", "Frecuencia", "Porcentaje")?;
    writeln!(w, "{}", "-".repeat(50))?;

    let total = table.total_count();
    for (word, count) in table.top_n(top_n) {
        writeln!(
            w,
            "{:<20} {:<10} {:.2}%",
            word,
            count,
            percentage(count, total)
        )?;
    }

    Ok(())
}

/// Save the complete frequency listing to a UTF-8 text file.
///
/// Every distinct word appears, sorted by descending frequency, as
/// `word: count (pct%)` lines under a header block.
pub fn save_report(table: &FrequencyTable, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| RecuentoError::export(format!("cannot write '{}': {e}", path.display())))?;
    let mut w = BufWriter::new(file);

    write_full_listing(&mut w, table)
        .map_err(|e| RecuentoError::export(format!("cannot write '{}': {e}", path.display())))?;

    w.flush()
        .map_err(|e| RecuentoError::export(format!("cannot write '{}': {e}", path.display())))?;

    Ok(())
}

fn write_full_listing<W: Write>(w: &mut W, table: &FrequencyTable) -> std::io::Result<()> {
    writeln!(w, "CONTEO COMPLETO DE PALABRAS")?;
    writeln!(w, "{}", "=".repeat(50))?;
    writeln!(w)?;
    writeln!(w, "Total de palabras: {}", table.total_count())?;
    writeln!(w, "Palabras únicas: {}", table.unique_words())?;
    writeln!(w)?;

    let total = table.total_count();
    for (word, count) in table.sorted_entries() {
        writeln!(w, "{word}: {count} ({:.2}%)", percentage(count, total))?;
    }

    Ok(())
}
