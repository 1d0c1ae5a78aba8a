//! Command line argument parsing for the recuento CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::CountConfig;
use crate::report::DEFAULT_REPORT_FILE;

/// Recuento - word-frequency analysis for Spanish .docx documents
#[derive(Parser, Debug, Clone)]
#[command(name = "recuento")]
#[command(about = "Count word frequencies in a .docx document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RecuentoArgs {
    /// Path to the source document
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Count digits and digit-letter mixes as words
    #[arg(long)]
    pub include_digits: bool,

    /// Minimum word length in characters (values below 1 behave as 1)
    #[arg(long, default_value_t = 1, value_name = "LEN")]
    pub min_length: usize,

    /// Keep Spanish stopwords instead of excluding them
    #[arg(long)]
    pub keep_stopwords: bool,

    /// How many of the most frequent words to show
    #[arg(short = 'n', long = "top", default_value_t = 20, value_name = "N")]
    pub top_n: usize,

    /// Save the complete listing to a file (default: conteo_palabras.txt)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_REPORT_FILE
    )]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl RecuentoArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the pipeline configuration these arguments describe.
    pub fn count_config(&self) -> CountConfig {
        CountConfig {
            include_digits: self.include_digits,
            min_length: self.min_length.max(1),
            exclude_stopwords: !self.keep_stopwords,
            top_n: self.top_n,
        }
    }
}

/// Supported output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable statistics table
    Human,
    /// JSON summary
    Json,
}
