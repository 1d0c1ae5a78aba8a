//! # Recuento
//!
//! Word-frequency analysis for Spanish `.docx` documents.
//!
//! ## Features
//!
//! - Paragraph-preserving text extraction from Office Open XML documents
//! - Configurable analysis pipeline (char filters, tokenizer, token filters)
//! - Fixed Spanish stopword list with custom-list support
//! - Frequency table with stable descending-order queries
//! - Console report, full report export, and chart data contract

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod pipeline;
pub mod report;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
