//! # Sentenza
//!
//! A CLI for text analysis and summarisation using LLMs.
//!
//! ## Features
//!
//! - **Resilient Parsing**: Extracts labelled fields from free-text model replies, degrading gracefully
//! - **Adaptive Summaries**: Sizes the requested summary to the input's sentence count
//! - **Document Reading**: PDF, DOCX, and TXT (with legacy-encoding fallback) via existing libraries

pub mod agent;
pub mod analysis;
pub mod config;
pub mod document;
pub mod prompts;
pub mod text;

pub use analysis::ParsedAnalysis;
pub use config::Config;
