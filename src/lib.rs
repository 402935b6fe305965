//! Extracts operator commands from attachments embedded in DOCX documents.
//!
//! A DOCX is a ZIP container; embedded objects live under `word/embeddings/`.
//! Each one is tried as a spreadsheet in one of two known templates, then as
//! line-oriented text. See [`services::analysis`] for the entry points.

pub mod commands;
pub mod services;
pub mod types;

pub use services::analysis::{analyze_docx_attachments, analyze_with_config};
pub use services::config::AnalyzerConfig;
pub use types::{AnalysisResult, AttachmentType, CommandGroup};
