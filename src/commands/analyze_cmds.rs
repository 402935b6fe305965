//! Entry points for callers that hand over an uploaded DOCX.
//!
//! These wrap the core analysis with the checks a transport layer needs:
//! the upload must be named `*.docx`, and an error-shaped result becomes a
//! `CommandError` so the caller can map it to its own failure status.

use crate::services::analysis::analyze_with_config;
use crate::services::config::AnalyzerConfig;
use crate::types::errors::{CommandError, CommandResult};
use crate::types::AnalysisResult;
use std::fs;
use std::path::Path;

pub const INVALID_FORMAT_MESSAGE: &str = "File format error, please upload a .docx file.";

/// Analyze an uploaded document given its client-side file name.
pub fn analyze_docx_cmd(
    file_name: &str,
    data: &[u8],
    config: &AnalyzerConfig,
) -> CommandResult<AnalysisResult> {
    if !file_name.ends_with(".docx") {
        return Err(CommandError::InvalidInput(INVALID_FORMAT_MESSAGE.to_string()));
    }

    match analyze_with_config(data, config) {
        AnalysisResult::Error { message } => Err(CommandError::Analysis(message)),
        success => Ok(success),
    }
}

/// Read a document from disk and analyze it.
pub fn analyze_docx_path(path: &Path, config: &AnalyzerConfig) -> CommandResult<AnalysisResult> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if !file_name.ends_with(".docx") {
        return Err(CommandError::InvalidInput(INVALID_FORMAT_MESSAGE.to_string()));
    }

    let data = fs::read(path)
        .map_err(|e| CommandError::Io(format!("Failed to read {}: {e}", path.display())))?;
    analyze_docx_cmd(&file_name, &data, config)
}

#[cfg(test)]
#[path = "tests/analyze_cmds_tests.rs"]
mod tests;
