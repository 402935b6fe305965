//! Wire shapes returned by a single analysis call.
//!
//! `AnalysisResult` serializes to exactly one of:
//! - `{"status": "success", "analysis_results": [...]}`
//! - `{"status": "error", "message": "..."}`

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the commands of a group were recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentType {
    #[serde(rename = "text/plain")]
    TextPlain,
    #[serde(rename = "excel_char_based")]
    ExcelCharBased,
    #[serde(rename = "excel_gui_based")]
    ExcelGuiBased,
}

impl AttachmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextPlain => "text/plain",
            Self::ExcelCharBased => "excel_char_based",
            Self::ExcelGuiBased => "excel_gui_based",
        }
    }
}

impl fmt::Display for AttachmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted unit of operator instructions.
///
/// Only ever built with a non-empty `commands` list of trimmed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandGroup {
    pub source_file: String,
    pub attachment_type: AttachmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub commands: Vec<String>,
}

impl CommandGroup {
    /// Build a group, returning `None` when there is nothing to report.
    pub fn new(
        source_file: &str,
        attachment_type: AttachmentType,
        context: Option<String>,
        commands: Vec<String>,
    ) -> Option<Self> {
        if commands.is_empty() {
            return None;
        }
        Some(Self {
            source_file: source_file.to_string(),
            attachment_type,
            context,
            commands,
        })
    }
}

/// Outcome of analyzing one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResult {
    Success { analysis_results: Vec<CommandGroup> },
    Error { message: String },
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Groups of a success result; empty for the error shape.
    pub fn groups(&self) -> &[CommandGroup] {
        match self {
            Self::Success { analysis_results } => analysis_results,
            Self::Error { .. } => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { message } => Some(message),
        }
    }
}

#[cfg(test)]
#[path = "tests/analysis_tests.rs"]
mod tests;
