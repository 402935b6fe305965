//! Whole-container analysis: read attachments, classify each, collect groups.
//!
//! Only a structural container failure turns into the error shape. Attachment
//! level outcomes never do.

use crate::services::config::AnalyzerConfig;
use crate::services::container::{read_attachments_with_prefix, ContainerError};
use crate::services::extract::classify_attachment;
use crate::types::{AnalysisResult, CommandGroup};

/// Prefix of the message carried by the error shape.
pub const STRUCTURE_ERROR_PREFIX: &str = "Failed to parse DOCX structure";

/// Analyze a DOCX buffer with the default settings.
pub fn analyze_docx_attachments(data: &[u8]) -> AnalysisResult {
    analyze_with_config(data, &AnalyzerConfig::default())
}

pub fn analyze_with_config(data: &[u8], config: &AnalyzerConfig) -> AnalysisResult {
    match collect_command_groups(data, config) {
        Ok(groups) => {
            log::info!("Extracted {} command group(s)", groups.len());
            AnalysisResult::Success {
                analysis_results: groups,
            }
        }
        Err(e) => {
            log::warn!("Rejected container: {e}");
            AnalysisResult::Error {
                message: format!("{STRUCTURE_ERROR_PREFIX}: {e}"),
            }
        }
    }
}

/// Groups from every attachment, in archive order then emission order.
pub fn collect_command_groups(
    data: &[u8],
    config: &AnalyzerConfig,
) -> Result<Vec<CommandGroup>, ContainerError> {
    let attachments = read_attachments_with_prefix(data, &config.embeddings_prefix)?;

    Ok(attachments
        .iter()
        .flat_map(|attachment| classify_attachment(attachment, config).into_groups())
        .collect())
}

#[cfg(test)]
#[path = "tests/analysis_tests.rs"]
mod tests;
