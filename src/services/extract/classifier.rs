//! Per-attachment attempt chain.
//!
//! 1. Spreadsheet. If the bytes parse as a workbook the outcome is final,
//!    even when neither template matches.
//! 2. UTF-8 text, gated on a sentinel substring, extracted after the
//!    section marker.
//!
//! Every outcome is a value. Nothing here fails the enclosing analysis.

use super::tabular::{parse_workbook, TabularSchema};
use super::text::{decode_text, extract_text_commands, has_sentinel};
use crate::services::config::AnalyzerConfig;
use crate::services::container::Attachment;
use crate::types::{AttachmentType, CommandGroup};
use std::fmt;

/// Why an attachment contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnmatchedReason {
    /// Parsed as a spreadsheet, but the header has neither template column.
    NoSchemaColumn,
    /// Not a spreadsheet, and the text has no sentinel.
    NoSentinel { tabular_error: String },
    /// Text has a sentinel but never opens a command section.
    NoSectionMarker,
    /// Recognized, but every row or line was blank.
    NoCommands(AttachmentType),
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSchemaColumn => write!(f, "spreadsheet matches no known template"),
            Self::NoSentinel { tabular_error } => {
                write!(f, "not a spreadsheet ({tabular_error}) and no text sentinel")
            }
            Self::NoSectionMarker => write!(f, "text has no command section marker"),
            Self::NoCommands(kind) => write!(f, "{kind} attachment holds no commands"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Matched {
        attachment_type: AttachmentType,
        groups: Vec<CommandGroup>,
    },
    Unmatched(UnmatchedReason),
}

impl Classification {
    fn from_groups(attachment_type: AttachmentType, groups: Vec<CommandGroup>) -> Self {
        if groups.is_empty() {
            Self::Unmatched(UnmatchedReason::NoCommands(attachment_type))
        } else {
            Self::Matched {
                attachment_type,
                groups,
            }
        }
    }

    pub fn groups(&self) -> &[CommandGroup] {
        match self {
            Self::Matched { groups, .. } => groups,
            Self::Unmatched(_) => &[],
        }
    }

    pub fn into_groups(self) -> Vec<CommandGroup> {
        match self {
            Self::Matched { groups, .. } => groups,
            Self::Unmatched(_) => Vec::new(),
        }
    }
}

/// Classify one attachment and extract its command groups.
pub fn classify_attachment(attachment: &Attachment, config: &AnalyzerConfig) -> Classification {
    let outcome = classify_bytes(&attachment.data, &attachment.name, config);
    match &outcome {
        Classification::Matched {
            attachment_type,
            groups,
        } => log::debug!(
            "Attachment '{}' matched {} ({} groups)",
            attachment.name,
            attachment_type,
            groups.len()
        ),
        Classification::Unmatched(reason) => {
            log::debug!("Attachment '{}' skipped: {}", attachment.name, reason)
        }
    }
    outcome
}

/// Attempt chain over raw bytes; `source` names the resulting groups.
pub fn classify_bytes(data: &[u8], source: &str, config: &AnalyzerConfig) -> Classification {
    let tabular_error = match parse_workbook(data) {
        Ok(table) => {
            return match TabularSchema::detect(&table) {
                Some(schema) => Classification::from_groups(
                    schema.attachment_type(),
                    schema.extract(&table, source, &config.placeholder),
                ),
                None => Classification::Unmatched(UnmatchedReason::NoSchemaColumn),
            };
        }
        Err(e) => e.to_string(),
    };

    let text = decode_text(data);
    if !has_sentinel(&text, &config.text_sentinels) {
        return Classification::Unmatched(UnmatchedReason::NoSentinel { tabular_error });
    }
    if !text.contains(config.section_marker.as_str()) {
        return Classification::Unmatched(UnmatchedReason::NoSectionMarker);
    }

    let commands = extract_text_commands(&text, &config.section_marker);
    let groups = CommandGroup::new(source, AttachmentType::TextPlain, None, commands)
        .into_iter()
        .collect();
    Classification::from_groups(AttachmentType::TextPlain, groups)
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
