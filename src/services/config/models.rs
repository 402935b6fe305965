use serde::{Deserialize, Serialize};

/// Archive path under which a DOCX stores embedded objects.
pub const EMBEDDINGS_PREFIX: &str = "word/embeddings/";
/// Line marker that opens the command section of a text attachment.
pub const SECTION_MARKER: &str = "操作指令:";
/// Text an attachment must contain to be considered at all.
pub const HOSTNAME_SENTINEL: &str = "hostname:";
/// Context value used when a host or platform cell is missing.
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub embeddings_prefix: String,
    pub section_marker: String,
    /// Any one of these substrings qualifies decoded text for extraction.
    pub text_sentinels: Vec<String>,
    pub placeholder: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            embeddings_prefix: EMBEDDINGS_PREFIX.into(),
            section_marker: SECTION_MARKER.into(),
            text_sentinels: vec![HOSTNAME_SENTINEL.into(), SECTION_MARKER.into()],
            placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}
