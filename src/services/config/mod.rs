//! Analyzer settings: literal defaults, optionally overridden from the
//! environment (or a `.env` file next to the process).

pub mod models;

pub use models::*;

pub const ENV_EMBEDDINGS_PREFIX: &str = "DOCX_ANALYZER_EMBEDDINGS_PREFIX";
pub const ENV_SECTION_MARKER: &str = "DOCX_ANALYZER_SECTION_MARKER";
pub const ENV_PLACEHOLDER: &str = "DOCX_ANALYZER_PLACEHOLDER";

impl AnalyzerConfig {
    /// Load defaults, then apply `DOCX_ANALYZER_*` overrides.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(prefix) = get(ENV_EMBEDDINGS_PREFIX) {
            self.embeddings_prefix = prefix;
        }
        if let Some(marker) = get(ENV_SECTION_MARKER) {
            // The marker always doubles as a sentinel
            self.text_sentinels.retain(|s| *s != self.section_marker);
            if !self.text_sentinels.contains(&marker) {
                self.text_sentinels.push(marker.clone());
            }
            self.section_marker = marker;
        }
        if let Some(placeholder) = get(ENV_PLACEHOLDER) {
            self.placeholder = placeholder;
        }
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
