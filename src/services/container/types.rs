use thiserror::Error;

/// An embedded object pulled out of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Last path segment of the archive entry.
    pub name: String,
    /// Full archive path, kept for logging.
    pub path: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn from_entry(path: &str, data: Vec<u8>) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            name,
            path: path.to_string(),
            data,
        }
    }
}

/// Structural failure: the container itself cannot be read.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("not a valid ZIP container: {0}")]
    Format(String),
    #[error("failed to read entry '{path}': {reason}")]
    Entry { path: String, reason: String },
}
