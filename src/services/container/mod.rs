//! Read-only access to the ZIP structure of a DOCX container.

mod reader;
mod types;

pub use reader::{read_attachments, read_attachments_with_prefix};
pub use types::{Attachment, ContainerError};

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod tests;
