//! Command extraction from embedded attachments.
//!
//! Each attachment runs through a fixed attempt chain (see `classifier`):
//! spreadsheet first, then UTF-8 text. Anything else is dropped silently.

pub mod cell;
pub mod classifier;
pub mod tabular;
pub mod text;

pub use cell::CellValue;
pub use classifier::{classify_attachment, Classification, UnmatchedReason};
pub use tabular::{parse_workbook, Table, TabularError, TabularSchema};
pub use text::{decode_text, extract_text_commands};
