//! Spreadsheet cell normalization.

use calamine::Data;

/// A cell reduced to optional text.
///
/// Empty and error cells are absent. Numbers, booleans and dates keep their
/// display form (`42.0` becomes `"42"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellValue(Option<String>);

/// Shared absent cell for rows shorter than the header.
pub static EMPTY_CELL: CellValue = CellValue(None);

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self(None),
            Data::String(s) => Self(Some(s.clone())),
            other => Self(Some(other.to_string())),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Raw text; absent cells read as the empty string.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    /// Trimmed text, or `None` when the cell is absent or blank.
    pub fn non_blank(&self) -> Option<&str> {
        let trimmed = self.as_str().trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        Self::from_data(data)
    }
}

#[cfg(test)]
#[path = "tests/cell_tests.rs"]
mod tests;
