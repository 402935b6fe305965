//! Spreadsheet attachments and the two known command templates.
//!
//! - Character-command template: one row per host, column `操作指令` holds
//!   newline-separated CLI commands, optional `hostname` column.
//! - GUI template: one row per operation, column `操作指令编码` holds a single
//!   operation code, optional `网管平台名称` column.
//!
//! The template is chosen once per table from its header, character-command
//! first. A table never yields groups of both kinds.

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;
use thiserror::Error;

use super::cell::{CellValue, EMPTY_CELL};
use crate::types::{AttachmentType, CommandGroup};

pub const INSTRUCTION_COLUMN: &str = "操作指令";
pub const HOSTNAME_COLUMN: &str = "hostname";
pub const INSTRUCTION_CODE_COLUMN: &str = "操作指令编码";
pub const PLATFORM_COLUMN: &str = "网管平台名称";

const HOST_LABEL: &str = "主机";
const PLATFORM_LABEL: &str = "平台";

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("unrecognized spreadsheet: {0}")]
    Open(String),
    #[error("workbook has no worksheet")]
    NoWorksheet,
    #[error("failed to read first worksheet: {0}")]
    Worksheet(String),
}

/// First worksheet of a workbook: header labels plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// One data row, addressed by column index.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// Cell at `column`; missing columns and short rows read as absent.
    pub fn cell(&self, column: Option<usize>) -> &'a CellValue {
        column
            .and_then(|idx| self.cells.get(idx))
            .unwrap_or(&EMPTY_CELL)
    }
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Treat the first row of `range` as the header.
    pub fn from_range(range: &Range<Data>) -> Self {
        let mut iter = range.rows();
        let headers = iter
            .next()
            .map(|row| {
                row.iter()
                    .map(|cell| CellValue::from_data(cell).as_str().to_string())
                    .collect()
            })
            .unwrap_or_default();
        let rows = iter
            .map(|row| row.iter().map(CellValue::from_data).collect())
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Index of the first column labelled exactly `label`.
    pub fn column(&self, label: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == label)
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row { cells })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parse an attachment as a spreadsheet (xls, xlsx, xlsb or ods).
pub fn parse_workbook(data: &[u8]) -> Result<Table, TabularError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| TabularError::Open(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TabularError::NoWorksheet)?
        .map_err(|e| TabularError::Worksheet(e.to_string()))?;

    Ok(Table::from_range(&range))
}

/// Which template a table follows, with the column indexes it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularSchema {
    CharBased {
        instruction: usize,
        hostname: Option<usize>,
    },
    GuiBased {
        code: usize,
        platform: Option<usize>,
    },
}

impl TabularSchema {
    /// Inspect the header. `None` means neither template applies.
    pub fn detect(table: &Table) -> Option<Self> {
        if let Some(instruction) = table.column(INSTRUCTION_COLUMN) {
            return Some(Self::CharBased {
                instruction,
                hostname: table.column(HOSTNAME_COLUMN),
            });
        }
        table
            .column(INSTRUCTION_CODE_COLUMN)
            .map(|code| Self::GuiBased {
                code,
                platform: table.column(PLATFORM_COLUMN),
            })
    }

    pub fn attachment_type(&self) -> AttachmentType {
        match self {
            Self::CharBased { .. } => AttachmentType::ExcelCharBased,
            Self::GuiBased { .. } => AttachmentType::ExcelGuiBased,
        }
    }

    /// Run the template's extractor over every row.
    pub fn extract(&self, table: &Table, source: &str, placeholder: &str) -> Vec<CommandGroup> {
        match *self {
            Self::CharBased {
                instruction,
                hostname,
            } => extract_char_based(table, instruction, hostname, source, placeholder),
            Self::GuiBased { code, platform } => {
                extract_gui_based(table, code, platform, source, placeholder)
            }
        }
    }
}

/// Split a multi-line cell into trimmed, non-empty commands.
pub fn split_commands(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|cmd| !cmd.is_empty())
        .map(String::from)
        .collect()
}

fn extract_char_based(
    table: &Table,
    instruction: usize,
    hostname: Option<usize>,
    source: &str,
    placeholder: &str,
) -> Vec<CommandGroup> {
    table
        .rows()
        .filter_map(|row| {
            let commands = split_commands(row.cell(Some(instruction)).as_str());
            let host = row.cell(hostname).non_blank().unwrap_or(placeholder);
            CommandGroup::new(
                source,
                AttachmentType::ExcelCharBased,
                Some(format!("{HOST_LABEL}: {host}")),
                commands,
            )
        })
        .collect()
}

fn extract_gui_based(
    table: &Table,
    code: usize,
    platform: Option<usize>,
    source: &str,
    placeholder: &str,
) -> Vec<CommandGroup> {
    table
        .rows()
        .filter_map(|row| {
            let op_code = row.cell(Some(code)).non_blank()?;
            let platform_name = row.cell(platform).non_blank().unwrap_or(placeholder);
            CommandGroup::new(
                source,
                AttachmentType::ExcelGuiBased,
                Some(format!("{PLATFORM_LABEL}: {platform_name}")),
                vec![op_code.to_string()],
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/tabular_tests.rs"]
mod tests;
