//! Sheet validation with row/column error reporting
//!
//! The whole file is checked before any network call is made, and the first
//! violation aborts validation. Rows and columns in error messages are
//! 1-based, matching what the operator sees in a spreadsheet program.

use csv::{ReaderBuilder, StringRecord};
use miette::Diagnostic;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

use crate::entities::FieldType;
use crate::sheet::header::{Column, GROUP_COLUMNS, TEMPLATE_COLUMNS, TOTAL_COLUMNS};

const MAX_TITLE: usize = 60;
const MAX_DESCRIPTION: usize = 160;
const MAX_FIELD_NAME: usize = 35;
const MAX_FILE_NAME: usize = 160;
const COVER_PHOTO_ID_LEN: usize = 24;

/// A violation of the sheet schema
#[derive(Debug, Error, Diagnostic)]
pub enum SheetError {
    #[error("failed to open CSV file: {0}")]
    #[diagnostic(code(meritbulk::sheet::io))]
    Io(#[from] std::io::Error),

    #[error("failed to read CSV file: {0}")]
    #[diagnostic(code(meritbulk::sheet::csv))]
    Csv(#[from] csv::Error),

    #[error("the file is empty; expected a header row followed by data rows")]
    #[diagnostic(code(meritbulk::sheet::empty))]
    Empty,

    #[error("header row has {found} columns, expected 215")]
    #[diagnostic(
        code(meritbulk::sheet::header),
        help("the header must list all 215 columns exactly, even when fewer than 35 field groups are used; `meritbulk template` prints the canonical header")
    )]
    HeaderWidth { found: usize },

    #[error("header mismatch at column {column}: expected `{expected}`, found `{found}`")]
    #[diagnostic(
        code(meritbulk::sheet::header),
        help("`meritbulk template` prints the canonical header row")
    )]
    HeaderMismatch {
        column: usize,
        expected: &'static str,
        found: String,
    },

    #[error("row {row} has {found} cells; a data row carries 5 template cells plus complete 6-cell field groups (at most 215 cells)")]
    #[diagnostic(code(meritbulk::sheet::row_shape))]
    RowShape { row: usize, found: usize },

    #[error("row {row}, column {column} ({name}): this cell cannot be blank")]
    #[diagnostic(code(meritbulk::sheet::blank_cell))]
    BlankCell {
        row: usize,
        column: usize,
        name: &'static str,
    },

    #[error("row {row}, column {column} ({name}): value is {len} characters, the maximum is {max}")]
    #[diagnostic(code(meritbulk::sheet::too_long))]
    TooLong {
        row: usize,
        column: usize,
        name: &'static str,
        len: usize,
        max: usize,
    },

    #[error("row {row}, column {column} ({name}): value must be exactly TRUE or FALSE")]
    #[diagnostic(code(meritbulk::sheet::not_boolean))]
    NotBoolean {
        row: usize,
        column: usize,
        name: &'static str,
    },

    #[error("row {row}, column {column} (field.fieldType): `{value}` is not a field type")]
    #[diagnostic(
        code(meritbulk::sheet::field_type),
        help("expected exactly one of: ShortText, LongText, Date, Checkbox, Documents, Photos, Videos, Name")
    )]
    UnknownFieldType {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("row {row}, column {column} (meritTemplate.coverPhotoId): cover photo ids are exactly 24 characters, found {len}")]
    #[diagnostic(code(meritbulk::sheet::cover_photo_id))]
    CoverPhotoIdLength {
        row: usize,
        column: usize,
        len: usize,
    },
}

/// Read every record of a CSV file, header row included
///
/// Rows are read flexibly; shape is enforced by [`validate`], not the
/// reader, so shape problems surface with a row number instead of a parse
/// error.
pub fn load(path: &Path) -> Result<Vec<StringRecord>, SheetError> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in rdr.records() {
        records.push(result?);
    }
    Ok(records)
}

/// Validate a loaded sheet, stopping at the first violation
pub fn validate(records: &[StringRecord]) -> Result<(), SheetError> {
    let header = records.first().ok_or(SheetError::Empty)?;
    validate_header(header)?;

    for (index, record) in records.iter().enumerate().skip(1) {
        validate_record(index + 1, record)?;
    }
    Ok(())
}

fn validate_header(header: &StringRecord) -> Result<(), SheetError> {
    if header.len() != TOTAL_COLUMNS {
        return Err(SheetError::HeaderWidth {
            found: header.len(),
        });
    }
    for (index, cell) in header.iter().enumerate() {
        let Some(column) = Column::at(index) else {
            continue;
        };
        if cell != column.label() {
            return Err(SheetError::HeaderMismatch {
                column: index + 1,
                expected: column.label(),
                found: cell.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_record(row: usize, record: &StringRecord) -> Result<(), SheetError> {
    let width = record.len();
    let ragged = width < TEMPLATE_COLUMNS
        || width > TOTAL_COLUMNS
        || (width - TEMPLATE_COLUMNS) % GROUP_COLUMNS != 0;
    if ragged {
        return Err(SheetError::RowShape { row, found: width });
    }

    for (index, cell) in record.iter().enumerate() {
        let Some(column) = Column::at(index) else {
            continue;
        };
        validate_cell(row, index + 1, column, cell)?;
    }
    Ok(())
}

fn validate_cell(row: usize, column: usize, kind: Column, cell: &str) -> Result<(), SheetError> {
    if cell.is_empty() {
        if kind.is_optional() {
            return Ok(());
        }
        return Err(SheetError::BlankCell {
            row,
            column,
            name: kind.label(),
        });
    }

    match kind {
        Column::Title => check_len(row, column, kind, cell, MAX_TITLE),
        Column::TemplateDescription | Column::FieldDescription => {
            check_len(row, column, kind, cell, MAX_DESCRIPTION)
        }
        Column::CoverPhotoFileName => check_len(row, column, kind, cell, MAX_FILE_NAME),
        Column::FieldName => check_len(row, column, kind, cell, MAX_FIELD_NAME),
        Column::CanOnlyBeSentOnce | Column::NewEnabled | Column::NewRequired => {
            if cell == "TRUE" || cell == "FALSE" {
                Ok(())
            } else {
                Err(SheetError::NotBoolean {
                    row,
                    column,
                    name: kind.label(),
                })
            }
        }
        Column::FieldType => {
            if FieldType::parse_exact(cell).is_some() {
                Ok(())
            } else {
                Err(SheetError::UnknownFieldType {
                    row,
                    column,
                    value: cell.to_string(),
                })
            }
        }
        Column::CoverPhotoId => {
            let len = cell.chars().count();
            if len == COVER_PHOTO_ID_LEN {
                Ok(())
            } else {
                Err(SheetError::CoverPhotoIdLength { row, column, len })
            }
        }
        Column::NewValueForAllMerits => Ok(()),
    }
}

fn check_len(
    row: usize,
    column: usize,
    kind: Column,
    cell: &str,
    max: usize,
) -> Result<(), SheetError> {
    let len = cell.chars().count();
    if len > max {
        return Err(SheetError::TooLong {
            row,
            column,
            name: kind.label(),
            len,
            max,
        });
    }
    Ok(())
}
