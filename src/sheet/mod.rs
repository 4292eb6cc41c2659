//! CSV sheet schema
//!
//! The input file is a fixed 215-column positional schema: 5 template
//! columns followed by 35 repetitions of a 6-column field group. Data rows
//! may be ragged (unused trailing groups absent), but every group that is
//! present must be complete.

pub mod header;
pub mod row;
pub mod validate;

pub use header::{
    canonical_header, Column, GROUP_COLUMNS, MAX_FIELD_GROUPS, TEMPLATE_COLUMNS, TOTAL_COLUMNS,
};
pub use validate::{load, validate, SheetError};
