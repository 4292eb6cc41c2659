//! Entity type definitions
//!
//! One [`Template`] is built per CSV data row, carrying its [`Field`]
//! occurrences in column order. Identity (`id`) is empty until the entity
//! has been resolved against the organization or created remotely.

pub mod field;
pub mod template;

pub use field::{Field, FieldSetting, FieldType};
pub use template::{CoverPhoto, Template};
