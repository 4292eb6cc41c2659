//! CLI command implementations

pub mod completions;
pub mod run;
pub mod template;
pub mod validate;
