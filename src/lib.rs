//! merit-bulk: Bulk Template Creator for Merit organizations
//!
//! Acts on a Merit organization as a registered app to create merit
//! templates and fields in bulk from a rigidly formatted CSV. Existing
//! fields are matched by name and reused rather than recreated.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod entities;
pub mod ingest;
pub mod sheet;
