//! Template entity type

use crate::entities::Field;

/// Optional cover photo reference on a template
///
/// `id` is a 24-character asset id validated by the sheet validator. When a
/// row has no cover photo id, no `CoverPhoto` is constructed and the create
/// payload carries no `coverPhoto` object at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverPhoto {
    pub id: String,
    pub file_name: String,
}

/// A merit template, built from one CSV data row
///
/// `title` is the exact-match reconciliation key against the organization's
/// existing templates. On a title hit the entity adopts the remote `id` and
/// no remote mutation happens; otherwise a create call assigns `id`.
#[derive(Debug, Clone)]
pub struct Template {
    /// Remote identity; empty until resolved or created
    pub id: String,

    /// Max 60 chars, case-sensitive dedup key
    pub title: String,

    /// Max 160 chars
    pub description: String,

    pub can_only_be_sent_once: bool,

    pub cover_photo: Option<CoverPhoto>,

    /// Field occurrences in CSV column order, max 35
    pub fields: Vec<Field>,
}
