//! Typed column model for the 215-column sheet layout
//!
//! All positional arithmetic for the repeating 6-column field group lives
//! here, so the validator and row decoder work with named columns instead
//! of raw indices.

/// Columns describing the template itself
pub const TEMPLATE_COLUMNS: usize = 5;

/// Columns in one repeated field group
pub const GROUP_COLUMNS: usize = 6;

/// Maximum number of field groups per row
pub const MAX_FIELD_GROUPS: usize = 35;

/// Total width of the canonical header row
pub const TOTAL_COLUMNS: usize = TEMPLATE_COLUMNS + MAX_FIELD_GROUPS * GROUP_COLUMNS;

/// What a given column position means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    TemplateDescription,
    CanOnlyBeSentOnce,
    CoverPhotoId,
    CoverPhotoFileName,
    FieldName,
    FieldType,
    FieldDescription,
    NewEnabled,
    NewRequired,
    NewValueForAllMerits,
}

impl Column {
    /// Resolve a 0-based column index to its meaning
    pub fn at(index: usize) -> Option<Column> {
        if index >= TOTAL_COLUMNS {
            return None;
        }
        match index {
            0 => Some(Column::Title),
            1 => Some(Column::TemplateDescription),
            2 => Some(Column::CanOnlyBeSentOnce),
            3 => Some(Column::CoverPhotoId),
            4 => Some(Column::CoverPhotoFileName),
            _ => match (index - TEMPLATE_COLUMNS) % GROUP_COLUMNS {
                0 => Some(Column::FieldName),
                1 => Some(Column::FieldType),
                2 => Some(Column::FieldDescription),
                3 => Some(Column::NewEnabled),
                4 => Some(Column::NewRequired),
                _ => Some(Column::NewValueForAllMerits),
            },
        }
    }

    /// The exact header text for this column
    pub fn label(&self) -> &'static str {
        match self {
            Column::Title => "meritTemplate.title",
            Column::TemplateDescription => "meritTemplate.description",
            Column::CanOnlyBeSentOnce => "meritTemplate.canOnlyBeSentOnce",
            Column::CoverPhotoId => "meritTemplate.coverPhotoId",
            Column::CoverPhotoFileName => "meritTemplate.coverPhotoFileName",
            Column::FieldName => "field.name",
            Column::FieldType => "field.fieldType",
            Column::FieldDescription => "field.description",
            Column::NewEnabled => "field.newEnabled",
            Column::NewRequired => "field.newRequired",
            Column::NewValueForAllMerits => "field.newValueForAllMerits",
        }
    }

    /// Whether a blank cell is allowed in this column
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Column::CoverPhotoId | Column::CoverPhotoFileName | Column::NewValueForAllMerits
        )
    }
}

/// The canonical 215-entry header row, in order
pub fn canonical_header() -> Vec<&'static str> {
    let mut header = Vec::with_capacity(TOTAL_COLUMNS);
    for index in 0..TOTAL_COLUMNS {
        // index < TOTAL_COLUMNS, so at() always resolves
        if let Some(column) = Column::at(index) {
            header.push(column.label());
        }
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_header_width() {
        assert_eq!(canonical_header().len(), 215);
    }

    #[test]
    fn test_template_columns_come_first() {
        let header = canonical_header();
        assert_eq!(header[0], "meritTemplate.title");
        assert_eq!(header[4], "meritTemplate.coverPhotoFileName");
        assert_eq!(header[5], "field.name");
        assert_eq!(header[10], "field.newValueForAllMerits");
        assert_eq!(header[11], "field.name");
        assert_eq!(header[214], "field.newValueForAllMerits");
    }

    #[test]
    fn test_group_arithmetic() {
        // last group starts at 5 + 34 * 6 = 209
        assert_eq!(Column::at(209), Some(Column::FieldName));
        assert_eq!(Column::at(214), Some(Column::NewValueForAllMerits));
        assert_eq!(Column::at(215), None);
    }

    #[test]
    fn test_optional_columns() {
        assert!(Column::CoverPhotoId.is_optional());
        assert!(Column::CoverPhotoFileName.is_optional());
        assert!(Column::NewValueForAllMerits.is_optional());
        assert!(!Column::Title.is_optional());
        assert!(!Column::FieldName.is_optional());
    }
}
