//! Field entity type

use serde::{Deserialize, Serialize};

/// Merit field type
///
/// Serialized exactly as the variant name on the wire and in the CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    ShortText,
    LongText,
    Date,
    Checkbox,
    Documents,
    Photos,
    Videos,
    Name,
}

impl FieldType {
    /// All accepted field types, in the order they are documented
    pub const ALL: [FieldType; 8] = [
        FieldType::ShortText,
        FieldType::LongText,
        FieldType::Date,
        FieldType::Checkbox,
        FieldType::Documents,
        FieldType::Photos,
        FieldType::Videos,
        FieldType::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::ShortText => "ShortText",
            FieldType::LongText => "LongText",
            FieldType::Date => "Date",
            FieldType::Checkbox => "Checkbox",
            FieldType::Documents => "Documents",
            FieldType::Photos => "Photos",
            FieldType::Videos => "Videos",
            FieldType::Name => "Name",
        }
    }

    /// Parse the exact CSV spelling. No case folding: `shorttext` is rejected.
    pub fn parse_exact(s: &str) -> Option<FieldType> {
        FieldType::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-template behavior of a field, bound by the attach pass
///
/// These values are local to one field occurrence in one CSV row. They are
/// never part of the field's organization-wide identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSetting {
    pub new_enabled: bool,
    pub new_required: bool,
    /// Omitted from the attach payload when the CSV cell was blank
    pub new_value_for_all_merits: Option<String>,
}

/// An organization field occurrence within one template row
///
/// `id`, `field_type`, and `description` are organization-global: when the
/// field name matches an existing remote field, the remote values replace
/// whatever the CSV supplied. `setting` stays local to this occurrence.
#[derive(Debug, Clone)]
pub struct Field {
    /// Remote identity; empty until resolved or created
    pub id: String,

    /// Exact-match reconciliation key, case-sensitive, max 35 chars
    pub name: String,

    pub field_type: FieldType,

    pub description: String,

    /// Per-template override attributes for the attach pass
    pub setting: FieldSetting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_accepts_all_variants() {
        for t in FieldType::ALL {
            assert_eq!(FieldType::parse_exact(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_parse_exact_is_case_sensitive() {
        assert_eq!(FieldType::parse_exact("shorttext"), None);
        assert_eq!(FieldType::parse_exact("NAME"), None);
        assert_eq!(FieldType::parse_exact(""), None);
    }

    #[test]
    fn test_wire_serialization_matches_csv_spelling() {
        let json = serde_json::to_string(&FieldType::ShortText).unwrap();
        assert_eq!(json, "\"ShortText\"");
    }
}
