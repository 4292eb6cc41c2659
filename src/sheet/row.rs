//! Typed row decoder
//!
//! Turns a validated data record into a [`Template`] carrying its field
//! occurrences in column order. Field groups whose name cell is blank are
//! skipped entirely: no entity is built and no remote call will be made for
//! them.

use csv::StringRecord;

use crate::entities::{CoverPhoto, Field, FieldSetting, FieldType, Template};
use crate::sheet::header::{GROUP_COLUMNS, TEMPLATE_COLUMNS};
use crate::sheet::validate::SheetError;

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// Decode one data record into a template entity
///
/// `row` is the 1-based row number, used only for error reporting. Records
/// are expected to have passed [`validate`](crate::sheet::validate), so the
/// error paths here only fire on cells that validation would have rejected.
pub fn decode(row: usize, record: &StringRecord) -> Result<Template, SheetError> {
    let cover_photo = if cell(record, 3).is_empty() {
        None
    } else {
        Some(CoverPhoto {
            id: cell(record, 3).to_string(),
            file_name: cell(record, 4).to_string(),
        })
    };

    let mut fields = Vec::new();
    let mut base = TEMPLATE_COLUMNS;
    while base + GROUP_COLUMNS <= record.len() {
        if !cell(record, base).is_empty() {
            fields.push(decode_group(row, record, base)?);
        }
        base += GROUP_COLUMNS;
    }

    Ok(Template {
        id: String::new(),
        title: cell(record, 0).to_string(),
        description: cell(record, 1).to_string(),
        can_only_be_sent_once: parse_bool(
            row,
            3,
            "meritTemplate.canOnlyBeSentOnce",
            cell(record, 2),
        )?,
        cover_photo,
        fields,
    })
}

fn decode_group(row: usize, record: &StringRecord, base: usize) -> Result<Field, SheetError> {
    let type_cell = cell(record, base + 1);
    let field_type =
        FieldType::parse_exact(type_cell).ok_or_else(|| SheetError::UnknownFieldType {
            row,
            column: base + 2,
            value: type_cell.to_string(),
        })?;

    let value_cell = cell(record, base + 5);
    let new_value_for_all_merits = if value_cell.is_empty() {
        None
    } else {
        Some(value_cell.to_string())
    };

    Ok(Field {
        id: String::new(),
        name: cell(record, base).to_string(),
        field_type,
        description: cell(record, base + 2).to_string(),
        setting: FieldSetting {
            new_enabled: parse_bool(row, base + 4, "field.newEnabled", cell(record, base + 3))?,
            new_required: parse_bool(row, base + 5, "field.newRequired", cell(record, base + 4))?,
            new_value_for_all_merits,
        },
    })
}

fn parse_bool(
    row: usize,
    column: usize,
    name: &'static str,
    raw: &str,
) -> Result<bool, SheetError> {
    match raw {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(SheetError::NotBoolean { row, column, name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: Vec<&str>) -> StringRecord {
        StringRecord::from(cells)
    }

    #[test]
    fn test_decode_template_cells() {
        let rec = record(vec!["Onboarding", "New hires", "TRUE", "", ""]);
        let template = decode(2, &rec).unwrap();
        assert_eq!(template.id, "");
        assert_eq!(template.title, "Onboarding");
        assert_eq!(template.description, "New hires");
        assert!(template.can_only_be_sent_once);
        assert!(template.cover_photo.is_none());
        assert!(template.fields.is_empty());
    }

    #[test]
    fn test_blank_cover_photo_id_yields_no_cover_photo() {
        let rec = record(vec!["T", "D", "FALSE", "", "ignored.png"]);
        let template = decode(2, &rec).unwrap();
        assert!(template.cover_photo.is_none());
    }

    #[test]
    fn test_cover_photo_carries_id_and_file_name() {
        let id = "a".repeat(24);
        let rec = record(vec!["T", "D", "FALSE", id.as_str(), "photo.png"]);
        let template = decode(2, &rec).unwrap();
        let cover = template.cover_photo.unwrap();
        assert_eq!(cover.id, id);
        assert_eq!(cover.file_name, "photo.png");
    }

    #[test]
    fn test_field_groups_decode_in_column_order() {
        let rec = record(vec![
            "T", "D", "FALSE", "", "", // template
            "FullName", "Name", "Legal name", "TRUE", "TRUE", "", // group 1
            "Notes", "LongText", "Free notes", "TRUE", "FALSE", "n/a", // group 2
        ]);
        let template = decode(2, &rec).unwrap();
        assert_eq!(template.fields.len(), 2);

        let first = &template.fields[0];
        assert_eq!(first.name, "FullName");
        assert_eq!(first.field_type, FieldType::Name);
        assert!(first.setting.new_enabled);
        assert!(first.setting.new_required);
        assert_eq!(first.setting.new_value_for_all_merits, None);

        let second = &template.fields[1];
        assert_eq!(second.name, "Notes");
        assert_eq!(second.field_type, FieldType::LongText);
        assert!(!second.setting.new_required);
        assert_eq!(
            second.setting.new_value_for_all_merits.as_deref(),
            Some("n/a")
        );
    }

    #[test]
    fn test_blank_name_group_is_skipped() {
        let rec = record(vec![
            "T", "D", "FALSE", "", "", // template
            "", "", "", "", "", "", // blank group
            "Notes", "LongText", "Free notes", "TRUE", "FALSE", "", // real group
        ]);
        let template = decode(2, &rec).unwrap();
        assert_eq!(template.fields.len(), 1);
        assert_eq!(template.fields[0].name, "Notes");
    }
}
