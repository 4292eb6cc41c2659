//! Field-settings attacher
//!
//! Second pass: one attach call per field per template, in row order then
//! column order. `progress` is invoked after every call with (done, total).

use crate::catalog::{Catalog, CatalogError, FieldSettingRequest};
use crate::entities::Template;

/// Total number of attach calls a run will make
pub fn total_settings(templates: &[Template]) -> usize {
    templates.iter().map(|t| t.fields.len()).sum()
}

/// Bind every field's per-template setting
pub fn attach_field_settings<C: Catalog>(
    catalog: &C,
    templates: &[Template],
    mut progress: impl FnMut(usize, usize),
) -> Result<(), CatalogError> {
    let total = total_settings(templates);
    let mut done = 0;

    for template in templates {
        for field in &template.fields {
            catalog.attach_field_setting(
                &template.id,
                &field.id,
                &FieldSettingRequest {
                    new_enabled: field.setting.new_enabled,
                    new_required: field.setting.new_required,
                    new_value_for_all_merits: field.setting.new_value_for_all_merits.clone(),
                },
            )?;
            done += 1;
            progress(done, total);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Field, FieldSetting, FieldType};
    use crate::ingest::fake::FakeCatalog;

    fn resolved_field(id: &str, value: Option<&str>) -> Field {
        Field {
            id: id.to_string(),
            name: format!("{id}-name"),
            field_type: FieldType::ShortText,
            description: String::new(),
            setting: FieldSetting {
                new_enabled: true,
                new_required: false,
                new_value_for_all_merits: value.map(str::to_string),
            },
        }
    }

    fn resolved_template(id: &str, fields: Vec<Field>) -> Template {
        Template {
            id: id.to_string(),
            title: format!("{id}-title"),
            description: String::new(),
            can_only_be_sent_once: false,
            cover_photo: None,
            fields,
        }
    }

    #[test]
    fn test_one_attach_call_per_field_in_order() {
        let catalog = FakeCatalog::default();
        let templates = vec![
            resolved_template("mt1", vec![resolved_field("f1", None), resolved_field("f2", None)]),
            resolved_template("mt2", vec![resolved_field("f1", None)]),
        ];

        attach_field_settings(&catalog, &templates, |_, _| {}).unwrap();

        let attached = catalog.attached.borrow();
        let pairs: Vec<(String, String)> = attached
            .iter()
            .map(|(t, f, _)| (t.clone(), f.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("mt1".to_string(), "f1".to_string()),
                ("mt1".to_string(), "f2".to_string()),
                ("mt2".to_string(), "f1".to_string()),
            ]
        );
    }

    #[test]
    fn test_value_for_all_merits_forwarded_only_when_present() {
        let catalog = FakeCatalog::default();
        let templates = vec![resolved_template(
            "mt1",
            vec![
                resolved_field("f1", Some("2024 cohort")),
                resolved_field("f2", None),
            ],
        )];

        attach_field_settings(&catalog, &templates, |_, _| {}).unwrap();

        let attached = catalog.attached.borrow();
        assert_eq!(
            attached[0].2.new_value_for_all_merits.as_deref(),
            Some("2024 cohort")
        );
        assert_eq!(attached[1].2.new_value_for_all_merits, None);
    }

    #[test]
    fn test_progress_reports_every_call() {
        let catalog = FakeCatalog::default();
        let templates = vec![resolved_template(
            "mt1",
            vec![resolved_field("f1", None), resolved_field("f2", None)],
        )];

        let mut seen = Vec::new();
        attach_field_settings(&catalog, &templates, |done, total| seen.push((done, total)))
            .unwrap();
        assert_eq!(seen, vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_template_without_fields_makes_no_calls() {
        let catalog = FakeCatalog::default();
        let templates = vec![resolved_template("mt1", vec![])];
        attach_field_settings(&catalog, &templates, |_, _| {}).unwrap();
        assert!(catalog.attached.borrow().is_empty());
    }
}
