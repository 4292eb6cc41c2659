//! Row-by-row reconciliation against the organization snapshot
//!
//! Matching is by case-sensitive exact string equality on field name and
//! template title, first match wins. No case folding and no whitespace
//! normalization: two titles differing only in trailing whitespace are two
//! different templates.

use crate::catalog::types::CoverPhotoPayload;
use crate::catalog::{
    Catalog, CatalogError, CreateFieldRequest, CreateTemplateRequest, RemoteField, RemoteTemplate,
};
use crate::entities::{Field, FieldType, Template};

/// Resolves templates and fields against the remote catalog, creating what
/// is missing
///
/// The snapshot is fetched once at construction. The fields list grows as
/// fields are created, so later rows in the run reuse them. The templates
/// list is never appended to: two rows with the same new title in one file
/// create two remote templates.
pub struct Pipeline<'a, C: Catalog> {
    catalog: &'a C,
    org_id: String,
    templates: Vec<RemoteTemplate>,
    fields: Vec<RemoteField>,
}

impl<'a, C: Catalog> Pipeline<'a, C> {
    /// Fetch the organization snapshot and build a pipeline over it
    pub fn new(catalog: &'a C, org_id: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog,
            org_id: org_id.to_string(),
            templates: catalog.list_templates()?,
            fields: catalog.list_fields()?,
        })
    }

    /// Number of templates the snapshot held when it was taken
    pub fn known_templates(&self) -> usize {
        self.templates.len()
    }

    /// Number of fields currently known, including ones created this run
    pub fn known_fields(&self) -> usize {
        self.fields.len()
    }

    /// Resolve one row: fields first, then the template itself
    ///
    /// On success the returned template and all its fields carry remote ids.
    pub fn ingest(&mut self, mut template: Template) -> Result<Template, CatalogError> {
        for field in &mut template.fields {
            self.resolve_field(field)?;
        }
        self.resolve_template(&mut template)?;
        Ok(template)
    }

    fn resolve_field(&mut self, field: &mut Field) -> Result<(), CatalogError> {
        if let Some(existing) = self.fields.iter().find(|f| f.field_name == field.name) {
            // field identity is organization-global; remote wins over the CSV
            field.id = existing.id.clone();
            field.description = existing.description.clone();
            if let Some(remote_type) = FieldType::parse_exact(&existing.field_type) {
                field.field_type = remote_type;
            }
            return Ok(());
        }

        let id = self.catalog.create_field(&CreateFieldRequest {
            org_id: self.org_id.clone(),
            name: field.name.clone(),
            description: field.description.clone(),
            field_type: field.field_type,
        })?;
        field.id = id.clone();
        // append before any later lookup so the rest of the run reuses it
        self.fields.push(RemoteField {
            id,
            field_name: field.name.clone(),
            field_type: field.field_type.as_str().to_string(),
            description: field.description.clone(),
        });
        Ok(())
    }

    fn resolve_template(&mut self, template: &mut Template) -> Result<(), CatalogError> {
        if let Some(existing) = self.templates.iter().find(|t| t.title == template.title) {
            // adopt the id only; the remote description and flags stay as they are
            template.id = existing.id.clone();
            return Ok(());
        }

        template.id = self.catalog.create_template(&CreateTemplateRequest {
            org_id: self.org_id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            can_only_be_sent_once: template.can_only_be_sent_once,
            cover_photo: template.cover_photo.as_ref().map(|c| CoverPhotoPayload {
                id: c.id.clone(),
                file_name: c.file_name.clone(),
            }),
        })?;
        Ok(())
    }
}
