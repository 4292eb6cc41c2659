//! Ingestion pipeline and field-settings attacher
//!
//! Two passes over the validated sheet. The pipeline resolves every row
//! into created-or-reused templates and fields; the attacher then binds
//! each field's per-template setting. Attachment only starts after all
//! rows are ingested, so a template may reference a field created by a
//! later row in the same file.

pub mod attach;
pub mod pipeline;

pub use attach::attach_field_settings;
pub use pipeline::Pipeline;

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory catalog for pipeline and attacher tests

    use std::cell::RefCell;

    use crate::catalog::{
        Catalog, CatalogError, CreateFieldRequest, CreateTemplateRequest, FieldSettingRequest,
        RemoteField, RemoteTemplate,
    };

    /// Records every mutation; lookups serve the seeded remote state
    #[derive(Default)]
    pub struct FakeCatalog {
        pub templates: Vec<RemoteTemplate>,
        pub fields: Vec<RemoteField>,
        pub created_templates: RefCell<Vec<CreateTemplateRequest>>,
        pub created_fields: RefCell<Vec<CreateFieldRequest>>,
        pub attached: RefCell<Vec<(String, String, FieldSettingRequest)>>,
        next_id: RefCell<usize>,
    }

    impl FakeCatalog {
        pub fn with_remote(templates: Vec<RemoteTemplate>, fields: Vec<RemoteField>) -> Self {
            Self {
                templates,
                fields,
                ..Self::default()
            }
        }

        fn assign_id(&self, prefix: &str) -> String {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            format!("{prefix}{next}")
        }
    }

    impl Catalog for FakeCatalog {
        fn list_templates(&self) -> Result<Vec<RemoteTemplate>, CatalogError> {
            Ok(self.templates.clone())
        }

        fn list_fields(&self) -> Result<Vec<RemoteField>, CatalogError> {
            Ok(self.fields.clone())
        }

        fn create_template(
            &self,
            request: &CreateTemplateRequest,
        ) -> Result<String, CatalogError> {
            self.created_templates.borrow_mut().push(request.clone());
            Ok(self.assign_id("mt"))
        }

        fn create_field(&self, request: &CreateFieldRequest) -> Result<String, CatalogError> {
            self.created_fields.borrow_mut().push(request.clone());
            Ok(self.assign_id("f"))
        }

        fn attach_field_setting(
            &self,
            template_id: &str,
            field_id: &str,
            setting: &FieldSettingRequest,
        ) -> Result<(), CatalogError> {
            self.attached.borrow_mut().push((
                template_id.to_string(),
                field_id.to_string(),
                setting.clone(),
            ));
            Ok(())
        }
    }
}
