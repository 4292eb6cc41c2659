//! Remote catalog client
//!
//! Thin contract over the Merit HTTP API: list templates, list fields,
//! create a template, create a field, attach a field setting. All calls are
//! synchronous blocking HTTPS with bearer-token auth. The [`Catalog`] trait
//! is the seam between the ingestion pipeline and the wire, so the pipeline
//! can be exercised against an in-memory catalog in tests.

pub mod auth;
pub mod http;
pub mod types;

use miette::Diagnostic;
use thiserror::Error;

pub use auth::{AuthState, Authenticator};
pub use http::HttpCatalog;
pub use types::{
    CreateFieldRequest, CreateTemplateRequest, FieldSettingRequest, RemoteField, RemoteTemplate,
};

/// Errors from remote catalog operations
///
/// Every variant is fatal for the run: there is no retry and no rollback of
/// entities already created. Re-running the same file is safe because
/// reconciliation is by name.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("request to {endpoint} failed: {source}")]
    #[diagnostic(code(meritbulk::catalog::transport))]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    #[diagnostic(
        code(meritbulk::catalog::status),
        help("the run stops at the first failed call; templates and fields already created are matched by name and reused on a re-run")
    )]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {endpoint}: {detail}")]
    #[diagnostic(code(meritbulk::catalog::response))]
    UnexpectedResponse {
        endpoint: &'static str,
        detail: String,
    },
}

/// Error bodies are clipped to this many characters in messages
pub(crate) const BODY_SNIPPET_LEN: usize = 200;

/// Clip an error body for inclusion in a diagnostic
pub(crate) fn body_snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

/// The remote operations the pipeline and attacher depend on
pub trait Catalog {
    /// All templates in the organization, in server order
    fn list_templates(&self) -> Result<Vec<RemoteTemplate>, CatalogError>;

    /// All organization fields
    fn list_fields(&self) -> Result<Vec<RemoteField>, CatalogError>;

    /// Create a template; returns the assigned id
    fn create_template(&self, request: &CreateTemplateRequest) -> Result<String, CatalogError>;

    /// Create an organization field; returns the assigned id
    fn create_field(&self, request: &CreateFieldRequest) -> Result<String, CatalogError>;

    /// Bind a field to a template with per-template behavior
    ///
    /// Idempotent on the server: re-attaching replaces the prior setting.
    fn attach_field_setting(
        &self,
        template_id: &str,
        field_id: &str,
        setting: &FieldSettingRequest,
    ) -> Result<(), CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_snippet_clips_long_bodies() {
        let long = "x".repeat(BODY_SNIPPET_LEN + 50);
        assert_eq!(body_snippet(&long).chars().count(), BODY_SNIPPET_LEN);
        assert_eq!(body_snippet("short"), "short");
    }
}
