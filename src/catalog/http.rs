//! Blocking HTTP implementation of the catalog contract

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::catalog::types::{Created, FieldsPage, TemplatesPage};
use crate::catalog::{
    body_snippet, Catalog, CatalogError, CreateFieldRequest, CreateTemplateRequest,
    FieldSettingRequest, RemoteField, RemoteTemplate,
};

/// Templates are listed in pages of this size, following the after-cursor
const TEMPLATE_PAGE_LIMIT: usize = 100;

/// Fields are listed as a single page of this size
const FIELDS_PAGE_LIMIT: usize = 500;

/// Catalog client for one organization on one environment
///
/// Holds everything a call needs explicitly: base URL, org, bearer token.
/// There is no ambient session state.
pub struct HttpCatalog {
    http: Client,
    base_url: String,
    org_id: String,
    token: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, org_id: &str, token: &str) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .build()
            .map_err(|source| CatalogError::Transport {
                endpoint: "client setup",
                source,
            })?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
            org_id: org_id.to_string(),
            token: token.to_string(),
        })
    }

    /// One page of the templates listing; the cursor is query-encoded
    fn templates_request(&self, after: Option<&str>) -> RequestBuilder {
        let url = format!("{}orgs/{}/merittemplates", self.base_url, self.org_id);
        let mut request = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("limit", TEMPLATE_PAGE_LIMIT)]);
        if let Some(cursor) = after {
            request = request.query(&[("starting_after", cursor)]);
        }
        request
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &'static str, url: &str) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|source| CatalogError::Transport { endpoint, source })?;
        parse_json(endpoint, response)
    }

    fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T, CatalogError> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .map_err(|source| CatalogError::Transport { endpoint, source })?;
        parse_json(endpoint, response)
    }
}

/// Follow the after-cursor until the listing is exhausted
///
/// `fetch` serves one page per call, given the cursor to resume from. A
/// page claiming more data without carrying a cursor is a fatal shape
/// error: silently returning partial data is not an option here.
fn collect_template_pages<F>(mut fetch: F) -> Result<Vec<RemoteTemplate>, CatalogError>
where
    F: FnMut(Option<&str>) -> Result<TemplatesPage, CatalogError>,
{
    let mut all = Vec::new();
    let mut after: Option<String> = None;
    loop {
        let page = fetch(after.as_deref())?;
        all.extend(page.merittemplates);

        if !page.paging.page_info.has_next_page {
            return Ok(all);
        }
        after = Some(page.paging.cursors.after.ok_or_else(|| {
            CatalogError::UnexpectedResponse {
                endpoint: "list merit templates",
                detail: "hasNextPage is true but no after-cursor was returned".to_string(),
            }
        })?);
    }
}

impl Catalog for HttpCatalog {
    fn list_templates(&self) -> Result<Vec<RemoteTemplate>, CatalogError> {
        let endpoint = "list merit templates";
        collect_template_pages(|after| {
            let response = self
                .templates_request(after)
                .send()
                .map_err(|source| CatalogError::Transport { endpoint, source })?;
            parse_json(endpoint, response)
        })
    }

    // TODO: follow pagination cursors like list_templates; organizations
    // with more than FIELDS_PAGE_LIMIT fields are truncated here.
    fn list_fields(&self) -> Result<Vec<RemoteField>, CatalogError> {
        let url = format!(
            "{}orgs/{}/fields?limit={}",
            self.base_url, self.org_id, FIELDS_PAGE_LIMIT
        );
        let page: FieldsPage = self.get("list fields", &url)?;
        Ok(page.fields)
    }

    fn create_template(&self, request: &CreateTemplateRequest) -> Result<String, CatalogError> {
        let url = format!("{}merittemplates", self.base_url);
        let created: Created = self.post("create merit template", &url, request)?;
        Ok(created.id)
    }

    fn create_field(&self, request: &CreateFieldRequest) -> Result<String, CatalogError> {
        let url = format!("{}fields", self.base_url);
        let created: Created = self.post("create field", &url, request)?;
        Ok(created.id)
    }

    fn attach_field_setting(
        &self,
        template_id: &str,
        field_id: &str,
        setting: &FieldSettingRequest,
    ) -> Result<(), CatalogError> {
        let endpoint = "attach field setting";
        let url = format!(
            "{}merittemplates/{}/fields/{}",
            self.base_url, template_id, field_id
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(setting)
            .send()
            .map_err(|source| CatalogError::Transport { endpoint, source })?;
        // no required response body; only the status matters
        check_status(endpoint, response).map(|_| ())
    }
}

fn check_status(endpoint: &'static str, response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(CatalogError::Status {
        endpoint,
        status: status.as_u16(),
        body: body_snippet(&body),
    })
}

fn parse_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, CatalogError> {
    let response = check_status(endpoint, response)?;
    let body = response
        .text()
        .map_err(|source| CatalogError::Transport { endpoint, source })?;
    serde_json::from_str(&body).map_err(|e| CatalogError::UnexpectedResponse {
        endpoint,
        detail: e.to_string(),
    })
}
