//! Access-token exchange and the app-linking flow
//!
//! The app authenticates against an organization with its client
//! credentials. If the exchange is refused, the app is not linked to the
//! org yet: a one-time linking URL is fetched and handed to the command
//! layer, which sends the operator there and confirms before the exchange
//! is retried. The token is not refreshed during a run; runs are expected
//! to finish well inside the token's one-hour expiry.

use reqwest::blocking::Client;
use serde::Serialize;

use crate::catalog::types::{AccessResponse, LinkAppResponse};
use crate::catalog::{body_snippet, CatalogError};

const REQUESTED_PERMISSIONS: [&str; 2] =
    ["CanManageAllMeritTemplates", "CanSendAllMeritTemplates"];

/// Where the authentication handshake stands
///
/// The command layer drives this: `AwaitingLink` carries the URL the
/// operator must complete out of band. There is no retry limit; linking
/// blocks on the human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    AwaitingLink { link_url: String },
    Authenticated { token: String },
}

/// What one access-token exchange attempt came back with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Granted { token: String },
    Refused { link_url: String },
}

impl AuthState {
    /// The state after one exchange attempt
    ///
    /// Both the initial attempt and every retry after the operator confirms
    /// linking go through here. `Authenticated` is terminal: a token once
    /// granted is kept for the rest of the run.
    pub fn on_exchange(self, outcome: ExchangeOutcome) -> AuthState {
        match (self, outcome) {
            (state @ AuthState::Authenticated { .. }, _) => state,
            (_, ExchangeOutcome::Granted { token }) => AuthState::Authenticated { token },
            (_, ExchangeOutcome::Refused { link_url }) => AuthState::AwaitingLink { link_url },
        }
    }
}

#[derive(Debug, Serialize)]
struct PermissionRequest {
    #[serde(rename = "permissionType")]
    permission_type: &'static str,
}

#[derive(Debug, Serialize)]
struct LinkAppRequest {
    #[serde(rename = "requestedPermissions")]
    requested_permissions: Vec<PermissionRequest>,
    #[serde(rename = "successUrl")]
    success_url: &'static str,
    #[serde(rename = "failureUrl")]
    failure_url: &'static str,
    state: &'static str,
}

impl LinkAppRequest {
    fn new() -> Self {
        Self {
            requested_permissions: REQUESTED_PERMISSIONS
                .iter()
                .map(|p| PermissionRequest {
                    permission_type: *p,
                })
                .collect(),
            success_url: "/goodpath",
            failure_url: "/badpath",
            state: "meritbulk",
        }
    }
}

/// Performs the token exchange for one org/app pair
pub struct Authenticator {
    http: Client,
    base_url: String,
    org_id: String,
    app_id: String,
    app_secret: String,
}

impl Authenticator {
    pub fn new(
        base_url: &str,
        org_id: &str,
        app_id: &str,
        app_secret: &str,
    ) -> Result<Self, CatalogError> {
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
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
        })
    }

    /// One step of the handshake
    ///
    /// Attempts the access-token exchange and folds the outcome into the
    /// current state via [`AuthState::on_exchange`]. An already-authenticated
    /// state is returned untouched without hitting the wire.
    pub fn advance(&self, state: AuthState) -> Result<AuthState, CatalogError> {
        if let AuthState::Authenticated { .. } = state {
            return Ok(state);
        }
        let outcome = self.exchange()?;
        Ok(state.on_exchange(outcome))
    }

    /// Attempt the access-token exchange once
    ///
    /// Any non-success status means the app still needs linking, so a fresh
    /// linking URL is fetched and returned as `Refused`.
    fn exchange(&self) -> Result<ExchangeOutcome, CatalogError> {
        let endpoint = "org access token";
        let url = format!("{}orgs/{}/access", self.base_url, self.org_id);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.app_id, Some(&self.app_secret))
            .send()
            .map_err(|source| CatalogError::Transport { endpoint, source })?;

        if response.status().is_success() {
            let access: AccessResponse =
                response
                    .json()
                    .map_err(|e| CatalogError::UnexpectedResponse {
                        endpoint,
                        detail: e.to_string(),
                    })?;
            return Ok(ExchangeOutcome::Granted {
                token: access.org_access_token,
            });
        }

        Ok(ExchangeOutcome::Refused {
            link_url: self.request_link_url()?,
        })
    }

    fn request_link_url(&self) -> Result<String, CatalogError> {
        let endpoint = "request linkapp url";
        let url = format!("{}request_linkapp_url", self.base_url);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.app_id, Some(&self.app_secret))
            .json(&LinkAppRequest::new())
            .send()
            .map_err(|source| CatalogError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(CatalogError::Status {
                endpoint,
                status: status.as_u16(),
                body: body_snippet(&body),
            });
        }

        let link: LinkAppResponse =
            response
                .json()
                .map_err(|e| CatalogError::UnexpectedResponse {
                    endpoint,
                    detail: e.to_string(),
                })?;
        Ok(link.request_linkapp_url)
    }
}
