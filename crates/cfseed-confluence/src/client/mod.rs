//! Confluence REST API client.
//!
//! Provides sync HTTP client for the Confluence content REST API
//! with basic authentication (account email + API token).

mod pages;

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cfseed_config::ConfluenceConfig;
use ureq::Agent;

use crate::error::ConfluenceError;
use crate::types::{CreatedPage, PageSpec};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Something that can create a page in a space.
///
/// [`ConfluenceClient`] is the HTTP implementation; the provisioner only
/// depends on this trait.
pub trait CreatePage {
    /// Create `page` in the space identified by `space_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// status other than 200, or the response carries no page id.
    fn create_page(&self, space_key: &str, page: &PageSpec) -> Result<CreatedPage, ConfluenceError>;
}

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create client from credentials.
    ///
    /// # Arguments
    /// * `base_url` - REST API base URL (requests go to `{base_url}/content`)
    /// * `email` - Account email
    /// * `api_token` - API token
    #[must_use]
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: basic_auth_header(email, api_token),
        }
    }

    /// Create client from validated config.
    #[must_use]
    pub fn from_config(config: &ConfluenceConfig) -> Self {
        Self::new(&config.base_url, &config.email, &config.api_token)
    }

    /// Get the content endpoint URL.
    fn content_url(&self) -> String {
        format!("{}/content", self.base_url)
    }
}

/// Build `Authorization` header value for basic auth.
fn basic_auth_header(email: &str, api_token: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{api_token}")))
}
