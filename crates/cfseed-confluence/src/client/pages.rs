//! Page operations for Confluence API.

use tracing::{info, warn};

use super::{ConfluenceClient, CreatePage};
use crate::error::ConfluenceError;
use crate::types::{CreatedPage, NewPage, PageSpec};

impl CreatePage for ConfluenceClient {
    fn create_page(&self, space_key: &str, page: &PageSpec) -> Result<CreatedPage, ConfluenceError> {
        let url = self.content_url();
        let payload = serde_json::to_vec(&NewPage::new(space_key, page))?;

        info!(
            space = space_key,
            parent = page.parent_id.as_deref().unwrap_or("-"),
            "Attempting to create page: {}",
            page.title
        );

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read response body)".to_owned());

        let result = parse_create_response(status, &body, &page.title);
        match &result {
            Ok(created) => info!("Page '{}' created (id={})", created.title, created.id),
            Err(err) => warn!("Failed to create page '{}': {}", page.title, err),
        }
        result
    }
}

/// Interpret a create-page response.
///
/// Only 200 counts as success; the body must then parse as JSON and carry
/// a page id.
fn parse_create_response(
    status: u16,
    body: &str,
    requested_title: &str,
) -> Result<CreatedPage, ConfluenceError> {
    if status != 200 {
        return Err(ConfluenceError::HttpResponse {
            status,
            body: body.to_owned(),
        });
    }

    let raw: serde_json::Value = serde_json::from_str(body)?;
    CreatedPage::from_response(raw, requested_title)
}
