//! Confluence page types.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConfluenceError;
use crate::template;

/// A page to create: title, storage body and optional parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    /// Page title.
    pub title: String,
    /// Body in Confluence storage format.
    pub body: String,
    /// ID of the page to nest under.
    pub parent_id: Option<String>,
}

impl PageSpec {
    /// Section page with the standard body template.
    #[must_use]
    pub fn section(title: &str, parent_id: Option<&str>) -> Self {
        Self {
            title: title.to_owned(),
            body: template::section_page(title),
            parent_id: parent_id.map(ToOwned::to_owned),
        }
    }
}

/// Body of `POST /content`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPage<'a> {
    /// Content type (always "page").
    #[serde(rename = "type")]
    pub content_type: &'static str,
    /// Page title.
    pub title: &'a str,
    /// Target space.
    pub space: SpaceRef<'a>,
    /// Page body content.
    pub body: Body<'a>,
    /// Parent pages; omitted for top-level pages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<Ancestor<'a>>,
}

impl<'a> NewPage<'a> {
    /// Build the request body for `page` in `space_key`.
    #[must_use]
    pub fn new(space_key: &'a str, page: &'a PageSpec) -> Self {
        Self {
            content_type: "page",
            title: &page.title,
            space: SpaceRef { key: space_key },
            body: Body {
                storage: Storage {
                    value: &page.body,
                    representation: "storage",
                },
            },
            ancestors: page
                .parent_id
                .as_deref()
                .map(|id| vec![Ancestor { id }])
                .unwrap_or_default(),
        }
    }
}

/// Space reference by key.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceRef<'a> {
    /// Space key.
    pub key: &'a str,
}

/// Page body content.
#[derive(Debug, Clone, Serialize)]
pub struct Body<'a> {
    /// Storage format content.
    pub storage: Storage<'a>,
}

/// Storage format representation.
#[derive(Debug, Clone, Serialize)]
pub struct Storage<'a> {
    /// HTML content in Confluence storage format.
    pub value: &'a str,
    /// Content representation (always "storage").
    pub representation: &'static str,
}

/// Ancestor (parent page) reference.
#[derive(Debug, Clone, Serialize)]
pub struct Ancestor<'a> {
    /// Parent page ID.
    pub id: &'a str,
}

/// Page returned by a successful create call.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPage {
    /// Page ID assigned by Confluence.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Full response payload.
    pub raw: Value,
}

impl CreatedPage {
    /// Extract the created page from a response payload.
    ///
    /// The payload must carry a non-empty `id` (string or number); without
    /// one the page cannot be used as a parent.
    pub fn from_response(raw: Value, requested_title: &str) -> Result<Self, ConfluenceError> {
        let id = match raw.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(ConfluenceError::MalformedResponse(
                    "response has no page id".to_owned(),
                ));
            }
        };

        let title = raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(requested_title)
            .to_owned();

        Ok(Self { id, title, raw })
    }
}
