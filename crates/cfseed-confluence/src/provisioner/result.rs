//! Provisioning result types.

use serde::Serialize;

use crate::error::ConfluenceError;

/// A page created during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionedPage {
    /// Page title.
    pub title: String,
    /// Page ID assigned by Confluence.
    pub id: String,
    /// Parent page ID (`None` for top-level pages).
    pub parent_id: Option<String>,
}

/// A page whose creation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    /// Page title.
    pub title: String,
    /// HTTP status, when the server answered.
    pub status: Option<u16>,
    /// Error description.
    pub error: String,
}

/// Outcome of one provisioning run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvisionReport {
    /// Target space key.
    pub space_key: String,
    /// Created pages, in creation order.
    pub created: Vec<ProvisionedPage>,
    /// Failed pages, in attempt order.
    pub failed: Vec<FailedPage>,
    /// Titles never attempted because an ancestor failed.
    pub skipped: Vec<String>,
}

impl ProvisionReport {
    pub(crate) fn new(space_key: &str) -> Self {
        Self {
            space_key: space_key.to_owned(),
            ..Self::default()
        }
    }

    pub(crate) fn record_created(&mut self, title: &str, id: &str, parent_id: Option<&str>) {
        self.created.push(ProvisionedPage {
            title: title.to_owned(),
            id: id.to_owned(),
            parent_id: parent_id.map(ToOwned::to_owned),
        });
    }

    pub(crate) fn record_failed(&mut self, title: &str, error: &ConfluenceError) {
        self.failed.push(FailedPage {
            title: title.to_owned(),
            status: error.status(),
            error: error.to_string(),
        });
    }

    pub(crate) fn record_skipped(&mut self, titles: impl IntoIterator<Item = &'static str>) {
        self.skipped
            .extend(titles.into_iter().map(ToOwned::to_owned));
    }

    /// Whether at least one page was created.
    ///
    /// This is the aggregate flag reported to the user: a run that created
    /// a single page counts as successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.created.is_empty()
    }

    /// Whether every page was created (nothing failed or skipped).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_success() && self.failed.is_empty() && self.skipped.is_empty()
    }

    /// Number of create requests issued.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.created.len() + self.failed.len()
    }

    /// ID of the created page with `title`.
    #[must_use]
    pub fn page_id(&self, title: &str) -> Option<&str> {
        self.created
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.id.as_str())
    }
}
