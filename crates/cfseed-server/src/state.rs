//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use cfseed_confluence::CreatePage;

/// Page creator shared across requests.
pub type SharedCreator = Arc<dyn CreatePage + Send + Sync>;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Creates pages in Confluence.
    pub(crate) creator: SharedCreator,
}
