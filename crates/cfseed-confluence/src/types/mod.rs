//! Confluence REST API types.

mod page;

pub use page::{CreatedPage, NewPage, PageSpec};
