//! Confluence page provisioning for cfseed.
//!
//! - [`ConfluenceClient`]: sync client for the content REST API (basic auth)
//! - [`CreatePage`]: the page-creation seam used by the provisioner
//! - [`HIERARCHY`]: the fixed page tree
//! - [`SpaceProvisioner`]: walks the tree and creates every page

mod client;
mod error;
pub mod hierarchy;
mod provisioner;
pub mod template;
mod types;

pub use client::{ConfluenceClient, CreatePage};
pub use error::ConfluenceError;
pub use hierarchy::{HIERARCHY, PageNode, Stage};
pub use provisioner::{FailedPage, ProvisionReport, ProvisionedPage, SpaceProvisioner};
pub use types::{CreatedPage, PageSpec};
