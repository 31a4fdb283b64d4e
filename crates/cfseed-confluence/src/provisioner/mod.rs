//! Space provisioner for Confluence.
//!
//! This module provides the [`SpaceProvisioner`] struct that creates the
//! fixed page hierarchy in a space:
//!
//! 1. Create the top-level pages of a stage, in order
//! 2. Create the children of each created page, using its id as parent
//! 3. Skip the subtree of every page that could not be created
//! 4. Repeat for the next stage
//!
//! # Example
//!
//! ```no_run
//! use cfseed_confluence::{ConfluenceClient, SpaceProvisioner};
//!
//! let client = ConfluenceClient::new(
//!     "https://acme.atlassian.net/wiki/rest/api",
//!     "docs@acme.test",
//!     "api-token",
//! );
//! let provisioner = SpaceProvisioner::new(&client);
//!
//! let report = provisioner.provision("DEMO");
//! println!("created {} pages", report.created.len());
//! ```

mod executor;
mod result;

pub use executor::SpaceProvisioner;
pub use result::{FailedPage, ProvisionReport, ProvisionedPage};
