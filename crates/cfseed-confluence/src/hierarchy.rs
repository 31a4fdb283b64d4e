//! Fixed page hierarchy provisioned into a space.
//!
//! The hierarchy is a list of stages. Each stage is a list of top-level
//! pages; see [`SpaceProvisioner`](crate::SpaceProvisioner) for the order in
//! which pages are created.

use crate::template;

/// A page in the hierarchy.
#[derive(Debug)]
pub struct PageNode {
    /// Page title.
    pub title: &'static str,
    /// Generates the storage body from the title.
    pub body: fn(&str) -> String,
    /// Child pages, in creation order.
    pub children: &'static [PageNode],
}

impl PageNode {
    /// Section page using the standard template.
    pub const fn section(title: &'static str, children: &'static [PageNode]) -> Self {
        Self {
            title,
            body: template::section_page,
            children,
        }
    }

    /// Section page without children.
    pub const fn leaf(title: &'static str) -> Self {
        Self::section(title, &[])
    }

    /// Titles of every descendant, depth-first.
    #[must_use]
    pub fn descendant_titles(&self) -> Vec<&'static str> {
        let mut titles = Vec::new();
        for child in self.children {
            titles.push(child.title);
            titles.extend(child.descendant_titles());
        }
        titles
    }

    /// Number of pages in this subtree, including this one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        1 + self.children.iter().map(PageNode::page_count).sum::<usize>()
    }
}

/// Top-level pages created together before any of their descendants.
pub type Stage = &'static [PageNode];

static USER_GUIDE: [PageNode; 3] = [
    PageNode::leaf("Getting Started"),
    PageNode::leaf("Features"),
    PageNode::leaf("FAQ"),
];

static DESIGN_AND_ARCHITECTURE: [PageNode; 3] = [
    PageNode::leaf("System Architecture"),
    PageNode::leaf("Technical Design"),
    PageNode::leaf("Data Model"),
];

static PRODUCT_DEVELOPMENT: [PageNode; 13] = [
    PageNode::leaf("Product Roadmap"),
    PageNode::leaf("Requirements"),
    PageNode::leaf("User Stories"),
    PageNode::leaf("Sprint Planning"),
    PageNode::leaf("Release Notes"),
    PageNode::leaf("Development Guidelines"),
    PageNode::leaf("Coding Standards"),
    PageNode::leaf("Code Review Process"),
    PageNode::leaf("Testing Strategy"),
    PageNode::leaf("CI/CD Pipeline"),
    PageNode::leaf("Environments"),
    PageNode::leaf("Deployment Process"),
    PageNode::leaf("Technical Debt"),
];

static ADMINISTRATION: [PageNode; 8] = [
    PageNode::leaf("User Management"),
    PageNode::leaf("Roles & Permissions"),
    PageNode::leaf("Security Policies"),
    PageNode::leaf("Backup & Recovery"),
    PageNode::leaf("Monitoring & Alerts"),
    PageNode::leaf("Audit Logs"),
    PageNode::leaf("Licensing"),
    PageNode::leaf("System Configuration"),
];

static HELP_AND_SUPPORT: [PageNode; 5] = [
    PageNode::leaf("Troubleshooting"),
    PageNode::leaf("Known Issues"),
    PageNode::leaf("Contact Support"),
    PageNode::leaf("Glossary"),
    PageNode::leaf("Feedback"),
];

static GUIDE_STAGE: [PageNode; 1] = [PageNode::section("User Guide", &USER_GUIDE)];

static SECTIONS_STAGE: [PageNode; 4] = [
    PageNode::section("Design & Architecture", &DESIGN_AND_ARCHITECTURE),
    PageNode::section("Product Development", &PRODUCT_DEVELOPMENT),
    PageNode::section("Administration", &ADMINISTRATION),
    PageNode::section("Help & Support", &HELP_AND_SUPPORT),
];

/// The page hierarchy provisioned by default.
pub static HIERARCHY: [Stage; 2] = [&GUIDE_STAGE, &SECTIONS_STAGE];

/// Total number of pages in `stages`.
#[must_use]
pub fn page_count(stages: &[Stage]) -> usize {
    stages
        .iter()
        .flat_map(|stage| stage.iter())
        .map(PageNode::page_count)
        .sum()
}
