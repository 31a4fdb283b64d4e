//! Space provisioner implementation.

use tracing::{info, warn};

use crate::client::CreatePage;
use crate::hierarchy::{HIERARCHY, PageNode, Stage};
use crate::types::PageSpec;

use super::result::ProvisionReport;

/// Creates a page hierarchy in a Confluence space.
pub struct SpaceProvisioner<'a> {
    creator: &'a dyn CreatePage,
    stages: &'a [Stage],
}

impl<'a> SpaceProvisioner<'a> {
    /// Create a provisioner for the default [`HIERARCHY`].
    #[must_use]
    pub fn new(creator: &'a dyn CreatePage) -> Self {
        Self {
            creator,
            stages: &HIERARCHY,
        }
    }

    /// Use a different hierarchy.
    #[must_use]
    pub fn with_stages(mut self, stages: &'a [Stage]) -> Self {
        self.stages = stages;
        self
    }

    /// Create every page of the hierarchy in `space_key`.
    ///
    /// Pages are created one at a time. Within a sibling group all pages
    /// are created first, then the children of each created sibling, in
    /// order. A failed page has its whole subtree skipped; its siblings
    /// and later stages are still attempted.
    ///
    /// Per-page failures never abort the run; they are recorded in the
    /// returned report.
    pub fn provision(&self, space_key: &str) -> ProvisionReport {
        info!(space = space_key, "Provisioning space");

        let mut report = ProvisionReport::new(space_key);
        for stage in self.stages {
            self.create_siblings(space_key, stage, None, &mut report);
        }

        info!(
            space = space_key,
            created = report.created.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "Provisioning finished"
        );
        report
    }

    fn create_siblings(
        &self,
        space_key: &str,
        nodes: &[PageNode],
        parent_id: Option<&str>,
        report: &mut ProvisionReport,
    ) {
        let ids: Vec<Option<String>> = nodes
            .iter()
            .map(|node| self.create_one(space_key, node, parent_id, report))
            .collect();

        for (node, id) in nodes.iter().zip(ids) {
            match id {
                Some(id) => self.create_siblings(space_key, node.children, Some(&id), report),
                None if !node.children.is_empty() => {
                    warn!(
                        "Skipping {} subpage(s) of '{}'",
                        node.page_count() - 1,
                        node.title
                    );
                    report.record_skipped(node.descendant_titles());
                }
                None => {}
            }
        }
    }

    /// Create a single page, returning its id on success.
    fn create_one(
        &self,
        space_key: &str,
        node: &PageNode,
        parent_id: Option<&str>,
        report: &mut ProvisionReport,
    ) -> Option<String> {
        let spec = PageSpec {
            title: node.title.to_owned(),
            body: (node.body)(node.title),
            parent_id: parent_id.map(ToOwned::to_owned),
        };

        match self.creator.create_page(space_key, &spec) {
            Ok(page) => {
                report.record_created(node.title, &page.id, parent_id);
                Some(page.id)
            }
            Err(err) => {
                report.record_failed(node.title, &err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ConfluenceError;
    use crate::types::CreatedPage;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Call {
        space_key: String,
        title: String,
        parent_id: Option<String>,
    }

    /// In-memory creator that hands out sequential ids starting at 100.
    struct ScriptedCreator {
        failing: HashSet<&'static str>,
        malformed: HashSet<&'static str>,
        fail_all: bool,
        next_id: Cell<u32>,
        calls: RefCell<Vec<Call>>,
    }

    impl ScriptedCreator {
        fn new() -> Self {
            Self {
                failing: HashSet::new(),
                malformed: HashSet::new(),
                fail_all: false,
                next_id: Cell::new(100),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(titles: &[&'static str]) -> Self {
            Self {
                failing: titles.iter().copied().collect(),
                ..Self::new()
            }
        }

        fn titles(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.title.clone()).collect()
        }

        fn call(&self, title: &str) -> Option<Call> {
            self.calls.borrow().iter().find(|c| c.title == title).cloned()
        }
    }

    impl CreatePage for ScriptedCreator {
        fn create_page(
            &self,
            space_key: &str,
            page: &PageSpec,
        ) -> Result<CreatedPage, ConfluenceError> {
            self.calls.borrow_mut().push(Call {
                space_key: space_key.to_owned(),
                title: page.title.clone(),
                parent_id: page.parent_id.clone(),
            });

            if self.fail_all || self.failing.contains(page.title.as_str()) {
                return Err(ConfluenceError::HttpResponse {
                    status: 500,
                    body: "Internal Server Error".to_owned(),
                });
            }
            if self.malformed.contains(page.title.as_str()) {
                return CreatedPage::from_response(json!({"title": page.title}), &page.title);
            }

            let id = self.next_id.get();
            self.next_id.set(id + 1);
            CreatedPage::from_response(json!({"id": id.to_string()}), &page.title)
        }
    }

    const INDEPENDENT_TOP_LEVEL: [&str; 4] = [
        "Design & Architecture",
        "Product Development",
        "Administration",
        "Help & Support",
    ];

    #[test]
    fn test_all_pages_created_in_order() {
        let creator = ScriptedCreator::new();

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert_eq!(report.created.len(), 37);
        assert!(report.is_complete());
        let titles = creator.titles();
        assert_eq!(
            titles[..8].to_vec(),
            vec![
                "User Guide",
                "Getting Started",
                "Features",
                "FAQ",
                "Design & Architecture",
                "Product Development",
                "Administration",
                "Help & Support",
            ]
        );
        assert_eq!(titles[8], "System Architecture");
        assert_eq!(titles[11], "Product Roadmap");
        assert_eq!(titles[36], "Feedback");
        assert!(creator.calls.borrow().iter().all(|c| c.space_key == "DEMO"));
    }

    #[test]
    fn test_children_use_parent_id() {
        let creator = ScriptedCreator::new();

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        let user_guide = report.page_id("User Guide").unwrap();
        assert_eq!(user_guide, "100");
        assert_eq!(creator.call("User Guide").unwrap().parent_id, None);
        assert_eq!(
            creator.call("FAQ").unwrap().parent_id.as_deref(),
            Some(user_guide)
        );

        let help = report.page_id("Help & Support").unwrap();
        assert_eq!(
            creator.call("Troubleshooting").unwrap().parent_id.as_deref(),
            Some(help)
        );
        assert_eq!(creator.call("Administration").unwrap().parent_id, None);
    }

    #[test]
    fn test_demo_scenario_independent_top_level_pages_fail() {
        let creator = ScriptedCreator::failing(&INDEPENDENT_TOP_LEVEL);

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert!(report.is_success());
        let ids: HashSet<&str> = report.created.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["100", "101", "102", "103"]));
        assert_eq!(report.attempts(), 8);
        assert_eq!(report.failed.len(), 4);
        assert_eq!(report.skipped.len(), 3 + 13 + 8 + 5);
        assert!(creator.call("System Architecture").is_none());
        assert!(creator.call("Feedback").is_none());
    }

    #[test]
    fn test_user_guide_failure_skips_its_children_only() {
        let creator = ScriptedCreator::failing(&["User Guide"]);

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        for child in ["Getting Started", "Features", "FAQ"] {
            assert!(creator.call(child).is_none(), "{child} was attempted");
        }
        assert_eq!(report.skipped, vec!["Getting Started", "Features", "FAQ"]);
        assert_eq!(report.attempts(), 34);
        assert_eq!(report.created.len(), 33);
        assert!(report.is_success());
    }

    #[test]
    fn test_every_call_fails() {
        let creator = ScriptedCreator {
            fail_all: true,
            ..ScriptedCreator::new()
        };

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert!(!report.is_success());
        // Only the five top-level pages are attempted
        assert_eq!(report.attempts(), 5);
        assert!(creator.calls.borrow().iter().all(|c| c.parent_id.is_none()));
        assert_eq!(report.skipped.len(), 32);
    }

    #[test]
    fn test_single_top_level_page_with_subpages_is_success() {
        let creator = ScriptedCreator::failing(&[
            "User Guide",
            "Design & Architecture",
            "Product Development",
            "Administration",
        ]);

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert!(report.is_success());
        assert!(!report.is_complete());
        assert_eq!(report.created.len(), 6);
        assert_eq!(report.created[0].title, "Help & Support");
    }

    #[test]
    fn test_child_failure_does_not_stop_siblings() {
        let creator = ScriptedCreator::failing(&["Features"]);

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert!(report.page_id("FAQ").is_some());
        assert_eq!(report.attempts(), 37);
        assert_eq!(report.created.len(), 36);
        assert!(report.skipped.is_empty());
        assert_eq!(report.failed[0].title, "Features");
        assert_eq!(report.failed[0].status, Some(500));
    }

    #[test]
    fn test_missing_id_treated_as_failure() {
        let creator = ScriptedCreator {
            malformed: HashSet::from(["Administration"]),
            ..ScriptedCreator::new()
        };

        let report = SpaceProvisioner::new(&creator).provision("DEMO");

        assert!(creator.call("User Management").is_none());
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].error.contains("no page id"));
        assert_eq!(report.skipped.len(), 8);
    }

    #[test]
    fn test_rerun_issues_fresh_requests() {
        let creator = ScriptedCreator::new();
        let provisioner = SpaceProvisioner::new(&creator);

        let first = provisioner.provision("DEMO");
        let second = provisioner.provision("DEMO");

        assert_eq!(creator.calls.borrow().len(), 74);
        assert_ne!(first.page_id("User Guide"), second.page_id("User Guide"));
    }

    static NESTED_A1: [PageNode; 1] = [PageNode::leaf("A1a")];
    static NESTED_A: [PageNode; 2] = [PageNode::section("A1", &NESTED_A1), PageNode::leaf("A2")];
    static NESTED_ROOTS: [PageNode; 2] = [PageNode::section("A", &NESTED_A), PageNode::leaf("B")];
    static NESTED: [Stage; 1] = [&NESTED_ROOTS];

    #[test]
    fn test_nested_siblings_created_before_grandchildren() {
        let creator = ScriptedCreator::new();

        let report = SpaceProvisioner::new(&creator)
            .with_stages(&NESTED)
            .provision("DEMO");

        assert_eq!(creator.titles(), vec!["A", "B", "A1", "A2", "A1a"]);
        let a1 = report.page_id("A1").unwrap();
        assert_eq!(creator.call("A1a").unwrap().parent_id.as_deref(), Some(a1));
    }

    #[test]
    fn test_nested_failure_skips_whole_subtree() {
        let creator = ScriptedCreator::failing(&["A"]);

        let report = SpaceProvisioner::new(&creator)
            .with_stages(&NESTED)
            .provision("DEMO");

        assert_eq!(creator.titles(), vec!["A", "B"]);
        assert_eq!(report.skipped, vec!["A1", "A1a", "A2"]);
    }
}
