//! `cfseed tree` command implementation.

use cfseed_confluence::hierarchy::{self, HIERARCHY, PageNode, Stage};

use crate::output::Output;

/// Execute the tree command.
pub(crate) fn execute() {
    let output = Output::new();

    for (index, &stage) in HIERARCHY.iter().enumerate() {
        output.highlight(&format!("Stage {}", index + 1));
        for line in render_stage(stage) {
            output.info(&line);
        }
    }
    output.info(&format!("\n{} page(s)", hierarchy::page_count(&HIERARCHY)));
}

/// Render a stage as indented lines, one per page.
fn render_stage(stage: Stage) -> Vec<String> {
    let mut lines = Vec::new();
    for node in stage {
        render_node(node, 1, &mut lines);
    }
    lines
}

fn render_node(node: &PageNode, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}- {}", "  ".repeat(depth), node.title));
    for child in node.children {
        render_node(child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_first_stage() {
        assert_eq!(
            render_stage(HIERARCHY[0]),
            vec![
                "  - User Guide",
                "    - Getting Started",
                "    - Features",
                "    - FAQ",
            ]
        );
    }

    #[test]
    fn test_render_covers_every_page() {
        let lines: usize = HIERARCHY.iter().map(|&stage| render_stage(stage).len()).sum();
        assert_eq!(lines, 37);
    }
}
