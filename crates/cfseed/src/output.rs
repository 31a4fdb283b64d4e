//! Colored terminal output utilities.

use cfseed_confluence::ProvisionReport;
use console::{Style, Term};

/// Terminal output formatter.
///
/// Writes to stderr so it never mixes with anything piped from stdout.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&self.green, msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&self.yellow, msg);
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    /// Print a highlighted message (cyan bold).
    pub(crate) fn highlight(&self, msg: &str) {
        self.styled(&self.cyan_bold, msg);
    }

    /// Print the per-page outcome of a provisioning run followed by a
    /// one-line summary colored by how complete the run was.
    pub(crate) fn report(&self, report: &ProvisionReport) {
        for page in &report.created {
            let parent = page
                .parent_id
                .as_deref()
                .map_or_else(String::new, |id| format!(" under {id}"));
            self.success(&format!("  + {} (id {}{parent})", page.title, page.id));
        }
        for page in &report.failed {
            self.error(&format!("  x {}: {}", page.title, page.error));
        }
        for title in &report.skipped {
            self.styled(&self.dim, &format!("  - {title} (parent not created)"));
        }

        let summary = summary_line(report);
        if report.is_complete() {
            self.success(&summary);
        } else if report.is_success() {
            self.warning(&summary);
        } else {
            self.error(&summary);
        }
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

/// Count line printed after a provisioning run.
fn summary_line(report: &ProvisionReport) -> String {
    format!(
        "\nSpace {}: {} created, {} failed, {} skipped",
        report.space_key,
        report.created.len(),
        report.failed.len(),
        report.skipped.len()
    )
}
