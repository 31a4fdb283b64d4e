//! HTML form for provisioning a space.
//!
//! `GET /` renders the form; `POST /` provisions the submitted space and
//! renders the form again with the outcome.

use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use cfseed_confluence::ProvisionReport;
use quick_xml::escape::escape;
use serde::Deserialize;

use crate::error::ServerError;
use crate::handlers::provision_space;
use crate::state::AppState;

/// Submitted form fields.
#[derive(Debug, Deserialize)]
pub(crate) struct ProvisionForm {
    /// Target space key.
    #[serde(default)]
    space_id: String,
}

/// Outcome banner shown above the form.
#[derive(Debug, PartialEq, Eq)]
enum Banner {
    Success(String),
    Failure(String),
}

impl Banner {
    fn from_report(report: &ProvisionReport) -> Self {
        let summary = format!(
            "{} page(s) created, {} failed, {} skipped.",
            report.created.len(),
            report.failed.len(),
            report.skipped.len()
        );
        if report.is_success() {
            Self::Success(format!("Space {} provisioned: {summary}", report.space_key))
        } else {
            Self::Failure(format!(
                "No pages were created in space {}: {summary}",
                report.space_key
            ))
        }
    }
}

/// Handle GET /.
pub(crate) async fn show_form() -> Html<String> {
    Html(render_page("", None))
}

/// Handle POST /.
pub(crate) async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProvisionForm>,
) -> Response {
    match provision_space(&state, &form.space_id).await {
        Ok(report) => {
            let banner = Banner::from_report(&report);
            Html(render_page(&form.space_id, Some(&banner))).into_response()
        }
        Err(err @ ServerError::Validation(_)) => {
            let banner = Banner::Failure(err.to_string());
            (
                StatusCode::BAD_REQUEST,
                Html(render_page(&form.space_id, Some(&banner))),
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Render the form page.
fn render_page(space_id: &str, banner: Option<&Banner>) -> String {
    let banner_html = match banner {
        Some(Banner::Success(msg)) => {
            format!(r#"<p class="banner success">{}</p>"#, escape(msg.as_str()))
        }
        Some(Banner::Failure(msg)) => {
            format!(r#"<p class="banner failure">{}</p>"#, escape(msg.as_str()))
        }
        None => String::new(),
    };
    let space_id = escape(space_id);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Provision Confluence space</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 3rem auto; }}
.banner {{ padding: 0.75rem; border-radius: 4px; }}
.success {{ background: #e3fcef; color: #006644; }}
.failure {{ background: #ffebe6; color: #bf2600; }}
</style>
</head>
<body>
<h1>Provision Confluence space</h1>
{banner_html}
<form method="post" action="/">
<label for="space_id">Space key</label>
<input id="space_id" name="space_id" value="{space_id}" required>
<button type="submit">Create pages</button>
</form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_page_without_banner() {
        let html = render_page("", None);
        assert!(html.contains(r#"name="space_id""#));
        assert!(!html.contains(r#"class="banner"#));
    }

    #[test]
    fn test_render_page_with_banner() {
        let banner = Banner::Failure("No pages were created".to_owned());
        let html = render_page("DEMO", Some(&banner));
        assert!(html.contains(r#"<p class="banner failure">No pages were created</p>"#));
    }

    #[test]
    fn test_render_page_escapes_space_id() {
        let html = render_page(r#""><script>"#, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_banner_from_successful_report() {
        let report = ProvisionReport {
            space_key: "DEMO".to_owned(),
            created: vec![cfseed_confluence::ProvisionedPage {
                title: "User Guide".to_owned(),
                id: "100".to_owned(),
                parent_id: None,
            }],
            ..Default::default()
        };

        assert_eq!(
            Banner::from_report(&report),
            Banner::Success(
                "Space DEMO provisioned: 1 page(s) created, 0 failed, 0 skipped.".to_owned()
            )
        );
    }

    #[test]
    fn test_banner_from_empty_report() {
        let report = ProvisionReport {
            space_key: "DEMO".to_owned(),
            ..Default::default()
        };

        assert!(matches!(Banner::from_report(&report), Banner::Failure(_)));
    }
}
