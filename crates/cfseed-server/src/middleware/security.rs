//! Security headers middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
///
/// The form page has no scripts and only an inline stylesheet.
const CSP: &str = "default-src 'none'; \
                   style-src 'unsafe-inline'; \
                   form-action 'self'; \
                   base-uri 'none'; \
                   frame-ancestors 'none'";

/// Response header that always replaces whatever a handler set.
fn fixed_header(name: &'static str, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static(name),
        HeaderValue::from_static(value),
    )
}

pub(crate) fn csp_layer() -> SetResponseHeaderLayer<HeaderValue> {
    fixed_header("content-security-policy", CSP)
}

/// Stops browsers from sniffing the JSON endpoint as HTML.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    fixed_header("x-content-type-options", "nosniff")
}

/// The form must not be framed; it triggers writes to Confluence.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    fixed_header("x-frame-options", "DENY")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_value() {
        assert!(CSP.contains("default-src 'none'"));
        assert!(CSP.contains("form-action 'self'"));
        assert!(CSP.contains("frame-ancestors 'none'"));
        assert!(!CSP.contains("script-src"));
    }
}
