//! Post-authentication redirect selection.
//!
//! Redirect targets supplied through the query string are untrusted. Only
//! targets on the page's own origin are honoured; anything else falls back to
//! the default URL.

use url::Url;

/// Whether `candidate` points at the same scheme, host and port as `current`.
///
/// Relative candidates are resolved against `current` first, so a plain path
/// is same-origin while a protocol-relative `//host/path` is judged by its
/// host. Candidates that do not parse, and opaque origins such as
/// `javascript:` URLs, are never same-origin.
pub fn is_same_origin(candidate: &str, current: &Url) -> bool {
    match current.join(candidate) {
        Ok(resolved) => {
            let origin = resolved.origin();
            origin.is_tuple() && origin == current.origin()
        }
        Err(_) => false,
    }
}

/// Choose where to send the user once authentication completes.
///
/// In order of precedence: the third-party auth completion URL when one is
/// configured, then `next_url` when it is same-origin, then `default_url`.
pub fn resolve_redirect(
    finish_auth_url: Option<&str>,
    next_url: Option<&str>,
    current: &Url,
    default_url: &str,
) -> String {
    if let Some(finish_auth_url) = finish_auth_url.filter(|url| !url.is_empty()) {
        return finish_auth_url.to_string();
    }

    if let Some(next_url) = next_url.filter(|url| !url.is_empty()) {
        if is_same_origin(next_url, current) {
            return next_url.to_string();
        }
        tracing::warn!(
            next_url,
            origin = %current.origin().ascii_serialization(),
            "Ignoring redirect to another origin"
        );
    }

    default_url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORWARD_URL: &str =
        "/account/finish_auth?course_id=edX%2FDemoX%2FFall&enrollment_action=enroll&next=%2Fdashboard";

    fn current() -> Url {
        Url::parse("http://localhost:8000/login?next=%2Fdashboard").unwrap()
    }

    #[test]
    fn test_relative_paths_are_same_origin() {
        assert!(is_same_origin("/", &current()));
        assert!(is_same_origin(FORWARD_URL, &current()));
        assert!(is_same_origin("courses/demo", &current()));
    }

    #[test]
    fn test_absolute_url_on_same_origin() {
        assert!(is_same_origin("http://localhost:8000/courses", &current()));
    }

    #[test]
    fn test_other_origins_are_rejected() {
        let current = current();
        assert!(!is_same_origin("http://www.example.com", &current));
        assert!(!is_same_origin("http://localhost:9000/courses", &current));
        assert!(!is_same_origin("https://localhost:8000/courses", &current));
        assert!(!is_same_origin("//www.example.com/path", &current));
        assert!(!is_same_origin("/\\www.example.com", &current));
    }

    #[test]
    fn test_opaque_and_invalid_urls_are_rejected() {
        let current = current();
        assert!(!is_same_origin("javascript:alert(1)", &current));
        assert!(!is_same_origin("data:text/html,hi", &current));
        assert!(!is_same_origin("http://[::1", &current));
    }

    #[test]
    fn test_default_when_nothing_supplied() {
        assert_eq!(resolve_redirect(None, None, &current(), "/dashboard"), "/dashboard");
    }

    #[test]
    fn test_finish_auth_url_wins() {
        let target = resolve_redirect(
            Some("/auth/complete/provider/"),
            Some("/"),
            &current(),
            "/dashboard",
        );
        assert_eq!(target, "/auth/complete/provider/");

        let target = resolve_redirect(
            Some("/auth/complete/provider/"),
            Some("http://www.example.com"),
            &current(),
            "/dashboard",
        );
        assert_eq!(target, "/auth/complete/provider/");
    }

    #[test]
    fn test_same_origin_next_url_is_followed() {
        let target = resolve_redirect(None, Some(FORWARD_URL), &current(), "/dashboard");
        assert_eq!(target, FORWARD_URL);
    }

    #[test]
    fn test_external_next_url_falls_back_to_default() {
        let target = resolve_redirect(None, Some("http://www.example.com"), &current(), "/dashboard");
        assert_eq!(target, "/dashboard");
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let target = resolve_redirect(Some(""), Some(""), &current(), "/dashboard");
        assert_eq!(target, "/dashboard");
    }
}
