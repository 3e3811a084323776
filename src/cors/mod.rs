//! CORS policy evaluation module
//!
//! Decides whether a request's declared origin is permitted by the configured
//! allow-list and produces the headers to attach to a response, including
//! standalone preflight responses. Pure decision logic: no side effects
//! beyond header construction.
//!
//! The allow-list is a comma-separated configuration string, parsed fresh on
//! every request. Matching is exact string equality against the origin.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response};

/// CORS header names.
pub mod headers {
    /// `Origin` header.
    pub const ORIGIN: &str = "origin";
    /// `Access-Control-Allow-Origin` header.
    pub const ALLOW_ORIGIN: &str = "access-control-allow-origin";
    /// `Access-Control-Allow-Methods` header.
    pub const ALLOW_METHODS: &str = "access-control-allow-methods";
    /// `Access-Control-Allow-Headers` header.
    pub const ALLOW_HEADERS: &str = "access-control-allow-headers";
    /// `Access-Control-Max-Age` header.
    pub const MAX_AGE: &str = "access-control-max-age";
    /// `Access-Control-Request-Method` header (preflight).
    pub const REQUEST_METHOD: &str = "access-control-request-method";
    /// `Access-Control-Request-Headers` header (preflight).
    pub const REQUEST_HEADERS: &str = "access-control-request-headers";
}

/// Methods advertised on a preflight response when the browser did not name one
const DEFAULT_ALLOW_METHODS: &str = "GET, HEAD, OPTIONS";

/// Preflight cache duration advertised to browsers
const MAX_AGE_SECS: &str = "86400";

/// Per-request CORS decision; ephemeral, never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    /// Whether the request may proceed to a handler
    pub allowed: bool,
    /// The allow-list entry the origin matched, if any
    pub matched_origin: Option<String>,
}

/// Parse the configured allow-list string.
///
/// Splits on commas, trims whitespace, drops empty entries, preserves order.
pub fn parse_allow_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Decide whether a request with the given `Origin` header may proceed.
///
/// No origin means a same-origin or non-browser request: allowed, nothing to
/// annotate. A present origin must match an allow-list entry exactly; an
/// empty origin value can never match and is rejected.
pub fn evaluate(origin: Option<&str>, raw_allow_list: &str) -> CorsDecision {
    match origin {
        None => CorsDecision {
            allowed: true,
            matched_origin: None,
        },
        Some(origin) => {
            let allow_list = parse_allow_list(raw_allow_list);
            if allow_list.iter().any(|entry| entry == origin) {
                CorsDecision {
                    allowed: true,
                    matched_origin: Some(origin.to_string()),
                }
            } else {
                CorsDecision {
                    allowed: false,
                    matched_origin: None,
                }
            }
        }
    }
}

/// Get the `Origin` header value from a request
pub fn origin_header<B>(req: &Request<B>) -> Option<&str> {
    req.headers()
        .get(headers::ORIGIN)
        .and_then(|v| v.to_str().ok())
}

/// Check whether a request is a CORS preflight request.
///
/// A preflight is an `OPTIONS` request carrying both an `Origin` and an
/// `Access-Control-Request-Method` header.
pub fn is_preflight<B>(req: &Request<B>) -> bool {
    req.method() == Method::OPTIONS
        && req.headers().contains_key(headers::ORIGIN)
        && req.headers().contains_key(headers::REQUEST_METHOD)
}

/// Build the response for a preflight request.
///
/// Allowed origins get 204 with the CORS header set: the origin is echoed
/// back, the requested method is echoed (falling back to a fixed set), and
/// requested headers are echoed when present. Disallowed or missing origins
/// get 403 with no CORS headers.
pub fn preflight_response<B>(req: &Request<B>, raw_allow_list: &str) -> Response<Full<Bytes>> {
    let decision = evaluate(origin_header(req), raw_allow_list);
    let Some(origin) = decision.matched_origin else {
        return crate::http::build_403_response();
    };

    let mut builder = Response::builder()
        .status(204)
        .header(headers::ALLOW_ORIGIN, origin)
        .header(headers::MAX_AGE, MAX_AGE_SECS);

    builder = match req.headers().get(headers::REQUEST_METHOD) {
        Some(requested) => builder.header(headers::ALLOW_METHODS, requested.clone()),
        None => builder.header(headers::ALLOW_METHODS, DEFAULT_ALLOW_METHODS),
    };

    if let Some(requested) = req.headers().get(headers::REQUEST_HEADERS) {
        builder = builder.header(headers::ALLOW_HEADERS, requested.clone());
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        crate::logger::log_error(&format!("Failed to build preflight response: {e}"));
        Response::new(Full::new(Bytes::new()))
    })
}

/// Attach `Access-Control-Allow-Origin` to a response for a matched origin
pub fn apply_allow_origin(response: &mut Response<Full<Bytes>>, origin: &str) {
    if let Ok(value) = HeaderValue::from_str(origin) {
        response.headers_mut().insert(headers::ALLOW_ORIGIN, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOW_LIST: &str = "https://allowed.example.com, https://also-allowed.example.com";

    fn preflight_request(origin: &str, method: &str, request_headers: Option<&str>) -> Request<()> {
        let mut builder = Request::builder()
            .method(Method::OPTIONS)
            .uri("/message")
            .header(headers::ORIGIN, origin)
            .header(headers::REQUEST_METHOD, method);

        if let Some(h) = request_headers {
            builder = builder.header(headers::REQUEST_HEADERS, h);
        }

        builder.body(()).unwrap()
    }

    #[test]
    fn test_parse_allow_list_trims_and_drops_empties() {
        let parsed = parse_allow_list(" https://a.example.com , ,https://b.example.com,, ");
        assert_eq!(parsed, vec!["https://a.example.com", "https://b.example.com"]);
    }

    #[test]
    fn test_parse_allow_list_empty_string() {
        assert!(parse_allow_list("").is_empty());
    }

    #[test]
    fn test_parse_allow_list_preserves_order() {
        let parsed = parse_allow_list("https://b.example.com,https://a.example.com");
        assert_eq!(parsed[0], "https://b.example.com");
        assert_eq!(parsed[1], "https://a.example.com");
    }

    #[test]
    fn test_evaluate_without_origin_skips_cors() {
        let decision = evaluate(None, ALLOW_LIST);
        assert!(decision.allowed);
        assert_eq!(decision.matched_origin, None);
    }

    #[test]
    fn test_evaluate_allowed_origin() {
        let decision = evaluate(Some("https://allowed.example.com"), ALLOW_LIST);
        assert!(decision.allowed);
        assert_eq!(
            decision.matched_origin,
            Some("https://allowed.example.com".to_string())
        );
    }

    #[test]
    fn test_evaluate_disallowed_origin() {
        let decision = evaluate(Some("https://bad.example.com"), ALLOW_LIST);
        assert!(!decision.allowed);
        assert_eq!(decision.matched_origin, None);
    }

    #[test]
    fn test_evaluate_empty_origin_is_rejected() {
        let decision = evaluate(Some(""), ALLOW_LIST);
        assert!(!decision.allowed);
    }

    #[test]
    fn test_is_preflight() {
        let preflight = preflight_request("https://allowed.example.com", "GET", None);
        assert!(is_preflight(&preflight));

        // OPTIONS without Access-Control-Request-Method is not a preflight
        let options_only = Request::builder()
            .method(Method::OPTIONS)
            .uri("/message")
            .header(headers::ORIGIN, "https://allowed.example.com")
            .body(())
            .unwrap();
        assert!(!is_preflight(&options_only));

        // GET with an origin is not a preflight
        let get = Request::builder()
            .method(Method::GET)
            .uri("/message")
            .header(headers::ORIGIN, "https://allowed.example.com")
            .header(headers::REQUEST_METHOD, "GET")
            .body(())
            .unwrap();
        assert!(!is_preflight(&get));
    }

    #[test]
    fn test_preflight_allowed_origin() {
        let req = preflight_request("https://allowed.example.com", "GET", Some("Content-Type"));
        let resp = preflight_response(&req, ALLOW_LIST);

        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()[headers::ALLOW_ORIGIN],
            "https://allowed.example.com"
        );
        assert_eq!(resp.headers()[headers::ALLOW_METHODS], "GET");
        assert_eq!(resp.headers()[headers::ALLOW_HEADERS], "Content-Type");
    }

    #[test]
    fn test_preflight_disallowed_origin() {
        let req = preflight_request("https://bad.example.com", "GET", None);
        let resp = preflight_response(&req, ALLOW_LIST);

        assert_eq!(resp.status(), 403);
        assert!(!resp.headers().contains_key(headers::ALLOW_ORIGIN));
    }

    #[test]
    fn test_preflight_without_requested_headers_omits_allow_headers() {
        let req = preflight_request("https://allowed.example.com", "POST", None);
        let resp = preflight_response(&req, ALLOW_LIST);

        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()[headers::ALLOW_METHODS], "POST");
        assert!(!resp.headers().contains_key(headers::ALLOW_HEADERS));
    }

    #[test]
    fn test_apply_allow_origin() {
        let mut resp = crate::http::build_text_response("ok".to_string());
        apply_allow_origin(&mut resp, "https://allowed.example.com");
        assert_eq!(
            resp.headers()[headers::ALLOW_ORIGIN],
            "https://allowed.example.com"
        );
    }
}
