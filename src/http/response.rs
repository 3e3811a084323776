//! HTTP response building module
//!
//! Provides builders for the plain-text responses the router produces,
//! decoupled from dispatch and business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 OK response with a plain-text body
pub fn build_text_response(body: String) -> Response<Full<Bytes>> {
    let content_length = body.len();
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response with a descriptive message
pub fn build_400_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from(message.to_string())))
        })
}

/// Build 403 Forbidden response
///
/// Returned for disallowed cross-origin requests; carries no body and no
/// CORS headers.
pub fn build_403_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(403)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response with a descriptive message
pub fn build_404_response(message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(message.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(message.to_string())))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build 500 Internal Server Error response
///
/// Surface for store failures; the failed operation is single-shot and is
/// not retried.
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("Internal Server Error")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_headers() {
        let resp = build_text_response("Hello, World!".to_string());
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_forbidden_has_no_body_or_cors_headers() {
        let resp = build_403_response();
        assert_eq!(resp.status(), 403);
        assert!(!resp.headers().contains_key("Access-Control-Allow-Origin"));
    }
}
