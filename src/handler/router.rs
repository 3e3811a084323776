//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: CORS gating, route matching, and
//! dispatch to endpoint handlers.

use crate::config::AppState;
use crate::cors;
use crate::handler::endpoints;
use crate::http;
use crate::logger;
use crate::routing::{self, Endpoint};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Dispatch order: body-size check, preflight short-circuit, origin gate,
/// then path dispatch over the route table. The allow-list is read fresh
/// from configuration on every request.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), req.uri().path());
    }

    // 1. Check body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 2. Preflight requests short-circuit through the policy evaluator
    if cors::is_preflight(&req) {
        let resp = cors::preflight_response(&req, &state.config.http.allowed_origins);
        if access_log {
            logger::log_response(resp.status().as_u16());
        }
        return Ok(resp);
    }

    // 3. Origin gate: a disallowed cross-origin request never reaches a handler
    let decision = cors::evaluate(
        cors::origin_header(&req),
        &state.config.http.allowed_origins,
    );
    if !decision.allowed {
        logger::log_warning(&format!(
            "Blocked cross-origin request for {}",
            req.uri().path()
        ));
        return Ok(http::build_403_response());
    }

    // 4. Dispatch on path; the query string is ignored for routing
    let mut response = dispatch(req.uri().path(), &state).await;

    // 5. Annotate successful responses when the origin matched the allow-list
    if let Some(origin) = decision.matched_origin {
        if response.status().is_success() {
            cors::apply_allow_origin(&mut response, &origin);
        }
    }

    if access_log {
        logger::log_response(response.status().as_u16());
    }
    Ok(response)
}

/// Route request based on path, first matching table entry wins
async fn dispatch(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match routing::match_route(path, routing::route_table()) {
        Some(route) => match route.endpoint {
            Endpoint::Message => endpoints::message(),
            Endpoint::Random => endpoints::random(),
            Endpoint::KvPut => endpoints::kv_put(path, state).await,
            Endpoint::KvGet => endpoints::kv_get(path, state).await,
        },
        None => http::build_404_response("Not Found"),
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
