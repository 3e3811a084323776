//! Endpoint handlers
//!
//! Business logic for the routed endpoints. KV path segments are used
//! verbatim after a naive `/` split: no percent-decoding, so keys or values
//! containing `/` are unsupported.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::sync::Arc;
use uuid::Uuid;

const KV_PUT_USAGE: &str = "Invalid KV put request. Usage: /kv/put/:key/:value";
const KV_GET_USAGE: &str = "Invalid KV get request. Usage: /kv/get/:key";

/// `/message`: static greeting
pub fn message() -> Response<Full<Bytes>> {
    http::build_text_response("Hello, World!".to_string())
}

/// `/random`: freshly generated v4 UUID, a new value per call
pub fn random() -> Response<Full<Bytes>> {
    http::build_text_response(Uuid::new_v4().to_string())
}

/// `/kv/put/:key/:value`: store a value under a key.
///
/// Both segments must be present and non-empty; otherwise 400 and no store
/// call is attempted. The put is awaited to completion before the success
/// response is constructed.
pub async fn kv_put(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let segments: Vec<&str> = path.split('/').collect();
    let key = segments.get(3).copied().filter(|s| !s.is_empty());
    let value = segments.get(4).copied().filter(|s| !s.is_empty());

    let (Some(key), Some(value)) = (key, value) else {
        return http::build_400_response(KV_PUT_USAGE);
    };

    match state.kv.put(key, value).await {
        Ok(()) => http::build_text_response(format!("Stored {key}: {value} in KV!")),
        Err(e) => {
            logger::log_error(&format!("KV put failed for key '{key}': {e}"));
            http::build_500_response()
        }
    }
}

/// `/kv/get/:key`: look up a value by key.
///
/// The key segment must be present and non-empty; otherwise 400 and no store
/// call is attempted. A miss is 404 with a descriptive message.
pub async fn kv_get(path: &str, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let segments: Vec<&str> = path.split('/').collect();
    let Some(key) = segments.get(3).copied().filter(|s| !s.is_empty()) else {
        return http::build_400_response(KV_GET_USAGE);
    };

    match state.kv.get(key).await {
        Ok(Some(value)) => http::build_text_response(format!("Value for {key}: {value}")),
        Ok(None) => http::build_404_response(&format!("Key {key} not found in KV.")),
        Err(e) => {
            logger::log_error(&format!("KV get failed for key '{key}': {e}"));
            http::build_500_response()
        }
    }
}
