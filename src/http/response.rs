//! HTTP response building module
//!
//! Every body is JSON: `{"result": ...}` on success, `{"error": "..."}` otherwise.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, SERVER};
use hyper::{Method, Response, StatusCode};
use serde_json::{json, Value};

use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::logger;

/// Methods answered by every path besides the routed ones
const ALLOW_OPTIONS: &str = "GET, POST, OPTIONS";

/// Build JSON response
pub fn build_json_response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
    let json = body.to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len())
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// 200 OK carrying an endpoint result
pub fn build_result_response(result: Value) -> Response<Full<Bytes>> {
    build_json_response(StatusCode::OK, &json!({ "result": result }))
}

/// Validation failure response
pub fn build_error_response(error: &ApiError) -> Response<Full<Bytes>> {
    build_json_response(error.status(), &json!({ "error": error.to_string() }))
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_json_response(StatusCode::NOT_FOUND, &json!({ "error": "Not Found" }))
}

/// Build 405 Method Not Allowed response listing the methods the path accepts
pub fn build_405_response(allowed: &[Method]) -> Response<Full<Bytes>> {
    let allow = allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let mut response =
        build_json_response(StatusCode::METHOD_NOT_ALLOWED, &json!({ "error": "Method Not Allowed" }));
    if let Ok(value) = HeaderValue::from_str(&allow) {
        response.headers_mut().insert("Allow", value);
    }
    response
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    build_json_response(StatusCode::PAYLOAD_TOO_LARGE, &json!({ "error": "Payload Too Large" }))
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", ALLOW_OPTIONS);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Methods", ALLOW_OPTIONS)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build health check response (for liveness/readiness probes)
pub fn build_health_response(status: &str, is_head: bool) -> Response<Full<Bytes>> {
    let mut response = build_json_response(StatusCode::OK, &json!({ "status": status }));
    if is_head {
        *response.body_mut() = Full::new(Bytes::new());
    }
    response
}

/// Headers every response carries: `Server`, plus CORS when enabled
pub fn apply_common_headers(mut response: Response<Full<Bytes>>, http: &HttpConfig) -> Response<Full<Bytes>> {
    let headers = response.headers_mut();
    if let Ok(server) = HeaderValue::from_str(&http.server_name) {
        headers.insert(SERVER, server);
    }
    if http.enable_cors {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    }
    response
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
