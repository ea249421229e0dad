//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: guards, route lookup, input
//! extraction, endpoint dispatch and access logging.

use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderMap, CONTENT_LENGTH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use super::request::{is_json_content, parse_body, parse_query, ApiRequest};
use crate::config::{AppState, HealthConfig};
use crate::error::ApiError;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteLookup;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let started = Instant::now();
    let access_log = state.config.logging.access_log;

    let entry = access_log.then(|| {
        let mut entry = AccessLogEntry::new(
            remote_addr.ip().to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.referer = header_string(req.headers(), REFERER.as_str());
        entry.user_agent = header_string(req.headers(), USER_AGENT.as_str());
        entry
    });

    let response = route_request(req, &state).await;
    let response = http::apply_common_headers(response, &state.config.http);

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or_default();
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Run the request through guards and the route table
async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body<Data = Bytes>,
    B::Error: Into<BoxError>,
{
    let config = &state.config;
    let method = req.method().clone();

    // 1. Preflight
    if method == Method::OPTIONS {
        return http::build_options_response(config.http.enable_cors);
    }

    // 2. Health probes
    if let Some(resp) = check_health(&method, req.uri().path(), &config.health) {
        return resp;
    }

    // 3. Declared body size
    if let Some(resp) = check_body_size(req.headers(), config.http.max_body_size) {
        return resp;
    }

    // 4. Route lookup
    let (handler, params) = match state.router.lookup(&method, req.uri().path()) {
        RouteLookup::Found { handler, params } => (handler, params),
        RouteLookup::MethodNotAllowed(allowed) => {
            logger::log_debug(&format!(
                "Method {method} not allowed for {}",
                req.uri().path()
            ));
            return http::build_405_response(&allowed);
        }
        RouteLookup::NotFound => return http::build_404_response(),
    };

    // 5. Extract inputs
    let query = parse_query(req.uri().query());
    let is_json = is_json_content(req.headers());
    let limit = usize::try_from(config.http.max_body_size).unwrap_or(usize::MAX);

    let bytes = match Limited::new(req.into_body(), limit).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            logger::log_warning(&format!("Request body exceeded {limit} bytes"));
            return http::build_413_response();
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return http::build_error_response(&ApiError::UnreadableBody);
        }
    };

    let body = match parse_body(&bytes, is_json) {
        Ok(body) => body,
        Err(e) => return http::build_error_response(&e),
    };

    // 6. Dispatch
    let mut response = match handler(&ApiRequest::new(params, query, body)) {
        Ok(result) => http::build_result_response(result),
        Err(e) => http::build_error_response(&e),
    };

    // HEAD keeps the GET headers, including Content-Length, without the body
    if method == Method::HEAD {
        *response.body_mut() = Full::new(Bytes::new());
    }
    response
}

/// Answer liveness/readiness probes
fn check_health(method: &Method, path: &str, health: &HealthConfig) -> Option<Response<Full<Bytes>>> {
    if !health.enabled || !(*method == Method::GET || *method == Method::HEAD) {
        return None;
    }
    if path == health.liveness_path || path == health.readiness_path {
        return Some(http::build_health_response("ok", *method == Method::HEAD));
    }
    None
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(headers: &HeaderMap, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = headers.get(CONTENT_LENGTH)?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_warning(&format!(
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

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

const fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
