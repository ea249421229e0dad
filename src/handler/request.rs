//! Request input extraction
//!
//! Collects path parameters, query parameters and the JSON body into one
//! value handed to endpoint handlers.

use hyper::header::CONTENT_TYPE;
use hyper::HeaderMap;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::ApiError;

/// Endpoint handler: validated inputs in, `result` value or validation error out
pub type Handler = fn(&ApiRequest) -> Result<Value, ApiError>;

/// Inputs of a single request
#[derive(Debug, Default)]
pub struct ApiRequest {
    params: HashMap<String, String>,
    query: HashMap<String, String>,
    body: Value,
}

impl ApiRequest {
    pub fn new(params: HashMap<String, String>, query: HashMap<String, String>, body: Value) -> Self {
        Self {
            params,
            query,
            body,
        }
    }

    /// Path parameter; routing guarantees declared parameters are present
    pub fn param(&self, name: &str) -> &str {
        self.params.get(name).map_or("", String::as_str)
    }

    /// Query parameter, `None` when absent
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Body field, `None` when absent or when the body is not an object
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Body field that must hold a JSON array
    pub fn array_field(&self, name: &str) -> Result<&[Value], ApiError> {
        self.field(name)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or(ApiError::NotAnArray)
    }
}

/// Parse an `application/x-www-form-urlencoded` query string; first key wins
pub fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    let mut parsed = HashMap::new();
    let Some(query) = query else {
        return parsed;
    };

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        parsed
            .entry(decode_component(key))
            .or_insert_with(|| decode_component(value));
    }
    parsed
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(_)) => spaced,
        Ok(Cow::Owned(decoded)) => decoded,
        Err(_) => spaced,
    }
}

/// Whether the request declares a JSON body (`application/json` or `*/*+json`)
pub fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

/// Parse the request body.
///
/// Bodies that are empty or not declared as JSON count as an empty object.
/// A JSON body must be an object or an array.
pub fn parse_body(bytes: &[u8], is_json: bool) -> Result<Value, ApiError> {
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(body @ (Value::Object(_) | Value::Array(_))) => Ok(body),
        _ => Err(ApiError::InvalidJson),
    }
}

#[cfg(test)]
impl ApiRequest {
    /// Build a request from literal inputs
    pub fn from_parts(params: &[(&str, &str)], query: &[(&str, &str)], body: Value) -> Self {
        let owned = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };
        Self::new(owned(params), owned(query), body)
    }
}
