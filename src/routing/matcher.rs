//! Route matching module
//!
//! Implements the route table and path matching for endpoint dispatch.

use hyper::Method;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::handler::Handler;

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param(&'static str),
}

/// A registered route
struct Route {
    method: Method,
    segments: Vec<Segment>,
    handler: Handler,
}

/// Outcome of looking up a request
pub enum RouteLookup {
    Found {
        handler: Handler,
        params: HashMap<String, String>,
    },
    /// The path exists but not for this method
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

/// Route table, matched in registration order
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route; `pattern` uses `:name` for captured segments
    #[must_use]
    pub fn route(mut self, method: Method, pattern: &'static str, handler: Handler) -> Self {
        self.routes.push(Route {
            method,
            segments: parse_pattern(pattern),
            handler,
        });
        self
    }

    /// Find the handler for a request
    pub fn lookup(&self, method: &Method, path: &str) -> RouteLookup {
        let segments = split_path(path);
        let mut allowed = Vec::new();

        for route in &self.routes {
            let Some(params) = match_segments(&route.segments, &segments) else {
                continue;
            };
            if route_accepts(&route.method, method) {
                return RouteLookup::Found {
                    handler: route.handler,
                    params,
                };
            }
            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
        }

        if allowed.is_empty() {
            RouteLookup::NotFound
        } else {
            RouteLookup::MethodNotAllowed(allowed)
        }
    }
}

/// `HEAD` is served by the `GET` route for the same path
fn route_accepts(route_method: &Method, method: &Method) -> bool {
    route_method == method || (*method == Method::HEAD && *route_method == Method::GET)
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn parse_pattern(pattern: &'static str) -> Vec<Segment> {
    split_path(pattern)
        .into_iter()
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name),
            None => Segment::Static(s),
        })
        .collect()
}

/// Match path segments against a pattern, capturing parameters
fn match_segments(pattern: &[Segment], path: &[&str]) -> Option<HashMap<String, String>> {
    if pattern.len() != path.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (segment, value) in pattern.iter().zip(path) {
        match segment {
            Segment::Static(expected) => {
                if expected != value {
                    return None;
                }
            }
            Segment::Param(name) => {
                params.insert((*name).to_string(), decode_segment(value));
            }
        }
    }
    Some(params)
}

/// Percent-decode a path segment, keeping it raw if it is not valid UTF-8
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}
