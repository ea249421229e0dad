//! Routing module
//!
//! Provides method + path-pattern routing:
//! - Static segments match exactly
//! - `:name` segments capture one percent-decoded path segment
//! - Empty segments are ignored, so trailing slashes do not matter

mod matcher;

pub use matcher::{RouteLookup, Router};
