//! Endpoint table
//!
//! Each handler extracts its inputs, validates them and calls the matching
//! utility function.

mod arrays;
mod booleans;
mod numbers;
mod strings;

use hyper::Method;

use crate::routing::Router;

/// All routes served by the application
pub fn routes() -> Router {
    Router::new()
        // strings
        .route(Method::GET, "/strings/hello/:string", strings::hello)
        .route(Method::GET, "/strings/upper/:string", strings::upper)
        .route(Method::GET, "/strings/lower/:string", strings::lower)
        .route(Method::GET, "/strings/first-character/:string", strings::first_character)
        .route(Method::GET, "/strings/first-characters/:string", strings::first_characters)
        // numbers
        .route(Method::GET, "/numbers/add/:a/and/:b", numbers::add)
        .route(Method::GET, "/numbers/subtract/:a/from/:b", numbers::subtract)
        .route(Method::POST, "/numbers/multiply", numbers::multiply)
        .route(Method::POST, "/numbers/divide", numbers::divide)
        .route(Method::POST, "/numbers/remainder", numbers::remainder)
        // booleans
        .route(Method::POST, "/booleans/negate", booleans::negate)
        .route(Method::POST, "/booleans/truthiness", booleans::truthiness)
        .route(Method::GET, "/booleans/is-odd/:number", booleans::is_odd)
        .route(Method::GET, "/booleans/:string/starts-with/:character", booleans::starts_with)
        // arrays
        .route(Method::POST, "/arrays/element-at-index/:index", arrays::element_at_index)
        .route(Method::POST, "/arrays/to-string", arrays::to_string)
        .route(Method::POST, "/arrays/append", arrays::append)
        .route(Method::POST, "/arrays/starts-with-vowel", arrays::starts_with_vowel)
        .route(Method::POST, "/arrays/remove-element", arrays::remove_element)
}
