//! Request handler module
//!
//! Responsible for the request pipeline, input extraction and the endpoint
//! handlers that validate inputs before calling into `utils`.

pub mod endpoints;
mod request;
pub mod router;

pub use request::{ApiRequest, Handler};
pub use router::handle_request;
