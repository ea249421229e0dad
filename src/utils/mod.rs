//! Pure utility functions behind the endpoints
//!
//! Nothing here performs I/O or validation; handlers check inputs first.

pub mod arrays;
pub mod booleans;
pub mod coerce;
pub mod numbers;
pub mod strings;
