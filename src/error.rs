//! Validation errors surfaced to clients
//!
//! The `Display` text of each variant is the exact `error` string sent in the
//! 400 response body.

use hyper::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Parameters must be valid numbers.")]
    InvalidNumbers,

    #[error("Parameters \"a\" and \"b\" are required.")]
    MissingOperands,

    #[error("Parameters \"a\" and \"b\" must be valid numbers.")]
    InvalidOperands,

    #[error("Unable to divide by 0.")]
    DivideByZero,

    #[error("Parameter must be a number.")]
    NotANumber,

    #[error("Parameter \"character\" must be a single character.")]
    NotSingleCharacter,

    #[error("Parameter \"{0}\" must be a valid number.")]
    InvalidParameter(&'static str),

    #[error("Parameter \"array\" must be an array.")]
    NotAnArray,

    #[error("Request body must be valid JSON.")]
    InvalidJson,

    #[error("Failed to read request body.")]
    UnreadableBody,
}

impl ApiError {
    /// Every validation failure is a client error
    pub const fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::DivideByZero.to_string(), "Unable to divide by 0.");
        assert_eq!(
            ApiError::MissingOperands.to_string(),
            r#"Parameters "a" and "b" are required."#
        );
        assert_eq!(
            ApiError::InvalidParameter("length").to_string(),
            r#"Parameter "length" must be a valid number."#
        );
    }

    #[test]
    fn test_status_is_bad_request() {
        assert_eq!(ApiError::NotAnArray.status(), StatusCode::BAD_REQUEST);
    }
}
