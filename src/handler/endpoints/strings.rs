use serde_json::Value;

use crate::error::ApiError;
use crate::handler::ApiRequest;
use crate::utils::strings;

pub fn hello(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::from(strings::say_hello(req.param("string"))))
}

pub fn upper(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::from(strings::uppercase(req.param("string"))))
}

pub fn lower(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::from(strings::lowercase(req.param("string"))))
}

pub fn first_character(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::from(strings::first_character(req.param("string"))))
}

/// `?length=N`, defaulting to 1 when absent or empty
pub fn first_characters(req: &ApiRequest) -> Result<Value, ApiError> {
    let length = match req.query("length") {
        None | Some("") => 1,
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ApiError::InvalidParameter("length"))?,
    };
    Ok(Value::from(strings::first_characters(req.param("string"), length)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_string(s: &str) -> ApiRequest {
        ApiRequest::from_parts(&[("string", s)], &[], json!({}))
    }

    #[test]
    fn test_hello_upper_lower() {
        assert_eq!(hello(&with_string("world")), Ok(json!("Hello, world!")));
        assert_eq!(upper(&with_string("hello")), Ok(json!("HELLO")));
        assert_eq!(lower(&with_string("HELLO")), Ok(json!("hello")));
    }

    #[test]
    fn test_first_character() {
        assert_eq!(first_character(&with_string("hello")), Ok(json!("h")));
    }

    #[test]
    fn test_first_characters_length() {
        let req = ApiRequest::from_parts(&[("string", "sd32fg45")], &[("length", "4")], json!({}));
        assert_eq!(first_characters(&req), Ok(json!("sd32")));
    }

    #[test]
    fn test_first_characters_defaults_to_one() {
        assert_eq!(first_characters(&with_string("sd32fg45")), Ok(json!("s")));
        let req = ApiRequest::from_parts(&[("string", "sd32fg45")], &[("length", "")], json!({}));
        assert_eq!(first_characters(&req), Ok(json!("s")));
    }

    #[test]
    fn test_first_characters_rejects_bad_length() {
        for bad in ["abc", "-2", "1.5"] {
            let req = ApiRequest::from_parts(&[("string", "sd32fg45")], &[("length", bad)], json!({}));
            assert_eq!(
                first_characters(&req),
                Err(ApiError::InvalidParameter("length")),
                "length={bad}"
            );
        }
    }
}
