use serde_json::Value;

use crate::error::ApiError;
use crate::handler::ApiRequest;
use crate::utils::booleans;
use crate::utils::coerce::to_number;

pub fn negate(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::Bool(booleans::negate(req.field("value"))))
}

pub fn truthiness(req: &ApiRequest) -> Result<Value, ApiError> {
    Ok(Value::Bool(booleans::truthiness(req.field("value"))))
}

pub fn is_odd(req: &ApiRequest) -> Result<Value, ApiError> {
    let number = to_number(req.param("number")).ok_or(ApiError::NotANumber)?;
    Ok(Value::Bool(booleans::is_odd(number)))
}

pub fn starts_with(req: &ApiRequest) -> Result<Value, ApiError> {
    let character = req.param("character");
    // Length in UTF-16 code units, so astral characters count as two
    if character.encode_utf16().count() > 1 {
        return Err(ApiError::NotSingleCharacter);
    }
    Ok(Value::Bool(booleans::starts_with(req.param("string"), character)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(v: Value) -> ApiRequest {
        ApiRequest::from_parts(&[], &[], json!({ "value": v }))
    }

    fn number(n: &str) -> ApiRequest {
        ApiRequest::from_parts(&[("number", n)], &[], json!({}))
    }

    fn starts(string: &str, character: &str) -> ApiRequest {
        ApiRequest::from_parts(&[("string", string), ("character", character)], &[], json!({}))
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(&value(json!(false))), Ok(json!(true)));
        assert_eq!(negate(&value(json!(true))), Ok(json!(false)));
        assert_eq!(negate(&ApiRequest::from_parts(&[], &[], json!({}))), Ok(json!(true)));
    }

    #[test]
    fn test_truthiness() {
        assert_eq!(truthiness(&value(json!(""))), Ok(json!(false)));
        assert_eq!(truthiness(&value(json!(0))), Ok(json!(false)));
        assert_eq!(truthiness(&value(json!(null))), Ok(json!(false)));
        assert_eq!(truthiness(&value(json!("0"))), Ok(json!(true)));
        assert_eq!(truthiness(&value(json!({}))), Ok(json!(true)));
    }

    #[test]
    fn test_is_odd() {
        assert_eq!(is_odd(&number("7")), Ok(json!(true)));
        assert_eq!(is_odd(&number("84")), Ok(json!(false)));
        assert_eq!(is_odd(&number("-3")), Ok(json!(true)));
        assert_eq!(is_odd(&number("car")), Err(ApiError::NotANumber));
    }

    #[test]
    fn test_starts_with() {
        assert_eq!(starts_with(&starts("cat", "c")), Ok(json!(true)));
        assert_eq!(starts_with(&starts("cat", "d")), Ok(json!(false)));
        assert_eq!(starts_with(&starts("Cat", "c")), Ok(json!(false)));
        assert_eq!(starts_with(&starts("cat", "ca")), Err(ApiError::NotSingleCharacter));
    }

    #[test]
    fn test_starts_with_counts_utf16_units() {
        assert_eq!(starts_with(&starts("éclair", "é")), Ok(json!(true)));
        assert_eq!(
            starts_with(&starts("\u{1F600}smile", "\u{1F600}")),
            Err(ApiError::NotSingleCharacter)
        );
    }
}
