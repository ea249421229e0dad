use serde_json::Value;

use crate::error::ApiError;
use crate::handler::ApiRequest;
use crate::utils::arrays;
use crate::utils::coerce::parse_int;

pub fn element_at_index(req: &ApiRequest) -> Result<Value, ApiError> {
    let index = req
        .param("index")
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidParameter("index"))?;
    let array = req.array_field("array")?;
    Ok(arrays::get_nth_element(index, array)
        .cloned()
        .unwrap_or(Value::Null))
}

pub fn to_string(req: &ApiRequest) -> Result<Value, ApiError> {
    let array = req.array_field("array")?;
    Ok(Value::String(arrays::array_to_csv_string(array)))
}

pub fn append(req: &ApiRequest) -> Result<Value, ApiError> {
    let array = req.array_field("array")?;
    let value = req.field("value").cloned().unwrap_or(Value::Null);
    Ok(Value::Array(arrays::add_to_array(value, array)))
}

pub fn starts_with_vowel(req: &ApiRequest) -> Result<Value, ApiError> {
    let array = req.array_field("array")?;
    Ok(Value::Array(arrays::elements_starting_with_a_vowel(array)))
}

/// `?index=N` with integer-prefix parsing, defaulting to 0 when absent or empty
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn remove_element(req: &ApiRequest) -> Result<Value, ApiError> {
    let index = match req.query("index") {
        None | Some("") => 0,
        // the cast saturates for huge values, which are out of range anyway
        Some(raw) => parse_int(raw)
            .filter(|n| *n >= 0.0)
            .map(|n| n as usize)
            .ok_or(ApiError::InvalidParameter("index"))?,
    };
    let array = req.array_field("array")?;
    Ok(Value::Array(arrays::remove_nth_element(index, array)))
}
