use serde_json::Value;

use crate::error::ApiError;
use crate::handler::ApiRequest;
use crate::utils::coerce::{number_value, operand, parse_int};
use crate::utils::numbers;

/// Integer-prefix operands `:a` and `:b` from the path
fn path_operands(req: &ApiRequest) -> Result<(f64, f64), ApiError> {
    match (parse_int(req.param("a")), parse_int(req.param("b"))) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ApiError::InvalidNumbers),
    }
}

/// Body operands `a` and `b`; absent or `null` counts as missing
fn body_operands(req: &ApiRequest, invalid: ApiError) -> Result<(f64, f64), ApiError> {
    let present = |name| req.field(name).filter(|v| !v.is_null());
    let (Some(a), Some(b)) = (present("a"), present("b")) else {
        return Err(ApiError::MissingOperands);
    };
    match (operand(a), operand(b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(invalid),
    }
}

/// A zero divisor is rejected before any other check
#[allow(clippy::float_cmp)]
fn reject_zero_divisor(req: &ApiRequest) -> Result<(), ApiError> {
    if req.field("b").and_then(operand).is_some_and(|b| b == 0.0) {
        return Err(ApiError::DivideByZero);
    }
    Ok(())
}

pub fn add(req: &ApiRequest) -> Result<Value, ApiError> {
    let (a, b) = path_operands(req)?;
    Ok(number_value(numbers::add(a, b)))
}

/// `/subtract/:a/from/:b` computes `b - a`
pub fn subtract(req: &ApiRequest) -> Result<Value, ApiError> {
    let (a, b) = path_operands(req)?;
    Ok(number_value(numbers::subtract(b, a)))
}

pub fn multiply(req: &ApiRequest) -> Result<Value, ApiError> {
    let (a, b) = body_operands(req, ApiError::InvalidOperands)?;
    Ok(number_value(numbers::multiply(a, b)))
}

pub fn divide(req: &ApiRequest) -> Result<Value, ApiError> {
    reject_zero_divisor(req)?;
    let (a, b) = body_operands(req, ApiError::InvalidOperands)?;
    Ok(number_value(numbers::divide(a, b)))
}

pub fn remainder(req: &ApiRequest) -> Result<Value, ApiError> {
    reject_zero_divisor(req)?;
    let (a, b) = body_operands(req, ApiError::InvalidNumbers)?;
    Ok(number_value(numbers::remainder(a, b)))
}
