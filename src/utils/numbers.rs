//! Arithmetic utilities
//!
//! Operands are `f64` so that integer inputs of any size and decimal body
//! values share one representation.

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Truncated remainder; the result takes the sign of `a`
pub fn remainder(a: f64, b: f64) -> f64 {
    a % b
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_subtract() {
        assert_eq!(add(2.0, 1.0), 3.0);
        assert_eq!(add(-4.0, 9.0), 5.0);
        assert_eq!(subtract(1.0, 2.0), -1.0);
        assert_eq!(subtract(100.0, 37.0), 63.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(10.0, 3.0), 30.0);
        assert_eq!(multiply(0.0, 7.0), 0.0);
        assert_eq!(multiply(-2.0, 2.5), -5.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(162.0, 3.0), 54.0);
        assert_eq!(divide(1.0, 4.0), 0.25);
        assert_eq!(divide(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(remainder(10.0, 3.0), 1.0);
        assert_eq!(remainder(-10.0, 3.0), -1.0);
        assert_eq!(remainder(10.0, -3.0), 1.0);
        assert_eq!(remainder(2.0, 5.0), 2.0);
    }
}
