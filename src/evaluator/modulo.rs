use crate::{error::EvalError, evaluator::core::EvalResult};

/// Computes the remainder of dividing the first operand by the second.
///
/// The result is the truncated-division remainder: its sign follows the
/// dividend `a`, not the divisor. This is the semantics of Rust's `%`
/// operator on floating-point values, so `modulo(-10.0, 3.0)` is `-1` and
/// `modulo(10.0, -3.0)` is `1`.
///
/// A zero divisor (including `-0.0`) fails with `ModuloByZero` for every
/// dividend.
///
/// # Example
/// ```
/// use opcalc::evaluator::modulo::modulo;
///
/// assert_eq!(modulo(-10.0, 3.0).unwrap(), -1.0);
/// assert_eq!(modulo(10.0, -3.0).unwrap(), 1.0);
/// assert!(modulo(10.0, 0.0).is_err());
/// ```
pub fn modulo(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::ModuloByZero);
    }

    Ok(a % b)
}
