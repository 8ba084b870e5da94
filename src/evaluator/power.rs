use crate::{error::EvalError, evaluator::core::EvalResult};

/// Raises the first operand to the power of the second.
///
/// Standard real exponentiation via `powf`:
/// - a zero exponent yields `1`, even for base `0`,
/// - a negative exponent yields the reciprocal of the positive-exponent
///   result,
/// - a fractional exponent on a non-negative base yields the principal real
///   root,
/// - a negative base with an integer exponent alternates sign normally.
///
/// A negative base with a fractional exponent has no real-valued result and
/// fails with `InvalidOperation` instead of yielding a not-a-number value.
///
/// # Example
/// ```
/// use opcalc::evaluator::power::power;
///
/// assert_eq!(power(2.0, -2.0).unwrap(), 0.25);
/// assert_eq!(power(5.0, 0.0).unwrap(), 1.0);
/// assert_eq!(power(-2.0, 3.0).unwrap(), -8.0);
/// assert!(power(-2.0, 0.5).is_err());
/// ```
pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(EvalError::InvalidOperation { details: format!("cannot raise the negative base {base} to the fractional exponent {exponent}"), });
    }

    Ok(base.powf(exponent))
}
