use crate::{error::EvalError, evaluator::core::EvalResult};

/// Adds two operands.
///
/// Total over finite operands, with exact IEEE-754 double semantics.
///
/// # Example
/// ```
/// use opcalc::evaluator::scalar::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// ```
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts the second operand from the first.
///
/// # Example
/// ```
/// use opcalc::evaluator::scalar::subtract;
///
/// assert_eq!(subtract(3.0, 8.0), -5.0);
/// ```
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two operands.
///
/// # Example
/// ```
/// use opcalc::evaluator::scalar::multiply;
///
/// assert_eq!(multiply(-4.0, -5.0), 20.0);
/// ```
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides the first operand by the second.
///
/// The divisor is checked explicitly: dividing by zero (including `-0.0`)
/// fails with `DivisionByZero` for every dividend, rather than producing an
/// infinite or not-a-number value.
///
/// # Example
/// ```
/// use opcalc::evaluator::scalar::divide;
///
/// assert_eq!(divide(7.0, 2.0).unwrap(), 3.5);
/// assert!(divide(10.0, 0.0).is_err());
/// assert!(divide(0.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> EvalResult<f64> {
    if b == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    Ok(a / b)
}
