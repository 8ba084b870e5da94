use crate::{error::EvalError, evaluator::core::EvalResult};

/// Computes the principal square root of the operand.
///
/// The radicand must be non-negative; negative input fails with
/// `NegativeRadicand`. The result is always the non-negative root.
///
/// # Example
/// ```
/// use opcalc::evaluator::sqrt::sqrt;
///
/// assert_eq!(sqrt(16.0).unwrap(), 4.0);
/// assert!(sqrt(-4.0).is_err());
/// ```
pub fn sqrt(radicand: f64) -> EvalResult<f64> {
    if radicand < 0.0 {
        return Err(EvalError::NegativeRadicand { radicand });
    }

    Ok(radicand.sqrt())
}
