/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating an
/// operation. Evaluation errors are domain violations such as division by
/// zero or a negative radicand.
pub mod eval_error;
/// Usage errors.
///
/// Defines all error types that can occur while assembling a command from
/// command-line input, before any arithmetic runs: unknown operation names
/// and missing, surplus or unparsable operands.
pub mod usage_error;

pub use eval_error::EvalError;
pub use usage_error::UsageError;
