//! # opcalc
//!
//! opcalc is a small command-line calculator written in Rust. Each invocation
//! evaluates exactly one arithmetic operation over one or two floating-point
//! operands and prints the result, or reports a well-defined error.
//!
//! Supported operations:
//!
//! | Operation  | Operands | Meaning                          |
//! |------------|----------|----------------------------------|
//! | `add`      | 2        | `a + b`                          |
//! | `subtract` | 2        | `a - b`                          |
//! | `multiply` | 2        | `a * b`                          |
//! | `divide`   | 2        | `a / b`, `b` must not be zero    |
//! | `modulo`   | 2        | truncated remainder of `a / b`   |
//! | `power`    | 2        | `a` raised to `b`                |
//! | `sqrt`     | 1        | principal square root of `n`     |

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::command::Command;

/// Builds, validates and renders a single operation invocation.
///
/// This module implements the caller side of the evaluator contract: it
/// resolves the operation name, checks the operand count, parses each operand
/// string into a finite number, and formats the result line. The evaluator
/// itself never sees unparsed or miscounted input.
///
/// # Responsibilities
/// - Resolves operation identifiers against the fixed operation set.
/// - Parses operand strings, rejecting non-numeric and non-finite values.
/// - Renders results as `<a> <operation> <b> = <result>` (or
///   `sqrt(<n>) = <result>` for the unary operation).
pub mod command;
/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors the calculator can raise, split by the
/// phase that detects them: usage errors are caught while assembling a
/// command from command-line input, evaluation errors are domain violations
/// raised by the arithmetic functions themselves.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (usage, evaluation).
/// - Carries the offending datum and a fixed human-readable message.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the arithmetic operations and their domain checks.
///
/// The evaluator is a set of pure functions, one per operation, plus a static
/// table mapping each operation identifier to its arity and implementation.
/// Every function is deterministic and free of side effects: the same
/// operands always yield the same value or the same failure.
///
/// # Responsibilities
/// - Implements the seven operations over `f64` operands.
/// - Checks the domain restriction of each partial operation.
/// - Exposes the operation table used for lookup and dispatch.
pub mod evaluator;

/// Evaluates one operation invocation and returns the rendered result line.
///
/// This is the library entry point used by the binary. It builds a
/// [`Command`] from the operation name and the raw operand strings, executes
/// it, and renders the result. Validation failures and domain violations are
/// both returned as boxed errors for the caller to report.
///
/// # Errors
/// Returns an error if the operation name is unknown, if the operand count or
/// an operand string is invalid, or if the operation fails its domain check.
///
/// # Examples
/// ```
/// use opcalc::get_result;
///
/// let operands = vec!["2".to_string(), "3".to_string()];
/// let line = get_result("add", &operands).unwrap();
/// assert_eq!(line, "2 add 3 = 5");
///
/// // Division by zero is reported as an error, not a value.
/// let operands = vec!["10".to_string(), "0".to_string()];
/// assert!(get_result("divide", &operands).is_err());
/// ```
pub fn get_result(operation: &str,
                  operands: &[String])
                  -> Result<String, Box<dyn std::error::Error>> {
    let command = Command::from_parts(operation, operands)?;
    let result = command.execute()?;

    Ok(command.render(result))
}
