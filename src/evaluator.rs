/// The core module defines the operation table and dispatch.
///
/// It declares the `EvalResult` alias used by every operation, the
/// `OperationDef` metadata record, and the static table mapping each
/// operation identifier to its arity and implementation function. Lookup
/// through the table is the only way an operation is selected, so every
/// supported identifier is guaranteed to be handled.
///
/// # Responsibilities
/// - Declares the static operation table and the public name list.
/// - Resolves identifiers to operation definitions.
/// - Dispatches validated operands to the implementation functions.
pub mod core;
/// Truncated-division remainder.
pub mod modulo;
/// Real exponentiation.
pub mod power;
/// The scalar module implements the four basic arithmetic operations.
///
/// Addition, subtraction and multiplication are total over finite operands.
/// Division checks its divisor and fails explicitly rather than producing an
/// infinite value.
pub mod scalar;
/// Principal square root.
pub mod sqrt;
