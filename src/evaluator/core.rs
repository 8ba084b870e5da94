use crate::{
    error::EvalError,
    evaluator::{modulo, power, scalar, sqrt},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Type alias for operation handlers.
///
/// An operation receives a slice of parsed operands and returns the computed
/// value wrapped in `EvalResult`.
type OperationFn = fn(&[f64]) -> EvalResult<f64>;

/// Defines the supported operations by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of operands the operation takes,
/// - a function pointer implementing the operation.
///
/// The macro produces:
/// - `OperationDef` (per-operation metadata),
/// - `OPERATION_TABLE` (static table for lookup),
/// - `OPERATIONS` (public list of operation names).
macro_rules! operations {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Metadata for a single supported operation.
        pub struct OperationDef {
            /// The operation identifier as written on the command line.
            pub name:  &'static str,
            /// The exact number of operands the operation takes.
            pub arity: usize,
            func:  OperationFn,
        }
        static OPERATION_TABLE: &[OperationDef] = &[
            $(
                OperationDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of all supported operations, in declaration order.
        pub const OPERATIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

operations! {
    "add"      => { arity: 2, func: |args| Ok(scalar::add(args[0], args[1])) },
    "subtract" => { arity: 2, func: |args| Ok(scalar::subtract(args[0], args[1])) },
    "multiply" => { arity: 2, func: |args| Ok(scalar::multiply(args[0], args[1])) },
    "divide"   => { arity: 2, func: |args| scalar::divide(args[0], args[1]) },
    "modulo"   => { arity: 2, func: |args| modulo::modulo(args[0], args[1]) },
    "power"    => { arity: 2, func: |args| power::power(args[0], args[1]) },
    "sqrt"     => { arity: 1, func: |args| sqrt::sqrt(args[0]) },
}

impl OperationDef {
    /// Applies the operation to the given operands.
    ///
    /// The operands must already be validated: parsed to finite numbers and
    /// counted against [`OperationDef::arity`]. The operation performs only
    /// its own domain check.
    ///
    /// # Panics
    /// Panics if the number of operands differs from `self.arity`. Operand
    /// counts are validated when a command is built, so this cannot occur
    /// when dispatching through the library entry point.
    ///
    /// # Example
    /// ```
    /// use opcalc::evaluator::core::lookup;
    ///
    /// let op = lookup("add").unwrap();
    /// assert_eq!(op.apply(&[2.0, 3.0]).unwrap(), 5.0);
    ///
    /// let op = lookup("divide").unwrap();
    /// assert!(op.apply(&[10.0, 0.0]).is_err());
    /// ```
    pub fn apply(&self, operands: &[f64]) -> EvalResult<f64> {
        assert_eq!(operands.len(), self.arity, "operand count is validated before dispatch");

        (self.func)(operands)
    }
}

/// Looks up an operation by its identifier.
///
/// Returns `None` if the name is not in the fixed operation set; the caller
/// reports that as an unknown-operation failure without ever invoking the
/// evaluator.
///
/// # Example
/// ```
/// use opcalc::evaluator::core::lookup;
///
/// assert!(lookup("sqrt").is_some());
/// assert_eq!(lookup("sqrt").unwrap().arity, 1);
/// assert!(lookup("cbrt").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OperationDef> {
    OPERATION_TABLE.iter().find(|op| op.name == name)
}
