#[derive(Debug)]
/// Represents all domain violations the evaluator can detect.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted to take the remainder of a division by zero.
    ModuloByZero,
    /// Attempted to take the square root of a negative number.
    NegativeRadicand {
        /// The offending radicand.
        radicand: f64,
    },
    /// The operation has no real-valued result for the given operands.
    InvalidOperation {
        /// Details describing why the operation is invalid.
        details: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::ModuloByZero => write!(f, "Modulo by zero is not allowed."),
            Self::NegativeRadicand { radicand } => write!(f,
                                                          "Cannot calculate the square root of the negative number {radicand}."),
            Self::InvalidOperation { details } => write!(f, "Invalid operation: {details}."),
        }
    }
}

impl std::error::Error for EvalError {}
