use crate::evaluator::core::OPERATIONS;

#[derive(Debug)]
/// Represents all errors detected before an operation is evaluated.
pub enum UsageError {
    /// The operation identifier is not in the fixed operation set.
    UnknownOperation {
        /// The identifier as given on the command line.
        name: String,
    },
    /// An operand is missing, surplus, or not a finite number.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation { name } => write!(f,
                                                      "Unknown operation '{name}'. Expected one of: {}.",
                                                      OPERATIONS.join(", ")),
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
        }
    }
}

impl std::error::Error for UsageError {}
