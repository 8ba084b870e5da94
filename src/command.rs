use crate::{
    error::UsageError,
    evaluator::core::{EvalResult, OperationDef, lookup},
};

/// A fully validated operation invocation, ready to execute.
///
/// A `Command` pairs an entry of the operation table with operands that have
/// already been parsed to finite numbers and counted against the operation's
/// arity. Building one is the only path into the evaluator, so domain checks
/// are the only failures that can still occur after construction.
pub struct Command {
    operation: &'static OperationDef,
    operands:  Vec<f64>,
}

impl Command {
    /// Builds a command from an operation name and raw operand strings.
    ///
    /// Validation happens in order:
    /// 1. The name is resolved against the operation table; unknown names
    ///    fail with `UnknownOperation`.
    /// 2. The operand count must match the operation's arity exactly;
    ///    missing and surplus operands fail with `InvalidArgument`.
    /// 3. Each operand string must parse to a finite number; anything else
    ///    fails with `InvalidArgument`.
    ///
    /// # Parameters
    /// - `operation`: The operation identifier from the command line.
    /// - `operands`: The raw operand strings, in order.
    ///
    /// # Returns
    /// A validated `Command`, or the first usage error encountered.
    ///
    /// # Example
    /// ```
    /// use opcalc::command::Command;
    ///
    /// let operands = vec!["7".to_string(), "2".to_string()];
    /// let command = Command::from_parts("divide", &operands).unwrap();
    ///
    /// let result = command.execute().unwrap();
    /// assert_eq!(result, 3.5);
    ///
    /// assert!(Command::from_parts("cbrt", &operands).is_err());
    /// ```
    pub fn from_parts(operation: &str, operands: &[String]) -> Result<Self, UsageError> {
        let definition = lookup(operation).ok_or_else(|| {
                                              UsageError::UnknownOperation { name: operation.to_string(), }
                                          })?;

        if operands.len() != definition.arity {
            let noun = if definition.arity == 1 { "operand" } else { "operands" };
            return Err(UsageError::InvalidArgument { details: format!("the '{}' operation expects {} {noun}, but got {}",
                                                                      definition.name,
                                                                      definition.arity,
                                                                      operands.len()), });
        }

        let mut parsed = Vec::with_capacity(operands.len());

        for (index, raw) in operands.iter().enumerate() {
            parsed.push(parse_operand(raw, index + 1)?);
        }

        Ok(Self { operation: definition,
                  operands:  parsed, })
    }

    /// Executes the command through the operation table.
    ///
    /// Only the operation's own domain check can fail here; operand parsing
    /// and counting were settled at construction.
    pub fn execute(&self) -> EvalResult<f64> {
        self.operation.apply(&self.operands)
    }

    /// Renders the result line for this command.
    ///
    /// Binary operations render as `<a> <operation> <b> = <result>`; the
    /// unary operation renders as `<operation>(<n>) = <result>`.
    ///
    /// # Example
    /// ```
    /// use opcalc::command::Command;
    ///
    /// let operands = vec!["16".to_string()];
    /// let command = Command::from_parts("sqrt", &operands).unwrap();
    /// let result = command.execute().unwrap();
    ///
    /// assert_eq!(command.render(result), "sqrt(16) = 4");
    /// ```
    #[must_use]
    pub fn render(&self, result: f64) -> String {
        match self.operands.as_slice() {
            [n] => format!("{}({n}) = {result}", self.operation.name),
            [a, b] => format!("{a} {} {b} = {result}", self.operation.name),
            _ => unreachable!("arity is validated in from_parts"),
        }
    }
}

/// Parses a single operand string into a finite number.
///
/// Parsing is strict: the whole string (surrounding whitespace aside) must
/// be a number, and the parsed value must be finite. `NaN`, infinities, and
/// trailing garbage are all rejected.
///
/// # Parameters
/// - `raw`: The operand text from the command line.
/// - `position`: The 1-based operand position, used in the error message.
///
/// # Returns
/// The parsed value, or `InvalidArgument` naming the rejected text.
///
/// # Example
/// ```
/// use opcalc::command::parse_operand;
///
/// assert_eq!(parse_operand("2.5", 1).unwrap(), 2.5);
/// assert_eq!(parse_operand("-10", 2).unwrap(), -10.0);
/// assert!(parse_operand("abc", 1).is_err());
/// assert!(parse_operand("inf", 1).is_err());
/// assert!(parse_operand("NaN", 2).is_err());
/// ```
pub fn parse_operand(raw: &str, position: usize) -> Result<f64, UsageError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(UsageError::InvalidArgument { details: format!("operand {position} ('{raw}') is not a finite number"), }),
    }
}
