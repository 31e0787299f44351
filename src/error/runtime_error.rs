use crate::interpreter::lexer::{Operator, Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while executing a postfix sequence.
pub enum RuntimeError {
    /// An operator was applied with fewer than two operands on the stack.
    StackUnderflow {
        /// The operator being applied.
        operator: Operator,
        /// The operand stack at the moment of failure, bottom first.
        stack:    Vec<f64>,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The left operand of the division.
        dividend: f64,
    },
    /// Execution finished with other than exactly one value on the stack.
    MalformedExpression {
        /// The residual operand stack, bottom first.
        stack: Vec<f64>,
    },
    /// A token that has no meaning in postfix form, i.e. a parenthesis.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
    },
    /// An integer literal cannot be represented exactly as a number.
    LiteralTooLarge {
        /// The literal value.
        value: i64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { operator, stack } => write!(f,
                                                               "Operator '{operator}' needs at least 2 items in stack, but stack = {stack:?}."),
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::MalformedExpression { stack } => write!(f,
                                                          "Malformed expression: expected exactly one result, but stack = {stack:?}."),
            Self::UnexpectedToken { token } => write!(f, "Unknown token in postfix sequence: {token}."),
            Self::LiteralTooLarge { value } => {
                write!(f, "Literal {value} cannot be represented exactly.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
