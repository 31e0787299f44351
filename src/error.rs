/// Parsing errors.
///
/// Defines the errors raised while turning source text into a postfix token
/// sequence: characters the lexer does not recognise, literals that do not
/// fit in an integer, and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while executing a postfix sequence, such as
/// division by zero or an operator without enough operands.
pub mod runtime_error;

pub use parse_error::{BracketKind, ParseError};
pub use runtime_error::RuntimeError;

/// Any failure of the evaluation pipeline.
///
/// Wraps the error of whichever stage detected the first fault, so callers can
/// branch on the stage and then on the concrete kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing or postfix conversion failed.
    Parse(ParseError),
    /// Postfix evaluation failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
