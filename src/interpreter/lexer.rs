use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns `true` for `*` and `/`, which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_high_priority(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns the arithmetic applied by this operator, as `x OP y`.
    ///
    /// Division is plain floating-point division; callers reject a zero
    /// divisor before applying it.
    ///
    /// # Example
    /// ```
    /// use shunting::interpreter::lexer::Operator;
    ///
    /// assert_eq!(Operator::Sub.function()(10.0, 4.0), 6.0);
    /// assert_eq!(Operator::Div.function()(7.0, 2.0), 3.5);
    /// ```
    #[must_use]
    pub fn function(self) -> fn(f64, f64) -> f64 {
        match self {
            Self::Add => |x, y| x + y,
            Self::Sub => |x, y| x - y,
            Self::Mul => |x, y| x * y,
            Self::Div => |x, y| x / y,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One half of a parenthesis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Represents a lexical token of an arithmetic expression.
///
/// Runs of spaces between tokens are skipped. Any other whitespace is not
/// part of the language and is reported as an error.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r" +")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Never negative: a leading `-` is
    /// always an operator.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// One of `+ - * /`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(` or `)`.
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Paren(Paren::Open) => write!(f, "("),
            Self::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits overflow an `i64`, which the lexer reports
/// as an error for this slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits an expression into tokens.
///
/// Scans left to right; digit runs become a single `Number`, every operator
/// and parenthesis becomes its own token and spaces are dropped.
///
/// # Errors
/// - `ParseError::UnexpectedCharacter` for any character other than digits,
///   `+ - * / ( )` and the space character.
/// - `ParseError::LiteralTooLarge` for a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use shunting::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("12 + 7").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(12), Token::Operator(Operator::Add), Token::Number(7)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
            continue;
        }

        let position = lexer.span().start;
        let slice = lexer.slice();
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                     position });
        }
        let character = source[position..].chars().next().unwrap_or_default();
        return Err(ParseError::UnexpectedCharacter { character, position });
    }

    Ok(tokens)
}

/// Renders a token sequence as space separated text, e.g. `12 7 +`.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
