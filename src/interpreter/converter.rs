use log::trace;

use crate::{
    error::{BracketKind, ParseError},
    interpreter::lexer::{Operator, Paren, Token},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry of the operator stack: an operator waiting for its right operand,
/// or the marker left by a `(`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    OpenParen,
}

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// Single left-to-right pass of the shunting-yard algorithm:
///
/// - numbers go straight to the output;
/// - `(` is pushed as a marker, `)` pops operators to the output until its
///   marker is found;
/// - `+` and `-` first pop every pending operator down to the nearest marker;
/// - `*` and `/` pop at most one pending operator, and only if it is also
///   `*` or `/`.
///
/// Equal priority operators therefore associate to the left. The output never
/// contains parentheses.
///
/// # Errors
/// Returns `ParseError::UnpairedBracket` when a `)` has no matching `(`, or
/// when a `(` is still open at the end of the input.
///
/// # Example
/// ```
/// use shunting::interpreter::{
///     converter::to_postfix,
///     lexer::{Operator, Token},
/// };
///
/// let infix = [Token::Number(12), Token::Operator(Operator::Add), Token::Number(7)];
/// let postfix = to_postfix(&infix).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(12), Token::Number(7), Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut stack: Vec<Pending> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Paren(Paren::Open) => stack.push(Pending::OpenParen),
            Token::Paren(Paren::Close) => loop {
                match stack.pop() {
                    Some(Pending::OpenParen) => break,
                    Some(Pending::Operator(op)) => output.push(Token::Operator(op)),
                    None => {
                        return Err(ParseError::UnpairedBracket { kind: BracketKind::Unopened });
                    },
                }
            },
            Token::Operator(op) if op.is_high_priority() => {
                if let Some(&Pending::Operator(top)) = stack.last()
                   && top.is_high_priority()
                {
                    trace!("'{op}' moves '{top}' to output");
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(op));
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    trace!("'{op}' moves '{top}' to output");
                    stack.pop();
                    output.push(Token::Operator(top));
                }
                stack.push(Pending::Operator(op));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::OpenParen => {
                return Err(ParseError::UnpairedBracket { kind: BracketKind::Unclosed });
            },
        }
    }

    Ok(output)
}
