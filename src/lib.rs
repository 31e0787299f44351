//! # shunting
//!
//! shunting evaluates infix arithmetic expressions written as text.
//! It supports integer literals, the binary operators `+ - * /`, parentheses
//! and the usual precedence rules. Evaluation is a three stage pipeline: the
//! text is tokenized, reordered into postfix notation with the shunting-yard
//! algorithm, and the postfix sequence is executed on an operand stack.

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
    missing_docs,
)]

use log::debug;

use crate::interpreter::{
    converter::to_postfix,
    evaluator::evaluate_postfix,
    lexer::{format_tokens, tokenize},
};

/// Provides unified error types for every stage of evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting or executing an expression. Each error carries the structured
/// context of the failure (offending character, operand stack, ...) so
/// callers can branch on the kind instead of parsing a message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the evaluation pipeline.
///
/// This module holds the three stages used in strict sequence: the lexer
/// produces tokens, the converter reorders them into postfix form, and the
/// evaluator computes the result.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::Error;

/// Evaluates an arithmetic expression and returns its value.
///
/// The call owns all of its intermediate state, so it is safe to call
/// concurrently from any number of threads.
///
/// # Errors
/// Returns the first fault detected by any stage: an `Error::Parse` for
/// illegal characters, oversized literals or unpaired parentheses, or an
/// `Error::Runtime` for division by zero and malformed expressions.
///
/// # Examples
/// ```
/// use shunting::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
///
/// // Two numbers with no operator between them.
/// assert!(evaluate("1 2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    debug!("tokens: {}", format_tokens(&tokens));

    let postfix = to_postfix(&tokens)?;
    debug!("postfix: {}", format_tokens(&postfix));

    let value = evaluate_postfix(&postfix)?;
    debug!("{source:?} = {value}");

    Ok(value)
}
