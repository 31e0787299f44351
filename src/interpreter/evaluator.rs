use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::lexer::{Operator, Token},
    util::num::i64_to_f64_checked,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or a `RuntimeError`
/// describing the first fault.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a postfix token sequence with an operand stack.
///
/// Numbers are pushed. An operator pops the right operand `y`, then the left
/// operand `x`, and pushes `x OP y`. Exactly one value must remain at the end.
///
/// Division follows floating-point semantics, so `7 / 2` is `3.5`.
///
/// # Errors
/// - `RuntimeError::StackUnderflow` if an operator finds fewer than two
///   operands.
/// - `RuntimeError::DivisionByZero` if the right operand of `/` is zero.
/// - `RuntimeError::MalformedExpression` if the final stack does not hold
///   exactly one value.
/// - `RuntimeError::UnexpectedToken` for a parenthesis in the sequence.
/// - `RuntimeError::LiteralTooLarge` for a literal above `2^53 - 1`.
///
/// # Example
/// ```
/// use shunting::interpreter::{
///     evaluator::evaluate_postfix,
///     lexer::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(12), Token::Number(7), Token::Operator(Operator::Add)];
/// assert_eq!(evaluate_postfix(&postfix), Ok(19.0));
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for &token in postfix {
        match token {
            Token::Number(value) => {
                stack.push(i64_to_f64_checked(value, RuntimeError::LiteralTooLarge { value })?);
            },
            Token::Operator(operator) => {
                let value = apply(operator, &mut stack)?;
                trace!("'{operator}' -> {value}");
                stack.push(value);
            },
            Token::Paren(_) => return Err(RuntimeError::UnexpectedToken { token }),
        }
    }

    if let [value] = stack[..] {
        return Ok(value);
    }
    Err(RuntimeError::MalformedExpression { stack })
}

/// Pops two operands and applies `operator` to them.
fn apply(operator: Operator, stack: &mut Vec<f64>) -> EvalResult<f64> {
    let Some(len) = stack.len().checked_sub(2) else {
        return Err(RuntimeError::StackUnderflow { operator,
                                                  stack: stack.clone() });
    };
    let operands = stack.split_off(len);
    let (x, y) = (operands[0], operands[1]);

    if operator == Operator::Div && y == 0.0 {
        return Err(RuntimeError::DivisionByZero { dividend: x });
    }

    Ok(operator.function()(x, y))
}
