/// The converter module reorders infix tokens into postfix form.
///
/// This is the shunting-yard stage: it resolves operator precedence,
/// associativity and parentheses once, so the evaluator only ever sees
/// operands followed by their operator.
///
/// # Responsibilities
/// - Produces a parenthesis-free postfix token sequence.
/// - Reports unpaired parentheses.
pub mod converter;
/// The evaluator module executes postfix sequences.
///
/// Runs a postfix sequence against an operand stack and produces the single
/// numeric result.
///
/// # Responsibilities
/// - Applies arithmetic operators to their operands.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes source text for conversion.
///
/// The lexer reads the raw expression and produces a stream of numbers,
/// operators and parentheses. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input characters into tokens.
/// - Reports characters outside the language and oversized literals.
pub mod lexer;
