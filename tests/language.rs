use shunting::{
    Error, evaluate,
    error::{BracketKind, ParseError, RuntimeError},
    interpreter::{
        converter::to_postfix,
        evaluator::evaluate_postfix,
        lexer::{Operator, Paren, Token, tokenize},
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

const fn num(value: i64) -> Token {
    Token::Number(value)
}

const fn op(operator: Operator) -> Token {
    Token::Operator(operator)
}

#[test]
fn tokenizes_numbers_and_operators() {
    assert_eq!(tokenize("12 + 7"), Ok(vec![num(12), op(Operator::Add), num(7)]));
    assert_eq!(tokenize("(1)*20/300-4"),
               Ok(vec![Token::Paren(Paren::Open),
                       num(1),
                       Token::Paren(Paren::Close),
                       op(Operator::Mul),
                       num(20),
                       op(Operator::Div),
                       num(300),
                       op(Operator::Sub),
                       num(4)]));
}

#[test]
fn tokenizer_skips_spaces_only() {
    assert_eq!(tokenize(""), Ok(vec![]));
    assert_eq!(tokenize("   "), Ok(vec![]));
    assert_eq!(tokenize("  42  "), Ok(vec![num(42)]));
    assert_eq!(tokenize("1\t+ 2"),
               Err(ParseError::UnexpectedCharacter { character: '\t',
                                                     position:  1, }));
    assert_eq!(tokenize("1 +\n2"),
               Err(ParseError::UnexpectedCharacter { character: '\n',
                                                     position:  3, }));
}

#[test]
fn leading_minus_is_an_operator() {
    assert_eq!(tokenize("-5"), Ok(vec![op(Operator::Sub), num(5)]));
}

#[test]
fn tokenizing_is_repeatable() {
    let source = "(10 - 2) * 3 / 4";
    assert_eq!(tokenize(source), tokenize(source));
}

#[test]
fn rejects_unknown_characters() {
    assert_eq!(assert_failure("3 & 4"),
               Error::Parse(ParseError::UnexpectedCharacter { character: '&',
                                                              position:  2, }));
    assert_eq!(tokenize("2 ^ 3"),
               Err(ParseError::UnexpectedCharacter { character: '^',
                                                     position:  2, }));
    assert_eq!(tokenize("1.5"),
               Err(ParseError::UnexpectedCharacter { character: '.',
                                                     position:  1, }));
    assert_eq!(tokenize("x + 1"),
               Err(ParseError::UnexpectedCharacter { character: 'x',
                                                     position:  0, }));
    assert_eq!(tokenize("1 + é"),
               Err(ParseError::UnexpectedCharacter { character: 'é',
                                                     position:  4, }));
}

#[test]
fn rejects_literals_that_overflow() {
    assert_eq!(tokenize("1 + 99999999999999999999"),
               Err(ParseError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                                 position: 4, }));
    assert_eq!(assert_failure("9007199254740992 + 1"),
               Error::Runtime(RuntimeError::LiteralTooLarge { value: 9_007_199_254_740_992 }));
    assert_value("9007199254740991 - 1", 9_007_199_254_740_990.0);
}

#[test]
fn converts_to_postfix() {
    assert_eq!(to_postfix(&[num(12), op(Operator::Add), num(7)]),
               Ok(vec![num(12), num(7), op(Operator::Add)]));

    // 2 + 3 * 4 -> 2 3 4 * +
    let tokens = tokenize("2 + 3 * 4").unwrap();
    assert_eq!(to_postfix(&tokens),
               Ok(vec![num(2), num(3), num(4), op(Operator::Mul), op(Operator::Add)]));

    // 2 * 3 + 4 -> 2 3 * 4 +
    let tokens = tokenize("2 * 3 + 4").unwrap();
    assert_eq!(to_postfix(&tokens),
               Ok(vec![num(2), num(3), op(Operator::Mul), num(4), op(Operator::Add)]));

    // (2 + 3) * 4 -> 2 3 + 4 *
    let tokens = tokenize("(2 + 3) * 4").unwrap();
    assert_eq!(to_postfix(&tokens),
               Ok(vec![num(2), num(3), op(Operator::Add), num(4), op(Operator::Mul)]));
}

#[test]
fn postfix_keeps_left_associativity() {
    // 10 - 2 - 3 -> 10 2 - 3 -
    let tokens = tokenize("10 - 2 - 3").unwrap();
    assert_eq!(to_postfix(&tokens),
               Ok(vec![num(10), num(2), op(Operator::Sub), num(3), op(Operator::Sub)]));

    // 1 - 2 * 3 + 4 -> 1 2 3 * - 4 +
    let tokens = tokenize("1 - 2 * 3 + 4").unwrap();
    assert_eq!(to_postfix(&tokens),
               Ok(vec![num(1),
                       num(2),
                       num(3),
                       op(Operator::Mul),
                       op(Operator::Sub),
                       num(4),
                       op(Operator::Add)]));
}

#[test]
fn evaluates_postfix() {
    assert_eq!(evaluate_postfix(&[num(12), num(7), op(Operator::Add)]), Ok(19.0));
    assert_eq!(evaluate_postfix(&[num(7), num(2), op(Operator::Sub)]), Ok(5.0));
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) * 5", 70.0);
    assert_value("((((7))))", 7.0);
    assert_value("100 - (20 - (3 - 1))", 82.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn equal_priority_is_left_associative() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("8 / 4 / 2", 1.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("12 / 3 * 2", 8.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn division_is_not_truncated() {
    assert_value("7 / 2", 3.5);
    assert_value("1 / 4", 0.25);
    assert_value("0 / 5", 0.0);
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(assert_failure("5 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero { dividend: 5.0 }));
    assert_eq!(assert_failure("1 / (2 - 2)"),
               Error::Runtime(RuntimeError::DivisionByZero { dividend: 1.0 }));
}

#[test]
fn unpaired_brackets_fail() {
    assert_eq!(assert_failure("1 + 2)"),
               Error::Parse(ParseError::UnpairedBracket { kind: BracketKind::Unopened }));
    assert_eq!(assert_failure("(1 + 2"),
               Error::Parse(ParseError::UnpairedBracket { kind: BracketKind::Unclosed }));
    assert_eq!(assert_failure(")("),
               Error::Parse(ParseError::UnpairedBracket { kind: BracketKind::Unopened }));
    assert_eq!(assert_failure("((1)"),
               Error::Parse(ParseError::UnpairedBracket { kind: BracketKind::Unclosed }));
}

#[test]
fn missing_operator_is_malformed() {
    assert_eq!(assert_failure("1 2"),
               Error::Runtime(RuntimeError::MalformedExpression { stack: vec![1.0, 2.0] }));
    assert_eq!(assert_failure(""),
               Error::Runtime(RuntimeError::MalformedExpression { stack: vec![] }));
    assert_eq!(assert_failure("()"),
               Error::Runtime(RuntimeError::MalformedExpression { stack: vec![] }));
}

#[test]
fn missing_operand_underflows() {
    assert_eq!(assert_failure("+"),
               Error::Runtime(RuntimeError::StackUnderflow { operator: Operator::Add,
                                                             stack:    vec![] }));
    assert_eq!(assert_failure("-5"),
               Error::Runtime(RuntimeError::StackUnderflow { operator: Operator::Sub,
                                                             stack:    vec![5.0] }));
    assert_eq!(assert_failure("3 *"),
               Error::Runtime(RuntimeError::StackUnderflow { operator: Operator::Mul,
                                                             stack:    vec![3.0] }));
}

#[test]
fn parentheses_in_postfix_are_rejected() {
    let paren = Token::Paren(Paren::Open);
    assert_eq!(evaluate_postfix(&[num(1), paren]),
               Err(RuntimeError::UnexpectedToken { token: paren }));
}

#[test]
fn errors_have_messages() {
    assert_eq!(assert_failure("3 & 4").to_string(), "Error at 2: Illegal symbol '&'.");
    assert_eq!(assert_failure("5 / 0").to_string(), "Division by zero: 5 / 0.");
    assert_eq!(assert_failure("1 + 2)").to_string(),
               "Brackets must be paired: ')' has no matching '('.");
}

#[test]
fn concurrent_calls_are_independent() {
    let handles: Vec<_> = (1..=8).map(|i| {
                                     std::thread::spawn(move || {
                                         evaluate(&format!("({i} + {i}) * {i}"))
                                     })
                                 })
                                 .collect();

    for (i, handle) in (1..=8).zip(handles) {
        let i = f64::from(i);
        assert_eq!(handle.join().unwrap(), Ok((i + i) * i));
    }
}
