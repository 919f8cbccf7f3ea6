use std::fs;

use terneval::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, lexer::tokenize},
};

fn context_of(bindings: &[(&str, i64)]) -> Context {
    bindings.iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
}

fn reference_context() -> Context {
    context_of(&[("var_1", 1), ("var_2", 4), ("var_3", 3), ("var_4", 5)])
}

fn assert_result(src: &str, context: &Context, expected: i64) {
    match evaluate(src, context) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression failed: {src:?}: {e}"),
    }
}

fn eval_failure(src: &str, context: &Context) -> Error {
    match evaluate(src, context) {
        Ok(value) => panic!("Expression succeeded with {value} but was expected to fail: {src:?}"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    let context = Context::new();

    assert_result("0", &context, 0);
    assert_result("7", &context, 7);
    assert_result("12345", &context, 12345);
    assert_result("  42  ", &context, 42);
}

#[test]
fn leading_zeros_keep_their_lexeme_but_parse_numerically() {
    let context = Context::new();

    // The token text preserves the zeros; the parsed value does not.
    let lexemes: Vec<String> = tokenize("007").iter().map(|(tok, _)| tok.to_string()).collect();
    assert_eq!(lexemes, ["007"]);

    assert_result("007", &context, 7);
    assert_result("if (007, 1, 2)", &context, 1);
}

#[test]
fn variables_resolve_through_the_context() {
    let context = context_of(&[("x", 42), ("var_2", 4), ("_underscore", -3)]);

    assert_result("x", &context, 42);
    assert_result("var_2", &context, 4);
    assert_result("_underscore", &context, -3);
}

#[test]
fn unbound_variable_is_a_runtime_error() {
    let err = eval_failure("missing", &Context::new());

    match err {
        Error::Runtime(RuntimeError::UnknownVariable { name, position }) => {
            assert_eq!(name, "missing");
            assert_eq!(position, 0);
        },
        other => panic!("Expected UnknownVariable, got {other:?}"),
    }
}

#[test]
fn ternary_selects_branch_on_condition() {
    let context = Context::new();

    assert_result("if (1, 5, 9)", &context, 5);
    assert_result("if (0, 5, 9)", &context, 9);
    assert_result("if (2, 5, 9)", &context, 5);
    assert_result("if(1,5,9)", &context, 5);
}

#[test]
fn negative_literal_is_a_syntax_error() {
    // `-` lexes as an operator token, and no production consumes it, so a
    // minus at a primary position is rejected.
    let err = eval_failure("if (-1, 5, 9)", &Context::new());

    match err {
        Error::Parse(ParseError::UnexpectedToken { token, .. }) => assert_eq!(token, "-"),
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn comparison_in_condition_is_tokenized_but_not_parsed() {
    // The comma skip after the condition consumes `==`, so the truthy
    // branch becomes the literal `4` and the falsy branch the literal `15`.
    let context = context_of(&[("var_2", 4)]);

    assert_result("if (var_2 == 4, 15, 0)", &context, 4);
}

#[test]
fn nested_ternary_in_falsy_branch() {
    let context = context_of(&[("a", 0), ("b", 1)]);

    assert_result("if (a, 1, if (b, 2, 3))", &context, 2);
    assert_result("if (b, if (a, 4, 5), 6)", &context, 5);
}

#[test]
fn branch_not_taken_is_never_evaluated() {
    let context = Context::new();

    assert_result("if (1, 5, missing)", &context, 5);
    assert_result("if (0, missing, 9)", &context, 9);
}

#[test]
fn tokens_after_the_leading_term_are_dropped() {
    let context = Context::new();

    assert_result("1 + 2", &context, 1);
    assert_result("if (1, 2, 3) + 7", &context, 2);
    assert_result("5 if (1, 2, 3)", &context, 5);
}

#[test]
fn reference_scenario_parity() {
    let input = "if (var_1 == 2, 0, if (var_2 == 4, 15, 0)) + if (var_2 == 3, 5, 0) - if (var_4 \
                 == 2, 0, 5) + if (var_3 == 3, 5, 0)";

    // Only the first ternary is parsed. Its comma skips consume `==` and
    // the real commas in turn, leaving `Ternary(var_1, 2, 0)`; var_1 is
    // non-zero, so the result is the truthy literal 2.
    assert_result(input, &reference_context(), 2);
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.expr").expect("missing file");

    assert_result(contents.trim_end(), &reference_context(), 2);
}

#[test]
fn missing_branch_is_a_cursor_overrun() {
    let err = eval_failure("if (1, 2)", &Context::new());

    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })),
            "Expected UnexpectedEndOfInput, got {err:?}");
}

#[test]
fn unterminated_if_is_a_cursor_overrun() {
    let err = eval_failure("if (", &Context::new());

    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })),
            "Expected UnexpectedEndOfInput, got {err:?}");
}

#[test]
fn empty_input_is_a_cursor_overrun() {
    let err = eval_failure("", &Context::new());

    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfInput { .. })),
            "Expected UnexpectedEndOfInput, got {err:?}");
}

#[test]
fn stray_punctuation_is_a_syntax_error() {
    let err = eval_failure("(", &Context::new());

    match err {
        Error::Parse(ParseError::UnexpectedToken { token, position }) => {
            assert_eq!(token, "(");
            assert_eq!(position, 0);
        },
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn tokenizer_never_fails_on_unknown_symbols() {
    let tokens = tokenize("@ $ ; =");

    let lexemes: Vec<String> = tokens.iter().map(|(tok, _)| tok.to_string()).collect();
    assert_eq!(lexemes, ["@", "$", ";", "="]);
}

#[test]
fn token_text_round_trips_the_input() {
    let inputs = ["if (var_1 == 2, 0, if (var_2 == 4, 15, 0)) + if (var_2 == 3, 5, 0)",
                  "a+b == 7 $ % { x => 2 }",
                  "if\t(1,\n5, 9)",
                  "if (007, 1, 2)",
                  "0042"];

    for input in inputs {
        let rejoined: String = tokenize(input).iter()
                                              .map(|(tok, _)| tok.to_string())
                                              .collect();
        let stripped: String = input.chars()
                                    .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
                                    .collect();

        assert_eq!(rejoined, stripped, "round-trip failed for {input:?}");
    }
}

#[test]
fn overlarge_integer_literal_is_a_syntax_error() {
    let err = eval_failure("99999999999999999999", &Context::new());

    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })),
            "Expected UnexpectedToken, got {err:?}");
}
