use crate::error::{Error, ErrorKind};
use crate::pipeline::run_str;
use crate::runtime::Outcome;

fn run_ok(src: &str) -> Outcome {
    match run_str(src) {
        Ok(outcome) => outcome,
        Err(err) => panic!("program failed: {err}\n{src}"),
    }
}

fn run_err(src: &str) -> Error {
    match run_str(src) {
        Ok(outcome) => panic!("program succeeded: {:?}\n{src}", outcome.variables),
        Err(err) => err,
    }
}

fn kind_of(src: &str) -> ErrorKind {
    run_err(src).kind().expect("interpreter error kind")
}

#[test]
fn goto_forward_to_trailing_label_terminates() {
    let outcome = run_ok("DEF x :start x = 0 GOTO done :done");
    assert_eq!(outcome.value("x"), Some(0.0));
}

#[test]
fn parenthesized_sum_is_assigned() {
    let outcome = run_ok("DEF a a = ( 3 + 4 )");
    assert_eq!(outcome.value("a"), Some(7.0));
}

#[test]
fn true_condition_runs_body() {
    let outcome = run_ok("DEF a DEF b a = 1 b = 2 IF ( a < b ) THEN a = 99 FI");
    assert_eq!(outcome.value("a"), Some(99.0));
    assert_eq!(outcome.value("b"), Some(2.0));
}

#[test]
fn unknown_jump_target_fails() {
    let err = run_err("DEF a a = 1 GOTO missing");
    assert_eq!(err.kind(), Some(ErrorKind::UnknownLabel));
    assert!(err.to_string().contains("missing"));
    assert_eq!(kind_of("GOTO missing"), ErrorKind::UnknownLabel);
}

#[test]
fn duplicate_label_fails_before_execution() {
    // the unknown GOTO target would fail at run time; preprocessing wins
    let err = run_err(":dup GOTO nowhere :dup");
    assert_eq!(err.kind(), Some(ErrorKind::DuplicateLabel));
}

#[test]
fn division_by_zero_yields_infinity() {
    let outcome = run_ok("DEF a a = ( 5 / 0 )");
    assert_eq!(outcome.value("a"), Some(f64::INFINITY));
}

#[test]
fn last_assignment_wins() {
    let outcome = run_ok(
        "DEF a DEF b DEF c
         a = 1 b = 2 c = 3
         a = b c = ( a * 10 ) b = 7.5",
    );
    assert_eq!(
        outcome.variables,
        vec![("a".into(), 2.0), ("b".into(), 7.5), ("c".into(), 20.0)]
    );
}

#[test]
fn false_condition_skips_body() {
    let outcome = run_ok("DEF a a = 5 IF ( a > 10 ) THEN a = 99 FI");
    assert_eq!(outcome.value("a"), Some(5.0));
}

#[test]
fn outer_false_skips_nested_blocks() {
    let outcome = run_ok(
        "DEF a DEF b
         IF ( 1 == 2 ) THEN
           a = 1
           IF ( 1 == 1 ) THEN
             IF ( 2 == 2 ) THEN b = 1 FI
             a = 2
           FI
           a = 3
         FI
         b = ( b + 10 )",
    );
    assert_eq!(outcome.value("a"), Some(0.0));
    assert_eq!(outcome.value("b"), Some(10.0));
}

#[test]
fn nested_true_blocks_close_in_order() {
    let outcome = run_ok(
        "DEF a
         IF ( 1 < 2 ) THEN
           IF ( 2 < 3 ) THEN a = ( a + 1 ) FI
           IF ( 3 < 2 ) THEN a = 100 FI
           a = ( a + 10 )
         FI",
    );
    assert_eq!(outcome.value("a"), Some(11.0));
}

#[test]
fn unparenthesized_condition_is_accepted() {
    let outcome = run_ok("DEF a IF a == 0 THEN a = 1 FI");
    assert_eq!(outcome.value("a"), Some(1.0));
}

#[test]
fn counting_loop_with_backward_goto() {
    let outcome = run_ok(
        "DEF i DEF sum
         :loop
         sum = ( sum + i )
         i = ( i + 1 )
         IF ( i <= 10 ) THEN GOTO loop FI",
    );
    assert_eq!(outcome.value("i"), Some(11.0));
    assert_eq!(outcome.value("sum"), Some(55.0));
}

#[test]
fn goto_resets_nesting_so_later_fi_is_stray() {
    // GOTO leaves the open IF; the FI reached afterwards has no open block
    let err = run_err("DEF a IF ( 1 < 2 ) THEN GOTO out FI :out a = 1 FI");
    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedToken));
}

#[test]
fn goto_out_of_block_does_not_trip_label_check() {
    let outcome = run_ok("DEF a IF ( 1 < 2 ) THEN GOTO out FI :out a = 3");
    assert_eq!(outcome.value("a"), Some(3.0));
}

#[test]
fn top_level_fi_is_unexpected() {
    let err = run_err("DEF a a = 1 FI");
    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedToken));
    assert!(err.to_string().contains("FI"));
}

#[test]
fn label_inside_open_block_is_fatal() {
    assert_eq!(
        kind_of("DEF a IF ( 1 < 2 ) THEN :inner a = 1 FI"),
        ErrorKind::LabelInsideConditional
    );
}

#[test]
fn label_inside_skipped_block_is_never_reached() {
    let outcome = run_ok("DEF a IF ( 2 < 1 ) THEN :inner a = 1 FI a = 2");
    assert_eq!(outcome.value("a"), Some(2.0));
}

#[test]
fn condition_must_be_boolean() {
    assert_eq!(
        kind_of("DEF a IF ( a + 1 ) THEN a = 1 FI"),
        ErrorKind::ExpectedBooleanExpression
    );
}

#[test]
fn condition_must_end_on_then() {
    assert_eq!(
        kind_of("DEF a IF ( a < 1 ) a = 1 FI"),
        ErrorKind::UnexpectedToken
    );
}

#[test]
fn declarations_are_checked() {
    assert_eq!(kind_of("DEF a DEF a"), ErrorKind::DuplicateVariable);
    assert_eq!(kind_of("DEF 1"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of("DEF"), ErrorKind::UnexpectedToken);
}

#[test]
fn later_def_counts_capacity_but_is_not_executed() {
    assert_eq!(kind_of("DEF a a = 1 DEF b"), ErrorKind::UnexpectedToken);
    let err = run_err("DEF a a = 1 DEF b b = 2");
    assert_eq!(err.kind(), Some(ErrorKind::UnexpectedToken));
}

#[test]
fn undeclared_variables_are_unbound() {
    assert_eq!(kind_of("DEF a b = 1"), ErrorKind::UnboundVariable);
    assert_eq!(kind_of("DEF a a = b"), ErrorKind::UnboundVariable);
    assert_eq!(kind_of("DEF a a = ( b + 1 )"), ErrorKind::UnboundVariable);
}

#[test]
fn assignment_needs_a_target_and_operand() {
    assert_eq!(kind_of("DEF a = 1"), ErrorKind::UnexpectedToken);
    assert_eq!(kind_of("DEF a a ="), ErrorKind::ExpectedUnary);
    assert_eq!(kind_of("DEF a a = THEN"), ErrorKind::ExpectedUnary);
    assert_eq!(kind_of("DEF a a = ( 1 + 2"), ErrorKind::MissingCloseParen);
    assert_eq!(kind_of("DEF a a = ( 1 2 )"), ErrorKind::ExpectedOperator);
}

#[test]
fn pending_target_persists_across_assignments() {
    let outcome = run_ok("DEF a a = 1 = 2");
    assert_eq!(outcome.value("a"), Some(2.0));
}

#[test]
fn function_keywords_are_rejected() {
    for word in ["RETURN", "CALL", "WITH", "END"] {
        let src = format!("DEF a {word}");
        assert_eq!(kind_of(&src), ErrorKind::UnexpectedToken, "{word}");
    }
}

#[test]
fn unknown_symbol_surfaces_from_tokenizer() {
    assert_eq!(kind_of("DEF a a = $"), ErrorKind::UnknownSymbol);
}

#[test]
fn empty_and_declaration_only_programs_succeed() {
    assert!(run_ok("").variables.is_empty());
    let outcome = run_ok("DEF a DEF b");
    assert_eq!(outcome.value("a"), Some(0.0));
    assert_eq!(outcome.value("b"), Some(0.0));
    assert_eq!(outcome.value("c"), None);
}

#[test]
fn unterminated_false_block_runs_off_the_end() {
    let outcome = run_ok("DEF a IF ( 1 > 2 ) THEN a = 1");
    assert_eq!(outcome.value("a"), Some(0.0));
}

#[test]
fn equality_is_approximate() {
    let outcome = run_ok("DEF a DEF b a = ( 0.1 + 0.2 ) IF ( a == 0.3 ) THEN b = 1 FI");
    assert_eq!(outcome.value("b"), Some(1.0));
}

#[test]
fn runaway_parentheses_fail_cleanly() {
    let src = format!("DEF a a = {}", "( ".repeat(100_000));
    assert_eq!(kind_of(&src), ErrorKind::ExpectedUnary);
}
