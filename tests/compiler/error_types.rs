use tally::lexer::{ByteOffset, Span};
use tally::{CalcError, CalcErrorKind, compile};

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[test]
fn unrecognized_character_is_malformed_expression() {
    let error = compile("2+#3").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
    let span = error.span.expect("error should carry the character span");
    assert_eq!((span.start.value(), span.end.value()), (2, 3));
    assert!(error.message.contains('#'));
}

#[test]
fn non_ascii_character_span_covers_full_char() {
    let error = compile("1+\u{00d7}2").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
    let span = error.span.unwrap();
    assert_eq!(span.len(), 2);
}

#[test]
fn operands_without_operator_are_malformed() {
    let error = compile("2 3").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
}

#[test]
fn operands_followed_by_operator_are_malformed() {
    for text in ["2 3*", "1 2 3 * +", "a b -", "(1) 2+"] {
        let error = compile(text).unwrap_err();
        assert_eq!(error.kind, CalcErrorKind::MalformedExpression, "{text}");
    }
}

#[test]
fn adjacent_operand_error_points_at_second_operand() {
    let error = compile("12 34*").unwrap_err();
    let span = error.span.expect("error should carry the operand span");
    assert_eq!((span.start.value(), span.end.value()), (3, 5));
}

#[test]
fn trailing_operator_is_missing_operand() {
    let error = compile("2+").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MissingOperand);
    assert_eq!(error.span.map(|span| span.start.value()), Some(1));
}

#[test]
fn leading_binary_operator_is_missing_operand() {
    let error = compile("*2").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MissingOperand);
}

// ---------------------------------------------------------------------------
// Error payload
// ---------------------------------------------------------------------------

#[test]
fn display_shows_message() {
    let error = CalcError::division_by_zero();
    assert_eq!(format!("{error}"), error.message);
}

#[test]
fn unexpected_character_constructor() {
    let span = Span::new(ByteOffset::new(4), ByteOffset::new(5));
    let error = CalcError::unexpected_character(span, '$');
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
    assert_eq!(error.span, Some(span));
    assert!(error.message.contains('$'));
}

#[test]
fn argument_count_mismatch_constructor() {
    let error = CalcError::argument_count_mismatch(3, 1);
    assert_eq!(error.kind, CalcErrorKind::ArgumentCountMismatch);
    assert!(error.message.contains('3'));
    assert!(error.message.contains('1'));
}

#[test]
fn kinds_have_stable_display_names() {
    assert_eq!(
        CalcErrorKind::UnbalancedOpenBracket.to_string(),
        "unbalanced open bracket"
    );
    assert_eq!(CalcErrorKind::DivisionByZero.to_string(), "division by zero");
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&CalcError::division_by_zero());
}
