use tally::{Arguments, CalcErrorKind, Decimal, compile, evaluate, evaluate_with_fallback};

#[test]
fn literal_division_by_zero_is_reported() {
    let compiled = compile("5/0").unwrap();
    let error = evaluate(&compiled, &Arguments::new()).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::DivisionByZero);
}

#[test]
fn computed_zero_divisor_is_reported() {
    let compiled = compile("1/(2-2)").unwrap();
    let error = compiled.evaluate(&[]).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::DivisionByZero);
}

#[test]
fn zero_argument_divisor_is_reported() {
    let compiled = compile("1/d").unwrap();
    let arguments = Arguments::new().with("d", 0);
    let error = evaluate(&compiled, &arguments).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::DivisionByZero);
}

#[test]
fn fallback_recovers_division_by_zero() {
    let compiled = compile("5/0").unwrap();
    let evaluation = evaluate_with_fallback(&compiled, &Arguments::new(), Decimal::ZERO).unwrap();
    assert_eq!(evaluation.value, Decimal::ZERO);
    let warning = evaluation.warning.expect("fallback should record the error");
    assert_eq!(warning.kind, CalcErrorKind::DivisionByZero);
}

#[test]
fn fallback_passes_through_successful_results() {
    let compiled = compile("6/3").unwrap();
    let evaluation = evaluate_with_fallback(&compiled, &Arguments::new(), Decimal::ZERO).unwrap();
    assert_eq!(evaluation.value, Decimal::from(2));
    assert_eq!(evaluation.warning, None);
}

#[test]
fn fallback_does_not_swallow_other_errors() {
    let compiled = compile("a/2").unwrap();
    let error = evaluate_with_fallback(&compiled, &Arguments::new(), Decimal::ZERO).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::ArgumentCountMismatch);
}

#[test]
fn zero_numerator_is_not_an_error() {
    let compiled = compile("0/5").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::ZERO);
}
