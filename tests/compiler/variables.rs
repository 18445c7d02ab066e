use tally::{CalcErrorKind, Decimal, compile};

#[test]
fn letters_become_positional_slots_in_first_appearance_order() {
    let compiled = compile("b*a+b").unwrap();
    assert_eq!(compiled.parameters(), &['b', 'a']);
    assert_eq!(compiled.arity(), 2);
}

#[test]
fn repeated_letter_reuses_its_slot() {
    let compiled = compile("x*x").unwrap();
    assert_eq!(compiled.arity(), 1);
    let result = compiled.evaluate(&[Decimal::from(7)]).unwrap();
    assert_eq!(result, Decimal::from(49));
}

#[test]
fn slots_read_distinct_positional_values() {
    let compiled = compile("a-b").unwrap();
    let result = compiled
        .evaluate(&[Decimal::from(2), Decimal::from(3)])
        .unwrap();
    assert_eq!(result, Decimal::from(-1));
}

#[test]
fn compiled_expression_is_reusable_across_bindings() {
    let compiled = compile("a*2+1").unwrap();
    for n in 0..5 {
        let result = compiled.evaluate(&[Decimal::from(n)]).unwrap();
        assert_eq!(result, Decimal::from(n * 2 + 1));
    }
}

#[test]
fn too_few_positional_values_is_argument_count_mismatch() {
    let compiled = compile("a+b").unwrap();
    let error = compiled.evaluate(&[Decimal::from(1)]).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::ArgumentCountMismatch);
}

#[test]
fn multi_letter_name_is_malformed() {
    let error = compile("ab+1").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
}

#[test]
fn variable_names_render_in_infix_form() {
    let compiled = compile("-a+b").unwrap();
    assert_eq!(compiled.to_string(), "((-a) + b)");
}
