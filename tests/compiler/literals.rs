use tally::{CalcErrorKind, CompileOptions, Compiler, Decimal, NumberFormat, compile};

fn decimal(text: &str) -> Decimal {
    text.parse().expect("decimal literal should parse")
}

#[test]
fn single_integer_literal_evaluates_to_itself() {
    let compiled = compile("42").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::from(42));
    assert_eq!(compiled.arity(), 0);
}

#[test]
fn single_fractional_literal_evaluates_exactly() {
    let compiled = compile("3.14159").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), decimal("3.14159"));
}

#[test]
fn trailing_decimal_separator_is_accepted() {
    let compiled = compile("5.").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::from(5));
}

#[test]
fn blank_input_compiles_to_zero() {
    for text in ["", "   ", "\t\n"] {
        let compiled = compile(text).unwrap();
        assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::ZERO, "input {text:?}");
    }
}

#[test]
fn invariant_group_separator_is_ignored_in_integer_part() {
    let compiled = compile("1,000+1").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::from(1001));
}

#[test]
fn second_decimal_separator_is_invalid_number() {
    let error = compile("1.2.3").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::InvalidNumber);
    let span = error.span.expect("error should carry the literal span");
    assert_eq!((span.start.value(), span.end.value()), (0, 5));
}

#[test]
fn group_separator_in_fraction_is_invalid_number() {
    let error = compile("1.5,0").unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::InvalidNumber);
}

#[test]
fn custom_number_format_reads_locale_separators() {
    let mut compiler = Compiler::new(CompileOptions {
        number_format: NumberFormat::new(',', '.'),
        ..CompileOptions::default()
    });
    let compiled = compiler.compile("1.000,5*2").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), Decimal::from(2001));
}

#[test]
fn space_group_separator_joins_digit_groups() {
    let mut compiler = Compiler::new(CompileOptions {
        number_format: NumberFormat::new(',', ' '),
        ..CompileOptions::default()
    });
    let compiled = compiler.compile("1 000,25 + 1").unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), decimal("1001.25"));
}

#[test]
fn long_literals_keep_full_precision() {
    let text = "123456789012345678901234567890.000000000000000000000000000001";
    let compiled = compile(text).unwrap();
    assert_eq!(compiled.evaluate(&[]).unwrap(), decimal(text));
}
