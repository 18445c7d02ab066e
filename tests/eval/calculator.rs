use serde::Serialize;
use tally::{Arguments, CalcErrorKind, Calculator, CompileOptions, Decimal, NumberFormat};

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn result_compiles_and_evaluates() {
    let mut calculator = Calculator::default();
    let result = calculator.result("(1+2)*3", &Arguments::new()).unwrap();
    assert_eq!(result, Decimal::from(9));
}

#[test]
fn result_for_binds_record_fields() {
    let mut calculator = Calculator::default();
    let result = calculator.result_for("x*x+y", &Point { x: 3, y: 4 }).unwrap();
    assert_eq!(result, Decimal::from(13));
}

#[test]
fn calculator_is_reusable_after_errors() {
    let mut calculator = Calculator::default();
    let error = calculator.result("2+#", &Arguments::new()).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::MalformedExpression);
    let result = calculator.result("2+2", &Arguments::new()).unwrap();
    assert_eq!(result, Decimal::from(4));
}

#[test]
fn calculator_uses_configured_number_format() {
    let options = CompileOptions {
        number_format: NumberFormat::new(',', '.'),
        ..CompileOptions::default()
    };
    let mut calculator = Calculator::new(options);
    assert_eq!(calculator.options().number_format.decimal_separator, ',');
    let result = calculator.result("0,5*4", &Arguments::new()).unwrap();
    assert_eq!(result, Decimal::from(2));
}

#[test]
fn division_by_zero_surfaces_from_result() {
    let mut calculator = Calculator::default();
    let error = calculator.result("1/0", &Arguments::new()).unwrap_err();
    assert_eq!(error.kind, CalcErrorKind::DivisionByZero);
}
