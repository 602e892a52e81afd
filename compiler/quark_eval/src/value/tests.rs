use super::*;
use pretty_assertions::assert_eq;

#[test]
fn integral_numbers_print_without_fraction() {
    assert_eq!(Value::Number(8.0).to_string(), "8");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
}

#[test]
fn special_numbers_print_by_name() {
    assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
}

#[test]
fn empty_prints_nothing() {
    assert_eq!(Value::Empty.to_string(), "");
}

#[test]
fn string_coercion() {
    assert_eq!(Value::from(" 12 ").as_number(), 12.0);
    assert_eq!(Value::from("").as_number(), 0.0);
    assert!(Value::from("abc").as_number().is_nan());
    assert!(Value::Empty.as_number().is_nan());
}

#[test]
fn index_requires_non_negative_integer() {
    assert_eq!(Value::Number(3.0).as_index(), Some(3));
    assert_eq!(Value::from("4").as_index(), Some(4));
    assert_eq!(Value::Number(0.0).as_index(), Some(0));
    assert_eq!(Value::Number(1.5).as_index(), None);
    assert_eq!(Value::Number(-1.0).as_index(), None);
    assert_eq!(Value::Number(f64::INFINITY).as_index(), None);
    assert_eq!(Value::Empty.as_index(), None);
}

#[test]
fn loose_equality() {
    assert!(Value::Number(5.0).loose_eq(&Value::from("5")));
    assert!(Value::from("a").loose_eq(&Value::from("a")));
    assert!(!Value::from("a").loose_eq(&Value::from("b")));
    assert!(Value::Empty.loose_eq(&Value::Empty));
    assert!(!Value::Empty.loose_eq(&Value::Number(0.0)));
    assert!(!Value::Number(f64::NAN).loose_eq(&Value::Number(f64::NAN)));
}

#[test]
fn bools_become_one_or_zero() {
    assert_eq!(Value::from(true), Value::Number(1.0));
    assert_eq!(Value::from(false), Value::Number(0.0));
}

#[test]
fn large_and_tiny_numbers_use_exponent_form() {
    assert_eq!(Value::Number(1e21).to_string(), "1e+21");
    assert_eq!(Value::Number(-1.5e300).to_string(), "-1.5e+300");
    assert_eq!(Value::Number(1e-7).to_string(), "1e-7");
    assert_eq!(Value::Number(0.000_001).to_string(), "0.000001");
    assert_eq!(Value::Number(1e20).to_string(), "100000000000000000000");
}

#[test]
fn only_numeric_syntax_coerces() {
    assert!(Value::from("inf").as_number().is_nan());
    assert!(Value::from("nan").as_number().is_nan());
    assert!(Value::from("-0x10").as_number().is_nan());
    assert!(Value::from("0x").as_number().is_nan());
    assert_eq!(Value::from("Infinity").as_number(), f64::INFINITY);
    assert_eq!(Value::from("-Infinity").as_number(), f64::NEG_INFINITY);
    assert_eq!(Value::from("0x10").as_number(), 16.0);
    assert_eq!(Value::from("0b101").as_number(), 5.0);
    assert_eq!(Value::from("0o17").as_number(), 15.0);
    assert_eq!(Value::from("-2.5e3").as_number(), -2500.0);
    assert_eq!(Value::from(".5").as_number(), 0.5);
}
