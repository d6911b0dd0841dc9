use dbassay::datatype::{Number, SemanticType, TypeSet};
use dbassay::literal::{Literal, parse_literal, parse_literal_for};
use dbassay::outcome::Incomparable;
use dbassay::temporal::{DateTimeValue, DateValue, TimeValue};
use dbassay::value::{CanonicalValue, Value};

use uuid::Uuid;

fn parse(text: &str, target: SemanticType) -> Value {
    parse_literal(&Literal::from(text), target)
        .expect("literal parses")
        .value()
        .clone()
}

fn failure(text: &str, target: SemanticType) -> Incomparable {
    parse_literal(&Literal::from(text), target).expect_err("literal is rejected")
}

#[test]
fn time_forms() {
    let expected = TimeValue::new(9, 46, 31, 0).expect("valid time");
    assert_eq!(parse("09:46:31", SemanticType::Time), Value::Time(expected));
    assert_eq!(
        parse("09:46", SemanticType::Time),
        Value::Time(TimeValue::new(9, 46, 0, 0).expect("valid time"))
    );
    // fraction digits are right-padded to nanoseconds
    assert_eq!(
        parse("09:46:31.5", SemanticType::Time),
        Value::Time(TimeValue::new(9, 46, 31, 500_000_000).expect("valid time"))
    );
    assert_eq!(
        parse("09:46:31.000000001", SemanticType::Time),
        Value::Time(TimeValue::new(9, 46, 31, 1).expect("valid time"))
    );
}

#[test]
fn malformed_times_are_parse_failures() {
    for text in ["-9:46:31", "9:46:31", "09:46:3", "24:00", "09:60", "09:46:31.", "09:46:31.1234567890", ""] {
        match failure(text, SemanticType::Time) {
            Incomparable::ParseFailure(pf) => {
                assert_eq!(pf.literal, text);
                assert_eq!(pf.target, SemanticType::Time);
                assert!(!pf.detail.is_empty());
            }
            other => panic!("expected a parse failure for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn date_time_forms_default_missing_fields() {
    let midnight = DateTimeValue::of(2014, 5, 24, 0, 0, 0, 0).expect("valid date-time");
    assert_eq!(parse("2014-05-24", SemanticType::DateTime), Value::DateTime(midnight));
    assert_eq!(
        parse("2014-05-24T09:46", SemanticType::DateTime),
        Value::DateTime(DateTimeValue::of(2014, 5, 24, 9, 46, 0, 0).expect("valid date-time"))
    );
    assert_eq!(
        parse("2014-05-24T09:46:30.25", SemanticType::DateTime),
        Value::DateTime(DateTimeValue::of(2014, 5, 24, 9, 46, 30, 250_000_000).expect("valid date-time"))
    );
    assert!(matches!(failure("2014-05-24 09:46", SemanticType::DateTime), Incomparable::ParseFailure(_)));
    assert!(matches!(failure("2014-02-30T10:00", SemanticType::DateTime), Incomparable::ParseFailure(_)));
}

#[test]
fn date_forms_accept_a_zero_time() {
    let date = Value::Date(DateValue::new(2014, 5, 24).expect("valid date"));
    assert_eq!(parse("2014-05-24", SemanticType::Date), date);
    assert_eq!(parse("2014-05-24T00:00", SemanticType::Date), date);
    assert_eq!(parse("2014-05-24T00:00:00.000", SemanticType::Date), date);
    match failure("2014-05-24T00:00:01", SemanticType::Date) {
        Incomparable::ParseFailure(pf) => assert_eq!(pf.target, SemanticType::Date),
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(failure("2014-5-24", SemanticType::Date), Incomparable::ParseFailure(_)));
    assert!(matches!(failure("2023-02-29", SemanticType::Date), Incomparable::ParseFailure(_)));
}

#[test]
fn only_ascii_digits_are_read() {
    for (text, target) in [
        ("09:46:3\u{0660}", SemanticType::Time),
        ("\u{0660}\u{0660}:\u{0660}\u{0660}", SemanticType::Time),
        ("\u{0662}\u{0660}14-05-24", SemanticType::Date),
        ("2014-05-24T09:\u{0664}6", SemanticType::DateTime),
        ("2014-05-24T09:46:30.\u{0665}", SemanticType::DateTime),
    ] {
        match failure(text, target) {
            Incomparable::ParseFailure(pf) => assert_eq!(pf.literal, text),
            other => panic!("expected a parse failure for {:?}, got {:?}", text, other),
        }
    }
}

#[test]
fn years_beyond_four_digits_are_signed() {
    let far = DateValue::new(10000, 1, 1).expect("valid date");
    assert_eq!(far.to_string(), "+10000-01-01");
    assert_eq!(parse("+10000-01-01", SemanticType::Date), Value::Date(far));
    let before = DateValue::new(-1, 12, 31).expect("valid date");
    assert_eq!(before.to_string(), "-0001-12-31");
    assert_eq!(parse("-0001-12-31", SemanticType::Date), Value::Date(before));
    assert_eq!(
        parse("-0001-12-31T23:59", SemanticType::DateTime),
        Value::DateTime(DateTimeValue::of(-1, 12, 31, 23, 59, 0, 0).expect("valid date-time"))
    );
    // four-digit years stay unsigned
    assert_eq!(DateValue::new(0, 1, 1).expect("valid date").to_string(), "0000-01-01");
    assert_eq!(parse("+2014-05-24", SemanticType::Date), parse("2014-05-24", SemanticType::Date));
    assert!(matches!(failure("10000-01-01", SemanticType::Date), Incomparable::ParseFailure(_)));
    assert!(matches!(failure("+99999999999-01-01", SemanticType::Date), Incomparable::ParseFailure(_)));
}

#[test]
fn numbers() {
    assert_eq!(parse("10.00", SemanticType::Number), Value::Number(Number::from(10i64)));
    assert_eq!(parse("-3", SemanticType::Number), Value::Number(Number::from(-3i64)));
    assert_eq!(parse("NaN", SemanticType::Number), Value::Number(Number::NaN));
    assert_eq!(parse("Infinity", SemanticType::Number), Value::Number(Number::PositiveInfinity));
    assert_eq!(parse("-Infinity", SemanticType::Number), Value::Number(Number::NegativeInfinity));
    match failure("***", SemanticType::Number) {
        Incomparable::ParseFailure(pf) => {
            assert_eq!(pf.literal, "***");
            assert_eq!(pf.target, SemanticType::Number);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn booleans() {
    assert_eq!(parse("true", SemanticType::Boolean), Value::Boolean(true));
    assert_eq!(parse("FALSE", SemanticType::Boolean), Value::Boolean(false));
    assert_eq!(parse("1", SemanticType::Boolean), Value::Boolean(true));
    assert_eq!(parse("0", SemanticType::Boolean), Value::Boolean(false));
    match failure("Text", SemanticType::Boolean) {
        Incomparable::TypeMismatch(tm) => {
            assert_eq!(tm.actual, SemanticType::Boolean);
            assert_eq!(tm.expected, TypeSet::text_comparable());
            assert_eq!(tm.expected.to_string(), "[TEXT, NUMBER, DATE, TIME, DATE_TIME]");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn bytes_cannot_be_written_as_text() {
    match failure("0x0102", SemanticType::Bytes) {
        Incomparable::TypeMismatch(tm) => {
            assert_eq!(tm.actual, SemanticType::Bytes);
            assert_eq!(tm.expected, TypeSet::text_comparable());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn identifiers() {
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").expect("uuid");
    assert_eq!(parse("67e55044-10b1-426f-9247-bb680e5fe0c8", SemanticType::Uuid), Value::Uuid(id));
    assert_eq!(parse("67E55044-10B1-426F-9247-BB680E5FE0C8", SemanticType::Uuid), Value::Uuid(id));
    for text in ["67e5504410b1426f9247bb680e5fe0c8", "not-a-uuid", "67e55044-10b1-426f-9247-bb680e5fe0c"] {
        assert!(matches!(failure(text, SemanticType::Uuid), Incomparable::ParseFailure(_)), "{}", text);
    }
}

#[test]
fn text_is_never_reinterpreted_by_shape() {
    assert_eq!(parse("2014-05-24", SemanticType::Text), Value::Text("2014-05-24".to_string()));
    assert_eq!(parse("12", SemanticType::Text), Value::Text("12".to_string()));
    // a null or unsupported actual leaves the text alone
    assert_eq!(parse("12", SemanticType::NotIdentified), Value::Text("12".to_string()));
}

#[test]
fn typed_literals_are_used_verbatim() {
    let date = DateValue::new(2007, 12, 23).expect("valid date");
    let parsed = parse_literal(&Literal::from(date), SemanticType::DateTime).expect("verbatim");
    assert_eq!(parsed.value(), &Value::Date(date));
    let parsed = parse_literal(&Literal::from(true), SemanticType::Text).expect("verbatim");
    assert_eq!(parsed.value(), &Value::Boolean(true));
    let parsed = parse_literal(&Literal::from(None::<i64>), SemanticType::Number).expect("verbatim");
    assert!(parsed.is_null());
}

#[test]
fn parsing_for_an_actual_records_it() {
    let actual = CanonicalValue::new(Value::Boolean(true));
    match parse_literal_for(&Literal::from("Text"), &actual).expect_err("mismatch") {
        Incomparable::TypeMismatch(tm) => assert_eq!(tm.value, Some(Value::Boolean(true))),
        other => panic!("unexpected {:?}", other),
    }
}
