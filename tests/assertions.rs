use dbassay::assertions::*;
use dbassay::classify::{Leniency, to_canonical};
use dbassay::datatype::{SemanticType, TypeSet};
use dbassay::literal::Literal;
use dbassay::outcome::{ComparisonOutcome, FailureKind, Incomparable};
use dbassay::report::{Context, Rendered, Requirement, Subject, describe};
use dbassay::source::LetterCase;
use dbassay::temporal::{DateTimeValue, DateValue, TimeValue};
use dbassay::value::{CanonicalValue, ColumnContext, RawValue, Value};

fn date_time(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> CanonicalValue {
    CanonicalValue::new(Value::DateTime(DateTimeValue::of(y, m, d, h, mi, s, 0).expect("valid date-time")))
}
fn date(y: i32, m: u32, d: u32) -> DateValue {
    DateValue::new(y, m, d).expect("valid date")
}

fn setup() -> Vec<CanonicalValue> {
    vec![
        to_canonical(RawValue::Int(1)),
        to_canonical(RawValue::Int(2)),
        to_canonical(RawValue::Null),
        to_canonical(RawValue::Int(2)),
    ]
}

#[test]
fn nullity() {
    let null = CanonicalValue::null();
    let one = to_canonical(RawValue::Int(1));
    assert!(is_null(&null).is_ok());
    assert!(is_not_null(&one).is_ok());
    let failure = is_null(&one).expect_err("not null");
    assert_eq!(failure.requirement, Requirement::Null);
    let failure = is_not_null(&null).expect_err("null");
    assert_eq!(failure.requirement, Requirement::NotNull);
    assert_eq!(failure.outcome, ComparisonOutcome::NotEqual);
    assert!(!failure.outcome.is_equal());
}

#[test]
fn type_checks() {
    let dt = date_time(2014, 5, 24, 9, 46, 30);
    let time = CanonicalValue::new(Value::Time(TimeValue::new(9, 46, 30, 0).expect("valid time")));
    assert!(is_date_time(&dt, &Leniency::Strict).is_ok());
    assert!(is_date(&dt, &Leniency::lenient()).is_ok());
    let failure = is_date(&dt, &Leniency::Strict).expect_err("no plain date");
    assert_eq!(failure.requirement, Requirement::OfType);
    assert_eq!(failure.kind(), FailureKind::TypeMismatch);
    // lenient checks never turn a time into a date
    assert!(is_date(&time, &Leniency::lenient()).is_err());
    assert!(is_time(&time, &Leniency::lenient()).is_ok());

    assert!(is_number(&to_canonical(RawValue::Float64(1.5))).is_ok());
    assert!(is_boolean(&to_canonical(RawValue::Bool(false))).is_ok());
    assert!(is_text(&to_canonical(RawValue::Char('c'))).is_ok());
    assert!(is_bytes(&to_canonical(RawValue::Bytes(vec![1]))).is_ok());
    assert!(is_uuid(&to_canonical(RawValue::Uuid(uuid::Uuid::nil()))).is_ok());
    assert!(is_uuid(&to_canonical(RawValue::from("nil"))).is_err());
    assert!(is_number(&CanonicalValue::null()).is_ok());

    let text = to_canonical(RawValue::from("x"));
    assert!(is_of_any_type_in(&text, &[SemanticType::Number, SemanticType::Text]).is_ok());
    assert!(is_of_any_type_in(&text, &[SemanticType::Number]).is_err());
    assert!(is_of_type(&text, SemanticType::Text, &Leniency::Strict).is_ok());
}

#[test]
fn equality_against_text_literals() {
    let day = CanonicalValue::new(Value::Date(date(2014, 5, 24)));
    assert!(is_equal_to(&day, "2014-05-24").is_ok());
    assert!(is_equal_to(&day, "2014-05-24T00:00").is_ok());
    assert!(is_equal_to(&day, date(2014, 5, 24)).is_ok());
    assert!(is_not_equal_to(&day, "2014-05-25").is_ok());
    let failure = is_not_equal_to(&day, "2014-05-24").expect_err("equal");
    assert_eq!(failure.requirement, Requirement::NotEqualTo);
    assert_eq!(failure.outcome, ComparisonOutcome::Equal);

    let real = to_canonical(RawValue::Float64(5.6));
    assert!(is_equal_to(&real, "5.6").is_ok());
    assert!(is_equal_to(&real, 5.6).is_ok());
    assert!(is_equal_to(&to_canonical(RawValue::Int(10)), "10.00").is_ok());
    assert!(is_equal_to(&CanonicalValue::null(), Literal::Null).is_ok());
    assert!(is_not_equal_to(&CanonicalValue::null(), "x").is_ok());

    let bytes = to_canonical(RawValue::Bytes(vec![1, 2, 3]));
    assert!(is_equal_to(&bytes, vec![1u8, 2, 3]).is_ok());
    assert!(is_not_equal_to(&bytes, vec![3u8, 2, 1]).is_ok());
    let failure = is_equal_to(&bytes, "0x010203").expect_err("no text form of bytes");
    assert_eq!(failure.kind(), FailureKind::TypeMismatch);
}

#[test]
fn booleans_and_zero() {
    assert!(is_true(&to_canonical(RawValue::Bool(true))).is_ok());
    assert!(is_false(&to_canonical(RawValue::Bool(false))).is_ok());
    let failure = is_true(&to_canonical(RawValue::Bool(false))).expect_err("false");
    assert_eq!(failure.requirement, Requirement::True);
    assert_eq!(failure.kind(), FailureKind::ValueMismatch);
    let failure = is_false(&to_canonical(RawValue::Int(0))).expect_err("not a boolean");
    assert_eq!(failure.kind(), FailureKind::TypeMismatch);

    assert!(is_zero(&to_canonical(RawValue::Float64(0.0))).is_ok());
    assert!(is_zero(&to_canonical(RawValue::from("0"))).is_err());
    let failure = is_zero(&to_canonical(RawValue::Int(3))).expect_err("three");
    assert_eq!(failure.requirement, Requirement::Zero);
}

#[test]
fn chronology_against_dates() {
    let dt = date_time(2007, 12, 23, 9, 1, 5);
    assert!(is_before_or_equal_to(&dt, date(2007, 12, 24)).is_ok());
    assert!(is_before(&dt, date(2007, 12, 24)).is_ok());
    assert!(is_after(&dt, date(2007, 12, 23)).is_ok());
    assert!(is_after_or_equal_to(&dt, "2007-12-23T09:01:05").is_ok());

    let failure = is_before_or_equal_to(&dt, date(2007, 12, 23)).expect_err("after midnight");
    assert_eq!(failure.requirement, Requirement::BeforeOrEqualTo);
    let message = describe(&failure, &Context::default());
    assert_eq!(message.actual, Some(Rendered::One("2007-12-23T09:01:05.000000000".to_string())));
    // the date is shown the way it was compared
    assert_eq!(message.expected, Some(Rendered::One("2007-12-23T00:00:00.000000000".to_string())));

    let day = CanonicalValue::new(Value::Date(date(2007, 12, 24)));
    let failure = is_before(&day, date(2007, 12, 23)).expect_err("after");
    let message = describe(&failure, &Context::default());
    assert_eq!(message.expected, Some(Rendered::One("2007-12-23".to_string())));
}

#[test]
fn chronology_requires_temporal_values() {
    let text = to_canonical(RawValue::from("2007-12-23"));
    let failure = is_after(&text, date(2007, 12, 23)).expect_err("text has no chronology");
    match &failure.outcome {
        ComparisonOutcome::Incomparable(Incomparable::TypeMismatch(tm)) => {
            assert_eq!(tm.actual, SemanticType::Text);
            assert_eq!(tm.expected.to_string(), "[DATE, DATE_TIME]");
        }
        other => panic!("unexpected {:?}", other),
    }
    let time = CanonicalValue::new(Value::Time(TimeValue::new(9, 0, 0, 0).expect("valid time")));
    assert!(is_before(&time, date(2007, 12, 23)).is_err());
    assert!(is_before(&time, "10:00").is_ok());
    assert!(is_before(&to_canonical(RawValue::Int(1)), "2").is_err());
}

#[test]
fn numeric_order() {
    let five = to_canonical(RawValue::Int(5));
    assert!(is_less_than(&five, "6").is_ok());
    assert!(is_less_than_or_equal_to(&five, 5).is_ok());
    assert!(is_greater_than(&five, "4.99").is_ok());
    assert!(is_greater_than_or_equal_to(&five, "-Infinity").is_ok());
    let failure = is_greater_than(&five, 5).expect_err("equal");
    assert_eq!(failure.outcome, ComparisonOutcome::Equal);
    let failure = is_less_than(&five, "five").expect_err("not a number");
    assert_eq!(failure.kind(), FailureKind::ParseFailure);
    let day = CanonicalValue::new(Value::Date(date(2007, 12, 23)));
    let failure = is_less_than(&day, "2007-12-24").expect_err("dates are not numbers");
    match failure.outcome {
        ComparisonOutcome::Incomparable(Incomparable::TypeMismatch(tm)) => {
            assert_eq!(tm.expected, TypeSet::from(SemanticType::Number))
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn lists_in_order_and_in_any_order() {
    let values = setup();
    assert!(has_values(&values, &["1".into(), 2.into(), Literal::Null, "2".into()]).is_ok());
    let failure = has_values(&values, &[2.into(), 1.into(), Literal::Null, 2.into()]).expect_err("order");
    assert_eq!(failure.requirement, Requirement::Values);
    assert_eq!(failure.index, Some(0));

    assert!(contains_values(&values, &[Literal::Null, 2.into(), "1".into(), 2.into()]).is_ok());
    let failure = contains_values(&values, &[1.into(), 1.into(), 2.into(), Literal::Null]).expect_err("multiplicity");
    assert_eq!(failure.requirement, Requirement::ContainsValues);
    assert_eq!(failure.index, Some(1));

    let failure = has_values(&values, &[1.into()]).expect_err("count");
    assert_eq!(failure.outcome, ComparisonOutcome::CountMismatch { actual: 4, expected: 1 });
    let failure = contains_values(&values, &["1".into(), "two".into(), Literal::Null, "2".into()])
        .expect_err("unparsable");
    assert_eq!(failure.kind(), FailureKind::ParseFailure);
    assert_eq!(failure.index, Some(1));
}

#[test]
fn counts_and_nullity_of_lists() {
    let values = setup();
    assert!(has_number_of_rows(&values, 4).is_ok());
    assert!(has_number_of_columns(&values, 4).is_ok());
    assert!(has_number_of_values(&values, 3).is_err());
    let failure = has_only_not_null_values(&values).expect_err("one null");
    assert_eq!(failure.index, Some(2));
    assert_eq!(failure.requirement, Requirement::OnlyNotNullValues);
    assert_eq!(failure.outcome, ComparisonOutcome::NotEqual);
    assert_eq!(failure.actual, Subject::of_all(&values));
    let failure = has_only_null_values(&values).expect_err("all but one set");
    assert_eq!(failure.index, Some(0));
    assert!(has_only_null_values(&[CanonicalValue::null(), CanonicalValue::null()]).is_ok());
    assert!(has_only_not_null_values(&values[..2]).is_ok());
}

#[test]
fn column_types_and_names() {
    let values = setup();
    assert!(column_is_of_type(&values, SemanticType::Number, &Leniency::Strict).is_ok());
    let mixed = vec![to_canonical(RawValue::Int(1)), to_canonical(RawValue::from("x"))];
    let failure = column_is_of_type(&mixed, SemanticType::Number, &Leniency::Strict).expect_err("text");
    assert_eq!(failure.index, Some(1));

    let column = ColumnContext::new("movie table", 1, Some("title".to_string()));
    assert!(has_column_name(&column, "TITLE", LetterCase::Insensitive).is_ok());
    assert!(has_column_name(&column, "title", LetterCase::Sensitive).is_ok());
    let failure = has_column_name(&column, "TITLE", LetterCase::Sensitive).expect_err("case");
    assert_eq!(failure.requirement, Requirement::ColumnName);
    let message = describe(&failure, &Context::of_column(&column));
    assert_eq!(message.actual, Some(Rendered::One("title".to_string())));
    assert_eq!(message.expected, Some(Rendered::One("TITLE".to_string())));
}
