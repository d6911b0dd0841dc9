use proptest::prelude::*;

use dbassay::classify::{classify, to_canonical};
use dbassay::compare::compare_equality;
use dbassay::datatype::Number;
use dbassay::literal::{Literal, parse_literal};
use dbassay::outcome::ComparisonOutcome;
use dbassay::temporal::{DateTimeValue, DateValue, TimeValue};
use dbassay::value::{CanonicalValue, RawValue, Value};

fn date() -> impl Strategy<Value = DateValue> {
    (-262_000i32..=262_000, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| DateValue::new(y, m, d).expect("valid date"))
}

fn time() -> impl Strategy<Value = TimeValue> {
    (0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000_000)
        .prop_map(|(h, m, s, n)| TimeValue::new(h, m, s, n).expect("valid time"))
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(|i| Value::Number(Number::from(i))),
        any::<f64>().prop_map(|f| Value::Number(Number::from_f64(f))),
        "[a-zA-Z0-9 :-]{0,12}".prop_map(Value::Text),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(Value::Bytes),
        date().prop_map(Value::Date),
        time().prop_map(Value::Time),
        (date(), time()).prop_map(|(d, t)| Value::DateTime(DateTimeValue::new(d, t))),
        any::<u128>().prop_map(|u| Value::Uuid(uuid::Uuid::from_u128(u))),
    ]
}

fn raw() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        any::<bool>().prop_map(RawValue::Bool),
        any::<i64>().prop_map(RawValue::Int),
        any::<u64>().prop_map(RawValue::UInt),
        any::<i128>().prop_map(RawValue::Int128),
        any::<f32>().prop_map(RawValue::Float32),
        any::<f64>().prop_map(RawValue::Float64),
        any::<char>().prop_map(RawValue::Char),
        ".{0,8}".prop_map(RawValue::Text),
        proptest::collection::vec(any::<u8>(), 0..8).prop_map(RawValue::Bytes),
        ".{0,8}".prop_map(|repr| RawValue::Unsupported {
            type_name: "other".to_string(),
            repr
        }),
    ]
}

proptest! {
    #[test]
    fn classification_is_total_and_consistent(raw in raw()) {
        let kind = classify(&raw);
        prop_assert_eq!(to_canonical(raw).semantic_type(), kind);
    }

    #[test]
    fn equality_is_reflexive(v in value()) {
        let v = CanonicalValue::new(v);
        prop_assert_eq!(compare_equality(&v, &v), ComparisonOutcome::Equal);
    }

    #[test]
    fn equality_is_symmetric(a in value(), b in value()) {
        let a = CanonicalValue::new(a);
        let b = CanonicalValue::new(b);
        prop_assert_eq!(
            compare_equality(&a, &b).is_equal(),
            compare_equality(&b, &a).is_equal()
        );
    }

    #[test]
    fn canonical_text_parses_back(v in value()) {
        // bytes have no text form and null renders as a word
        prop_assume!(!matches!(v, Value::Bytes(_) | Value::Null));
        let text = v.to_string();
        let parsed = parse_literal(&Literal::from(text.as_str()), v.semantic_type())
            .expect("canonical text parses");
        let original = CanonicalValue::new(v);
        prop_assert_eq!(compare_equality(&parsed, &original), ComparisonOutcome::Equal);
    }
}
