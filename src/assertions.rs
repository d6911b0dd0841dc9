//! Checks on single values, columns and rows.
//!
//! Every check returns `Ok(())` when it holds and a [`Failure`] otherwise;
//! hand the failure to [`crate::report::describe`] together with a
//! [`crate::report::Context`] to obtain a structured message.
//!
//! Column checks and row checks share the list functions: both work on the
//! slice of canonical values held by a [`crate::source::Column`] or
//! [`crate::source::Row`].

use crate::classify::{Leniency, check_any_type, check_type};
use crate::compare::{compare_equality, compare_multiset, compare_order, compare_sequence};
use crate::datatype::{Number, SemanticType, TypeSet};
use crate::literal::{Literal, parse_literal, parse_literal_for};
use crate::outcome::{ComparisonOutcome, Incomparable};
use crate::report::{Failure, Requirement, Subject};
use crate::source::LetterCase;
use crate::value::{CanonicalValue, ColumnContext, Value};

pub type Verdict = std::result::Result<(), Failure>;

fn literal_subject(literal: &Literal) -> Subject {
    match literal {
        Literal::Text(text) => Subject::One(Value::Text(text.clone())),
        typed => Subject::One(typed.verbatim().unwrap_or(Value::Null)),
    }
}

fn incomparable(requirement: Requirement, inc: Incomparable, actual: &CanonicalValue, literal: &Literal) -> Failure {
    Failure::new(requirement, inc.into(), Subject::of(actual)).expecting(literal_subject(literal))
}

fn expectation(requirement: Requirement, literal: &Literal, actual: &CanonicalValue) -> Result<CanonicalValue, Failure> {
    parse_literal_for(literal, actual).map_err(|inc| incomparable(requirement, inc, actual, literal))
}

// ------------- Nullity -------------
pub fn is_null(actual: &CanonicalValue) -> Verdict {
    if actual.is_null() {
        return Ok(());
    }
    Err(Failure::new(Requirement::Null, ComparisonOutcome::NotEqual, Subject::of(actual))
        .expecting(Subject::One(Value::Null)))
}

pub fn is_not_null(actual: &CanonicalValue) -> Verdict {
    if !actual.is_null() {
        return Ok(());
    }
    Err(Failure::new(Requirement::NotNull, ComparisonOutcome::NotEqual, Subject::of(actual)))
}

// ------------- Types -------------
pub fn is_of_type(actual: &CanonicalValue, expected: SemanticType, leniency: &Leniency) -> Verdict {
    check_type(actual, expected, leniency)
        .map_err(|tm| Failure::new(Requirement::OfType, tm.into(), Subject::of(actual)))
}

pub fn is_of_any_type_in(actual: &CanonicalValue, expected: &[SemanticType]) -> Verdict {
    check_any_type(actual, &TypeSet::of(expected))
        .map_err(|tm| Failure::new(Requirement::OfType, tm.into(), Subject::of(actual)))
}

pub fn is_number(actual: &CanonicalValue) -> Verdict {
    is_of_type(actual, SemanticType::Number, &Leniency::Strict)
}
pub fn is_boolean(actual: &CanonicalValue) -> Verdict {
    is_of_type(actual, SemanticType::Boolean, &Leniency::Strict)
}
pub fn is_text(actual: &CanonicalValue) -> Verdict {
    is_of_type(actual, SemanticType::Text, &Leniency::Strict)
}
pub fn is_bytes(actual: &CanonicalValue) -> Verdict {
    is_of_type(actual, SemanticType::Bytes, &Leniency::Strict)
}
pub fn is_uuid(actual: &CanonicalValue) -> Verdict {
    is_of_type(actual, SemanticType::Uuid, &Leniency::Strict)
}
pub fn is_date(actual: &CanonicalValue, leniency: &Leniency) -> Verdict {
    is_of_type(actual, SemanticType::Date, leniency)
}
pub fn is_time(actual: &CanonicalValue, leniency: &Leniency) -> Verdict {
    is_of_type(actual, SemanticType::Time, leniency)
}
pub fn is_date_time(actual: &CanonicalValue, leniency: &Leniency) -> Verdict {
    is_of_type(actual, SemanticType::DateTime, leniency)
}

// ------------- Equality -------------
pub fn is_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    let literal = expected.into();
    let expected = expectation(Requirement::EqualTo, &literal, actual)?;
    match compare_equality(actual, &expected) {
        ComparisonOutcome::Equal => Ok(()),
        outcome => Err(Failure::new(Requirement::EqualTo, outcome, Subject::of(actual))
            .expecting(Subject::of(&expected))),
    }
}

pub fn is_not_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    let literal = expected.into();
    let expected = expectation(Requirement::NotEqualTo, &literal, actual)?;
    match compare_equality(actual, &expected) {
        ComparisonOutcome::NotEqual => Ok(()),
        outcome => Err(Failure::new(Requirement::NotEqualTo, outcome, Subject::of(actual))
            .expecting(Subject::of(&expected))),
    }
}

fn is_boolean_value(requirement: Requirement, actual: &CanonicalValue, wanted: bool) -> Verdict {
    check_type(actual, SemanticType::Boolean, &Leniency::Strict)
        .map_err(|tm| Failure::new(requirement, tm.into(), Subject::of(actual)))?;
    if *actual.value() == Value::Boolean(wanted) {
        return Ok(());
    }
    Err(Failure::new(requirement, ComparisonOutcome::NotEqual, Subject::of(actual))
        .expecting(Subject::One(Value::Boolean(wanted))))
}

pub fn is_true(actual: &CanonicalValue) -> Verdict {
    is_boolean_value(Requirement::True, actual, true)
}
pub fn is_false(actual: &CanonicalValue) -> Verdict {
    is_boolean_value(Requirement::False, actual, false)
}

pub fn is_zero(actual: &CanonicalValue) -> Verdict {
    check_type(actual, SemanticType::Number, &Leniency::Strict)
        .map_err(|tm| Failure::new(Requirement::Zero, tm.into(), Subject::of(actual)))?;
    match actual.value() {
        Value::Number(n) if n.is_zero() => Ok(()),
        _ => Err(Failure::new(Requirement::Zero, ComparisonOutcome::NotEqual, Subject::of(actual))
            .expecting(Subject::One(Value::Number(Number::from(0i64))))),
    }
}

// ------------- Ordering -------------
// a date compared with a date-time is shown widened to midnight
fn order_subject(actual: &CanonicalValue, expected: &CanonicalValue) -> Subject {
    match (actual.value(), expected.value()) {
        (Value::DateTime(_), Value::Date(d)) => Subject::One(Value::DateTime(d.to_date_time())),
        _ => Subject::of(expected),
    }
}

fn ordered(
    requirement: Requirement,
    family: fn(&CanonicalValue) -> TypeSet,
    actual: &CanonicalValue,
    literal: Literal,
    holds: fn(&ComparisonOutcome) -> bool,
) -> Verdict {
    let expected = expectation(requirement, &literal, actual)?;
    check_any_type(actual, &family(&expected))
        .map_err(|tm| Failure::new(requirement, tm.into(), Subject::of(actual)).expecting(Subject::of(&expected)))?;
    match compare_order(actual, &expected) {
        outcome if holds(&outcome) => Ok(()),
        outcome => Err(Failure::new(requirement, outcome, Subject::of(actual))
            .expecting(order_subject(actual, &expected))),
    }
}

// the actual types a chronological expectation accepts
fn chronological(expected: &CanonicalValue) -> TypeSet {
    let kind = expected.semantic_type();
    if kind.is_temporal() {
        kind.comparable_with()
    } else {
        TypeSet::of(&[SemanticType::Date, SemanticType::Time, SemanticType::DateTime])
    }
}
fn numeric(_: &CanonicalValue) -> TypeSet {
    TypeSet::from(SemanticType::Number)
}

fn before(o: &ComparisonOutcome) -> bool {
    matches!(o, ComparisonOutcome::Before)
}
fn before_or_equal(o: &ComparisonOutcome) -> bool {
    matches!(o, ComparisonOutcome::Before | ComparisonOutcome::Equal)
}
fn after(o: &ComparisonOutcome) -> bool {
    matches!(o, ComparisonOutcome::After)
}
fn after_or_equal(o: &ComparisonOutcome) -> bool {
    matches!(o, ComparisonOutcome::After | ComparisonOutcome::Equal)
}

pub fn is_before(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::Before, chronological, actual, expected.into(), before)
}
pub fn is_before_or_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::BeforeOrEqualTo, chronological, actual, expected.into(), before_or_equal)
}
pub fn is_after(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::After, chronological, actual, expected.into(), after)
}
pub fn is_after_or_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::AfterOrEqualTo, chronological, actual, expected.into(), after_or_equal)
}

pub fn is_less_than(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::Before, numeric, actual, expected.into(), before)
}
pub fn is_less_than_or_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::BeforeOrEqualTo, numeric, actual, expected.into(), before_or_equal)
}
pub fn is_greater_than(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::After, numeric, actual, expected.into(), after)
}
pub fn is_greater_than_or_equal_to(actual: &CanonicalValue, expected: impl Into<Literal>) -> Verdict {
    ordered(Requirement::AfterOrEqualTo, numeric, actual, expected.into(), after_or_equal)
}

// ------------- Lists of values -------------
fn count_failure(requirement: Requirement, actual: usize, expected: usize) -> Failure {
    Failure::new(
        requirement,
        ComparisonOutcome::CountMismatch { actual, expected },
        Subject::Count(actual),
    )
    .expecting(Subject::Count(expected))
}

fn list_failure(requirement: Requirement, outcome: ComparisonOutcome, actual: &[CanonicalValue], expected: &[CanonicalValue]) -> Failure {
    let index = match &outcome {
        ComparisonOutcome::ValueMismatch { index, .. } => Some(*index),
        _ => None,
    };
    let failure = Failure::new(requirement, outcome, Subject::of_all(actual)).expecting(Subject::of_all(expected));
    match index {
        Some(index) => failure.at(index),
        None => failure,
    }
}

/// Values in order, each literal read against the value at its position.
pub fn has_values(actual: &[CanonicalValue], expected: &[Literal]) -> Verdict {
    if actual.len() != expected.len() {
        return Err(count_failure(Requirement::Values, actual.len(), expected.len()));
    }
    let mut parsed = Vec::with_capacity(expected.len());
    for (index, (value, literal)) in actual.iter().zip(expected).enumerate() {
        parsed.push(expectation(Requirement::Values, literal, value).map_err(|f| f.at(index))?);
    }
    match compare_sequence(actual, &parsed) {
        ComparisonOutcome::Equal => Ok(()),
        outcome => Err(list_failure(Requirement::Values, outcome, actual, &parsed)),
    }
}

/// Values in any order, literals read against the type of the first non-null value.
pub fn contains_values(actual: &[CanonicalValue], expected: &[Literal]) -> Verdict {
    if actual.len() != expected.len() {
        return Err(count_failure(Requirement::ContainsValues, actual.len(), expected.len()));
    }
    let representative = actual.iter().find(|v| !v.is_null());
    let target = representative
        .map(CanonicalValue::semantic_type)
        .unwrap_or(SemanticType::NotIdentified);
    let mut parsed = Vec::with_capacity(expected.len());
    for (index, literal) in expected.iter().enumerate() {
        let value = parse_literal(literal, target).map_err(|inc| {
            let (inc, subject) = match representative {
                Some(r) => (inc.with_value(r.value()), Subject::of(r)),
                None => (inc, Subject::One(Value::Null)),
            };
            Failure::new(Requirement::ContainsValues, inc.into(), subject)
                .expecting(literal_subject(literal))
                .at(index)
        })?;
        parsed.push(value);
    }
    match compare_multiset(actual, &parsed) {
        ComparisonOutcome::Equal => Ok(()),
        outcome => Err(list_failure(Requirement::ContainsValues, outcome, actual, &parsed)),
    }
}

pub fn has_number_of_values(actual: &[CanonicalValue], expected: usize) -> Verdict {
    if actual.len() == expected {
        return Ok(());
    }
    Err(count_failure(Requirement::NumberOfValues, actual.len(), expected))
}

pub fn has_number_of_rows(column: &[CanonicalValue], expected: usize) -> Verdict {
    has_number_of_values(column, expected)
}

pub fn has_number_of_columns(row: &[CanonicalValue], expected: usize) -> Verdict {
    has_number_of_values(row, expected)
}

pub fn has_only_null_values(actual: &[CanonicalValue]) -> Verdict {
    match actual.iter().position(|v| !v.is_null()) {
        None => Ok(()),
        Some(index) => Err(Failure::new(
            Requirement::OnlyNullValues,
            ComparisonOutcome::ValueMismatch {
                index,
                actual: Some(actual[index].value().clone()),
                expected: Value::Null,
            },
            Subject::of_all(actual),
        )
        .at(index)),
    }
}

pub fn has_only_not_null_values(actual: &[CanonicalValue]) -> Verdict {
    match actual.iter().position(CanonicalValue::is_null) {
        None => Ok(()),
        Some(index) => Err(Failure::new(
            Requirement::OnlyNotNullValues,
            ComparisonOutcome::NotEqual,
            Subject::of_all(actual),
        )
        .at(index)),
    }
}

/// Every non-null value of the column is of the required type.
pub fn column_is_of_type(actual: &[CanonicalValue], expected: SemanticType, leniency: &Leniency) -> Verdict {
    for (index, value) in actual.iter().enumerate() {
        is_of_type(value, expected, leniency).map_err(|f| f.at(index))?;
    }
    Ok(())
}

pub fn has_column_name(column: &ColumnContext, expected: &str, case: LetterCase) -> Verdict {
    match &column.name {
        Some(name) if case.matches(name, expected) => Ok(()),
        name => Err(Failure::new(
            Requirement::ColumnName,
            ComparisonOutcome::NotEqual,
            Subject::Name(name.clone()),
        )
        .expecting(Subject::Name(Some(expected.to_string())))),
    }
}
