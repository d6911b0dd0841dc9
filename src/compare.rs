// used to log every decision of the comparator
use tracing::{debug, trace};

use std::cmp::Ordering;

use crate::datatype::{SemanticType, TypeSet};
use crate::outcome::{ComparisonOutcome, Incomparable, TypeMismatch};
use crate::value::{CanonicalValue, Value};

// ------------- Scalars -------------
pub fn compare_equality(actual: &CanonicalValue, expected: &CanonicalValue) -> ComparisonOutcome {
    let outcome = equality(actual.value(), expected.value());
    trace!(actual = %actual, expected = %expected, outcome = ?outcome, "equality");
    outcome
}

pub fn compare_order(actual: &CanonicalValue, expected: &CanonicalValue) -> ComparisonOutcome {
    let outcome = order(actual.value(), expected.value());
    trace!(actual = %actual, expected = %expected, outcome = ?outcome, "order");
    outcome
}

fn relation(equal: bool) -> ComparisonOutcome {
    if equal {
        ComparisonOutcome::Equal
    } else {
        ComparisonOutcome::NotEqual
    }
}

fn ordering(o: Ordering) -> ComparisonOutcome {
    match o {
        Ordering::Less => ComparisonOutcome::Before,
        Ordering::Equal => ComparisonOutcome::Equal,
        Ordering::Greater => ComparisonOutcome::After,
    }
}

fn equality(actual: &Value, expected: &Value) -> ComparisonOutcome {
    match (actual, expected) {
        (Value::Null, Value::Null) => ComparisonOutcome::Equal,
        (Value::Null, _) | (_, Value::Null) => ComparisonOutcome::NotEqual,
        (Value::Boolean(a), Value::Boolean(e)) => relation(a == e),
        (Value::Number(a), Value::Number(e)) => relation(a == e),
        (Value::Text(a), Value::Text(e)) => relation(a == e),
        (Value::Bytes(a), Value::Bytes(e)) => relation(a == e),
        (Value::Uuid(a), Value::Uuid(e)) => relation(a == e),
        (Value::Date(a), Value::Date(e)) => relation(a == e),
        (Value::Time(a), Value::Time(e)) => relation(a == e),
        (Value::DateTime(a), Value::DateTime(e)) => relation(a == e),
        // a date-time equals a date only at midnight of that day
        (Value::Date(d), Value::DateTime(dt)) | (Value::DateTime(dt), Value::Date(d)) => {
            relation(dt.is_midnight() && dt.date() == *d)
        }
        _ => mismatch(actual, expected.semantic_type().comparable_with()),
    }
}

fn order(actual: &Value, expected: &Value) -> ComparisonOutcome {
    match (actual, expected) {
        (Value::Number(a), Value::Number(e)) => ordering(a.cmp(e)),
        (Value::Date(a), Value::Date(e)) => ordering(a.cmp(e)),
        (Value::Time(a), Value::Time(e)) => ordering(a.cmp(e)),
        (Value::DateTime(a), Value::DateTime(e)) => ordering(a.cmp(e)),
        (Value::Date(a), Value::DateTime(e)) => ordering(a.to_date_time().cmp(e)),
        (Value::DateTime(a), Value::Date(e)) => ordering(a.cmp(&e.to_date_time())),
        _ => {
            let kind = expected.semantic_type();
            let accepted = if kind.is_ordered() {
                kind.comparable_with()
            } else {
                ordered_types()
            };
            mismatch(actual, accepted)
        }
    }
}

fn ordered_types() -> TypeSet {
    TypeSet::of(&[
        SemanticType::Number,
        SemanticType::Date,
        SemanticType::Time,
        SemanticType::DateTime,
    ])
}

fn mismatch(actual: &Value, accepted: TypeSet) -> ComparisonOutcome {
    ComparisonOutcome::from(TypeMismatch::of_value(actual, accepted))
}

// ------------- Collections -------------
/// Position-wise equality of two equally long lists.
pub fn compare_sequence(actual: &[CanonicalValue], expected: &[CanonicalValue]) -> ComparisonOutcome {
    if actual.len() != expected.len() {
        debug!(actual = actual.len(), expected = expected.len(), "sequence count mismatch");
        return ComparisonOutcome::CountMismatch {
            actual: actual.len(),
            expected: expected.len(),
        };
    }
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        match compare_equality(a, e) {
            ComparisonOutcome::Equal => {}
            ComparisonOutcome::Incomparable(inc) => {
                debug!(index, "sequence element incomparable");
                return ComparisonOutcome::Incomparable(inc);
            }
            _ => {
                debug!(index, actual = %a, expected = %e, "sequence element mismatch");
                return ComparisonOutcome::ValueMismatch {
                    index,
                    actual: Some(a.value().clone()),
                    expected: e.value().clone(),
                };
            }
        }
    }
    ComparisonOutcome::Equal
}

/// Equality ignoring order, each actual value matching at most one expected
/// value.
pub fn compare_multiset(actual: &[CanonicalValue], expected: &[CanonicalValue]) -> ComparisonOutcome {
    if actual.len() != expected.len() {
        debug!(actual = actual.len(), expected = expected.len(), "multiset count mismatch");
        return ComparisonOutcome::CountMismatch {
            actual: actual.len(),
            expected: expected.len(),
        };
    }
    let mut claimed = vec![false; actual.len()];
    for (index, e) in expected.iter().enumerate() {
        let mut first_incomparable: Option<Incomparable> = None;
        let mut comparable = false;
        let mut matched = false;
        for (slot, a) in actual.iter().enumerate() {
            if claimed[slot] {
                continue;
            }
            match compare_equality(a, e) {
                ComparisonOutcome::Equal => {
                    claimed[slot] = true;
                    matched = true;
                    break;
                }
                ComparisonOutcome::Incomparable(inc) => {
                    first_incomparable.get_or_insert(inc);
                }
                _ => comparable = true,
            }
        }
        if matched {
            continue;
        }
        debug!(index, expected = %e, "multiset expectation unmatched");
        return match first_incomparable {
            Some(inc) if !comparable => ComparisonOutcome::Incomparable(inc),
            _ => ComparisonOutcome::ValueMismatch {
                index,
                actual: None,
                expected: e.value().clone(),
            },
        };
    }
    ComparisonOutcome::Equal
}
