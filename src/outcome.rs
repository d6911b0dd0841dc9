//! Results of comparisons and the failure taxonomy.
//!
//! Every comparison failure is a value of these types. Nothing here is ever
//! raised as a fault; the assertion layer turns an outcome into a
//! [`crate::report::Failure`] and the reporter describes it.

use serde::Serialize;

use crate::datatype::{SemanticType, TypeSet};
use crate::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FailureKind {
    TypeMismatch,
    ParseFailure,
    CountMismatch,
    ValueMismatch,
}

/// The actual value's type is outside the set the expectation accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    /// The offending actual value, when known at the point of detection.
    pub value: Option<Value>,
    pub actual: SemanticType,
    pub expected: TypeSet,
}

impl TypeMismatch {
    pub fn new(actual: SemanticType, expected: TypeSet) -> Self {
        Self {
            value: None,
            actual,
            expected,
        }
    }
    pub fn of_value(value: &Value, expected: TypeSet) -> Self {
        Self {
            value: Some(value.clone()),
            actual: value.semantic_type(),
            expected,
        }
    }
}

/// A literal could not be read as the type it was compared against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFailure {
    pub literal: String,
    pub target: SemanticType,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Incomparable {
    TypeMismatch(TypeMismatch),
    ParseFailure(ParseFailure),
}

impl Incomparable {
    pub fn kind(&self) -> FailureKind {
        match self {
            Incomparable::TypeMismatch(_) => FailureKind::TypeMismatch,
            Incomparable::ParseFailure(_) => FailureKind::ParseFailure,
        }
    }
    /// Fills in the actual value of a type mismatch detected without it.
    pub(crate) fn with_value(self, value: &Value) -> Self {
        match self {
            Incomparable::TypeMismatch(tm) if tm.value.is_none() => {
                Incomparable::TypeMismatch(TypeMismatch {
                    value: Some(value.clone()),
                    ..tm
                })
            }
            other => other,
        }
    }
}
impl From<TypeMismatch> for Incomparable {
    fn from(tm: TypeMismatch) -> Self {
        Incomparable::TypeMismatch(tm)
    }
}
impl From<ParseFailure> for Incomparable {
    fn from(pf: ParseFailure) -> Self {
        Incomparable::ParseFailure(pf)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComparisonOutcome {
    Equal,
    NotEqual,
    /// The actual value orders before the expected one.
    Before,
    /// The actual value orders after the expected one.
    After,
    Incomparable(Incomparable),
    CountMismatch {
        actual: usize,
        expected: usize,
    },
    /// First position (sequence) or first unmatched expectation (multiset).
    ValueMismatch {
        index: usize,
        actual: Option<Value>,
        expected: Value,
    },
}

impl ComparisonOutcome {
    pub fn is_equal(&self) -> bool {
        matches!(self, ComparisonOutcome::Equal)
    }
    /// Kind of failure this outcome represents when it fails a check.
    ///
    /// Plain relation outcomes (`Equal`, `NotEqual`, `Before`, `After`) are
    /// value mismatches whenever the check required a different relation.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            ComparisonOutcome::Incomparable(inc) => inc.kind(),
            ComparisonOutcome::CountMismatch { .. } => FailureKind::CountMismatch,
            _ => FailureKind::ValueMismatch,
        }
    }
}
impl From<Incomparable> for ComparisonOutcome {
    fn from(inc: Incomparable) -> Self {
        ComparisonOutcome::Incomparable(inc)
    }
}
impl From<TypeMismatch> for ComparisonOutcome {
    fn from(tm: TypeMismatch) -> Self {
        ComparisonOutcome::Incomparable(Incomparable::TypeMismatch(tm))
    }
}
