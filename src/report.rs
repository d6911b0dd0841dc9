//! Structured descriptions of failed checks.
//!
//! [`describe`] is pure: it turns a [`Failure`] and the [`Context`] it was
//! observed in into a [`StructuredMessage`] carrying every datum a human
//! readable message needs. Formatting that message is left to the caller.

// used to hand messages to tooling as JSON
use serde::Serialize;

use crate::datatype::{SemanticType, TypeSet};
use crate::error::{DbAssayError, Result};
use crate::outcome::{ComparisonOutcome, FailureKind, Incomparable};
use crate::value::{CanonicalValue, ColumnContext, Value};

// ------------- Failures -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Requirement {
    EqualTo,
    NotEqualTo,
    Before,
    BeforeOrEqualTo,
    After,
    AfterOrEqualTo,
    OfType,
    Null,
    NotNull,
    True,
    False,
    Zero,
    Values,
    ContainsValues,
    NumberOfValues,
    ColumnName,
    OnlyNullValues,
    OnlyNotNullValues,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Subject {
    One(Value),
    Many(Vec<Value>),
    Count(usize),
    Name(Option<String>),
}

impl Subject {
    pub fn of(value: &CanonicalValue) -> Self {
        Subject::One(value.value().clone())
    }
    pub fn of_all(values: &[CanonicalValue]) -> Self {
        Subject::Many(values.iter().map(|v| v.value().clone()).collect())
    }
    fn semantic_type(&self) -> Option<SemanticType> {
        match self {
            Subject::One(v) => Some(v.semantic_type()),
            _ => None,
        }
    }
    fn render(&self) -> Rendered {
        match self {
            Subject::One(v) => Rendered::One(v.to_string()),
            Subject::Many(vs) => Rendered::Many(vs.iter().map(|v| v.to_string()).collect()),
            Subject::Count(n) => Rendered::Count(*n),
            Subject::Name(name) => Rendered::One(name.clone().unwrap_or_else(|| "null".to_string())),
        }
    }
}

/// A check that did not hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub requirement: Requirement,
    pub outcome: ComparisonOutcome,
    pub actual: Subject,
    pub expected: Option<Subject>,
    /// Position of the offending value inside a column or row.
    pub index: Option<usize>,
}

impl Failure {
    pub fn new(requirement: Requirement, outcome: ComparisonOutcome, actual: Subject) -> Self {
        Self {
            requirement,
            outcome,
            actual,
            expected: None,
            index: None,
        }
    }
    pub fn expecting(mut self, expected: Subject) -> Self {
        self.expected = Some(expected);
        self
    }
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
    pub fn kind(&self) -> FailureKind {
        self.outcome.failure_kind()
    }
}

// ------------- Context -------------
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub label: Option<String>,
    pub source: Option<String>,
    pub column_index: Option<usize>,
    pub column_name: Option<String>,
    pub row_index: Option<usize>,
}

impl Context {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
    pub fn of_column(column: &ColumnContext) -> Self {
        Self {
            source: Some(column.source.clone()),
            column_index: Some(column.index),
            column_name: column.name.clone(),
            ..Self::default()
        }
    }
    /// Context of a value read at `row` of its column.
    pub fn of_value(value: &CanonicalValue, row: usize) -> Self {
        let mut context = value.column().map(Self::of_column).unwrap_or_default();
        context.row_index = Some(row);
        context
    }
    pub fn of_row(source: impl Into<String>, row: usize) -> Self {
        Self {
            source: Some(source.into()),
            row_index: Some(row),
            ..Self::default()
        }
    }
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        let column = self.column_index.map(|index| match &self.column_name {
            Some(name) => format!("Column at index {} (column name : {})", index, name),
            None => format!("Column at index {}", index),
        });
        let mut parts = Vec::new();
        match (self.row_index, column) {
            (Some(row), Some(column)) => {
                parts.push(format!("Value at index {}", row));
                parts.push(column);
            }
            (Some(row), None) => parts.push(format!("Row at index {}", row)),
            (None, Some(column)) => parts.push(column),
            (None, None) => {}
        }
        if let Some(source) = &self.source {
            parts.push(source.clone());
        }
        parts.join(" of ")
    }
}

// ------------- Messages -------------
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    One(String),
    Many(Vec<String>),
    Count(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StructuredMessage {
    pub description: String,
    pub kind: FailureKind,
    pub requirement: Requirement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<Rendered>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_type: Option<SemanticType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Rendered>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_types: Option<TypeSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<SemanticType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl StructuredMessage {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DbAssayError::Invariant(e.to_string()))
    }
}

pub fn describe(failure: &Failure, context: &Context) -> StructuredMessage {
    let mut message = StructuredMessage {
        description: context.description(),
        kind: failure.kind(),
        requirement: failure.requirement,
        actual: Some(failure.actual.render()),
        actual_type: failure.actual.semantic_type(),
        expected: failure.expected.as_ref().map(Subject::render),
        expected_types: None,
        index: failure.index,
        literal: None,
        target_type: None,
        detail: None,
    };
    match &failure.outcome {
        ComparisonOutcome::Incomparable(Incomparable::TypeMismatch(tm)) => {
            if let Some(value) = &tm.value {
                message.actual = Some(Rendered::One(value.to_string()));
            }
            message.actual_type = Some(tm.actual);
            message.expected_types = Some(tm.expected.clone());
        }
        ComparisonOutcome::Incomparable(Incomparable::ParseFailure(pf)) => {
            message.literal = Some(pf.literal.clone());
            message.target_type = Some(pf.target);
            message.expected_types = Some(TypeSet::from(pf.target));
            message.detail = Some(pf.detail.clone());
        }
        ComparisonOutcome::CountMismatch { actual, expected } => {
            message.actual = Some(Rendered::Count(*actual));
            message.actual_type = None;
            message.expected = Some(Rendered::Count(*expected));
        }
        ComparisonOutcome::ValueMismatch {
            index,
            actual,
            expected,
        } => {
            message.index = Some(*index);
            message.actual = actual.as_ref().map(|v| Rendered::One(v.to_string()));
            message.actual_type = actual.as_ref().map(Value::semantic_type);
            message.expected = Some(Rendered::One(expected.to_string()));
        }
        ComparisonOutcome::Equal
        | ComparisonOutcome::NotEqual
        | ComparisonOutcome::Before
        | ComparisonOutcome::After => {}
    }
    message
}
