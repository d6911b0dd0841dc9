// used to log classification of natives outside the value universe
use tracing::{debug, trace};

use std::sync::Arc;

use crate::datatype::{Number, SemanticType, TypeSet};
use crate::outcome::TypeMismatch;
use crate::temporal::{DateTimeValue, DateValue, TimeValue};
use crate::value::{CanonicalValue, ColumnContext, RawValue, Value};

// ------------- Classification -------------
pub fn classify(raw: &RawValue) -> SemanticType {
    match raw {
        RawValue::Null | RawValue::Unsupported { .. } => SemanticType::NotIdentified,
        RawValue::Bool(_) => SemanticType::Boolean,
        RawValue::Int(_)
        | RawValue::UInt(_)
        | RawValue::Int128(_)
        | RawValue::Float32(_)
        | RawValue::Float64(_)
        | RawValue::Decimal(_) => SemanticType::Number,
        RawValue::Char(_) | RawValue::Text(_) => SemanticType::Text,
        RawValue::Bytes(_) => SemanticType::Bytes,
        RawValue::Date(_) => SemanticType::Date,
        RawValue::Time(_) => SemanticType::Time,
        RawValue::DateTime(_) => SemanticType::DateTime,
        RawValue::Uuid(_) => SemanticType::Uuid,
    }
}

fn canonicalize(raw: RawValue) -> Value {
    match raw {
        RawValue::Null => Value::Null,
        RawValue::Bool(b) => Value::Boolean(b),
        RawValue::Int(i) => Value::Number(Number::from(i)),
        RawValue::UInt(u) => Value::Number(Number::from(u)),
        RawValue::Int128(i) => Value::Number(Number::from(i)),
        RawValue::Float32(f) => Value::Number(Number::from_f32(f)),
        RawValue::Float64(f) => Value::Number(Number::from_f64(f)),
        RawValue::Decimal(d) => Value::Number(Number::Finite(d)),
        RawValue::Char(c) => Value::Text(c.to_string()),
        RawValue::Text(s) => Value::Text(s),
        RawValue::Bytes(b) => Value::Bytes(b),
        RawValue::Date(d) => Value::Date(DateValue::from(d)),
        RawValue::Time(t) => Value::Time(TimeValue::from(t)),
        RawValue::DateTime(dt) => Value::DateTime(DateTimeValue::from(dt)),
        RawValue::Uuid(u) => Value::Uuid(u),
        RawValue::Unsupported { type_name, repr } => {
            debug!(type_name = %type_name, "unsupported native kept as NOT_IDENTIFIED");
            Value::NotIdentified(repr)
        }
    }
}

pub fn to_canonical(raw: RawValue) -> CanonicalValue {
    CanonicalValue::new(canonicalize(raw))
}

pub fn to_canonical_in(raw: RawValue, column: Arc<ColumnContext>) -> CanonicalValue {
    CanonicalValue::with_column(canonicalize(raw), column)
}

// ------------- Type membership -------------
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Leniency {
    Strict,
    /// Accepts any of these temporal types where one of them is required.
    LenientAmong(TypeSet),
}

impl Leniency {
    /// Lenient among DATE and DATE_TIME.
    pub fn lenient() -> Self {
        Self::among(&[SemanticType::Date, SemanticType::DateTime])
    }
    /// Non-temporal types are dropped from the set.
    pub fn among(types: &[SemanticType]) -> Self {
        let temporal: Vec<SemanticType> =
            types.iter().copied().filter(|t| t.is_temporal()).collect();
        Self::LenientAmong(TypeSet::of(&temporal))
    }
    /// The types accepted where `required` is asked for.
    pub fn accepted(&self, required: SemanticType) -> TypeSet {
        match self {
            Self::LenientAmong(set) if set.contains(required) => set.clone(),
            _ => TypeSet::from(required),
        }
    }
}
impl Default for Leniency {
    fn default() -> Self {
        Self::Strict
    }
}

pub fn check_type(
    value: &CanonicalValue,
    required: SemanticType,
    leniency: &Leniency,
) -> Result<(), TypeMismatch> {
    check_any_type(value, &leniency.accepted(required))
}

pub fn check_any_type(value: &CanonicalValue, accepted: &TypeSet) -> Result<(), TypeMismatch> {
    let actual = value.semantic_type();
    trace!(actual = %actual, accepted = %accepted, "checking type membership");
    if value.is_null() || accepted.contains(actual) {
        Ok(())
    } else {
        Err(TypeMismatch::of_value(value.value(), accepted.clone()))
    }
}
