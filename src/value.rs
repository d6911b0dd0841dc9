//! Raw values handed over by a data source, and their canonical counterparts.
//!
//! A [`RawValue`] is whatever a driver materialized for one cell. The
//! classifier turns it into a [`CanonicalValue`]: a closed [`Value`] payload
//! (from which the [`SemanticType`] is derived) plus an optional
//! [`ColumnContext`] back-reference that only ever feeds messages.

// the natives a driver hands over for temporal columns
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
// used for arbitrary precision numerics
use bigdecimal::BigDecimal;
use serde::Serialize;
use uuid::Uuid;

use std::fmt;
use std::sync::Arc;

use crate::datatype::{Number, SemanticType};
use crate::temporal::{DateTimeValue, DateValue, TimeValue};

// ------------- Raw values -------------
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Int128(i128),
    Float32(f32),
    Float64(f64),
    Decimal(BigDecimal),
    Char(char),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
    /// A native outside the supported universe (arrays, intervals, ...).
    Unsupported { type_name: String, repr: String },
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}
impl From<i32> for RawValue {
    fn from(i: i32) -> Self {
        RawValue::Int(i as i64)
    }
}
impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}
impl From<u64> for RawValue {
    fn from(u: u64) -> Self {
        RawValue::UInt(u)
    }
}
impl From<i128> for RawValue {
    fn from(i: i128) -> Self {
        RawValue::Int128(i)
    }
}
impl From<f32> for RawValue {
    fn from(f: f32) -> Self {
        RawValue::Float32(f)
    }
}
impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float64(f)
    }
}
impl From<BigDecimal> for RawValue {
    fn from(d: BigDecimal) -> Self {
        RawValue::Decimal(d)
    }
}
impl From<char> for RawValue {
    fn from(c: char) -> Self {
        RawValue::Char(c)
    }
}
impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}
impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}
impl From<Vec<u8>> for RawValue {
    fn from(b: Vec<u8>) -> Self {
        RawValue::Bytes(b)
    }
}
impl From<&[u8]> for RawValue {
    fn from(b: &[u8]) -> Self {
        RawValue::Bytes(b.to_vec())
    }
}
impl From<NaiveDate> for RawValue {
    fn from(d: NaiveDate) -> Self {
        RawValue::Date(d)
    }
}
impl From<NaiveTime> for RawValue {
    fn from(t: NaiveTime) -> Self {
        RawValue::Time(t)
    }
}
impl From<NaiveDateTime> for RawValue {
    fn from(dt: NaiveDateTime) -> Self {
        RawValue::DateTime(dt)
    }
}
impl From<Uuid> for RawValue {
    fn from(u: Uuid) -> Self {
        RawValue::Uuid(u)
    }
}
impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => RawValue::Null,
        }
    }
}

// ------------- Canonical payload -------------
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(Number),
    Text(String),
    Date(DateValue),
    Time(TimeValue),
    DateTime(DateTimeValue),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    /// Textual representation of an unsupported native.
    NotIdentified(String),
}

impl Value {
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Value::Null | Value::NotIdentified(_) => SemanticType::NotIdentified,
            Value::Boolean(_) => SemanticType::Boolean,
            Value::Number(_) => SemanticType::Number,
            Value::Text(_) => SemanticType::Text,
            Value::Date(_) => SemanticType::Date,
            Value::Time(_) => SemanticType::Time,
            Value::DateTime(_) => SemanticType::DateTime,
            Value::Bytes(_) => SemanticType::Bytes,
            Value::Uuid(_) => SemanticType::Uuid,
        }
    }
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// canonical textual forms, as used in structured messages
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::Bytes(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
            Value::Uuid(u) => write!(f, "{}", u.hyphenated()),
            Value::NotIdentified(repr) => write!(f, "{}", repr),
        }
    }
}

// ------------- Column context -------------
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnContext {
    /// Table or request the column belongs to.
    pub source: String,
    pub index: usize,
    pub name: Option<String>,
}

impl ColumnContext {
    pub fn new(source: impl Into<String>, index: usize, name: Option<String>) -> Self {
        Self {
            source: source.into(),
            index,
            name,
        }
    }
}

// ------------- Canonical value -------------
#[derive(Clone, Debug)]
pub struct CanonicalValue {
    value: Value,
    column: Option<Arc<ColumnContext>>,
}

impl CanonicalValue {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            column: None,
        }
    }
    pub fn with_column(value: Value, column: Arc<ColumnContext>) -> Self {
        Self {
            value,
            column: Some(column),
        }
    }
    pub fn null() -> Self {
        Self::new(Value::Null)
    }
    pub fn value(&self) -> &Value {
        &self.value
    }
    pub fn semantic_type(&self) -> SemanticType {
        self.value.semantic_type()
    }
    pub fn column(&self) -> Option<&ColumnContext> {
        self.column.as_deref()
    }
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}
impl From<Value> for CanonicalValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
