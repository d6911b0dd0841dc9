//! Expectations supplied by the caller, and their interpretation against the
//! type of the actual value.
//!
//! Typed literals are taken verbatim. Text literals are read according to the
//! target type only, never by guessing from their shape, so `"2014-05-24"`
//! stays text when compared with a TEXT column.

// used for the textual forms of dates, times and identifiers
use regex::Regex;
// used to compile the patterns once
use lazy_static::lazy_static;
use bigdecimal::BigDecimal;
use tracing::trace;
use uuid::Uuid;

use std::fmt;

use crate::datatype::{Number, SemanticType, TypeSet};
use crate::outcome::{Incomparable, ParseFailure, TypeMismatch};
use crate::temporal::{DateTimeValue, DateValue, TimeValue};
use crate::value::{CanonicalValue, Value};

lazy_static! {
    // years outside 0000..=9999 carry a sign and at least four digits
    static ref DATE: Regex =
        Regex::new(r"^([+-][0-9]{4,}|[0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap();
    static ref TIME: Regex =
        Regex::new(r"^([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?$").unwrap();
    static ref DATE_TIME: Regex = Regex::new(
        r"^([+-][0-9]{4,}|[0-9]{4})-([0-9]{2})-([0-9]{2})(?:T([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:\.([0-9]{1,9}))?)?)?$"
    )
    .unwrap();
    static ref UUID: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Null,
    Text(String),
    Boolean(bool),
    Number(Number),
    Bytes(Vec<u8>),
    Date(DateValue),
    Time(TimeValue),
    DateTime(DateTimeValue),
    Uuid(Uuid),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "{}", s),
            other => match other.verbatim() {
                Some(value) => write!(f, "{}", value),
                None => Ok(()),
            },
        }
    }
}

impl Literal {
    // typed literals map one to one on canonical payloads
    pub(crate) fn verbatim(&self) -> Option<Value> {
        match self {
            Literal::Null => Some(Value::Null),
            Literal::Text(_) => None,
            Literal::Boolean(b) => Some(Value::Boolean(*b)),
            Literal::Number(n) => Some(Value::Number(n.clone())),
            Literal::Bytes(b) => Some(Value::Bytes(b.clone())),
            Literal::Date(d) => Some(Value::Date(*d)),
            Literal::Time(t) => Some(Value::Time(*t)),
            Literal::DateTime(dt) => Some(Value::DateTime(*dt)),
            Literal::Uuid(u) => Some(Value::Uuid(*u)),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}
impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}
impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}
impl From<i32> for Literal {
    fn from(i: i32) -> Self {
        Literal::Number(Number::from(i))
    }
}
impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Literal::Number(Number::from(i))
    }
}
impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Literal::Number(Number::from_f64(f))
    }
}
impl From<BigDecimal> for Literal {
    fn from(d: BigDecimal) -> Self {
        Literal::Number(Number::Finite(d))
    }
}
impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        Literal::Number(n)
    }
}
impl From<Vec<u8>> for Literal {
    fn from(b: Vec<u8>) -> Self {
        Literal::Bytes(b)
    }
}
impl From<&[u8]> for Literal {
    fn from(b: &[u8]) -> Self {
        Literal::Bytes(b.to_vec())
    }
}
impl From<DateValue> for Literal {
    fn from(d: DateValue) -> Self {
        Literal::Date(d)
    }
}
impl From<TimeValue> for Literal {
    fn from(t: TimeValue) -> Self {
        Literal::Time(t)
    }
}
impl From<DateTimeValue> for Literal {
    fn from(dt: DateTimeValue) -> Self {
        Literal::DateTime(dt)
    }
}
impl From<Uuid> for Literal {
    fn from(u: Uuid) -> Self {
        Literal::Uuid(u)
    }
}
impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => Literal::Null,
        }
    }
}

// ------------- Parsing -------------
pub fn parse_literal(literal: &Literal, target: SemanticType) -> Result<CanonicalValue, Incomparable> {
    let text = match literal {
        Literal::Text(text) => text,
        typed => {
            return typed
                .verbatim()
                .map(CanonicalValue::new)
                .ok_or_else(|| not_comparable(target));
        }
    };
    trace!(literal = %text, target = %target, "parsing text literal");
    let parsed = match target {
        SemanticType::Text | SemanticType::NotIdentified => Value::Text(text.clone()),
        SemanticType::Number => Number::parse(text)
            .map(Value::Number)
            .ok_or_else(|| parse_failure(text, target, "not a decimal number"))?,
        SemanticType::Boolean => Value::Boolean(parse_boolean(text).ok_or_else(|| not_comparable(target))?),
        SemanticType::Date => Value::Date(parse_date(text).map_err(|d| parse_failure(text, target, &d))?),
        SemanticType::Time => Value::Time(parse_time(text).map_err(|d| parse_failure(text, target, &d))?),
        SemanticType::DateTime => {
            Value::DateTime(parse_date_time(text).map_err(|d| parse_failure(text, target, &d))?)
        }
        SemanticType::Uuid => Value::Uuid(parse_uuid(text).map_err(|d| parse_failure(text, target, &d))?),
        SemanticType::Bytes => return Err(not_comparable(target)),
    };
    Ok(CanonicalValue::new(parsed))
}

/// Parses against the type of `actual`, recording the actual value on a type
/// mismatch.
pub fn parse_literal_for(literal: &Literal, actual: &CanonicalValue) -> Result<CanonicalValue, Incomparable> {
    parse_literal(literal, actual.semantic_type()).map_err(|inc| inc.with_value(actual.value()))
}

// a text expectation can only stand for one of the textual types
fn not_comparable(target: SemanticType) -> Incomparable {
    Incomparable::TypeMismatch(TypeMismatch::new(target, TypeSet::text_comparable()))
}

fn parse_failure(literal: &str, target: SemanticType, detail: &str) -> Incomparable {
    Incomparable::ParseFailure(ParseFailure {
        literal: literal.to_string(),
        target,
        detail: detail.to_string(),
    })
}

fn parse_boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text == "1" {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text == "0" {
        Some(false)
    } else {
        None
    }
}

// ASCII digits are guaranteed by the patterns, so only absence defaults to zero
fn digits(caps: &regex::Captures, i: usize) -> u32 {
    caps.get(i).and_then(|m| m.as_str().parse().ok()).unwrap_or(0)
}

fn year(caps: &regex::Captures, i: usize) -> Result<i32, String> {
    let text = caps.get(i).map_or("", |m| m.as_str());
    text.parse().map_err(|_| format!("year {} is out of range", text))
}

fn nanos(caps: &regex::Captures, i: usize) -> u32 {
    caps.get(i)
        .and_then(|m| format!("{:0<9}", m.as_str()).parse().ok())
        .unwrap_or(0)
}

pub fn parse_time(text: &str) -> Result<TimeValue, String> {
    let caps = TIME
        .captures(text)
        .ok_or_else(|| format!("expected hh:mm[:ss[.n]] but got <{}>", text))?;
    TimeValue::new(digits(&caps, 1), digits(&caps, 2), digits(&caps, 3), nanos(&caps, 4))
        .map_err(|e| e.to_string())
}

pub fn parse_date_time(text: &str) -> Result<DateTimeValue, String> {
    let caps = DATE_TIME
        .captures(text)
        .ok_or_else(|| format!("expected YYYY-MM-DD[Thh:mm[:ss[.n]]] but got <{}>", text))?;
    DateTimeValue::of(
        year(&caps, 1)?,
        digits(&caps, 2),
        digits(&caps, 3),
        digits(&caps, 4),
        digits(&caps, 5),
        digits(&caps, 6),
        nanos(&caps, 7),
    )
    .map_err(|e| e.to_string())
}

pub fn parse_date(text: &str) -> Result<DateValue, String> {
    if let Some(caps) = DATE.captures(text) {
        return DateValue::new(year(&caps, 1)?, digits(&caps, 2), digits(&caps, 3))
            .map_err(|e| e.to_string());
    }
    let dt = parse_date_time(text)?;
    if dt.is_midnight() {
        Ok(dt.truncate())
    } else {
        Err(format!("<{}> has a non-zero time and is not a date", text))
    }
}

pub fn parse_uuid(text: &str) -> Result<Uuid, String> {
    if !UUID.is_match(text) {
        return Err(format!("expected a hyphenated identifier but got <{}>", text));
    }
    Uuid::parse_str(text).map_err(|e| e.to_string())
}
