// used for the canonical form of every number
use bigdecimal::BigDecimal;
// used to report types in structured messages
use serde::Serialize;

// used when parsing a string to a BigDecimal
use std::str::FromStr;
// used to print out readable forms of a data type
use std::fmt;
// used to order numbers across finite and non-finite values
use std::cmp::Ordering;

// ------------- Semantic Types --------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticType {
    Boolean,
    Number,
    Text,
    Date,
    Time,
    DateTime,
    Bytes,
    Uuid,
    NotIdentified,
}

impl SemanticType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Number => "NUMBER",
            Self::Text => "TEXT",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => "DATE_TIME",
            Self::Bytes => "BYTES",
            Self::Uuid => "UUID",
            Self::NotIdentified => "NOT_IDENTIFIED",
        }
    }
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }
    /// Types carrying a total order usable by before/after checks.
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Number | Self::Date | Self::Time | Self::DateTime)
    }
    /// The actual types an expectation of this type can be compared with.
    pub fn comparable_with(self) -> TypeSet {
        match self {
            Self::Date | Self::DateTime => TypeSet::of(&[Self::Date, Self::DateTime]),
            other => TypeSet::of(&[other]),
        }
    }
}
impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// An ordered, duplicate-free list of types, rendered like [DATE, DATE_TIME]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TypeSet(Vec<SemanticType>);

impl TypeSet {
    pub fn of(types: &[SemanticType]) -> Self {
        let mut kept = Vec::with_capacity(types.len());
        for t in types {
            if !kept.contains(t) {
                kept.push(*t);
            }
        }
        Self(kept)
    }
    /// Actual types a plain string expectation can be compared with.
    pub fn text_comparable() -> Self {
        Self::of(&[
            SemanticType::Text,
            SemanticType::Number,
            SemanticType::Date,
            SemanticType::Time,
            SemanticType::DateTime,
        ])
    }
    pub fn contains(&self, t: SemanticType) -> bool {
        self.0.contains(&t)
    }
    pub fn types(&self) -> &[SemanticType] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<SemanticType> for TypeSet {
    fn from(t: SemanticType) -> Self {
        Self(vec![t])
    }
}
impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // a single type prints bare, as in <NUMBER>
        if let [single] = self.0.as_slice() {
            return write!(f, "{}", single);
        }
        let labels: Vec<&str> = self.0.iter().map(|t| t.label()).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

// ------------- Numbers --------------
/*
Every numeric native is widened to a single canonical form. Finite values
become arbitrary precision decimals, so integers and decimals compare exactly
and 10 equals 10.00. Floating point values go through their shortest
round-trip decimal rendering first, which makes a REAL 5.6 equal to "5.6".
The non-finite floats keep their own markers, ordered after (or before, for
negative infinity) every finite value, with NaN last and equal to itself.
*/
#[derive(Clone, Debug)]
pub enum Number {
    Finite(BigDecimal),
    NegativeInfinity,
    PositiveInfinity,
    NaN,
}

impl Number {
    pub fn from_f64(f: f64) -> Number {
        if f.is_nan() {
            Number::NaN
        } else if f.is_infinite() {
            if f > 0. {
                Number::PositiveInfinity
            } else {
                Number::NegativeInfinity
            }
        } else {
            // finite floats always render as plain decimal digits
            BigDecimal::from_str(&f.to_string())
                .map(Number::Finite)
                .unwrap_or(Number::NaN)
        }
    }
    pub fn from_f32(f: f32) -> Number {
        if f.is_finite() {
            BigDecimal::from_str(&f.to_string())
                .map(Number::Finite)
                .unwrap_or(Number::NaN)
        } else {
            Self::from_f64(f as f64)
        }
    }
    /// Parses decimal text, plus the markers `NaN`, `Infinity` and `-Infinity`.
    pub fn parse(s: &str) -> Option<Number> {
        match s {
            "NaN" => Some(Number::NaN),
            "Infinity" | "+Infinity" => Some(Number::PositiveInfinity),
            "-Infinity" => Some(Number::NegativeInfinity),
            _ => BigDecimal::from_str(s).ok().map(Number::Finite),
        }
    }
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Finite(d) => *d == BigDecimal::from(0i64),
            _ => false,
        }
    }
    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Number::Finite(d) => Some(d),
            _ => None,
        }
    }
    fn rank(&self) -> u8 {
        match self {
            Number::NegativeInfinity => 0,
            Number::Finite(_) => 1,
            Number::PositiveInfinity => 2,
            Number::NaN => 3,
        }
    }
}
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Number {}
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Finite(a), Number::Finite(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Finite(d) => write!(f, "{}", d),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::PositiveInfinity => write!(f, "Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}
impl From<BigDecimal> for Number {
    fn from(d: BigDecimal) -> Self {
        Number::Finite(d)
    }
}
impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Finite(BigDecimal::from(i))
    }
}
impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Finite(BigDecimal::from(i as i64))
    }
}
impl From<u64> for Number {
    fn from(u: u64) -> Self {
        Number::Finite(BigDecimal::from(u))
    }
}
impl From<i128> for Number {
    fn from(i: i128) -> Self {
        Number::Finite(BigDecimal::from(i))
    }
}
impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::from_f64(f)
    }
}
impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::from_f32(f)
    }
}
