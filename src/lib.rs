//! dbassay – classification and comparison of values read from relational data sources.
//!
//! Assertions on database content boil down to one question: does the value a
//! driver handed over match what the caller expected? Answering it requires
//! three steps:
//! * classify the opaque value into a [`datatype::SemanticType`],
//! * normalize both the value and the expectation into canonical forms,
//! * compare the canonical forms under fixed coercion rules.
//!
//! A failed comparison is never a fault. It is a value ([`outcome::ComparisonOutcome`])
//! that the assertion layer wraps into a [`report::Failure`], which the
//! reporter turns into a deterministic [`report::StructuredMessage`].
//!
//! ## Modules
//! * [`value`] – Raw driver values and their canonical counterparts.
//! * [`temporal`] – Date, time and date-time value structs.
//! * [`datatype`] – Semantic types, type sets and the canonical number.
//! * [`classify`] – Classification of raw values and type membership checks.
//! * [`literal`] – Caller expectations and their interpretation against a target type.
//! * [`compare`] – Equality, order, sequence and multiset comparisons.
//! * [`outcome`] – Comparison outcomes and the failure taxonomy.
//! * [`report`] – Failures, contexts and structured messages.
//! * [`assertions`] – Checks on values, columns and rows.
//! * [`source`] – Snapshots of SQLite tables and requests.
//! * [`config`], [`logging`], [`error`] – Settings, subscriber setup and crate errors.
//!
//! ## Quick Start
//! ```
//! use dbassay::assertions::is_equal_to;
//! use dbassay::classify::to_canonical;
//! use dbassay::report::{describe, Context};
//! use dbassay::value::RawValue;
//!
//! let actual = to_canonical(RawValue::Int(1));
//! assert!(is_equal_to(&actual, "1").is_ok());
//! let failure = is_equal_to(&actual, "2").unwrap_err();
//! let message = describe(&failure, &Context::labelled("count"));
//! assert_eq!(message.description, "count");
//! ```

pub mod assertions;
pub mod classify;
pub mod compare;
pub mod config;
pub mod datatype;
pub mod error;
pub mod literal;
pub mod logging;
pub mod outcome;
pub mod report;
pub mod source;
pub mod temporal;
pub mod value;

pub use classify::{Leniency, classify, to_canonical, to_canonical_in};
pub use compare::{compare_equality, compare_multiset, compare_order, compare_sequence};
pub use datatype::{Number, SemanticType, TypeSet};
pub use error::{DbAssayError, Result};
pub use literal::{Literal, parse_literal};
pub use outcome::{ComparisonOutcome, FailureKind, Incomparable};
pub use report::{Context, Failure, StructuredMessage, describe};
pub use value::{CanonicalValue, RawValue, Value};
