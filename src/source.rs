//! Immutable snapshots of a table or request, read from an SQLite connection.
//!
//! SQLite only knows five storage classes, so the declared column type picks
//! the native a stored value is materialized as. A stored value that does not
//! read under its declared type stays in its storage form.

// used to read snapshots
use rusqlite::Connection;
use rusqlite::types::{FromSql, ValueRef};
// used to materialize temporal columns
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use bigdecimal::BigDecimal;
use tracing::{debug, warn};
use uuid::Uuid;

use std::str::FromStr;
use std::sync::Arc;

use crate::classify::to_canonical_in;
use crate::error::{DbAssayError, Result};
use crate::value::{CanonicalValue, ColumnContext, RawValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCase {
    Sensitive,
    Insensitive,
}

impl LetterCase {
    pub fn matches(&self, a: &str, b: &str) -> bool {
        match self {
            LetterCase::Sensitive => a == b,
            LetterCase::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }
}

// ------------- Declared types -------------
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Declared {
    Boolean,
    Date,
    Time,
    DateTime,
    Uuid,
    Decimal,
    Storage,
}

impl Declared {
    fn of(declaration: Option<&str>) -> Declared {
        let declaration = match declaration {
            Some(d) => d.trim().to_ascii_uppercase(),
            None => return Declared::Storage,
        };
        if declaration.starts_with("BOOL") {
            Declared::Boolean
        } else if declaration.contains("DATETIME") || declaration.contains("TIMESTAMP") {
            Declared::DateTime
        } else if declaration == "DATE" {
            Declared::Date
        } else if declaration.starts_with("TIME") {
            Declared::Time
        } else if declaration == "UUID" {
            Declared::Uuid
        } else if declaration.starts_with("DECIMAL") || declaration.starts_with("NUMERIC") {
            Declared::Decimal
        } else {
            Declared::Storage
        }
    }

    fn convert(&self, value: ValueRef) -> Option<RawValue> {
        match (self, value) {
            (_, ValueRef::Null) => Some(RawValue::Null),
            (Declared::Storage, stored) => Some(storage(stored)),
            (Declared::Boolean, ValueRef::Integer(i)) => Some(RawValue::Bool(i != 0)),
            (Declared::Boolean, ValueRef::Text(t)) => match std::str::from_utf8(t).ok()? {
                t if t.eq_ignore_ascii_case("true") => Some(RawValue::Bool(true)),
                t if t.eq_ignore_ascii_case("false") => Some(RawValue::Bool(false)),
                _ => None,
            },
            (Declared::Date, stored) => NaiveDate::column_result(stored).ok().map(RawValue::Date),
            (Declared::Time, stored) => NaiveTime::column_result(stored).ok().map(RawValue::Time),
            (Declared::DateTime, stored) => {
                NaiveDateTime::column_result(stored).ok().map(RawValue::DateTime)
            }
            (Declared::Uuid, ValueRef::Text(t)) => std::str::from_utf8(t)
                .ok()
                .and_then(|t| Uuid::parse_str(t).ok())
                .map(RawValue::Uuid),
            (Declared::Uuid, ValueRef::Blob(b)) => Uuid::from_slice(b).ok().map(RawValue::Uuid),
            (Declared::Decimal, ValueRef::Text(t)) => std::str::from_utf8(t)
                .ok()
                .and_then(|t| BigDecimal::from_str(t).ok())
                .map(RawValue::Decimal),
            (Declared::Decimal, stored @ (ValueRef::Integer(_) | ValueRef::Real(_))) => Some(storage(stored)),
            _ => None,
        }
    }
}

fn storage(value: ValueRef) -> RawValue {
    match value {
        ValueRef::Null => RawValue::Null,
        ValueRef::Integer(i) => RawValue::Int(i),
        ValueRef::Real(f) => RawValue::Float64(f),
        ValueRef::Text(t) => RawValue::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => RawValue::Bytes(b.to_vec()),
    }
}

fn materialize(value: ValueRef, declaration: Option<&str>) -> RawValue {
    let declared = Declared::of(declaration);
    match declared.convert(value) {
        Some(raw) => raw,
        None => {
            warn!(
                declared = declaration.unwrap_or(""),
                "value does not read as its declared type, kept in storage form"
            );
            storage(value)
        }
    }
}

// ------------- Snapshot -------------
#[derive(Clone, Debug)]
pub struct Column {
    context: Arc<ColumnContext>,
    declared_type: Option<String>,
    values: Vec<CanonicalValue>,
}

impl Column {
    pub fn context(&self) -> &ColumnContext {
        &self.context
    }
    pub fn index(&self) -> usize {
        self.context.index
    }
    pub fn name(&self) -> Option<&str> {
        self.context.name.as_deref()
    }
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }
    pub fn values(&self) -> &[CanonicalValue] {
        &self.values
    }
    pub fn value(&self, row: usize) -> Result<&CanonicalValue> {
        self.values.get(row).ok_or(DbAssayError::IndexOutOfBounds {
            index: row,
            len: self.values.len(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Row {
    source: Arc<str>,
    index: usize,
    values: Vec<CanonicalValue>,
}

impl Row {
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn values(&self) -> &[CanonicalValue] {
        &self.values
    }
    pub fn value(&self, column: usize) -> Result<&CanonicalValue> {
        self.values.get(column).ok_or(DbAssayError::IndexOutOfBounds {
            index: column,
            len: self.values.len(),
        })
    }
}

#[derive(Clone, Debug)]
pub struct Snapshot {
    source: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Snapshot {
    pub fn read_table(conn: &Connection, table: &str) -> Result<Snapshot> {
        let mut info = conn.prepare("select type from pragma_table_info(?1) order by cid")?;
        let declared = info
            .query_map([table], |r| r.get::<_, String>(0))?
            .map(|d| d.map(|d| if d.trim().is_empty() { None } else { Some(d) }))
            .collect::<rusqlite::Result<Vec<Option<String>>>>()?;
        if declared.is_empty() {
            return Err(DbAssayError::Source(format!("no such table: {}", table)));
        }
        let sql = format!("select * from \"{}\"", table.replace('"', "\"\""));
        Self::read(conn, format!("{} table", table), &sql, &declared)
    }

    /// Reads the result of `sql`; `name` labels the request in messages.
    pub fn read_request(conn: &Connection, name: Option<&str>, sql: &str) -> Result<Snapshot> {
        let source = match name {
            Some(name) => format!("{} request", name),
            None => format!("'{}' request", sql),
        };
        Self::read(conn, source, sql, &[])
    }

    fn read(conn: &Connection, source: String, sql: &str, declared: &[Option<String>]) -> Result<Snapshot> {
        let mut statement = conn.prepare(sql)?;
        let names: Vec<String> = statement.column_names().iter().map(|n| n.to_string()).collect();
        if !declared.is_empty() && declared.len() != names.len() {
            return Err(DbAssayError::Invariant(format!(
                "{} declared types for {} columns of {}",
                declared.len(),
                names.len(),
                source
            )));
        }
        let contexts: Vec<Arc<ColumnContext>> = names
            .iter()
            .enumerate()
            .map(|(i, n)| Arc::new(ColumnContext::new(source.clone(), i, Some(n.clone()))))
            .collect();
        let row_source: Arc<str> = Arc::from(source.as_str());

        let mut rows = Vec::new();
        let mut result = statement.query([])?;
        while let Some(row) = result.next()? {
            let mut values = Vec::with_capacity(names.len());
            for (i, context) in contexts.iter().enumerate() {
                let declaration = declared.get(i).and_then(|d| d.as_deref());
                let raw = materialize(row.get_ref(i)?, declaration);
                values.push(to_canonical_in(raw, context.clone()));
            }
            rows.push(Row {
                source: row_source.clone(),
                index: rows.len(),
                values,
            });
        }

        let columns = contexts
            .into_iter()
            .enumerate()
            .map(|(i, context)| Column {
                context,
                declared_type: declared.get(i).cloned().flatten(),
                values: rows.iter().map(|r| r.values[i].clone()).collect(),
            })
            .collect::<Vec<Column>>();
        debug!(source = %source, columns = columns.len(), rows = rows.len(), "snapshot read");
        Ok(Snapshot {
            source,
            columns,
            rows,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns.get(index).ok_or(DbAssayError::IndexOutOfBounds {
            index,
            len: self.columns.len(),
        })
    }
    pub fn column_named(&self, name: &str, case: LetterCase) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name().is_some_and(|n| case.matches(n, name)))
            .ok_or_else(|| DbAssayError::ColumnNotFound(name.to_string()))
    }
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(DbAssayError::IndexOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }
}
