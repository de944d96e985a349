//! Dialect-aware condition fragments.
//!
//! The anonymization engine embeds these fragments in the UPDATE and SELECT
//! statements it builds itself. Each fragment carries a single `:field`
//! placeholder that the caller binds to the replacement value; the CASE
//! keeps NULL cells NULL instead of filling them in.

use crate::client::DialectKind;
use crate::column::{Column, ColumnType};

/// Returns the CAST target for a column under the given dialect, or `None`
/// when the declared type takes no cast.
#[must_use]
pub fn cast_target(column: &Column, dialect: DialectKind) -> Option<&'static str> {
    match column.column_type {
        ColumnType::Date | ColumnType::DateTime => Some("DATE"),
        ColumnType::Time => Some("TIME"),
        ColumnType::SmallInt | ColumnType::Integer | ColumnType::BigInt => {
            Some(integer_cast(dialect, column.unsigned))
        }
        ColumnType::Float | ColumnType::Decimal => Some("DECIMAL"),
        ColumnType::Other => None,
    }
}

/// MySQL casts integers through SIGNED/UNSIGNED; every other dialect uses
/// the ANSI INTEGER spelling.
fn integer_cast(dialect: DialectKind, unsigned: bool) -> &'static str {
    match dialect {
        DialectKind::MySql => {
            if unsigned {
                "UNSIGNED"
            } else {
                "SIGNED"
            }
        }
        DialectKind::Sqlite | DialectKind::Postgres => "INTEGER",
    }
}

/// Builds the NULL-preserving conditional expression for `field`, wrapped
/// in a CAST when the declared type calls for one.
#[must_use]
pub fn build(field: &str, column: &Column, dialect: DialectKind) -> String {
    let case = format!("(CASE {} WHEN NULL THEN NULL ELSE :{} END)", field, field);
    match cast_target(column, dialect) {
        Some(target) => format!("CAST({} AS {})", case, target),
        None => case,
    }
}
