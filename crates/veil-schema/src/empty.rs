//! Neutral per-type default literals.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::debug::ParamValue;

/// A neutral default substituted when no randomized replacement is wanted:
/// numeric zero for numeric columns, epoch spellings for temporal columns,
/// the empty string otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EmptyValue {
    /// Numeric zero.
    Integer(i64),
    /// Text literal.
    Text(Cow<'static, str>),
}

impl EmptyValue {
    /// Renders the literal as SQL: numerics bare, text single-quoted with
    /// embedded quotes doubled.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<EmptyValue> for ParamValue {
    fn from(value: EmptyValue) -> Self {
        match value {
            EmptyValue::Integer(n) => Self::Integer(n),
            EmptyValue::Text(s) => Self::Text(s.into_owned()),
        }
    }
}

/// Returns the neutral default for a declared type.
///
/// Pure function of the type; no I/O, no failure mode.
#[must_use]
pub fn empty_value(column_type: ColumnType) -> EmptyValue {
    match column_type {
        ColumnType::Date => EmptyValue::Text(Cow::Borrowed("1970-01-01")),
        ColumnType::DateTime => EmptyValue::Text(Cow::Borrowed("1970-01-01 00:00:00")),
        ColumnType::Time => EmptyValue::Text(Cow::Borrowed("00:00:00")),
        ColumnType::SmallInt
        | ColumnType::Integer
        | ColumnType::BigInt
        | ColumnType::Float
        | ColumnType::Decimal => EmptyValue::Integer(0),
        ColumnType::Other => EmptyValue::Text(Cow::Borrowed("")),
    }
}
