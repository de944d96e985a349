//! Column metadata types.
//!
//! These types describe what the database catalog reports for a table and
//! are handed to the anonymization engine, which decides per column how to
//! replace its values.

use serde::{Deserialize, Serialize};

/// Declared column types the anonymizer distinguishes.
///
/// Everything outside this vocabulary collapses to [`ColumnType::Other`]:
/// such columns get no cast in conditions and an empty string as their
/// neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Date only.
    Date,
    /// Date and time.
    DateTime,
    /// Time only.
    Time,
    /// Small integer (16-bit).
    SmallInt,
    /// Integer (32-bit).
    Integer,
    /// Big integer (64-bit).
    BigInt,
    /// Floating point.
    Float,
    /// Fixed-point decimal.
    Decimal,
    /// Anything else (text, blobs, vendor types).
    Other,
}

impl ColumnType {
    /// Parses a declared type name, case-insensitively.
    ///
    /// Total: names outside the vocabulary map to [`ColumnType::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "smallint" => Self::SmallInt,
            "integer" => Self::Integer,
            "bigint" => Self::BigInt,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            _ => Self::Other,
        }
    }

    /// Returns whether this is one of the integer types.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::SmallInt | Self::Integer | Self::BigInt)
    }
}

/// Metadata for a single table column, as read from the database catalog.
///
/// Produced fresh on each introspection call; if the schema may have
/// changed, re-fetch rather than holding on to old values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Declared type, normalized onto the controlled vocabulary.
    pub column_type: ColumnType,
    /// Declared length, when the type carries one (e.g. VARCHAR(255)).
    pub length: Option<u32>,
    /// Whether the column is unsigned. Only meaningful for integer types.
    pub unsigned: bool,
}

impl Column {
    /// Creates column metadata with no length, signed.
    #[must_use]
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            length: None,
            unsigned: false,
        }
    }

    /// Sets the declared length.
    #[must_use]
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Marks the column unsigned.
    #[must_use]
    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary() {
        assert_eq!(ColumnType::parse("date"), ColumnType::Date);
        assert_eq!(ColumnType::parse("datetime"), ColumnType::DateTime);
        assert_eq!(ColumnType::parse("time"), ColumnType::Time);
        assert_eq!(ColumnType::parse("smallint"), ColumnType::SmallInt);
        assert_eq!(ColumnType::parse("integer"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("bigint"), ColumnType::BigInt);
        assert_eq!(ColumnType::parse("float"), ColumnType::Float);
        assert_eq!(ColumnType::parse("decimal"), ColumnType::Decimal);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ColumnType::parse("INTEGER"), ColumnType::Integer);
        assert_eq!(ColumnType::parse("DateTime"), ColumnType::DateTime);
        assert_eq!(ColumnType::parse("  Date  "), ColumnType::Date);
    }

    #[test]
    fn test_parse_unknown_is_other() {
        assert_eq!(ColumnType::parse("varchar"), ColumnType::Other);
        assert_eq!(ColumnType::parse("text"), ColumnType::Other);
        assert_eq!(ColumnType::parse(""), ColumnType::Other);
    }

    #[test]
    fn test_builder() {
        let column = Column::new("age", ColumnType::Integer).unsigned();
        assert_eq!(column.name, "age");
        assert!(column.unsigned);
        assert_eq!(column.length, None);

        let column = Column::new("email", ColumnType::Other).length(255);
        assert_eq!(column.length, Some(255));
        assert!(!column.unsigned);
    }
}
