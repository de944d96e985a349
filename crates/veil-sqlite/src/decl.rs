//! Declared-type (decltype) parsing.
//!
//! SQLite keeps whatever type text a table was declared with. This module
//! maps that free-form text onto the anonymizer's controlled vocabulary:
//! base token, optional `(length)`, and an `UNSIGNED` marker.

use veil_schema::{Column, ColumnType};

/// Builds [`Column`] metadata from a declared type like `VARCHAR(255)` or
/// `INT UNSIGNED`.
#[must_use]
pub fn column(name: impl Into<String>, decltype: &str) -> Column {
    let (base, length, unsigned) = split(decltype);
    let mut column = Column::new(name, column_type(&base));
    if let Some(length) = length {
        column = column.length(length);
    }
    if unsigned {
        column = column.unsigned();
    }
    column
}

/// Splits a decltype into its base token, parenthesized length (first number
/// only, so `DECIMAL(10,2)` reports 10), and UNSIGNED flag.
fn split(decltype: &str) -> (String, Option<u32>, bool) {
    let upper = decltype.trim().to_ascii_uppercase();

    let length = upper
        .split_once('(')
        .map(|(_, rest)| rest)
        .and_then(|rest| rest.split([')', ',']).next())
        .and_then(|digits| digits.trim().parse::<u32>().ok());

    let mut words = upper
        .split(['(', ')', ',', ' '])
        .filter(|word| !word.is_empty());
    let base = words.next().unwrap_or("").to_string();
    let unsigned = words.any(|word| word == "UNSIGNED");

    (base, length, unsigned)
}

/// Maps a base token onto [`ColumnType`], folding common SQLite and MySQL
/// spellings into the vocabulary first.
fn column_type(base: &str) -> ColumnType {
    match base {
        "INT" | "TINYINT" | "MEDIUMINT" => ColumnType::Integer,
        "DOUBLE" | "REAL" => ColumnType::Float,
        "NUMERIC" => ColumnType::Decimal,
        "TIMESTAMP" => ColumnType::DateTime,
        other => ColumnType::parse(other),
    }
}
