//! Debug rendering of parameterized statements.
//!
//! [`BoundQuery::debug_sql`] substitutes parameters textually, without
//! proper escaping. The output is for logs only and must never be executed;
//! nothing in this crate runs it.

use std::collections::BTreeMap;

/// A value bound to a named placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// SQL NULL.
    Null,
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// Text literal.
    Text(String),
}

impl ParamValue {
    fn render(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A parameterized SQL statement with named `:param` placeholders and their
/// bound values.
///
/// This is a value object the anonymization engine assembles for logging;
/// execution goes through the driver's own binding, never through this
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundQuery {
    sql: String,
    params: BTreeMap<String, ParamValue>,
}

impl BoundQuery {
    /// Creates a query with no bindings yet.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: BTreeMap::new(),
        }
    }

    /// Binds `value` to the `:name` placeholder.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// The parameterized SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound parameters, name to value.
    #[must_use]
    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Renders an approximate fully-literal SQL string for diagnostics.
    ///
    /// Substitution is textual: longer names go first so `:id` never
    /// clobbers `:id_hash`, quotes are doubled but nothing else is escaped,
    /// and unbound placeholders stay as written. Display the result, never
    /// execute it.
    #[must_use]
    pub fn debug_sql(&self) -> String {
        let mut names: Vec<&String> = self.params.keys().collect();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));

        let mut sql = self.sql.clone();
        for name in names {
            sql = sql.replace(&format!(":{}", name), &self.params[name].render());
        }
        sql
    }
}
