//! Error types for schema introspection.

/// Errors that can occur while introspecting a table.
///
/// Every variant is a fatal precondition failure for the operation that
/// raised it; nothing at this layer retries or recovers.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The table is absent from the database.
    #[error("table '{0}' does not exist")]
    TableMissing(String),

    /// The table declares no primary key.
    #[error("table '{0}' has no primary key")]
    NoPrimaryKey(String),

    /// The table declares a composite primary key where a single column
    /// was required.
    #[error("table '{table}' has a composite primary key ({})", .columns.join(", "))]
    CompositePrimaryKey {
        /// The table with the composite key.
        table: String,
        /// All columns participating in the key, in key order.
        columns: Vec<String>,
    },

    /// The underlying database client rejected a query.
    #[error("query failed: {0}")]
    Query(#[from] QueryError),
}

/// An error surfaced unchanged from the underlying database client.
///
/// Adapter crates wrap their driver's native error with
/// [`QueryError::from_client`]; this layer adds nothing on top of it.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct QueryError(Box<dyn std::error::Error + Send + Sync>);

impl QueryError {
    /// Wraps an adapter's native error.
    pub fn from_client<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
