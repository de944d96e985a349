//! Database client abstraction.
//!
//! The core crate defines only the trait; adapter crates (veil-sqlite,
//! etc.) implement [`SchemaClient`] against a concrete driver. The client
//! instance is owned by the caller and injected once, the way a connection
//! pool handle is passed around.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::QueryError;

/// The SQL dialect spoken by the active connection.
///
/// Resolved once by the adapter at construction time and reported as plain
/// data. Condition building keys off this enum; driver names never reach
/// the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// SQLite.
    Sqlite,
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    Postgres,
}

/// Capabilities required from the underlying database connection.
///
/// Implementations must reflect current schema state on every call: no
/// caching, no retries. Thread safety is the implementation's concern;
/// pool-backed adapters are naturally shareable.
#[async_trait]
pub trait SchemaClient: Send + Sync {
    /// Counts the rows of `table`.
    async fn count_rows(&self, table: &str) -> Result<u64, QueryError>;

    /// Reports whether `table` exists.
    async fn table_exists(&self, table: &str) -> Result<bool, QueryError>;

    /// Returns the primary key columns of `table`, in key order.
    ///
    /// Empty when the table declares no primary key.
    async fn primary_key_columns(&self, table: &str) -> Result<Vec<String>, QueryError>;

    /// Returns metadata for every column of `table`.
    async fn columns(&self, table: &str) -> Result<Vec<Column>, QueryError>;

    /// The dialect of the active connection.
    fn dialect(&self) -> DialectKind;
}
