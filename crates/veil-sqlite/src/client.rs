//! sqlx-backed [`SchemaClient`] implementation.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

use veil_schema::{Column, DialectKind, QueryError, SchemaClient};

use crate::decl;

/// Schema client over a sqlx SQLite pool.
///
/// The pool is a cheap handle owned by the caller; the client holds no
/// other state and can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct SqliteSchemaClient {
    pool: SqlitePool,
}

impl SqliteSchemaClient {
    /// Creates a client over the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reads `pragma_table_info` rows for `table`: name, declared type, and
    /// 1-based primary key position (0 when not part of the key).
    ///
    /// Empty for tables that do not exist; the pragma does not error.
    async fn table_info(&self, table: &str) -> Result<Vec<(String, String, i64)>, QueryError> {
        debug!(table = %table, "reading table_info");
        sqlx::query_as("SELECT name, type, pk FROM pragma_table_info(?) ORDER BY cid")
            .bind(table)
            .fetch_all(&self.pool)
            .await
            .map_err(QueryError::from_client)
    }
}

/// Quotes an identifier SQLite-style: double quotes, embedded quotes
/// doubled.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[async_trait]
impl SchemaClient for SqliteSchemaClient {
    async fn count_rows(&self, table: &str) -> Result<u64, QueryError> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table));
        debug!(sql = %sql, "counting rows");
        let (count,): (i64,) = sqlx::query_as(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(QueryError::from_client)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn table_exists(&self, table: &str) -> Result<bool, QueryError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
                .bind(table)
                .fetch_optional(&self.pool)
                .await
                .map_err(QueryError::from_client)?;
        Ok(row.is_some())
    }

    async fn primary_key_columns(&self, table: &str) -> Result<Vec<String>, QueryError> {
        let mut key: Vec<(i64, String)> = self
            .table_info(table)
            .await?
            .into_iter()
            .filter(|(_, _, pk)| *pk > 0)
            .map(|(name, _, pk)| (pk, name))
            .collect();
        key.sort_by_key(|(position, _)| *position);
        Ok(key.into_iter().map(|(_, name)| name).collect())
    }

    async fn columns(&self, table: &str) -> Result<Vec<Column>, QueryError> {
        Ok(self
            .table_info(table)
            .await?
            .into_iter()
            .map(|(name, decltype, _)| decl::column(name, &decltype))
            .collect())
    }

    fn dialect(&self) -> DialectKind {
        DialectKind::Sqlite
    }
}
