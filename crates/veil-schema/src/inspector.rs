//! Schema introspection facade.
//!
//! [`Inspector`] is what the anonymization engine talks to: it resolves
//! primary keys, enumerates column metadata, counts rows, and builds the
//! dialect-appropriate condition fragments, all through one injected
//! [`SchemaClient`].

use std::collections::HashMap;

use tracing::debug;

use crate::client::{DialectKind, SchemaClient};
use crate::column::Column;
use crate::condition;
use crate::error::{Result, SchemaError};

/// Schema-aware helper around an injected database client.
///
/// Holds no state of its own; every call is independent of prior calls and
/// reflects the database at call time. Sharing across workers is governed
/// by the client.
pub struct Inspector<C: SchemaClient> {
    client: C,
}

impl<C: SchemaClient> Inspector<C> {
    /// Creates an inspector over the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The dialect of the underlying connection.
    #[must_use]
    pub fn dialect(&self) -> DialectKind {
        self.client.dialect()
    }

    /// Returns a reference to the underlying client.
    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Counts the rows of `table`.
    pub async fn count_rows(&self, table: &str) -> Result<u64> {
        debug!(table = %table, "counting rows");
        Ok(self.client.count_rows(table).await?)
    }

    /// Fails with [`SchemaError::TableMissing`] unless `table` exists.
    ///
    /// Precondition guard to run before destructive operations elsewhere in
    /// the tool.
    pub async fn assert_table_exists(&self, table: &str) -> Result<()> {
        if self.client.table_exists(table).await? {
            Ok(())
        } else {
            Err(SchemaError::TableMissing(table.to_string()))
        }
    }

    /// Returns the primary key columns of `table`, in key order.
    ///
    /// Fails with [`SchemaError::NoPrimaryKey`] when the table declares
    /// none.
    pub async fn primary_key_columns(&self, table: &str) -> Result<Vec<String>> {
        debug!(table = %table, "resolving primary key");
        let columns = self.client.primary_key_columns(table).await?;
        if columns.is_empty() {
            return Err(SchemaError::NoPrimaryKey(table.to_string()));
        }
        Ok(columns)
    }

    /// Returns the single primary key column used for row targeting.
    ///
    /// Composite keys are an explicit [`SchemaError::CompositePrimaryKey`]
    /// rather than being truncated to their leading column.
    pub async fn sole_primary_key(&self, table: &str) -> Result<String> {
        let mut columns = self.primary_key_columns(table).await?;
        if columns.len() > 1 {
            return Err(SchemaError::CompositePrimaryKey {
                table: table.to_string(),
                columns,
            });
        }
        Ok(columns.remove(0))
    }

    /// Returns metadata for every column of `table`, keyed by column name.
    ///
    /// Fetched fresh on every call; entry order carries no meaning.
    pub async fn table_columns(&self, table: &str) -> Result<HashMap<String, Column>> {
        debug!(table = %table, "fetching column metadata");
        let columns = self.client.columns(table).await?;
        Ok(columns.into_iter().map(|c| (c.name.clone(), c)).collect())
    }

    /// Builds the conditional replacement expression for `field` under the
    /// connection's dialect. See [`condition::build`].
    #[must_use]
    pub fn condition(&self, field: &str, column: &Column) -> String {
        condition::build(field, column, self.client.dialect())
    }
}
