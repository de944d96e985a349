//! # veil-schema
//!
//! Database introspection and SQL fragment generation for the veil data
//! anonymizer.
//!
//! The anonymization engine drives this crate in three steps: introspect a
//! table ([`Inspector::table_columns`], [`Inspector::sole_primary_key`]),
//! build a typed replacement expression per column
//! ([`Inspector::condition`], [`empty_value`]), and optionally render what
//! it produced for its logs ([`BoundQuery::debug_sql`]). Row counts
//! ([`Inspector::count_rows`]) feed sizing and progress reporting.
//!
//! The crate is driver-agnostic: it defines the [`SchemaClient`] trait and
//! adapter crates (veil-sqlite, etc.) implement it against a concrete
//! driver.
//!
//! ## Example
//!
//! ```rust,ignore
//! use veil_schema::{empty_value, Inspector};
//!
//! let inspector = Inspector::new(client);
//! inspector.assert_table_exists("users").await?;
//! let pk = inspector.sole_primary_key("users").await?;
//! for (name, column) in inspector.table_columns("users").await? {
//!     let fragment = inspector.condition(&name, &column);
//!     // embed `fragment` into an UPDATE; bind `:name` to the replacement,
//!     // or fall back to empty_value(column.column_type)
//! }
//! ```

pub mod client;
pub mod column;
pub mod condition;
pub mod debug;
pub mod empty;
pub mod error;
pub mod inspector;

pub use client::{DialectKind, SchemaClient};
pub use column::{Column, ColumnType};
pub use debug::{BoundQuery, ParamValue};
pub use empty::{empty_value, EmptyValue};
pub use error::{QueryError, Result, SchemaError};
pub use inspector::Inspector;
