//! # veil-sqlite
//!
//! SQLite adapter for `veil-schema` introspection, backed by sqlx.
//!
//! SQLite specifics this adapter absorbs:
//!
//! - identifiers cannot be bound as parameters, so row counts interpolate a
//!   double-quoted table name;
//! - table existence comes from `sqlite_master`;
//! - primary key and column metadata come from `pragma_table_info`, which
//!   reports each column's 1-based position inside the key;
//! - declared types are free-form decltypes (`VARCHAR(255)`,
//!   `INT UNSIGNED`, ...) and are normalized onto the
//!   [`veil_schema::ColumnType`] vocabulary by the [`decl`] module.

mod client;
pub mod decl;

pub use client::SqliteSchemaClient;
