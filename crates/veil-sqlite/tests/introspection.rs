//! End-to-end introspection against in-memory databases.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use veil_schema::{empty_value, ColumnType, DialectKind, EmptyValue, Inspector, SchemaError};
use veil_sqlite::SqliteSchemaClient;

async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

async fn users_pool() -> SqlitePool {
    let pool = create_test_pool().await;
    sqlx::query(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            email VARCHAR(255),
            birthdate DATE
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO users (email, birthdate) VALUES
            ('alice@example.com', '1990-01-01'),
            ('bob@example.com', '1985-06-15'),
            ('carol@example.com', '2001-12-31')",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool
}

fn inspector(pool: &SqlitePool) -> Inspector<SqliteSchemaClient> {
    Inspector::new(SqliteSchemaClient::new(pool.clone()))
}

#[tokio::test]
async fn test_count_rows_reflects_current_state() {
    let pool = users_pool().await;
    let inspector = inspector(&pool);

    assert_eq!(inspector.count_rows("users").await.unwrap(), 3);

    sqlx::query("INSERT INTO users (email, birthdate) VALUES ('dave@example.com', '1970-01-01')")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(inspector.count_rows("users").await.unwrap(), 4);
}

#[tokio::test]
async fn test_count_rows_on_missing_table_is_a_query_error() {
    let pool = users_pool().await;
    let err = inspector(&pool).count_rows("missing").await.unwrap_err();
    assert!(matches!(err, SchemaError::Query(_)));
}

#[tokio::test]
async fn test_assert_table_exists() {
    let pool = users_pool().await;
    let inspector = inspector(&pool);

    inspector.assert_table_exists("users").await.unwrap();

    let err = inspector.assert_table_exists("missing").await.unwrap_err();
    assert!(matches!(err, SchemaError::TableMissing(table) if table == "missing"));
}

#[tokio::test]
async fn test_sole_primary_key() {
    let pool = users_pool().await;
    assert_eq!(
        inspector(&pool).sole_primary_key("users").await.unwrap(),
        "id"
    );
}

#[tokio::test]
async fn test_table_without_primary_key() {
    let pool = create_test_pool().await;
    sqlx::query("CREATE TABLE logs (message TEXT)")
        .execute(&pool)
        .await
        .unwrap();

    let err = inspector(&pool).sole_primary_key("logs").await.unwrap_err();
    assert!(matches!(err, SchemaError::NoPrimaryKey(table) if table == "logs"));
}

#[tokio::test]
async fn test_composite_primary_key() {
    let pool = create_test_pool().await;
    sqlx::query(
        "CREATE TABLE memberships (
            user_id INTEGER,
            group_id INTEGER,
            PRIMARY KEY (user_id, group_id)
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    let inspector = inspector(&pool);

    let full = inspector.primary_key_columns("memberships").await.unwrap();
    assert_eq!(full, vec!["user_id", "group_id"]);

    let err = inspector.sole_primary_key("memberships").await.unwrap_err();
    assert!(matches!(
        err,
        SchemaError::CompositePrimaryKey { columns, .. } if columns.len() == 2
    ));
}

#[tokio::test]
async fn test_table_columns_metadata() {
    let pool = users_pool().await;
    let columns = inspector(&pool).table_columns("users").await.unwrap();

    assert_eq!(columns.len(), 3);
    assert_eq!(columns["id"].column_type, ColumnType::Integer);
    assert_eq!(columns["email"].column_type, ColumnType::Other);
    assert_eq!(columns["email"].length, Some(255));
    assert_eq!(columns["birthdate"].column_type, ColumnType::Date);
}

#[tokio::test]
async fn test_unsigned_decltype_survives_introspection() {
    let pool = create_test_pool().await;
    sqlx::query("CREATE TABLE counters (id INTEGER PRIMARY KEY, hits INT UNSIGNED)")
        .execute(&pool)
        .await
        .unwrap();

    let columns = inspector(&pool).table_columns("counters").await.unwrap();
    assert_eq!(columns["hits"].column_type, ColumnType::Integer);
    assert!(columns["hits"].unsigned);
}

#[tokio::test]
async fn test_dialect_is_sqlite() {
    let pool = users_pool().await;
    assert_eq!(inspector(&pool).dialect(), DialectKind::Sqlite);
}

// The scenario the anonymization engine runs per table: primary key for
// targeting, then a condition and a neutral value per column.
#[tokio::test]
async fn test_users_anonymization_scenario() {
    let pool = users_pool().await;
    let inspector = inspector(&pool);

    inspector.assert_table_exists("users").await.unwrap();
    assert_eq!(inspector.sole_primary_key("users").await.unwrap(), "id");

    let columns = inspector.table_columns("users").await.unwrap();
    assert_eq!(
        inspector.condition("birthdate", &columns["birthdate"]),
        "CAST((CASE birthdate WHEN NULL THEN NULL ELSE :birthdate END) AS DATE)"
    );
    assert_eq!(
        inspector.condition("email", &columns["email"]),
        "(CASE email WHEN NULL THEN NULL ELSE :email END)"
    );
    assert_eq!(
        empty_value(columns["birthdate"].column_type),
        EmptyValue::Text("1970-01-01".into())
    );
    assert_eq!(
        empty_value(columns["email"].column_type),
        EmptyValue::Text("".into())
    );
}
