//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! store connection and ensuring the catalog schema exists. Entry points call
//! this with the configured database path.

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

/// Opens the store with exactly one persistent connection.
///
/// Every request shares this connection; the driver serializes statements on
/// it. The connection is never reaped for idleness or age, so it lives until
/// `SqlitePool::close` is called at shutdown.
fn single_connection() -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

/// Sets up the `SQLite` store connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and database file if missing
/// 2. Opens a single persistent connection
/// 3. Creates all catalog tables that don't exist yet
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use cinedex_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/var/lib/cinedex/cinedex.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let pool = single_connection()
        .connect_with(
            SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true),
        )
        .await?;

    create_schema(&pool).await?;

    tracing::info!(
        target: "cinedex.db",
        database_path = %db_path.display(),
        "Movie store connected"
    );

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use std::str::FromStr;

    let pool = single_connection()
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Named entities related to movies: (table, id column, name column).
const RELATED_TABLES: [(&str, &str, &str); 4] = [
    ("genre", "gID", "gName"),
    ("actor", "aID", "aName"),
    ("director", "dID", "dName"),
    ("productionCompany", "pID", "pName"),
];

/// Association tables: (table, related table, related id column).
const ASSOCIATION_TABLES: [(&str, &str, &str); 4] = [
    ("movie_genre", "genre", "gID"),
    ("movie_actor", "actor", "aID"),
    ("movie_director", "director", "dID"),
    ("movie_prodCoy", "productionCompany", "pID"),
];

/// Creates the complete catalog schema.
///
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // The movie table carries the scalar attributes
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movie (
            mID INTEGER PRIMARY KEY,
            mName TEXT NOT NULL,
            yearOfRelease INTEGER,
            rating REAL,
            mDescription TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    for (table, id_col, name_col) in RELATED_TABLES {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                {id_col} INTEGER PRIMARY KEY,
                {name_col} TEXT NOT NULL
            )"
        ))
        .execute(pool)
        .await?;
    }

    for (table, related, related_id) in ASSOCIATION_TABLES {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                mID INTEGER NOT NULL,
                {related_id} INTEGER NOT NULL,
                PRIMARY KEY (mID, {related_id}),
                FOREIGN KEY (mID) REFERENCES movie(mID) ON DELETE CASCADE,
                FOREIGN KEY ({related_id}) REFERENCES {related}({related_id}) ON DELETE CASCADE
            )"
        ))
        .execute(pool)
        .await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_{related_id} ON {table}({related_id})"
        ))
        .execute(pool)
        .await?;
    }

    // Name lookups back the genre filter and free-text search
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movie_name ON movie(mName)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_genre_name ON genre(gName)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        let tables = std::iter::once("movie")
            .chain(RELATED_TABLES.iter().map(|(table, _, _)| *table))
            .chain(ASSOCIATION_TABLES.iter().map(|(table, _, _)| *table));

        for table in tables {
            let _: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_setup_database_creates_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("cinedex.db");

        let pool = setup_database(&db_path).await.unwrap();
        assert!(db_path.exists());
        pool.close().await;

        // Reopening an existing database must not fail on existing tables
        let pool = setup_database(&db_path).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        pool.close().await;
    }
}
