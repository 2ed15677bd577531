//! `SQLite` implementation of the `MovieStore` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use cinedex_core::{CannedProcedure, MovieRow, MovieStore, RepositoryError, SqlFragment, SqlParam};

use super::row_mappers::row_to_movie;
use crate::procedures;

/// `SQLite` implementation of the `MovieStore` trait.
///
/// Holds the store handle opened by [`setup_database`](crate::setup_database).
/// Canned procedures and ad-hoc statements both go through one execution
/// path, which binds parameters in order and awaits a single round trip.
pub struct SqliteMovieStore {
    pool: SqlitePool,
}

impl SqliteMovieStore {
    /// Create a new `SQLite` movie store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn execute(&self, statement: &SqlFragment) -> Result<Vec<MovieRow>, RepositoryError> {
        let mut query = sqlx::query(&statement.sql);
        for param in &statement.params {
            query = match param {
                SqlParam::Text(value) => query.bind(value.clone()),
                SqlParam::Integer(value) => query.bind(*value),
            };
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!(
                target: "cinedex.db",
                error = %e,
                sql = %statement.sql,
                params = statement.params.len(),
                "Database query error"
            );
            RepositoryError::Storage(e.to_string())
        })?;

        rows.iter().map(row_to_movie).collect()
    }
}

#[async_trait]
impl MovieStore for SqliteMovieStore {
    async fn call(&self, procedure: &CannedProcedure) -> Result<Vec<MovieRow>, RepositoryError> {
        tracing::debug!(target: "cinedex.db", procedure = procedure.name(), "CALL");
        self.execute(&procedures::statement(procedure)).await
    }

    async fn query(&self, statement: &SqlFragment) -> Result<Vec<MovieRow>, RepositoryError> {
        self.execute(statement).await
    }
}
