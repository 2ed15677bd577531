//! Composition utilities for wiring the catalog with a `SQLite` store.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use cinedex_core::{MovieCatalogService, MovieStore};

use crate::repositories::SqliteMovieStore;

/// Factory for creating store-backed services.
pub struct CoreFactory;

impl CoreFactory {
    /// Create the movie store from the store handle.
    pub fn movie_store(pool: SqlitePool) -> Arc<SqliteMovieStore> {
        Arc::new(SqliteMovieStore::new(pool))
    }

    /// Build a `MovieCatalogService` over a `SQLite` store.
    ///
    /// This is the recommended single-step way for adapters to obtain the
    /// catalog. Equivalent to:
    ///
    /// ```ignore
    /// let store = CoreFactory::movie_store(pool);
    /// let catalog = MovieCatalogService::new(store);
    /// ```
    pub fn build_catalog(pool: SqlitePool) -> MovieCatalogService {
        let store: Arc<dyn MovieStore> = Self::movie_store(pool);
        MovieCatalogService::new(store)
    }
}

/// Kinds of named entity a movie can be associated with.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Related {
    Genre,
    Actor,
    Director,
    ProductionCompany,
}

#[cfg(any(test, feature = "test-utils"))]
impl Related {
    /// (entity table, id column, name column, association table)
    fn tables(self) -> (&'static str, &'static str, &'static str, &'static str) {
        match self {
            Self::Genre => ("genre", "gID", "gName", "movie_genre"),
            Self::Actor => ("actor", "aID", "aName", "movie_actor"),
            Self::Director => ("director", "dID", "dName", "movie_director"),
            Self::ProductionCompany => ("productionCompany", "pID", "pName", "movie_prodCoy"),
        }
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// applied, plus helpers for seeding catalog rows. The application itself
/// never writes to the store; these helpers exist for tests only.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a movie store using this test database.
    pub fn movie_store(&self) -> SqliteMovieStore {
        SqliteMovieStore::new(self.pool.clone())
    }

    /// Create a catalog service using this test database.
    pub fn catalog(&self) -> MovieCatalogService {
        CoreFactory::build_catalog(self.pool.clone())
    }

    /// Insert a movie row.
    pub async fn insert_movie(
        &self,
        id: i64,
        name: &str,
        year: Option<i64>,
        rating: Option<f64>,
        description: Option<&str>,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO movie (mID, mName, yearOfRelease, rating, mDescription) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(year)
        .bind(rating)
        .bind(description)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a genre, actor, director or production company.
    pub async fn insert_named(&self, kind: Related, id: i64, name: &str) -> anyhow::Result<()> {
        let (table, id_col, name_col, _) = kind.tables();
        sqlx::query(&format!(
            "INSERT INTO {table} ({id_col}, {name_col}) VALUES (?, ?)"
        ))
        .bind(id)
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Associate a movie with a related entity.
    pub async fn link(&self, kind: Related, movie_id: i64, related_id: i64) -> anyhow::Result<()> {
        let (_, id_col, _, association) = kind.tables();
        sqlx::query(&format!(
            "INSERT INTO {association} (mID, {id_col}) VALUES (?, ?)"
        ))
        .bind(movie_id)
        .bind(related_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of rows in the movie table.
    pub async fn movie_count(&self) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Load a small, fixed catalog.
    ///
    /// | id | name                | year | rating | genres           |
    /// |----|---------------------|------|--------|------------------|
    /// | 1  | Heat                | 1995 | 8.3    | Crime, Drama     |
    /// | 2  | The Matrix          | 1999 | 8.7    | Action, Sci-Fi   |
    /// | 3  | The Matrix Reloaded | 2003 | 7.2    | Action, Sci-Fi   |
    /// | 4  | Fight Club          | 1999 | 8.8    | Drama            |
    /// | 5  | Se7en               | 1995 | 8.6    | Crime, Mystery   |
    /// | 6  | Toy Story           | 1995 | 8.3    | Animation        |
    /// | 7  | Untitled Short      | 2021 | -      | -                |
    ///
    /// "Untitled Short" has no genres, actors, directors or companies.
    pub async fn seed_sample_catalog(&self) -> anyhow::Result<()> {
        let movies: [(i64, &str, i64, Option<f64>, Option<&str>); 7] = [
            (1, "Heat", 1995, Some(8.3), Some("A thief and a detective.")),
            (2, "The Matrix", 1999, Some(8.7), Some("Reality is a simulation.")),
            (3, "The Matrix Reloaded", 2003, Some(7.2), None),
            (4, "Fight Club", 1999, Some(8.8), None),
            (5, "Se7en", 1995, Some(8.6), None),
            (6, "Toy Story", 1995, Some(8.3), Some("Toys come alive.")),
            (7, "Untitled Short", 2021, None, None),
        ];
        for (id, name, year, rating, description) in movies {
            self.insert_movie(id, name, Some(year), rating, description)
                .await?;
        }

        let named: [(Related, &[(i64, &str)]); 4] = [
            (
                Related::Genre,
                &[
                    (1, "Crime"),
                    (2, "Drama"),
                    (3, "Action"),
                    (4, "Sci-Fi"),
                    (5, "Mystery"),
                    (6, "Animation"),
                ],
            ),
            (
                Related::Actor,
                &[
                    (1, "Al Pacino"),
                    (2, "Robert De Niro"),
                    (3, "Keanu Reeves"),
                    (4, "Carrie-Anne Moss"),
                    (5, "Brad Pitt"),
                    (6, "Edward Norton"),
                    (7, "Tom Hanks"),
                ],
            ),
            (
                Related::Director,
                &[
                    (1, "Michael Mann"),
                    (2, "Lana Wachowski"),
                    (3, "Lilly Wachowski"),
                    (4, "David Fincher"),
                    (5, "John Lasseter"),
                ],
            ),
            (
                Related::ProductionCompany,
                &[
                    (1, "Warner Bros."),
                    (2, "20th Century Fox"),
                    (3, "New Line Cinema"),
                    (4, "Pixar"),
                ],
            ),
        ];
        for (kind, rows) in named {
            for (id, name) in rows {
                self.insert_named(kind, *id, name).await?;
            }
        }

        let links: [(Related, &[(i64, i64)]); 4] = [
            (
                Related::Genre,
                &[(1, 1), (1, 2), (2, 3), (2, 4), (3, 3), (3, 4), (4, 2), (5, 1), (5, 5), (6, 6)],
            ),
            (
                Related::Actor,
                &[(1, 1), (1, 2), (2, 3), (2, 4), (3, 3), (4, 5), (4, 6), (5, 5), (6, 7)],
            ),
            (
                Related::Director,
                &[(1, 1), (2, 2), (2, 3), (3, 2), (3, 3), (4, 4), (5, 4), (6, 5)],
            ),
            (
                Related::ProductionCompany,
                &[(1, 1), (2, 1), (3, 1), (4, 2), (5, 3), (6, 4)],
            ),
        ];
        for (kind, pairs) in links {
            for (movie_id, related_id) in pairs {
                self.link(kind, *movie_id, *related_id).await?;
            }
        }

        Ok(())
    }
}
