//! Row mapping helpers for `SQLite` queries.

use cinedex_core::{MovieRow, RepositoryError};
use sqlx::Row;

/// Parse a grouped projection row into a `MovieRow`.
pub fn row_to_movie(row: &sqlx::sqlite::SqliteRow) -> Result<MovieRow, RepositoryError> {
    Ok(MovieRow {
        id: row
            .try_get("mID")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        name: row
            .try_get("mName")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        year_of_release: row
            .try_get("yearOfRelease")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        rating: row
            .try_get("rating")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        description: row
            .try_get("mDescription")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        genres: row
            .try_get("genres")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        actors: row
            .try_get("actors")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        directors: row
            .try_get("directors")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
        production_companies: row
            .try_get("productionCompanies")
            .map_err(|e| RepositoryError::Decode(e.to_string()))?,
    })
}
