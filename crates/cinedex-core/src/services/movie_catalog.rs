//! Movie catalog service - answers the two read operations.

use std::sync::Arc;

use crate::domain::{MovieFilters, MovieRow, MovieSearch};
use crate::ports::{CannedProcedure, CoreError, MovieStore};
use crate::query::FilteredMovieQuery;

/// Message reported when the unfiltered listing is empty.
pub const NO_MOVIES_AVAILABLE: &str = "No movies available.";

/// Message reported when a free-text search matches nothing.
pub const NO_MOVIES_FOUND: &str = "No movies found.";

/// Service for movie catalog reads.
///
/// An empty listing and an empty free-text search are reported as
/// [`CoreError::NotFound`]. An empty structured filter result is a normal,
/// empty success.
pub struct MovieCatalogService {
    store: Arc<dyn MovieStore>,
}

impl MovieCatalogService {
    /// Create a new catalog service over an injected store.
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    /// List every movie.
    pub async fn list_all(&self) -> Result<Vec<MovieRow>, CoreError> {
        let movies = self.store.call(&CannedProcedure::DisplayAllMovies).await?;
        if movies.is_empty() {
            return Err(CoreError::NotFound(NO_MOVIES_AVAILABLE.to_string()));
        }
        Ok(movies)
    }

    /// Answer a search request with whichever strategy it selects.
    pub async fn search(&self, search: MovieSearch) -> Result<Vec<MovieRow>, CoreError> {
        match search {
            MovieSearch::Suggestion(term) => self.suggest(term).await,
            MovieSearch::Filtered(filters) => self.filter(&filters).await,
        }
    }

    /// Ask the store for movies matching free text.
    pub async fn suggest(&self, term: String) -> Result<Vec<MovieRow>, CoreError> {
        let movies = self
            .store
            .call(&CannedProcedure::SearchSuggestion(term))
            .await?;
        if movies.is_empty() {
            return Err(CoreError::NotFound(NO_MOVIES_FOUND.to_string()));
        }
        Ok(movies)
    }

    /// Run the structured filter query.
    pub async fn filter(&self, filters: &MovieFilters) -> Result<Vec<MovieRow>, CoreError> {
        let statement = FilteredMovieQuery::build(filters);
        Ok(self.store.query(&statement).await?)
    }
}
