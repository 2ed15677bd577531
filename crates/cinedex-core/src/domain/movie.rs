//! Movie domain types.

use serde::{Deserialize, Serialize};

/// One movie with its related entities collapsed into delimited strings.
///
/// This is a read-time projection: the store groups joined rows by movie
/// identifier, so a `MovieRow` never repeats within a result set. The
/// aggregated fields are `None` when the movie has no related rows of that
/// kind. Field names on the wire follow the store's column names, which the
/// front end consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRow {
    #[serde(rename = "mID")]
    pub id: i64,
    #[serde(rename = "mName")]
    pub name: String,
    #[serde(rename = "yearOfRelease")]
    pub year_of_release: Option<i64>,
    pub rating: Option<f64>,
    #[serde(rename = "mDescription")]
    pub description: Option<String>,
    pub genres: Option<String>,
    pub actors: Option<String>,
    pub directors: Option<String>,
    #[serde(rename = "productionCompanies")]
    pub production_companies: Option<String>,
}

/// Optional filters accepted by the search endpoint.
///
/// Every value is kept as the caller supplied it. `rating` and `year` are not
/// parsed here; the store decides how a malformed value compares. An empty
/// string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilters {
    /// Free-text, case-insensitive substring of the movie name.
    pub search_value: Option<String>,
    /// Exact genre name.
    pub genre: Option<String>,
    /// Inclusive minimum rating.
    pub rating: Option<String>,
    /// Exact release year.
    pub year: Option<String>,
}

impl MovieFilters {
    pub fn search_value(&self) -> Option<&str> {
        present(self.search_value.as_deref())
    }

    pub fn genre(&self) -> Option<&str> {
        present(self.genre.as_deref())
    }

    pub fn rating(&self) -> Option<&str> {
        present(self.rating.as_deref())
    }

    pub fn year(&self) -> Option<&str> {
        present(self.year.as_deref())
    }

    /// Number of filters that will contribute a predicate.
    pub fn present_count(&self) -> usize {
        [self.search_value(), self.genre(), self.rating(), self.year()]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The two mutually exclusive ways a search request is answered.
///
/// Free text goes to the store's suggestion procedure, which owns its own
/// ranking. Without free text the structured filters go through
/// [`FilteredMovieQuery`](crate::query::FilteredMovieQuery).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieSearch {
    Suggestion(String),
    Filtered(MovieFilters),
}

impl From<MovieFilters> for MovieSearch {
    fn from(filters: MovieFilters) -> Self {
        match filters.search_value() {
            Some(term) => Self::Suggestion(term.to_string()),
            None => Self::Filtered(filters),
        }
    }
}
