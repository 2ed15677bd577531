//! Movie store trait definition.
//!
//! This port is the single way the catalog reaches the relational store.
//! Implementations own the connection and all SQL execution details.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::MovieRow;
use crate::query::SqlFragment;

/// A fixed, store-side statement invoked by name.
///
/// The statement bodies belong to the store; the catalog only knows their
/// names and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CannedProcedure {
    /// Every movie, unfiltered.
    DisplayAllMovies,
    /// Movies whose names match a free-text term, ranked by the store.
    SearchSuggestion(String),
}

impl CannedProcedure {
    /// The name the store knows this procedure by.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DisplayAllMovies => "displayAllMovies",
            Self::SearchSuggestion(_) => "searchSuggestion",
        }
    }
}

/// Read-only access to the movie store.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - A call either returns every row or fails; there are no partial results
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Invoke a canned procedure.
    async fn call(&self, procedure: &CannedProcedure) -> Result<Vec<MovieRow>, RepositoryError>;

    /// Execute an ad-hoc parameterized statement.
    async fn query(&self, statement: &SqlFragment) -> Result<Vec<MovieRow>, RepositoryError>;
}
