//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Read-only: the catalog never writes to the store

pub mod movie_store;

use thiserror::Error;

pub use movie_store::{CannedProcedure, MovieStore};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (connectivity, syntax, constraint).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A returned row did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The request succeeded but produced nothing the caller can show.
    #[error("{0}")]
    NotFound(String),
}
