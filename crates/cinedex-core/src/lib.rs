#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{MovieFilters, MovieRow, MovieSearch};
pub use ports::{CannedProcedure, CoreError, MovieStore, RepositoryError};
pub use query::{FilteredMovieQuery, MOVIE_PROJECTION, SqlFragment, SqlParam};
pub use services::{MovieCatalogService, NO_MOVIES_AVAILABLE, NO_MOVIES_FOUND};
