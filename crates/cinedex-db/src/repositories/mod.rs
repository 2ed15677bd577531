//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL execution and row decoding.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_movie_store;

pub use sqlite_movie_store::SqliteMovieStore;
