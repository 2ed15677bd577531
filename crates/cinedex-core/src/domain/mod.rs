//! Domain types for the movie catalog.
//!
//! These types are storage-agnostic and carry no sqlx or HTTP details.

mod movie;

pub use movie::{MovieFilters, MovieRow, MovieSearch};
