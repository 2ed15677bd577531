//! SQL statement construction.
//!
//! Statements are assembled from [`SqlFragment`]s that carry their clause
//! text and bound values together, so placeholders and parameters can never
//! drift apart. User input only ever travels as a [`SqlParam`].

mod filtered_movies;
mod fragment;

pub use filtered_movies::{FilteredMovieQuery, MOVIE_PROJECTION};
pub use fragment::{SqlFragment, SqlParam};
