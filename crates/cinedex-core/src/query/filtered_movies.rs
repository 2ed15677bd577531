//! Builder for the filtered movie query.
//!
//! Produces one row per movie with genres, actors, directors and production
//! companies collapsed into comma-joined strings of distinct names.

use super::fragment::{SqlFragment, SqlParam};
use crate::domain::MovieFilters;

/// Shared SELECT list for the grouped movie projection.
///
/// Expects the aliases `m`, `g`, `a`, `d` and `p` to be joined.
pub const MOVIE_PROJECTION: &str = "m.mID, m.mName, m.yearOfRelease, m.rating, m.mDescription, \
     GROUP_CONCAT(DISTINCT g.gName) AS genres, \
     GROUP_CONCAT(DISTINCT a.aName) AS actors, \
     GROUP_CONCAT(DISTINCT d.dName) AS directors, \
     GROUP_CONCAT(DISTINCT p.pName) AS productionCompanies";

const GENRE_INNER_JOIN: &str =
    "INNER JOIN movie_genre mg ON m.mID = mg.mID INNER JOIN genre g ON mg.gID = g.gID";

const GENRE_LEFT_JOIN: &str =
    "LEFT JOIN movie_genre mg ON m.mID = mg.mID LEFT JOIN genre g ON mg.gID = g.gID";

// Missing people or companies must never drop a movie.
const RELATED_LEFT_JOINS: &str = "LEFT JOIN movie_actor ma ON m.mID = ma.mID \
     LEFT JOIN actor a ON ma.aID = a.aID \
     LEFT JOIN movie_director md ON m.mID = md.mID \
     LEFT JOIN director d ON md.dID = d.dID \
     LEFT JOIN movie_prodCoy mp ON m.mID = mp.mID \
     LEFT JOIN productionCompany p ON mp.pID = p.pID";

const GROUP_AND_ORDER: &str = "GROUP BY m.mID ORDER BY m.yearOfRelease DESC, m.mID";

/// Builds the grouped, filtered movie query.
///
/// Each present filter adds exactly one predicate and one bound value, in
/// this order: genre, name search, rating, year. Absent filters add nothing.
///
/// | Filter    | Join on genre | Predicate              | Bound value  |
/// |-----------|---------------|------------------------|--------------|
/// | genre     | `INNER JOIN`  | `g.gName = ?`          | as supplied  |
/// | search    |               | `m.mName LIKE ?`       | `%value%`    |
/// | rating    |               | `m.rating >= ?`        | as supplied  |
/// | year      |               | `m.yearOfRelease = ?`  | as supplied  |
///
/// Without a genre filter the genre tables are `LEFT JOIN`ed so movies with no
/// genre still appear.
pub struct FilteredMovieQuery;

impl FilteredMovieQuery {
    pub fn build(filters: &MovieFilters) -> SqlFragment {
        let mut query = SqlFragment::new(format!("SELECT {MOVIE_PROJECTION} FROM movie m"));
        let mut conditions = Vec::new();

        if let Some(genre) = filters.genre() {
            query.push_sql(GENRE_INNER_JOIN);
            conditions.push(SqlFragment::with_params(
                "g.gName = ?",
                vec![SqlParam::text(genre)],
            ));
        } else {
            query.push_sql(GENRE_LEFT_JOIN);
        }
        query.push_sql(RELATED_LEFT_JOINS);

        if let Some(term) = filters.search_value() {
            conditions.push(SqlFragment::with_params(
                "m.mName LIKE ?",
                vec![SqlParam::text(format!("%{term}%"))],
            ));
        }
        if let Some(rating) = filters.rating() {
            conditions.push(SqlFragment::with_params(
                "m.rating >= ?",
                vec![SqlParam::text(rating)],
            ));
        }
        if let Some(year) = filters.year() {
            conditions.push(SqlFragment::with_params(
                "m.yearOfRelease = ?",
                vec![SqlParam::text(year)],
            ));
        }

        if let Some(where_clause) = SqlFragment::and_all(conditions) {
            query.push_sql("WHERE");
            query.append(where_clause);
        }
        query.push_sql(GROUP_AND_ORDER);

        tracing::debug!(
            params = query.params.len(),
            genre_join = if filters.genre().is_some() { "inner" } else { "left" },
            "Built filtered movie query"
        );

        query
    }
}
