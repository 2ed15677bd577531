//! Canned procedure bodies.
//!
//! `SQLite` has no stored procedures, so the store's fixed statements live
//! here and are resolved by [`CannedProcedure`] name. Callers never see or
//! build this SQL; they only pick a procedure and supply its arguments.

use cinedex_core::{CannedProcedure, MOVIE_PROJECTION, SqlFragment, SqlParam};

/// Maximum number of rows `searchSuggestion` returns.
pub const SUGGESTION_LIMIT: i64 = 10;

/// Every movie joined to all of its related names, before grouping.
const MOVIE_JOINS: &str = "FROM movie m \
    LEFT JOIN movie_genre mg ON m.mID = mg.mID \
    LEFT JOIN genre g ON mg.gID = g.gID \
    LEFT JOIN movie_actor ma ON m.mID = ma.mID \
    LEFT JOIN actor a ON ma.aID = a.aID \
    LEFT JOIN movie_director md ON m.mID = md.mID \
    LEFT JOIN director d ON md.dID = d.dID \
    LEFT JOIN movie_prodCoy mp ON m.mID = mp.mID \
    LEFT JOIN productionCompany p ON mp.pID = p.pID";

/// Grouped projection shared by both procedures.
fn movie_source() -> String {
    format!("SELECT {MOVIE_PROJECTION} {MOVIE_JOINS}")
}

/// `displayAllMovies()`
const DISPLAY_ALL_MOVIES: &str = "GROUP BY m.mID ORDER BY m.yearOfRelease DESC, m.mID";

/// `searchSuggestion(term)`: exact name first, then prefix, then substring.
const SEARCH_SUGGESTION: &str = "WHERE m.mName LIKE '%' || ?1 || '%' \
    GROUP BY m.mID \
    ORDER BY CASE \
        WHEN lower(m.mName) = lower(?1) THEN 0 \
        WHEN m.mName LIKE ?1 || '%' THEN 1 \
        ELSE 2 \
    END, m.yearOfRelease DESC, m.mName \
    LIMIT ?2";

/// Resolve a procedure to its statement and bound arguments.
pub fn statement(procedure: &CannedProcedure) -> SqlFragment {
    match procedure {
        CannedProcedure::DisplayAllMovies => {
            SqlFragment::new(format!("{} {DISPLAY_ALL_MOVIES}", movie_source()))
        }
        CannedProcedure::SearchSuggestion(term) => SqlFragment::with_params(
            format!("{} {SEARCH_SUGGESTION}", movie_source()),
            vec![SqlParam::text(term), SqlParam::integer(SUGGESTION_LIMIT)],
        ),
    }
}
