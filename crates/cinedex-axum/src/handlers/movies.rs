//! Movie handlers - the two read endpoints.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::ListEnvelope;
use crate::error::HttpError;
use crate::state::AppState;
use cinedex_core::{MovieFilters, MovieRow, MovieSearch};

/// List every movie, wrapped in a success envelope.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ListEnvelope<MovieRow>>, HttpError> {
    let movies = state.catalog.list_all().await?;
    Ok(Json(ListEnvelope::new(movies)))
}

/// Search by free text, or filter by genre, rating and year.
///
/// The list is returned bare, without the envelope `list` uses.
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<MovieFilters>, QueryRejection>,
) -> Result<Json<Vec<MovieRow>>, HttpError> {
    let Query(filters) = query?;
    let search = MovieSearch::from(filters);
    tracing::debug!(?search, "Movie search");
    Ok(Json(state.catalog.search(search).await?))
}
