//! # Movie Handlers
//!
//! Read-only endpoints over the movie catalog: listing every movie and
//! looking up a single movie by its numeric id.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, Movie};
use crate::utils::constant::MOVIES_RETRIEVED_MESSAGE;

/// Response containing the full catalog
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub count: usize,
    pub message: String,
}

/// Response containing a single movie
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieResponse {
    pub movie: Movie,
}

/// Lists every movie in catalog order.
///
/// GET /api/movies
///
/// # Returns
///
/// - `200 OK` with [`MovieListResponse`], where `count` is the number of movies
/// - `500 Internal Server Error` - Unexpected fault while handling the request
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Fetching movies data");

    let movies = state.catalog.movies().to_vec();
    let count = movies.len();

    Json(MovieListResponse {
        movies,
        count,
        message: MOVIES_RETRIEVED_MESSAGE.to_string(),
    })
}

/// Gets a single movie by id.
///
/// GET /api/movies/{id}
///
/// The id must be a run of ASCII digits that fits in a `u32`. Anything else
/// (signs, decimals, overflow) is treated as a path that does not exist, so
/// the catalog is never consulted for it.
///
/// # Returns
///
/// - `200 OK` with [`MovieResponse`] - Movie found
/// - `404 Not Found` - No movie has this id, or the id is not an integer
/// - `500 Internal Server Error` - Unexpected fault while handling the request
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MovieResponse>> {
    let Path(raw) = id.map_err(|rejection| {
        debug!(%rejection, "Movie id could not be extracted");
        AppError::NotFound("Movie not found")
    })?;
    let id = parse_movie_id(&raw).ok_or_else(|| {
        debug!(%raw, "Movie id is not an integer");
        AppError::NotFound("Movie not found")
    })?;

    match state.catalog.find(id) {
        Some(movie) => {
            debug!(id, title = %movie.title, "Movie found");
            Ok(Json(MovieResponse {
                movie: movie.clone(),
            }))
        }
        None => {
            warn!(id, "Movie not found");
            Err(AppError::NotFound("Movie not found"))
        }
    }
}

/// Parses a path segment made only of ASCII digits. `u32::from_str` alone
/// would also accept a leading `+`.
fn parse_movie_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
