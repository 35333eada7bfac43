//! Genre and MPA rating handlers.
//!
//! The vocabularies are static, so these handlers touch no state.

use axum::Json;
use axum::extract::Path;

use filmotek_workflow::workflows;

use crate::dto::response::{GenreResponse, MpaResponse};
use crate::dto::{genre_to_response, mpa_to_response};
use crate::errors::ApiError;

// =============================================================================
// Genre Handlers
// =============================================================================

pub async fn get_genres() -> Json<Vec<GenreResponse>> {
    let genres = workflows::catalog::all_genres();
    Json(genres.into_iter().map(genre_to_response).collect())
}

pub async fn get_genre(Path(genre_id): Path<i64>) -> Result<Json<GenreResponse>, ApiError> {
    let genre = workflows::catalog::genre_by_id(genre_id)?;
    Ok(Json(genre_to_response(genre)))
}

// =============================================================================
// MPA Rating Handlers
// =============================================================================

pub async fn get_mpa_ratings() -> Json<Vec<MpaResponse>> {
    let ratings = workflows::catalog::all_mpa_ratings();
    Json(ratings.into_iter().map(mpa_to_response).collect())
}

pub async fn get_mpa_rating(Path(rating_id): Path<i64>) -> Result<Json<MpaResponse>, ApiError> {
    let rating = workflows::catalog::mpa_rating_by_id(rating_id)?;
    Ok(Json(mpa_to_response(rating)))
}

// =============================================================================
// Tests
// =============================================================================
