//! Catalog vocabulary use cases: genres and MPA ratings.
//!
//! These run against the static in-code tables, so no port is involved;
//! they are synchronous and infallible except for unknown-id lookups.

use filmotek_domain::film::{Genre, MpaRating};

use crate::errors::WorkflowError;
use crate::ports::WorkflowResult;

// =============================================================================
// Genres
// =============================================================================

/// Returns all genres, ordered by id.
#[must_use]
pub fn all_genres() -> Vec<Genre> {
    Genre::all().collect()
}

/// Looks a genre up by id, failing with not-found for unknown ids.
pub fn genre_by_id(id: i64) -> WorkflowResult<Genre> {
    Genre::by_id(id).ok_or_else(|| WorkflowError::not_found("Genre", id.to_string()))
}

// =============================================================================
// MPA Ratings
// =============================================================================

/// Returns all MPA ratings, ordered by id.
#[must_use]
pub fn all_mpa_ratings() -> Vec<MpaRating> {
    MpaRating::all().collect()
}

/// Looks an MPA rating up by id, failing with not-found for unknown ids.
pub fn mpa_rating_by_id(id: i64) -> WorkflowResult<MpaRating> {
    MpaRating::by_id(id).ok_or_else(|| WorkflowError::not_found("MpaRating", id.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
