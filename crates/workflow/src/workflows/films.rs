//! Film catalog use cases.

use filmotek_domain::film::{Film, FilmDraft, FilmId, FilmPatch};

use crate::errors::WorkflowError;
use crate::ports::{FilmRepository, WorkflowResult};

// =============================================================================
// Create
// =============================================================================

/// Persists a new film. The draft is already validated, so the only
/// failure mode is the store itself.
pub async fn create_film<Films>(films: &Films, draft: FilmDraft) -> WorkflowResult<Film>
where
    Films: FilmRepository,
{
    films.create(draft).await
}

// =============================================================================
// Update
// =============================================================================

/// Applies a partial update to an existing film.
pub async fn update_film<Films>(
    films: &Films,
    id: FilmId,
    patch: FilmPatch,
) -> WorkflowResult<Film>
where
    Films: FilmRepository,
{
    films.update(id, patch).await
}

// =============================================================================
// Queries
// =============================================================================

/// Looks a film up, failing with a not-found error for unknown ids.
pub async fn get_film<Films>(films: &Films, id: FilmId) -> WorkflowResult<Film>
where
    Films: FilmRepository,
{
    films
        .find_by_id(id)
        .await?
        .ok_or_else(|| WorkflowError::not_found("Film", id.to_string()))
}

/// Returns the whole catalog, ordered by id.
pub async fn list_films<Films>(films: &Films) -> WorkflowResult<Vec<Film>>
where
    Films: FilmRepository,
{
    films.list_all().await
}

// =============================================================================
// Tests
// =============================================================================
