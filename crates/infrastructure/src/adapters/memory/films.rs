//! In-memory film repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use filmotek_domain::film::{Film, FilmDraft, FilmId, FilmPatch};
use filmotek_workflow::errors::WorkflowError;
use filmotek_workflow::ports::{FilmRepository, WorkflowResult};

use super::poisoned;

// =============================================================================
// MemoryFilmRepository
// =============================================================================

/// In-memory film repository: a mutex-guarded ordered map plus an
/// explicit id sequence. Iteration order is id order, which gives
/// `list_all` its contract for free.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilmRepository {
    films: Arc<Mutex<BTreeMap<FilmId, Film>>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryFilmRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(
        &self,
        operation: &'static str,
    ) -> WorkflowResult<MutexGuard<'_, BTreeMap<FilmId, Film>>> {
        self.films.lock().map_err(|_| poisoned(operation))
    }
}

// =============================================================================
// FilmRepository Implementation
// =============================================================================

impl FilmRepository for MemoryFilmRepository {
    async fn create(&self, draft: FilmDraft) -> WorkflowResult<Film> {
        let id = FilmId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        let film = Film::new(id, draft);
        self.guard("create")?.insert(id, film.clone());
        Ok(film)
    }

    async fn update(&self, id: FilmId, patch: FilmPatch) -> WorkflowResult<Film> {
        let mut films = self.guard("update")?;
        let film = films
            .get_mut(&id)
            .ok_or_else(|| WorkflowError::not_found("Film", id.to_string()))?;
        film.apply_patch(patch);
        Ok(film.clone())
    }

    async fn find_by_id(&self, id: FilmId) -> WorkflowResult<Option<Film>> {
        Ok(self.guard("find_by_id")?.get(&id).cloned())
    }

    async fn list_all(&self) -> WorkflowResult<Vec<Film>> {
        Ok(self.guard("list_all")?.values().cloned().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
