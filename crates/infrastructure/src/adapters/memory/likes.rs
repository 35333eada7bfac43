//! In-memory like store.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};

use filmotek_domain::film::{Film, FilmId, rank_by_likes};
use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FilmRepository, LikeStore, WorkflowResult};

use super::films::MemoryFilmRepository;
use super::poisoned;

// =============================================================================
// MemoryLikeStore
// =============================================================================

/// In-memory like store.
///
/// Edges live in an ordered set of `(film, user)` pairs: set insertion
/// is the idempotence, set removal the no-op delete. The store shares
/// the film repository so `top` can join edges onto films and rank them
/// with [`rank_by_likes`], the same ordering the MySQL adapter pushes
/// into SQL.
#[derive(Debug, Clone)]
pub struct MemoryLikeStore {
    edges: Arc<Mutex<BTreeSet<(FilmId, UserId)>>>,
    films: MemoryFilmRepository,
}

impl MemoryLikeStore {
    /// Creates an empty like store over the given film repository.
    #[must_use]
    pub fn new(films: MemoryFilmRepository) -> Self {
        Self {
            edges: Arc::new(Mutex::new(BTreeSet::new())),
            films,
        }
    }

    fn guard(
        &self,
        operation: &'static str,
    ) -> WorkflowResult<MutexGuard<'_, BTreeSet<(FilmId, UserId)>>> {
        self.edges.lock().map_err(|_| poisoned(operation))
    }
}

// =============================================================================
// LikeStore Implementation
// =============================================================================

impl LikeStore for MemoryLikeStore {
    async fn add(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
        self.guard("add")?.insert((film_id, user_id));
        Ok(())
    }

    async fn remove(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
        self.guard("remove")?.remove(&(film_id, user_id));
        Ok(())
    }

    async fn count_for(&self, film_id: FilmId) -> WorkflowResult<u64> {
        let edges = self.guard("count_for")?;
        Ok(edges.iter().filter(|(film, _)| *film == film_id).count() as u64)
    }

    async fn top(&self, limit: u32) -> WorkflowResult<Vec<Film>> {
        let films = self.films.list_all().await?;

        let counts: Vec<(Film, u64)> = {
            let edges = self.guard("top")?;
            films
                .into_iter()
                .map(|film| {
                    let count =
                        edges.iter().filter(|(liked, _)| *liked == film.id()).count() as u64;
                    (film, count)
                })
                .collect()
        };

        Ok(rank_by_likes(counts, limit as usize))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use filmotek_domain::film::{FilmDraft, FilmTitle, ReleaseDate, RunningTime};
    use rstest::rstest;

    fn draft(title: &str) -> FilmDraft {
        FilmDraft::new(
            FilmTitle::new(title).unwrap(),
            None,
            ReleaseDate::new(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()).unwrap(),
            RunningTime::new(100).unwrap(),
            vec![],
            None,
        )
    }

    async fn store_with_films(count: usize) -> (MemoryFilmRepository, MemoryLikeStore) {
        let films = MemoryFilmRepository::new();
        for index in 0..count {
            films.create(draft(&format!("Film {}", index))).await.unwrap();
        }
        let likes = MemoryLikeStore::new(films.clone());
        (films, likes)
    }

    #[rstest]
    #[tokio::test]
    async fn add_is_idempotent() {
        let (_, likes) = store_with_films(1).await;
        let film = FilmId::new(1);
        let user = UserId::new(1);

        likes.add(film, user).await.unwrap();
        likes.add(film, user).await.unwrap();

        assert_eq!(likes.count_for(film).await.unwrap(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_absent_edge_is_noop() {
        let (_, likes) = store_with_films(1).await;

        likes.remove(FilmId::new(1), UserId::new(1)).await.unwrap();

        assert_eq!(likes.count_for(FilmId::new(1)).await.unwrap(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn count_for_counts_only_that_film() {
        let (_, likes) = store_with_films(2).await;

        likes.add(FilmId::new(1), UserId::new(1)).await.unwrap();
        likes.add(FilmId::new(1), UserId::new(2)).await.unwrap();
        likes.add(FilmId::new(2), UserId::new(1)).await.unwrap();

        assert_eq!(likes.count_for(FilmId::new(1)).await.unwrap(), 2);
        assert_eq!(likes.count_for(FilmId::new(2)).await.unwrap(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn top_orders_by_count_then_id() {
        // F1 and F2 tie on two likes each, F3 trails with one: the tie
        // breaks on ascending id, so the top two are F1, F2.
        let (_, likes) = store_with_films(3).await;

        for film in [1, 2] {
            likes.add(FilmId::new(film), UserId::new(1)).await.unwrap();
            likes.add(FilmId::new(film), UserId::new(2)).await.unwrap();
        }
        likes.add(FilmId::new(3), UserId::new(1)).await.unwrap();

        let top = likes.top(2).await.unwrap();

        let ids: Vec<i64> = top.iter().map(|film| film.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn top_with_limit_beyond_catalog_returns_everything() {
        let (_, likes) = store_with_films(2).await;

        let top = likes.top(50).await.unwrap();

        assert_eq!(top.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn top_on_empty_catalog_is_empty() {
        let (_, likes) = store_with_films(0).await;

        assert!(likes.top(10).await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn unliked_films_still_rank_by_id() {
        let (_, likes) = store_with_films(3).await;

        likes.add(FilmId::new(2), UserId::new(1)).await.unwrap();

        let top = likes.top(3).await.unwrap();

        let ids: Vec<i64> = top.iter().map(|film| film.id().value()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
