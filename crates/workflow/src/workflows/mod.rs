//! Application use cases.
//!
//! Each operation is a plain async function generic over the ports it
//! needs. Entity-existence checks always run before edge operations, so
//! an unknown identifier surfaces as a not-found error without the edge
//! store ever being touched.

pub mod catalog;
pub mod films;
pub mod friendships;
pub mod likes;
pub mod users;

// =============================================================================
// Shared Test Doubles
// =============================================================================

#[cfg(test)]
pub(crate) mod support {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;
    use filmotek_domain::film::{
        Film, FilmDraft, FilmId, FilmPatch, FilmTitle, ReleaseDate, RunningTime, rank_by_likes,
    };
    use filmotek_domain::friendship::FriendshipStatus;
    use filmotek_domain::user::{Email, Login, User, UserDraft, UserId, UserPatch};

    use crate::errors::WorkflowError;
    use crate::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository, WorkflowResult};

    pub fn film_draft(title: &str) -> FilmDraft {
        FilmDraft::new(
            FilmTitle::new(title).unwrap(),
            None,
            ReleaseDate::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()).unwrap(),
            RunningTime::new(100).unwrap(),
            vec![],
            None,
        )
    }

    pub fn user_draft(login: &str) -> UserDraft {
        UserDraft::new(
            Email::new(format!("{}@example.com", login)).unwrap(),
            Login::new(login).unwrap(),
            None,
            None,
        )
    }

    #[derive(Clone, Default)]
    pub struct MockFilms {
        films: Arc<Mutex<BTreeMap<FilmId, Film>>>,
        sequence: Arc<AtomicI64>,
    }

    impl MockFilms {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl FilmRepository for MockFilms {
        async fn create(&self, draft: FilmDraft) -> WorkflowResult<Film> {
            let id = FilmId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
            let film = Film::new(id, draft);
            self.films.lock().unwrap().insert(id, film.clone());
            Ok(film)
        }

        async fn update(&self, id: FilmId, patch: FilmPatch) -> WorkflowResult<Film> {
            let mut films = self.films.lock().unwrap();
            let film = films
                .get_mut(&id)
                .ok_or_else(|| WorkflowError::not_found("Film", id.to_string()))?;
            film.apply_patch(patch);
            Ok(film.clone())
        }

        async fn find_by_id(&self, id: FilmId) -> WorkflowResult<Option<Film>> {
            Ok(self.films.lock().unwrap().get(&id).cloned())
        }

        async fn list_all(&self) -> WorkflowResult<Vec<Film>> {
            Ok(self.films.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockUsers {
        users: Arc<Mutex<BTreeMap<UserId, User>>>,
        sequence: Arc<AtomicI64>,
    }

    impl MockUsers {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl UserRepository for MockUsers {
        async fn create(&self, draft: UserDraft) -> WorkflowResult<User> {
            let id = UserId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
            let user = User::new(id, draft);
            self.users.lock().unwrap().insert(id, user.clone());
            Ok(user)
        }

        async fn update(&self, id: UserId, patch: UserPatch) -> WorkflowResult<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .get_mut(&id)
                .ok_or_else(|| WorkflowError::not_found("User", id.to_string()))?;
            user.apply_patch(patch);
            Ok(user.clone())
        }

        async fn find_by_id(&self, id: UserId) -> WorkflowResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn list_all(&self) -> WorkflowResult<Vec<User>> {
            Ok(self.users.lock().unwrap().values().cloned().collect())
        }
    }

    #[derive(Clone)]
    pub struct MockLikes {
        edges: Arc<Mutex<BTreeSet<(FilmId, UserId)>>>,
        films: MockFilms,
    }

    impl MockLikes {
        pub fn new(films: MockFilms) -> Self {
            Self {
                edges: Arc::new(Mutex::new(BTreeSet::new())),
                films,
            }
        }

        pub fn edge_count(&self) -> usize {
            self.edges.lock().unwrap().len()
        }
    }

    impl LikeStore for MockLikes {
        async fn add(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
            self.edges.lock().unwrap().insert((film_id, user_id));
            Ok(())
        }

        async fn remove(&self, film_id: FilmId, user_id: UserId) -> WorkflowResult<()> {
            self.edges.lock().unwrap().remove(&(film_id, user_id));
            Ok(())
        }

        async fn count_for(&self, film_id: FilmId) -> WorkflowResult<u64> {
            let edges = self.edges.lock().unwrap();
            Ok(edges.iter().filter(|(film, _)| *film == film_id).count() as u64)
        }

        async fn top(&self, limit: u32) -> WorkflowResult<Vec<Film>> {
            let films = self.films.list_all().await?;
            let mut entries = Vec::with_capacity(films.len());
            for film in films {
                let count = self.count_for(film.id()).await?;
                entries.push((film, count));
            }
            Ok(rank_by_likes(entries, limit as usize))
        }
    }

    #[derive(Clone, Default)]
    pub struct MockFriends {
        edges: Arc<Mutex<BTreeMap<(UserId, UserId), FriendshipStatus>>>,
    }

    impl MockFriends {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn status(&self, from: UserId, to: UserId) -> Option<FriendshipStatus> {
            self.edges.lock().unwrap().get(&(from, to)).copied()
        }

        pub fn edge_count(&self) -> usize {
            self.edges.lock().unwrap().len()
        }
    }

    impl FriendshipStore for MockFriends {
        async fn request(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
            self.edges
                .lock()
                .unwrap()
                .entry((from, to))
                .or_insert(FriendshipStatus::Requested);
            Ok(())
        }

        async fn confirm(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
            let mut edges = self.edges.lock().unwrap();
            edges.insert((from, to), FriendshipStatus::Confirmed);
            edges.insert((to, from), FriendshipStatus::Confirmed);
            Ok(())
        }

        async fn remove(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
            self.edges.lock().unwrap().remove(&(from, to));
            Ok(())
        }

        async fn list_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
            let edges = self.edges.lock().unwrap();
            Ok(edges
                .keys()
                .filter(|(source, _)| *source == from)
                .map(|(_, target)| *target)
                .collect())
        }

        async fn list_confirmed_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
            let edges = self.edges.lock().unwrap();
            Ok(edges
                .iter()
                .filter(|((source, _), status)| *source == from && status.is_confirmed())
                .map(|((_, target), _)| *target)
                .collect())
        }
    }
}
