//! Application state shared across handlers.

use std::sync::Arc;

use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state: one Arc per port implementation.
///
/// Generic over the four ports so the same router construction serves
/// both the MySQL and the in-memory backends.
#[derive(Clone)]
pub struct AppState<Films, Users, Likes, Friends>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    pub films: Arc<Films>,

    pub users: Arc<Users>,

    pub likes: Arc<Likes>,

    pub friendships: Arc<Friends>,
}

impl<Films, Users, Likes, Friends> AppState<Films, Users, Likes, Friends>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    #[must_use]
    pub fn new(films: Films, users: Users, likes: Likes, friendships: Friends) -> Self {
        Self {
            films: Arc::new(films),
            users: Arc::new(users),
            likes: Arc::new(likes),
            friendships: Arc::new(friendships),
        }
    }

    #[must_use]
    pub fn from_arc(
        films: Arc<Films>,
        users: Arc<Users>,
        likes: Arc<Likes>,
        friendships: Arc<Friends>,
    ) -> Self {
        Self {
            films,
            users,
            likes,
            friendships,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use filmotek_infrastructure::adapters::memory::{
        MemoryFilmRepository, MemoryFriendshipStore, MemoryLikeStore, MemoryUserRepository,
    };
    use rstest::rstest;

    fn state() -> AppState<
        MemoryFilmRepository,
        MemoryUserRepository,
        MemoryLikeStore,
        MemoryFriendshipStore,
    > {
        let films = MemoryFilmRepository::new();
        let likes = MemoryLikeStore::new(films.clone());
        AppState::new(
            films,
            MemoryUserRepository::new(),
            likes,
            MemoryFriendshipStore::new(),
        )
    }

    #[rstest]
    fn clone_shares_arc_references() {
        let first = state();
        let second = first.clone();

        assert!(Arc::ptr_eq(&first.films, &second.films));
        assert!(Arc::ptr_eq(&first.users, &second.users));
        assert!(Arc::ptr_eq(&first.likes, &second.likes));
        assert!(Arc::ptr_eq(&first.friendships, &second.friendships));
    }

    #[rstest]
    fn from_arc_accepts_pre_wrapped_dependencies() {
        let films = Arc::new(MemoryFilmRepository::new());
        let users = Arc::new(MemoryUserRepository::new());
        let likes = Arc::new(MemoryLikeStore::new(films.as_ref().clone()));
        let friendships = Arc::new(MemoryFriendshipStore::new());

        let state = AppState::from_arc(
            Arc::clone(&films),
            Arc::clone(&users),
            Arc::clone(&likes),
            Arc::clone(&friendships),
        );

        assert!(Arc::ptr_eq(&films, &state.films));
        assert!(Arc::ptr_eq(&friendships, &state.friendships));
    }
}
