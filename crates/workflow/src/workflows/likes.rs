//! Like use cases: endorsement edges and the popularity listing.

use filmotek_domain::common::ValidationError;
use filmotek_domain::film::{Film, FilmId};
use filmotek_domain::user::UserId;

use super::films::get_film;
use super::users::get_user;
use crate::ports::{FilmRepository, LikeStore, UserRepository, WorkflowResult};

// =============================================================================
// Constants
// =============================================================================

/// Result size of the popularity listing when the caller does not ask
/// for a specific one.
pub const DEFAULT_POPULAR_COUNT: u32 = 10;

// =============================================================================
// Add / Remove
// =============================================================================

/// Records a like from `user_id` on `film_id`.
///
/// Both entities are looked up first; an unknown id fails with
/// not-found before the like store is touched. Liking twice is a no-op.
pub async fn add_like<Films, Users, Likes>(
    films: &Films,
    users: &Users,
    likes: &Likes,
    film_id: FilmId,
    user_id: UserId,
) -> WorkflowResult<()>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
{
    get_user(users, user_id).await?;
    get_film(films, film_id).await?;
    likes.add(film_id, user_id).await
}

/// Removes a like. Removing one that was never given is a no-op.
pub async fn remove_like<Films, Users, Likes>(
    films: &Films,
    users: &Users,
    likes: &Likes,
    film_id: FilmId,
    user_id: UserId,
) -> WorkflowResult<()>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
{
    get_user(users, user_id).await?;
    get_film(films, film_id).await?;
    likes.remove(film_id, user_id).await
}

// =============================================================================
// Popular Films
// =============================================================================

/// Returns the most-liked films.
///
/// `count` absent defaults to [`DEFAULT_POPULAR_COUNT`]; zero or
/// negative is rejected. Asking for more films than exist is fine; the
/// listing just comes back shorter.
pub async fn popular_films<Likes>(likes: &Likes, count: Option<i64>) -> WorkflowResult<Vec<Film>>
where
    Likes: LikeStore,
{
    let limit = match count {
        None => DEFAULT_POPULAR_COUNT,
        Some(requested) if requested > 0 => requested.min(i64::from(u32::MAX)) as u32,
        Some(_) => {
            return Err(
                ValidationError::constraint_violation("count", "must be positive").into(),
            );
        }
    };

    likes.top(limit).await
}

// =============================================================================
// Tests
// =============================================================================
