//! Like handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use filmotek_domain::film::FilmId;
use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};
use filmotek_workflow::workflows;

use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Add Like Handler
// =============================================================================

pub async fn add_like<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    workflows::likes::add_like(
        state.films.as_ref(),
        state.users.as_ref(),
        state.likes.as_ref(),
        FilmId::new(film_id),
        UserId::new(user_id),
    )
    .await?;

    Ok(StatusCode::OK)
}

// =============================================================================
// Remove Like Handler
// =============================================================================

pub async fn remove_like<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    workflows::likes::remove_like(
        state.films.as_ref(),
        state.users.as_ref(),
        state.likes.as_ref(),
        FilmId::new(film_id),
        UserId::new(user_id),
    )
    .await?;

    Ok(StatusCode::OK)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::extract::Query;
    use chrono::NaiveDate;
    use filmotek_infrastructure::adapters::memory::{
        MemoryFilmRepository, MemoryFriendshipStore, MemoryLikeStore, MemoryUserRepository,
    };
    use rstest::rstest;

    use crate::dto::request::{CreateFilmRequest, CreateUserRequest, PopularFilmsParams};
    use crate::handlers::films::{create_film, get_popular_films};
    use crate::handlers::users::create_user;

    type TestState = AppState<
        MemoryFilmRepository,
        MemoryUserRepository,
        MemoryLikeStore,
        MemoryFriendshipStore,
    >;

    fn state() -> TestState {
        let films = MemoryFilmRepository::new();
        let likes = MemoryLikeStore::new(films.clone());
        AppState::new(
            films,
            MemoryUserRepository::new(),
            likes,
            MemoryFriendshipStore::new(),
        )
    }

    async fn seed_film(state: &TestState, name: &str) -> i64 {
        let request = CreateFilmRequest {
            name: name.to_string(),
            description: None,
            release_date: NaiveDate::from_ymd_opt(2010, 7, 16).unwrap(),
            duration: 148,
            genres: vec![],
            mpa: None,
        };
        let (_, Json(film)) = create_film(State(state.clone()), Json(request))
            .await
            .unwrap();
        film.id
    }

    async fn seed_user(state: &TestState, login: &str) -> i64 {
        let request = CreateUserRequest {
            email: format!("{}@example.com", login),
            login: login.to_string(),
            name: None,
            birthday: None,
        };
        let (_, Json(user)) = create_user(State(state.clone()), Json(request))
            .await
            .unwrap();
        user.id
    }

    #[rstest]
    #[tokio::test]
    async fn add_like_then_popular_reflects_it() {
        let state = state();
        let first = seed_film(&state, "First").await;
        let second = seed_film(&state, "Second").await;
        let user = seed_user(&state, "alice").await;

        add_like(State(state.clone()), Path((second, user)))
            .await
            .unwrap();

        let Json(popular) = get_popular_films(
            State(state),
            Query(PopularFilmsParams { count: Some(2) }),
        )
        .await
        .unwrap();

        assert_eq!(popular[0].id, second);
        assert_eq!(popular[0].likes, 1);
        assert_eq!(popular[1].id, first);
    }

    #[rstest]
    #[tokio::test]
    async fn add_like_unknown_film_returns_not_found() {
        let state = state();
        let user = seed_user(&state, "alice").await;

        let error = add_like(State(state), Path((404, user))).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn add_like_unknown_user_returns_not_found() {
        let state = state();
        let film = seed_film(&state, "Film").await;

        let error = add_like(State(state), Path((film, 404))).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn remove_like_without_prior_like_is_ok() {
        let state = state();
        let film = seed_film(&state, "Film").await;
        let user = seed_user(&state, "alice").await;

        let status = remove_like(State(state), Path((film, user))).await.unwrap();

        assert_eq!(status, StatusCode::OK);
    }
}
