//! Film catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use filmotek_domain::film::{Film, FilmId};
use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};
use filmotek_workflow::workflows;

use crate::dto::request::{CreateFilmRequest, PopularFilmsParams, UpdateFilmRequest};
use crate::dto::response::FilmResponse;
use crate::dto::{film_draft_from_request, film_patch_from_request, film_to_response};
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Create Film Handler
// =============================================================================

pub async fn create_film<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Json(request): Json<CreateFilmRequest>,
) -> Result<(StatusCode, Json<FilmResponse>), ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let draft = film_draft_from_request(request)?;
    let film = workflows::films::create_film(state.films.as_ref(), draft).await?;

    // A freshly created film cannot have likes yet
    Ok((StatusCode::CREATED, Json(film_to_response(&film, 0))))
}

// =============================================================================
// Update Film Handler
// =============================================================================

pub async fn update_film<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Json(request): Json<UpdateFilmRequest>,
) -> Result<Json<FilmResponse>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let (id, patch) = film_patch_from_request(request)?;
    let film = workflows::films::update_film(state.films.as_ref(), id, patch).await?;

    Ok(Json(with_like_count(&state, &film).await?))
}

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn get_film<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path(film_id): Path<i64>,
) -> Result<Json<FilmResponse>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let film = workflows::films::get_film(state.films.as_ref(), FilmId::new(film_id)).await?;

    Ok(Json(with_like_count(&state, &film).await?))
}

pub async fn get_films<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
) -> Result<Json<Vec<FilmResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let films = workflows::films::list_films(state.films.as_ref()).await?;

    let mut responses = Vec::with_capacity(films.len());
    for film in &films {
        responses.push(with_like_count(&state, film).await?);
    }
    Ok(Json(responses))
}

pub async fn get_popular_films<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Query(params): Query<PopularFilmsParams>,
) -> Result<Json<Vec<FilmResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let films = workflows::likes::popular_films(state.likes.as_ref(), params.count).await?;

    let mut responses = Vec::with_capacity(films.len());
    for film in &films {
        responses.push(with_like_count(&state, film).await?);
    }
    Ok(Json(responses))
}

// =============================================================================
// Helpers
// =============================================================================

async fn with_like_count<Films, Users, Likes, Friends>(
    state: &AppState<Films, Users, Likes, Friends>,
    film: &Film,
) -> Result<FilmResponse, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let likes = state.likes.count_for(film.id()).await?;
    Ok(film_to_response(film, likes))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::request::{GenreRef, MpaRef};
    use chrono::NaiveDate;
    use filmotek_infrastructure::adapters::memory::{
        MemoryFilmRepository, MemoryFriendshipStore, MemoryLikeStore, MemoryUserRepository,
    };
    use rstest::rstest;

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

    fn request(name: &str) -> CreateFilmRequest {
        CreateFilmRequest {
            name: name.to_string(),
            description: Some("A film.".to_string()),
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            duration: 170,
            genres: vec![GenreRef { id: 6 }, GenreRef { id: 2 }],
            mpa: Some(MpaRef { id: 4 }),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_film_returns_created_with_assigned_id() {
        let state = state();

        let (status, Json(response)) =
            create_film(State(state), Json(request("Heat"))).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Heat");
        assert_eq!(response.likes, 0);
        // Genres come back ordered by id
        let genre_ids: Vec<i64> = response.genres.iter().map(|genre| genre.id).collect();
        assert_eq!(genre_ids, vec![2, 6]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_film_rejects_early_release_date() {
        let state = state();
        let mut bad = request("Too Early");
        bad.release_date = NaiveDate::from_ymd_opt(1895, 12, 27).unwrap();

        let error = create_film(State(state), Json(bad)).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn update_film_merges_fields() {
        let state = state();
        create_film(State(state.clone()), Json(request("Original")))
            .await
            .unwrap();

        let update = UpdateFilmRequest {
            id: 1,
            name: Some("Updated".to_string()),
            description: None,
            release_date: None,
            duration: None,
            genres: None,
            mpa: None,
        };
        let Json(response) = update_film(State(state), Json(update)).await.unwrap();

        assert_eq!(response.name, "Updated");
        assert_eq!(response.duration, 170);
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_film_returns_not_found() {
        let state = state();

        let update = UpdateFilmRequest {
            id: 42,
            name: None,
            description: None,
            release_date: None,
            duration: None,
            genres: None,
            mpa: None,
        };
        let error = update_film(State(state), Json(update)).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn get_unknown_film_returns_not_found() {
        let state = state();

        let error = get_film(State(state), Path(9)).await.unwrap_err();

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn get_films_lists_in_id_order() {
        let state = state();
        create_film(State(state.clone()), Json(request("First")))
            .await
            .unwrap();
        create_film(State(state.clone()), Json(request("Second")))
            .await
            .unwrap();

        let Json(films) = get_films(State(state)).await.unwrap();

        let ids: Vec<i64> = films.iter().map(|film| film.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn popular_rejects_non_positive_count() {
        let state = state();

        let error = get_popular_films(
            State(state),
            Query(PopularFilmsParams { count: Some(0) }),
        )
        .await
        .unwrap_err();

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
