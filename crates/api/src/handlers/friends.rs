//! Friendship handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};
use filmotek_workflow::workflows;

use crate::dto::response::UserResponse;
use crate::dto::user_to_response;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Mutation Handlers
// =============================================================================

pub async fn add_friend<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    workflows::friendships::request_friend(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
        UserId::new(friend_id),
    )
    .await?;

    Ok(StatusCode::OK)
}

pub async fn confirm_friend<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    workflows::friendships::confirm_friend(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
        UserId::new(friend_id),
    )
    .await?;

    Ok(StatusCode::OK)
}

pub async fn remove_friend<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    workflows::friendships::remove_friend(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
        UserId::new(friend_id),
    )
    .await?;

    Ok(StatusCode::OK)
}

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn get_friends<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let friends = workflows::friendships::list_friends(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
    )
    .await?;

    Ok(Json(friends.iter().map(user_to_response).collect()))
}

pub async fn get_confirmed_friends<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<UserResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let friends = workflows::friendships::list_confirmed_friends(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
    )
    .await?;

    Ok(Json(friends.iter().map(user_to_response).collect()))
}

pub async fn get_common_friends<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path((user_id, other_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<UserResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let friends = workflows::friendships::common_friends(
        state.users.as_ref(),
        state.friendships.as_ref(),
        UserId::new(user_id),
        UserId::new(other_id),
    )
    .await?;

    Ok(Json(friends.iter().map(user_to_response).collect()))
}

// =============================================================================
// Tests
// =============================================================================
