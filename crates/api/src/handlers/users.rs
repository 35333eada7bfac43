//! User directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FilmRepository, FriendshipStore, LikeStore, UserRepository};
use filmotek_workflow::workflows;

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::UserResponse;
use crate::dto::{user_draft_from_request, user_patch_from_request, user_to_response};
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Create User Handler
// =============================================================================

pub async fn create_user<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let draft = user_draft_from_request(request)?;
    let user = workflows::users::create_user(state.users.as_ref(), draft).await?;

    Ok((StatusCode::CREATED, Json(user_to_response(&user))))
}

// =============================================================================
// Update User Handler
// =============================================================================

pub async fn update_user<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let (id, patch) = user_patch_from_request(request)?;
    let user = workflows::users::update_user(state.users.as_ref(), id, patch).await?;

    Ok(Json(user_to_response(&user)))
}

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn get_user<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let user = workflows::users::get_user(state.users.as_ref(), UserId::new(user_id)).await?;

    Ok(Json(user_to_response(&user)))
}

pub async fn get_users<Films, Users, Likes, Friends>(
    State(state): State<AppState<Films, Users, Likes, Friends>>,
) -> Result<Json<Vec<UserResponse>>, ApiError>
where
    Films: FilmRepository,
    Users: UserRepository,
    Likes: LikeStore,
    Friends: FriendshipStore,
{
    let users = workflows::users::list_users(state.users.as_ref()).await?;

    Ok(Json(users.iter().map(user_to_response).collect()))
}

// =============================================================================
// Tests
// =============================================================================
