//! Friendship use cases.
//!
//! All mutating operations verify that both users exist before touching
//! the edge store, and reject self-referential edges.

use std::collections::BTreeSet;

use filmotek_domain::common::ValidationError;
use filmotek_domain::user::{User, UserId};

use super::users::get_user;
use crate::ports::{FriendshipStore, UserRepository, WorkflowResult};

// =============================================================================
// Mutations
// =============================================================================

/// Files a friend request `user_id → friend_id`.
///
/// Requesting an already-existing edge (any status) is a no-op; in
/// particular a confirmed friendship is never downgraded back to a
/// request.
pub async fn request_friend<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
    friend_id: UserId,
) -> WorkflowResult<()>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    ensure_distinct(user_id, friend_id)?;
    get_user(users, user_id).await?;
    get_user(users, friend_id).await?;
    friendships.request(user_id, friend_id).await
}

/// Confirms the friendship `user_id → friend_id`, establishing the
/// reciprocal confirmed edge as well.
pub async fn confirm_friend<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
    friend_id: UserId,
) -> WorkflowResult<()>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    ensure_distinct(user_id, friend_id)?;
    get_user(users, user_id).await?;
    get_user(users, friend_id).await?;
    friendships.confirm(user_id, friend_id).await
}

/// Removes the edge `user_id → friend_id` only; the reciprocal edge is
/// untouched. Removing an absent edge is a no-op.
pub async fn remove_friend<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
    friend_id: UserId,
) -> WorkflowResult<()>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    ensure_distinct(user_id, friend_id)?;
    get_user(users, user_id).await?;
    get_user(users, friend_id).await?;
    friendships.remove(user_id, friend_id).await
}

// =============================================================================
// Queries
// =============================================================================

/// Returns the user's friends (targets of outgoing edges of any
/// status) resolved to full users, ordered by id.
pub async fn list_friends<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
) -> WorkflowResult<Vec<User>>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    get_user(users, user_id).await?;
    let ids = friendships.list_from(user_id).await?;
    resolve_users(users, &ids).await
}

/// Returns only the confirmed friends, resolved to full users.
pub async fn list_confirmed_friends<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
) -> WorkflowResult<Vec<User>>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    get_user(users, user_id).await?;
    let ids = friendships.list_confirmed_from(user_id).await?;
    resolve_users(users, &ids).await
}

/// Returns the friends two users have in common (intersection of their
/// outgoing edges, any status), ordered by id.
pub async fn common_friends<Users, Friends>(
    users: &Users,
    friendships: &Friends,
    user_id: UserId,
    other_id: UserId,
) -> WorkflowResult<Vec<User>>
where
    Users: UserRepository,
    Friends: FriendshipStore,
{
    get_user(users, user_id).await?;
    get_user(users, other_id).await?;

    let of_user = friendships.list_from(user_id).await?;
    let of_other: BTreeSet<UserId> = friendships.list_from(other_id).await?.into_iter().collect();

    let shared: Vec<UserId> = of_user
        .into_iter()
        .filter(|id| of_other.contains(id))
        .collect();
    resolve_users(users, &shared).await
}

// =============================================================================
// Helpers
// =============================================================================

fn ensure_distinct(user_id: UserId, friend_id: UserId) -> WorkflowResult<()> {
    if user_id == friend_id {
        return Err(
            ValidationError::constraint_violation("friend_id", "must differ from user_id").into(),
        );
    }
    Ok(())
}

async fn resolve_users<Users>(users: &Users, ids: &[UserId]) -> WorkflowResult<Vec<User>>
where
    Users: UserRepository,
{
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        resolved.push(get_user(users, *id).await?);
    }
    Ok(resolved)
}

// =============================================================================
// Tests
// =============================================================================
