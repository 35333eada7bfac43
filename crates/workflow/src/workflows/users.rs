//! User directory use cases.

use filmotek_domain::user::{User, UserDraft, UserId, UserPatch};

use crate::errors::WorkflowError;
use crate::ports::{UserRepository, WorkflowResult};

// =============================================================================
// Create
// =============================================================================

/// Persists a new user. The draft already carries the login fallback for
/// a blank display name.
pub async fn create_user<Users>(users: &Users, draft: UserDraft) -> WorkflowResult<User>
where
    Users: UserRepository,
{
    users.create(draft).await
}

// =============================================================================
// Update
// =============================================================================

/// Applies a partial update to an existing user.
pub async fn update_user<Users>(
    users: &Users,
    id: UserId,
    patch: UserPatch,
) -> WorkflowResult<User>
where
    Users: UserRepository,
{
    users.update(id, patch).await
}

// =============================================================================
// Queries
// =============================================================================

/// Looks a user up, failing with a not-found error for unknown ids.
pub async fn get_user<Users>(users: &Users, id: UserId) -> WorkflowResult<User>
where
    Users: UserRepository,
{
    users
        .find_by_id(id)
        .await?
        .ok_or_else(|| WorkflowError::not_found("User", id.to_string()))
}

/// Returns the whole directory, ordered by id.
pub async fn list_users<Users>(users: &Users) -> WorkflowResult<Vec<User>>
where
    Users: UserRepository,
{
    users.list_all().await
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::support::{MockUsers, user_draft};
    use filmotek_domain::user::Email;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let users = MockUsers::new();

        let first = create_user(&users, user_draft("alice")).await.unwrap();
        let second = create_user(&users, user_draft("bob")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn create_falls_back_to_login_for_name() {
        let users = MockUsers::new();

        let created = create_user(&users, user_draft("carol")).await.unwrap();

        assert_eq!(created.name(), "carol");
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_patch() {
        let users = MockUsers::new();
        let user = create_user(&users, user_draft("dave")).await.unwrap();

        let updated = update_user(
            &users,
            user.id(),
            UserPatch {
                email: Some(Email::new("dave@new.example").unwrap()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.email().value(), "dave@new.example");
        assert_eq!(updated.login().value(), "dave");
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let users = MockUsers::new();

        let error = update_user(&users, UserId::new(5), UserPatch::default())
            .await
            .unwrap_err();

        assert!(error.is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn get_unknown_user_is_not_found() {
        let users = MockUsers::new();

        let error = get_user(&users, UserId::new(1)).await.unwrap_err();

        assert_eq!(error.to_string(), "User with identifier '1' not found");
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_users_in_id_order() {
        let users = MockUsers::new();
        create_user(&users, user_draft("a")).await.unwrap();
        create_user(&users, user_draft("b")).await.unwrap();

        let all = list_users(&users).await.unwrap();

        let ids: Vec<i64> = all.iter().map(|user| user.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
