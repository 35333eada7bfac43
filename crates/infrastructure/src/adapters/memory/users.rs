//! In-memory user repository.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use filmotek_domain::user::{User, UserDraft, UserId, UserPatch};
use filmotek_workflow::errors::WorkflowError;
use filmotek_workflow::ports::{UserRepository, WorkflowResult};

use super::poisoned;

// =============================================================================
// MemoryUserRepository
// =============================================================================

/// In-memory user repository, same shape as the film variant.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<BTreeMap<UserId, User>>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(
        &self,
        operation: &'static str,
    ) -> WorkflowResult<MutexGuard<'_, BTreeMap<UserId, User>>> {
        self.users.lock().map_err(|_| poisoned(operation))
    }
}

// =============================================================================
// UserRepository Implementation
// =============================================================================

impl UserRepository for MemoryUserRepository {
    async fn create(&self, draft: UserDraft) -> WorkflowResult<User> {
        let id = UserId::new(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        let user = User::new(id, draft);
        self.guard("create")?.insert(id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> WorkflowResult<User> {
        let mut users = self.guard("update")?;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| WorkflowError::not_found("User", id.to_string()))?;
        user.apply_patch(patch);
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> WorkflowResult<Option<User>> {
        Ok(self.guard("find_by_id")?.get(&id).cloned())
    }

    async fn list_all(&self) -> WorkflowResult<Vec<User>> {
        Ok(self.guard("list_all")?.values().cloned().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use filmotek_domain::user::{Email, Login};
    use rstest::rstest;

    fn draft(login: &str) -> UserDraft {
        UserDraft::new(
            Email::new(format!("{}@example.com", login)).unwrap(),
            Login::new(login).unwrap(),
            None,
            None,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repository = MemoryUserRepository::new();

        let first = repository.create(draft("alice")).await.unwrap();
        let second = repository.create(draft("bob")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert_eq!(second.id(), UserId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn blank_name_falls_back_to_login() {
        let repository = MemoryUserRepository::new();

        let user = repository.create(draft("carol")).await.unwrap();

        assert_eq!(user.name(), "carol");
    }

    #[rstest]
    #[tokio::test]
    async fn update_applies_patch() {
        let repository = MemoryUserRepository::new();
        let created = repository.create(draft("dave")).await.unwrap();

        let updated = repository
            .update(
                created.id(),
                UserPatch {
                    email: Some(Email::new("dave@elsewhere.example").unwrap()),
                    ..UserPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email().value(), "dave@elsewhere.example");
        assert_eq!(updated.login().value(), "dave");
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let repository = MemoryUserRepository::new();

        let error = repository
            .update(UserId::new(7), UserPatch::default())
            .await
            .unwrap_err();

        assert!(error.is_not_found());
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_is_ordered_by_id() {
        let repository = MemoryUserRepository::new();
        repository.create(draft("a")).await.unwrap();
        repository.create(draft("b")).await.unwrap();

        let users = repository.list_all().await.unwrap();

        let ids: Vec<i64> = users.iter().map(|user| user.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
