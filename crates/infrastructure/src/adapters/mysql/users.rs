//! MySQL implementation of the user repository.

use chrono::NaiveDate;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

use filmotek_domain::user::{Birthday, Email, Login, User, UserDraft, UserId, UserPatch};
use filmotek_workflow::errors::WorkflowError;
use filmotek_workflow::ports::{UserRepository, WorkflowResult};

use super::{MySqlPool, corrupt_row, storage_error};

// =============================================================================
// MySqlUserRepository
// =============================================================================

/// MySQL-backed user repository.
///
/// Identifier assignment is the `users` table's auto-increment column.
/// The login fallback for blank display names was already applied when
/// the draft or patch was built, so rows always carry a usable name.
#[derive(Debug, Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository on the given pool.
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// UserRepository Implementation
// =============================================================================

impl UserRepository for MySqlUserRepository {
    async fn create(&self, draft: UserDraft) -> WorkflowResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, login, name, birthday)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(draft.email().value())
        .bind(draft.login().value())
        .bind(draft.name())
        .bind(draft.birthday().map(|birthday| birthday.value()))
        .execute(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("create", &error))?;

        let id = UserId::new(result.last_insert_id() as i64);

        tracing::info!("Created user id={}, login={}", id, draft.login());
        Ok(User::new(id, draft))
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> WorkflowResult<User> {
        let mut user = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkflowError::not_found("User", id.to_string()))?;
        user.apply_patch(patch);

        sqlx::query(
            r#"
            UPDATE users
            SET email = ?, login = ?, name = ?, birthday = ?
            WHERE id = ?
            "#,
        )
        .bind(user.email().value())
        .bind(user.login().value())
        .bind(user.name())
        .bind(user.birthday().map(|birthday| birthday.value()))
        .bind(id.value())
        .execute(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("update", &error))?;

        tracing::info!("Updated user id={}, login={}", id, user.login());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> WorkflowResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, login, name, birthday
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("find_by_id", &error))?;

        row.map(|row| user_from_row("find_by_id", &row)).transpose()
    }

    async fn list_all(&self) -> WorkflowResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, email, login, name, birthday
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_inner())
        .await
        .map_err(|error| storage_error("list_all", &error))?;

        rows.iter()
            .map(|row| user_from_row("list_all", row))
            .collect()
    }
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Reconstructs a user aggregate from a `users` row.
pub(super) fn user_from_row(operation: &'static str, row: &MySqlRow) -> WorkflowResult<User> {
    let id: i64 = row
        .try_get("id")
        .map_err(|error| storage_error(operation, &error))?;
    let email: String = row
        .try_get("email")
        .map_err(|error| storage_error(operation, &error))?;
    let login: String = row
        .try_get("login")
        .map_err(|error| storage_error(operation, &error))?;
    let name: String = row
        .try_get("name")
        .map_err(|error| storage_error(operation, &error))?;
    let birthday: Option<NaiveDate> = row
        .try_get("birthday")
        .map_err(|error| storage_error(operation, &error))?;

    let email = Email::new(email).map_err(|error| corrupt_row(operation, error))?;
    let login = Login::new(login).map_err(|error| corrupt_row(operation, error))?;
    let birthday = birthday
        .map(Birthday::new)
        .transpose()
        .map_err(|error| corrupt_row(operation, error))?;

    let draft = UserDraft::new(email, login, Some(name), birthday);
    Ok(User::new(UserId::new(id), draft))
}
