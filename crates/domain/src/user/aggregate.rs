//! The user aggregate and its create / partial-update inputs.

use super::{Birthday, Email, Login, UserId};

// =============================================================================
// User
// =============================================================================

/// A directory user.
///
/// The display name is a plain string: when a user registers or updates
/// with a blank name, the login stands in for it, so the stored name is
/// always non-blank. Friendship edges are not part of the aggregate;
/// they live in the friendship store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    email: Email,
    login: Login,
    name: String,
    birthday: Option<Birthday>,
}

impl User {
    /// Assembles a user from a store-assigned identifier and a draft.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        Self {
            id,
            email: draft.email,
            login: draft.login,
            name: draft.name,
            birthday: draft.birthday,
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn login(&self) -> &Login {
        &self.login
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Applies a partial update.
    ///
    /// Only the fields present in the patch change. A blank incoming
    /// name falls back to the login, matching registration semantics;
    /// the login is applied first so the fallback sees the new value.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(login) = patch.login {
            self.login = login;
        }
        if let Some(name) = patch.name {
            self.name = resolve_name(Some(name), &self.login);
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = Some(birthday);
        }
    }
}

// =============================================================================
// UserDraft
// =============================================================================

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    email: Email,
    login: Login,
    name: String,
    birthday: Option<Birthday>,
}

impl UserDraft {
    /// Creates a draft; an absent or blank `name` falls back to `login`.
    #[must_use]
    pub fn new(email: Email, login: Login, name: Option<String>, birthday: Option<Birthday>) -> Self {
        let name = resolve_name(name, &login);
        Self {
            email,
            login,
            name,
            birthday,
        }
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn login(&self) -> &Login {
        &self.login
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }
}

// =============================================================================
// UserPatch
// =============================================================================

/// Validated partial update for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<Email>,
    pub login: Option<Login>,
    pub name: Option<String>,
    pub birthday: Option<Birthday>,
}

impl UserPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.login.is_none()
            && self.name.is_none()
            && self.birthday.is_none()
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn resolve_name(name: Option<String>, login: &Login) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => login.value().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
