//! Request DTOs for API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Vocabulary References
// =============================================================================

/// Reference to a genre by its catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreRef {
    pub id: i64,
}

/// Reference to an MPA rating by its catalog id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpaRef {
    pub id: i64,
}

// =============================================================================
// Film Requests
// =============================================================================

/// Request body for creating a film.
///
/// # Examples
///
/// ```json
/// {
///   "name": "Stalker",
///   "description": "A guide leads two men through the Zone.",
///   "release_date": "1979-05-25",
///   "duration": 162,
///   "genres": [{"id": 2}],
///   "mpa": {"id": 1}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFilmRequest {
    /// The film title (non-blank).
    pub name: String,

    /// Optional description, at most 200 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Release date; not before 1895-12-28.
    pub release_date: NaiveDate,

    /// Running time in minutes, positive.
    pub duration: i32,

    /// Genre references; unknown ids are rejected.
    #[serde(default)]
    pub genres: Vec<GenreRef>,

    /// Optional MPA rating reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpa: Option<MpaRef>,
}

/// Request body for updating a film. The id is carried in the body;
/// absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFilmRequest {
    /// The film to update.
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<GenreRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpa: Option<MpaRef>,
}

// =============================================================================
// User Requests
// =============================================================================

/// Request body for registering a user.
///
/// # Examples
///
/// ```json
/// {
///   "email": "alice@example.com",
///   "login": "alice",
///   "name": "Alice",
///   "birthday": "1990-06-15"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email address; must contain `@`.
    pub email: String,

    /// Login; non-blank, no whitespace.
    pub login: String,

    /// Optional display name; blank falls back to the login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional birthday; not in the future.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

/// Request body for updating a user. The id is carried in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// The user to update.
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for the popular films listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularFilmsParams {
    /// Requested result size; defaults to 10, must be positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

// =============================================================================
// Tests
// =============================================================================
