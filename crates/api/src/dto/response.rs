//! Response DTOs for API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Film Responses
// =============================================================================

/// A film as served to clients, with its vocabulary references resolved
/// and its like count joined on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmResponse {
    /// The film identifier.
    pub id: i64,

    /// The film title.
    pub name: String,

    /// The description, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The release date.
    pub release_date: NaiveDate,

    /// The running time in minutes.
    pub duration: i32,

    /// Resolved genres, ordered by id.
    pub genres: Vec<GenreResponse>,

    /// The resolved MPA rating, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpa: Option<MpaResponse>,

    /// Number of likes the film has received.
    pub likes: u64,
}

/// A genre as `(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

/// An MPA rating as `(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpaResponse {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// User Responses
// =============================================================================

/// A user as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// The user identifier.
    pub id: i64,

    /// The email address.
    pub email: String,

    /// The login.
    pub login: String,

    /// The display name (never blank).
    pub name: String,

    /// The birthday, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
}

// =============================================================================
// Health Response
// =============================================================================

/// Response for the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status.
    pub status: HealthStatusResponse,

    /// Application version.
    pub version: String,
}

/// Health status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatusResponse {
    /// All systems operational.
    Healthy,
}

// =============================================================================
// Error Response
// =============================================================================

/// JSON error body for all failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The error details.
    pub error: ErrorDetailResponse,
}

/// Error detail information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetailResponse {
    /// Error code for programmatic handling.
    pub code: String,

    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetailResponse {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
