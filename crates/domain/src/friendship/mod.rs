//! Friendship edge model.
//!
//! A friendship is a directed edge between two user identifiers with a
//! status. Absence of an edge is the implicit third state: edges only
//! exist once requested.

use std::fmt;
use std::str::FromStr;

use crate::common::ValidationError;

// =============================================================================
// FriendshipStatus
// =============================================================================

/// Status of a directed friendship edge.
///
/// `Requested` means one direction asked and the other has not agreed;
/// nothing is implied about the reverse edge. `Confirmed` is established
/// only by the confirm operation, which also upserts the reverse edge,
/// so confirmed friendships converge to symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FriendshipStatus {
    Requested,
    Confirmed,
}

impl FriendshipStatus {
    #[must_use]
    pub const fn is_requested(&self) -> bool {
        matches!(self, Self::Requested)
    }

    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }

    /// Returns the status as its persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Confirmed => "CONFIRMED",
        }
    }
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl FromStr for FriendshipStatus {
    type Err = ValidationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "REQUESTED" => Ok(Self::Requested),
            "CONFIRMED" => Ok(Self::Confirmed),
            _ => Err(ValidationError::invalid_format(
                "friendship_status",
                "REQUESTED or CONFIRMED",
            )),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
