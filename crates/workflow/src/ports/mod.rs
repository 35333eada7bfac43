//! Port definitions for the storage backends.
//!
//! Every port is `Clone + Send + Sync + 'static` and returns `Send`
//! futures, so implementations can be shared freely across request
//! handler tasks. Two families of adapters satisfy these contracts: the
//! MySQL adapters and the in-memory adapters in the infrastructure
//! crate.

use std::future::Future;

use filmotek_domain::film::{Film, FilmDraft, FilmId, FilmPatch};
use filmotek_domain::user::{User, UserDraft, UserId, UserPatch};

// =============================================================================
// Type Aliases for Workflow Results
// =============================================================================

pub type WorkflowResult<T> = Result<T, crate::errors::WorkflowError>;

// =============================================================================
// FilmRepository
// =============================================================================

/// Storage for film entities. The store owns identifier assignment.
pub trait FilmRepository: Clone + Send + Sync + 'static {
    /// Persists a new film and returns it with its assigned identifier.
    fn create(&self, draft: FilmDraft) -> impl Future<Output = WorkflowResult<Film>> + Send;

    /// Applies a partial update and returns the updated film.
    ///
    /// Fails with a not-found error for an unknown identifier; an
    /// invalid patch never reaches this point, so a failed update never
    /// leaves a film half-modified.
    fn update(
        &self,
        id: FilmId,
        patch: FilmPatch,
    ) -> impl Future<Output = WorkflowResult<Film>> + Send;

    /// Looks a film up by identifier.
    fn find_by_id(&self, id: FilmId) -> impl Future<Output = WorkflowResult<Option<Film>>> + Send;

    /// Returns all films, ordered by identifier.
    fn list_all(&self) -> impl Future<Output = WorkflowResult<Vec<Film>>> + Send;
}

// =============================================================================
// UserRepository
// =============================================================================

/// Storage for user entities. The store owns identifier assignment.
pub trait UserRepository: Clone + Send + Sync + 'static {
    /// Persists a new user and returns it with its assigned identifier.
    fn create(&self, draft: UserDraft) -> impl Future<Output = WorkflowResult<User>> + Send;

    /// Applies a partial update and returns the updated user.
    fn update(
        &self,
        id: UserId,
        patch: UserPatch,
    ) -> impl Future<Output = WorkflowResult<User>> + Send;

    /// Looks a user up by identifier.
    fn find_by_id(&self, id: UserId) -> impl Future<Output = WorkflowResult<Option<User>>> + Send;

    /// Returns all users, ordered by identifier.
    fn list_all(&self) -> impl Future<Output = WorkflowResult<Vec<User>>> + Send;
}

// =============================================================================
// LikeStore
// =============================================================================

/// Storage for like edges between users and films.
///
/// An edge is an unordered `(film, user)` pair with no payload; at most
/// one edge exists per pair. The store never checks that the referenced
/// entities exist; callers do that first through the repositories.
pub trait LikeStore: Clone + Send + Sync + 'static {
    /// Records a like. Inserting an existing edge is a no-op.
    fn add(
        &self,
        film_id: FilmId,
        user_id: UserId,
    ) -> impl Future<Output = WorkflowResult<()>> + Send;

    /// Removes a like. Removing an absent edge is a no-op, not an error.
    fn remove(
        &self,
        film_id: FilmId,
        user_id: UserId,
    ) -> impl Future<Output = WorkflowResult<()>> + Send;

    /// Returns the number of likes a film has received.
    fn count_for(&self, film_id: FilmId) -> impl Future<Output = WorkflowResult<u64>> + Send;

    /// Returns up to `limit` films ordered by like count descending,
    /// ties broken by ascending film id.
    fn top(&self, limit: u32) -> impl Future<Output = WorkflowResult<Vec<Film>>> + Send;
}

// =============================================================================
// FriendshipStore
// =============================================================================

/// Storage for directed friendship edges between users.
///
/// Edges move through `REQUESTED` and `CONFIRMED`; absence of a row is
/// the implicit initial state. As with likes, entity existence is the
/// caller's concern.
pub trait FriendshipStore: Clone + Send + Sync + 'static {
    /// Creates a `REQUESTED` edge `from → to` if no edge exists in that
    /// direction. Idempotent: an existing edge of any status is left
    /// untouched, so a request never downgrades a confirmed edge.
    fn request(
        &self,
        from: UserId,
        to: UserId,
    ) -> impl Future<Output = WorkflowResult<()>> + Send;

    /// Upserts the edge `from → to` to `CONFIRMED` and upserts the
    /// reciprocal edge `to → from` to `CONFIRMED` as well.
    ///
    /// No prior `REQUESTED` edge is required; confirming creates both
    /// edges outright. That contract is questionable but deliberate:
    /// clients already rely on it.
    fn confirm(
        &self,
        from: UserId,
        to: UserId,
    ) -> impl Future<Output = WorkflowResult<()>> + Send;

    /// Deletes the edge `from → to` only, whatever its status. The
    /// reciprocal edge, if present, is untouched. Idempotent.
    fn remove(
        &self,
        from: UserId,
        to: UserId,
    ) -> impl Future<Output = WorkflowResult<()>> + Send;

    /// Returns the targets of all edges `from → x`, any status, ordered
    /// by identifier.
    fn list_from(&self, from: UserId) -> impl Future<Output = WorkflowResult<Vec<UserId>>> + Send;

    /// Returns the targets of `CONFIRMED` edges `from → x`, ordered by
    /// identifier.
    fn list_confirmed_from(
        &self,
        from: UserId,
    ) -> impl Future<Output = WorkflowResult<Vec<UserId>>> + Send;
}
