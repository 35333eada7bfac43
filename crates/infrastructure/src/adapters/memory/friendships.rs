//! In-memory friendship store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use filmotek_domain::friendship::FriendshipStatus;
use filmotek_domain::user::UserId;
use filmotek_workflow::ports::{FriendshipStore, WorkflowResult};

use super::poisoned;

// =============================================================================
// MemoryFriendshipStore
// =============================================================================

/// In-memory friendship store.
///
/// Directed edges keyed by `(from, to)` in an ordered map, so the
/// per-user listings come out in id order. `request` uses the map's
/// entry API to leave existing edges untouched; `confirm` writes both
/// directions under one lock acquisition, which is the in-memory
/// equivalent of the MySQL adapter's transaction.
#[derive(Debug, Clone, Default)]
pub struct MemoryFriendshipStore {
    edges: Arc<Mutex<BTreeMap<(UserId, UserId), FriendshipStatus>>>,
}

impl MemoryFriendshipStore {
    /// Creates an empty friendship store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(
        &self,
        operation: &'static str,
    ) -> WorkflowResult<MutexGuard<'_, BTreeMap<(UserId, UserId), FriendshipStatus>>> {
        self.edges.lock().map_err(|_| poisoned(operation))
    }
}

// =============================================================================
// FriendshipStore Implementation
// =============================================================================

impl FriendshipStore for MemoryFriendshipStore {
    async fn request(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        self.guard("request")?
            .entry((from, to))
            .or_insert(FriendshipStatus::Requested);
        Ok(())
    }

    async fn confirm(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        let mut edges = self.guard("confirm")?;
        edges.insert((from, to), FriendshipStatus::Confirmed);
        edges.insert((to, from), FriendshipStatus::Confirmed);
        Ok(())
    }

    async fn remove(&self, from: UserId, to: UserId) -> WorkflowResult<()> {
        self.guard("remove")?.remove(&(from, to));
        Ok(())
    }

    async fn list_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
        let edges = self.guard("list_from")?;
        Ok(edges
            .keys()
            .filter(|(source, _)| *source == from)
            .map(|(_, target)| *target)
            .collect())
    }

    async fn list_confirmed_from(&self, from: UserId) -> WorkflowResult<Vec<UserId>> {
        let edges = self.guard("list_confirmed_from")?;
        Ok(edges
            .iter()
            .filter(|((source, _), status)| *source == from && status.is_confirmed())
            .map(|((_, target), _)| *target)
            .collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
