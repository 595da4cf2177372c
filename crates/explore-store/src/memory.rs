//! Embedded in-memory decision store.
//!
//! Uses a `BTreeMap` keyed by the ordered (actor, recipient) pair as the
//! primary table — the map key *is* the at-most-one-row invariant — plus a
//! `BTreeSet<(recipient, actor)>` reverse index so recipient-side queries
//! are range scans instead of full walks:
//!
//! - **By actor**: range over the primary map at `(actor, MIN)..=(actor, MAX)`
//! - **By recipient**: range over the reverse index, then point-lookups
//!
//! Both access paths are `O(log n + k)`. Results come back actor-ascending
//! (a property of the `BTreeMap` ordering — backend-defined, not promised by
//! the contract).

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use explore_types::{Decision, ExploreError, Result, ServiceConfig, UserId, constants};

use crate::contract::DecisionStore;

#[derive(Debug, Default)]
struct StoreState {
    /// Next ID handed out by `create_user`.
    next_user_id: u64,
    /// Primary table: ordered (actor, recipient) pair → decision row.
    decisions: BTreeMap<(UserId, UserId), Decision>,
    /// Reverse index: (recipient, actor). Kept in lockstep with `decisions`.
    by_recipient: BTreeSet<(UserId, UserId)>,
}

/// In-memory [`DecisionStore`] for tests and embedded deployments.
///
/// A single write lock serializes all mutations, which trivially satisfies
/// the per-pair write serialization the contract demands.
#[derive(Debug)]
pub struct InMemoryDecisionStore {
    state: RwLock<StoreState>,
}

impl InMemoryDecisionStore {
    /// Create an empty store allocating user IDs from
    /// [`constants::FIRST_USER_ID`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_first_user_id(constants::FIRST_USER_ID)
    }

    /// Create an empty store honoring the configured ID allocation origin.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::with_first_user_id(config.first_user_id)
    }

    fn with_first_user_id(first: u64) -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_user_id: first,
                ..StoreState::default()
            }),
        }
    }

    /// Number of decision rows currently stored.
    pub async fn decision_count(&self) -> usize {
        self.state.read().await.decisions.len()
    }
}

impl Default for InMemoryDecisionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionStore for InMemoryDecisionStore {
    async fn create_user(&self) -> Result<UserId> {
        let mut state = self.state.write().await;
        let id = UserId(state.next_user_id);
        state.next_user_id += 1;
        Ok(id)
    }

    async fn create_decision(&self, actor: UserId, recipient: UserId, liked: bool) -> Result<()> {
        let mut state = self.state.write().await;
        if state.decisions.contains_key(&(actor, recipient)) {
            return Err(ExploreError::DecisionAlreadyExists { actor, recipient });
        }
        state
            .decisions
            .insert((actor, recipient), Decision::new(actor, recipient, liked, Utc::now()));
        state.by_recipient.insert((recipient, actor));
        Ok(())
    }

    async fn update_decision(&self, actor: UserId, recipient: UserId, liked: bool) -> Result<()> {
        let mut state = self.state.write().await;
        let row = state
            .decisions
            .get_mut(&(actor, recipient))
            .ok_or(ExploreError::DecisionNotFound { actor, recipient })?;
        row.liked = liked;
        // Refreshed even when the value is unchanged: updated_at records the
        // last affirmation, not the last flip.
        row.updated_at = Utc::now();
        Ok(())
    }

    async fn find_decisions_by_recipient(
        &self,
        recipient: UserId,
        liked: Option<bool>,
    ) -> Result<Vec<Decision>> {
        let state = self.state.read().await;
        let mut out = Vec::new();
        for &(rec, actor) in state
            .by_recipient
            .range((recipient, UserId::MIN)..=(recipient, UserId::MAX))
        {
            let Some(row) = state.decisions.get(&(actor, rec)) else {
                return Err(ExploreError::Internal(format!(
                    "reverse index points at missing decision {actor} -> {rec}"
                )));
            };
            if liked.is_none_or(|want| row.liked == want) {
                out.push(row.clone());
            }
        }
        Ok(out)
    }

    async fn find_decisions_by_actor(
        &self,
        actor: UserId,
        liked: Option<bool>,
    ) -> Result<Vec<Decision>> {
        let state = self.state.read().await;
        Ok(state
            .decisions
            .range((actor, UserId::MIN)..=(actor, UserId::MAX))
            .filter(|(_, row)| liked.is_none_or(|want| row.liked == want))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn count_liked_decisions_for_recipient(&self, recipient: UserId) -> Result<u64> {
        let state = self.state.read().await;
        let mut count: u64 = 0;
        for &(rec, actor) in state
            .by_recipient
            .range((recipient, UserId::MIN)..=(recipient, UserId::MAX))
        {
            if state
                .decisions
                .get(&(actor, rec))
                .is_some_and(|row| row.liked)
            {
                count += 1;
            }
        }
        Ok(count)
    }

    async fn exists_mutual_like(&self, actor: UserId, recipient: UserId) -> Result<bool> {
        let state = self.state.read().await;
        let forward = state
            .decisions
            .get(&(actor, recipient))
            .is_some_and(|row| row.liked);
        let backward = state
            .decisions
            .get(&(recipient, actor))
            .is_some_and(|row| row.liked);
        Ok(forward && backward)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
