//! The matching service: the four query/command operations.
//!
//! Stateless request handler. Each operation issues one or more reads (plus
//! at most one write) against the injected [`DecisionStore`], applies
//! in-memory set logic, and returns a result. Nothing is cached between
//! calls; all state lives in the store.

use std::sync::Arc;

use explore_store::DecisionStore;
use explore_types::{Liker, Result, UserId};

use crate::liker_set::new_likers;

/// Stateless matching service over an injected decision store.
pub struct MatchingService {
    store: Arc<dyn DecisionStore>,
}

impl MatchingService {
    /// Build a service around the given store. The store is the only
    /// collaborator; there is no global registry to consult.
    #[must_use]
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    /// Everyone with an active like targeting `recipient`, each carrying the
    /// decision's `updated_at` (when the like was last reaffirmed, not when
    /// first created). Ordering is whatever the store returns. An unknown
    /// recipient yields an empty list, not an error.
    pub async fn list_liked_you(&self, recipient: UserId) -> Result<Vec<Liker>> {
        let decisions = self
            .store
            .find_decisions_by_recipient(recipient, Some(true))
            .await?;

        Ok(decisions
            .into_iter()
            .map(|d| Liker {
                actor: d.actor,
                liked_at: d.updated_at,
            })
            .collect())
    }

    /// Likers of `recipient` whom `recipient` has not liked back. Two
    /// independent fetches and a set difference — no storage-side join.
    pub async fn list_new_liked_you(&self, recipient: UserId) -> Result<Vec<UserId>> {
        let outbound = self
            .store
            .find_decisions_by_actor(recipient, Some(true))
            .await?;
        let inbound = self
            .store
            .find_decisions_by_recipient(recipient, Some(true))
            .await?;

        Ok(new_likers(&outbound, &inbound))
    }

    /// Number of distinct actors with an active like targeting `recipient`.
    pub async fn count_liked_you(&self, recipient: UserId) -> Result<u64> {
        self.store
            .count_liked_decisions_for_recipient(recipient)
            .await
    }

    /// Record `actor`'s judgment about `recipient` and report whether the
    /// pair is now mutual.
    ///
    /// Upsert: try the in-place update first; only when the store reports
    /// no matching row (checked by variant) fall back to creating the row.
    /// Exactly one row is created or mutated either way.
    ///
    /// The write and the mutuality read are two separate store calls — a
    /// reciprocal `put_decision` landing between them can make the returned
    /// flag stale. Known limitation; making the two atomic would need a
    /// transactional store API the contract deliberately does not promise.
    pub async fn put_decision(
        &self,
        actor: UserId,
        recipient: UserId,
        liked: bool,
    ) -> Result<bool> {
        match self.store.update_decision(actor, recipient, liked).await {
            Ok(()) => {}
            Err(err) if err.is_decision_not_found() => {
                self.store.create_decision(actor, recipient, liked).await?;
            }
            Err(err) => return Err(err),
        }

        let mutual = self.store.exists_mutual_like(actor, recipient).await?;
        tracing::debug!(%actor, %recipient, liked, mutual, "decision recorded");
        Ok(mutual)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
