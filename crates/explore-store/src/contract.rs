//! The `DecisionStore` contract.
//!
//! Every method is `async`: storage round-trips are the only await points in
//! the system. Cancellation rides on future cancellation — dropping an
//! in-flight call aborts it — and deadlines are enforced by the caller
//! (the RPC surface wraps each operation in a timeout).

use async_trait::async_trait;

use explore_types::{Decision, Result, UserId};

/// Narrow repository contract over decision storage.
///
/// ## Obligations on implementations
///
/// - **At-most-one-row**: at most one [`Decision`] per ordered
///   (actor, recipient) pair. Concurrent writes for the same pair must be
///   serialized (lock, uniqueness constraint + conditional update, or
///   equivalent isolation).
/// - **No internal upsert**: [`create_decision`](Self::create_decision)
///   refuses duplicates and [`update_decision`](Self::update_decision)
///   refuses absent rows; the caller owns the update-then-create branch.
/// - **Ordering**: query results come back in backend-defined order; callers
///   must not assume any particular sort.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Provision a new opaque user identity.
    async fn create_user(&self) -> Result<UserId>;

    /// Insert a fresh decision row with both timestamps set to now.
    ///
    /// # Errors
    /// [`ExploreError::DecisionAlreadyExists`](explore_types::ExploreError::DecisionAlreadyExists)
    /// if a row for the ordered pair already exists.
    async fn create_decision(&self, actor: UserId, recipient: UserId, liked: bool) -> Result<()>;

    /// Overwrite `liked` on an existing row and refresh `updated_at`.
    ///
    /// # Errors
    /// [`ExploreError::DecisionNotFound`](explore_types::ExploreError::DecisionNotFound)
    /// if no row exists for the ordered pair; the caller then falls back to
    /// [`create_decision`](Self::create_decision).
    async fn update_decision(&self, actor: UserId, recipient: UserId, liked: bool) -> Result<()>;

    /// All decisions targeting `recipient`, optionally filtered by `liked`.
    /// An unknown recipient yields an empty list, not an error.
    async fn find_decisions_by_recipient(
        &self,
        recipient: UserId,
        liked: Option<bool>,
    ) -> Result<Vec<Decision>>;

    /// All decisions made by `actor`, optionally filtered by `liked`.
    async fn find_decisions_by_actor(
        &self,
        actor: UserId,
        liked: Option<bool>,
    ) -> Result<Vec<Decision>>;

    /// Number of distinct actors with `liked = true` decisions targeting
    /// `recipient`.
    async fn count_liked_decisions_for_recipient(&self, recipient: UserId) -> Result<u64>;

    /// Whether both directed likes exist: Decision(actor → recipient,
    /// liked) and Decision(recipient → actor, liked). Two existence checks;
    /// the at-most-one-row invariant makes counting unnecessary.
    async fn exists_mutual_like(&self, actor: UserId, recipient: UserId) -> Result<bool>;
}
