//! Error types for the OpenExplore matching core.
//!
//! All errors use the `XP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Argument errors
//! - 2xx: Decision errors
//! - 3xx: Deadline errors
//! - 5xx: Storage errors
//! - 9xx: General / internal errors
//!
//! Callers classify errors **by variant** (see the `is_*` predicates), never
//! by comparing error instances — two separately constructed errors are not
//! the same value even when they carry the same fields.

use thiserror::Error;

use crate::ids::UserId;

/// Central error enum for all OpenExplore operations.
#[derive(Debug, Error)]
pub enum ExploreError {
    // =================================================================
    // Argument Errors (1xx)
    // =================================================================
    /// A wire-format user ID failed to parse as a decimal integer.
    #[error("XP_ERR_100: Invalid user id: {raw:?}")]
    InvalidUserId { raw: String },

    // =================================================================
    // Decision Errors (2xx)
    // =================================================================
    /// No decision row exists for the ordered (actor, recipient) pair.
    /// `PutDecision` treats this as "fall back to create"; it is never
    /// surfaced for plain queries (an absent recipient yields empty results).
    #[error("XP_ERR_200: Decision not found: {actor} -> {recipient}")]
    DecisionNotFound { actor: UserId, recipient: UserId },

    /// A decision row already exists for the ordered (actor, recipient)
    /// pair. The store refuses duplicate inserts; upserts are the caller's
    /// job via update-then-create.
    #[error("XP_ERR_201: Decision already exists: {actor} -> {recipient}")]
    DecisionAlreadyExists { actor: UserId, recipient: UserId },

    // =================================================================
    // Deadline Errors (3xx)
    // =================================================================
    /// The caller-supplied deadline expired before the operation finished.
    #[error("XP_ERR_300: Request deadline exceeded after {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },

    // =================================================================
    // Storage Errors (5xx)
    // =================================================================
    /// The decision store failed. `op` names the storage operation that was
    /// in flight so the failure carries operation-specific context.
    #[error("XP_ERR_500: Store error during {op}: {reason}")]
    Store { op: &'static str, reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("XP_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ExploreError>;

impl ExploreError {
    /// The caller sent an unparseable identifier.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidUserId { .. })
    }

    /// No decision row matched. This is the predicate `PutDecision` uses to
    /// pick the create branch of its upsert.
    #[must_use]
    pub fn is_decision_not_found(&self) -> bool {
        matches!(self, Self::DecisionNotFound { .. })
    }

    /// A duplicate insert was refused.
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::DecisionAlreadyExists { .. })
    }

    /// The request deadline expired.
    #[must_use]
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::DeadlineExceeded { .. })
    }
}
