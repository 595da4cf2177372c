//! Decision model: one user's like/pass judgment about another.
//!
//! Invariant: **at most one decision exists per ordered (actor, recipient)
//! pair**. A later decision from the same actor about the same recipient
//! updates the existing row's `liked` and `updated_at` in place — it never
//! inserts a second row. The mutual-match check relies on this.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// One directed judgment: `actor` liked (or passed on) `recipient`.
///
/// There is no deletion path — a "pass" is recorded as `liked = false`,
/// not removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The user who made the decision. Set once at creation; never changes.
    pub actor: UserId,
    /// The user being judged.
    pub recipient: UserId,
    /// `true` = like, `false` = pass.
    pub liked: bool,
    /// When the decision row was first created.
    pub created_at: DateTime<Utc>,
    /// When `liked` was last written. Equal to `created_at` until the first
    /// update.
    pub updated_at: DateTime<Utc>,
}

impl Decision {
    /// Create a fresh decision with both timestamps set to `at`.
    #[must_use]
    pub fn new(actor: UserId, recipient: UserId, liked: bool, at: DateTime<Utc>) -> Self {
        Self {
            actor,
            recipient,
            liked,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Read model for `ListLikedYou`: one user who likes the queried recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liker {
    /// The user whose decision targets the recipient.
    pub actor: UserId,
    /// When the like was last (re)affirmed — the decision's `updated_at`,
    /// not its `created_at`.
    pub liked_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
