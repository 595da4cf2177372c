//! User identifiers.
//!
//! The service treats users as opaque numeric identities. On the wire IDs
//! travel as decimal strings and are parsed back at the RPC boundary; a
//! string that does not parse is `XP_ERR_100 InvalidUserId`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExploreError;

/// Unique identifier for a user. Allocated sequentially by the decision
/// store, starting at [`crate::constants::FIRST_USER_ID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Smallest possible identifier. Used as a range-scan lower bound.
    pub const MIN: UserId = UserId(u64::MIN);

    /// Largest possible identifier. Used as a range-scan upper bound.
    pub const MAX: UserId = UserId(u64::MAX);

    /// Parse a wire-format (decimal string) user ID.
    ///
    /// # Errors
    /// Returns [`ExploreError::InvalidUserId`] if `raw` is not a decimal
    /// integer that fits in a `u64`.
    pub fn parse(raw: &str) -> Result<Self, ExploreError> {
        raw.parse()
    }
}

impl FromStr for UserId {
    type Err = ExploreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(UserId)
            .map_err(|_| ExploreError::InvalidUserId { raw: s.to_string() })
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
