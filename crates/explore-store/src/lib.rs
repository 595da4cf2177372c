//! # explore-store
//!
//! **Storage plane**: the [`DecisionStore`] contract consumed by the matching
//! core, plus the embedded in-memory implementation.
//!
//! ## Architecture
//!
//! The matching service never touches storage internals — it sees only this
//! narrow contract:
//!
//! ```text
//! MatchingService → dyn DecisionStore → { InMemoryDecisionStore, ... }
//! ```
//!
//! The store owns transactional integrity: concurrent writes for the same
//! ordered (actor, recipient) pair must be serialized so the at-most-one-row
//! invariant survives. The in-memory store satisfies this with a single
//! write lock per mutation; a SQL-backed store would use a uniqueness
//! constraint plus conditional update.

pub mod contract;
pub mod memory;

#[cfg(any(test, feature = "test-helpers"))]
pub mod fixtures;

pub use contract::DecisionStore;
pub use memory::InMemoryDecisionStore;
