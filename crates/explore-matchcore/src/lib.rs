//! # explore-matchcore
//!
//! **The matching core of OpenExplore.** Owns every domain decision rule:
//! how likes classify as mutual vs. one-sided, the new-liker exclusion
//! algorithm, and the upsert semantics of recording a decision. It has:
//!
//! - **No cross-request state**: every operation is a single independent
//!   round of store reads plus in-memory set logic
//! - **Explicit injection**: the [`DecisionStore`](explore_store::DecisionStore)
//!   implementation is passed into the constructor — no process-wide container
//! - **Pure set logic**: the new-liker difference is a standalone function
//!   with no side effects

pub mod liker_set;
pub mod service;

pub use liker_set::new_likers;
pub use service::MatchingService;
