//! # explore-types
//!
//! Shared types, errors, and configuration for the **OpenExplore** matching core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`]
//! - **Decision model**: [`Decision`] — one user's like/pass judgment about another
//! - **Read models**: [`Liker`]
//! - **Configuration**: [`ServiceConfig`]
//! - **Errors**: [`ExploreError`] with `XP_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod config;
pub mod constants;
pub mod decision;
pub mod error;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use explore_types::{UserId, Decision, ExploreError, ...};

pub use config::*;
pub use decision::*;
pub use error::*;
pub use ids::*;

// Constants are accessed via `explore_types::constants::FOO`
// (not re-exported to avoid name collisions).
