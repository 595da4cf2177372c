//! # explore-api
//!
//! **RPC surface** for the OpenExplore matching core. Transport-agnostic:
//! a gRPC or HTTP layer deserializes into these DTOs and calls
//! [`ExploreHandler`]; framing, connection setup, and process bootstrap are
//! that layer's problem.
//!
//! This crate owns the boundary concerns:
//! - IDs travel as decimal strings and are parsed here (`INVALID_ARGUMENT`
//!   on failure)
//! - every call runs under the configured request deadline
//!   (`DEADLINE_EXCEEDED` on expiry)
//! - domain errors map to wire codes via [`error_code`] / [`ErrorReply`]

pub mod dto;
pub mod error;
pub mod handler;

pub use dto::*;
pub use error::{ErrorReply, error_code};
pub use handler::ExploreHandler;
