//! Mapping from domain errors to wire error codes.
//!
//! The code set mirrors the gRPC status taxonomy the service would surface
//! behind a real transport. `NOT_FOUND` stays latent in practice: queries on
//! an absent recipient return empty results, not an error.

use serde::{Deserialize, Serialize};

use explore_types::ExploreError;

/// Wire error code for a domain error.
#[must_use]
pub fn error_code(err: &ExploreError) -> &'static str {
    match err {
        ExploreError::InvalidUserId { .. } => "INVALID_ARGUMENT",
        ExploreError::DecisionNotFound { .. } => "NOT_FOUND",
        ExploreError::DecisionAlreadyExists { .. } => "ALREADY_EXISTS",
        ExploreError::DeadlineExceeded { .. } => "DEADLINE_EXCEEDED",
        ExploreError::Store { .. } | ExploreError::Internal(_) => "INTERNAL",
    }
}

/// Serialized error shape for the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub code: String,
    pub message: String,
}

impl From<&ExploreError> for ErrorReply {
    fn from(err: &ExploreError) -> Self {
        if matches!(err, ExploreError::Store { .. } | ExploreError::Internal(_)) {
            tracing::warn!(error = %err, "request failed with internal error");
        }
        Self {
            code: error_code(err).to_string(),
            message: err.to_string(),
        }
    }
}
