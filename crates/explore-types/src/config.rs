//! Configuration for OpenExplore services.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the matching service and its RPC surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Per-request deadline in milliseconds. Calls that do not finish within
    /// this window fail with `XP_ERR_300 DeadlineExceeded`.
    pub request_timeout_ms: u64,
    /// First user ID the store allocates. Sequential from here.
    pub first_user_id: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: constants::DEFAULT_REQUEST_TIMEOUT_MS,
            first_user_id: constants::FIRST_USER_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.request_timeout_ms, 2_000);
        assert_eq!(cfg.first_user_id, 1);
    }

    #[test]
    fn serde_round_trip() {
        let cfg = ServiceConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.request_timeout_ms, back.request_timeout_ms);
        assert_eq!(cfg.first_user_id, back.first_user_id);
    }
}
