//! System-wide constants for the OpenExplore matching core.

/// Default per-request deadline enforced at the RPC boundary (milliseconds).
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2_000;

/// First user ID handed out by `CreateUser`. IDs are sequential from here.
pub const FIRST_USER_ID: u64 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenExplore";
