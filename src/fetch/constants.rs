//! Constants for the fetch module (timeouts).

/// Default HTTP connect timeout (10 seconds).
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total per-request timeout (30 seconds; catalog pages are small).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
