//! Fixed configuration for the session core.

use std::time::Duration;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Cadence of the background token refresh. Comfortably shorter than
    /// the backend token's own expiry window, so an active session never
    /// observes an expired token in normal use.
    pub const REFRESH_INTERVAL: Duration = Duration::from_secs(15 * 60);

    /// The same cadence in milliseconds, for the browser timer API.
    pub const REFRESH_INTERVAL_MS: u32 = 15 * 60 * 1000;

    /// Storage key for the persisted bearer token
    pub const TOKEN_STORAGE_KEY: &'static str = "ward.auth.token";
}
