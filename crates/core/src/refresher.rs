//! Background token keep-alive.
//!
//! Once an active session is confirmed, a token is minted immediately and
//! re-minted on a fixed cadence so the credential store always holds a
//! usable bearer token while the user is active. This is a best-effort
//! keep-alive: a failed attempt is logged and the next scheduled attempt
//! still fires.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::credentials::CredentialStore;
use crate::error::AuthError;
use crate::identity::IdentityProvider;

/// Outcome of the activation probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No active session: nothing stored, nothing scheduled. The probe is
    /// not retried for this activation.
    Idle,
    /// Session confirmed and the initial mint attempted; the refresh
    /// cadence may start.
    Active,
}

/// Keeps a non-expired bearer token in the credential store while a
/// session is active, without user action.
pub struct TokenRefresher<I, S> {
    identity: Arc<I>,
    store: Arc<S>,
    interval: Duration,
}

impl<I, S> Clone for TokenRefresher<I, S> {
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            store: Arc::clone(&self.store),
            interval: self.interval,
        }
    }
}

impl<I, S> TokenRefresher<I, S>
where
    I: IdentityProvider,
    S: CredentialStore,
{
    #[must_use]
    pub fn new(identity: Arc<I>, store: Arc<S>) -> Self {
        Self {
            identity,
            store,
            interval: AuthConfig::REFRESH_INTERVAL,
        }
    }

    /// Override the refresh cadence. Must stay comfortably shorter than
    /// the backend token's expiry window.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Probe for an active session and, if one exists, mint and store the
    /// first token.
    ///
    /// [`Activation::Idle`] is the silent "not logged in" path: no store
    /// write, no error surfaced, and the caller must not start the
    /// cadence. A failed initial mint is non-fatal, like any other
    /// refresh attempt.
    pub async fn activate(&self) -> Activation {
        match self.identity.probe_session().await {
            Ok(identity) => {
                debug!(user_id = %identity.user_id, "session active, starting token keep-alive");
                self.refresh_once().await;
                Activation::Active
            }
            Err(AuthError::NotAuthenticated) => {
                debug!("no active session, token keep-alive stays idle");
                Activation::Idle
            }
            Err(err) => {
                warn!(error = %err, "session probe failed, token keep-alive stays idle");
                Activation::Idle
            }
        }
    }

    /// One independent mint-and-store attempt. On failure the previously
    /// stored token stays in place until a later attempt overwrites it.
    pub async fn refresh_once(&self) {
        match self.identity.mint_token().await {
            Ok(token) => self.store.put(token),
            Err(err) => warn!(error = %err, "token refresh failed, keeping previous token"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<I, S> TokenRefresher<I, S>
where
    I: IdentityProvider,
    S: CredentialStore,
{
    /// Drive the keep-alive until `shutdown` fires.
    ///
    /// An idle activation returns immediately and never creates the
    /// timer. Cancelling the token is the single teardown call, leaving
    /// no dangling scheduled work. Browser hosts drive
    /// [`activate`](Self::activate) and [`refresh_once`](Self::refresh_once)
    /// from their own timer instead.
    pub async fn run(self, shutdown: tokio_util::sync::CancellationToken) {
        if self.activate().await == Activation::Idle {
            return;
        }
        let start = tokio::time::Instant::now() + self.interval;
        let mut ticks = tokio::time::interval_at(start, self.interval);
        loop {
            tokio::select! {
                () = shutdown.cancelled() => {
                    debug!("token keep-alive stopped");
                    break;
                }
                _ = ticks.tick() => self.refresh_once().await,
            }
        }
    }
}
