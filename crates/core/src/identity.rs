//! External identity-provider surface.

use crate::error::Result;
use crate::role::Role;

/// A confirmed identity session, as reported by the provider probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
}

/// The identity provider consumed by the refresher and the guard.
///
/// The session itself is opaque to this core: it is only observed as
/// "exists" vs "absent" through [`probe_session`](Self::probe_session).
/// Futures are `Send` natively; browser implementations run on the single
/// wasm thread and are exempt.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Check whether an identity session is active.
    async fn probe_session(&self) -> Result<Identity>;

    /// Mint a fresh bearer token from the active session.
    async fn mint_token(&self) -> Result<String>;

    /// Resolve the role attached to `token`, failing if the token is
    /// invalid or expired.
    async fn resolve_role(&self, token: &str) -> Result<Role>;
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub IdentityProvider {}

        #[async_trait::async_trait]
        impl IdentityProvider for IdentityProvider {
            async fn probe_session(&self) -> Result<Identity>;
            async fn mint_token(&self) -> Result<String>;
            async fn resolve_role(&self, token: &str) -> Result<Role>;
        }
    }
}
