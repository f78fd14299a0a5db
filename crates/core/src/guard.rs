//! Per-navigation authorization check.
//!
//! This gate decides what the client renders; it is not the security
//! boundary of record. Every privileged operation is enforced again
//! server-side.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::credentials::CredentialStore;
use crate::identity::IdentityProvider;
use crate::routes::{Access, RouteTable};

/// Outcome of an authorization check for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the destination; no other side effect.
    Allow,
    /// No usable credential: send the caller to the login page.
    RedirectToLogin,
    /// Known identity, wrong role. Distinct from the login redirect.
    RedirectToUnauthorized,
}

/// Gates role-restricted routes, re-checked on every navigation.
///
/// Each check is a pure read-then-decide against the credential and role
/// observed at check time; nothing is cached across navigations and no
/// locking is needed against a concurrently running refresher.
pub struct AuthGuard<I, S> {
    identity: Arc<I>,
    store: Arc<S>,
    routes: RouteTable,
}

impl<I, S> Clone for AuthGuard<I, S> {
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            store: Arc::clone(&self.store),
            routes: self.routes.clone(),
        }
    }
}

impl<I, S> AuthGuard<I, S>
where
    I: IdentityProvider,
    S: CredentialStore,
{
    #[must_use]
    pub fn new(identity: Arc<I>, store: Arc<S>, routes: RouteTable) -> Self {
        Self {
            identity,
            store,
            routes,
        }
    }

    /// Decide whether the current caller may view `path`.
    ///
    /// Public routes are allowed without a backend call. For gated routes
    /// a missing credential redirects to login before any backend call,
    /// and a resolver failure of any kind also redirects to login: the
    /// guard cannot distinguish a bad token from an unreachable backend,
    /// so it fails closed. Refreshing the token is the keep-alive's job,
    /// never the guard's.
    pub async fn check(&self, path: &str) -> Decision {
        let required = match self.routes.classify(path) {
            Access::Public => {
                debug!(path, "public route, skipping authorization");
                return Decision::Allow;
            }
            Access::Requires(role) => role,
        };

        let Some(token) = self.store.current() else {
            debug!(path, "no stored credential, redirecting to login");
            return Decision::RedirectToLogin;
        };

        match self.identity.resolve_role(&token).await {
            Ok(role) if role == required => {
                debug!(path, role = %role, "authorized");
                Decision::Allow
            }
            Ok(role) => {
                debug!(path, required = %required, actual = %role, "role mismatch");
                Decision::RedirectToUnauthorized
            }
            Err(err) => {
                warn!(path, error = %err, "role resolution failed, failing closed");
                Decision::RedirectToLogin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::error::AuthError;
    use crate::identity::mock::MockIdentityProvider;
    use crate::role::Role;
    use crate::routes::LOGIN_PATH;

    fn guard(
        provider: MockIdentityProvider,
        store: Arc<MemoryCredentialStore>,
    ) -> AuthGuard<MockIdentityProvider, MemoryCredentialStore> {
        AuthGuard::new(Arc::new(provider), store, RouteTable::default())
    }

    #[tokio::test]
    async fn test_public_route_never_resolves_role() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_resolve_role().never();

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-1".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check(LOGIN_PATH).await, Decision::Allow);
        assert_eq!(guard.check("/").await, Decision::Allow);
    }

    #[tokio::test]
    async fn test_missing_credential_redirects_to_login_without_backend_call() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_resolve_role().never();

        let store = Arc::new(MemoryCredentialStore::default());
        let guard = guard(provider, store);
        assert_eq!(guard.check("/preceptor/home").await, Decision::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_role_mismatch_redirects_to_unauthorized() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .times(1)
            .returning(|_| Ok(Role::Facilitator));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-1".into());

        let guard = guard(provider, store);
        assert_eq!(
            guard.check("/preceptor/home").await,
            Decision::RedirectToUnauthorized
        );
    }

    #[tokio::test]
    async fn test_matching_role_allows() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .times(1)
            .returning(|_| Ok(Role::Preceptor));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-1".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check("/preceptor/home").await, Decision::Allow);
    }

    #[tokio::test]
    async fn test_rejected_token_fails_closed_to_login() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .times(1)
            .returning(|_| Err(AuthError::InvalidToken("expired".into())));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-stale".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check("/facilitator/home").await, Decision::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_network_failure_fails_closed_to_login() {
        // Deliberate policy: an unreachable resolver is treated exactly
        // like a rejected token, denying access rather than allowing it.
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .times(1)
            .returning(|_| Err(AuthError::Network("resolver unreachable".into())));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-1".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check("/preceptor/home").await, Decision::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_stored_token_is_passed_verbatim_to_resolver() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .withf(|token| token == "tok-verbatim")
            .times(1)
            .returning(|_| Ok(Role::Preceptor));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-verbatim".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check("/preceptor/home").await, Decision::Allow);
    }

    #[tokio::test]
    async fn test_each_navigation_resolves_fresh() {
        // The role is never cached across checks: two navigations mean
        // two resolver calls.
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_resolve_role()
            .times(2)
            .returning(|_| Ok(Role::Preceptor));

        let store = Arc::new(MemoryCredentialStore::default());
        store.put("tok-1".into());

        let guard = guard(provider, store);
        assert_eq!(guard.check("/preceptor/home").await, Decision::Allow);
        assert_eq!(guard.check("/preceptor/feedback").await, Decision::Allow);
    }
}
