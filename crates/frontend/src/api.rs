//! HTTP client for the identity provider.
//!
//! Thin JSON wrapper over the Ward backend's auth endpoints. Session
//! cookies ride along automatically; only the role resolver needs the
//! bearer token attached explicitly.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use ward_core::{AuthError, Identity, IdentityProvider, Result, Role};

#[derive(Deserialize)]
struct SessionBody {
    user_id: String,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Deserialize)]
struct RoleBody {
    role: Role,
}

/// Identity-provider client speaking the backend's JSON endpoints.
/// An empty base URL issues same-origin relative requests.
#[derive(Debug, Clone, Default)]
pub struct HttpIdentityProvider {
    base: String,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

fn classify_status(response: &Response) -> Result<()> {
    match response.status() {
        200..=299 => Ok(()),
        401 => Err(AuthError::NotAuthenticated),
        status => Err(AuthError::Network(format!(
            "unexpected status {status} from {}",
            response.url()
        ))),
    }
}

fn network(err: gloo_net::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for HttpIdentityProvider {
    async fn probe_session(&self) -> Result<Identity> {
        let response = Request::get(&self.url("/api/auth/session"))
            .send()
            .await
            .map_err(network)?;
        classify_status(&response)?;
        let body: SessionBody = response.json().await.map_err(network)?;
        Ok(Identity {
            user_id: body.user_id,
        })
    }

    async fn mint_token(&self) -> Result<String> {
        let response = Request::post(&self.url("/api/auth/token"))
            .send()
            .await
            .map_err(network)?;
        classify_status(&response)?;
        let body: TokenBody = response.json().await.map_err(network)?;
        Ok(body.token)
    }

    async fn resolve_role(&self, token: &str) -> Result<Role> {
        let response = Request::get(&self.url("/api/users/me/role"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(network)?;
        match response.status() {
            200..=299 => {
                let body: RoleBody = response.json().await.map_err(network)?;
                Ok(body.role)
            }
            // The resolver rejecting the credential is the guard's
            // fail-closed path, not a transport fault.
            401 | 403 => Err(AuthError::InvalidToken(format!(
                "resolver rejected token with status {}",
                response.status()
            ))),
            status => Err(AuthError::Network(format!(
                "unexpected status {status} from role resolver"
            ))),
        }
    }
}
