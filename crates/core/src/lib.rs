//! Ward session core: credential lifecycle and route authorization.
//!
//! A short-lived bearer token is minted from the identity provider's
//! longer-lived session, kept fresh in the background by the
//! [`TokenRefresher`], persisted in a [`CredentialStore`], and checked
//! against the static [`RouteTable`] by the [`AuthGuard`] on every
//! navigation. The identity provider itself is an external collaborator
//! consumed through the [`IdentityProvider`] trait.

pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod identity;
pub mod refresher;
pub mod role;
pub mod routes;

pub use config::AuthConfig;
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use error::{AuthError, Result};
pub use guard::{AuthGuard, Decision};
pub use identity::{Identity, IdentityProvider};
pub use refresher::{Activation, TokenRefresher};
pub use role::Role;
pub use routes::{Access, RouteTable, LOGIN_PATH, UNAUTHORIZED_PATH};
