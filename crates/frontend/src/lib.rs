//! Yew integration for the Ward session core.
//!
//! [`SessionKeepAlive`] owns the background token refresh for the
//! lifetime of the app shell, [`Guarded`] applies the authorization check
//! on every navigation, and [`storage`] exposes the persisted credential
//! slot to the rest of the application.

pub mod routes;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod guard;
#[cfg(target_arch = "wasm32")]
pub mod keepalive;

pub use routes::Route;
pub use storage::{clear_credential, current_token, BrowserCredentialStore};

#[cfg(target_arch = "wasm32")]
pub use api::HttpIdentityProvider;
#[cfg(target_arch = "wasm32")]
pub use guard::Guarded;
#[cfg(target_arch = "wasm32")]
pub use keepalive::SessionKeepAlive;

/// Initialize console logging for the wasm host.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::default());
}
