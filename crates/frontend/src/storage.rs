//! Browser-persisted credential slot.

use gloo::storage::{LocalStorage, Storage};
use ward_core::{AuthConfig, CredentialStore};

/// Credential store backed by `localStorage` under a single well-known
/// key, scoped to the browser profile. Survives page reloads; removed on
/// explicit logout; never shared across devices.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn current(&self) -> Option<String> {
        LocalStorage::get(AuthConfig::TOKEN_STORAGE_KEY).ok()
    }

    fn put(&self, token: String) {
        if let Err(err) = LocalStorage::set(AuthConfig::TOKEN_STORAGE_KEY, token) {
            tracing::warn!(error = %err, "failed to persist bearer token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(AuthConfig::TOKEN_STORAGE_KEY);
    }
}

/// Current bearer token, read by privileged outbound calls elsewhere in
/// the app to attach an `Authorization` header.
#[must_use]
pub fn current_token() -> Option<String> {
    BrowserCredentialStore.current()
}

/// Remove the stored credential on explicit logout. A full logout flow
/// must also unmount the keep-alive component so its timer is dropped.
pub fn clear_credential() {
    BrowserCredentialStore.clear();
}
