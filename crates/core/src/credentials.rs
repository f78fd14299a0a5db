//! The credential slot shared by the refresher and the guard.

use std::sync::Mutex;

/// Holds the current bearer token, if any.
///
/// Writes are whole-value replacements, so a reader never observes a torn
/// value; last-write-wins is sufficient. Only the token refresher writes,
/// the guard and privileged-call senders only read. Absent means "not
/// authenticated" from this core's point of view.
pub trait CredentialStore: Send + Sync {
    /// Current bearer token, if one is stored.
    fn current(&self) -> Option<String>;

    /// Replace the stored token.
    fn put(&self, token: String);

    /// Remove the stored token. Invoked on explicit logout; the caller is
    /// also responsible for tearing down the refresher's context.
    fn clear(&self);
}

/// Process-local store used by tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn current(&self) -> Option<String> {
        self.slot.lock().expect("credential slot poisoned").clone()
    }

    fn put(&self, token: String) {
        *self.slot.lock().expect("credential slot poisoned") = Some(token);
    }

    fn clear(&self) {
        *self.slot.lock().expect("credential slot poisoned") = None;
    }
}
