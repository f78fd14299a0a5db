//! Error taxonomy for the session core.
//!
//! Every external call site classifies its failure into one of these
//! kinds; nothing in this crate propagates an unhandled fault. Retry,
//! where it exists, happens only at the next scheduled refresh tick.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No active identity session at probe time. This is the
    /// "not logged in" path, not an error path.
    #[error("no active session")]
    NotAuthenticated,

    /// The role resolver rejected the presented credential.
    #[error("credential rejected: {0}")]
    InvalidToken(String),

    /// Transient failure reaching an external collaborator.
    #[error("network failure: {0}")]
    Network(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
