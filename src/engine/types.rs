//! Shared error types for the generation chain.

use crate::postprocessing::RejectedOutput;
use std::time::Duration;
use thiserror::Error;

/// Ways a single backend call can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Timeout after {after:?}")]
    Timeout { after: Duration },

    #[error("Service unavailable ({status}): {reason}")]
    Unavailable { status: u16, reason: String },

    #[error("Transport error: {reason}")]
    Transport { reason: String },

    #[error("Authentication failed: {reason}")]
    Auth { reason: String },
}

impl BackendError {
    /// Auth problems cannot be fixed by asking another backend.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BackendError::Auth { .. })
    }
}

/// Why one step of the chain did not produce an answer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AttemptError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Rejected: {0}")]
    Rejected(#[from] RejectedOutput),
}
