use thiserror::Error;

use crate::keys::TargetKey;
use crate::session::SessionPhase;

/// Contract violations raised by the session and round core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },

    #[error("Key catalog must contain at least one key")]
    EmptyCatalog,

    #[error("Key catalog lists {0} more than once")]
    DuplicateKey(TargetKey),
}

pub type SessionResult<T> = Result<T, SessionError>;
