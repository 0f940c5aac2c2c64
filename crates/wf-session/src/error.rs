//! Error types for wf-session.

use thiserror::Error;

/// Errors surfaced at the session's operator-facing boundaries.
///
/// Rider-facing flows never return these — a failed destination lookup
/// degrades to an empty route and a localized phrase instead.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An admin payload referenced a node key the venue does not have.
    #[error("node key '{0}' does not exist in the venue")]
    UnknownNode(String),

    /// Reading or writing the persisted enabled-set record failed.
    #[error("persistence i/o: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
