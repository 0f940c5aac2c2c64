//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `wf-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("link endpoint '{0}' is not a node in the venue")]
    UnknownEndpoint(String),

    #[error("link {from} -> {to} has non-positive weight {weight}")]
    NonPositiveWeight {
        from: String,
        to: String,
        weight: f32,
    },

    #[error("link {from} -> {to} defined more than once")]
    DuplicateLink { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
