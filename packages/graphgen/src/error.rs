//! Error taxonomy shared by construction, algorithms, generators and the text format.

use std::io;

/// Errors surfaced to callers. Structural no-ops (self-loops, missing endpoints,
/// duplicate edges) are not errors and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A generator parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A generator configuration lacks an option the chosen kind needs.
    #[error("missing parameter `{0}`")]
    MissingParameter(&'static str),

    /// An algorithm was asked to run on a graph without nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("start index {index} is out of range for a graph with {order} nodes")]
    StartIndexOutOfRange { index: usize, order: usize },

    #[error("unknown node `{0}`")]
    UnknownNode(String),

    /// Malformed textual graph description.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

impl GraphError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        GraphError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            line,
            message: message.into(),
        }
    }
}
