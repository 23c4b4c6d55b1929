//! Error types for document decoding, node handlers and walks.
//!
//! Codec failures are fatal to the decode call that raised them; walk failures are
//! fatal to the walk and are kept by the engine so later `step()` calls report them again.

use thiserror::Error;

/// Error when decoding, encoding or loading a dialogue document.
///
/// Returned by [`DocumentCodec`](crate::codec::DocumentCodec). No partial document is
/// ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not well-formed JSON, or does not have the document shape
    /// (`nodes` array, node entries with `kind`/`id`/`position`, valid fields).
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A node entry carries a `kind` tag with no mapping in the kind registry.
    #[error("unknown node kind: {0}")]
    UnknownNodeKind(String),

    /// Reading or writing a document file failed.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CodecError {
    fn from(e: std::io::Error) -> Self {
        CodecError::Io(e.to_string())
    }
}

/// Error produced by a node handler's computation.
///
/// Wrapped into [`WalkError::HandlerFailed`] by the engine together with the node id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The handler was registered for a kind whose payload it cannot read.
    #[error("expected node kind `{expected}`, found `{found}`")]
    UnexpectedKind { expected: String, found: String },

    /// The external actor the handler was waiting on went away (e.g. a dropped choice request).
    #[error("input abandoned: {0}")]
    Abandoned(String),

    /// Any other handler-specific failure.
    #[error("{0}")]
    Failed(String),
}

/// Error that ends a walk.
///
/// Stored in the engine's failed state; cloned out on every subsequent `step()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The document has no node of the start kind.
    #[error("document has no start node")]
    NoStartNode,

    /// The walk reached a node whose kind tag has no registered handler.
    #[error("no handler registered for node kind: {0}")]
    NoHandlerForKind(String),

    /// The handler for a node returned an error.
    #[error("handler failed at node {node_id}: {reason}")]
    HandlerFailed {
        node_id: String,
        #[source]
        reason: HandlerError,
    },

    /// `step()` was called before `start()`.
    #[error("walk has not been started")]
    NotStarted,

    /// `start()` was called on an engine that already left the not-started state.
    #[error("walk has already been started")]
    AlreadyStarted,

    /// The caller-supplied step budget ran out before the walk completed.
    #[error("step budget of {0} node evaluations exhausted")]
    StepBudgetExhausted(usize),
}
