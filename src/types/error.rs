//! # Walk Errors and Diagnostics
//!
//! Two kinds of problems come out of a walk over the semantic tree:
//!
//! - [`WalkError`] aborts the walk. The only one is running out of type
//!   letters.
//! - [`Diagnostic`] is reported and the walk carries on with whatever label it
//!   computed: type mismatches found by the type tree walk and node kinds the
//!   walks do not know how to label.

use serde::Serialize;
use thiserror::Error;

use crate::core::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    #[error("ran out of type letters: 'a' through 'z' are all in use")]
    LettersExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "diagnostic", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Two types that the labelling rules expect to agree do not
    #[error("Type error: type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: String,
        found: String,
        node: NodeId,
    },

    #[error("Unknown node type: {kind}")]
    UnknownNodeKind { kind: String, node: NodeId },
}

impl Diagnostic {
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>, node: NodeId) -> Self {
        Diagnostic::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
            node,
        }
    }

    pub fn unknown_node_kind(kind: impl Into<String>, node: NodeId) -> Self {
        Diagnostic::UnknownNodeKind {
            kind: kind.into(),
            node,
        }
    }

    pub fn node(&self) -> NodeId {
        match self {
            Diagnostic::TypeMismatch { node, .. } | Diagnostic::UnknownNodeKind { node, .. } => {
                *node
            }
        }
    }
}
