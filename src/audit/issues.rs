//! Configuration issues found by auditing a transition table.

use thiserror::Error;

/// A gap or inconsistency between the transition table and the registry.
///
/// Audit findings never change how actions are handled; every one of them
/// corresponds to an error (or a dead declaration) that would otherwise only
/// surface when the affected action is handled.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("Transition on {action} declared from unregistered state '{from}'")]
    UnknownSource { action: String, from: String },

    #[error("Transition on {action} from '{from}' targets unregistered state '{to}'")]
    UnknownTarget {
        action: String,
        from: String,
        to: String,
    },

    #[error("Transition on {action} from '{from}' is shadowed by an earlier declaration")]
    ShadowedDeclaration { action: String, from: String },

    #[error("State '{state}' has no declaration for action {action}")]
    MissingDeclaration { action: String, state: String },
}
