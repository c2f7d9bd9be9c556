//! # Interaction Errors
//!
//! The error taxonomy of the command-dispatch layer. Setup-time errors
//! (duplicate bindings) abort initialisation. Request-time errors are turned
//! into status-only responses at the resource boundary through
//! [`InteractionError::status`] and never escape it.

use crate::status::Status;
use crate::verb::Verb;

/// Errors raised while registering, resolving, or invoking commands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InteractionError {
    /// No command is registered for the (verb, path) pair.
    #[error("no command bound for {verb} {path}")]
    UnboundTransition { verb: Verb, path: String },

    /// A second command was registered for an already-bound (verb, path) pair.
    #[error("command already bound for {verb} {path}")]
    DuplicateBinding { verb: Verb, path: String },

    /// The resource variant never supports this verb.
    #[error("{verb} is not supported on {path}")]
    UnsupportedVerb { verb: Verb, path: String },

    /// A command broke the result contract.
    #[error("inconsistent result from {verb} {path}: {reason}")]
    InconsistentResult {
        verb: Verb,
        path: String,
        reason: String,
    },

    /// The bound command has the wrong shape for the verb being served.
    #[error("command bound for {verb} {path} is not a {expected} command")]
    IncompatibleCommand {
        verb: Verb,
        path: String,
        expected: &'static str,
    },
}

impl InteractionError {
    /// The status a resource reports when this error reaches its boundary.
    pub fn status(&self) -> Status {
        match self {
            InteractionError::UnboundTransition { .. } => Status::MethodNotAllowed,
            InteractionError::UnsupportedVerb { .. } => Status::NotImplemented,
            InteractionError::DuplicateBinding { .. }
            | InteractionError::InconsistentResult { .. }
            | InteractionError::IncompatibleCommand { .. } => Status::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_fixed_statuses() {
        let unbound = InteractionError::UnboundTransition {
            verb: Verb::Get,
            path: "/notes".into(),
        };
        assert_eq!(unbound.status(), Status::MethodNotAllowed);
        assert_eq!(unbound.to_string(), "no command bound for GET /notes");

        let unsupported = InteractionError::UnsupportedVerb {
            verb: Verb::Put,
            path: "/notes".into(),
        };
        assert_eq!(unsupported.status(), Status::NotImplemented);

        let inconsistent = InteractionError::InconsistentResult {
            verb: Verb::Post,
            path: "/notes".into(),
            reason: "missing representation".into(),
        };
        assert_eq!(inconsistent.status(), Status::InternalServerError);
    }
}
