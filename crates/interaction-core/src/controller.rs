//! # Command Controller
//!
//! The registry that binds (verb, resource path) pairs to commands for one
//! resource. Registration happens during setup; afterwards the controller is
//! only read, so it can be shared across workers behind an `Arc` without any
//! locking.

use crate::command::{Command, RetrievalCommand};
use crate::config::BindingPolicy;
use crate::error::InteractionError;
use crate::verb::Verb;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// Maps (verb, resource path) to the command that executes the transition.
///
/// At most one binding exists per pair. Whether a second registration is
/// rejected or replaces the first is fixed at construction by
/// [`BindingPolicy`].
pub struct CommandController<R> {
    resource_path: String,
    policy: BindingPolicy,
    bindings: HashMap<(Verb, String), Command<R>>,
}

impl<R> CommandController<R> {
    /// A controller for `resource_path` that rejects duplicate bindings.
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self::with_policy(resource_path, BindingPolicy::default())
    }

    pub fn with_policy(resource_path: impl Into<String>, policy: BindingPolicy) -> Self {
        Self {
            resource_path: resource_path.into(),
            policy,
            bindings: HashMap::new(),
        }
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    pub fn policy(&self) -> BindingPolicy {
        self.policy
    }

    /// Binds `command` to (`verb`, `resource_path`).
    ///
    /// # Errors
    ///
    /// [`InteractionError::DuplicateBinding`] if the pair is already bound and
    /// the policy is [`BindingPolicy::Reject`].
    pub fn register(
        &mut self,
        verb: Verb,
        resource_path: impl Into<String>,
        command: Command<R>,
    ) -> Result<(), InteractionError> {
        let path = resource_path.into();
        let key = (verb, path);
        if self.bindings.contains_key(&key) {
            match self.policy {
                BindingPolicy::Reject => {
                    warn!(%verb, path = %key.1, "Duplicate binding rejected");
                    return Err(InteractionError::DuplicateBinding {
                        verb,
                        path: key.1,
                    });
                }
                BindingPolicy::Override => {
                    debug!(%verb, path = %key.1, "Replacing binding");
                }
            }
        }
        debug!(%verb, path = %key.1, kind = command.kind(), "Registered");
        self.bindings.insert(key, command);
        Ok(())
    }

    /// Resolves the command bound to (`verb`, `resource_path`).
    pub fn resolve_transition(
        &self,
        verb: Verb,
        resource_path: &str,
    ) -> Result<Command<R>, InteractionError> {
        self.bindings
            .get(&(verb, resource_path.to_string()))
            .cloned()
            .ok_or_else(|| InteractionError::UnboundTransition {
                verb,
                path: resource_path.to_string(),
            })
    }

    /// Resolves the GET command for this controller's own path.
    ///
    /// # Errors
    ///
    /// [`InteractionError::UnboundTransition`] if nothing is bound, or
    /// [`InteractionError::IncompatibleCommand`] if a mutation command is.
    pub fn resolve_retrieval_command(
        &self,
    ) -> Result<Arc<dyn RetrievalCommand<R>>, InteractionError> {
        match self.resolve_transition(Verb::Get, &self.resource_path)? {
            Command::Retrieval(command) => Ok(command),
            Command::Mutation(_) => Err(InteractionError::IncompatibleCommand {
                verb: Verb::Get,
                path: self.resource_path.clone(),
                expected: "retrieval",
            }),
        }
    }

    /// The verbs that have a binding for `resource_path`.
    pub fn bound_verbs(&self, resource_path: &str) -> BTreeSet<Verb> {
        self.bindings
            .keys()
            .filter(|(_, path)| path == resource_path)
            .map(|(verb, _)| *verb)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<R> std::fmt::Debug for CommandController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandController")
            .field("resource_path", &self.resource_path)
            .field("policy", &self.policy)
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
