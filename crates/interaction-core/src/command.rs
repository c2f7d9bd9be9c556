//! # Commands
//!
//! Commands are the pluggable business logic behind each state transition.
//! Two shapes exist:
//!
//! - [`RetrievalCommand`] takes an identifier and returns a result. Bound to
//!   read verbs.
//! - [`MutationCommand`] takes an identifier (absent on creation) plus a
//!   representation payload and returns a result.
//!
//! Both are synchronous and `Send + Sync`: a command is invoked on whichever
//! worker handles the request, and the same instance serves concurrent
//! requests once setup has finished.
//!
//! A [`Command`] wraps either shape behind an `Arc` so that bindings are
//! cheap to clone out of the controller.

use crate::message::RestResponse;
use std::fmt;
use std::sync::Arc;

/// A command that reads a resource.
pub trait RetrievalCommand<R>: Send + Sync {
    fn get(&self, id: Option<&str>) -> RestResponse<R>;
}

/// A command that changes a resource using a supplied representation.
pub trait MutationCommand<R>: Send + Sync {
    fn execute(&self, id: Option<&str>, resource: R) -> RestResponse<R>;
}

impl<R, F> RetrievalCommand<R> for F
where
    F: Fn(Option<&str>) -> RestResponse<R> + Send + Sync,
{
    fn get(&self, id: Option<&str>) -> RestResponse<R> {
        self(id)
    }
}

impl<R, F> MutationCommand<R> for F
where
    F: Fn(Option<&str>, R) -> RestResponse<R> + Send + Sync,
{
    fn execute(&self, id: Option<&str>, resource: R) -> RestResponse<R> {
        self(id, resource)
    }
}

/// A command of either shape, as stored in a binding.
pub enum Command<R> {
    Retrieval(Arc<dyn RetrievalCommand<R>>),
    Mutation(Arc<dyn MutationCommand<R>>),
}

impl<R> Command<R> {
    pub fn retrieval(command: impl RetrievalCommand<R> + 'static) -> Self {
        Command::Retrieval(Arc::new(command))
    }

    pub fn mutation(command: impl MutationCommand<R> + 'static) -> Self {
        Command::Mutation(Arc::new(command))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::Retrieval(_) => "retrieval",
            Command::Mutation(_) => "mutation",
        }
    }
}

impl<R> Clone for Command<R> {
    fn clone(&self) -> Self {
        match self {
            Command::Retrieval(c) => Command::Retrieval(Arc::clone(c)),
            Command::Mutation(c) => Command::Mutation(Arc::clone(c)),
        }
    }
}

impl<R> fmt::Debug for Command<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command::{}", self.kind())
    }
}
