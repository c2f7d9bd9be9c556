//! # Resource Interaction Contract
//!
//! The [`ResourceInteractionModel`] trait is the runtime-facing contract every
//! resource honours. The transport calls one method per verb; the resource
//! resolves a command through its [`CommandController`](crate::CommandController),
//! invokes it, and shapes the result into a [`Response`].
//!
//! Resource kinds differ only in which [`Capability`] values they support.
//! There is no inheritance: a persisted-entity resource and the transient
//! resource both implement the same trait and declare their own set.
//!
//! ## Response shaping
//!
//! [`shape_response`] applies the one rule shared by all verbs:
//!
//! - successful family: the representation must be present. The response
//!   carries it, the status, and the allowed verbs.
//! - any other family: a bare status response, even if the command supplied
//!   a representation.

use crate::error::InteractionError;
use crate::message::{Response, RestResponse};
use crate::status::{Status, StatusFamily};
use crate::verb::Verb;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// One operation a resource can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    Retrieve,
    Create,
    Replace,
    Remove,
    DescribeOptions,
}

impl Capability {
    pub fn verb(&self) -> Verb {
        match self {
            Capability::Retrieve => Verb::Get,
            Capability::Create => Verb::Post,
            Capability::Replace => Verb::Put,
            Capability::Remove => Verb::Delete,
            Capability::DescribeOptions => Verb::Options,
        }
    }
}

/// The set of capabilities a resource instance supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities(BTreeSet<Capability>);

impl Capabilities {
    pub fn new(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self(capabilities.into_iter().collect())
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn supports(&self, verb: Verb) -> bool {
        self.0.iter().any(|c| c.verb() == verb)
    }

    pub fn verbs(&self) -> BTreeSet<Verb> {
        self.0.iter().map(Capability::verb).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

/// The contract between the transport and a resource.
///
/// `R` is the representation type carried in request and response bodies.
pub trait ResourceInteractionModel<R> {
    fn entity_name(&self) -> &str;

    fn resource_path(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// Retrieve the resource.
    fn get(&self, id: Option<&str>) -> Response<R>;

    /// Create a resource from `resource`.
    fn post(&self, id: Option<&str>, resource: R) -> Response<R>;

    /// Replace the resource with `resource`.
    fn put(&self, id: Option<&str>, resource: R) -> Response<R>;

    /// Remove the resource.
    fn delete(&self, id: Option<&str>) -> Response<R>;

    /// Describe the verbs the resource accepts.
    fn options(&self, id: Option<&str>) -> Response<R>;

    /// Routes a verb to the matching entry point.
    ///
    /// POST or PUT without a representation is a client error, unless the
    /// resource lacks that capability altogether, in which case the verb is
    /// not implemented. HEAD and PATCH have no entry point and are reported
    /// as not implemented.
    fn handle(&self, verb: Verb, id: Option<&str>, resource: Option<R>) -> Response<R> {
        match (verb, resource) {
            (Verb::Get, _) => self.get(id),
            (Verb::Post, Some(resource)) => self.post(id, resource),
            (Verb::Put, Some(resource)) => self.put(id, resource),
            (Verb::Post | Verb::Put, None) if !self.capabilities().supports(verb) => {
                error_response(&InteractionError::UnsupportedVerb {
                    verb,
                    path: self.resource_path().to_string(),
                })
            }
            (Verb::Post | Verb::Put, None) => Response::bare(Status::BadRequest),
            (Verb::Delete, _) => self.delete(id),
            (Verb::Options, _) => self.options(id),
            (Verb::Head | Verb::Patch, _) => Response::bare(Status::NotImplemented),
        }
    }
}

/// Turns a command result into a response.
///
/// `allowed` is used for the allowed-verbs annotation unless the command
/// declared its own interactions.
///
/// # Errors
///
/// [`InteractionError::InconsistentResult`] if a successful status arrives
/// without a representation.
pub fn shape_response<R>(
    verb: Verb,
    resource_path: &str,
    result: RestResponse<R>,
    allowed: BTreeSet<Verb>,
) -> Result<Response<R>, InteractionError> {
    let (status, resource, interactions) = result.into_parts();
    match status.family() {
        StatusFamily::Successful => {
            let entity = resource.ok_or_else(|| InteractionError::InconsistentResult {
                verb,
                path: resource_path.to_string(),
                reason: format!("{status} without a representation"),
            })?;
            Ok(Response::ok(status, entity).allow(interactions.unwrap_or(allowed)))
        }
        StatusFamily::Informational
        | StatusFamily::Redirection
        | StatusFamily::ClientError
        | StatusFamily::ServerError => Ok(Response::bare(status)),
    }
}

/// The status-only response for an error that reached the resource boundary.
///
/// Unbound and unsupported verbs are expected outcomes and log at debug.
/// Everything else points at a wiring or command fault.
pub fn error_response<R>(error: &InteractionError) -> Response<R> {
    match error {
        InteractionError::UnboundTransition { .. } | InteractionError::UnsupportedVerb { .. } => {
            debug!(error = %error, status = %error.status(), "Transition refused")
        }
        InteractionError::DuplicateBinding { .. }
        | InteractionError::InconsistentResult { .. }
        | InteractionError::IncompatibleCommand { .. } => {
            warn!(error = %error, status = %error.status(), "Transition failed")
        }
    }
    Response::bare(error.status())
}
