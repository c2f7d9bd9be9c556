//! # Transition Results and Responses
//!
//! This module defines the two values that cross the Resource Interaction
//! Contract: the [`RestResponse`] a command hands back after executing a
//! transition, and the [`Response`] the contract hands to the transport.
//!
//! Both are generic over the representation type `R`, so a resource built
//! for one payload type can never be handed another.

use crate::status::Status;
use crate::verb::Verb;
use std::collections::BTreeSet;

/// The outcome of invoking a command.
///
/// A successful-family status must come with a representation. The contract
/// checks this when shaping the response and treats a violation as a
/// server-side fault.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse<R> {
    status: Status,
    resource: Option<R>,
    interactions: Option<BTreeSet<Verb>>,
}

impl<R> RestResponse<R> {
    pub fn new(status: Status, resource: Option<R>) -> Self {
        Self {
            status,
            resource,
            interactions: None,
        }
    }

    /// A successful result carrying `resource`.
    pub fn ok(status: Status, resource: R) -> Self {
        Self::new(status, Some(resource))
    }

    /// A result with no representation.
    pub fn bare(status: Status) -> Self {
        Self::new(status, None)
    }

    /// Declares the verbs permitted on the resource after this transition.
    ///
    /// When set, these replace the verbs the contract would otherwise derive
    /// from the owning state or its command bindings.
    pub fn with_interactions(mut self, verbs: impl IntoIterator<Item = Verb>) -> Self {
        self.interactions = Some(verbs.into_iter().collect());
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
    }

    pub fn interactions(&self) -> Option<&BTreeSet<Verb>> {
        self.interactions.as_ref()
    }

    pub fn into_parts(self) -> (Status, Option<R>, Option<BTreeSet<Verb>>) {
        (self.status, self.resource, self.interactions)
    }
}

/// What a resource returns to the transport for one request.
///
/// The transport owns the wire encoding; `allow` becomes whatever header or
/// link set the protocol uses to advertise permitted verbs.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<R> {
    pub status: Status,
    pub entity: Option<R>,
    pub allow: BTreeSet<Verb>,
}

impl<R> Response<R> {
    /// A bare status response with no representation and no allowed verbs.
    pub fn bare(status: Status) -> Self {
        Self {
            status,
            entity: None,
            allow: BTreeSet::new(),
        }
    }

    /// A response carrying a representation.
    pub fn ok(status: Status, entity: R) -> Self {
        Self {
            status,
            entity: Some(entity),
            allow: BTreeSet::new(),
        }
    }

    pub fn allow(mut self, verbs: impl IntoIterator<Item = Verb>) -> Self {
        self.allow = verbs.into_iter().collect();
        self
    }

    pub fn is_successful(&self) -> bool {
        self.status.is_successful()
    }

    /// The `Allow` header value, e.g. `"GET, POST"`.
    pub fn allow_header(&self) -> String {
        self.allow
            .iter()
            .map(Verb::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_header_is_sorted_and_comma_joined() {
        let response = Response::ok(Status::Ok, "body").allow([Verb::Post, Verb::Get]);
        assert_eq!(response.allow_header(), "GET, POST");
    }

    #[test]
    fn bare_status_has_no_entity() {
        let response: Response<()> = Response::bare(Status::NotFound);
        assert!(response.entity.is_none());
        assert!(response.allow.is_empty());
        assert!(!response.is_successful());
    }

    #[test]
    fn interactions_are_optional() {
        let plain = RestResponse::ok(Status::Ok, 1);
        assert!(plain.interactions().is_none());

        let annotated = RestResponse::ok(Status::Ok, 1).with_interactions([Verb::Get]);
        assert_eq!(annotated.interactions().map(|v| v.len()), Some(1));
    }

    #[test]
    fn ok_constructors_share_argument_order() {
        let result = RestResponse::ok(Status::Created, "note");
        assert_eq!(result.status(), Status::Created);
        assert_eq!(result.resource(), Some(&"note"));

        let response = Response::ok(Status::Created, "note");
        assert_eq!(response.status, Status::Created);
        assert_eq!(response.entity, Some("note"));

        let bare: RestResponse<&str> = RestResponse::bare(Status::NoContent);
        assert_eq!(bare.status(), Status::NoContent);
        assert!(bare.resource().is_none());
    }
}
