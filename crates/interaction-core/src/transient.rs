//! # Transient Resource
//!
//! A resource with no persisted state. It accepts retrieval (GET) and
//! creation (POST) by dispatching through its command controller. Replace
//! and remove are always reported as `501 Not Implemented` without looking
//! at the controller.
//!
//! OPTIONS follows the configured [`OptionsPolicy`]: `404 Not Found` by
//! default, or `200 OK` advertising the allowed verbs.
//!
//! The allowed verbs come from the owning state when one is supplied through
//! [`TransientResource::with_allowed_verbs`], and from the controller's
//! bindings otherwise. Either way they are narrowed to the resource's
//! capabilities.

use crate::command::{Command, MutationCommand};
use crate::config::{OptionsPolicy, ResourceConfig};
use crate::controller::CommandController;
use crate::error::InteractionError;
use crate::message::Response;
use crate::resource::{
    error_response, shape_response, Capabilities, Capability, ResourceInteractionModel,
};
use crate::status::Status;
use crate::verb::Verb;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct TransientResource<R> {
    entity_name: String,
    resource_path: String,
    config: ResourceConfig,
    command_controller: CommandController<R>,
    state_verbs: Option<BTreeSet<Verb>>,
}

impl<R> TransientResource<R> {
    pub fn new(entity_name: impl Into<String>, resource_path: impl Into<String>) -> Self {
        Self::with_config(entity_name, resource_path, ResourceConfig::default())
    }

    pub fn with_config(
        entity_name: impl Into<String>,
        resource_path: impl Into<String>,
        config: ResourceConfig,
    ) -> Self {
        let resource_path = resource_path.into();
        Self {
            entity_name: entity_name.into(),
            command_controller: CommandController::with_policy(
                resource_path.clone(),
                config.binding_policy,
            ),
            resource_path,
            config,
            state_verbs: None,
        }
    }

    /// Advertises `verbs` (typically the owning state's transitions) instead
    /// of the bound verbs.
    pub fn with_allowed_verbs(mut self, verbs: impl IntoIterator<Item = Verb>) -> Self {
        self.state_verbs = Some(verbs.into_iter().collect());
        self
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub fn command_controller(&self) -> &CommandController<R> {
        &self.command_controller
    }

    /// Binds `command` to `verb` on this resource's own path.
    pub fn register(&mut self, verb: Verb, command: Command<R>) -> Result<(), InteractionError> {
        self.command_controller
            .register(verb, self.resource_path.clone(), command)
    }

    /// Verbs advertised on success, narrowed to what this resource serves.
    pub fn allowed_verbs(&self) -> BTreeSet<Verb> {
        let served = self.capabilities().verbs();
        let candidates = match &self.state_verbs {
            Some(verbs) => verbs.clone(),
            None => self.command_controller.bound_verbs(&self.resource_path),
        };
        candidates
            .into_iter()
            .filter(|verb| served.contains(verb))
            .collect()
    }

    fn retrieve(&self, id: Option<&str>) -> Result<Response<R>, InteractionError> {
        let command = self.command_controller.resolve_retrieval_command()?;
        let result = command.get(id);
        shape_response(Verb::Get, &self.resource_path, result, self.allowed_verbs())
    }

    fn create(&self, id: Option<&str>, resource: R) -> Result<Response<R>, InteractionError> {
        let command = self.mutation_command(Verb::Post)?;
        let result = command.execute(id, resource);
        shape_response(Verb::Post, &self.resource_path, result, self.allowed_verbs())
    }

    fn mutation_command(
        &self,
        verb: Verb,
    ) -> Result<Arc<dyn MutationCommand<R>>, InteractionError> {
        match self
            .command_controller
            .resolve_transition(verb, &self.resource_path)?
        {
            Command::Mutation(command) => Ok(command),
            Command::Retrieval(_) => Err(InteractionError::IncompatibleCommand {
                verb,
                path: self.resource_path.clone(),
                expected: "mutation",
            }),
        }
    }

    fn unsupported(&self, verb: Verb) -> Response<R> {
        error_response(&InteractionError::UnsupportedVerb {
            verb,
            path: self.resource_path.clone(),
        })
    }
}

impl<R> ResourceInteractionModel<R> for TransientResource<R> {
    fn entity_name(&self) -> &str {
        &self.entity_name
    }

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn capabilities(&self) -> Capabilities {
        match self.config.options_policy {
            OptionsPolicy::NotFound => Capabilities::new([Capability::Retrieve, Capability::Create]),
            OptionsPolicy::AdvertiseAllowed => Capabilities::new([
                Capability::Retrieve,
                Capability::Create,
                Capability::DescribeOptions,
            ]),
        }
    }

    #[instrument(skip(self), fields(path = %self.resource_path))]
    fn get(&self, id: Option<&str>) -> Response<R> {
        debug!("GET");
        self.retrieve(id)
            .unwrap_or_else(|error| error_response(&error))
    }

    #[instrument(skip(self, resource), fields(path = %self.resource_path))]
    fn post(&self, id: Option<&str>, resource: R) -> Response<R> {
        debug!("POST");
        self.create(id, resource)
            .unwrap_or_else(|error| error_response(&error))
    }

    #[instrument(skip(self, _resource), fields(path = %self.resource_path))]
    fn put(&self, _id: Option<&str>, _resource: R) -> Response<R> {
        debug!("PUT");
        self.unsupported(Verb::Put)
    }

    #[instrument(skip(self), fields(path = %self.resource_path))]
    fn delete(&self, _id: Option<&str>) -> Response<R> {
        debug!("DELETE");
        self.unsupported(Verb::Delete)
    }

    #[instrument(skip(self), fields(path = %self.resource_path))]
    fn options(&self, _id: Option<&str>) -> Response<R> {
        debug!("OPTIONS");
        match self.config.options_policy {
            OptionsPolicy::NotFound => Response::bare(Status::NotFound),
            OptionsPolicy::AdvertiseAllowed => {
                let mut allow = self.allowed_verbs();
                allow.insert(Verb::Options);
                Response::bare(Status::Ok).allow(allow)
            }
        }
    }
}

impl<R> std::fmt::Debug for TransientResource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransientResource")
            .field("entity_name", &self.entity_name)
            .field("resource_path", &self.resource_path)
            .field("config", &self.config)
            .field("command_controller", &self.command_controller)
            .field("state_verbs", &self.state_verbs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::RestResponse;

    fn accept(_id: Option<&str>, body: String) -> RestResponse<String> {
        RestResponse::ok(Status::Created, body)
    }

    fn resource() -> TransientResource<String> {
        let mut resource = TransientResource::new("Note", "/notes");
        resource
            .register(Verb::Post, Command::mutation(accept))
            .unwrap();
        resource
    }

    #[test]
    fn post_dispatches_to_bound_command() {
        let response = resource().post(None, "hello".to_string());
        assert_eq!(response.status, Status::Created);
        assert_eq!(response.entity.as_deref(), Some("hello"));
        assert_eq!(response.allow, BTreeSet::from([Verb::Post]));
    }

    #[test]
    fn get_without_binding_is_method_not_allowed() {
        let response = resource().get(Some("1"));
        assert_eq!(response.status, Status::MethodNotAllowed);
        assert!(response.entity.is_none());
    }

    #[test]
    fn put_and_delete_are_not_implemented() {
        let resource = resource();
        assert_eq!(
            resource.put(Some("1"), "x".to_string()).status,
            Status::NotImplemented
        );
        assert_eq!(resource.delete(Some("1")).status, Status::NotImplemented);
    }

    #[test]
    fn handle_put_without_body_is_not_implemented() {
        let resource = resource();
        let response = resource.handle(Verb::Put, Some("1"), None);
        assert_eq!(response.status, Status::NotImplemented);
        assert_eq!(
            resource.handle(Verb::Post, None, None).status,
            Status::BadRequest
        );
    }

    #[test]
    fn state_verbs_replace_bound_verbs() {
        let resource = resource().with_allowed_verbs([Verb::Get, Verb::Delete]);
        assert_eq!(resource.allowed_verbs(), BTreeSet::from([Verb::Get]));

        let response = resource.post(None, "hello".to_string());
        assert_eq!(response.status, Status::Created);
        assert_eq!(response.allow, BTreeSet::from([Verb::Get]));
    }

    #[test]
    fn retrieval_bound_to_post_is_a_server_fault() {
        let mut resource = TransientResource::<String>::new("Note", "/notes");
        resource
            .register(
                Verb::Post,
                Command::retrieval(|_id: Option<&str>| RestResponse::ok(Status::Ok, String::new())),
            )
            .unwrap();
        let response = resource.post(None, "x".to_string());
        assert_eq!(response.status, Status::InternalServerError);
    }
}
