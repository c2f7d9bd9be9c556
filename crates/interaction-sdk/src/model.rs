//! # Interaction Model
//!
//! The top-level registry: one [`ResourceStateMachine`] per entity, in the
//! order the metadata source enumerates them.
//!
//! Two construction paths exist and produce identically shaped machines:
//!
//! - [`InteractionModel::from_metadata`] - term vocabulary. The collection
//!   name is the entity name plus the configured suffix.
//! - [`InteractionModel::from_edm`] - EDM catalog. The collection name is the
//!   entity set's declared name.
//!
//! The model is built once during setup. After that it is only read, so an
//! `Arc<InteractionModel>` can be shared across workers.

use crate::config::SdkConfig;
use crate::error::ModelError;
use crate::metadata::{EdmDataServices, EdmEntitySet, EntityMetadata, Metadata};
use crate::state::ResourceStateMachine;
use interaction_core::Verb;
use tracing::{debug, info, warn};

const DEFAULT_ID_PROPERTY: &str = "id";

#[derive(Debug, Clone, Default)]
pub struct InteractionModel {
    config: SdkConfig,
    resource_state_machines: Vec<ResourceStateMachine>,
}

impl InteractionModel {
    /// An empty model with default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SdkConfig) -> Self {
        Self {
            config,
            resource_state_machines: Vec::new(),
        }
    }

    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self::from_metadata_with(metadata, SdkConfig::default())
    }

    pub fn from_metadata_with(metadata: &Metadata, config: SdkConfig) -> Self {
        let mut model = Self::with_config(config);
        for entity in &metadata.entities {
            let rsm = model.create_initial_resource_state_machine(entity);
            model.add_resource_state_machine(rsm);
        }
        info!(entities = model.len(), "Interaction model built from metadata");
        model
    }

    pub fn from_edm(services: &EdmDataServices) -> Self {
        let mut model = Self::new();
        for entity_set in &services.entity_sets {
            let rsm = model.create_resource_state_machine_from_entity_set(entity_set);
            model.add_resource_state_machine(rsm);
        }
        info!(entities = model.len(), "Interaction model built from EDM catalog");
        model
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Collection + entity state machine using the configured retrieval verb.
    pub fn create_initial_resource_state_machine(
        &self,
        entity: &EntityMetadata,
    ) -> ResourceStateMachine {
        self.create_resource_state_machine_with_method(entity, self.config.method_get_entity)
    }

    pub fn create_resource_state_machine_with_method(
        &self,
        entity: &EntityMetadata,
        method_get_entity: Verb,
    ) -> ResourceStateMachine {
        let entity_name = entity.entity_name.as_str();
        let collection_state_name = format!("{entity_name}{}", self.config.collection_suffix);
        let mapped_entity_property = entity
            .id_fields
            .first()
            .map_or(DEFAULT_ID_PROPERTY, String::as_str);
        let template = entity.uri_template();
        debug!(entity = entity_name, template = %template, "Derived state machine");
        ResourceStateMachine::new(
            entity_name,
            collection_state_name,
            entity_name.to_lowercase(),
            method_get_entity,
            mapped_entity_property,
            template,
        )
    }

    pub fn create_resource_state_machine_from_entity_set(
        &self,
        entity_set: &EdmEntitySet,
    ) -> ResourceStateMachine {
        let entity_type = &entity_set.entity_type;
        let mapped_entity_property = entity_type
            .keys
            .first()
            .map_or(DEFAULT_ID_PROPERTY, String::as_str);
        let template = entity_type.uri_template();
        debug!(entity = %entity_type.name, template = %template, "Derived state machine");
        ResourceStateMachine::new(
            entity_type.name.as_str(),
            entity_set.name.as_str(),
            entity_type.name.to_lowercase(),
            self.config.method_get_entity,
            mapped_entity_property,
            template,
        )
    }

    /// Appends `rsm`. Entity names are not checked; lookups return the first
    /// match.
    pub fn add_resource_state_machine(&mut self, rsm: ResourceStateMachine) {
        self.resource_state_machines.push(rsm);
    }

    /// Appends `rsm` unless a machine for the same entity already exists.
    pub fn try_add_resource_state_machine(
        &mut self,
        rsm: ResourceStateMachine,
    ) -> Result<(), ModelError> {
        if self.find_resource_state_machine(rsm.entity_name()).is_some() {
            warn!(entity = rsm.entity_name(), "Duplicate entity rejected");
            return Err(ModelError::DuplicateEntity(rsm.entity_name().to_string()));
        }
        self.add_resource_state_machine(rsm);
        Ok(())
    }

    pub fn resource_state_machines(&self) -> &[ResourceStateMachine] {
        &self.resource_state_machines
    }

    pub fn find_resource_state_machine(&self, entity_name: &str) -> Option<&ResourceStateMachine> {
        self.resource_state_machines
            .iter()
            .find(|rsm| rsm.entity_name() == entity_name)
    }

    /// Like [`find_resource_state_machine`](Self::find_resource_state_machine)
    /// but absence is an error.
    pub fn resource_state_machine(
        &self,
        entity_name: &str,
    ) -> Result<&ResourceStateMachine, ModelError> {
        self.find_resource_state_machine(entity_name)
            .ok_or_else(|| ModelError::UnknownEntity(entity_name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.resource_state_machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_state_machines.is_empty()
    }
}
