//! # Resource States and State Machines
//!
//! A [`ResourceState`] is one addressable point of the interaction model.
//! A [`ResourceStateMachine`] groups the states of one entity: the
//! collection state, the entity state, and the transitions between them.
//!
//! ```text
//! Customers ──GET──▶ Customers          (collection, path "/Customers")
//!     │
//!     └──method_get_entity──▶ customer  (entity, path "/Customers({id})")
//! ```
//!
//! States are created once, when the machine is built, and never change.

use crate::template::UriTemplate;
use interaction_core::{ResourceConfig, TransientResource, Verb};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Addresses the set of entities. No parameters.
    Collection,
    /// Addresses one entity. Parameterised by key.
    Entity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    entity_name: String,
    name: String,
    kind: StateKind,
    path: UriTemplate,
}

impl ResourceState {
    pub fn new(
        entity_name: impl Into<String>,
        name: impl Into<String>,
        kind: StateKind,
        path: UriTemplate,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            name: name.into(),
            kind,
            path,
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// The template relative to the entity's resource path.
    pub fn path(&self) -> &UriTemplate {
        &self.path
    }
}

/// A verb-labelled edge between two states, by state name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub verb: Verb,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStateMachine {
    entity_name: String,
    collection_state: ResourceState,
    entity_state: ResourceState,
    method_get_entity: Verb,
    mapped_entity_property: String,
    transitions: Vec<Transition>,
}

impl ResourceStateMachine {
    /// Builds the collection and entity states and their default transitions.
    ///
    /// `path_parameters_template` addresses the entity state; the collection
    /// state gets the empty template.
    pub fn new(
        entity_name: impl Into<String>,
        collection_state_name: impl Into<String>,
        entity_state_name: impl Into<String>,
        method_get_entity: Verb,
        mapped_entity_property: impl Into<String>,
        path_parameters_template: UriTemplate,
    ) -> Self {
        let entity_name = entity_name.into();
        let collection_state = ResourceState::new(
            entity_name.clone(),
            collection_state_name,
            StateKind::Collection,
            UriTemplate::empty(),
        );
        let entity_state = ResourceState::new(
            entity_name.clone(),
            entity_state_name,
            StateKind::Entity,
            path_parameters_template,
        );
        let transitions = vec![
            Transition {
                verb: Verb::Get,
                source: collection_state.name().to_string(),
                target: collection_state.name().to_string(),
            },
            Transition {
                verb: method_get_entity,
                source: collection_state.name().to_string(),
                target: entity_state.name().to_string(),
            },
        ];
        Self {
            entity_name,
            collection_state,
            entity_state,
            method_get_entity,
            mapped_entity_property: mapped_entity_property.into(),
            transitions,
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn collection_state(&self) -> &ResourceState {
        &self.collection_state
    }

    pub fn entity_state(&self) -> &ResourceState {
        &self.entity_state
    }

    pub fn method_get_entity(&self) -> Verb {
        self.method_get_entity
    }

    /// The entity property a path parameter binds to.
    pub fn mapped_entity_property(&self) -> &str {
        &self.mapped_entity_property
    }

    pub fn path_parameters_template(&self) -> &UriTemplate {
        self.entity_state.path()
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn find_state(&self, name: &str) -> Option<&ResourceState> {
        [&self.collection_state, &self.entity_state]
            .into_iter()
            .find(|state| state.name() == name)
    }

    /// Verbs accepted at the address of `state_name`: the labels of every
    /// transition that targets it.
    pub fn allowed_verbs(&self, state_name: &str) -> BTreeSet<Verb> {
        self.transitions
            .iter()
            .filter(|t| t.target == state_name)
            .map(|t| t.verb)
            .collect()
    }

    /// e.g. `/Customers`
    pub fn collection_path(&self) -> String {
        format!("/{}", self.collection_state.name())
    }

    /// e.g. `/Customers({id})`
    pub fn entity_path(&self) -> String {
        format!(
            "/{}({})",
            self.collection_state.name(),
            self.entity_state.path()
        )
    }

    /// A transient resource at the collection path that advertises the
    /// collection state's verbs. Commands are registered by the caller.
    pub fn collection_resource<R>(&self, config: ResourceConfig) -> TransientResource<R> {
        TransientResource::with_config(&self.entity_name, self.collection_path(), config)
            .with_allowed_verbs(self.allowed_verbs(self.collection_state.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::TermValueType;
    use crate::template::build_template;
    use interaction_core::ResourceInteractionModel;

    fn orders() -> ResourceStateMachine {
        let template = build_template(&[
            ("year", Some(TermValueType::Date)),
            ("serial", Some(TermValueType::Simple)),
        ]);
        ResourceStateMachine::new("Order", "Orders", "order", Verb::Get, "year", template)
    }

    #[test]
    fn collection_state_has_no_parameters() {
        let rsm = orders();
        assert_eq!(rsm.collection_state().kind(), StateKind::Collection);
        assert!(rsm.collection_state().path().is_empty());
        assert_eq!(rsm.entity_state().kind(), StateKind::Entity);
        assert_eq!(rsm.entity_state().path().parameter_names(), ["year", "serial"]);
    }

    #[test]
    fn renders_paths() {
        let rsm = orders();
        assert_eq!(rsm.collection_path(), "/Orders");
        assert_eq!(rsm.entity_path(), "/Orders('{year}',{serial})");
    }

    #[test]
    fn allowed_verbs_follow_transitions() {
        let template = build_template(&[("id", Some(TermValueType::Simple))]);
        let rsm = ResourceStateMachine::new("Doc", "Docs", "doc", Verb::Post, "id", template);
        assert_eq!(rsm.allowed_verbs("Docs"), BTreeSet::from([Verb::Get]));
        assert_eq!(rsm.allowed_verbs("doc"), BTreeSet::from([Verb::Post]));
        assert!(rsm.allowed_verbs("missing").is_empty());
        assert_eq!(rsm.find_state("doc").map(ResourceState::kind), Some(StateKind::Entity));
    }

    #[test]
    fn collection_resource_carries_state_verbs() {
        let rsm = orders();
        let resource = rsm.collection_resource::<String>(ResourceConfig::default());
        assert_eq!(resource.resource_path(), "/Orders");
        assert_eq!(resource.allowed_verbs(), rsm.allowed_verbs("Orders"));
    }
}
