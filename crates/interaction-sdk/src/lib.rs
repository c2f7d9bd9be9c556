//! # Interaction SDK
//!
//! The build-time half of the interaction engine: it turns entity metadata
//! into a resource interaction model.
//!
//! ## Module Tour
//!
//! - [`metadata`] - the two metadata sources (term vocabulary, EDM catalog).
//! - [`template`] - the URI Template Builder.
//! - [`state`] - [`ResourceState`](state::ResourceState) and
//!   [`ResourceStateMachine`](state::ResourceStateMachine).
//! - [`model`] - [`InteractionModel`](model::InteractionModel), one state
//!   machine per entity.
//! - [`config`] - naming and verb conventions.
//!
//! ```rust
//! use interaction_sdk::metadata::{EntityMetadata, Metadata, TermValueType};
//! use interaction_sdk::InteractionModel;
//!
//! let metadata = Metadata::new([
//!     EntityMetadata::new("Customer").with_key("id", TermValueType::Simple),
//!     EntityMetadata::new("Order")
//!         .with_key("year", TermValueType::Date)
//!         .with_key("serial", TermValueType::Simple),
//! ]);
//! let model = InteractionModel::from_metadata(&metadata);
//!
//! let order = model.find_resource_state_machine("Order").unwrap();
//! assert_eq!(order.entity_path(), "/Orders('{year}',{serial})");
//! assert!(model.find_resource_state_machine("Unknown").is_none());
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod model;
pub mod state;
pub mod template;

pub use config::SdkConfig;
pub use error::ModelError;
pub use model::InteractionModel;
pub use state::{ResourceState, ResourceStateMachine, StateKind, Transition};
pub use template::{build_template, UriParameterType, UriTemplate};
