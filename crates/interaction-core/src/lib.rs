//! # Interaction Core
//!
//! The runtime half of a hypermedia resource-interaction engine: it decides,
//! for each incoming (verb, path), which command executes the state
//! transition and how the command's result becomes a response.
//!
//! ## Architecture Overview
//!
//! 1. **Commands** ([`RetrievalCommand`], [`MutationCommand`]) - pluggable business logic.
//! 2. **Registry** ([`CommandController`]) - binds (verb, path) pairs to commands.
//! 3. **Contract** ([`ResourceInteractionModel`]) - one entry point per verb,
//!    shared response-shaping rules.
//! 4. **Resources** ([`TransientResource`]) - concrete contract implementations.
//!
//! ```rust
//! use interaction_core::{
//!     Command, ResourceInteractionModel, RestResponse, Status, TransientResource, Verb,
//! };
//!
//! fn echo(_id: Option<&str>, body: String) -> RestResponse<String> {
//!     RestResponse::ok(Status::Created, body)
//! }
//!
//! let mut resource = TransientResource::new("Note", "/notes");
//! resource.register(Verb::Post, Command::mutation(echo)).unwrap();
//!
//! let response = resource.post(None, "hello".to_string());
//! assert_eq!(response.status, Status::Created);
//! assert_eq!(response.allow_header(), "POST");
//!
//! // The transient resource never replaces or removes.
//! assert_eq!(resource.put(None, "x".to_string()).status, Status::NotImplemented);
//! ```
//!
//! ## Concurrency Model
//!
//! Setup (registering commands) takes `&mut self`. Request handling takes
//! `&self`. Once setup has finished, wrap the resource in an `Arc` and share
//! it across workers; no locks are involved.
//!
//! ## Testing
//!
//! See the [`mock`] module for [`MockCommand`](mock::MockCommand), an
//! expectation-driven command double.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod mock;
pub mod resource;
pub mod status;
pub mod tracing;
pub mod transient;
pub mod verb;

pub use command::{Command, MutationCommand, RetrievalCommand};
pub use config::{BindingPolicy, OptionsPolicy, ResourceConfig};
pub use controller::CommandController;
pub use error::InteractionError;
pub use message::{Response, RestResponse};
pub use resource::{Capabilities, Capability, ResourceInteractionModel};
pub use status::{Status, StatusFamily};
pub use transient::TransientResource;
pub use verb::{UnknownVerb, Verb};
