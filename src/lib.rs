//! # Interaction Recipe
//!
//! > **Hypermedia resource interaction, derived from entity metadata.**
//!
//! Given entity metadata (names, key fields, field types), this workspace
//! derives a REST interaction model per entity and dispatches each verb on a
//! resource to a pluggable command.
//!
//! ## Module Tour
//!
//! ### 1. The Build Side ([`sdk`])
//! - **Role**: metadata → [`InteractionModel`](sdk::InteractionModel) of
//!   resource states, URI templates, and transitions.
//!
//! ### 2. The Runtime Side ([`core`])
//! - **Role**: (verb, path) → command → response, through the
//!   [`CommandController`](core::CommandController) and the
//!   [`ResourceInteractionModel`](core::ResourceInteractionModel) contract.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -p interaction-sdk
//! cargo test --workspace
//! ```

pub use interaction_core as core;
pub use interaction_sdk as sdk;
