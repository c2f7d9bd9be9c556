//! # Interaction Engine Demo
//!
//! Builds an interaction model from an embedded catalog, exposes each
//! entity's collection as a transient resource, and drives concurrent
//! requests against the shared resources.
//!
//! ```bash
//! RUST_LOG=info cargo run -p interaction-sdk
//! ```

use interaction_core::tracing::setup_tracing;
use interaction_core::{
    Command, MutationCommand, ResourceConfig, ResourceInteractionModel, RestResponse,
    RetrievalCommand, Status, TransientResource, Verb,
};
use interaction_sdk::metadata::Metadata;
use interaction_sdk::{InteractionModel, ModelError, ResourceStateMachine};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, Instrument};

const CATALOG: &str = r#"{ "entities": [
    { "entity_name": "Customer", "id_fields": ["id"],
      "fields": [{ "name": "id", "type": "SIMPLE" }, { "name": "name", "type": "TEXT" }] },
    { "entity_name": "Order", "id_fields": ["year", "serial"],
      "fields": [{ "name": "year", "type": "DATE" }, { "name": "serial", "type": "SIMPLE" }] }
]}"#;

/// Answers reads with a stub representation naming the entity.
struct Describe {
    entity: String,
}

impl RetrievalCommand<Value> for Describe {
    fn get(&self, id: Option<&str>) -> RestResponse<Value> {
        match id {
            Some(id) => RestResponse::ok(Status::Ok, json!({ "entity": self.entity, "id": id })),
            None => RestResponse::bare(Status::NotFound),
        }
    }
}

/// Accepts any JSON object and echoes it back as created.
struct Accept;

impl MutationCommand<Value> for Accept {
    fn execute(&self, _id: Option<&str>, resource: Value) -> RestResponse<Value> {
        if resource.is_object() {
            RestResponse::ok(Status::Created, resource)
        } else {
            RestResponse::bare(Status::BadRequest)
        }
    }
}

fn build_resource(rsm: &ResourceStateMachine) -> Result<TransientResource<Value>, String> {
    let mut resource = rsm.collection_resource(ResourceConfig::default());
    let describe = Describe {
        entity: rsm.entity_name().to_string(),
    };
    resource
        .register(Verb::Get, Command::retrieval(describe))
        .map_err(|e| e.to_string())?;
    resource
        .register(Verb::Post, Command::mutation(Accept))
        .map_err(|e| e.to_string())?;
    Ok(resource)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let metadata = Metadata::from_json(CATALOG).map_err(|e: ModelError| e.to_string())?;
    let model = InteractionModel::from_metadata(&metadata);

    let mut resources = HashMap::new();
    for rsm in model.resource_state_machines() {
        info!(
            entity = rsm.entity_name(),
            collection = %rsm.collection_path(),
            entity_path = %rsm.entity_path(),
            "State machine"
        );
        resources.insert(rsm.entity_name().to_string(), Arc::new(build_resource(rsm)?));
    }

    let customers = resources
        .get("Customer")
        .cloned()
        .ok_or_else(|| "no Customer resource".to_string())?;

    let span = tracing::info_span!("traffic");
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let customers = Arc::clone(&customers);
            tokio::spawn(
                async move {
                    let id = n.to_string();
                    customers.get(Some(id.as_str()))
                }
                .instrument(span.clone()),
            )
        })
        .collect();

    for handle in handles {
        match handle.await {
            Ok(response) => info!(status = %response.status, allow = %response.allow_header(), "GET"),
            Err(e) => error!(error = %e, "Request task failed"),
        }
    }

    let created = customers.post(None, json!({ "name": "Alice" }));
    info!(status = %created.status, body = ?created.entity, "POST");

    let replaced = customers.put(Some("1"), json!({ "name": "Bob" }));
    info!(status = %replaced.status, "PUT");

    info!("Demo completed");
    Ok(())
}
