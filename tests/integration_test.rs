use interaction_recipe::core::mock::MockCommand;
use interaction_recipe::core::{ResourceConfig, ResourceInteractionModel, Status, Verb};
use interaction_recipe::sdk::metadata::{EntityMetadata, Metadata, TermValueType};
use interaction_recipe::sdk::InteractionModel;
use serde_json::{json, Value};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

/// Full flow: metadata -> interaction model -> one transient resource per
/// collection -> concurrent requests against the shared resources.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_model_driven_resources_end_to_end() {
    let metadata = Metadata::new([
        EntityMetadata::new("Customer").with_key("id", TermValueType::Simple),
        EntityMetadata::new("Order")
            .with_key("year", TermValueType::Date)
            .with_key("serial", TermValueType::Simple),
    ]);
    let model = Arc::new(InteractionModel::from_metadata(&metadata));

    // Setup phase: one mock per resource, all bindings registered up front.
    let mut mocks = HashMap::new();
    let mut resources = HashMap::new();
    for rsm in model.resource_state_machines() {
        let mut mock = MockCommand::<Value>::new();
        mock.expect_execute(None)
            .return_ok(Status::Created, json!({ "entity": rsm.entity_name() }));

        let mut resource = rsm.collection_resource(ResourceConfig::default());
        resource.register(Verb::Post, mock.mutation()).unwrap();

        resources.insert(rsm.entity_name().to_string(), Arc::new(resource));
        mocks.insert(rsm.entity_name().to_string(), mock);
    }

    // Traffic phase: read-only sharing across tasks.
    let mut handles = Vec::new();
    for name in ["Customer", "Order"] {
        let resource = Arc::clone(&resources[name]);
        let model = Arc::clone(&model);
        handles.push(tokio::spawn(async move {
            let rsm = model.find_resource_state_machine(name).unwrap();
            assert_eq!(resource.resource_path(), rsm.collection_path());
            resource.post(None, json!({ "draft": true }))
        }));
    }

    for (handle, name) in handles.into_iter().zip(["Customer", "Order"]) {
        let response = handle.await.unwrap();
        assert_eq!(response.status, Status::Created);
        assert_eq!(response.entity, Some(json!({ "entity": name })));
        // Collection state: GET loops back to itself.
        assert_eq!(response.allow, BTreeSet::from([Verb::Get]));
    }

    for mock in mocks.values() {
        assert_eq!(mock.received(), vec![json!({ "draft": true })]);
        mock.verify();
    }
}

#[test]
fn test_transient_resource_rejects_replace_for_model_entity() {
    let model = InteractionModel::from_metadata(&Metadata::new([
        EntityMetadata::new("Customer").with_key("id", TermValueType::Simple),
    ]));
    let rsm = model.find_resource_state_machine("Customer").unwrap();

    let mock = MockCommand::<Value>::new();
    let mut resource = rsm.collection_resource(ResourceConfig::default());
    resource.register(Verb::Put, mock.mutation()).unwrap();

    let response = resource.put(Some("1"), json!({}));
    assert_eq!(response.status, Status::NotImplemented);
    assert!(response.entity.is_none());

    let response = resource.handle(Verb::Put, Some("1"), None);
    assert_eq!(response.status, Status::NotImplemented);
    mock.verify();
}

#[test]
fn test_model_built_resource_advertises_state_machine_verbs() {
    let model = InteractionModel::from_metadata(&Metadata::new([
        EntityMetadata::new("Customer").with_key("id", TermValueType::Simple),
    ]));
    let rsm = model.find_resource_state_machine("Customer").unwrap();

    let mut mock = MockCommand::<Value>::new();
    mock.expect_get(Some("7"))
        .return_ok(Status::Ok, json!({ "id": 7 }));
    let mut resource = rsm.collection_resource(ResourceConfig::default());
    resource.register(Verb::Get, mock.retrieval()).unwrap();
    resource.register(Verb::Post, mock.mutation()).unwrap();

    let response = resource.get(Some("7"));

    let collection = rsm.collection_state().name();
    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.allow, rsm.allowed_verbs(collection));
    assert_eq!(resource.allowed_verbs(), rsm.allowed_verbs(collection));
    mock.verify();
}
