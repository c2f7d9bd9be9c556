use interaction_core::mock::MockCommand;
use interaction_core::{
    Command, OptionsPolicy, ResourceConfig, ResourceInteractionModel, RestResponse, Status,
    TransientResource, Verb,
};
use std::collections::BTreeSet;
use std::sync::Arc;

// --- Test Representation ---

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: Option<String>,
    text: String,
}

impl Note {
    fn new(text: &str) -> Self {
        Self {
            id: None,
            text: text.to_string(),
        }
    }
}

struct StoreNote;

impl interaction_core::MutationCommand<Note> for StoreNote {
    fn execute(&self, _id: Option<&str>, mut note: Note) -> RestResponse<Note> {
        note.id = Some("n1".to_string());
        RestResponse::ok(Status::Created, note)
    }
}

struct FetchNote;

impl interaction_core::RetrievalCommand<Note> for FetchNote {
    fn get(&self, id: Option<&str>) -> RestResponse<Note> {
        match id {
            Some(id) => RestResponse::ok(
                Status::Ok,
                Note {
                    id: Some(id.to_string()),
                    text: format!("note {id}"),
                },
            ),
            None => RestResponse::bare(Status::NotFound),
        }
    }
}

fn notes_resource(config: ResourceConfig) -> TransientResource<Note> {
    let mut resource = TransientResource::with_config("Note", "/notes", config);
    resource
        .register(Verb::Get, Command::retrieval(FetchNote))
        .unwrap();
    resource
        .register(Verb::Post, Command::mutation(StoreNote))
        .unwrap();
    resource
}

// --- Tests ---

#[test]
fn test_post_success_carries_representation_and_allowed_verbs() {
    let resource = notes_resource(ResourceConfig::default());

    let response = resource.post(None, Note::new("buy milk"));

    assert_eq!(response.status, Status::Created);
    let note = response.entity.clone().expect("representation present");
    assert_eq!(note.id.as_deref(), Some("n1"));
    assert_eq!(note.text, "buy milk");
    assert_eq!(response.allow, BTreeSet::from([Verb::Get, Verb::Post]));
}

#[test]
fn test_put_is_not_implemented_even_when_bound() {
    let mut resource = notes_resource(ResourceConfig::default());
    resource
        .register(Verb::Put, Command::mutation(StoreNote))
        .unwrap();

    let response = resource.put(Some("n1"), Note::new("edit"));

    assert_eq!(response.status, Status::NotImplemented);
    assert!(response.entity.is_none());
    assert!(resource.delete(Some("n1")).entity.is_none());
}

#[test]
fn test_get_failure_is_bare_status() {
    let resource = notes_resource(ResourceConfig::default());

    let response = resource.get(None);

    assert_eq!(response.status, Status::NotFound);
    assert!(response.entity.is_none());
    assert!(response.allow.is_empty());
}

#[test]
fn test_success_without_representation_is_server_fault() {
    let mut mock = MockCommand::<Note>::new();
    mock.expect_get(Some("n1")).return_status(Status::Ok);

    let mut resource = TransientResource::new("Note", "/notes");
    resource.register(Verb::Get, mock.retrieval()).unwrap();

    let response = resource.get(Some("n1"));

    assert_eq!(response.status, Status::InternalServerError);
    assert!(response.entity.is_none());
    mock.verify();
}

#[test]
fn test_failure_drops_supplied_representation() {
    let mut mock = MockCommand::<Note>::new();
    mock.expect_execute(None)
        .return_result(RestResponse::new(Status::Conflict, Some(Note::new("dup"))));

    let mut resource = TransientResource::new("Note", "/notes");
    resource.register(Verb::Post, mock.mutation()).unwrap();

    let response = resource.post(None, Note::new("dup"));

    assert_eq!(response.status, Status::Conflict);
    assert!(response.entity.is_none());
    assert_eq!(mock.received(), vec![Note::new("dup")]);
    mock.verify();
}

#[test]
fn test_options_policy_is_configurable() {
    let hidden = notes_resource(ResourceConfig::default());
    assert_eq!(hidden.options(None).status, Status::NotFound);

    let advertised = notes_resource(ResourceConfig {
        options_policy: OptionsPolicy::AdvertiseAllowed,
        ..ResourceConfig::default()
    });
    let response = advertised.options(None);
    assert_eq!(response.status, Status::Ok);
    assert_eq!(response.allow_header(), "GET, POST, OPTIONS");
}

#[test]
fn test_handle_routes_by_verb() {
    let resource = notes_resource(ResourceConfig::default());

    assert_eq!(resource.handle(Verb::Get, Some("n2"), None).status, Status::Ok);
    assert_eq!(
        resource.handle(Verb::Post, None, None).status,
        Status::BadRequest
    );
    assert_eq!(
        resource.handle(Verb::Patch, Some("n2"), None).status,
        Status::NotImplemented
    );
    assert_eq!(
        resource.handle(Verb::Put, Some("n2"), None).status,
        Status::NotImplemented
    );
    assert_eq!(
        resource
            .handle(Verb::Put, Some("n2"), Some(Note::new("edit")))
            .status,
        Status::NotImplemented
    );
    assert_eq!(
        resource.handle(Verb::Delete, Some("n2"), None).status,
        Status::NotImplemented
    );
}

#[test]
fn test_allowed_verbs_from_owning_state() {
    let resource =
        notes_resource(ResourceConfig::default()).with_allowed_verbs([Verb::Get, Verb::Put]);

    let response = resource.post(None, Note::new("buy milk"));

    assert_eq!(response.status, Status::Created);
    assert_eq!(response.allow, BTreeSet::from([Verb::Get]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_share_resource() {
    let resource = Arc::new(notes_resource(ResourceConfig::default()));

    let mut handles = Vec::new();
    for i in 0..32 {
        let resource = Arc::clone(&resource);
        handles.push(tokio::spawn(async move {
            let id = format!("n{i}");
            resource.get(Some(id.as_str()))
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let response = handle.await.unwrap();
        assert_eq!(response.status, Status::Ok);
        assert_eq!(response.entity.unwrap().text, format!("note n{i}"));
    }
}
