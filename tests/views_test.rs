//! End-to-end view flows against a mock users backend

use serde_json::json;
use std::sync::Arc;
use userdesk::core::{AutoConfirmer, History, UserEditView, UserListView};
use userdesk::models::{
    DeleteOutcome, EditMode, Field, GridConfig, LoadOutcome, Route, SubmitOutcome,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;

use common::{services_for, start_backend, user_json};

#[tokio::test]
async fn test_confirmed_delete_then_reload() {
    let server = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([user_json(1, "jdoe"), user_json(2, "asmith")])),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "jdoe")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let view = UserListView::new(
        &services_for(&server),
        Arc::new(AutoConfirmer(true)),
        history.clone(),
        &GridConfig::default(),
    );

    assert_eq!(view.activate().await, LoadOutcome::Loaded(2));
    let target = view.find(2).unwrap();
    assert_eq!(view.on_delete_user(&target).await.unwrap(), DeleteOutcome::Deleted);
    assert_eq!(view.users().len(), 1);
    assert!(view.find(2).is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_list() {
    let server = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "jdoe")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let view = UserListView::new(
        &services_for(&server),
        Arc::new(AutoConfirmer(true)),
        Arc::new(History::new()),
        &GridConfig::default(),
    );
    view.activate().await;
    let target = view.find(1).unwrap();

    assert_eq!(view.on_delete_user(&target).await.unwrap(), DeleteOutcome::Failed);
    assert_eq!(view.users().len(), 1);
    assert!(view.notice().is_some());
}

#[tokio::test]
async fn test_edit_submit_unchanged_record() {
    let server = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "jdoe")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .and(body_json(user_json(1, "jdoe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "jdoe")))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let view = UserEditView::new(&services_for(&server), history.clone());

    assert_eq!(view.activate(Some(1)).await, LoadOutcome::Loaded(1));
    assert_eq!(view.mode(), EditMode::Edit(1));
    assert_eq!(view.draft().get(Field::UserName), "jdoe");

    assert!(matches!(view.on_submit().await, SubmitOutcome::Saved(_)));
    assert_eq!(history.current(), Some(Route::UserList));
}

#[tokio::test]
async fn test_partial_fetch_fills_present_fields_only() {
    let server = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"user_id": 1, "user_name": "jdoe"})),
        )
        .mount(&server)
        .await;

    let view = UserEditView::new(&services_for(&server), Arc::new(History::new()));

    assert_eq!(view.activate(Some(1)).await, LoadOutcome::Loaded(1));
    let draft = view.draft();
    assert_eq!(draft.user_id(), Some(1));
    assert_eq!(draft.user_name, "jdoe");
    assert_eq!(draft.first_name, "");
    assert_eq!(draft.email, "");
    assert!(view.notice().is_none());
}

#[tokio::test]
async fn test_partial_save_response_keeps_submitted_fields() {
    let server = start_backend().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(1, "jdoe")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let view = UserEditView::new(&services_for(&server), history.clone());
    view.activate(Some(1)).await;
    view.set_field(Field::FirstName, "Jane").unwrap();

    match view.on_submit().await {
        SubmitOutcome::Saved(saved) => {
            assert_eq!(saved.user_id, 1);
            assert_eq!(saved.first_name, "Jane");
            assert_eq!(saved.user_name, "jdoe");
            assert_eq!(saved.department.as_deref(), Some("Engineering"));
        }
        other => panic!("Expected saved, got {:?}", other),
    }
    assert_eq!(view.draft().first_name, "Jane");
    assert_eq!(history.current(), Some(Route::UserList));
}

#[tokio::test]
async fn test_create_response_with_only_id() {
    let server = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"user_id": 30})))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let view = UserEditView::new(&services_for(&server), history.clone());
    view.activate(None).await;
    view.set_field(Field::UserName, "newbie").unwrap();
    view.set_field(Field::FirstName, "New").unwrap();
    view.set_field(Field::LastName, "Person").unwrap();
    view.set_field(Field::Email, "newbie@example.com").unwrap();
    view.set_field(Field::UserStatus, "A").unwrap();

    match view.on_submit().await {
        SubmitOutcome::Saved(saved) => {
            assert_eq!(saved.user_id, 30);
            assert_eq!(saved.user_name, "newbie");
            assert!(saved.department.is_none());
        }
        other => panic!("Expected saved, got {:?}", other),
    }
    assert_eq!(history.current(), Some(Route::UserList));
}

#[tokio::test]
async fn test_new_user_is_created_with_sentinel() {
    let server = start_backend().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(user_json(-1, "newbie")))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_json(12, "newbie")))
        .expect(1)
        .mount(&server)
        .await;

    let view = UserEditView::new(&services_for(&server), Arc::new(History::new()));
    view.activate(None).await;
    assert_eq!(view.mode(), EditMode::New);

    view.set_field(Field::UserName, "newbie").unwrap();
    view.set_field(Field::FirstName, "John").unwrap();
    view.set_field(Field::LastName, "Doe").unwrap();
    view.set_field(Field::Email, "newbie@example.com").unwrap();
    view.set_field(Field::UserStatus, "A").unwrap();
    view.set_field(Field::Department, "Engineering").unwrap();

    match view.on_submit().await {
        SubmitOutcome::Saved(saved) => assert_eq!(saved.user_id, 12),
        other => panic!("Expected saved, got {:?}", other),
    }
    assert_eq!(view.draft().user_id(), Some(12));
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let server = start_backend().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let view = UserEditView::new(&services_for(&server), Arc::new(History::new()));
    view.activate(None).await;
    view.set_field(Field::UserName, "x").unwrap();
    view.set_field(Field::Email, "broken@").unwrap();

    assert!(matches!(view.on_submit().await, SubmitOutcome::Invalid(_)));
}
