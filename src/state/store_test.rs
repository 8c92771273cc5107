use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::config::ApiConfig;
use crate::net::http::Method;
use crate::net::testing::RecordingTransport;

// =============================================================
// Helpers
// =============================================================

const TOKEN: &str = "header.payload.sig";
const UUID: &str = "0f6b6c5e-7a3b-4d4e-9a51-2b1b0c7e9f10";
const LIST_URL: &str = "http://localhost:8080/v1/projects";

fn client(transport: &RecordingTransport) -> ApiClient<&RecordingTransport> {
    ApiClient::new(ApiConfig::from_location("http:", "localhost"), transport)
}

fn project_json(id: &str, short_name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "shortCode": "0001",
        "shortName": short_name,
        "longName": "ln",
        "description": "desc",
        "createdAt": "2021-05-04",
        "createdBy": "u1",
        "changedAt": "null",
        "changedBy": "null",
        "deletedAt": "null",
        "deletedBy": "null"
    })
}

fn list_ids(store: &AdminStore) -> Vec<String> {
    store.projects.with_untracked(|s| s.items.iter().map(|p| p.id.clone()).collect())
}

// =============================================================
// Reads
// =============================================================

#[test]
fn refresh_projects_issues_one_authorized_get_and_sets_list() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &serde_json::json!([project_json("p1", "a"), project_json("p2", "b")]));

    block_on(store.refresh_projects(&client(&transport), TOKEN, ListOptions::default())).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, LIST_URL);
    assert_eq!(requests[0].authorization(), format!("Bearer {TOKEN}"));
    assert_eq!(list_ids(&store), ["p1", "p2"]);
    assert!(!store.projects.get_untracked().loading);
}

#[test]
fn refresh_project_sets_current_project_only() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &project_json(UUID, "incunabula"));

    block_on(store.refresh_project(&client(&transport), TOKEN, UUID)).unwrap();

    assert_eq!(transport.requests()[0].url, format!("{LIST_URL}/{UUID}"));
    let current = store.current_project.get_untracked();
    assert_eq!(current.id(), Some(UUID));
    assert_eq!(current.project.map(|p| p.short_name).as_deref(), Some("incunabula"));
    assert!(store.projects.get_untracked().items.is_empty());
}

#[test]
fn failed_refresh_records_error_and_keeps_list() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &serde_json::json!([project_json("p1", "a")]));
    transport.respond_text(500, "server not responding");
    let client = client(&transport);

    block_on(store.refresh_projects(&client, TOKEN, ListOptions::default())).unwrap();
    let err = block_on(store.refresh_projects(&client, TOKEN, ListOptions::default())).unwrap_err();

    assert_eq!(err.status(), Some(500));
    let state = store.projects.get_untracked();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("server returned 500: server not responding"));
}

#[test]
fn include_deleted_flag_sends_same_request() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &serde_json::json!([]));

    block_on(store.refresh_projects(&client(&transport), TOKEN, ListOptions { include_deleted: true })).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, LIST_URL);
    assert!(requests[0].body.is_none());
}

// =============================================================
// Writes
// =============================================================

#[test]
fn create_posts_body_then_refreshes_list_once() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(201, &project_json("new", "sn"));
    transport.respond_json(200, &serde_json::json!([project_json("new", "sn")]));
    let draft = ProjectDraft::new("sc", "sn", "ln", "desc");

    block_on(store.create_project_and_refresh(&client(&transport), TOKEN, &draft)).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, LIST_URL);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({
            "shortCode": "sc",
            "shortName": "sn",
            "longName": "ln",
            "description": "desc"
        }))
    );
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].url, LIST_URL);
    assert_eq!(list_ids(&store), ["new"]);
}

#[test]
fn create_step_alone_does_not_touch_cells() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(201, &project_json("new", "sn"));

    let refresh =
        block_on(store.create_project(&client(&transport), TOKEN, &ProjectDraft::new("a", "b", "c", "d"))).unwrap();

    assert_eq!(refresh, Refresh::ProjectList);
    assert_eq!(transport.requests().len(), 1);
    assert!(store.projects.get_untracked().items.is_empty());
    assert!(store.current_project.get_untracked().project.is_none());
}

#[test]
fn delete_then_refreshes_list() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &project_json(UUID, "gone"));
    transport.respond_json(200, &serde_json::json!([]));

    block_on(store.delete_project_and_refresh(&client(&transport), TOKEN, UUID)).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].url, format!("{LIST_URL}/{UUID}"));
    assert!(requests[0].body.is_none());
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].url, LIST_URL);
}

#[test]
fn edit_then_refreshes_that_project() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &project_json(UUID, "renamed"));
    transport.respond_json(200, &project_json(UUID, "renamed"));
    let draft = ProjectDraft::new("sc", "renamed", "ln", "desc");

    block_on(store.edit_project_and_refresh(&client(&transport), TOKEN, UUID, &draft)).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].url, format!("{LIST_URL}/{UUID}"));
    assert_eq!(requests[0].body, Some(serde_json::to_value(&draft).unwrap()));
    assert_eq!(requests[1].method, Method::Get);
    assert_eq!(requests[1].url, format!("{LIST_URL}/{UUID}"));
    assert_eq!(
        store.current_project.get_untracked().project.map(|p| p.short_name).as_deref(),
        Some("renamed")
    );
}

#[test]
fn failed_mutation_skips_refresh() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.fail("connection refused");

    let err = block_on(store.delete_project_and_refresh(&client(&transport), TOKEN, UUID)).unwrap_err();

    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn rejected_mutation_skips_refresh() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_text(400, "invalid short code");

    let result =
        block_on(store.create_project_and_refresh(&client(&transport), TOKEN, &ProjectDraft::new("", "b", "c", "d")));

    assert_eq!(result.unwrap_err().status(), Some(400));
    assert_eq!(transport.requests().len(), 1);
}

// =============================================================
// Cancellation + session
// =============================================================

#[test]
fn cancel_during_flight_drops_response() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport
        .respond_json(200, &serde_json::json!([project_json("late", "x")]))
        .during_last(move || store.cancel_refreshes());

    let result = block_on(store.refresh_projects(&client(&transport), TOKEN, ListOptions::default()));

    assert!(result.is_ok());
    let state = store.projects.get_untracked();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn newer_refresh_wins_over_earlier_one() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport
        .respond_json(200, &serde_json::json!([project_json("old", "x")]))
        .during_last(move || {
            // A second refresh starts and finishes while the first is in flight.
            store.projects.update(|s| {
                let seq = s.begin_refresh();
                s.finish_refresh(seq, Ok(Vec::new()));
            });
        });

    block_on(store.refresh_projects(&client(&transport), TOKEN, ListOptions::default())).unwrap();

    assert!(list_ids(&store).is_empty());
}

#[test]
fn dropped_response_does_not_notify_subscribers() {
    let store = AdminStore::new();
    let runs = Arc::new(AtomicUsize::new(0));
    let item_count = Memo::new({
        let runs = Arc::clone(&runs);
        move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            store.projects.with(|s| s.items.len())
        }
    });
    assert_eq!(item_count.get_untracked(), 0);

    let transport = RecordingTransport::new();
    transport.respond_json(200, &serde_json::json!([project_json("late", "x")])).during_last({
        let runs = Arc::clone(&runs);
        move || {
            store.cancel_refreshes();
            assert_eq!(item_count.get_untracked(), 0);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        }
    });

    block_on(store.refresh_projects(&client(&transport), TOKEN, ListOptions::default())).unwrap();

    assert_eq!(item_count.get_untracked(), 0);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn refresh_after_successful_write_reports_its_failure() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &project_json(UUID, "a"));
    transport.respond_text(503, "maintenance");
    let client = client(&transport);

    let refresh = block_on(store.delete_project(&client, TOKEN, UUID)).unwrap();
    let err = block_on(store.refresh(&client, TOKEN, refresh)).unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(store.projects.get_untracked().error.as_deref(), Some("server returned 503: maintenance"));
}

#[test]
fn set_current_user_is_synchronous_and_offline() {
    let store = AdminStore::new();
    assert!(store.token().is_none());

    store.set_current_user(User { id: "u1".to_owned(), name: "Alice".to_owned(), token: TOKEN.to_owned() });

    assert_eq!(store.auth.get_untracked().user.map(|u| u.id).as_deref(), Some("u1"));
    assert_eq!(store.token().as_deref(), Some(TOKEN));
}

#[test]
fn clear_session_resets_every_cell() {
    let store = AdminStore::new();
    let transport = RecordingTransport::new();
    transport.respond_json(200, &serde_json::json!([project_json("p1", "a")]));
    transport.respond_json(200, &project_json("p1", "a"));
    let client = client(&transport);
    store.set_current_user(User { token: TOKEN.to_owned(), ..User::default() });
    block_on(store.refresh_projects(&client, TOKEN, ListOptions::default())).unwrap();
    block_on(store.refresh_project(&client, TOKEN, "p1")).unwrap();

    store.clear_session();

    assert!(store.projects.get_untracked().items.is_empty());
    assert!(store.current_project.get_untracked().project.is_none());
    assert!(store.auth.get_untracked().user.is_none());
}
