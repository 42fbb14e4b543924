// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests over the full client stack: HTTP gateway against a
//! wiremock server, cache stores, feedback layer, and the file session.
//! Each test builds an isolated harness with its own temp directory.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskdeck_api::HttpGateway;
use taskdeck_core::{CompletedAtPolicy, Credentials, TodoFilter};
use taskdeck_ops::{ProjectOperations, TodoOperations};
use taskdeck_session::{AuthService, FileSessionStore};
use taskdeck_store::{ProjectStore, TodoStore};
use taskdeck_test_utils::{RecordingNotifier, ScriptedConfirm};

struct Harness {
    server: MockServer,
    gateway: Arc<HttpGateway>,
    session: Arc<FileSessionStore>,
    auth: AuthService,
    todos: TodoOperations,
    projects: ProjectOperations,
    notifier: Arc<RecordingNotifier>,
    _dir: tempfile::TempDir,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();
    let session = Arc::new(FileSessionStore::open(dir.path().join("session.json")));
    let gateway = Arc::new(
        HttpGateway::new(&server.uri(), Duration::from_secs(5))
            .unwrap()
            .with_session_sink(session.clone()),
    );
    let notifier = Arc::new(RecordingNotifier::new());
    let confirm = Arc::new(ScriptedConfirm::always());

    let todo_store = Arc::new(TodoStore::new(gateway.clone(), CompletedAtPolicy::Clear));
    let project_store = Arc::new(ProjectStore::new(gateway.clone()));

    Harness {
        auth: AuthService::new(gateway.clone(), session.clone()),
        todos: TodoOperations::new(todo_store, notifier.clone(), confirm.clone()),
        projects: ProjectOperations::new(project_store, notifier.clone(), confirm),
        session,
        gateway,
        notifier,
        server,
        _dir: dir,
    }
}

fn enveloped(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"success": true, "message": "", "data": data})
}

fn todo_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "status": "TODO",
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn page_json(todos: Vec<serde_json::Value>) -> serde_json::Value {
    let total = todos.len();
    serde_json::json!({
        "content": todos,
        "totalPages": 1,
        "totalElements": total,
        "size": 20,
        "number": 0,
        "first": true,
        "last": true
    })
}

#[tokio::test]
async fn login_persists_session_and_authorizes_later_calls() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(serde_json::json!({
            "token": "jwt-abc",
            "username": "ann",
            "role": "USER"
        }))))
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(page_json(vec![]))))
        .mount(&h.server)
        .await;

    let profile = h
        .auth
        .login(&Credentials {
            username: "ann".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    h.gateway.set_token(Some(profile.token));

    assert!(h.session.is_authenticated());
    assert!(h.todos.refresh(&TodoFilter::default()).await.success);
}

#[tokio::test]
async fn unauthorized_response_clears_stored_session() {
    let h = harness().await;
    h.session
        .save(&taskdeck_core::UserProfile {
            token: "stale".into(),
            username: "ann".into(),
            email: None,
            role: "USER".into(),
        })
        .unwrap();
    h.gateway.set_token(Some("stale".into()));

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false, "message": "", "data": null
        })))
        .mount(&h.server)
        .await;

    let outcome = h.todos.refresh(&TodoFilter::default()).await;
    assert!(!outcome.success);
    assert!(!h.session.is_authenticated());
    assert_eq!(
        h.notifier.messages_at(taskdeck_core::NoticeLevel::Error),
        vec!["Authentication required. Please log in again."]
    );
}

#[tokio::test]
async fn create_then_refresh_then_delete_updates_cache_order() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(page_json(vec![
            todo_json(1, "one"),
            todo_json(2, "two"),
        ]))))
        .mount(&h.server)
        .await;
    assert!(h.todos.refresh(&TodoFilter::default()).await.success);

    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(serde_json::json!({"title": "new task"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(enveloped(todo_json(7, "new task"))),
        )
        .mount(&h.server)
        .await;
    let outcome = h
        .todos
        .create(&taskdeck_core::TodoDraft {
            title: "new task".into(),
            ..Default::default()
        })
        .await;
    assert!(outcome.success);

    let ids: Vec<i64> = h.todos.store().todos().await.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![7, 1, 2]);

    Mock::given(method("DELETE"))
        .and(path("/api/todos/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(serde_json::Value::Null)))
        .mount(&h.server)
        .await;
    assert!(h.todos.delete(7).await.success);

    let ids: Vec<i64> = h.todos.store().todos().await.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn failed_update_rolls_back_over_real_http() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(enveloped(page_json(vec![todo_json(1, "original")]))),
        )
        .mount(&h.server)
        .await;
    assert!(h.todos.refresh(&TodoFilter::default()).await.success);

    Mock::given(method("PUT"))
        .and(path("/api/todos/1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false, "message": "boom", "data": null
        })))
        .mount(&h.server)
        .await;

    let outcome = h
        .todos
        .update(
            1,
            &taskdeck_core::TodoPatch {
                title: Some("renamed".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(!outcome.success);

    let todos = h.todos.store().todos().await;
    assert_eq!(todos[0].title, "original");
}

#[tokio::test]
async fn project_default_flow_over_real_http() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(serde_json::json!([
            {"id": 1, "name": "Inbox", "isDefault": true},
            {"id": 2, "name": "Work", "isDefault": false}
        ]))))
        .mount(&h.server)
        .await;
    assert!(h.projects.refresh().await.success);

    Mock::given(method("PUT"))
        .and(path("/api/projects/2"))
        .and(body_json(serde_json::json!({"isDefault": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(enveloped(serde_json::json!(
            {"id": 2, "name": "Work", "isDefault": true}
        ))))
        .mount(&h.server)
        .await;
    assert!(h.projects.set_default(2).await.success);

    let defaults: Vec<i64> = h
        .projects
        .store()
        .projects()
        .await
        .iter()
        .filter(|p| p.is_default)
        .map(|p| p.id)
        .collect();
    assert_eq!(defaults, vec![2]);
}
