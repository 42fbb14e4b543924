// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Taskdeck remote API.
//!
//! Provides [`HttpGateway`] which handles request construction, bearer-token
//! authentication, response-envelope unwrapping, and error translation. On
//! any HTTP 401 the configured [`SessionSink`] is invalidated before the
//! error propagates.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use taskdeck_core::{
    AuthGateway, Credentials, DashboardStats, Envelope, Page, Project, ProjectDraft,
    ProjectGateway, ProjectPatch, SessionSink, SignupRequest, TaskdeckError, Todo, TodoDraft,
    TodoFilter, TodoGateway, TodoPatch, TodoStats, TodoStatus, UserProfile,
};

use crate::error::{network_error, translate_error_body};

/// HTTP gateway for the remote task-management API.
///
/// One instance is shared across all stores; the bearer token is swapped in
/// place on login/logout rather than rebuilding the client.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
    session_sink: Option<Arc<dyn SessionSink>>,
}

#[derive(serde::Serialize)]
struct BulkIds<'a> {
    ids: &'a [i64],
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkStatus<'a> {
    ids: &'a [i64],
    status: TodoStatus,
}

impl HttpGateway {
    /// Creates a gateway for the given base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TaskdeckError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TaskdeckError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            session_sink: None,
        })
    }

    /// Attaches the hook fired when any call receives HTTP 401.
    pub fn with_session_sink(mut self, sink: Arc<dyn SessionSink>) -> Self {
        self.session_sink = Some(sink);
        self
    }

    /// Sets or clears the bearer token used for subsequent requests.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().ok().and_then(|t| t.clone());
        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends a request and unwraps both envelope layers, tolerating a
    /// missing `data` field.
    async fn execute_optional<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Option<T>, TaskdeckError> {
        let response = self.authorized(req).send().await.map_err(network_error)?;
        let status = response.status();
        debug!(status = %status, "response received");

        if !status.is_success() {
            return Err(self.failure(status, response).await);
        }

        let body = response.text().await.map_err(network_error)?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| TaskdeckError::Internal(format!(
                "failed to parse response envelope: {e}"
            )))?;
        Ok(envelope.data)
    }

    /// Like [`execute_optional`], but an absent `data` field is an error.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<T, TaskdeckError> {
        self.execute_optional(req).await?.ok_or_else(|| {
            TaskdeckError::Internal("response envelope contained no data".to_string())
        })
    }

    /// Sends a request where the response payload is irrelevant (deletes).
    async fn execute_empty(&self, req: RequestBuilder) -> Result<(), TaskdeckError> {
        let response = self.authorized(req).send().await.map_err(network_error)?;
        let status = response.status();
        debug!(status = %status, "response received");

        if !status.is_success() {
            return Err(self.failure(status, response).await);
        }
        Ok(())
    }

    async fn failure(&self, status: StatusCode, response: Response) -> TaskdeckError {
        let status_text = status.canonical_reason().unwrap_or("Unknown Error");
        let body = response.text().await.unwrap_or_default();
        let err = translate_error_body(status.as_u16(), status_text, &body);

        if err.is_unauthorized() {
            warn!("received 401, invalidating session");
            if let Some(sink) = &self.session_sink {
                sink.invalidate_session();
            }
        }
        err
    }
}

#[async_trait]
impl TodoGateway for HttpGateway {
    async fn list_todos(&self, filter: &TodoFilter) -> Result<Page<Todo>, TaskdeckError> {
        self.execute(self.client.get(self.url("/api/todos")).query(filter))
            .await
    }

    async fn get_todo(&self, id: i64) -> Result<Todo, TaskdeckError> {
        self.execute(self.client.get(self.url(&format!("/api/todos/{id}"))))
            .await
    }

    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, TaskdeckError> {
        self.execute(self.client.post(self.url("/api/todos")).json(draft))
            .await
    }

    async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, TaskdeckError> {
        self.execute(
            self.client
                .put(self.url(&format!("/api/todos/{id}")))
                .json(patch),
        )
        .await
    }

    async fn update_todo_status(
        &self,
        id: i64,
        status: TodoStatus,
    ) -> Result<Todo, TaskdeckError> {
        self.execute(
            self.client
                .patch(self.url(&format!("/api/todos/{id}/status")))
                .query(&[("status", status)]),
        )
        .await
    }

    async fn delete_todo(&self, id: i64) -> Result<(), TaskdeckError> {
        self.execute_empty(self.client.delete(self.url(&format!("/api/todos/{id}"))))
            .await
    }

    async fn delete_todos(&self, ids: &[i64]) -> Result<(), TaskdeckError> {
        self.execute_empty(
            self.client
                .post(self.url("/api/todos/bulk/delete"))
                .json(&BulkIds { ids }),
        )
        .await
    }

    async fn update_todos_status(
        &self,
        ids: &[i64],
        status: TodoStatus,
    ) -> Result<Vec<Todo>, TaskdeckError> {
        self.execute(
            self.client
                .patch(self.url("/api/todos/bulk/status"))
                .json(&BulkStatus { ids, status }),
        )
        .await
    }

    async fn user_stats(&self) -> Result<TodoStats, TaskdeckError> {
        self.execute(self.client.get(self.url("/api/stats"))).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, TaskdeckError> {
        self.execute(self.client.get(self.url("/api/stats/dashboard")))
            .await
    }
}

#[async_trait]
impl ProjectGateway for HttpGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, TaskdeckError> {
        self.execute(self.client.get(self.url("/api/projects"))).await
    }

    async fn get_project(&self, id: i64) -> Result<Project, TaskdeckError> {
        self.execute(self.client.get(self.url(&format!("/api/projects/{id}"))))
            .await
    }

    async fn default_project(&self) -> Result<Option<Project>, TaskdeckError> {
        // Absence of a default project is a normal outcome.
        match self
            .execute_optional(self.client.get(self.url("/api/projects/default")))
            .await
        {
            Ok(project) => Ok(project),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, TaskdeckError> {
        self.execute(self.client.post(self.url("/api/projects")).json(draft))
            .await
    }

    async fn update_project(
        &self,
        id: i64,
        patch: &ProjectPatch,
    ) -> Result<Project, TaskdeckError> {
        self.execute(
            self.client
                .put(self.url(&format!("/api/projects/{id}")))
                .json(patch),
        )
        .await
    }

    async fn delete_project(&self, id: i64) -> Result<(), TaskdeckError> {
        self.execute_empty(
            self.client
                .delete(self.url(&format!("/api/projects/{id}"))),
        )
        .await
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, TaskdeckError> {
        self.execute(
            self.client
                .post(self.url("/api/auth/login"))
                .json(credentials),
        )
        .await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, TaskdeckError> {
        self.execute(
            self.client
                .post(self.url("/api/auth/signup"))
                .json(request),
        )
        .await
    }
}
