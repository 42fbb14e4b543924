// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote API gateway traits.
//!
//! Each method corresponds to one remote operation; the stores treat every
//! call as an opaque asynchronous function that either resolves with the
//! unwrapped response payload or rejects with a [`TaskdeckError`].

use async_trait::async_trait;

use crate::error::TaskdeckError;
use crate::types::{
    Credentials, DashboardStats, Page, Project, ProjectDraft, ProjectPatch, SignupRequest,
    Todo, TodoDraft, TodoFilter, TodoPatch, TodoStats, TodoStatus, UserProfile,
};

/// Gateway operations for todo entities.
#[async_trait]
pub trait TodoGateway: Send + Sync {
    /// Lists todos matching the filter; returns one server page.
    async fn list_todos(&self, filter: &TodoFilter) -> Result<Page<Todo>, TaskdeckError>;

    /// Fetches a single todo by identifier.
    async fn get_todo(&self, id: i64) -> Result<Todo, TaskdeckError>;

    /// Creates a todo; the server assigns the identifier.
    async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, TaskdeckError>;

    /// Applies a partial update and returns the authoritative entity.
    async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, TaskdeckError>;

    /// Changes only the status and returns the authoritative entity.
    async fn update_todo_status(
        &self,
        id: i64,
        status: TodoStatus,
    ) -> Result<Todo, TaskdeckError>;

    /// Deletes a todo.
    async fn delete_todo(&self, id: i64) -> Result<(), TaskdeckError>;

    /// Deletes several todos in a single request.
    async fn delete_todos(&self, ids: &[i64]) -> Result<(), TaskdeckError>;

    /// Changes the status of several todos in a single request.
    async fn update_todos_status(
        &self,
        ids: &[i64],
        status: TodoStatus,
    ) -> Result<Vec<Todo>, TaskdeckError>;

    /// Aggregate counters for the current user.
    async fn user_stats(&self) -> Result<TodoStats, TaskdeckError>;

    /// Dashboard payload for the current user.
    async fn dashboard_stats(&self) -> Result<DashboardStats, TaskdeckError>;
}

/// Gateway operations for project entities.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, TaskdeckError>;

    async fn get_project(&self, id: i64) -> Result<Project, TaskdeckError>;

    /// Fetches the default project. Absence is a normal outcome, not an
    /// error; this is the only operation with that contract.
    async fn default_project(&self) -> Result<Option<Project>, TaskdeckError>;

    async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, TaskdeckError>;

    async fn update_project(
        &self,
        id: i64,
        patch: &ProjectPatch,
    ) -> Result<Project, TaskdeckError>;

    async fn delete_project(&self, id: i64) -> Result<(), TaskdeckError>;
}

/// Gateway operations for authentication.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, TaskdeckError>;

    async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, TaskdeckError>;
}
