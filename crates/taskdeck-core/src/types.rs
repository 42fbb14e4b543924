// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Taskdeck workspace.
//!
//! Wire representations match the remote API: entity JSON is camelCase,
//! enum values are SCREAMING_SNAKE. `Display`/`FromStr` implementations
//! use kebab-case for terminal input and output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::TaskdeckError;

/// Lifecycle status of a todo.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TodoStatus {
    #[serde(rename = "TODO")]
    Open,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

/// Priority of a todo.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TodoPriority {
    High,
    Medium,
    Low,
}

/// A single trackable task, as owned by the remote system.
///
/// The cache store holds the in-memory copy; the server owns the durable one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TodoStatus,
    #[serde(default)]
    pub priority: Option<TodoPriority>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Set iff `status == Done`; stamped on transition into `Done`.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TodoPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

/// Partial update payload for a todo. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TodoPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
}

impl TodoPatch {
    /// Overlay the patch's set fields onto an existing entity.
    ///
    /// Timestamps are not touched here; the store stamps `updated_at`
    /// when it synthesizes the optimistic entity.
    pub fn overlay(&self, base: &Todo) -> Todo {
        let mut merged = base.clone();
        if let Some(title) = &self.title {
            merged.title = title.clone();
        }
        if let Some(description) = &self.description {
            merged.description = Some(description.clone());
        }
        if let Some(priority) = self.priority {
            merged.priority = Some(priority);
        }
        if let Some(due_date) = self.due_date {
            merged.due_date = Some(due_date);
        }
        if let Some(project_id) = self.project_id {
            merged.project_id = Some(project_id);
        }
        merged
    }
}

/// Search / filter criteria for listing todos, sent as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TodoPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// One page of results, mirroring the server's page object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub size: u32,
    /// Current page number, 0-based.
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

/// A named grouping of todos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Manual sort position; missing is treated as 0 when ordering.
    #[serde(default)]
    pub position: Option<i32>,
    /// At most one cached project carries this flag at any time.
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default)]
    pub is_default: bool,
}

/// Partial update payload for a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl ProjectPatch {
    /// Overlay the patch's set fields onto an existing entity.
    pub fn overlay(&self, base: &Project) -> Project {
        let mut merged = base.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(color) = &self.color {
            merged.color = Some(color.clone());
        }
        if let Some(position) = self.position {
            merged.position = Some(position);
        }
        if let Some(is_default) = self.is_default {
            merged.is_default = is_default;
        }
        merged
    }
}

/// Aggregate todo counters computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    #[serde(default)]
    pub todo_count: u64,
    #[serde(default)]
    pub in_progress_count: u64,
    #[serde(default)]
    pub done_count: u64,
    #[serde(default)]
    pub completion_rate: f64,
}

/// Dashboard payload computed server-side; returned, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub todo_count: u64,
    #[serde(default)]
    pub in_progress_count: u64,
    #[serde(default)]
    pub done_count: u64,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub due_today_count: u64,
    #[serde(default)]
    pub overdue_count: u64,
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Authenticated user profile returned by login/signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// The application envelope wrapping every API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// What to do with `completed_at` when a todo leaves `Done`.
///
/// The remote API is ambiguous here, so the choice is explicit
/// configuration rather than a guess.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CompletedAtPolicy {
    /// Clear the completion timestamp when leaving `Done`.
    #[default]
    Clear,
    /// Keep the timestamp from the last completion.
    Retain,
}

/// Uniform result envelope returned by every feedback-layer operation.
///
/// Callers branch on the fields instead of catching errors; feedback-layer
/// functions never propagate.
#[derive(Debug)]
pub struct OpOutcome<T = ()> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<TaskdeckError>,
    pub cancelled: bool,
}

impl<T> OpOutcome<T> {
    /// Successful outcome carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            cancelled: false,
        }
    }

    /// Successful outcome with no data (deletes, refreshes).
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            cancelled: false,
        }
    }

    /// Failed outcome carrying the underlying error.
    pub fn failed(error: TaskdeckError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            cancelled: false,
        }
    }

    /// The user declined a confirmation prompt; not a failure.
    pub fn cancelled() -> Self {
        Self {
            success: false,
            data: None,
            error: None,
            cancelled: true,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
