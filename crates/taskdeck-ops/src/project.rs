// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feedback wrappers around [`ProjectStore`] actions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use taskdeck_core::{
    ConfirmPrompt, Notifier, OpOutcome, Project, ProjectDraft, ProjectPatch, TaskdeckError,
};
use taskdeck_store::ProjectStore;

/// Project operations with confirmation, notification, and outcome
/// envelopes.
pub struct ProjectOperations {
    store: Arc<ProjectStore>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    last_error: Mutex<Option<String>>,
}

impl ProjectOperations {
    pub fn new(
        store: Arc<ProjectStore>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            store,
            notifier,
            confirm,
            last_error: Mutex::new(None),
        }
    }

    /// Message of the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    fn fail<T>(&self, err: TaskdeckError) -> OpOutcome<T> {
        let message = err.user_message();
        if let Ok(mut guard) = self.last_error.lock() {
            *guard = Some(message.clone());
        }
        self.notifier.error(&message);
        OpOutcome::failed(err)
    }

    fn succeed<T>(&self, data: T, message: &str) -> OpOutcome<T> {
        if let Ok(mut guard) = self.last_error.lock() {
            *guard = None;
        }
        self.notifier.success(message);
        OpOutcome::ok(data)
    }

    /// Refreshes the project list. Read-only, notifies only on failure.
    pub async fn refresh(&self) -> OpOutcome {
        match self.store.refresh().await {
            Ok(()) => OpOutcome::done(),
            Err(err) => self.fail(err),
        }
    }

    pub async fn create(&self, draft: &ProjectDraft) -> OpOutcome<Project> {
        match self.store.create(draft).await {
            Ok(project) => self.succeed(project, "Project created."),
            Err(err) => self.fail(err),
        }
    }

    pub async fn update(&self, id: i64, patch: &ProjectPatch) -> OpOutcome<Project> {
        match self.store.update(id, patch).await {
            Ok(project) => self.succeed(project, "Project updated."),
            Err(err) => self.fail(err),
        }
    }

    /// Marks a project as the default.
    pub async fn set_default(&self, id: i64) -> OpOutcome<Project> {
        let patch = ProjectPatch {
            is_default: Some(true),
            ..Default::default()
        };
        match self.store.update(id, &patch).await {
            Ok(project) => self.succeed(project, "Default project updated."),
            Err(err) => self.fail(err),
        }
    }

    /// Deletes one project after confirmation.
    pub async fn delete(&self, id: i64) -> OpOutcome {
        if !self.confirm.confirm("Delete this project?") {
            debug!(id, "project delete cancelled");
            return OpOutcome::cancelled();
        }
        match self.store.delete(id).await {
            Ok(()) => self.succeed((), "Project deleted."),
            Err(err) => self.fail(err),
        }
    }

    /// Fetches the default project. Read-only, notifies only on failure;
    /// absence is a success with no data.
    pub async fn fetch_default(&self) -> OpOutcome<Project> {
        match self.store.fetch_default().await {
            Ok(Some(project)) => OpOutcome::ok(project),
            Ok(None) => OpOutcome::done(),
            Err(err) => self.fail(err),
        }
    }
}
