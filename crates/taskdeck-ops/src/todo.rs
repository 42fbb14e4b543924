// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feedback wrappers around [`TodoStore`] actions.

use std::sync::{Arc, Mutex};

use tracing::debug;

use taskdeck_core::{
    ConfirmPrompt, DashboardStats, Notifier, OpOutcome, TaskdeckError, Todo, TodoDraft,
    TodoFilter, TodoPatch, TodoStats, TodoStatus,
};
use taskdeck_store::TodoStore;

/// Todo operations with confirmation, notification, and outcome envelopes.
pub struct TodoOperations {
    store: Arc<TodoStore>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmPrompt>,
    last_error: Mutex<Option<String>>,
}

impl TodoOperations {
    pub fn new(
        store: Arc<TodoStore>,
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

    pub fn store(&self) -> &TodoStore {
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

    /// Refreshes the todo list. Read-only, so it notifies only on failure.
    pub async fn refresh(&self, filter: &TodoFilter) -> OpOutcome {
        match self.store.refresh(filter).await {
            Ok(()) => OpOutcome::done(),
            Err(err) => self.fail(err),
        }
    }

    /// Refreshes the list and the stats concurrently, reporting one
    /// combined outcome. Only the first failure is surfaced.
    pub async fn refresh_all(&self, filter: &TodoFilter) -> OpOutcome {
        let (list, stats) = tokio::join!(self.store.refresh(filter), self.store.fetch_stats());
        match (list, stats) {
            (Ok(()), Ok(_)) => OpOutcome::done(),
            (Err(err), _) | (_, Err(err)) => self.fail(err),
        }
    }

    pub async fn create(&self, draft: &TodoDraft) -> OpOutcome<Todo> {
        match self.store.create(draft).await {
            Ok(todo) => self.succeed(todo, "Task created."),
            Err(err) => self.fail(err),
        }
    }

    pub async fn update(&self, id: i64, patch: &TodoPatch) -> OpOutcome<Todo> {
        match self.store.update(id, patch).await {
            Ok(todo) => self.succeed(todo, "Task updated."),
            Err(err) => self.fail(err),
        }
    }

    pub async fn set_status(&self, id: i64, status: TodoStatus) -> OpOutcome<Todo> {
        match self.store.set_status(id, status).await {
            Ok(todo) => self.succeed(todo, "Task status updated."),
            Err(err) => self.fail(err),
        }
    }

    /// Deletes one todo after confirmation.
    pub async fn delete(&self, id: i64) -> OpOutcome {
        if !self.confirm.confirm("Delete this task?") {
            debug!(id, "todo delete cancelled");
            return OpOutcome::cancelled();
        }
        match self.store.delete(id).await {
            Ok(()) => self.succeed((), "Task deleted."),
            Err(err) => self.fail(err),
        }
    }

    /// Deletes several todos in one bulk request after a single
    /// confirmation. An empty selection fails immediately: no prompt, no
    /// network call.
    pub async fn delete_many(&self, ids: &[i64]) -> OpOutcome {
        if ids.is_empty() {
            return self.fail(TaskdeckError::EmptySelection);
        }
        if !self.confirm.confirm(&format!("Delete {} tasks?", ids.len())) {
            debug!(count = ids.len(), "bulk todo delete cancelled");
            return OpOutcome::cancelled();
        }
        match self.store.delete_many(ids).await {
            Ok(()) => self.succeed((), &format!("{} tasks deleted.", ids.len())),
            Err(err) => self.fail(err),
        }
    }

    /// Changes the status of several todos in one bulk request. An empty
    /// selection fails immediately without a network call.
    pub async fn set_status_many(
        &self,
        ids: &[i64],
        status: TodoStatus,
    ) -> OpOutcome<Vec<Todo>> {
        if ids.is_empty() {
            return self.fail(TaskdeckError::EmptySelection);
        }
        match self.store.set_status_many(ids, status).await {
            Ok(todos) => {
                let message = format!("{} tasks updated.", todos.len());
                self.succeed(todos, &message)
            }
            Err(err) => self.fail(err),
        }
    }

    /// Fetches stats. Read-only, notifies only on failure.
    pub async fn fetch_stats(&self) -> OpOutcome<TodoStats> {
        match self.store.fetch_stats().await {
            Ok(stats) => OpOutcome::ok(stats),
            Err(err) => self.fail(err),
        }
    }

    /// Fetches the dashboard. Read-only, notifies only on failure.
    pub async fn dashboard(&self) -> OpOutcome<DashboardStats> {
        match self.store.dashboard().await {
            Ok(dashboard) => OpOutcome::ok(dashboard),
            Err(err) => self.fail(err),
        }
    }
}
