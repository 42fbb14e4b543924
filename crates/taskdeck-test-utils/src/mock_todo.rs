// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted mock implementation of [`TodoGateway`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use taskdeck_core::{
    DashboardStats, Page, TaskdeckError, Todo, TodoDraft, TodoFilter, TodoGateway, TodoPatch,
    TodoStats, TodoStatus,
};

/// Per-operation invocation counters.
///
/// Tests assert on these to verify short-circuit behavior (cache hits,
/// not-found preconditions, empty bulk guards).
#[derive(Default)]
pub struct TodoCalls {
    pub list: AtomicUsize,
    pub get: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub update_status: AtomicUsize,
    pub delete: AtomicUsize,
    pub bulk_delete: AtomicUsize,
    pub bulk_status: AtomicUsize,
    pub stats: AtomicUsize,
    pub dashboard: AtomicUsize,
}

impl TodoCalls {
    /// Total number of gateway invocations across all operations.
    pub fn total(&self) -> usize {
        self.list.load(Ordering::SeqCst)
            + self.get.load(Ordering::SeqCst)
            + self.create.load(Ordering::SeqCst)
            + self.update.load(Ordering::SeqCst)
            + self.update_status.load(Ordering::SeqCst)
            + self.delete.load(Ordering::SeqCst)
            + self.bulk_delete.load(Ordering::SeqCst)
            + self.bulk_status.load(Ordering::SeqCst)
            + self.stats.load(Ordering::SeqCst)
            + self.dashboard.load(Ordering::SeqCst)
    }
}

/// A mock todo gateway that pops pre-scripted results per operation.
#[derive(Default)]
pub struct MockTodoGateway {
    pub calls: TodoCalls,
    list_results: Mutex<VecDeque<Result<Page<Todo>, TaskdeckError>>>,
    get_results: Mutex<VecDeque<Result<Todo, TaskdeckError>>>,
    create_results: Mutex<VecDeque<Result<Todo, TaskdeckError>>>,
    update_results: Mutex<VecDeque<Result<Todo, TaskdeckError>>>,
    status_results: Mutex<VecDeque<Result<Todo, TaskdeckError>>>,
    delete_results: Mutex<VecDeque<Result<(), TaskdeckError>>>,
    bulk_delete_results: Mutex<VecDeque<Result<(), TaskdeckError>>>,
    bulk_status_results: Mutex<VecDeque<Result<Vec<Todo>, TaskdeckError>>>,
    stats_results: Mutex<VecDeque<Result<TodoStats, TaskdeckError>>>,
    dashboard_results: Mutex<VecDeque<Result<DashboardStats, TaskdeckError>>>,
}

impl MockTodoGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Page<Todo>, TaskdeckError>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn push_get(&self, result: Result<Todo, TaskdeckError>) {
        self.get_results.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: Result<Todo, TaskdeckError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn push_update(&self, result: Result<Todo, TaskdeckError>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn push_status(&self, result: Result<Todo, TaskdeckError>) {
        self.status_results.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), TaskdeckError>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    pub fn push_bulk_delete(&self, result: Result<(), TaskdeckError>) {
        self.bulk_delete_results.lock().unwrap().push_back(result);
    }

    pub fn push_bulk_status(&self, result: Result<Vec<Todo>, TaskdeckError>) {
        self.bulk_status_results.lock().unwrap().push_back(result);
    }

    pub fn push_stats(&self, result: Result<TodoStats, TaskdeckError>) {
        self.stats_results.lock().unwrap().push_back(result);
    }

    pub fn push_dashboard(&self, result: Result<DashboardStats, TaskdeckError>) {
        self.dashboard_results.lock().unwrap().push_back(result);
    }

    fn pop<T>(
        queue: &Mutex<VecDeque<Result<T, TaskdeckError>>>,
        op: &str,
    ) -> Result<T, TaskdeckError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TaskdeckError::Internal(format!("no scripted {op} response"))))
    }
}

#[async_trait]
impl TodoGateway for MockTodoGateway {
    async fn list_todos(&self, _filter: &TodoFilter) -> Result<Page<Todo>, TaskdeckError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.list_results, "list_todos")
    }

    async fn get_todo(&self, _id: i64) -> Result<Todo, TaskdeckError> {
        self.calls.get.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.get_results, "get_todo")
    }

    async fn create_todo(&self, _draft: &TodoDraft) -> Result<Todo, TaskdeckError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.create_results, "create_todo")
    }

    async fn update_todo(&self, _id: i64, _patch: &TodoPatch) -> Result<Todo, TaskdeckError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.update_results, "update_todo")
    }

    async fn update_todo_status(
        &self,
        _id: i64,
        _status: TodoStatus,
    ) -> Result<Todo, TaskdeckError> {
        self.calls.update_status.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.status_results, "update_todo_status")
    }

    async fn delete_todo(&self, _id: i64) -> Result<(), TaskdeckError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.delete_results, "delete_todo")
    }

    async fn delete_todos(&self, _ids: &[i64]) -> Result<(), TaskdeckError> {
        self.calls.bulk_delete.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.bulk_delete_results, "delete_todos")
    }

    async fn update_todos_status(
        &self,
        _ids: &[i64],
        _status: TodoStatus,
    ) -> Result<Vec<Todo>, TaskdeckError> {
        self.calls.bulk_status.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.bulk_status_results, "update_todos_status")
    }

    async fn user_stats(&self) -> Result<TodoStats, TaskdeckError> {
        self.calls.stats.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.stats_results, "user_stats")
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, TaskdeckError> {
        self.calls.dashboard.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.dashboard_results, "dashboard_stats")
    }
}
