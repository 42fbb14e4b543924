// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted mock implementation of [`ProjectGateway`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use taskdeck_core::{Project, ProjectDraft, ProjectGateway, ProjectPatch, TaskdeckError};

/// Per-operation invocation counters.
#[derive(Default)]
pub struct ProjectCalls {
    pub list: AtomicUsize,
    pub get: AtomicUsize,
    pub default: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

/// A mock project gateway that pops pre-scripted results per operation.
#[derive(Default)]
pub struct MockProjectGateway {
    pub calls: ProjectCalls,
    list_results: Mutex<VecDeque<Result<Vec<Project>, TaskdeckError>>>,
    get_results: Mutex<VecDeque<Result<Project, TaskdeckError>>>,
    default_results: Mutex<VecDeque<Result<Option<Project>, TaskdeckError>>>,
    create_results: Mutex<VecDeque<Result<Project, TaskdeckError>>>,
    update_results: Mutex<VecDeque<Result<Project, TaskdeckError>>>,
    delete_results: Mutex<VecDeque<Result<(), TaskdeckError>>>,
}

impl MockProjectGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, result: Result<Vec<Project>, TaskdeckError>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn push_get(&self, result: Result<Project, TaskdeckError>) {
        self.get_results.lock().unwrap().push_back(result);
    }

    pub fn push_default(&self, result: Result<Option<Project>, TaskdeckError>) {
        self.default_results.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: Result<Project, TaskdeckError>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn push_update(&self, result: Result<Project, TaskdeckError>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: Result<(), TaskdeckError>) {
        self.delete_results.lock().unwrap().push_back(result);
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
impl ProjectGateway for MockProjectGateway {
    async fn list_projects(&self) -> Result<Vec<Project>, TaskdeckError> {
        self.calls.list.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.list_results, "list_projects")
    }

    async fn get_project(&self, _id: i64) -> Result<Project, TaskdeckError> {
        self.calls.get.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.get_results, "get_project")
    }

    async fn default_project(&self) -> Result<Option<Project>, TaskdeckError> {
        self.calls.default.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.default_results, "default_project")
    }

    async fn create_project(&self, _draft: &ProjectDraft) -> Result<Project, TaskdeckError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.create_results, "create_project")
    }

    async fn update_project(
        &self,
        _id: i64,
        _patch: &ProjectPatch,
    ) -> Result<Project, TaskdeckError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.update_results, "update_project")
    }

    async fn delete_project(&self, _id: i64) -> Result<(), TaskdeckError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.delete_results, "delete_project")
    }
}
