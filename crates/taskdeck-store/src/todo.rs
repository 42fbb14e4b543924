// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Todo cache store with optimistic mutation and snapshot rollback.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use taskdeck_core::{
    CompletedAtPolicy, DashboardStats, TaskdeckError, Todo, TodoDraft, TodoFilter, TodoGateway,
    TodoPatch, TodoStats, TodoStatus,
};

use crate::loading::LoadingGuard;

/// Mutable cache state. The mapping and the order sequence are always
/// mutated together under one lock.
#[derive(Default)]
struct TodoCache {
    todos: HashMap<i64, Todo>,
    order: Vec<i64>,
    current: Option<i64>,
    stats: Option<TodoStats>,
    total_pages: u32,
    total_elements: u64,
    current_page: u32,
}

impl TodoCache {
    fn snapshot(&self) -> (HashMap<i64, Todo>, Vec<i64>) {
        (self.todos.clone(), self.order.clone())
    }

    fn restore(&mut self, snapshot: (HashMap<i64, Todo>, Vec<i64>)) {
        self.todos = snapshot.0;
        self.order = snapshot.1;
    }

    fn remove(&mut self, id: i64) {
        self.todos.remove(&id);
        self.order.retain(|&cached| cached != id);
        if self.current == Some(id) {
            self.current = None;
        }
        self.total_elements = self.total_elements.saturating_sub(1);
    }
}

/// Cache store for todos.
///
/// Snapshots are taken per action. Concurrent optimistic updates to the
/// same id resolve last-write-wins; the store does not lock per id.
pub struct TodoStore {
    gateway: Arc<dyn TodoGateway>,
    cache: Mutex<TodoCache>,
    loading: AtomicBool,
    policy: CompletedAtPolicy,
}

impl TodoStore {
    pub fn new(gateway: Arc<dyn TodoGateway>, policy: CompletedAtPolicy) -> Self {
        Self {
            gateway,
            cache: Mutex::new(TodoCache::default()),
            loading: AtomicBool::new(false),
            policy,
        }
    }

    /// Replaces the whole cache from one server page.
    ///
    /// On failure the last-known-good state is left untouched.
    pub async fn refresh(&self, filter: &TodoFilter) -> Result<(), TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let page = match self.gateway.list_todos(filter).await {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "todo list refresh failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        cache.order = page.content.iter().map(|t| t.id).collect();
        cache.todos = page.content.into_iter().map(|t| (t.id, t)).collect();
        cache.total_pages = page.total_pages;
        cache.total_elements = page.total_elements;
        cache.current_page = page.number;
        if let Some(current) = cache.current {
            if !cache.todos.contains_key(&current) {
                cache.current = None;
            }
        }
        debug!(count = cache.order.len(), "todo cache refreshed");
        Ok(())
    }

    /// Returns a todo by id, selecting it as current.
    ///
    /// A cache hit short-circuits without any network call; a miss fetches
    /// and inserts, appending the id to the order when absent.
    pub async fn get(&self, id: i64) -> Result<Todo, TaskdeckError> {
        {
            let mut cache = self.cache.lock().await;
            if let Some(todo) = cache.todos.get(&id) {
                let todo = todo.clone();
                cache.current = Some(id);
                return Ok(todo);
            }
        }

        let _guard = LoadingGuard::enter(&self.loading);
        let todo = match self.gateway.get_todo(id).await {
            Ok(todo) => todo,
            Err(err) => {
                warn!(id, error = %err, "todo fetch failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        if !cache.order.contains(&todo.id) {
            cache.order.push(todo.id);
        }
        cache.current = Some(todo.id);
        cache.todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    /// Creates a todo. Not optimistic: the server assigns the id, so the
    /// entity lands in the cache only on success, prepended to the order.
    pub async fn create(&self, draft: &TodoDraft) -> Result<Todo, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let todo = match self.gateway.create_todo(draft).await {
            Ok(todo) => todo,
            Err(err) => {
                warn!(error = %err, "todo create failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        cache.order.insert(0, todo.id);
        cache.todos.insert(todo.id, todo.clone());
        cache.total_elements += 1;
        Ok(todo)
    }

    /// Optimistic partial update with snapshot rollback.
    ///
    /// Requires the todo to be cached; returns `NotFound` without a network
    /// call otherwise.
    pub async fn update(&self, id: i64, patch: &TodoPatch) -> Result<Todo, TaskdeckError> {
        let snapshot = {
            let mut cache = self.cache.lock().await;
            let Some(base) = cache.todos.get(&id) else {
                return Err(TaskdeckError::NotFound { entity: "todo", id });
            };
            let snapshot = cache.snapshot();
            let mut optimistic = patch.overlay(base);
            optimistic.updated_at = Some(Utc::now());
            cache.todos.insert(id, optimistic);
            snapshot
        };

        let _guard = LoadingGuard::enter(&self.loading);
        match self.gateway.update_todo(id, patch).await {
            Ok(entity) => {
                let entity = self.normalize(entity);
                let mut cache = self.cache.lock().await;
                cache.todos.insert(id, entity.clone());
                Ok(entity)
            }
            Err(err) => {
                warn!(id, error = %err, "todo update failed, rolling back");
                self.cache.lock().await.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Optimistic status change with snapshot rollback.
    ///
    /// Entering `Done` stamps `completed_at`; leaving `Done` applies the
    /// configured retention policy.
    pub async fn set_status(&self, id: i64, status: TodoStatus) -> Result<Todo, TaskdeckError> {
        let snapshot = {
            let mut cache = self.cache.lock().await;
            let Some(base) = cache.todos.get(&id) else {
                return Err(TaskdeckError::NotFound { entity: "todo", id });
            };
            let snapshot = cache.snapshot();
            let optimistic = self.with_status(base, status);
            cache.todos.insert(id, optimistic);
            snapshot
        };

        let _guard = LoadingGuard::enter(&self.loading);
        match self.gateway.update_todo_status(id, status).await {
            Ok(entity) => {
                let entity = self.normalize(entity);
                let mut cache = self.cache.lock().await;
                cache.todos.insert(id, entity.clone());
                Ok(entity)
            }
            Err(err) => {
                warn!(id, error = %err, "todo status change failed, rolling back");
                self.cache.lock().await.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Deletes a todo. Gateway first; the cache entry is removed only once
    /// the server confirms.
    pub async fn delete(&self, id: i64) -> Result<(), TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        if let Err(err) = self.gateway.delete_todo(id).await {
            warn!(id, error = %err, "todo delete failed");
            return Err(err);
        }
        self.cache.lock().await.remove(id);
        Ok(())
    }

    /// Deletes several todos in a single bulk request.
    pub async fn delete_many(&self, ids: &[i64]) -> Result<(), TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        if let Err(err) = self.gateway.delete_todos(ids).await {
            warn!(count = ids.len(), error = %err, "bulk todo delete failed");
            return Err(err);
        }
        let mut cache = self.cache.lock().await;
        for &id in ids {
            cache.remove(id);
        }
        Ok(())
    }

    /// Changes the status of several todos in a single bulk request,
    /// reconciling the returned entities into the cache.
    pub async fn set_status_many(
        &self,
        ids: &[i64],
        status: TodoStatus,
    ) -> Result<Vec<Todo>, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let entities = match self.gateway.update_todos_status(ids, status).await {
            Ok(entities) => entities,
            Err(err) => {
                warn!(count = ids.len(), error = %err, "bulk status change failed");
                return Err(err);
            }
        };

        let entities: Vec<Todo> = entities.into_iter().map(|e| self.normalize(e)).collect();
        let mut cache = self.cache.lock().await;
        for entity in &entities {
            if !cache.order.contains(&entity.id) {
                cache.order.push(entity.id);
            }
            cache.todos.insert(entity.id, entity.clone());
        }
        Ok(entities)
    }

    /// Fetches aggregate counters, caching the result.
    pub async fn fetch_stats(&self) -> Result<TodoStats, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let stats = match self.gateway.user_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                warn!(error = %err, "stats fetch failed");
                return Err(err);
            }
        };
        self.cache.lock().await.stats = Some(stats.clone());
        Ok(stats)
    }

    /// Fetches the dashboard payload. Returned, never cached.
    pub async fn dashboard(&self) -> Result<DashboardStats, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        self.gateway.dashboard_stats().await.map_err(|err| {
            warn!(error = %err, "dashboard fetch failed");
            err
        })
    }

    /// Resets mapping, order, selection, stats, and paging.
    pub async fn clear(&self) {
        *self.cache.lock().await = TodoCache::default();
    }

    /// Cached todos in display order.
    pub async fn todos(&self) -> Vec<Todo> {
        let cache = self.cache.lock().await;
        cache
            .order
            .iter()
            .filter_map(|id| cache.todos.get(id).cloned())
            .collect()
    }

    /// Last cached stats, if any.
    pub async fn stats(&self) -> Option<TodoStats> {
        self.cache.lock().await.stats.clone()
    }

    /// Currently selected todo, if any.
    pub async fn current(&self) -> Option<Todo> {
        let cache = self.cache.lock().await;
        cache.current.and_then(|id| cache.todos.get(&id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn total_pages(&self) -> u32 {
        self.cache.lock().await.total_pages
    }

    pub async fn total_elements(&self) -> u64 {
        self.cache.lock().await.total_elements
    }

    pub async fn current_page(&self) -> u32 {
        self.cache.lock().await.current_page
    }

    /// Synthesizes the optimistic entity for a status change.
    fn with_status(&self, base: &Todo, status: TodoStatus) -> Todo {
        let mut next = base.clone();
        let now = Utc::now();
        if status == TodoStatus::Done && base.status != TodoStatus::Done {
            next.completed_at = Some(now);
        } else if status != TodoStatus::Done && base.status == TodoStatus::Done {
            if self.policy == CompletedAtPolicy::Clear {
                next.completed_at = None;
            }
        }
        next.status = status;
        next.updated_at = Some(now);
        next
    }

    /// Applies the retention policy to an authoritative entity so the
    /// cached invariant holds regardless of what the server echoes back.
    fn normalize(&self, mut entity: Todo) -> Todo {
        if entity.status != TodoStatus::Done && self.policy == CompletedAtPolicy::Clear {
            entity.completed_at = None;
        }
        entity
    }
}
