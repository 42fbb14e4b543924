// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project cache store.
//!
//! Same optimistic shape as the todo store, plus the default-project
//! singleton invariant: at most one cached project carries `is_default`,
//! and every write that sets it clears the flag everywhere else.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use taskdeck_core::{Project, ProjectDraft, ProjectGateway, ProjectPatch, TaskdeckError};

use crate::loading::LoadingGuard;

#[derive(Default)]
struct ProjectCache {
    projects: HashMap<i64, Project>,
    order: Vec<i64>,
    current: Option<i64>,
    default_id: Option<i64>,
}

impl ProjectCache {
    fn snapshot(&self) -> (HashMap<i64, Project>, Vec<i64>, Option<i64>) {
        (self.projects.clone(), self.order.clone(), self.default_id)
    }

    fn restore(&mut self, snapshot: (HashMap<i64, Project>, Vec<i64>, Option<i64>)) {
        self.projects = snapshot.0;
        self.order = snapshot.1;
        self.default_id = snapshot.2;
    }

    /// Writes an entity and re-establishes the singleton invariant.
    fn reconcile(&mut self, entity: Project) {
        let id = entity.id;
        let is_default = entity.is_default;
        if !self.order.contains(&id) {
            self.order.push(id);
        }
        self.projects.insert(id, entity);
        if is_default {
            for (&other, project) in self.projects.iter_mut() {
                if other != id {
                    project.is_default = false;
                }
            }
            self.default_id = Some(id);
        } else if self.default_id == Some(id) {
            self.default_id = None;
        }
    }

    fn remove(&mut self, id: i64) {
        self.projects.remove(&id);
        self.order.retain(|&cached| cached != id);
        if self.current == Some(id) {
            self.current = None;
        }
        if self.default_id == Some(id) {
            self.default_id = None;
        }
    }
}

/// Cache store for projects.
pub struct ProjectStore {
    gateway: Arc<dyn ProjectGateway>,
    cache: Mutex<ProjectCache>,
    loading: AtomicBool,
}

impl ProjectStore {
    pub fn new(gateway: Arc<dyn ProjectGateway>) -> Self {
        Self {
            gateway,
            cache: Mutex::new(ProjectCache::default()),
            loading: AtomicBool::new(false),
        }
    }

    /// Replaces the whole cache from the server list.
    pub async fn refresh(&self) -> Result<(), TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let projects = match self.gateway.list_projects().await {
            Ok(projects) => projects,
            Err(err) => {
                warn!(error = %err, "project list refresh failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        cache.order = projects.iter().map(|p| p.id).collect();
        cache.default_id = projects.iter().find(|p| p.is_default).map(|p| p.id);
        cache.projects = projects.into_iter().map(|p| (p.id, p)).collect();
        if let Some(current) = cache.current {
            if !cache.projects.contains_key(&current) {
                cache.current = None;
            }
        }
        debug!(count = cache.order.len(), "project cache refreshed");
        Ok(())
    }

    /// Returns a project by id, selecting it as current. Cache hits
    /// short-circuit without a network call.
    pub async fn get(&self, id: i64) -> Result<Project, TaskdeckError> {
        {
            let mut cache = self.cache.lock().await;
            if let Some(project) = cache.projects.get(&id) {
                let project = project.clone();
                cache.current = Some(id);
                return Ok(project);
            }
        }

        let _guard = LoadingGuard::enter(&self.loading);
        let project = match self.gateway.get_project(id).await {
            Ok(project) => project,
            Err(err) => {
                warn!(id, error = %err, "project fetch failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        cache.reconcile(project.clone());
        cache.current = Some(project.id);
        Ok(project)
    }

    /// Fetches the server-designated default project. Absence is a normal
    /// outcome and leaves the cached default reference cleared.
    pub async fn fetch_default(&self) -> Result<Option<Project>, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let result = match self.gateway.default_project().await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "default project fetch failed");
                return Err(err);
            }
        };

        let mut cache = self.cache.lock().await;
        match result {
            Some(project) => {
                cache.reconcile(project.clone());
                Ok(Some(project))
            }
            None => {
                cache.default_id = None;
                Ok(None)
            }
        }
    }

    /// Creates a project. Not optimistic; appended to the order on success.
    pub async fn create(&self, draft: &ProjectDraft) -> Result<Project, TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        let project = match self.gateway.create_project(draft).await {
            Ok(project) => project,
            Err(err) => {
                warn!(error = %err, "project create failed");
                return Err(err);
            }
        };

        self.cache.lock().await.reconcile(project.clone());
        Ok(project)
    }

    /// Optimistic partial update with snapshot rollback.
    pub async fn update(&self, id: i64, patch: &ProjectPatch) -> Result<Project, TaskdeckError> {
        let snapshot = {
            let mut cache = self.cache.lock().await;
            let Some(base) = cache.projects.get(&id) else {
                return Err(TaskdeckError::NotFound {
                    entity: "project",
                    id,
                });
            };
            let snapshot = cache.snapshot();
            let mut optimistic = patch.overlay(base);
            optimistic.updated_at = Some(Utc::now());
            cache.reconcile(optimistic);
            snapshot
        };

        let _guard = LoadingGuard::enter(&self.loading);
        match self.gateway.update_project(id, patch).await {
            Ok(entity) => {
                let mut cache = self.cache.lock().await;
                cache.reconcile(entity.clone());
                Ok(entity)
            }
            Err(err) => {
                warn!(id, error = %err, "project update failed, rolling back");
                self.cache.lock().await.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Deletes a project, clearing current and default references when
    /// they point at it.
    pub async fn delete(&self, id: i64) -> Result<(), TaskdeckError> {
        let _guard = LoadingGuard::enter(&self.loading);
        if let Err(err) = self.gateway.delete_project(id).await {
            warn!(id, error = %err, "project delete failed");
            return Err(err);
        }
        self.cache.lock().await.remove(id);
        Ok(())
    }

    pub async fn clear(&self) {
        *self.cache.lock().await = ProjectCache::default();
    }

    /// Cached projects in server order.
    pub async fn projects(&self) -> Vec<Project> {
        let cache = self.cache.lock().await;
        cache
            .order
            .iter()
            .filter_map(|id| cache.projects.get(id).cloned())
            .collect()
    }

    /// Display projection: default first, then ascending position with
    /// missing positions treated as 0.
    pub async fn sorted(&self) -> Vec<Project> {
        let mut projects = self.projects().await;
        projects.sort_by_key(|p| (!p.is_default, p.position.unwrap_or(0)));
        projects
    }

    /// Cached default project, if any.
    pub async fn default_project(&self) -> Option<Project> {
        let cache = self.cache.lock().await;
        cache.default_id.and_then(|id| cache.projects.get(&id).cloned())
    }

    /// Currently selected project, if any.
    pub async fn current(&self) -> Option<Project> {
        let cache = self.cache.lock().await;
        cache.current.and_then(|id| cache.projects.get(&id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_test_utils::{fixtures, MockProjectGateway};

    async fn seeded(gateway: &Arc<MockProjectGateway>, projects: Vec<Project>) -> ProjectStore {
        gateway.push_list(Ok(projects));
        let store = ProjectStore::new(gateway.clone());
        store.refresh().await.unwrap();
        store
    }

    #[tokio::test]
    async fn refresh_tracks_default_from_flags() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(
            &gateway,
            vec![
                fixtures::project(1, "Work"),
                fixtures::default_project(2, "Inbox"),
            ],
        )
        .await;

        assert_eq!(store.default_project().await.unwrap().id, 2);
        let ids: Vec<i64> = store.projects().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn get_hits_cache_without_network_call() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(&gateway, vec![fixtures::project(1, "Work")]).await;

        let project = store.get(1).await.unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(gateway.calls.get.load(Ordering::SeqCst), 0);
        assert_eq!(store.current().await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn create_appends_to_order() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(&gateway, vec![fixtures::project(1, "Work")]).await;

        gateway.push_create(Ok(fixtures::project(5, "Home")));
        store
            .create(&ProjectDraft {
                name: "Home".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        let ids: Vec<i64> = store.projects().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[tokio::test]
    async fn default_singleton_holds_across_create_and_update() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(
            &gateway,
            vec![
                fixtures::default_project(1, "Inbox"),
                fixtures::project(2, "Work"),
            ],
        )
        .await;

        // Server makes a newly created project the default.
        gateway.push_create(Ok(fixtures::default_project(3, "Home")));
        store
            .create(&ProjectDraft {
                name: "Home".into(),
                is_default: true,
                ..Default::default()
            })
            .await
            .unwrap();

        let defaults: Vec<i64> = store
            .projects()
            .await
            .iter()
            .filter(|p| p.is_default)
            .map(|p| p.id)
            .collect();
        assert_eq!(defaults, vec![3]);
        assert_eq!(store.default_project().await.unwrap().id, 3);

        // Then an update moves the flag again.
        gateway.push_update(Ok(fixtures::default_project(2, "Work")));
        store
            .update(
                2,
                &ProjectPatch {
                    is_default: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let defaults: Vec<i64> = store
            .projects()
            .await
            .iter()
            .filter(|p| p.is_default)
            .map(|p| p.id)
            .collect();
        assert_eq!(defaults, vec![2]);
        assert_eq!(store.default_project().await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn update_rolls_back_default_flag_on_failure() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(
            &gateway,
            vec![
                fixtures::default_project(1, "Inbox"),
                fixtures::project(2, "Work"),
            ],
        )
        .await;
        let before = store.projects().await;

        gateway.push_update(Err(TaskdeckError::Network {
            message: "down".into(),
            source: None,
        }));
        let patch = ProjectPatch {
            is_default: Some(true),
            ..Default::default()
        };
        assert!(store.update(2, &patch).await.is_err());

        assert_eq!(store.projects().await, before);
        assert_eq!(store.default_project().await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn update_missing_id_skips_network() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(&gateway, vec![fixtures::project(1, "Work")]).await;

        let err = store
            .update(9, &ProjectPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(gateway.calls.update.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn fetch_default_tolerates_absence() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(&gateway, vec![fixtures::project(1, "Work")]).await;

        gateway.push_default(Ok(None));
        assert!(store.fetch_default().await.unwrap().is_none());
        assert!(store.default_project().await.is_none());

        gateway.push_default(Ok(Some(fixtures::default_project(1, "Work"))));
        assert!(store.fetch_default().await.unwrap().is_some());
        assert_eq!(store.default_project().await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn delete_clears_current_and_default_references() {
        let gateway = Arc::new(MockProjectGateway::new());
        let store = seeded(&gateway, vec![fixtures::default_project(1, "Inbox")]).await;
        store.get(1).await.unwrap();

        gateway.push_delete(Ok(()));
        store.delete(1).await.unwrap();

        assert!(store.projects().await.is_empty());
        assert!(store.current().await.is_none());
        assert!(store.default_project().await.is_none());
    }

    #[tokio::test]
    async fn sorted_puts_default_first_then_position() {
        let gateway = Arc::new(MockProjectGateway::new());
        let mut high = fixtures::project(1, "High");
        high.position = Some(5);
        let mut low = fixtures::project(2, "Low");
        low.position = Some(1);
        let unpositioned = fixtures::project(3, "Unpositioned");
        let mut default = fixtures::default_project(4, "Inbox");
        default.position = Some(9);

        let store = seeded(&gateway, vec![high, low, unpositioned, default]).await;
        let ids: Vec<i64> = store.sorted().await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }
}
