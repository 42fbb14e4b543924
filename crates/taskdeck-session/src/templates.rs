// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Saved todo templates, persisted as one JSON list.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use taskdeck_core::{TaskdeckError, Todo, TodoDraft, TodoPriority};

/// A reusable todo blueprint saved from an existing task.
///
/// The id is the creation time in milliseconds, which doubles as a
/// collision-free-enough key for a local single-user file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoTemplate {
    pub id: i64,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TodoPriority>,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl TodoTemplate {
    /// Turns the template back into a creatable draft.
    pub fn to_draft(&self) -> TodoDraft {
        TodoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: None,
            project_id: self.project_id,
        }
    }
}

/// Template list persisted as one JSON file, loaded and rewritten
/// wholesale. An unreadable or corrupt file degrades to an empty list.
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Saves a new template copied from an existing todo.
    pub fn save_from(&self, todo: &Todo, name: &str) -> Result<TodoTemplate, TaskdeckError> {
        let template = TodoTemplate {
            id: Utc::now().timestamp_millis(),
            name: name.to_string(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            priority: todo.priority,
            project_id: todo.project_id,
            created_at: Utc::now(),
        };
        let mut templates = self.list();
        templates.push(template.clone());
        self.write(&templates)?;
        Ok(template)
    }

    /// All saved templates, oldest first.
    pub fn list(&self) -> Vec<TodoTemplate> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(templates) => templates,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "template file corrupt, ignoring");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: i64) -> Option<TodoTemplate> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// Deletes a template by id.
    pub fn delete(&self, id: i64) -> Result<(), TaskdeckError> {
        let mut templates = self.list();
        let before = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == before {
            return Err(TaskdeckError::NotFound {
                entity: "template",
                id,
            });
        }
        self.write(&templates)
    }

    fn write(&self, templates: &[TodoTemplate]) -> Result<(), TaskdeckError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| TaskdeckError::Storage {
                message: format!("could not create {}", parent.display()),
                source: Some(Box::new(err)),
            })?;
        }
        let raw = serde_json::to_string_pretty(templates).map_err(|err| TaskdeckError::Storage {
            message: "could not serialize templates".into(),
            source: Some(Box::new(err)),
        })?;
        fs::write(&self.path, raw).map_err(|err| TaskdeckError::Storage {
            message: format!("could not write {}", self.path.display()),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_test_utils::fixtures;
    use tempfile::TempDir;

    #[test]
    fn save_list_get_delete_cycle() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::open(dir.path().join("templates.json"));
        assert!(store.list().is_empty());

        let mut source = fixtures::todo(1, "Weekly report");
        source.description = Some("Summarize the sprint".into());
        let saved = store.save_from(&source, "report").unwrap();
        assert_eq!(saved.title, "Weekly report");

        let listed = store.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(store.get(saved.id).unwrap(), listed[0]);

        store.delete(saved.id).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn delete_missing_template_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::open(dir.path().join("templates.json"));
        let err = store.delete(123).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn corrupt_file_degrades_to_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "[{broken").unwrap();
        let store = TemplateStore::open(&path);
        assert!(store.list().is_empty());
    }

    #[test]
    fn to_draft_copies_creatable_fields() {
        let dir = TempDir::new().unwrap();
        let store = TemplateStore::open(dir.path().join("templates.json"));
        let mut source = fixtures::todo(1, "Prep meeting");
        source.priority = Some(TodoPriority::High);
        source.project_id = Some(4);

        let template = store.save_from(&source, "meeting").unwrap();
        let draft = template.to_draft();
        assert_eq!(draft.title, "Prep meeting");
        assert_eq!(draft.priority, Some(TodoPriority::High));
        assert_eq!(draft.project_id, Some(4));
        assert!(draft.due_date.is_none());
    }
}
