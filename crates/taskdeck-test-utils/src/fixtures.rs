// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity fixtures for tests.

use chrono::{TimeZone, Utc};
use taskdeck_core::{Page, Project, Todo, TodoStats, TodoStatus};

/// An open todo with fixed timestamps.
pub fn todo(id: i64, title: &str) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        description: None,
        status: TodoStatus::Open,
        priority: None,
        due_date: None,
        completed_at: None,
        project_id: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    }
}

/// A completed todo with `completed_at` set.
pub fn done_todo(id: i64, title: &str) -> Todo {
    let mut t = todo(id, title);
    t.status = TodoStatus::Done;
    t.completed_at = Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    t
}

/// A non-default project.
pub fn project(id: i64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        color: None,
        position: None,
        is_default: false,
        created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        updated_at: None,
    }
}

/// A project carrying the default flag.
pub fn default_project(id: i64, name: &str) -> Project {
    let mut p = project(id, name);
    p.is_default = true;
    p
}

/// A single-page result wrapping the given todos.
pub fn page_of(todos: Vec<Todo>) -> Page<Todo> {
    let total = todos.len() as u64;
    Page {
        content: todos,
        total_pages: 1,
        total_elements: total,
        size: 20,
        number: 0,
        first: true,
        last: true,
    }
}

/// Stats with the given counters.
pub fn stats(todo_count: u64, in_progress_count: u64, done_count: u64) -> TodoStats {
    let total = todo_count + in_progress_count + done_count;
    TodoStats {
        todo_count,
        in_progress_count,
        done_count,
        completion_rate: if total == 0 {
            0.0
        } else {
            done_count as f64 / total as f64
        },
    }
}
