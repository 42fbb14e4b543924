// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text rendering for command output.

use colored::Colorize;

use taskdeck_core::{DashboardStats, Project, Todo, TodoStats, TodoStatus, UserProfile};
use taskdeck_session::TodoTemplate;

fn status_label(status: TodoStatus) -> String {
    match status {
        TodoStatus::Open => status.to_string().yellow().to_string(),
        TodoStatus::InProgress => status.to_string().blue().to_string(),
        TodoStatus::Done => status.to_string().green().to_string(),
    }
}

pub fn todo_line(todo: &Todo) -> String {
    let priority = todo
        .priority
        .map(|p| format!(" [{p}]"))
        .unwrap_or_default();
    let due = todo
        .due_date
        .map(|d| format!(" due {}", d.format("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "{:>5}  {:<12} {}{priority}{due}",
        todo.id,
        status_label(todo.status),
        todo.title
    )
}

pub fn print_todos(todos: &[Todo], total_elements: u64, page: u32, total_pages: u32) {
    if todos.is_empty() {
        println!("No tasks.");
        return;
    }
    for todo in todos {
        println!("{}", todo_line(todo));
    }
    if total_pages > 1 {
        println!(
            "{}",
            format!("page {}/{total_pages}, {total_elements} tasks total", page + 1).dimmed()
        );
    }
}

pub fn print_todo_detail(todo: &Todo) {
    println!("{:>12}  {}", "id".dimmed(), todo.id);
    println!("{:>12}  {}", "title".dimmed(), todo.title);
    println!("{:>12}  {}", "status".dimmed(), status_label(todo.status));
    if let Some(priority) = todo.priority {
        println!("{:>12}  {priority}", "priority".dimmed());
    }
    if let Some(description) = &todo.description {
        println!("{:>12}  {description}", "description".dimmed());
    }
    if let Some(due) = todo.due_date {
        println!("{:>12}  {}", "due".dimmed(), due.format("%Y-%m-%d %H:%M"));
    }
    if let Some(project_id) = todo.project_id {
        println!("{:>12}  {project_id}", "project".dimmed());
    }
    if let Some(completed) = todo.completed_at {
        println!(
            "{:>12}  {}",
            "completed".dimmed(),
            completed.format("%Y-%m-%d %H:%M")
        );
    }
    println!(
        "{:>12}  {}",
        "created".dimmed(),
        todo.created_at.format("%Y-%m-%d %H:%M")
    );
}

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects.");
        return;
    }
    for project in projects {
        let default = if project.is_default {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        let color = project
            .color
            .as_deref()
            .map(|c| format!(" [{c}]"))
            .unwrap_or_default();
        println!("{:>5}  {}{color}{default}", project.id, project.name);
    }
}

pub fn print_stats(stats: &TodoStats) {
    println!("{:>12}  {}", "open".dimmed(), stats.todo_count);
    println!("{:>12}  {}", "in progress".dimmed(), stats.in_progress_count);
    println!("{:>12}  {}", "done".dimmed(), stats.done_count);
    println!(
        "{:>12}  {:.0}%",
        "completion".dimmed(),
        stats.completion_rate * 100.0
    );
}

pub fn print_dashboard(dashboard: &DashboardStats) {
    println!("{:>12}  {}", "total".dimmed(), dashboard.total_count);
    println!("{:>12}  {}", "open".dimmed(), dashboard.todo_count);
    println!(
        "{:>12}  {}",
        "in progress".dimmed(),
        dashboard.in_progress_count
    );
    println!("{:>12}  {}", "done".dimmed(), dashboard.done_count);
    println!(
        "{:>12}  {:.0}%",
        "completion".dimmed(),
        dashboard.completion_rate * 100.0
    );
    println!("{:>12}  {}", "due today".dimmed(), dashboard.due_today_count);
    println!("{:>12}  {}", "overdue".dimmed(), dashboard.overdue_count);
}

pub fn print_templates(templates: &[TodoTemplate]) {
    if templates.is_empty() {
        println!("No templates.");
        return;
    }
    for template in templates {
        println!(
            "{:>14}  {:<20} {}",
            template.id, template.name, template.title
        );
    }
}

pub fn print_profile(user: &UserProfile) {
    println!("{:>10}  {}", "user".dimmed(), user.username);
    if let Some(email) = &user.email {
        println!("{:>10}  {email}", "email".dimmed());
    }
    println!("{:>10}  {}", "role".dimmed(), user.role);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use taskdeck_core::TodoPriority;

    #[test]
    fn todo_line_includes_id_title_and_priority() {
        colored::control::set_override(false);
        let todo = Todo {
            id: 42,
            title: "Ship release".into(),
            description: None,
            status: TodoStatus::InProgress,
            priority: Some(TodoPriority::High),
            due_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            completed_at: None,
            project_id: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
        };
        let line = todo_line(&todo);
        assert!(line.contains("42"));
        assert!(line.contains("Ship release"));
        assert!(line.contains("[high]"));
        assert!(line.contains("due 2024-03-01"));
    }
}
