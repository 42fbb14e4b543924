// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command handlers. Each returns `true` on success so `main` can map the
//! result to the process exit code. A declined confirmation counts as
//! success: the user got what they asked for.

use chrono::{DateTime, NaiveDate, Utc};

use taskdeck_core::{
    Credentials, Notifier, OpOutcome, ProjectDraft, ProjectPatch, SignupRequest, TodoDraft,
    TodoFilter, TodoPatch, TodoPriority, TodoStatus,
};

use crate::context::AppContext;
use crate::render;

fn settled<T>(outcome: &OpOutcome<T>) -> bool {
    outcome.success || outcome.is_cancelled()
}

/// Accepts RFC 3339 timestamps or bare dates (midnight UTC).
fn parse_due(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn read_password(flag: Option<String>, ctx: &AppContext) -> Option<String> {
    match flag {
        Some(password) => Some(password),
        None => match rpassword::prompt_password("Password: ") {
            Ok(password) => Some(password),
            Err(err) => {
                ctx.notifier.error(&format!("could not read password: {err}"));
                None
            }
        },
    }
}

pub async fn login(ctx: &AppContext, username: String, password: Option<String>) -> bool {
    let Some(password) = read_password(password, ctx) else {
        return false;
    };
    match ctx.auth.login(&Credentials { username, password }).await {
        Ok(profile) => {
            ctx.gateway.set_token(Some(profile.token.clone()));
            ctx.notifier
                .success(&format!("Logged in as {}.", profile.username));
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub async fn signup(
    ctx: &AppContext,
    username: String,
    email: String,
    password: Option<String>,
) -> bool {
    let Some(password) = read_password(password, ctx) else {
        return false;
    };
    let request = SignupRequest {
        username,
        email,
        password,
    };
    match ctx.auth.signup(&request).await {
        Ok(profile) => {
            ctx.gateway.set_token(Some(profile.token.clone()));
            ctx.notifier
                .success(&format!("Account created for {}.", profile.username));
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub fn logout(ctx: &AppContext) -> bool {
    match ctx.auth.logout() {
        Ok(()) => {
            ctx.gateway.set_token(None);
            ctx.notifier.success("Logged out.");
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub fn whoami(ctx: &AppContext) -> bool {
    match ctx.session.user() {
        Some(user) => {
            render::print_profile(&user);
            true
        }
        None => {
            ctx.notifier.error("Not logged in.");
            false
        }
    }
}

pub async fn list(
    ctx: &AppContext,
    keyword: Option<String>,
    status: Option<TodoStatus>,
    priority: Option<TodoPriority>,
    project: Option<i64>,
    page: Option<u32>,
) -> bool {
    let filter = TodoFilter {
        keyword,
        status,
        priority,
        project_id: project,
        page,
        size: Some(ctx.config.client.page_size),
    };
    let outcome = ctx.todos.refresh(&filter).await;
    if !outcome.success {
        return false;
    }
    let store = ctx.todos.store();
    render::print_todos(
        &store.todos().await,
        store.total_elements().await,
        store.current_page().await,
        store.total_pages().await,
    );
    true
}

pub async fn show(ctx: &AppContext, id: i64) -> bool {
    match ctx.todos.store().get(id).await {
        Ok(todo) => {
            render::print_todo_detail(&todo);
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub async fn add(
    ctx: &AppContext,
    title: String,
    description: Option<String>,
    priority: Option<TodoPriority>,
    due: Option<String>,
    project: Option<i64>,
) -> bool {
    let due_date = match due {
        Some(raw) => match parse_due(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                ctx.notifier
                    .error(&format!("invalid due date `{raw}` (expected YYYY-MM-DD)"));
                return false;
            }
        },
        None => None,
    };
    let draft = TodoDraft {
        title,
        description,
        priority,
        due_date,
        project_id: project,
    };
    let outcome = ctx.todos.create(&draft).await;
    if let Some(todo) = &outcome.data {
        println!("{}", render::todo_line(todo));
    }
    outcome.success
}

/// Populates the cache for one id so the optimistic mutations find their
/// precondition satisfied even in a fresh process.
async fn ensure_cached(ctx: &AppContext, id: i64) -> bool {
    match ctx.todos.store().get(id).await {
        Ok(_) => true,
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub async fn edit(
    ctx: &AppContext,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    priority: Option<TodoPriority>,
    due: Option<String>,
    project: Option<i64>,
) -> bool {
    if !ensure_cached(ctx, id).await {
        return false;
    }
    let due_date = match due {
        Some(raw) => match parse_due(&raw) {
            Some(parsed) => Some(parsed),
            None => {
                ctx.notifier
                    .error(&format!("invalid due date `{raw}` (expected YYYY-MM-DD)"));
                return false;
            }
        },
        None => None,
    };
    let patch = TodoPatch {
        title,
        description,
        priority,
        due_date,
        project_id: project,
    };
    ctx.todos.update(id, &patch).await.success
}

pub async fn set_status(ctx: &AppContext, id: i64, status: TodoStatus) -> bool {
    if !ensure_cached(ctx, id).await {
        return false;
    }
    ctx.todos.set_status(id, status).await.success
}

pub async fn done(ctx: &AppContext, ids: Vec<i64>) -> bool {
    match ids.as_slice() {
        [id] => set_status(ctx, *id, TodoStatus::Done).await,
        many => ctx.todos.set_status_many(many, TodoStatus::Done).await.success,
    }
}

pub async fn remove(ctx: &AppContext, ids: Vec<i64>) -> bool {
    let outcome = match ids.as_slice() {
        [id] => ctx.todos.delete(*id).await,
        many => ctx.todos.delete_many(many).await,
    };
    settled(&outcome)
}

pub async fn stats(ctx: &AppContext) -> bool {
    let outcome = ctx.todos.fetch_stats().await;
    if let Some(stats) = &outcome.data {
        render::print_stats(stats);
    }
    outcome.success
}

pub async fn dashboard(ctx: &AppContext) -> bool {
    let outcome = ctx.todos.dashboard().await;
    if let Some(dashboard) = &outcome.data {
        render::print_dashboard(dashboard);
    }
    outcome.success
}

pub async fn project_list(ctx: &AppContext) -> bool {
    if !ctx.projects.refresh().await.success {
        return false;
    }
    render::print_projects(&ctx.projects.store().sorted().await);
    true
}

pub async fn project_add(
    ctx: &AppContext,
    name: String,
    color: Option<String>,
    position: Option<i32>,
    default: bool,
) -> bool {
    let draft = ProjectDraft {
        name,
        color,
        position,
        is_default: default,
    };
    ctx.projects.create(&draft).await.success
}

pub async fn project_edit(
    ctx: &AppContext,
    id: i64,
    name: Option<String>,
    color: Option<String>,
    position: Option<i32>,
) -> bool {
    match ctx.projects.store().get(id).await {
        Ok(_) => {}
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            return false;
        }
    }
    let patch = ProjectPatch {
        name,
        color,
        position,
        is_default: None,
    };
    ctx.projects.update(id, &patch).await.success
}

pub async fn project_remove(ctx: &AppContext, id: i64) -> bool {
    settled(&ctx.projects.delete(id).await)
}

pub async fn project_default(ctx: &AppContext, id: Option<i64>) -> bool {
    match id {
        Some(id) => {
            match ctx.projects.store().get(id).await {
                Ok(_) => {}
                Err(err) => {
                    ctx.notifier.error(&err.user_message());
                    return false;
                }
            }
            ctx.projects.set_default(id).await.success
        }
        None => {
            let outcome = ctx.projects.fetch_default().await;
            match &outcome.data {
                Some(project) => render::print_projects(std::slice::from_ref(project)),
                None if outcome.success => println!("No default project."),
                None => {}
            }
            outcome.success
        }
    }
}

pub fn template_list(ctx: &AppContext) -> bool {
    render::print_templates(&ctx.templates.list());
    true
}

pub async fn template_save(ctx: &AppContext, todo_id: i64, name: String) -> bool {
    let todo = match ctx.todos.store().get(todo_id).await {
        Ok(todo) => todo,
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            return false;
        }
    };
    match ctx.templates.save_from(&todo, &name) {
        Ok(template) => {
            ctx.notifier
                .success(&format!("Template `{}` saved.", template.name));
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub fn template_remove(ctx: &AppContext, id: i64) -> bool {
    match ctx.templates.delete(id) {
        Ok(()) => {
            ctx.notifier.success("Template deleted.");
            true
        }
        Err(err) => {
            ctx.notifier.error(&err.user_message());
            false
        }
    }
}

pub async fn template_apply(ctx: &AppContext, id: i64) -> bool {
    let Some(template) = ctx.templates.get(id) else {
        ctx.notifier.error(&format!("template {id} not found"));
        return false;
    };
    let outcome = ctx.todos.create(&template.to_draft()).await;
    if let Some(todo) = &outcome.data {
        println!("{}", render::todo_line(todo));
    }
    outcome.success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_due_accepts_bare_dates_and_rfc3339() {
        let bare = parse_due("2024-03-01").unwrap();
        assert_eq!(bare.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 00:00");

        let full = parse_due("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(full.format("%H:%M").to_string(), "12:30");

        assert!(parse_due("next tuesday").is_none());
    }
}
