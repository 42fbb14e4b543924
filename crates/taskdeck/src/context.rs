// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application context: every shared component, built once in `main` and
//! passed to command handlers by reference. No ambient module state.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use taskdeck_api::HttpGateway;
use taskdeck_config::TaskdeckConfig;
use taskdeck_core::{ConfirmPrompt, Notifier, TaskdeckError};
use taskdeck_ops::{ProjectOperations, TodoOperations};
use taskdeck_session::{AuthService, FileSessionStore, TemplateStore};
use taskdeck_store::{ProjectStore, TodoStore};

use crate::term::{StdinConfirm, TermNotifier};

pub struct AppContext {
    pub config: TaskdeckConfig,
    pub session: Arc<FileSessionStore>,
    pub gateway: Arc<HttpGateway>,
    pub auth: AuthService,
    pub todos: TodoOperations,
    pub projects: ProjectOperations,
    pub templates: TemplateStore,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Wires the gateway, session, stores, and feedback layers together.
    pub fn build(config: TaskdeckConfig, assume_yes: bool) -> Result<Self, TaskdeckError> {
        let data_dir = data_dir();
        let session = Arc::new(FileSessionStore::open(data_dir.join("session.json")));
        let templates = TemplateStore::open(data_dir.join("templates.json"));

        let gateway = Arc::new(
            HttpGateway::new(
                &config.api.base_url,
                Duration::from_secs(config.api.timeout_secs),
            )?
            .with_session_sink(session.clone()),
        );
        gateway.set_token(session.token());

        let notifier: Arc<dyn Notifier> = Arc::new(TermNotifier);
        let confirm: Arc<dyn ConfirmPrompt> = Arc::new(StdinConfirm { assume_yes });

        let todo_store = Arc::new(TodoStore::new(
            gateway.clone(),
            config.todo.completed_at_policy,
        ));
        let project_store = Arc::new(ProjectStore::new(gateway.clone()));

        Ok(Self {
            session: session.clone(),
            auth: AuthService::new(gateway.clone(), session),
            todos: TodoOperations::new(todo_store, notifier.clone(), confirm.clone()),
            projects: ProjectOperations::new(project_store, notifier.clone(), confirm),
            templates,
            notifier,
            gateway,
            config,
        })
    }
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
}
