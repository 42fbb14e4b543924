// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model.
//!
//! All sections use `deny_unknown_fields` so typos surface as errors
//! instead of being silently ignored, and serde defaults so an empty (or
//! absent) file yields a usable configuration.

use serde::{Deserialize, Serialize};

use taskdeck_core::CompletedAtPolicy;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TaskdeckConfig {
    pub api: ApiConfig,
    pub client: ClientConfig,
    pub todo: TodoConfig,
}

/// Remote API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ApiConfig {
    /// Base URL of the task API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Client-side behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ClientConfig {
    /// Log filter passed to the tracing subscriber (e.g. `info`,
    /// `taskdeck=debug`).
    pub log_level: String,
    /// Page size requested when listing todos.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            page_size: 20,
        }
    }
}

/// Todo-specific behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TodoConfig {
    /// What happens to `completed_at` when a task leaves the done state.
    pub completed_at_policy: CompletedAtPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = TaskdeckConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.client.page_size, 20);
        assert_eq!(config.todo.completed_at_policy, CompletedAtPolicy::Clear);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: TaskdeckConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://tasks.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.client.log_level, "warn");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<TaskdeckConfig, _> = toml::from_str(
            r#"
            [api]
            bas_url = "https://tasks.example.com"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn policy_parses_from_toml() {
        let config: TaskdeckConfig = toml::from_str(
            r#"
            [todo]
            completed_at_policy = "retain"
            "#,
        )
        .unwrap();
        assert_eq!(config.todo.completed_at_policy, CompletedAtPolicy::Retain);
    }
}
