// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading via Figment.
//!
//! Merge order (later overrides earlier): compiled defaults,
//! `/etc/taskdeck/taskdeck.toml`, `~/.config/taskdeck/taskdeck.toml`,
//! `./taskdeck.toml`, then `TASKDECK_*` environment variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TaskdeckConfig;

/// Load configuration from the standard XDG hierarchy with env overrides.
pub fn load_config() -> Result<TaskdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TaskdeckConfig::default()))
        .merge(Toml::file("/etc/taskdeck/taskdeck.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("taskdeck/taskdeck.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("taskdeck.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from an inline TOML string (defaults still apply).
pub fn load_config_from_str(toml_content: &str) -> Result<TaskdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TaskdeckConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<TaskdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TaskdeckConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names
/// themselves contain underscores: `TASKDECK_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("TASKDECK_").map(|key| {
        let mapped = key
            .as_str()
            .to_ascii_lowercase()
            .replacen("api_", "api.", 1)
            .replacen("client_", "client.", 1)
            .replacen("todo_", "todo.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_core::CompletedAtPolicy;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, TaskdeckConfig::default());
    }

    #[test]
    fn inline_toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [api]
            base_url = "https://tasks.example.com"
            timeout_secs = 5

            [client]
            page_size = 50

            [todo]
            completed_at_policy = "retain"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.client.page_size, 50);
        assert_eq!(config.todo.completed_at_policy, CompletedAtPolicy::Retain);
    }

    #[test]
    fn env_vars_override_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "taskdeck.toml",
                r#"
                [api]
                base_url = "https://from-file.example.com"
                "#,
            )?;
            jail.set_env("TASKDECK_API_BASE_URL", "https://from-env.example.com");
            jail.set_env("TASKDECK_CLIENT_PAGE_SIZE", "100");

            let config = Figment::new()
                .merge(Serialized::defaults(TaskdeckConfig::default()))
                .merge(Toml::file("taskdeck.toml"))
                .merge(env_provider())
                .extract::<TaskdeckConfig>()?;

            assert_eq!(config.api.base_url, "https://from-env.example.com");
            assert_eq!(config.client.page_size, 100);
            Ok(())
        });
    }

    #[test]
    fn unknown_key_is_an_error() {
        let result = load_config_from_str(
            r#"
            [api]
            base_ur = "https://tasks.example.com"
            "#,
        );
        assert!(result.is_err());
    }
}
