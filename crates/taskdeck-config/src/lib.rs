// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Taskdeck client.
//!
//! Layered TOML loading (XDG hierarchy plus `TASKDECK_*` env overrides),
//! strict `deny_unknown_fields` models, post-deserialization validation,
//! and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use taskdeck_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("API at {}", config.api.base_url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::TaskdeckConfig;

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<TaskdeckConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from an inline TOML string and validate it. Used by
/// tests and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<TaskdeckConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_inline_config_loads() {
        let config = load_and_validate_str(
            r#"
            [api]
            base_url = "https://tasks.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com");
    }

    #[test]
    fn invalid_values_surface_as_validation_errors() {
        let errors = load_and_validate_str(
            r#"
            [api]
            timeout_secs = 0
            "#,
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { .. })));
    }
}
