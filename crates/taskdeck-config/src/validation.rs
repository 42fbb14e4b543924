// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.
//!
//! Checks semantic constraints serde attributes cannot express. Collects
//! every failure instead of stopping at the first.

use crate::diagnostic::ConfigError;
use crate::model::TaskdeckConfig;

/// Validate a deserialized configuration.
pub fn validate_config(config: &TaskdeckConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "api.base_url must not be empty".to_string(),
        });
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("api.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.api.timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "api.timeout_secs must be at least 1, got {}",
                config.api.timeout_secs
            ),
        });
    }

    if config.client.page_size < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "client.page_size must be at least 1, got {}",
                config.client.page_size
            ),
        });
    }

    if config.client.log_level.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "client.log_level must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
