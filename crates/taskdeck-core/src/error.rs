// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Taskdeck client.

use std::collections::BTreeMap;

use thiserror::Error;

/// The primary error type used across the Taskdeck workspace.
#[derive(Debug, Error)]
pub enum TaskdeckError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failures where no HTTP response was received
    /// (connection refused, DNS failure, timeout).
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server responded with a non-success status and an application
    /// error envelope. `field_errors` is present for validation failures.
    #[error("{message} (HTTP {status} {status_text})")]
    Api {
        status: u16,
        status_text: String,
        message: String,
        code: Option<String>,
        field_errors: Option<BTreeMap<String, String>>,
    },

    /// A store precondition failed: the entity is absent from the local
    /// cache, so no network call was attempted.
    #[error("{entity} {id} not found in local cache")]
    NotFound { entity: &'static str, id: i64 },

    /// A bulk operation was invoked with an empty identifier list.
    #[error("no items selected")]
    EmptySelection,

    /// Local persistence errors (session file, template file).
    #[error("storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TaskdeckError {
    /// The HTTP status code, if this error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskdeckError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for HTTP 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the server (or the local cache) reported the entity missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskdeckError::NotFound { .. }) || self.status() == Some(404)
    }

    /// Per-field validation messages, if the server returned any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            TaskdeckError::Api { field_errors, .. } => field_errors.as_ref(),
            _ => None,
        }
    }

    /// The message suitable for showing to a user.
    pub fn user_message(&self) -> String {
        match self {
            TaskdeckError::Api { message, .. } => message.clone(),
            TaskdeckError::Network { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status_helpers() {
        let err = TaskdeckError::Api {
            status: 401,
            status_text: "Unauthorized".into(),
            message: "token expired".into(),
            code: Some("AUTH_EXPIRED".into()),
            field_errors: None,
        };
        assert!(err.is_unauthorized());
        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "token expired");
    }

    #[test]
    fn local_not_found_counts_as_not_found() {
        let err = TaskdeckError::NotFound {
            entity: "todo",
            id: 42,
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn field_errors_only_on_api_variant() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), "must not be blank".to_string());
        let err = TaskdeckError::Api {
            status: 422,
            status_text: "Unprocessable Entity".into(),
            message: "validation failed".into(),
            code: None,
            field_errors: Some(fields),
        };
        assert_eq!(
            err.field_errors().unwrap().get("title").map(String::as_str),
            Some("must not be blank")
        );
        assert!(TaskdeckError::EmptySelection.field_errors().is_none());
    }
}
