// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translation of HTTP failures into [`TaskdeckError`].
//!
//! The server wraps errors in the same application envelope as successes:
//! `{success, message, data, code}`. For validation failures (400, 422) the
//! `data` field carries a field-name → message map. When the server supplies
//! no message, a fixed per-status fallback is used.

use std::collections::BTreeMap;

use serde_json::Value;
use taskdeck_core::TaskdeckError;

/// Fixed human-readable fallback message for a known HTTP status.
pub fn fallback_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input.",
        401 => "Authentication required. Please log in again.",
        403 => "You do not have permission to access this.",
        404 => "The requested resource was not found.",
        409 => "The data already exists.",
        422 => "Please check the submitted data.",
        429 => "Too many requests. Please try again shortly.",
        500 => "A server error occurred. Please try again shortly.",
        502 => "The server is not responding.",
        503 => "The service is temporarily unavailable.",
        504 => "The server took too long to respond.",
        _ => "An error occurred.",
    }
}

/// Builds a [`TaskdeckError::Api`] from a non-success response body.
///
/// Message precedence: server-supplied envelope message, then the first
/// field error, then the status fallback.
pub fn translate_error_body(status: u16, status_text: &str, body: &str) -> TaskdeckError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    let envelope = match parsed {
        Some(Value::Object(map)) => map,
        _ => {
            return TaskdeckError::Api {
                status,
                status_text: status_text.to_string(),
                message: fallback_message(status).to_string(),
                code: None,
                field_errors: None,
            };
        }
    };

    let server_message = envelope
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    let code = envelope
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Validation failures nest per-field messages under `data`.
    let field_errors = if matches!(status, 400 | 422) {
        envelope.get("data").and_then(Value::as_object).map(|obj| {
            obj.iter()
                .filter_map(|(field, msg)| {
                    msg.as_str().map(|m| (field.clone(), m.to_string()))
                })
                .collect::<BTreeMap<String, String>>()
        })
    } else {
        None
    };
    let field_errors = field_errors.filter(|m| !m.is_empty());

    let message = server_message
        .or_else(|| {
            field_errors
                .as_ref()
                .and_then(|m| m.values().next().cloned())
        })
        .unwrap_or_else(|| fallback_message(status).to_string());

    TaskdeckError::Api {
        status,
        status_text: status_text.to_string(),
        message,
        code,
        field_errors,
    }
}

/// Wraps a transport-level failure (no HTTP response) as a network error.
pub fn network_error(err: reqwest::Error) -> TaskdeckError {
    TaskdeckError::Network {
        message: "Could not reach the server. Please check your connection.".to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_takes_precedence() {
        let err = translate_error_body(
            409,
            "Conflict",
            r#"{"success": false, "message": "A project with this name already exists", "data": null}"#,
        );
        assert_eq!(err.user_message(), "A project with this name already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn validation_failure_extracts_field_errors() {
        let err = translate_error_body(
            422,
            "Unprocessable Entity",
            r#"{"success": false, "message": "", "data": {"title": "must not be blank", "dueDate": "must be a future date"}}"#,
        );
        let fields = err.field_errors().expect("field errors");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("title").map(String::as_str), Some("must not be blank"));
        // No envelope message, so the first field error becomes the message.
        assert_eq!(err.user_message(), "must be a future date");
    }

    #[test]
    fn non_validation_status_ignores_data_object() {
        let err = translate_error_body(
            500,
            "Internal Server Error",
            r#"{"success": false, "message": "", "data": {"trace": "stack"}}"#,
        );
        assert!(err.field_errors().is_none());
        assert_eq!(err.user_message(), fallback_message(500));
    }

    #[test]
    fn unparseable_body_falls_back_to_status_table() {
        let err = translate_error_body(503, "Service Unavailable", "<html>oops</html>");
        assert_eq!(err.user_message(), "The service is temporarily unavailable.");
    }

    #[test]
    fn unknown_status_uses_generic_message() {
        assert_eq!(fallback_message(418), "An error occurred.");
    }

    #[test]
    fn code_is_carried_through() {
        let err = translate_error_body(
            403,
            "Forbidden",
            r#"{"success": false, "message": "admin only", "code": "FORBIDDEN_ROLE"}"#,
        );
        match err {
            TaskdeckError::Api { code, .. } => {
                assert_eq!(code.as_deref(), Some("FORBIDDEN_ROLE"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
