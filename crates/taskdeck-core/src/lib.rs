// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Taskdeck client.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Taskdeck workspace. The HTTP gateway,
//! cache stores, and feedback layer all build on the seams defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TaskdeckError;
pub use types::{
    CompletedAtPolicy, Credentials, DashboardStats, Envelope, OpOutcome, Page, Project,
    ProjectDraft, ProjectPatch, SignupRequest, Todo, TodoDraft, TodoFilter, TodoPatch,
    TodoPriority, TodoStats, TodoStatus, UserProfile,
};

pub use traits::{
    AuthGateway, ConfirmPrompt, NoticeLevel, Notifier, ProjectGateway, SessionSink,
    TodoGateway, DEFAULT_NOTICE_DURATION,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _config = TaskdeckError::Config("bad".into());
        let _network = TaskdeckError::Network {
            message: "refused".into(),
            source: None,
        };
        let _api = TaskdeckError::Api {
            status: 500,
            status_text: "Internal Server Error".into(),
            message: "boom".into(),
            code: None,
            field_errors: None,
        };
        let _missing = TaskdeckError::NotFound {
            entity: "todo",
            id: 1,
        };
        let _empty = TaskdeckError::EmptySelection;
        let _storage = TaskdeckError::Storage {
            message: "io".into(),
            source: None,
        };
        let _internal = TaskdeckError::Internal("unexpected".into());
    }

    #[test]
    fn trait_objects_are_constructible() {
        // Compile-time check that the seam traits stay object-safe.
        fn _todo(_: &dyn TodoGateway) {}
        fn _project(_: &dyn ProjectGateway) {}
        fn _auth(_: &dyn AuthGateway) {}
        fn _notify(_: &dyn Notifier) {}
        fn _confirm(_: &dyn ConfirmPrompt) {}
        fn _session(_: &dyn SessionSink) {}
    }
}
