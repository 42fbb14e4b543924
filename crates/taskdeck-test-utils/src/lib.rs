// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Taskdeck: scripted gateway mocks with per-operation
//! call counters, a recording notifier, a scripted confirmation prompt,
//! and entity fixtures.
//!
//! Mocks pop responses from FIFO queues; an empty queue yields an internal
//! error so a test that forgot to script a call fails loudly.

pub mod fixtures;
pub mod mock_auth;
pub mod mock_project;
pub mod mock_todo;
pub mod recording;

pub use mock_auth::MockAuthGateway;
pub use mock_project::MockProjectGateway;
pub use mock_todo::MockTodoGateway;
pub use recording::{RecordingNotifier, ScriptedConfirm};
