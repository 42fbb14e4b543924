// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confirmation prompt trait for destructive operations.

/// A yes/no confirmation shown before destructive operations.
///
/// Deliberately synchronous: the prompt blocks the calling flow until the
/// user answers, matching the feedback layer's confirm-then-call shape.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns true if the user confirmed the action.
    fn confirm(&self, message: &str) -> bool;
}
