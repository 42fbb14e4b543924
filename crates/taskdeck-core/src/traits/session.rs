// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session invalidation hook.

/// Invoked by the HTTP gateway when any call receives HTTP 401.
///
/// The implementation clears stored credentials so the next command
/// requires a fresh login.
pub trait SessionSink: Send + Sync {
    fn invalidate_session(&self);
}
