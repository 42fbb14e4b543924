// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification sink trait for fire-and-forget user-facing messages.

use std::time::Duration;

/// Default display duration for a notification.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Sink for user-visible notifications.
///
/// The feedback layer is the sole caller for mutation outcomes; stores
/// only log. Implementations must not block on delivery.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, level: NoticeLevel, duration: Duration);

    fn success(&self, message: &str) {
        self.notify(message, NoticeLevel::Success, DEFAULT_NOTICE_DURATION);
    }

    fn error(&self, message: &str) {
        self.notify(message, NoticeLevel::Error, DEFAULT_NOTICE_DURATION);
    }

    fn info(&self, message: &str) {
        self.notify(message, NoticeLevel::Info, DEFAULT_NOTICE_DURATION);
    }
}
