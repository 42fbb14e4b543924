// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the seams between Taskdeck subsystems.
//!
//! Gateway traits use `#[async_trait]` for dynamic dispatch; the UI-facing
//! traits ([`Notifier`], [`ConfirmPrompt`]) are synchronous by design.

pub mod confirm;
pub mod gateway;
pub mod notify;
pub mod session;

pub use confirm::ConfirmPrompt;
pub use gateway::{AuthGateway, ProjectGateway, TodoGateway};
pub use notify::{NoticeLevel, Notifier, DEFAULT_NOTICE_DURATION};
pub use session::SessionSink;
