// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local persistence outside the cache core: the file-backed session
//! (token + user profile) and saved todo templates. Both files hold their
//! whole payload as JSON and are rewritten wholesale on every change.

pub mod auth;
pub mod store;
pub mod templates;

pub use auth::AuthService;
pub use store::FileSessionStore;
pub use templates::{TemplateStore, TodoTemplate};
