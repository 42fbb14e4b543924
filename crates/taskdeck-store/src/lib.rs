// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory cache stores over the remote gateway.
//!
//! Each store keeps an id→entity mapping plus an explicit order sequence,
//! mutated together. Mutations that support it are optimistic: the store
//! writes a synthesized entity before the network call, keeps a snapshot of
//! both structures, and restores the snapshot wholesale if the call fails.
//! The server's response is always authoritative on success.
//!
//! Stores log failures and propagate them; user-facing notifications are
//! owned by the feedback layer on top.

mod loading;
pub mod project;
pub mod todo;

pub use project::ProjectStore;
pub use todo::TodoStore;
