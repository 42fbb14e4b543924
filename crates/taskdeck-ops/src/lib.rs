// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operation-feedback layer.
//!
//! Wraps every store mutation so callers get a uniform [`taskdeck_core::OpOutcome`]
//! instead of a `Result`: nothing here panics or propagates. This layer is
//! the sole owner of user-facing notifications; the stores only log.
//! Delete-class operations ask for confirmation first and short-circuit to
//! a cancelled outcome without touching the store.

pub mod project;
pub mod todo;

pub use project::ProjectOperations;
pub use todo::TodoOperations;
