// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway crate for the Taskdeck remote API.
//!
//! [`HttpGateway`] implements the gateway traits from `taskdeck-core` over
//! reqwest, translating HTTP failures into [`taskdeck_core::TaskdeckError`]
//! and invalidating the session on 401.

pub mod client;
pub mod error;

pub use client::HttpGateway;
pub use error::fallback_message;
