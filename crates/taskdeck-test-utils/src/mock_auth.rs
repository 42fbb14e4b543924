// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted mock implementation of [`AuthGateway`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use taskdeck_core::{AuthGateway, Credentials, SignupRequest, TaskdeckError, UserProfile};

/// A mock auth gateway that pops pre-scripted results per operation.
#[derive(Default)]
pub struct MockAuthGateway {
    pub login_calls: AtomicUsize,
    pub signup_calls: AtomicUsize,
    login_results: Mutex<VecDeque<Result<UserProfile, TaskdeckError>>>,
    signup_results: Mutex<VecDeque<Result<UserProfile, TaskdeckError>>>,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_login(&self, result: Result<UserProfile, TaskdeckError>) {
        self.login_results.lock().unwrap().push_back(result);
    }

    pub fn push_signup(&self, result: Result<UserProfile, TaskdeckError>) {
        self.signup_results.lock().unwrap().push_back(result);
    }

    fn pop<T>(
        queue: &Mutex<VecDeque<Result<T, TaskdeckError>>>,
        op: &str,
    ) -> Result<T, TaskdeckError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TaskdeckError::Internal(format!("no scripted {op} response"))))
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<UserProfile, TaskdeckError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.login_results, "login")
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<UserProfile, TaskdeckError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.signup_results, "signup")
    }
}
