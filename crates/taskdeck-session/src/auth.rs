// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login, signup, and logout over the auth gateway, persisting the session.

use std::sync::Arc;

use tracing::{info, warn};

use taskdeck_core::{AuthGateway, Credentials, SignupRequest, TaskdeckError, UserProfile};

use crate::store::FileSessionStore;

/// Authentication flow: gateway call followed by session persistence.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    session: Arc<FileSessionStore>,
}

impl AuthService {
    pub fn new(gateway: Arc<dyn AuthGateway>, session: Arc<FileSessionStore>) -> Self {
        Self { gateway, session }
    }

    /// Logs in and persists the returned token and profile.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, TaskdeckError> {
        let profile = match self.gateway.login(credentials).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(username = %credentials.username, error = %err, "login failed");
                return Err(err);
            }
        };
        self.session.save(&profile)?;
        info!(username = %profile.username, "logged in");
        Ok(profile)
    }

    /// Signs up and persists the returned token and profile.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, TaskdeckError> {
        let profile = match self.gateway.signup(request).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(username = %request.username, error = %err, "signup failed");
                return Err(err);
            }
        };
        self.session.save(&profile)?;
        info!(username = %profile.username, "account created");
        Ok(profile)
    }

    /// Clears the stored session.
    pub fn logout(&self) -> Result<(), TaskdeckError> {
        self.session.clear()?;
        info!("logged out");
        Ok(())
    }
}
