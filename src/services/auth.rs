//! Authentication service

use crate::{
    error::{AppError, AppResult},
    models::session::{Session, ADMIN_PRINCIPAL},
    repository::Repository,
};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin";

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check credentials against the built-in account and open a session
    pub async fn login(&self, username: Option<&str>, password: Option<&str>) -> AppResult<Session> {
        if username != Some(ADMIN_USERNAME) || password != Some(ADMIN_PASSWORD) {
            tracing::warn!(username = username.unwrap_or_default(), "Rejected login attempt");
            return Err(AppError::InvalidCredentials);
        }

        let session = self.repository.sessions.create(ADMIN_PRINCIPAL).await;
        tracing::info!(principal = %session.principal, "Session opened");
        Ok(session)
    }

    /// Resolve a bearer token to its session
    pub async fn authenticate(&self, token: &str) -> AppResult<Session> {
        self.repository
            .sessions
            .get(token)
            .await
            .ok_or(AppError::Unauthorized)
    }

    /// Close a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        if self.repository.sessions.remove(token).await {
            tracing::info!("Session closed");
        }
    }
}
