//! Active login sessions

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::Session;

/// Token to principal map. Tokens never expire; they live until logout or restart.
#[derive(Clone, Default)]
pub struct SessionsRepository {
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh random token for `principal`
    pub async fn create(&self, principal: &str) -> Session {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), principal.to_string());
        Session {
            token,
            principal: principal.to_string(),
        }
    }

    pub async fn get(&self, token: &str) -> Option<Session> {
        self.tokens.read().await.get(token).map(|principal| Session {
            token: token.to_string(),
            principal: principal.clone(),
        })
    }

    /// Remove `token`; returns whether it was present
    pub async fn remove(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn token_resolves_until_removed() {
        let repo = SessionsRepository::new();
        let session = repo.create("admin").await;

        assert_eq!(repo.get(&session.token).await, Some(session.clone()));
        assert!(repo.remove(&session.token).await);
        assert_eq!(repo.get(&session.token).await, None);
        assert!(!repo.remove(&session.token).await);
    }

    #[tokio::test]
    async fn each_login_gets_a_distinct_token() {
        let repo = SessionsRepository::new();
        let a = repo.create("admin").await;
        let b = repo.create("admin").await;
        assert_ne!(a.token, b.token);
        assert!(repo.get(&a.token).await.is_some());
        assert!(repo.get(&b.token).await.is_some());
    }
}
