use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::AdmissionWizard;

/// An in-progress application. Only the hash of the cookie token is kept.
#[derive(Debug, Clone)]
pub struct AdmissionSession {
    pub token_hash: String,
    pub wizard: AdmissionWizard,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
}

/// Sessions live in process memory only: an application is never persisted.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, AdmissionSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, token: &str, ttl: Duration) -> AdmissionSession {
        let now = Utc::now();
        let session = AdmissionSession {
            token_hash: hash_token(token),
            wizard: AdmissionWizard::new(),
            expires_at: now + ttl,
            created_at: now,
            last_used_at: now,
        };

        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(session.token_hash.clone(), session.clone());
        session
    }

    /// The live session for `token`, sliding its expiry forward.
    pub async fn find_by_token(&self, token: &str, ttl: Duration) -> Option<AdmissionSession> {
        let token_hash = hash_token(token);
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&token_hash) {
            Some(session) if session.expires_at > now => {
                session.last_used_at = now;
                session.expires_at = now + ttl;
                Some(session.clone())
            }
            Some(_) => {
                sessions.remove(&token_hash);
                None
            }
            None => None,
        }
    }

    pub async fn save(&self, token: &str, wizard: AdmissionWizard) -> bool {
        let token_hash = hash_token(token);
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&token_hash) {
            Some(session) => {
                session.wizard = wizard;
                session.last_used_at = Utc::now();
                true
            }
            None => false,
        }
    }

    pub async fn delete_by_token(&self, token: &str) -> bool {
        let token_hash = hash_token(token);
        self.sessions.write().await.remove(&token_hash).is_some()
    }

    pub async fn cleanup_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn hash_token(token: &str) -> String {
    use sha2::{Sha256, Digest};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
