use chrono::Duration;
use cookie::{Cookie, SameSite};

use crate::domain::AdmissionWizard;

pub mod session;

pub use session::{AdmissionSession, SessionStore};

pub const ADMISSION_COOKIE: &str = "admission";

/// Server-side holder for in-progress admission applications, keyed by an
/// opaque cookie token.
pub struct AdmissionSessions {
    store: SessionStore,
    ttl: Duration,
}

impl AdmissionSessions {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            store: SessionStore::new(),
            ttl: Duration::minutes(ttl_minutes.max(1)),
        }
    }

    /// Start a fresh application at the Info step. Returns the raw token for
    /// the cookie.
    pub async fn start(&self) -> (AdmissionSession, String) {
        let token = generate_token();
        let session = self.store.create(&token, self.ttl).await;
        (session, token)
    }

    pub async fn resume(&self, token: &str) -> Option<AdmissionWizard> {
        self.store
            .find_by_token(token, self.ttl)
            .await
            .map(|session| session.wizard)
    }

    /// The wizard for `token`, or a new session when the token is missing or
    /// stale. The second value is set when a new cookie must be issued.
    pub async fn resume_or_start(&self, token: Option<&str>) -> (AdmissionWizard, Option<String>) {
        if let Some(token) = token {
            if let Some(wizard) = self.resume(token).await {
                return (wizard, None);
            }
        }
        let (session, token) = self.start().await;
        (session.wizard, Some(token))
    }

    pub async fn update(&self, token: &str, wizard: AdmissionWizard) -> bool {
        self.store.save(token, wizard).await
    }

    pub async fn discard(&self, token: &str) {
        if self.store.delete_by_token(token).await {
            tracing::debug!("Discarded admission session");
        }
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.store.cleanup_expired().await
    }

    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build((ADMISSION_COOKIE, token.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(cookie::time::Duration::minutes(self.ttl.num_minutes()))
            .build()
    }

    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build((ADMISSION_COOKIE, ""))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(cookie::time::Duration::seconds(0))
            .build()
    }
}

fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdmissionStep;

    #[tokio::test]
    async fn test_resume_or_start_issues_token_once() {
        let sessions = AdmissionSessions::new(60);
        let (wizard, token) = sessions.resume_or_start(None).await;
        assert_eq!(wizard.step(), AdmissionStep::Info);
        let token = token.unwrap();
        assert_eq!(token.len(), 64);

        let (_, reissued) = sessions.resume_or_start(Some(&token)).await;
        assert!(reissued.is_none());

        let (_, replaced) = sessions.resume_or_start(Some("unknown")).await;
        assert!(replaced.is_some());
    }

    #[tokio::test]
    async fn test_discard_forgets_progress() {
        let sessions = AdmissionSessions::new(60);
        let (_, token) = sessions.start().await;
        let mut wizard = AdmissionWizard::new();
        wizard.next().unwrap();
        assert!(sessions.update(&token, wizard).await);
        assert_eq!(sessions.resume(&token).await.unwrap().step(), AdmissionStep::Personal);

        sessions.discard(&token).await;
        assert!(sessions.resume(&token).await.is_none());
    }

    #[test]
    fn test_cookies() {
        let sessions = AdmissionSessions::new(30);
        let cookie = sessions.session_cookie("abc");
        assert_eq!(cookie.name(), ADMISSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));

        let removal = AdmissionSessions::removal_cookie();
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(cookie::time::Duration::ZERO));
    }
}
