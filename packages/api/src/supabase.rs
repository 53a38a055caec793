//! HTTP client for a Supabase-style hosted backend.
//!
//! Speaks two of the backend's APIs:
//!
//! - **GoTrue** (`/auth/v1`): password grant and logout.
//! - **PostgREST** (`/rest/v1`): the `profiles` table.
//!
//! The client keeps the current session in memory only and announces sign-in and
//! sign-out through its [`AuthEvents`] registry, the way the hosted SDKs do.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::AuthBackend;
use crate::config::BackendConfig;
use crate::error::{ApiError, ConfigError};
use crate::events::{AuthChangeEvent, AuthEvents, AuthSubscription};
use crate::models::{Profile, Session};

const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const LOGOUT_PATH: &str = "/auth/v1/logout?scope=global";
const PROFILES_PATH: &str = "/rest/v1/profiles";

const DEFAULT_REJECTION: &str = "Invalid login credentials";
const NO_DETAIL: &str = "no error detail in response";

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

/// Error bodies differ between backend versions; take whichever field is set.
#[derive(Deserialize, Default)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.msg.or(b.error_description).or(b.message).or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Statuses the backend answers with when it refuses a request on its merits.
fn is_refusal(status: u16) -> bool {
    matches!(status, 400 | 401 | 403 | 422)
}

/// Classify a non-2xx response. Refusals carry the backend's explanation, falling back to
/// `rejection`; anything else (5xx, 429) is a server failure.
async fn failure(resp: reqwest::Response, rejection: &str) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    if is_refusal(status) {
        ApiError::Auth {
            status,
            message: error_message(&body, rejection),
        }
    } else {
        ApiError::Server {
            status,
            message: error_message(&body, NO_DETAIL),
        }
    }
}

/// Backend client. Cheap to clone; clones share the session and the subscribers.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    config: BackendConfig,
    session: Arc<Mutex<Option<Session>>>,
    events: AuthEvents,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: Arc::new(Mutex::new(None)),
            events: AuthEvents::new(),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn events(&self) -> &AuthEvents {
        &self.events
    }

    pub fn current_session(&self) -> Option<Session> {
        self.lock_session().clone()
    }

    fn lock_session(&self) -> MutexGuard<'_, Option<Session>> {
        self.session
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn bearer(&self) -> String {
        let token = self
            .lock_session()
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key().to_string());
        format!("Bearer {token}")
    }

    fn clear_session(&self) {
        *self.lock_session() = None;
        self.events.emit(AuthChangeEvent::SignedOut);
    }
}

#[async_trait(?Send)]
impl AuthBackend for SupabaseClient {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let resp = self
            .http
            .post(self.config.endpoint(TOKEN_PATH))
            .header("apikey", self.config.anon_key())
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(failure(resp, DEFAULT_REJECTION).await);
        }

        let body = resp.text().await?;
        let session: Session = serde_json::from_str(&body)?;

        *self.lock_session() = Some(session.clone());
        self.events.emit(AuthChangeEvent::SignedIn);
        tracing::info!(user_id = session.user_id(), "signed in");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        if self.lock_session().is_none() {
            self.clear_session();
            return Ok(());
        }

        let resp = self
            .http
            .post(self.config.endpoint(LOGOUT_PATH))
            .header("apikey", self.config.anon_key())
            .header("Authorization", self.bearer())
            .send()
            .await?;

        // An already-invalid session counts as signed out.
        let status = resp.status().as_u16();
        if resp.status().is_success() || matches!(status, 401 | 403 | 404) {
            self.clear_session();
            tracing::info!(status, "signed out");
            return Ok(());
        }

        Err(failure(resp, "Sign-out failed").await)
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError> {
        let endpoint = self.config.endpoint(PROFILES_PATH);
        let id_filter = format!("eq.{user_id}");
        let url = Url::parse_with_params(
            &endpoint,
            &[("select", "role,full_name"), ("id", id_filter.as_str())],
        )
        .map_err(|e| ConfigError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        let resp = self
            .http
            .get(url)
            .header("apikey", self.config.anon_key())
            .header("Authorization", self.bearer())
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(failure(resp, "Profile lookup failed").await);
        }

        let body = resp.text().await?;
        let mut rows: Vec<Profile> = serde_json::from_str(&body)?;
        if rows.len() != 1 {
            tracing::debug!(user_id, rows = rows.len(), "expected exactly one profile row");
            return Ok(None);
        }
        Ok(rows.pop())
    }

    fn subscribe(&self) -> AuthSubscription {
        self.events.subscribe()
    }
}
