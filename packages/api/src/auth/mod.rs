//! Authentication against the hosted backend.
//!
//! [`AuthBackend`] is the seam between the UI and whatever issues sessions. The UI only
//! ever sees it as `Rc<dyn AuthBackend>`, which keeps the state machine testable with a
//! scripted backend and lets [`crate::SupabaseClient`] be swapped out.

mod flow;

pub use flow::{sign_in_flow, LoginOutcome};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::events::AuthSubscription;
use crate::models::{Profile, Session};

/// Operations the hosted authentication API must provide.
///
/// Futures are `?Send`: in the browser every request future is tied to the JS event loop.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange credentials for a session.
    ///
    /// A refusal by the backend (wrong password, unconfirmed email, ...) is reported as
    /// [`ApiError::Auth`]; every other variant means the request itself failed.
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// End the current session. Emits [`crate::AuthChangeEvent::SignedOut`] on success.
    async fn sign_out(&self) -> Result<(), ApiError>;

    /// Look up the profile row for `user_id`. `Ok(None)` when there is not exactly one.
    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, ApiError>;

    /// Subscribe to auth-state change notifications.
    fn subscribe(&self) -> AuthSubscription;
}
