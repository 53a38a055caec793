//! The two-step sign-in saga.
//!
//! Sign-in and profile lookup are separate backend calls. If the first succeeds and the
//! second does not, the backend holds a session for a user the application cannot
//! represent, so the session is revoked again before reporting the failure.

use crate::error::ApiError;
use crate::models::Identity;

use super::AuthBackend;

/// Terminal states of a sign-in attempt that reached the backend.
///
/// Transport, decoding and server-side failures are not outcomes; they come back as the
/// `Err` side of [`sign_in_flow`].
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    SignedIn(Identity),
    /// Credentials refused, with the backend's explanation.
    Rejected(String),
    /// Signed in, but no profile row exists for the user. The session was revoked.
    ProfileMissing,
}

/// Sign in, then join the session against the user's profile.
pub async fn sign_in_flow(
    backend: &dyn AuthBackend,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, ApiError> {
    let session = match backend.sign_in_with_password(email, password).await {
        Ok(session) => session,
        Err(ApiError::Auth { status, message }) => {
            tracing::warn!(status, "sign-in rejected");
            return Ok(LoginOutcome::Rejected(message));
        }
        Err(e) => return Err(e),
    };

    let profile = match backend.fetch_profile(session.user_id()).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!(user_id = session.user_id(), "no profile row for signed-in user");
            revoke(backend).await;
            return Ok(LoginOutcome::ProfileMissing);
        }
        Err(e) => {
            tracing::warn!(user_id = session.user_id(), "profile lookup failed: {}", e);
            revoke(backend).await;
            return Ok(LoginOutcome::ProfileMissing);
        }
    };

    Ok(LoginOutcome::SignedIn(Identity::assemble(session, profile)))
}

async fn revoke(backend: &dyn AuthBackend) {
    if let Err(e) = backend.sign_out().await {
        tracing::error!("failed to revoke session after profile lookup: {}", e);
    }
}
