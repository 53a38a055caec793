//! Authentication state owned by [`super::AuthProvider`].

use api::{Identity, Session, User};

/// Where the provider is in the login lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    LoggedOut,
    Authenticating,
    LoggedIn,
}

/// Current user + session, and how many logins are in flight.
///
/// Every process starts logged out; no previous session is ever restored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    identity: Option<Identity>,
    pending_logins: usize,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.identity.as_ref().map(|i| &i.user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.identity.as_ref().map(|i| &i.session)
    }

    /// The provider never restores a session, so there is nothing to wait for.
    pub fn is_initializing(&self) -> bool {
        false
    }

    pub fn is_authenticating(&self) -> bool {
        self.pending_logins > 0
    }

    pub fn phase(&self) -> AuthPhase {
        if self.identity.is_some() {
            AuthPhase::LoggedIn
        } else if self.is_authenticating() {
            AuthPhase::Authenticating
        } else {
            AuthPhase::LoggedOut
        }
    }

    pub(crate) fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub(crate) fn clear(&mut self) {
        self.identity = None;
    }

    pub(crate) fn begin_login(&mut self) {
        self.pending_logins += 1;
    }

    pub(crate) fn end_login(&mut self) {
        self.pending_logins = self.pending_logins.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let state = AuthState::default();
        assert_eq!(state.phase(), AuthPhase::LoggedOut);
        assert!(state.current_user().is_none());
        assert!(state.session().is_none());
        assert!(!state.is_initializing());
        assert!(!state.is_authenticating());
    }

    #[test]
    fn test_pending_login_count() {
        let mut state = AuthState::default();
        state.begin_login();
        state.begin_login();
        assert_eq!(state.phase(), AuthPhase::Authenticating);

        state.end_login();
        assert!(state.is_authenticating());
        state.end_login();
        state.end_login();
        assert!(!state.is_authenticating());
    }
}
