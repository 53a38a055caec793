//! The login/logout state machine, independent of the component tree.
//!
//! [`AuthController`] drives an [`AuthState`] held in any [`AuthStateCell`]: a Dioxus
//! signal inside [`super::AuthProvider`], or a plain `Rc<RefCell<_>>` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use api::{sign_in_flow, AuthBackend, AuthChangeEvent, AuthSubscription, LoginOutcome};
use dioxus::prelude::*;

use super::AuthState;

/// Why a login did not produce a signed-in user.
///
/// `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    /// The backend refused the credentials; carries its message.
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Your account profile could not be found. Please contact support.")]
    ProfileMissing,

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Somewhere an [`AuthState`] lives.
pub trait AuthStateCell: Clone + 'static {
    fn snapshot(&self) -> AuthState;

    /// Mutate the state. Must not panic if the owner is already gone.
    fn update(&self, f: impl FnOnce(&mut AuthState));
}

impl AuthStateCell for Rc<RefCell<AuthState>> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }
}

impl AuthStateCell for Signal<AuthState> {
    fn snapshot(&self) -> AuthState {
        AuthState::clone(&self.peek())
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let mut signal = *self;
        match signal.try_write() {
            Ok(mut state) => f(&mut state),
            Err(e) => tracing::debug!("auth state dropped, skipping update: {}", e),
        };
    }
}

/// Marks one login as in flight until dropped.
///
/// Dropping happens on every exit from [`AuthController::login`], including the future
/// itself being dropped mid-await.
struct PendingLogin<S: AuthStateCell> {
    state: S,
}

impl<S: AuthStateCell> PendingLogin<S> {
    fn begin(state: S) -> Self {
        state.update(AuthState::begin_login);
        Self { state }
    }
}

impl<S: AuthStateCell> Drop for PendingLogin<S> {
    fn drop(&mut self) {
        self.state.update(AuthState::end_login);
    }
}

#[derive(Clone)]
pub struct AuthController<S: AuthStateCell> {
    backend: Rc<dyn AuthBackend>,
    state: S,
}

impl<S: AuthStateCell> AuthController<S> {
    pub fn new(backend: Rc<dyn AuthBackend>, state: S) -> Self {
        Self { backend, state }
    }

    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        self.backend.subscribe()
    }

    /// Sign in and load the user's profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        let _pending = PendingLogin::begin(self.state.clone());

        match sign_in_flow(&*self.backend, email, password).await {
            Ok(LoginOutcome::SignedIn(identity)) => {
                tracing::info!(user_id = %identity.user.id, role = %identity.user.role, "login succeeded");
                self.state.update(|s| s.sign_in(identity));
                Ok(())
            }
            Ok(LoginOutcome::Rejected(message)) => {
                self.state.update(AuthState::clear);
                Err(LoginError::InvalidCredentials(message))
            }
            Ok(LoginOutcome::ProfileMissing) => {
                self.state.update(AuthState::clear);
                Err(LoginError::ProfileMissing)
            }
            Err(e) => {
                tracing::error!("login failed unexpectedly: {}", e);
                self.state.update(AuthState::clear);
                Err(LoginError::Unexpected(e.to_string()))
            }
        }
    }

    /// Ask the backend to end the session.
    ///
    /// Local state is left alone; it is cleared when the backend's sign-out
    /// notification arrives (see [`Self::handle_event`]).
    pub async fn logout(&self) {
        if let Err(e) = self.backend.sign_out().await {
            tracing::error!("sign-out failed: {}", e);
        }
    }

    /// React to a backend notification. Only `SignedOut` changes anything; session
    /// refreshes and restores must not log anyone in. Returns whether state changed.
    pub fn handle_event(&self, event: AuthChangeEvent) -> bool {
        match event {
            AuthChangeEvent::SignedOut => {
                tracing::info!("signed out, clearing auth state");
                self.state.update(AuthState::clear);
                true
            }
            other => {
                tracing::debug!(event = ?other, "ignoring auth event");
                false
            }
        }
    }

    /// Apply notifications until the subscription ends or this future is dropped.
    pub async fn listen(&self, mut subscription: AuthSubscription) {
        while let Some(event) = subscription.next().await {
            self.handle_event(event);
        }
    }
}
