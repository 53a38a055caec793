//! Authentication context and hooks for the UI.

mod controller;
mod state;
mod widgets;

pub use controller::{AuthController, AuthStateCell, LoginError};
pub use state::{AuthPhase, AuthState};
pub use widgets::{LoginForm, LogoutButton};

use std::rc::Rc;

use api::{AuthBackend, Session, User};
use dioxus::prelude::*;

use crate::context::{require_context, try_require_context, MissingProvider};

/// Shared handle to the backend, comparable by identity so it can be a prop.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn AuthBackend>);

impl BackendHandle {
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }
}

impl From<Rc<dyn AuthBackend>> for BackendHandle {
    fn from(backend: Rc<dyn AuthBackend>) -> Self {
        Self(backend)
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// What descendants of [`AuthProvider`] get from [`use_auth`].
#[derive(Clone)]
pub struct AuthContext {
    state: Signal<AuthState>,
    backend: Rc<dyn AuthBackend>,
}

impl AuthContext {
    fn controller(&self) -> AuthController<Signal<AuthState>> {
        AuthController::new(self.backend.clone(), self.state)
    }

    /// Snapshot of the whole state. Subscribes the calling component.
    pub fn state(&self) -> AuthState {
        AuthState::clone(&self.state.read())
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().current_user().cloned()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.read().session().cloned()
    }

    pub fn is_initializing(&self) -> bool {
        self.state.read().is_initializing()
    }

    pub fn is_authenticating(&self) -> bool {
        self.state.read().is_authenticating()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        self.controller().login(email, password).await
    }

    pub async fn logout(&self) {
        self.controller().logout().await;
    }
}

/// Get the authentication context. Panics outside an [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    require_context("use_auth", "AuthProvider")
}

pub fn try_use_auth() -> Result<AuthContext, MissingProvider> {
    try_require_context("use_auth", "AuthProvider")
}

/// Provider component that owns authentication state.
///
/// Starts logged out. For as long as it is mounted it listens for the backend's
/// sign-out notification; unmounting drops the listener and its subscription.
#[component]
pub fn AuthProvider(backend: BackendHandle, children: Element) -> Element {
    let state = use_signal(AuthState::default);

    let context = use_context_provider(|| AuthContext {
        state,
        backend: backend.0.clone(),
    });

    use_hook(|| {
        let controller = context.controller();
        let subscription = controller.subscribe();
        spawn(async move {
            controller.listen(subscription).await;
        })
    });

    use_drop(|| tracing::debug!("auth provider unmounted"));

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::time::Duration;

    use api::{ApiError, AuthChangeEvent, AuthEvents, AuthSubscription, Profile, SessionUser};
    use async_trait::async_trait;

    use super::*;

    struct StubBackend {
        events: AuthEvents,
    }

    #[async_trait(?Send)]
    impl AuthBackend for StubBackend {
        async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<Session, ApiError> {
            Ok(Session {
                access_token: "at".to_string(),
                refresh_token: "rt".to_string(),
                token_type: "bearer".to_string(),
                expires_in: 3600,
                expires_at: None,
                user: SessionUser {
                    id: "u-1".to_string(),
                    email: Some(email.to_string()),
                },
            })
        }

        async fn sign_out(&self) -> Result<(), ApiError> {
            Ok(())
        }

        async fn fetch_profile(&self, _user_id: &str) -> Result<Option<Profile>, ApiError> {
            Ok(Some(Profile {
                role: "admin".to_string(),
                full_name: "Ada Admin".to_string(),
            }))
        }

        fn subscribe(&self) -> AuthSubscription {
            self.events.subscribe()
        }
    }

    /// What the mounted tree hands back to the test.
    #[derive(Clone, Default)]
    struct Captured {
        auth: Rc<RefCell<Option<AuthContext>>>,
        login: Rc<RefCell<Option<Result<(), LoginError>>>>,
    }

    impl PartialEq for Captured {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.auth, &other.auth)
        }
    }

    #[component]
    fn SignInOnMount(captured: Captured) -> Element {
        let auth = use_auth();
        use_hook(|| {
            captured.auth.replace(Some(auth.clone()));
            let captured = captured.clone();
            let auth = auth.clone();
            spawn(async move {
                let result = auth.login("ada@example.com", "pw").await;
                captured.login.replace(Some(result));
            })
        });
        rsx! {}
    }

    #[component]
    fn Harness(backend: BackendHandle, captured: Captured) -> Element {
        rsx! {
            AuthProvider { backend,
                SignInOnMount { captured }
            }
        }
    }

    /// Run spawned tasks and re-renders until the tree goes quiet.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..20 {
            if tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_err()
            {
                break;
            }
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_provider_listens_while_mounted() {
        let events = AuthEvents::new();
        let backend: Rc<dyn AuthBackend> = Rc::new(StubBackend { events: events.clone() });
        let captured = Captured::default();

        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                backend: BackendHandle::from(backend),
                captured: captured.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        assert_eq!(events.subscriber_count(), 1);
        assert_eq!(captured.login.borrow().clone(), Some(Ok(())));

        let auth = captured.auth.borrow().clone().unwrap();
        let state = dom.in_runtime(|| auth.controller().state());
        assert_eq!(state.current_user().map(|u| u.role.clone()), Some("admin".to_string()));
        assert!(state.session().is_some());

        events.emit(AuthChangeEvent::TokenRefreshed);
        settle(&mut dom).await;
        let state = dom.in_runtime(|| auth.controller().state());
        assert!(state.current_user().is_some());

        events.emit(AuthChangeEvent::SignedOut);
        settle(&mut dom).await;
        let state = dom.in_runtime(|| auth.controller().state());
        assert!(state.current_user().is_none());
        assert!(state.session().is_none());
        assert_eq!(state.phase(), AuthPhase::LoggedOut);

        drop(dom);
        assert_eq!(events.subscriber_count(), 0);
    }

    #[test]
    #[should_panic(expected = "use_auth must be used within AuthProvider")]
    fn test_use_auth_outside_provider_panics() {
        #[component]
        fn Orphan() -> Element {
            use_auth();
            rsx! {}
        }

        let mut dom = VirtualDom::new(Orphan);
        dom.rebuild_in_place();
    }
}
