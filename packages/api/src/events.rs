//! Auth-state change notifications.
//!
//! [`AuthEvents`] is a small fan-out registry: every [`AuthSubscription`] owns the
//! receiving half of an unbounded channel and removes its sender from the registry when
//! it is dropped, so a subscriber that goes away never leaks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;

/// Kinds of change the backend client reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    subscribers: HashMap<u64, UnboundedSender<AuthChangeEvent>>,
}

/// Shared handle to the subscriber registry.
#[derive(Debug, Clone, Default)]
pub struct AuthEvents {
    registry: Arc<Mutex<Registry>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // A panicking subscriber cannot leave the map half-updated.
        self.registry
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn subscribe(&self) -> AuthSubscription {
        let (tx, rx) = unbounded();
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.insert(id, tx);

        AuthSubscription {
            id,
            receiver: rx,
            events: self.clone(),
        }
    }

    /// Deliver `event` to every live subscriber.
    pub fn emit(&self, event: AuthChangeEvent) {
        let mut registry = self.lock();
        registry
            .subscribers
            .retain(|_, tx| tx.unbounded_send(event).is_ok());
        tracing::debug!(?event, subscribers = registry.subscribers.len(), "auth event emitted");
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn remove(&self, id: u64) {
        self.lock().subscribers.remove(&id);
    }
}

/// A live subscription. Dropping it unsubscribes.
#[derive(Debug)]
pub struct AuthSubscription {
    id: u64,
    receiver: UnboundedReceiver<AuthChangeEvent>,
    events: AuthEvents,
}

impl AuthSubscription {
    /// Wait for the next event. `None` once the subscription is closed.
    pub async fn next(&mut self) -> Option<AuthChangeEvent> {
        self.receiver.next().await
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.events.remove(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_reaches_every_subscriber() {
        let events = AuthEvents::new();
        let mut first = events.subscribe();
        let mut second = events.subscribe();

        events.emit(AuthChangeEvent::SignedOut);

        assert_eq!(first.next().await, Some(AuthChangeEvent::SignedOut));
        assert_eq!(second.next().await, Some(AuthChangeEvent::SignedOut));
    }

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let events = AuthEvents::new();
        let mut sub = events.subscribe();

        events.emit(AuthChangeEvent::SignedIn);
        events.emit(AuthChangeEvent::TokenRefreshed);
        events.emit(AuthChangeEvent::SignedOut);

        assert_eq!(sub.next().await, Some(AuthChangeEvent::SignedIn));
        assert_eq!(sub.next().await, Some(AuthChangeEvent::TokenRefreshed));
        assert_eq!(sub.next().await, Some(AuthChangeEvent::SignedOut));
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = AuthEvents::new();
        let first = events.subscribe();
        let second = events.subscribe();
        assert_eq!(events.subscriber_count(), 2);

        drop(first);
        assert_eq!(events.subscriber_count(), 1);

        second.unsubscribe();
        assert_eq!(events.subscriber_count(), 0);

        // Nobody left to deliver to; must not panic.
        events.emit(AuthChangeEvent::SignedOut);
    }
}
