//! Per-user collections held by the data providers.
//!
//! A [`ScopedState`] remembers which user its items were loaded for. When the signed-in
//! user changes, including to nobody, the items are dropped so one account's data never
//! shows up under another.

use dioxus::prelude::*;

use crate::auth::use_auth;

#[derive(Debug, Clone, PartialEq)]
pub struct ScopedState<T> {
    owner: Option<String>,
    items: Vec<T>,
}

impl<T> Default for ScopedState<T> {
    fn default() -> Self {
        Self {
            owner: None,
            items: Vec::new(),
        }
    }
}

impl<T> ScopedState<T> {
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Follow the signed-in user. Returns `true` if the owner changed and items were dropped.
    pub fn sync_owner(&mut self, user_id: Option<&str>) -> bool {
        if self.owner.as_deref() == user_id {
            return false;
        }
        self.owner = user_id.map(str::to_string);
        self.items.clear();
        true
    }

    /// Replace the items loaded for `owner`.
    ///
    /// Ignored (returns `false`) when `owner` is no longer the current user, e.g. a fetch
    /// that finished after sign-out.
    pub fn replace(&mut self, owner: &str, items: Vec<T>) -> bool {
        if self.owner.as_deref() != Some(owner) {
            tracing::debug!(owner, current = ?self.owner, "discarding stale items");
            return false;
        }
        self.items = items;
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Provide a `Signal<ScopedState<T>>` that follows the signed-in user.
pub(crate) fn use_scoped_provider<T: 'static>() -> Signal<ScopedState<T>> {
    let auth = use_auth();
    let mut state = use_context_provider(|| Signal::new(ScopedState::<T>::default()));

    use_effect(move || {
        let user_id = auth.current_user().map(|u| u.id);
        if state.peek().owner() != user_id.as_deref() {
            state.write().sync_owner(user_id.as_deref());
        }
    });

    state
}
