//! Checked access to provider contexts.
//!
//! Every `use_*` hook in this crate reads its value through [`require_context`], so using
//! one outside its provider fails immediately with a message naming the provider instead
//! of Dioxus' generic missing-context panic.

use dioxus::prelude::*;

/// A context hook was called with no matching provider above it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{hook} must be used within {provider}: no {provider} found among the component's ancestors")]
pub struct MissingProvider {
    pub hook: &'static str,
    pub provider: &'static str,
}

pub fn try_require_context<T: Clone + 'static>(
    hook: &'static str,
    provider: &'static str,
) -> Result<T, MissingProvider> {
    try_use_context::<T>().ok_or(MissingProvider { hook, provider })
}

pub fn require_context<T: Clone + 'static>(hook: &'static str, provider: &'static str) -> T {
    provided(try_use_context::<T>(), hook, provider)
}

fn provided<T>(value: Option<T>, hook: &'static str, provider: &'static str) -> T {
    match value {
        Some(value) => value,
        None => panic!("{}", MissingProvider { hook, provider }),
    }
}
