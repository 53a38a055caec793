//! Service requests visible to the signed-in user.

use dioxus::prelude::*;

use crate::context::{require_context, try_require_context, MissingProvider};
use crate::scoped::{use_scoped_provider, ScopedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Open,
    InProgress,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub vendor_id: Option<String>,
    pub status: RequestStatus,
}

pub type RequestState = ScopedState<ServiceRequest>;

pub fn use_requests() -> Signal<RequestState> {
    require_context("use_requests", "RequestProvider")
}

pub fn try_use_requests() -> Result<Signal<RequestState>, MissingProvider> {
    try_require_context("use_requests", "RequestProvider")
}

/// Holds the current user's service requests. Must sit inside an `AuthProvider`.
#[component]
pub fn RequestProvider(children: Element) -> Element {
    use_scoped_provider::<ServiceRequest>();

    rsx! {
        {children}
    }
}
