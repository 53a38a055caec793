//! Vendors the signed-in user works with.

use dioxus::prelude::*;

use crate::context::{require_context, try_require_context, MissingProvider};
use crate::scoped::{use_scoped_provider, ScopedState};

#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub contact_email: Option<String>,
}

pub type VendorState = ScopedState<Vendor>;

pub fn use_vendors() -> Signal<VendorState> {
    require_context("use_vendors", "VendorProvider")
}

pub fn try_use_vendors() -> Result<Signal<VendorState>, MissingProvider> {
    try_require_context("use_vendors", "VendorProvider")
}

#[component]
pub fn VendorProvider(children: Element) -> Element {
    use_scoped_provider::<Vendor>();

    rsx! {
        {children}
    }
}
