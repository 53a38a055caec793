//! Signed-in landing view.

use api::User;
use dioxus::prelude::*;
use ui::{use_auth, use_requests, use_stores, use_vendors, LogoutButton};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let requests = use_requests();
    let vendors = use_vendors();
    let stores = use_stores();

    let Some(user) = auth.current_user() else {
        return rsx! {};
    };
    let name = user.display_name().to_string();
    let User { email, role, .. } = user;
    let request_count = requests.read().items().len();
    let vendor_count = vendors.read().items().len();
    let store_count = stores.read().items().len();

    rsx! {
        h1 { class: "page-title", "Welcome, {name}" }
        p { class: "page-subtitle", "Signed in as {email} ({role})" }

        div { class: "dashboard-counts",
            span { "Requests: {request_count}" }
            span { "Vendors: {vendor_count}" }
            span { "Stores: {store_count}" }
        }

        LogoutButton { class: "login-btn" }
    }
}
