//! Login page view with the email/password form.

use dioxus::prelude::*;
use ui::LoginForm;

#[component]
pub fn Login() -> Element {
    rsx! {
        h1 {
            class: "page-title",
            "Marketplace"
        }

        p {
            class: "page-subtitle",
            "Sign in to manage requests, vendors and stores."
        }

        LoginForm {}
    }
}
