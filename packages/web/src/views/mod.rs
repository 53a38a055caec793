mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

use dioxus::prelude::*;
use ui::use_auth;

/// Top-level view: sign-in form until a user is present.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();

    rsx! {
        div { class: "shell",
            if auth.current_user().is_some() {
                Dashboard {}
            } else {
                Login {}
            }
        }
    }
}
