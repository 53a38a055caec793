use dioxus::prelude::*;

use super::use_auth;

/// Email + password sign-in form.
#[component]
pub fn LoginForm(#[props(default = "".to_string())] class: String) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let authenticating = auth.is_authenticating();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            if let Err(err) = auth.login(&e, &p).await {
                error.set(Some(err.to_string()));
            } else {
                password.set(String::new());
            }
        });
    };

    rsx! {
        form {
            class: "login-form {class}",
            onsubmit: handle_login,

            if let Some(err) = error() {
                div {
                    class: "form-error",
                    "{err}"
                }
            }

            input {
                class: "login-input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "login-input",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                class: "login-btn",
                r#type: "submit",
                disabled: authenticating,
                if authenticating { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        let auth = auth.clone();
        async move {
            auth.logout().await;
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
