use std::sync::OnceLock;

use api::{BackendConfig, SupabaseClient};
use dioxus::prelude::*;
use tracing::Level;

use ui::{AuthProvider, BackendHandle, RequestProvider, StoreProvider, VendorProvider};
use views::Shell;

mod mount;
mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

static BACKEND_CONFIG: OnceLock<BackendConfig> = OnceLock::new();

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");

    if let Err(e) = mount::check() {
        tracing::error!("cannot start: {}", e);
        panic!("{e}");
    }

    match BackendConfig::from_build_env() {
        Ok(config) => {
            tracing::info!(url = config.url(), "using backend");
            BACKEND_CONFIG.get_or_init(|| config);
        }
        Err(e) => tracing::error!("backend is not configured: {}", e),
    }

    launch();
}

#[cfg(feature = "web")]
fn launch() {
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(mount::MOUNT_POINT_ID))
        .launch(App);
}

#[cfg(not(feature = "web"))]
fn launch() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let backend = use_hook(|| {
        BACKEND_CONFIG
            .get()
            .cloned()
            .map(|config| BackendHandle::new(SupabaseClient::new(config)))
    });

    let Some(backend) = backend else {
        return rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "shell",
                p { "The backend is not configured. Set SUPABASE_URL and SUPABASE_ANON_KEY and rebuild." }
            }
        };
    };

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider { backend,
            RequestProvider {
                VendorProvider {
                    StoreProvider {
                        Shell {}
                    }
                }
            }
        }
    }
}
