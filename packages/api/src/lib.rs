//! # API crate: hosted backend client for the marketplace front-end
//!
//! Everything the UI needs to talk to the hosted backend-as-a-service lives here,
//! kept free of any Dioxus types so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`AuthBackend`] seam and the two-step sign-in saga ([`sign_in_flow`]) |
//! | [`config`] | Backend URL + anon key, from the environment or captured at build time |
//! | [`error`] | [`ApiError`] and [`ConfigError`] |
//! | [`events`] | Auth-state change notifications and their subscriptions |
//! | [`models`] | `User`, `Session`, `Profile` and the `Identity` pair |
//! | [`supabase`] | [`SupabaseClient`], the HTTP implementation of [`AuthBackend`] |

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod supabase;

pub use auth::{sign_in_flow, AuthBackend, LoginOutcome};
pub use config::BackendConfig;
pub use error::{ApiError, ConfigError};
pub use events::{AuthChangeEvent, AuthEvents, AuthSubscription};
pub use models::{Identity, Profile, Session, SessionUser, User};
pub use supabase::SupabaseClient;
