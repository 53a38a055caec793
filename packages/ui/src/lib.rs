//! This crate contains all shared UI for the workspace.
//!
//! The application tree is wrapped in four providers, outermost first:
//! [`AuthProvider`], [`RequestProvider`], [`VendorProvider`], [`StoreProvider`].
//! The data providers follow the signed-in user, so they must sit inside
//! [`AuthProvider`].

pub mod auth;
pub use auth::{
    try_use_auth, use_auth, AuthContext, AuthController, AuthPhase, AuthProvider, AuthState,
    AuthStateCell, BackendHandle, LoginError, LoginForm, LogoutButton,
};

mod context;
pub use context::MissingProvider;

mod scoped;
pub use scoped::ScopedState;

mod requests;
pub use requests::{try_use_requests, use_requests, RequestProvider, RequestState, RequestStatus, ServiceRequest};

mod vendors;
pub use vendors::{try_use_vendors, use_vendors, Vendor, VendorProvider, VendorState};

mod stores;
pub use stores::{try_use_stores, use_stores, Store, StoreProvider, StoreState};
