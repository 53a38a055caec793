//! Data models for authentication.

mod session;
mod user;

pub use session::{Session, SessionUser};
pub use user::{Identity, Profile, User};
