//! # Authenticated user
//!
//! A [`User`] is never fetched as a whole. The backend keeps identity (id, email) on the
//! session and everything else in a separate `profiles` table, so the user is assembled
//! from a [`Session`] plus the matching [`Profile`] row via [`Identity::assemble`].
//!
//! [`Identity`] carries the user together with the session it came from. Holding the two
//! as one value is what keeps them from ever being set or cleared independently.

use serde::{Deserialize, Serialize};

use super::Session;

/// Row of the `profiles` table, keyed by user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub role: String,
    #[serde(default)]
    pub full_name: String,
}

/// The signed-in user as the UI sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
}

impl User {
    /// Get display name, falling back to email if the profile has no name.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// A user and the session that authenticates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user: User,
    pub session: Session,
}

impl Identity {
    /// Join session identity fields with profile fields.
    pub fn assemble(session: Session, profile: Profile) -> Self {
        let user = User {
            id: session.user.id.clone(),
            email: session.user.email.clone().unwrap_or_default(),
            role: profile.role,
            full_name: profile.full_name,
        };
        Self { user, session }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUser;

    fn session() -> Session {
        Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: None,
            user: SessionUser {
                id: "u-7".to_string(),
                email: Some("vendor@example.com".to_string()),
            },
        }
    }

    #[test]
    fn test_assemble_joins_session_and_profile() {
        let identity = Identity::assemble(
            session(),
            Profile {
                role: "vendor".to_string(),
                full_name: "Vera Vendor".to_string(),
            },
        );
        assert_eq!(identity.user.id, "u-7");
        assert_eq!(identity.user.email, "vendor@example.com");
        assert_eq!(identity.user.role, "vendor");
        assert_eq!(identity.user.full_name, "Vera Vendor");
        assert_eq!(identity.session.user_id(), identity.user.id);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let identity = Identity::assemble(
            session(),
            Profile {
                role: "store".to_string(),
                full_name: String::new(),
            },
        );
        assert_eq!(identity.user.display_name(), "vendor@example.com");
    }
}
