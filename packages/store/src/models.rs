//! # Session models
//!
//! The client keeps exactly two things between page loads: the bearer token the
//! server issued at login, and a small descriptor of who that token belongs to.
//! Both are grouped into a [`Session`] so they can only be written and cleared
//! together.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | The account's role. Accepts both `"ROLE_ADMIN"` and the bare `"ADMIN"` spelling on input, always writes the `ROLE_*` form. |
//! | [`SessionUser`] | The user blob persisted under the `user` key: `email`, `name`, `role`, `userId` and an optional `imagePath`. |
//! | [`Session`] | Token + user pair returned by [`crate::SessionStore::load`]. |

use serde::{Deserialize, Serialize};

/// Account role as issued by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "ROLE_USER", alias = "USER")]
    User,
    #[serde(rename = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Human label used by the admin user table.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// User descriptor stored alongside the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

impl SessionUser {
    /// Get display name, falling back to email if name is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// An authenticated session: the bearer token and the user it identifies.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}
