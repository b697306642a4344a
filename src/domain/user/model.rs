//! User domain entity

use serde::{Deserialize, Serialize};

/// User role
///
/// Technicians are bound to a single site and only ever see the equipment
/// installed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "super-admin")]
    SuperAdmin,
    #[serde(rename = "technician", alias = "teknisi")]
    Technician,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Technician
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super-admin"),
            Self::Technician => write!(f, "technician"),
        }
    }
}

/// User model
///
/// The password is kept in clear text. This roster is a local demo login,
/// not a credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String,
    pub position: String,
    pub role: UserRole,
    /// Site the user is assigned to. Only meaningful for technicians.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl User {
    pub fn is_super_admin(&self) -> bool {
        self.role == UserRole::SuperAdmin
    }

    pub fn credentials_match(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
