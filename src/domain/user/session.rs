//! Process-wide login session

use serde::{Deserialize, Serialize};

use super::User;

/// The single session of the running instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn signed_in(user: User) -> Self {
        Self {
            current_user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        if self.is_authenticated {
            self.current_user.as_ref()
        } else {
            None
        }
    }
}
