//! User roster and the process-wide session

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{AuthAction, Roster};
use crate::domain::{seed, DomainError, DomainResult, Session, User};
use crate::notifications::Event;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthStore {
    #[serde(flatten)]
    session: Session,
    users: Roster<User>,
}

impl AuthStore {
    pub fn seeded() -> Self {
        Self::with_users(seed::users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            session: Session::default(),
            users: Roster::new(users),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn users(&self) -> &[User] {
        self.users.items()
    }

    pub fn revision(&self) -> u64 {
        self.users.revision()
    }

    /// Exact (username, password) match against the roster.
    ///
    /// With duplicate usernames the earliest matching entry wins. On a miss
    /// the session is left exactly as it was.
    pub fn login(&mut self, username: &str, password: &str) -> DomainResult<User> {
        let Some(user) = self
            .users
            .items()
            .iter()
            .find(|u| u.credentials_match(username, password))
            .cloned()
        else {
            warn!(username = %username, "Login rejected: invalid credentials");
            return Err(DomainError::Unauthorized("invalid credentials".into()));
        };

        info!(user_id = %user.id, role = %user.role, "User signed in");
        self.session = Session::signed_in(user.clone());
        self.users.touch();
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.current_user.as_ref() {
            info!(user_id = %user.id, "User signed out");
        }
        self.session = Session::default();
        self.users.touch();
    }

    /// Append without checking username uniqueness or the caller's role.
    pub fn add_user(&mut self, user: User) {
        if self.users.items().iter().any(|u| u.username == user.username) {
            warn!(username = %user.username, "Adding user with a username already in the roster");
        }
        self.users.push(user);
    }

    pub(crate) fn reduce(&mut self, action: AuthAction) -> Option<Event> {
        match action {
            AuthAction::Login { username, password } => self
                .login(&username, &password)
                .ok()
                .map(|user| Event::SessionStarted { user_id: user.id }),
            AuthAction::Logout => {
                let was_signed_in = self.session.is_authenticated;
                self.logout();
                was_signed_in.then_some(Event::SessionEnded)
            }
            AuthAction::AddUser(user) => {
                let user_id = user.id.clone();
                self.add_user(user);
                Some(Event::UserAdded { user_id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    #[test]
    fn login_with_exact_match_opens_session() {
        let mut store = AuthStore::seeded();
        let user = store.login("teknisi", "teknisi123").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(&user));
        assert_eq!(user.role, UserRole::Technician);
    }

    #[test]
    fn login_miss_keeps_session() {
        let mut store = AuthStore::seeded();
        assert!(matches!(
            store.login("admin", "wrong"),
            Err(DomainError::Unauthorized(_))
        ));
        assert!(!store.is_authenticated());

        store.login("admin", "admin123").unwrap();
        assert!(store.login("teknisi", "nope").is_err());
        assert_eq!(store.current_user().map(|u| u.username.as_str()), Some("admin"));
    }

    #[test]
    fn password_match_is_case_sensitive() {
        let mut store = AuthStore::seeded();
        assert!(store.login("admin", "ADMIN123").is_err());
        assert!(store.login("Admin", "admin123").is_err());
    }

    // Duplicate usernames are accepted; login resolves to the first entry.
    #[test]
    fn duplicate_username_first_match_wins() {
        let mut store = AuthStore::seeded();
        let mut clone = seed::users().remove(1);
        clone.id = "user-dup".into();
        store.add_user(clone);

        assert_eq!(store.users().len(), 3);
        let user = store.login("teknisi", "teknisi123").unwrap();
        assert_eq!(user.id, "user-2");
    }

    #[test]
    fn logout_clears_session() {
        let mut store = AuthStore::seeded();
        store.login("admin", "admin123").unwrap();
        assert_eq!(store.reduce(AuthAction::Logout), Some(Event::SessionEnded));
        assert_eq!(store.session(), &Session::default());
        assert_eq!(store.reduce(AuthAction::Logout), None);
    }

    #[test]
    fn persisted_shape_flattens_session() {
        let mut store = AuthStore::seeded();
        store.login("admin", "admin123").unwrap();
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["currentUser"]["role"], "super-admin");
        assert_eq!(json["users"][1]["role"], "technician");
    }
}
