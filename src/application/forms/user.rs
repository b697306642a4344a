use validator::Validate;

use crate::domain::{DomainError, DomainResult, User, UserRole};
use crate::shared::user_id;

/// Form used by a super-admin to enrol a field technician
#[derive(Debug, Clone, Default, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub username: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub password: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub position: String,
    #[validate(length(min = 1, message = "Please fill in all fields"))]
    pub location: String,
}

impl UserForm {
    /// Users created here are always technicians bound to `location`,
    /// which must be one of `known_locations` (the OLT sites).
    pub fn build(&self, known_locations: &[String]) -> DomainResult<User> {
        super::check(self)?;
        if !known_locations.iter().any(|l| *l == self.location) {
            return Err(DomainError::Validation(format!(
                "Unknown location '{}'",
                self.location
            )));
        }
        Ok(User {
            id: user_id(),
            username: self.username.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            role: UserRole::Technician,
            location: Some(self.location.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::views::locations;
    use crate::domain::seed;

    fn sites() -> Vec<String> {
        locations(&seed::olts())
    }

    fn sari(location: &str) -> UserForm {
        UserForm {
            username: "sari".into(),
            password: "sari123".into(),
            name: "Sari Dewi".into(),
            position: "Teknisi Lapangan".into(),
            location: location.into(),
        }
    }

    #[test]
    fn builds_technician() {
        let user = sari("Kantor Cabang Barat").build(&sites()).unwrap();
        assert_eq!(user.role, UserRole::Technician);
        assert_eq!(user.location.as_deref(), Some("Kantor Cabang Barat"));
        assert!(user.id.starts_with("user-"));
    }

    #[test]
    fn location_is_required() {
        assert!(matches!(sari("").build(&sites()), Err(DomainError::Validation(_))));
    }

    #[test]
    fn location_must_be_an_olt_site() {
        let err = sari("Kantor Cabang Barta").build(&sites()).unwrap_err();
        assert_eq!(err.user_message(), "Unknown location 'Kantor Cabang Barta'");
    }
}
