use validator::Validate;

use crate::domain::DomainResult;

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username and password must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password must not be empty"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn check(&self) -> DomainResult<()> {
        super::check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn empty_fields_collapse_into_one_message() {
        let err = LoginForm::new("", "").check().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "Username and password must not be empty")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(LoginForm::new("admin", "x").check().is_ok());
    }
}
