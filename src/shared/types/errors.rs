use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Busy: {0}")]
    Busy(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, value: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: value.into(),
        }
    }

    /// Message suitable for showing to the operator as-is.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg)
            | DomainError::Busy(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type InfraResult<T> = Result<T, InfraError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_strips_category_prefix() {
        let err = DomainError::Validation("VLAN is required".into());
        assert_eq!(err.to_string(), "Validation: VLAN is required");
        assert_eq!(err.user_message(), "VLAN is required");
    }

    #[test]
    fn not_found_formats_entity_and_id() {
        let err = DomainError::not_found("onu", "42");
        assert_eq!(err.to_string(), "Not found: onu with id=42");
    }
}
