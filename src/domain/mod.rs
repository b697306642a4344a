pub mod olt;
pub mod onu;
pub mod ports;
pub mod seed;
pub mod settings;
pub mod status;
pub mod user;

// Re-export commonly used types
pub use olt::Olt;
pub use onu::{Onu, OnuMode, WlanConfig, WlanSecurity};
pub use settings::Settings;
pub use status::DeviceStatus;
pub use user::{Session, User, UserRole};

// Re-export errors from shared for convenience
pub use crate::shared::types::errors::{DomainError, DomainResult};
