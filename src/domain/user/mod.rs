//! User aggregate
//!
//! Contains the User entity, its role and the login session.

pub mod model;
pub mod session;

pub use model::{User, UserRole};
pub use session::Session;
