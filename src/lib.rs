//! # SmartOLT Monitor
//!
//! Core of a monitoring console for fiber access networks: OLT and ONU
//! rosters, a user roster with a single local session, role and location
//! scoped views, and local persistence of the state between launches.
//!
//! ## Architecture
//!
//! - **domain**: Records (users, OLTs, ONUs, settings), seed data and the
//!   device ports (diagnostics, telemetry)
//! - **application**: Stores, derived views, forms, simulated services and
//!   the [`App`] context every screen talks to
//! - **infrastructure**: Partition storage (file and in-memory) and the
//!   launch gate
//! - **notifications**: Change events broadcast to open screens
//! - **shared**: Error types and id generation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod notifications;
pub mod shared;

pub use application::App;
pub use config::{config_path, default_config_path, AppConfig};

// Re-export notifications
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};
