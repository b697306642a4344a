//! Ports: capabilities the core calls but does not implement
//!
//! The shipped adapters are simulations; a real SNMP poller or analysis
//! backend plugs in behind the same traits without touching the views.

pub mod diagnostics;
pub mod telemetry;

pub use diagnostics::{BreakEstimate, Diagnostics};
pub use telemetry::{DeviceTelemetry, OltTelemetry, OnuTelemetry};
