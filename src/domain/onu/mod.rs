//! ONU aggregate

pub mod model;

pub use model::{parse_distance_km, Onu, OnuMode, WlanConfig, WlanSecurity, LAN_PORTS};
