//! OLT domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DeviceStatus;

/// Optical Line Terminal, the head-end device of a fiber segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Olt {
    /// Unique identifier (creation timestamp for records added in-app)
    pub id: String,
    pub name: String,
    /// Site name. Technicians are scoped by exact match on this value.
    pub location: String,
    pub ip_address: String,
    pub snmp_port: u16,
    pub snmp_version: String,
    pub snmp_community: String,
    pub status: DeviceStatus,
    /// Human readable uptime, e.g. "45 hari 12 jam"
    pub uptime: String,
    pub total_ports: u32,
    pub active_ports: u32,
    pub created_at: DateTime<Utc>,
}

impl Olt {
    /// `active_ports` never exceeds `total_ports`.
    pub fn has_valid_port_counts(&self) -> bool {
        self.active_ports <= self.total_ports
    }

    pub fn free_ports(&self) -> u32 {
        self.total_ports.saturating_sub(self.active_ports)
    }
}
