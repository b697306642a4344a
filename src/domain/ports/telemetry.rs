use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DeviceStatus, DomainResult, Olt, Onu};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OltTelemetry {
    pub olt_id: String,
    pub status: DeviceStatus,
    pub uptime: String,
    pub active_ports: u32,
    pub total_ports: u32,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnuTelemetry {
    pub onu_id: String,
    pub status: DeviceStatus,
    pub signal_strength: i32,
    pub observed_at: DateTime<Utc>,
}

/// Read-side access to live device counters (SNMP in a real deployment).
#[async_trait]
pub trait DeviceTelemetry: Send + Sync {
    async fn poll_olt(&self, olt: &Olt) -> DomainResult<OltTelemetry>;
    async fn poll_onu(&self, onu: &Onu) -> DomainResult<OnuTelemetry>;
}
