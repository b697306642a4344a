use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{DeviceTelemetry, OltTelemetry, OnuTelemetry};
use crate::domain::{DomainResult, Olt, Onu};

/// Reports back what the store already knows about a device; no SNMP
/// traffic is generated.
#[derive(Debug, Clone, Default)]
pub struct MockDeviceTelemetry;

#[async_trait]
impl DeviceTelemetry for MockDeviceTelemetry {
    async fn poll_olt(&self, olt: &Olt) -> DomainResult<OltTelemetry> {
        Ok(OltTelemetry {
            olt_id: olt.id.clone(),
            status: olt.status,
            uptime: olt.uptime.clone(),
            active_ports: olt.active_ports,
            total_ports: olt.total_ports,
            observed_at: Utc::now(),
        })
    }

    async fn poll_onu(&self, onu: &Onu) -> DomainResult<OnuTelemetry> {
        Ok(OnuTelemetry {
            onu_id: onu.id.clone(),
            status: onu.status,
            signal_strength: onu.signal_strength,
            observed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[tokio::test]
    async fn echoes_stored_counters() {
        let olt = seed::olts().remove(1);
        let reading = MockDeviceTelemetry.poll_olt(&olt).await.unwrap();
        assert_eq!(reading.olt_id, olt.id);
        assert_eq!(reading.active_ports, olt.active_ports);
        assert_eq!(reading.status, olt.status);

        let onu = seed::onus().remove(2);
        let reading = MockDeviceTelemetry.poll_onu(&onu).await.unwrap();
        assert_eq!(reading.signal_strength, onu.signal_strength);
    }
}
