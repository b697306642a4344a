//! ONU domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DeviceStatus;

/// WAN connection mode of a subscriber terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnuMode {
    /// Dial-up over Ethernet; needs stored credentials
    Pppoe,
    /// Transparent bridge; no credentials
    Bridge,
}

impl std::fmt::Display for OnuMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pppoe => write!(f, "pppoe"),
            Self::Bridge => write!(f, "bridge"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WlanSecurity {
    Open,
    Password,
}

/// Wireless LAN served by the terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WlanConfig {
    pub ssid: String,
    pub security: WlanSecurity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// LAN ports that can be bound to the WAN service
pub const LAN_PORTS: [&str; 4] = ["LAN1", "LAN2", "LAN3", "LAN4"];

/// Optical Network Unit, the subscriber-side terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onu {
    pub id: String,
    /// Owning OLT. Not enforced: the OLT may have been deleted since.
    pub olt_id: String,
    /// Copy of the owning OLT's name taken when the ONU was bound.
    /// Renaming or deleting the OLT does not touch it.
    pub olt_name: String,
    pub name: String,
    pub serial_number: String,
    pub mac_address: String,
    pub ip_address: String,
    pub status: DeviceStatus,
    /// Received optical power in dBm
    pub signal_strength: i32,
    /// Fiber distance from the OLT, e.g. "1.2 km"
    pub distance: String,
    pub port: String,
    pub vlan: u16,
    pub mode: OnuMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pppoe_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pppoe_password: Option<String>,
    pub port_binding: Vec<String>,
    pub wlan: WlanConfig,
    pub uptime: String,
    pub last_seen: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_break_location: Option<String>,
}

impl Onu {
    /// PPPoE credentials are present iff the mode is PPPoE, and the WLAN
    /// password is present iff security is password.
    pub fn credentials_consistent(&self) -> bool {
        let pppoe = self.pppoe_username.is_some() && self.pppoe_password.is_some();
        let no_pppoe = self.pppoe_username.is_none() && self.pppoe_password.is_none();
        let pppoe_ok = match self.mode {
            OnuMode::Pppoe => pppoe,
            OnuMode::Bridge => no_pppoe,
        };
        let wlan_ok = match self.wlan.security {
            WlanSecurity::Password => self.wlan.password.is_some(),
            WlanSecurity::Open => self.wlan.password.is_none(),
        };
        pppoe_ok && wlan_ok
    }

    /// Distance in kilometres, if the display string can be read.
    pub fn distance_km(&self) -> Option<f64> {
        parse_distance_km(&self.distance)
    }
}

/// Parse a display distance such as "1.2 km" or "800 m" into kilometres.
pub fn parse_distance_km(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (number, scale) = if let Some(km) = trimmed.strip_suffix("km") {
        (km, 1.0)
    } else if let Some(m) = trimmed.strip_suffix('m') {
        (m, 0.001)
    } else {
        (trimmed, 1.0)
    };
    let value: f64 = number.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value * scale)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_distances() {
        assert_eq!(parse_distance_km("1.2 km"), Some(1.2));
        assert_eq!(parse_distance_km("3km"), Some(3.0));
        assert_eq!(parse_distance_km("500 m"), Some(0.5));
        assert_eq!(parse_distance_km("far away"), None);
        assert_eq!(parse_distance_km("-1 km"), None);
    }
}
