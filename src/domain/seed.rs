//! Initial roster used on first launch and after a logout purge

use chrono::{DateTime, TimeZone, Utc};

use super::{DeviceStatus, Olt, Onu, OnuMode, Settings, User, UserRole, WlanConfig, WlanSecurity};

pub const HEADQUARTERS: &str = "Gedung Pusat Telekomunikasi";
pub const WEST_BRANCH: &str = "Kantor Cabang Barat";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or_default()
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "user-1".into(),
            username: "admin".into(),
            password: "admin123".into(),
            name: "Administrator".into(),
            position: "Super Admin".into(),
            role: UserRole::SuperAdmin,
            location: None,
        },
        User {
            id: "user-2".into(),
            username: "teknisi".into(),
            password: "teknisi123".into(),
            name: "Budi Santoso".into(),
            position: "Teknisi Lapangan".into(),
            role: UserRole::Technician,
            location: Some(HEADQUARTERS.into()),
        },
    ]
}

pub fn olts() -> Vec<Olt> {
    vec![
        Olt {
            id: "1".into(),
            name: "OLT-Central-01".into(),
            location: HEADQUARTERS.into(),
            ip_address: "192.168.1.100".into(),
            snmp_port: 161,
            snmp_version: "v2c".into(),
            snmp_community: "public".into(),
            status: DeviceStatus::Online,
            uptime: "45 hari 12 jam".into(),
            total_ports: 16,
            active_ports: 14,
            created_at: at(2024, 1, 15, 8, 0),
        },
        Olt {
            id: "2".into(),
            name: "OLT-West-02".into(),
            location: WEST_BRANCH.into(),
            ip_address: "192.168.2.100".into(),
            snmp_port: 161,
            snmp_version: "v2c".into(),
            snmp_community: "public".into(),
            status: DeviceStatus::Online,
            uptime: "30 hari 6 jam".into(),
            total_ports: 8,
            active_ports: 7,
            created_at: at(2024, 2, 1, 10, 30),
        },
    ]
}

pub fn onus() -> Vec<Onu> {
    vec![
        Onu {
            id: "1".into(),
            olt_id: "1".into(),
            olt_name: "OLT-Central-01".into(),
            name: "ONU-Customer-001".into(),
            serial_number: "HWTC12345678".into(),
            mac_address: "00:11:22:33:44:55".into(),
            ip_address: "192.168.100.10".into(),
            status: DeviceStatus::Online,
            signal_strength: -22,
            distance: "1.2 km".into(),
            port: "PON 0/1/1".into(),
            vlan: 100,
            mode: OnuMode::Pppoe,
            pppoe_username: Some("user001@isp.net".into()),
            pppoe_password: Some("password123".into()),
            port_binding: vec!["LAN1".into(), "LAN2".into()],
            wlan: WlanConfig {
                ssid: "WiFi-Customer-001".into(),
                security: WlanSecurity::Password,
                password: Some("wifi123456".into()),
            },
            uptime: "15 hari 8 jam".into(),
            last_seen: at(2025, 1, 10, 14, 30),
            estimated_break_location: None,
        },
        Onu {
            id: "2".into(),
            olt_id: "1".into(),
            olt_name: "OLT-Central-01".into(),
            name: "ONU-Customer-002".into(),
            serial_number: "HWTC87654321".into(),
            mac_address: "AA:BB:CC:DD:EE:FF".into(),
            ip_address: "192.168.100.11".into(),
            status: DeviceStatus::Online,
            signal_strength: -25,
            distance: "2.5 km".into(),
            port: "PON 0/1/2".into(),
            vlan: 100,
            mode: OnuMode::Bridge,
            pppoe_username: None,
            pppoe_password: None,
            port_binding: vec!["LAN1".into(), "LAN2".into(), "LAN3".into(), "LAN4".into()],
            wlan: WlanConfig {
                ssid: "Home-Network-002".into(),
                security: WlanSecurity::Password,
                password: Some("secure2025".into()),
            },
            uptime: "22 hari 3 jam".into(),
            last_seen: at(2025, 1, 10, 14, 28),
            estimated_break_location: None,
        },
        Onu {
            id: "3".into(),
            olt_id: "2".into(),
            olt_name: "OLT-West-02".into(),
            name: "ONU-Customer-003".into(),
            serial_number: "HWTC11223344".into(),
            mac_address: "11:22:33:44:55:66".into(),
            ip_address: "192.168.100.12".into(),
            status: DeviceStatus::Offline,
            signal_strength: -28,
            distance: "3.1 km".into(),
            port: "PON 0/2/1".into(),
            vlan: 200,
            mode: OnuMode::Pppoe,
            pppoe_username: Some("user003@isp.net".into()),
            pppoe_password: Some("pass2025".into()),
            port_binding: vec!["LAN1".into()],
            wlan: WlanConfig {
                ssid: "MyWiFi-003".into(),
                security: WlanSecurity::Open,
                password: None,
            },
            uptime: "0 hari 0 jam".into(),
            last_seen: at(2025, 1, 9, 22, 15),
            estimated_break_location: None,
        },
    ]
}

pub fn settings() -> Settings {
    Settings::default()
}
