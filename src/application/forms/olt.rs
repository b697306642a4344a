use chrono::Utc;
use validator::{Validate, ValidationError};

use super::rule;
use crate::domain::{DeviceStatus, DomainError, DomainResult, Olt};
use crate::shared::timestamp_id;

const REQUIRED: &str = "Please fill in all required fields";

/// Ports provisioned on a newly registered OLT
pub const DEFAULT_TOTAL_PORTS: u32 = 16;
pub const NEW_DEVICE_UPTIME: &str = "0 hari 0 jam";

/// Add/edit form for an OLT
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_snmp_port"))]
pub struct OltForm {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub location: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub ip_address: String,
    pub snmp_port: String,
    pub snmp_version: String,
    pub snmp_community: String,
}

impl Default for OltForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            ip_address: String::new(),
            snmp_port: "161".to_string(),
            snmp_version: "v2c".to_string(),
            snmp_community: "public".to_string(),
        }
    }
}

fn validate_snmp_port(form: &OltForm) -> Result<(), ValidationError> {
    match form.snmp_port.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => Err(rule("snmp_port", "SNMP port must be a number between 1 and 65535")),
    }
}

impl OltForm {
    /// Pre-fill from an existing record for editing.
    pub fn from_olt(olt: &Olt) -> Self {
        Self {
            name: olt.name.clone(),
            location: olt.location.clone(),
            ip_address: olt.ip_address.clone(),
            snmp_port: olt.snmp_port.to_string(),
            snmp_version: olt.snmp_version.clone(),
            snmp_community: olt.snmp_community.clone(),
        }
    }

    fn port(&self) -> DomainResult<u16> {
        self.snmp_port
            .trim()
            .parse()
            .map_err(|_| DomainError::Validation(REQUIRED.into()))
    }

    /// Build a brand-new record: fresh id, online, no active ports.
    pub fn build_new(&self) -> DomainResult<Olt> {
        super::check(self)?;
        Ok(Olt {
            id: timestamp_id(),
            name: self.name.clone(),
            location: self.location.clone(),
            ip_address: self.ip_address.clone(),
            snmp_port: self.port()?,
            snmp_version: self.snmp_version.clone(),
            snmp_community: self.snmp_community.clone(),
            status: DeviceStatus::Online,
            uptime: NEW_DEVICE_UPTIME.to_string(),
            total_ports: DEFAULT_TOTAL_PORTS,
            active_ports: 0,
            created_at: Utc::now(),
        })
    }

    /// Apply the edited fields to `existing`, keeping its id and the
    /// device-reported fields (status, uptime, port counters, creation time).
    pub fn build_update(&self, existing: &Olt) -> DomainResult<Olt> {
        super::check(self)?;
        Ok(Olt {
            name: self.name.clone(),
            location: self.location.clone(),
            ip_address: self.ip_address.clone(),
            snmp_port: self.port()?,
            snmp_version: self.snmp_version.clone(),
            snmp_community: self.snmp_community.clone(),
            ..existing.clone()
        })
    }
}
