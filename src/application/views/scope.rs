//! Role-based visibility
//!
//! Every screen goes through [`scope`]; no other code decides which
//! devices a session may see.

use std::collections::HashSet;

use crate::domain::{Olt, Onu, User, UserRole};

/// The part of the rosters a session is allowed to see
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub olts: Vec<Olt>,
    pub onus: Vec<Onu>,
}

impl Scope {
    pub fn contains_olt(&self, id: &str) -> bool {
        self.olts.iter().any(|olt| olt.id == id)
    }

    pub fn contains_onu(&self, id: &str) -> bool {
        self.onus.iter().any(|onu| onu.id == id)
    }

    pub fn onu(&self, id: &str) -> Option<&Onu> {
        self.onus.iter().find(|onu| onu.id == id)
    }
}

/// Restrict the rosters to what `user` may see.
///
/// - super-admin: everything, order preserved
/// - technician: OLTs whose location equals the user's location, and the
///   ONUs bound to those OLTs; a technician without a location sees nothing
/// - no session: nothing
pub fn scope(user: Option<&User>, olts: &[Olt], onus: &[Onu]) -> Scope {
    let Some(user) = user else {
        return Scope::default();
    };

    match user.role {
        UserRole::SuperAdmin => Scope {
            olts: olts.to_vec(),
            onus: onus.to_vec(),
        },
        UserRole::Technician => {
            let Some(location) = user.location.as_deref() else {
                return Scope::default();
            };
            let visible: Vec<Olt> = olts
                .iter()
                .filter(|olt| olt.location == location)
                .cloned()
                .collect();
            let ids: HashSet<&str> = visible.iter().map(|olt| olt.id.as_str()).collect();
            let onus = onus
                .iter()
                .filter(|onu| ids.contains(onu.olt_id.as_str()))
                .cloned()
                .collect();
            Scope {
                olts: visible,
                onus,
            }
        }
    }
}

/// Distinct OLT locations in first-seen order, for assigning technicians.
pub fn locations(olts: &[Olt]) -> Vec<String> {
    let mut seen = HashSet::new();
    olts.iter()
        .filter(|olt| seen.insert(olt.location.as_str()))
        .map(|olt| olt.location.clone())
        .collect()
}
