//! OLT roster

use serde::{Deserialize, Serialize};

use super::{OltAction, Roster};
use crate::domain::{seed, Olt};
use crate::notifications::Event;

/// Owns the OLT roster in creation order.
///
/// The store accepts any well-formed record; who may add or remove devices
/// is decided by the calling screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OltStore {
    olts: Roster<Olt>,
}

impl OltStore {
    pub fn seeded() -> Self {
        Self::with_olts(seed::olts())
    }

    pub fn with_olts(olts: Vec<Olt>) -> Self {
        Self {
            olts: Roster::new(olts),
        }
    }

    pub fn olts(&self) -> &[Olt] {
        self.olts.items()
    }

    pub fn get(&self, id: &str) -> Option<&Olt> {
        self.olts.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.olts.revision()
    }

    pub fn add(&mut self, olt: Olt) {
        self.olts.push(olt);
    }

    /// No-op when the id is unknown.
    pub fn update(&mut self, olt: Olt) -> bool {
        self.olts.replace(olt)
    }

    /// ONUs bound to the removed OLT keep their `olt_id` and `olt_name`.
    pub fn delete(&mut self, id: &str) -> bool {
        self.olts.remove(id)
    }

    pub(crate) fn reduce(&mut self, action: OltAction) -> Option<Event> {
        match action {
            OltAction::Add(olt) => {
                let olt_id = olt.id.clone();
                self.add(olt);
                Some(Event::OltAdded { olt_id })
            }
            OltAction::Update(olt) => {
                let olt_id = olt.id.clone();
                self.update(olt).then_some(Event::OltUpdated { olt_id })
            }
            OltAction::Delete(olt_id) => self
                .delete(&olt_id)
                .then_some(Event::OltDeleted { olt_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_whole_record() {
        let mut store = OltStore::seeded();
        let mut edited = store.get("2").cloned().unwrap();
        edited.name = "OLT-West-02b".into();
        edited.snmp_community = "private".into();

        assert!(store.update(edited.clone()));
        assert_eq!(store.get("2"), Some(&edited));
        assert_eq!(store.get("1").map(|o| o.name.as_str()), Some("OLT-Central-01"));
    }

    #[test]
    fn reduce_reports_only_effective_changes() {
        let mut store = OltStore::seeded();
        assert_eq!(
            store.reduce(OltAction::Delete("1".into())),
            Some(Event::OltDeleted { olt_id: "1".into() })
        );
        assert_eq!(store.reduce(OltAction::Delete("1".into())), None);

        let ghost = seed::olts().remove(0);
        assert_eq!(store.reduce(OltAction::Update(ghost)), None);
        assert_eq!(store.olts().len(), 1);
    }

    #[test]
    fn persisted_shape_is_a_named_list() {
        let json = serde_json::to_value(OltStore::seeded()).unwrap();
        assert_eq!(json["olts"][0]["ipAddress"], "192.168.1.100");
        assert_eq!(json["olts"][1]["status"], "online");
    }
}
