//! ONU roster

use serde::{Deserialize, Serialize};

use super::{OnuAction, Roster};
use crate::domain::{seed, Onu};
use crate::notifications::Event;

/// Owns the subscriber terminals in creation order.
///
/// Field rules (PPPoE credentials, WLAN password) are checked by the
/// configuration form before it dispatches; the store itself takes any
/// well-typed record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnuStore {
    onus: Roster<Onu>,
}

impl OnuStore {
    pub fn seeded() -> Self {
        Self::with_onus(seed::onus())
    }

    pub fn with_onus(onus: Vec<Onu>) -> Self {
        Self {
            onus: Roster::new(onus),
        }
    }

    pub fn onus(&self) -> &[Onu] {
        self.onus.items()
    }

    pub fn get(&self, id: &str) -> Option<&Onu> {
        self.onus.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.onus.revision()
    }

    pub fn add(&mut self, onu: Onu) {
        self.onus.push(onu);
    }

    pub fn update(&mut self, onu: Onu) -> bool {
        self.onus.replace(onu)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        self.onus.remove(id)
    }

    /// ONUs whose owning OLT is no longer in `olts`.
    pub fn orphans<'a>(&'a self, olts: &'a [crate::domain::Olt]) -> impl Iterator<Item = &'a Onu> {
        self.onus
            .items()
            .iter()
            .filter(move |onu| !olts.iter().any(|olt| olt.id == onu.olt_id))
    }

    pub(crate) fn reduce(&mut self, action: OnuAction) -> Option<Event> {
        match action {
            OnuAction::Add(onu) => {
                let onu_id = onu.id.clone();
                self.add(onu);
                Some(Event::OnuAdded { onu_id })
            }
            OnuAction::Update(onu) => {
                let onu_id = onu.id.clone();
                self.update(onu).then_some(Event::OnuUpdated { onu_id })
            }
            OnuAction::Delete(onu_id) => self
                .delete(&onu_id)
                .then_some(Event::OnuDeleted { onu_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::stores::OltStore;
    use crate::domain::OnuMode;

    #[test]
    fn store_accepts_records_that_break_form_rules() {
        let mut store = OnuStore::seeded();
        let mut onu = store.get("2").cloned().unwrap();
        onu.mode = OnuMode::Pppoe;
        onu.pppoe_username = None;

        assert!(store.update(onu));
        assert!(!store.get("2").unwrap().credentials_consistent());
    }

    // Deleting an OLT does not cascade: its ONUs stay, still carrying the
    // old OLT name.
    #[test]
    fn olt_delete_leaves_orphans_with_stale_name() {
        let mut olts = OltStore::seeded();
        let onus = OnuStore::seeded();
        olts.delete("2");

        let orphans: Vec<&Onu> = onus.orphans(olts.olts()).collect();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].id, "3");
        assert_eq!(orphans[0].olt_name, "OLT-West-02");
    }

    #[test]
    fn reduce_add_then_delete() {
        let mut store = OnuStore::default();
        let onu = seed::onus().remove(0);
        assert_eq!(
            store.reduce(OnuAction::Add(onu)),
            Some(Event::OnuAdded { onu_id: "1".into() })
        );
        assert_eq!(
            store.reduce(OnuAction::Delete("1".into())),
            Some(Event::OnuDeleted { onu_id: "1".into() })
        );
        assert!(store.onus().is_empty());
        assert_eq!(store.revision(), 2);
    }
}
