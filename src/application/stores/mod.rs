//! Client-side domain state
//!
//! Four independent stores, each owning one persisted partition. Screens
//! never mutate them directly; they dispatch an [`Action`] through the
//! application context, which applies it and publishes the resulting event.

mod action;
mod auth;
mod olt;
mod onu;
mod roster;
mod settings;

pub use action::{Action, AuthAction, OltAction, OnuAction, SettingsAction};
pub use auth::AuthStore;
pub use olt::OltStore;
pub use onu::OnuStore;
pub use roster::{Keyed, Roster};
pub use settings::SettingsStore;

use crate::notifications::Event;

/// All four stores, owned together by the application context
#[derive(Debug, Clone)]
pub struct StoreSet {
    pub auth: AuthStore,
    pub olt: OltStore,
    pub onu: OnuStore,
    pub settings: SettingsStore,
    /// Bumped whenever whole stores are swapped out (rehydrate, purge), so
    /// revision counters that restart at zero cannot alias older state.
    epoch: u64,
}

impl StoreSet {
    pub fn seeded() -> Self {
        Self {
            auth: AuthStore::seeded(),
            olt: OltStore::seeded(),
            onu: OnuStore::seeded(),
            settings: SettingsStore::seeded(),
            epoch: 0,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drop everything and start over from the seed roster.
    pub fn reset_to_seed(&mut self) {
        self.swap_in(Self::seeded());
    }

    /// Replace all four stores at once, moving to a new epoch.
    pub(crate) fn swap_in(&mut self, next: StoreSet) {
        let epoch = self.epoch.max(next.epoch) + 1;
        *self = next;
        self.epoch = epoch;
    }

    /// Apply one action. Returns the event to publish, or `None` when the
    /// action turned out to be a no-op (unknown id, failed login, ...).
    pub fn reduce(&mut self, action: Action) -> Option<Event> {
        match action {
            Action::Auth(action) => self.auth.reduce(action),
            Action::Olt(action) => self.olt.reduce(action),
            Action::Onu(action) => self.onu.reduce(action),
            Action::Settings(action) => self.settings.reduce(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_seed_in_a_new_epoch() {
        let mut stores = StoreSet::seeded();
        stores.reduce(OltAction::Delete("1".into()).into());
        stores.auth.login("admin", "admin123").unwrap();

        stores.reset_to_seed();

        assert_eq!(stores.epoch(), 1);
        assert_eq!(stores.olt.olts().len(), 2);
        assert!(!stores.auth.is_authenticated());
        // Fresh counters; only the epoch tells this state apart
        assert_eq!(stores.olt.revision(), 0);
    }

    #[test]
    fn noop_actions_produce_no_event() {
        let mut stores = StoreSet::seeded();
        assert_eq!(stores.reduce(OnuAction::Delete("404".into()).into()), None);
        assert_eq!(
            stores.reduce(
                AuthAction::Login {
                    username: "admin".into(),
                    password: "nope".into()
                }
                .into()
            ),
            None
        );
        assert_eq!(
            stores.reduce(OnuAction::Delete("3".into()).into()),
            Some(Event::OnuDeleted {
                onu_id: "3".into()
            })
        );
    }
}
