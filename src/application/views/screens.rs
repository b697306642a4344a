//! Per-screen view models
//!
//! Each keeps its own filter selection and memoized rows; callers hand in
//! the current stores whenever they render.

use super::{
    scope, DashboardSummary, Memo, Navigation, OltFilter, OltSelection, OnuFilter, Scope,
};
use crate::application::stores::StoreSet;
use crate::domain::{Olt, Onu};

/// Everything a derived view depends on besides its own filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewKey<F> {
    epoch: u64,
    auth: u64,
    olt: u64,
    onu: u64,
    user_id: Option<String>,
    filter: F,
}

impl<F> ViewKey<F> {
    pub fn new(stores: &StoreSet, filter: F) -> Self {
        Self {
            epoch: stores.epoch(),
            auth: stores.auth.revision(),
            olt: stores.olt.revision(),
            onu: stores.onu.revision(),
            user_id: stores.auth.current_user().map(|u| u.id.clone()),
            filter,
        }
    }
}

fn scoped(stores: &StoreSet) -> Scope {
    scope(
        stores.auth.current_user(),
        stores.olt.olts(),
        stores.onu.onus(),
    )
}

#[derive(Debug, Default)]
pub struct DashboardView {
    memo: Memo<ViewKey<()>, DashboardSummary>,
}

impl DashboardView {
    pub fn summary(&mut self, stores: &StoreSet) -> DashboardSummary {
        *self.memo.get_or_compute(ViewKey::new(stores, ()), || {
            DashboardSummary::compute(&scoped(stores), stores.auth.users().len())
        })
    }

    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}

#[derive(Debug, Default)]
pub struct OltListView {
    pub filter: OltFilter,
    memo: Memo<ViewKey<OltFilter>, Vec<Olt>>,
}

impl OltListView {
    pub fn rows(&mut self, stores: &StoreSet) -> &[Olt] {
        let filter = self.filter.clone();
        self.memo
            .get_or_compute(ViewKey::new(stores, filter.clone()), || {
                filter.apply(&scoped(stores).olts)
            })
    }

    /// Detail lookup restricted to what the session may see.
    pub fn find(&self, stores: &StoreSet, id: &str) -> Option<Olt> {
        scoped(stores).olts.into_iter().find(|olt| olt.id == id)
    }
}

#[derive(Debug, Default)]
pub struct OnuListView {
    filter: OnuFilter,
    memo: Memo<ViewKey<OnuFilter>, Vec<Onu>>,
}

impl OnuListView {
    pub fn filter(&self) -> &OnuFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: OnuFilter) {
        self.filter = filter;
    }

    /// Adopt the filter carried by a dashboard tile selection.
    pub fn open_with(&mut self, navigation: &Navigation) {
        if let Some(filter) = &navigation.onu_filter {
            self.filter = filter.clone();
        }
    }

    pub fn rows(&mut self, stores: &StoreSet) -> &[Onu] {
        let filter = self.filter.clone();
        self.memo
            .get_or_compute(ViewKey::new(stores, filter.clone()), || {
                filter.apply(&scoped(stores).onus)
            })
    }

    /// OLT choices offered by the owner filter: only OLTs in scope.
    pub fn olt_options(&self, stores: &StoreSet) -> Vec<(OltSelection, String)> {
        std::iter::once((OltSelection::All, "All".to_string()))
            .chain(
                scoped(stores)
                    .olts
                    .into_iter()
                    .map(|olt| (OltSelection::Only(olt.id), olt.name)),
            )
            .collect()
    }

    /// Detail lookup restricted to what the session may see.
    pub fn find(&self, stores: &StoreSet, id: &str) -> Option<Onu> {
        scoped(stores).onus.into_iter().find(|onu| onu.id == id)
    }

    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::stores::{Action, AuthAction, OnuAction};
    use crate::application::views::{StatusFilter, SummaryTile};

    fn signed_in(username: &str, password: &str) -> StoreSet {
        let mut stores = StoreSet::seeded();
        stores.reduce(Action::Auth(AuthAction::Login {
            username: username.into(),
            password: password.into(),
        }));
        stores
    }

    #[test]
    fn rows_are_memoized_until_inputs_change() {
        let mut stores = signed_in("admin", "admin123");
        let mut view = OnuListView::default();

        assert_eq!(view.rows(&stores).len(), 3);
        assert_eq!(view.rows(&stores).len(), 3);
        assert_eq!(view.computations(), 1);

        stores.reduce(Action::Onu(OnuAction::Delete("2".into())));
        assert_eq!(view.rows(&stores).len(), 2);
        assert_eq!(view.computations(), 2);

        view.set_filter(OnuFilter::by_status(StatusFilter::Offline));
        assert_eq!(view.rows(&stores).len(), 1);
        assert_eq!(view.computations(), 3);
    }

    #[test]
    fn noop_mutation_does_not_recompute() {
        let mut stores = signed_in("admin", "admin123");
        let mut view = DashboardView::default();
        view.summary(&stores);

        stores.reduce(Action::Onu(OnuAction::Delete("missing".into())));
        view.summary(&stores);

        assert_eq!(view.computations(), 1);
    }

    #[test]
    fn technician_cannot_reach_out_of_scope_onu() {
        let stores = signed_in("teknisi", "teknisi123");
        let view = OnuListView::default();

        assert!(view.find(&stores, "1").is_some());
        assert!(view.find(&stores, "3").is_none());
        let options: Vec<String> = view.olt_options(&stores).into_iter().map(|(_, n)| n).collect();
        assert_eq!(options, vec!["All".to_string(), "OLT-Central-01".to_string()]);
    }

    #[test]
    fn session_change_recomputes_summary() {
        let mut stores = signed_in("admin", "admin123");
        let mut view = DashboardView::default();
        assert_eq!(view.summary(&stores).total_onus, 3);

        stores.reduce(Action::Auth(AuthAction::Logout));
        stores.reduce(Action::Auth(AuthAction::Login {
            username: "teknisi".into(),
            password: "teknisi123".into(),
        }));
        assert_eq!(view.summary(&stores).total_onus, 2);
    }

    #[test]
    fn tile_navigation_prefilters_list() {
        let stores = signed_in("admin", "admin123");
        let mut view = OnuListView::default();
        view.open_with(&SummaryTile::OnuOffline.select());

        let ids: Vec<&str> = view.rows(&stores).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }
}
