//! Landing view aggregates

use serde::Serialize;

use super::Scope;
use crate::domain::{DeviceStatus, OnuMode};

/// Counts shown on the dashboard tiles.
///
/// Device counts come from the scoped rosters, so a technician never sees
/// numbers for sites outside their own. The user count covers the whole
/// roster; users are not location-scoped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_olts: usize,
    pub total_onus: usize,
    pub online_onus: usize,
    pub offline_onus: usize,
    pub bridge_onus: usize,
    pub pppoe_onus: usize,
    pub total_users: usize,
}

impl DashboardSummary {
    pub fn compute(scope: &Scope, total_users: usize) -> Self {
        let onus = &scope.onus;
        Self {
            total_olts: scope.olts.len(),
            total_onus: onus.len(),
            online_onus: onus.iter().filter(|o| o.status == DeviceStatus::Online).count(),
            offline_onus: onus.iter().filter(|o| o.status == DeviceStatus::Offline).count(),
            bridge_onus: onus.iter().filter(|o| o.mode == OnuMode::Bridge).count(),
            pppoe_onus: onus.iter().filter(|o| o.mode == OnuMode::Pppoe).count(),
            total_users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::views::scope;
    use crate::domain::seed;

    #[test]
    fn admin_summary_covers_everything() {
        let users = seed::users();
        let visible = scope(Some(&users[0]), &seed::olts(), &seed::onus());
        let summary = DashboardSummary::compute(&visible, users.len());

        assert_eq!(
            summary,
            DashboardSummary {
                total_olts: 2,
                total_onus: 3,
                online_onus: 2,
                offline_onus: 1,
                bridge_onus: 1,
                pppoe_onus: 2,
                total_users: 2,
            }
        );
    }

    #[test]
    fn technician_summary_counts_only_scoped_devices() {
        let users = seed::users();
        let visible = scope(Some(&users[1]), &seed::olts(), &seed::onus());
        let summary = DashboardSummary::compute(&visible, users.len());

        assert_eq!(summary.total_olts, 1);
        assert_eq!(summary.total_onus, 2);
        assert_eq!(summary.offline_onus, 0);
        assert_eq!(summary.pppoe_onus, 1);
        assert_eq!(summary.total_users, 2);
    }
}
