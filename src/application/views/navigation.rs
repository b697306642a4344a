//! Screen routing, role capabilities and dashboard cross-navigation

use serde::{Deserialize, Serialize};

use super::{ModeFilter, OnuFilter, StatusFilter};
use crate::domain::{User, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Dashboard,
    OltList,
    OnuList,
    Users,
    Settings,
}

impl Route {
    /// Where a request for `requested` actually lands.
    ///
    /// Without a session everything leads to the login screen; with one,
    /// the login screen forwards to the dashboard and admin-only screens
    /// fall back to the dashboard for technicians.
    pub fn guard(user: Option<&User>, requested: Route) -> Route {
        let Some(user) = user else {
            return Route::Login;
        };
        let caps = Capabilities::for_role(user.role);
        match requested {
            Route::Login => Route::Dashboard,
            Route::Users if !caps.manage_users => Route::Dashboard,
            Route::Settings if !caps.edit_settings => Route::Dashboard,
            other => other,
        }
    }
}

/// What a role may do from the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub manage_olts: bool,
    pub delete_onus: bool,
    pub configure_onus: bool,
    pub run_diagnostics: bool,
    pub manage_users: bool,
    pub edit_settings: bool,
}

impl Capabilities {
    pub fn for_role(role: UserRole) -> Self {
        let admin = role == UserRole::SuperAdmin;
        Self {
            manage_olts: admin,
            delete_onus: admin,
            configure_onus: true,
            run_diagnostics: true,
            manage_users: admin,
            edit_settings: admin,
        }
    }
}

/// Dashboard tiles that can be tapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryTile {
    TotalOlts,
    TotalOnus,
    OnuOnline,
    OnuOffline,
    OnuBridge,
    OnuPppoe,
    TotalUsers,
}

/// Result of selecting a tile: the screen to open and, for ONU tiles, the
/// filter it opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub onu_filter: Option<OnuFilter>,
}

impl SummaryTile {
    /// Status tiles reset mode, mode tiles reset status, and both reset the
    /// OLT selection, so the list matches the number on the tile.
    pub fn select(self) -> Navigation {
        let onu = |filter: OnuFilter| Navigation {
            route: Route::OnuList,
            onu_filter: Some(filter),
        };
        match self {
            SummaryTile::TotalOlts => Navigation {
                route: Route::OltList,
                onu_filter: None,
            },
            SummaryTile::TotalUsers => Navigation {
                route: Route::Users,
                onu_filter: None,
            },
            SummaryTile::TotalOnus => onu(OnuFilter::by_status(StatusFilter::All)),
            SummaryTile::OnuOnline => onu(OnuFilter::by_status(StatusFilter::Online)),
            SummaryTile::OnuOffline => onu(OnuFilter::by_status(StatusFilter::Offline)),
            SummaryTile::OnuBridge => onu(OnuFilter::by_mode(ModeFilter::Bridge)),
            SummaryTile::OnuPppoe => onu(OnuFilter::by_mode(ModeFilter::Pppoe)),
        }
    }
}
