//! Derived view layer
//!
//! Pure functions over the stores. Nothing here mutates a roster.

mod criteria;
mod memo;
mod navigation;
mod scope;
mod screens;
mod summary;

pub use criteria::{ModeFilter, OltFilter, OltSelection, OnuFilter, StatusFilter};
pub use memo::Memo;
pub use navigation::{Capabilities, Navigation, Route, SummaryTile};
pub use scope::{locations, scope, Scope};
pub use screens::{DashboardView, OltListView, OnuListView, ViewKey};
pub use summary::DashboardSummary;
