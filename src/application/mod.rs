//! Application layer: stores, derived views, forms and the context object

pub mod app;
pub mod forms;
pub mod services;
pub mod snapshot;
pub mod stores;
pub mod views;

pub use app::App;
pub use services::{AnalysisHandle, AnalysisState, SessionPhase};
pub use snapshot::Rehydration;
pub use stores::{Action, StoreSet};
