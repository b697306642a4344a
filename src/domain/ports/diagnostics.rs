use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, Onu};

/// Where the analysis thinks the fiber towards an ONU is broken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEstimate {
    pub onu_id: String,
    /// Distance of the suspected break measured from the OLT
    pub distance_from_olt_km: f64,
    /// Model that produced the estimate
    pub model: String,
    pub summary: String,
}

/// Fiber fault analysis for a single subscriber line.
///
/// `model` is the analysis model selected in the settings. Implementations
/// never write to any store; the caller decides what to do with the estimate.
#[async_trait]
pub trait Diagnostics: Send + Sync {
    async fn estimate_fiber_break(&self, onu: &Onu, model: &str) -> DomainResult<BreakEstimate>;
}
