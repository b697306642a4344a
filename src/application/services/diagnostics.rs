//! Simulated fiber-break analysis and its cancellable handle

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::domain::ports::{BreakEstimate, Diagnostics};
use crate::domain::{DomainError, DomainResult, Onu};

/// Share of the line length the simulated break point can fall on
const BREAK_RANGE: f64 = 0.9;

/// Stand-in for a real analysis backend: waits, then picks a random point
/// along the fiber.
#[derive(Debug, Clone)]
pub struct MockDiagnostics {
    delay: Duration,
}

impl MockDiagnostics {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Diagnostics for MockDiagnostics {
    async fn estimate_fiber_break(&self, onu: &Onu, model: &str) -> DomainResult<BreakEstimate> {
        let distance = onu.distance_km().ok_or_else(|| {
            DomainError::Validation(format!("Unreadable ONU distance '{}'", onu.distance))
        })?;

        tokio::time::sleep(self.delay).await;

        let upper = distance * BREAK_RANGE;
        let break_km = if upper > 0.0 {
            rand::thread_rng().gen_range(0.0..upper)
        } else {
            0.0
        };

        Ok(BreakEstimate {
            onu_id: onu.id.clone(),
            distance_from_olt_km: break_km,
            model: model.to_string(),
            summary: format!(
                "Analisis AI memperkirakan kabel fiber optik putus pada jarak sekitar {:.2} km dari OLT.",
                break_km
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisState {
    Pending,
    Ready(BreakEstimate),
    Failed(String),
}

impl AnalysisState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisState::Pending)
    }
}

/// One running analysis, owned by the view that started it.
///
/// Dismissing the view (or dropping the handle) aborts the task; whatever
/// it would have produced is discarded.
pub struct AnalysisHandle {
    onu_id: String,
    state: watch::Receiver<AnalysisState>,
    task: JoinHandle<()>,
}

impl AnalysisHandle {
    pub fn spawn(diagnostics: Arc<dyn Diagnostics>, onu: Onu, model: String) -> Self {
        let (tx, rx) = watch::channel(AnalysisState::Pending);
        let onu_id = onu.id.clone();

        let task = tokio::spawn(async move {
            let outcome = match diagnostics.estimate_fiber_break(&onu, &model).await {
                Ok(estimate) => {
                    info!(
                        onu_id = %estimate.onu_id,
                        break_km = estimate.distance_from_olt_km,
                        model = %estimate.model,
                        "Fiber analysis finished"
                    );
                    AnalysisState::Ready(estimate)
                }
                Err(e) => AnalysisState::Failed(e.user_message()),
            };
            tx.send_replace(outcome);
        });

        Self {
            onu_id,
            state: rx,
            task,
        }
    }

    pub fn onu_id(&self) -> &str {
        &self.onu_id
    }

    pub fn state(&self) -> AnalysisState {
        self.state.borrow().clone()
    }

    /// Wait for the result. Returns `None` if the task is gone without
    /// producing one.
    pub async fn finished(&mut self) -> Option<AnalysisState> {
        self.state
            .wait_for(|s| !s.is_pending())
            .await
            .ok()
            .map(|s| s.clone())
    }

    pub fn dismiss(self) {
        // Drop does the work
    }
}

impl Drop for AnalysisHandle {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            debug!(onu_id = %self.onu_id, "Analysis dismissed before completion");
        }
        self.task.abort();
    }
}
