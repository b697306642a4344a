//! Application services

mod diagnostics;
mod session;
mod telemetry;

pub use diagnostics::{AnalysisHandle, AnalysisState, MockDiagnostics};
pub use session::{PendingAttempt, SessionController, SessionPhase};
pub use telemetry::MockDeviceTelemetry;
