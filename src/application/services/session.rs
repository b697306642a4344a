//! Login/logout round trips
//!
//! Each attempt shows a pending phase immediately, waits a fixed simulated
//! delay and then lets the caller apply the result. At most one attempt is
//! in flight; a second submission while one is pending is rejected.

use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    SigningIn,
    SigningOut,
}

impl SessionPhase {
    pub fn is_pending(&self) -> bool {
        !matches!(self, SessionPhase::Idle)
    }
}

pub struct SessionController {
    phase: watch::Sender<SessionPhase>,
    login_delay: Duration,
    logout_delay: Duration,
}

/// Holds the pending phase; dropping it returns the controller to `Idle`,
/// also when the awaiting future is cancelled.
#[must_use]
pub struct PendingAttempt<'a> {
    phase: &'a watch::Sender<SessionPhase>,
}

impl Drop for PendingAttempt<'_> {
    fn drop(&mut self) {
        self.phase.send_replace(SessionPhase::Idle);
    }
}

impl SessionController {
    pub fn new(config: &SimulationConfig) -> Self {
        let (phase, _) = watch::channel(SessionPhase::Idle);
        Self {
            phase,
            login_delay: config.login_delay(),
            logout_delay: config.logout_delay(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    /// For the spinner on the login button
    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.phase.subscribe()
    }

    /// Enter `phase` without waiting. Fails with `Busy` if another attempt
    /// is pending.
    pub fn begin(&self, phase: SessionPhase) -> DomainResult<PendingAttempt<'_>> {
        let claimed = self.phase.send_if_modified(|current| {
            if current.is_pending() {
                false
            } else {
                *current = phase;
                true
            }
        });

        if !claimed {
            debug!(requested = ?phase, current = ?self.phase(), "Session attempt ignored");
            return Err(DomainError::Busy(
                "A sign-in or sign-out is already in progress".into(),
            ));
        }
        Ok(PendingAttempt { phase: &self.phase })
    }

    /// Enter `phase` and wait out its simulated round trip.
    pub async fn round_trip(&self, phase: SessionPhase) -> DomainResult<PendingAttempt<'_>> {
        let attempt = self.begin(phase)?;
        let delay = match phase {
            SessionPhase::SigningOut => self.logout_delay,
            _ => self.login_delay,
        };
        tokio::time::sleep(delay).await;
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SessionController {
        SessionController::new(&SimulationConfig::default())
    }

    #[test]
    fn second_attempt_while_pending_is_busy() {
        let ctl = controller();
        let first = ctl.begin(SessionPhase::SigningIn).unwrap();
        assert_eq!(ctl.phase(), SessionPhase::SigningIn);

        let second = ctl.begin(SessionPhase::SigningIn);
        assert!(matches!(second, Err(DomainError::Busy(_))));
        assert!(matches!(
            ctl.begin(SessionPhase::SigningOut),
            Err(DomainError::Busy(_))
        ));

        drop(first);
        assert_eq!(ctl.phase(), SessionPhase::Idle);
        assert!(ctl.begin(SessionPhase::SigningOut).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn round_trip_waits_for_configured_delay() {
        let ctl = controller();
        let mut phases = ctl.subscribe();

        let started = tokio::time::Instant::now();
        let attempt = ctl.round_trip(SessionPhase::SigningIn).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(500));
        assert_eq!(*phases.borrow_and_update(), SessionPhase::SigningIn);

        drop(attempt);
        assert_eq!(*phases.borrow_and_update(), SessionPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_round_trip_releases_the_guard() {
        let ctl = controller();
        let cancelled = tokio::time::timeout(
            Duration::from_millis(100),
            ctl.round_trip(SessionPhase::SigningOut),
        )
        .await;

        assert!(cancelled.is_err());
        assert_eq!(ctl.phase(), SessionPhase::Idle);
    }
}
