//! Launch gate: nothing renders before rehydration has finished.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

#[derive(Debug)]
pub struct BootGate {
    started: AtomicBool,
    ready: watch::Sender<bool>,
}

impl BootGate {
    pub fn new() -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            started: AtomicBool::new(false),
            ready,
        }
    }

    /// Claim the one rehydration slot of this process. Returns false if it
    /// was already claimed.
    pub fn try_begin(&self) -> bool {
        self.started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn open(&self) {
        self.ready.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Resolves once [`open`](Self::open) has been called.
    pub async fn wait_ready(&self) {
        let mut rx = self.ready.subscribe();
        // The sender lives in `self`, so the channel cannot close under us
        let _ = rx.wait_for(|ready| *ready).await;
    }
}

impl Default for BootGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn only_one_caller_begins() {
        let gate = BootGate::new();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
    }

    #[tokio::test]
    async fn waiters_are_released_on_open() {
        let gate = Arc::new(BootGate::new());
        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait_ready().await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());
        assert!(!gate.is_ready());

        gate.open();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
        assert!(gate.is_ready());
    }

    #[tokio::test]
    async fn wait_after_open_returns_immediately() {
        let gate = BootGate::new();
        gate.open();
        gate.wait_ready().await;
    }
}
