//! Single-fire readiness latch.
//!
//! Fired exactly once, when the replica target is first met. The
//! bootstrap path blocks on `wait()`; `is_fired()` is the non-blocking
//! poll. Handles are cheap clones sharing one latch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// A one-shot gate signalling that the cluster is initialized.
#[derive(Debug, Clone)]
pub struct ReadyGate {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    fired: AtomicBool,
    tx: watch::Sender<bool>,
}

impl ReadyGate {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                fired: AtomicBool::new(false),
                tx,
            }),
        }
    }

    /// Fire the gate. Returns `true` only for the call that actually
    /// fired it; later calls are no-ops.
    pub fn fire(&self) -> bool {
        let first = self
            .inner
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if first {
            self.inner.tx.send_replace(true);
        }
        first
    }

    /// Non-blocking poll.
    pub fn is_fired(&self) -> bool {
        self.inner.fired.load(Ordering::Acquire)
    }

    /// Wait until the gate fires. Returns immediately if it already
    /// has. No timeout is imposed; callers needing bounded startup
    /// wrap this externally.
    pub async fn wait(&self) {
        let mut rx = self.inner.tx.subscribe();
        // The sender lives in `inner`, so wait_for cannot observe a
        // closed channel while `self` is alive.
        let _ = rx.wait_for(|fired| *fired).await;
    }
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let gate = ReadyGate::new();
        assert!(!gate.is_fired());

        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(gate.is_fired());
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_fired() {
        let gate = ReadyGate::new();
        gate.fire();
        gate.wait().await;
    }

    #[tokio::test]
    async fn wait_unblocks_on_fire() {
        let gate = ReadyGate::new();
        let waiter = gate.clone();

        let handle = tokio::spawn(async move { waiter.wait().await });

        assert!(!gate.is_fired());
        gate.fire();
        handle.await.unwrap();
    }

    #[test]
    fn clones_share_the_latch() {
        let gate = ReadyGate::new();
        let other = gate.clone();

        gate.fire();
        assert!(other.is_fired());
        assert!(!other.fire());
    }
}
