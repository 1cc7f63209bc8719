//! In-flight wait: ephemeral subscriptions sharing one result slot.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::bus::{Callback, SignalBus, SubscriptionKey};
use crate::error::SignalError;
use crate::signals::{AnySignal, SignalId};

use super::WaitOutcome;

/// Single-assignment result slot shared by a wait's delivery callbacks.
///
/// Taking the sender out under the lock gives first-write-wins: exactly one
/// concurrent delivery resolves the wait, the rest find the slot empty and
/// drop their signal for this wait only.
struct ResultSlot {
    tx: Mutex<Option<oneshot::Sender<AnySignal>>>,
}

impl ResultSlot {
    fn new() -> (Arc<Self>, oneshot::Receiver<AnySignal>) {
        let (tx, rx) = oneshot::channel();
        (
            Arc::new(Self {
                tx: Mutex::new(Some(tx)),
            }),
            rx,
        )
    }

    fn resolve(&self, signal: AnySignal) {
        if let Some(tx) = self.tx.lock().take() {
            // The receiver may already be gone (cancelled wait); the signal
            // is then dropped for this wait, which is the contract anyway.
            let _ = tx.send(signal);
        }
    }
}

/// One in-flight multi-type wait.
///
/// The slot lives only inside the bus-held callbacks: when the bus closes
/// and drops them, the sender goes with them and the receiver resolves the
/// wait as cancelled.
///
/// Teardown runs exactly once, whichever comes first: the deferred path at
/// the end of [`resolve`](Self::resolve), or [`Drop`] when the wait future
/// is discarded mid-flight (a losing `select!` arm, an aborted task).
pub(crate) struct PendingWait {
    bus: SignalBus,
    rx: oneshot::Receiver<AnySignal>,
    keys: Vec<SubscriptionKey>,
}

impl PendingWait {
    /// Registers one ephemeral callback per watched type.
    ///
    /// On a registration failure (closed bus, undeclared type) the
    /// already-made subscriptions are removed and the error propagates.
    pub(crate) fn register(bus: &SignalBus, ids: &[SignalId]) -> Result<Self, SignalError> {
        let (slot, rx) = ResultSlot::new();
        let mut keys = Vec::with_capacity(ids.len());

        for id in ids {
            let slot = Arc::clone(&slot);
            let callback: Callback = Arc::new(move |signal: &AnySignal| slot.resolve(signal.clone()));
            match bus.subscribe_erased(*id, callback) {
                Ok(key) => keys.push(key),
                Err(error) => {
                    for key in keys {
                        bus.unsubscribe(key);
                    }
                    return Err(error);
                }
            }
        }

        Ok(Self {
            bus: bus.clone(),
            rx,
            keys,
        })
    }

    /// Waits for the slot to fill, the token to cancel, or the deadline to
    /// pass, then tears down the ephemeral subscriptions exactly once.
    pub(crate) async fn resolve(
        mut self,
        cancel: Option<CancellationToken>,
        timeout: Option<Duration>,
    ) -> WaitOutcome {
        let cancelled = async {
            match &cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let deadline = async {
            match timeout {
                Some(duration) => tokio::time::sleep(duration).await,
                None => std::future::pending().await,
            }
        };

        let outcome = tokio::select! {
            result = &mut self.rx => match result {
                Ok(signal) => WaitOutcome::Signal(signal),
                // All senders dropped: the bus closed and cleared its tables.
                Err(_) => WaitOutcome::Cancelled,
            },
            _ = cancelled => WaitOutcome::Cancelled,
            _ = deadline => WaitOutcome::TimedOut,
        };

        // Teardown is deferred to the next scheduling point so it never runs
        // inside the delivery pass that resolved the wait.
        tokio::task::yield_now().await;
        for key in self.keys.drain(..) {
            self.bus.unsubscribe(key);
        }

        outcome
    }
}

impl Drop for PendingWait {
    fn drop(&mut self) {
        // A wait dropped before resolution must not leak its subscriptions.
        // After a completed `resolve` the keys are already drained and this
        // is a no-op.
        for key in self.keys.drain(..) {
            self.bus.unsubscribe(key);
        }
    }
}
