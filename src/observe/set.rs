//! Non-blocking fan-out from a bus tap to sink workers.

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::bus::{SignalBus, TapKey};
use crate::error::SignalError;
use crate::signals::AnySignal;

use super::SignalSink;

/// Composite fan-out: one bus tap feeding per-sink bounded queues and
/// worker tasks.
///
/// ## What it guarantees
/// - The tap returns immediately; the delivery pass never awaits a sink.
/// - Per-sink FIFO (queue order).
/// - Panics inside sinks are caught and logged (isolation).
///
/// ## What it does **not** guarantee
/// - No global ordering across different sinks (use
///   [`AnySignal::seq`](crate::AnySignal::seq) to restore fire order).
/// - No retries on queue overflow; the signal is dropped for that sink.
pub struct SinkSet {
    bus: SignalBus,
    tap: TapKey,
    workers: Vec<JoinHandle<()>>,
}

impl SinkSet {
    /// Spawns one worker per sink and taps the bus.
    ///
    /// Must run inside a tokio runtime. Fails only if the bus is closed.
    pub fn attach(bus: &SignalBus, sinks: Vec<Arc<dyn SignalSink>>) -> Result<Self, SignalError> {
        let mut senders = Vec::with_capacity(sinks.len());
        let mut workers = Vec::with_capacity(sinks.len());

        for sink in sinks {
            let capacity = sink.queue_capacity().max(1);
            let name = sink.name();
            let (tx, mut rx) = mpsc::channel::<AnySignal>(capacity);

            let handle = tokio::spawn(async move {
                while let Some(signal) = rx.recv().await {
                    let fut = sink.on_signal(&signal);
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await
                    {
                        eprintln!("[signalhub] sink '{}' panicked: {panic_err:?}", sink.name());
                    }
                }
            });

            senders.push((name, tx));
            workers.push(handle);
        }

        // The senders live inside the tap closure; untapping drops them,
        // which closes the queues and lets the workers drain and exit.
        let tap = bus.tap(move |signal| {
            for (name, tx) in &senders {
                match tx.try_send(signal.clone()) {
                    Ok(()) => {}
                    Err(mpsc::error::TrySendError::Full(_)) => {
                        eprintln!("[signalhub] sink '{name}' dropped signal: queue full");
                    }
                    Err(mpsc::error::TrySendError::Closed(_)) => {
                        eprintln!("[signalhub] sink '{name}' dropped signal: worker closed");
                    }
                }
            }
        })?;

        Ok(Self {
            bus: bus.clone(),
            tap,
            workers,
        })
    }

    /// Graceful shutdown: detach from the bus, drain the queues, and await
    /// worker completion.
    pub async fn shutdown(self) {
        self.bus.untap(self.tap);
        for handle in self.workers {
            let _ = handle.await;
        }
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// True if there are no sinks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}
