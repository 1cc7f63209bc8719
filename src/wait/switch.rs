//! Switch-style wait: one continuation per watched type.

use std::time::Duration;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::bus::SignalBus;
use crate::error::SignalError;
use crate::signals::{Signal, SignalId};

use super::{PendingWait, WaitOutcome};

type Continuation = Box<dyn FnOnce(&crate::signals::AnySignal) -> BoxFuture<'static, ()> + Send>;

/// A wait that dispatches the resolved signal to a per-type continuation.
///
/// At most one continuation runs per wait: the one registered for the type
/// of the first watched signal delivered. A cancelled or timed-out wait runs
/// none. When the same type is cased twice, the first case wins.
///
/// ## Example
/// ```rust,no_run
/// use signalhub::{Signal, SignalBus};
///
/// #[derive(Clone, Debug)]
/// struct Confirmed;
/// impl Signal for Confirmed {}
///
/// #[derive(Clone, Debug)]
/// struct Dismissed;
/// impl Signal for Dismissed {}
///
/// # async fn demo(bus: &SignalBus) -> Result<(), signalhub::SignalError> {
/// bus.wait_switch()
///     .case(|_: Confirmed| async move { println!("confirmed") })
///     .case(|_: Dismissed| async move { println!("dismissed") })
///     .run()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct WaitSwitch {
    bus: SignalBus,
    cases: Vec<(SignalId, Continuation)>,
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl WaitSwitch {
    pub(crate) fn new(bus: SignalBus) -> Self {
        Self {
            bus,
            cases: Vec::new(),
            cancel: None,
            timeout: None,
        }
    }

    /// Adds signal type `S` to the watch set with its continuation.
    pub fn case<S, F, Fut>(mut self, run: F) -> Self
    where
        S: Signal,
        F: FnOnce(S) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let continuation: Continuation = Box::new(move |any| {
            // The dispatch is keyed by the signal's type id, so the clone-out
            // only misses if the case was never matched.
            match any.to_owned::<S>() {
                Some(signal) => Box::pin(run(signal)),
                None => Box::pin(async {}),
            }
        });
        self.cases.push((SignalId::of::<S>(), continuation));
        self
    }

    /// Resolves the wait as cancelled when the token trips.
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Resolves the wait as timed out after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Waits, runs the matching continuation (if any), and returns the
    /// outcome.
    pub async fn run(self) -> Result<WaitOutcome, SignalError> {
        let ids: Vec<SignalId> = self.cases.iter().map(|(id, _)| *id).collect();
        let pending = PendingWait::register(&self.bus, &ids)?;
        let outcome = pending.resolve(self.cancel, self.timeout).await;

        if let WaitOutcome::Signal(signal) = &outcome {
            let resolved = signal.id();
            if let Some((_, continuation)) =
                self.cases.into_iter().find(|(id, _)| *id == resolved)
            {
                continuation(signal).await;
            }
        }

        Ok(outcome)
    }
}
