//! Awaitable wait over a set of signal types.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::bus::SignalBus;
use crate::error::SignalError;
use crate::signals::SignalId;

use super::{PendingWait, WaitOutcome};

/// A configured wait, created by [`SignalBus::wait`](crate::SignalBus::wait)
/// or [`SignalBus::wait_for`](crate::SignalBus::wait_for).
///
/// Awaiting the builder registers the ephemeral subscriptions and suspends
/// until the first watched signal fires, the cancellation token trips, or
/// the timeout passes. Without a timeout or token, a wait for a signal that
/// never fires suspends forever; long-lived callers should set at least one
/// of the two.
///
/// ## Example
/// ```rust,no_run
/// use std::time::Duration;
/// use signalhub::{Signal, SignalBus, WaitOutcome};
///
/// #[derive(Clone, Debug)]
/// struct Loaded;
/// impl Signal for Loaded {}
///
/// # async fn demo(bus: &SignalBus) -> Result<(), signalhub::SignalError> {
/// let outcome = bus
///     .wait_for::<Loaded>()
///     .with_timeout(Duration::from_secs(5))
///     .await?;
///
/// if let WaitOutcome::TimedOut = outcome {
///     eprintln!("level never loaded");
/// }
/// # Ok(())
/// # }
/// ```
pub struct WaitBuilder {
    bus: SignalBus,
    ids: Vec<SignalId>,
    cancel: Option<CancellationToken>,
    timeout: Option<Duration>,
}

impl WaitBuilder {
    pub(crate) fn new(bus: SignalBus, ids: Vec<SignalId>) -> Self {
        Self {
            bus,
            ids,
            cancel: None,
            timeout: None,
        }
    }

    /// Resolves the wait as [`WaitOutcome::Cancelled`] when the token trips.
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Resolves the wait as [`WaitOutcome::TimedOut`] after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registers the subscriptions and suspends until resolution.
    ///
    /// Errors only if registration itself fails (closed bus, undeclared
    /// type); everything after that is expressed as a [`WaitOutcome`].
    pub async fn resolve(self) -> Result<WaitOutcome, SignalError> {
        let pending = PendingWait::register(&self.bus, &self.ids)?;
        Ok(pending.resolve(self.cancel, self.timeout).await)
    }
}

impl IntoFuture for WaitBuilder {
    type Output = Result<WaitOutcome, SignalError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.resolve())
    }
}
