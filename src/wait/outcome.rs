//! Result of a wait.

use crate::signals::{AnySignal, Signal};

/// How a wait ended.
///
/// Cancellation and timeout are first-class outcomes, not errors: callers
/// distinguish "signal received" from "gave up" without control-flow
/// exceptions. Bus-side failures (closed bus, undeclared type) surface as
/// [`SignalError`](crate::SignalError) before the wait starts.
#[derive(Debug)]
pub enum WaitOutcome {
    /// The first watched signal that was delivered.
    Signal(AnySignal),
    /// The wait's cancellation token fired, or the bus closed mid-wait.
    Cancelled,
    /// The wait's deadline passed before any watched signal fired.
    TimedOut,
}

impl WaitOutcome {
    /// True if a signal was received.
    pub fn is_signal(&self) -> bool {
        matches!(self, WaitOutcome::Signal(_))
    }

    /// The received signal, if any.
    pub fn signal(&self) -> Option<&AnySignal> {
        match self {
            WaitOutcome::Signal(signal) => Some(signal),
            _ => None,
        }
    }

    /// Consumes the outcome into the received signal, if any.
    pub fn into_signal(self) -> Option<AnySignal> {
        match self {
            WaitOutcome::Signal(signal) => Some(signal),
            _ => None,
        }
    }

    /// The received signal cloned out as `S`, if the outcome is a signal of
    /// that type.
    pub fn to_owned<S: Signal>(&self) -> Option<S> {
        self.signal().and_then(AnySignal::to_owned)
    }
}
