//! Error types used by the signal bus and handler registration.
//!
//! All fallible bus operations return [`SignalError`]. Registration-time
//! failures are local: a rejected handler leaves every other handler of its
//! owner untouched. [`SignalError::BusClosed`] is fatal to the calling
//! operation and is surfaced immediately, never retried.
//!
//! Two conditions from the delivery protocol are deliberately *not* errors:
//!
//! - Unsubscribing a key that is not registered is a silent no-op.
//! - A wait whose result slot is already filled drops later deliveries;
//!   first-write-wins semantics make double resolution unrepresentable.

use thiserror::Error;

/// # Errors produced by the signal bus.
///
/// These represent failures of bus operations and handler registration.
/// Pending-wait cancellation is **not** an error; it is a first-class
/// [`WaitOutcome`](crate::WaitOutcome) variant.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SignalError {
    /// The bus was closed; no further subscriptions, fires, or waits are possible.
    #[error("signal bus is closed")]
    BusClosed,

    /// The signal type was not declared on a bus that requires declarations.
    #[error("signal type `{name}` is not declared on this bus")]
    NotDeclared {
        /// Full type name of the undeclared signal.
        name: &'static str,
    },

    /// A command signal already has a consumer and the bus enforces
    /// single-consumer semantics for [`SignalCategory::Command`](crate::SignalCategory).
    #[error("command signal `{name}` already has a consumer")]
    CommandConsumerConflict {
        /// Full type name of the contested command signal.
        name: &'static str,
    },

    /// [`SignalHandlers::register`](crate::SignalHandlers::register)
    /// rejected a handler. Wraps the bus-side refusal with the signal type
    /// the handler targeted.
    #[error("invalid handler for `{name}`: {reason}")]
    InvalidHandler {
        /// Full type name of the signal the handler targeted.
        name: &'static str,
        /// Human-readable rejection reason.
        reason: String,
    },
}

impl SignalError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signalhub::SignalError;
    ///
    /// assert_eq!(SignalError::BusClosed.as_label(), "bus_closed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalError::BusClosed => "bus_closed",
            SignalError::NotDeclared { .. } => "not_declared",
            SignalError::CommandConsumerConflict { .. } => "command_consumer_conflict",
            SignalError::InvalidHandler { .. } => "invalid_handler",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SignalError::BusClosed => "bus closed".to_string(),
            SignalError::NotDeclared { name } => format!("not declared: {name}"),
            SignalError::CommandConsumerConflict { name } => {
                format!("command already consumed: {name}")
            }
            SignalError::InvalidHandler { name, reason } => {
                format!("invalid handler for {name}: {reason}")
            }
        }
    }

    /// Indicates whether retrying the operation on the same bus can succeed.
    ///
    /// Returns `false` only for [`SignalError::BusClosed`]; a closed bus
    /// never reopens.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SignalError::BusClosed)
    }
}
