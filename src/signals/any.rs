//! Type-erased fired signal.
//!
//! [`AnySignal`] is what travels through taps and pending waits: the fired
//! value behind an `Arc`, its [`SignalId`], a global monotonic sequence
//! number, and the wall-clock fire timestamp.
//!
//! ## Ordering guarantees
//! Each fired signal gets a globally unique sequence number (`seq`) that
//! increases monotonically. Use `seq` to restore the exact fire order when
//! signals are observed out of order (e.g. across sink queues).

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use super::{Signal, SignalCategory, SignalId};

/// Global sequence counter for fire ordering.
static SIGNAL_SEQ: AtomicU64 = AtomicU64::new(0);

/// Object-safe view of a stored signal value.
trait ErasedValue: Send + Sync {
    fn as_any(&self) -> &(dyn Any + Send + Sync);
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<S: Signal> ErasedValue for S {
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        self
    }

    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A fired signal with its type erased.
///
/// Cheap to clone (the value sits behind an `Arc`); every subscriber of a
/// fire observes the same value, nobody owns it exclusively.
#[derive(Clone)]
pub struct AnySignal {
    value: Arc<dyn ErasedValue>,
    id: SignalId,
    seq: u64,
    at: SystemTime,
}

impl AnySignal {
    /// Erases a signal value, stamping it with the next global sequence
    /// number and the current wall-clock time.
    pub fn new<S: Signal>(signal: S) -> Self {
        Self {
            value: Arc::new(signal),
            id: SignalId::of::<S>(),
            seq: SIGNAL_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
        }
    }

    /// Type token of the carried signal.
    pub fn id(&self) -> SignalId {
        self.id
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.id.type_id()
    }

    /// Full type name of the carried signal.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Declared intent of the carried signal's type.
    pub fn category(&self) -> SignalCategory {
        self.id.category()
    }

    /// Globally unique, monotonically increasing fire sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Wall-clock timestamp of the fire.
    pub fn at(&self) -> SystemTime {
        self.at
    }

    /// True if the carried signal is of type `S`.
    pub fn is<S: Signal>(&self) -> bool {
        self.id == SignalId::of::<S>()
    }

    /// Borrows the carried signal as `S`, if it is one.
    pub fn downcast_ref<S: Signal>(&self) -> Option<&S> {
        self.value.as_any().downcast_ref::<S>()
    }

    /// Clones the carried signal out as an owned `S`, if it is one.
    pub fn to_owned<S: Signal>(&self) -> Option<S> {
        self.downcast_ref::<S>().cloned()
    }
}

impl fmt::Debug for AnySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_value(f)
    }
}
