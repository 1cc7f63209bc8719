//! # Signal types, taxonomy, and the erased fired-signal value.
//!
//! A signal is any plain value implementing [`Signal`]: cloneable, printable,
//! and thread-safe. The trait carries the type's [`SignalCategory`] as an
//! associated constant, which makes the Command/Event markers mutually
//! exclusive by construction.
//!
//! [`SignalId`] is the stable type token used to key the bus's dispatch
//! table; [`AnySignal`] is the type-erased instance travelling through taps
//! and waits; [`SignalSet`] lifts one to four signal types into a watch set
//! for [`SignalBus::wait`](crate::SignalBus::wait).

mod any;
mod id;
mod set;
mod signal;

pub use any::AnySignal;
pub use id::SignalId;
pub use set::SignalSet;
pub use signal::{classify, Signal, SignalCategory};
