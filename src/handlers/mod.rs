//! # Owner-scoped handler sets.
//!
//! [`SignalHandlers`] collects an owner's signal handlers and toggles them
//! on and off the bus as one unit. Dropping the set unsubscribes everything,
//! so no callback outlives its owner.

mod binding;
mod set;

pub use set::SignalHandlers;

pub(crate) use binding::HandlerBinding;
