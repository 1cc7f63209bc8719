//! # The type-indexed signal bus.
//!
//! [`SignalBus`] maps each signal type to an ordered list of subscriber
//! callbacks and delivers fired signals synchronously, one pass per signal,
//! in subscription order. Fires landing during a pass (re-entrant or from
//! another thread) are queued and drained by the active pass.
//!
//! [`BusBuilder`] fixes the configuration and the optional declaration list
//! at construction time.

mod builder;
mod core;
mod key;

pub use builder::BusBuilder;
pub use key::{SubscriptionKey, TapKey};
pub use self::core::SignalBus;

pub(crate) use self::core::Callback;
