//! # Awaitable signals: wait for the first of several types.
//!
//! A wait registers one ephemeral callback per watched type, all sharing a
//! single-assignment result slot. The first delivery among them wins; later
//! deliveries are dropped for that wait but still reach every other
//! subscriber. After the outcome is decided, the wait yields to the
//! scheduler once and then removes its callbacks, so teardown never runs
//! inside a delivery pass.
//!
//! Entry points: [`SignalBus::wait`](crate::SignalBus::wait),
//! [`SignalBus::wait_for`](crate::SignalBus::wait_for), and
//! [`SignalBus::wait_switch`](crate::SignalBus::wait_switch).

mod builder;
mod outcome;
mod pending;
mod switch;

pub use builder::WaitBuilder;
pub use outcome::WaitOutcome;
pub use switch::WaitSwitch;

pub(crate) use pending::PendingWait;
