//! # signalhub
//!
//! **Signalhub** is a typed publish/subscribe signal bus for event-driven
//! applications (game loops, UI runtimes, simulation cores).
//!
//! It provides three building blocks on top of one type-indexed bus:
//! declarative handler sets bound to an owner's lifetime, an awaitable
//! wait-for-one-of-N signal primitive, and a Command/Event taxonomy for
//! observability collaborators.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ┌────────────────┐    ┌────────────────┐    ┌──────────────────┐
//!   │ SignalHandlers │    │ SignalHandlers │    │ WaitBuilder /    │
//!   │  (owner #1)    │    │  (owner #2)    │    │ WaitSwitch       │
//!   └───────┬────────┘    └───────┬────────┘    └────────┬─────────┘
//!           │ subscribe_all()     │                      │ ephemeral
//!           ▼                     ▼                      ▼ subscriptions
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  SignalBus (type-indexed dispatch table)                            │
//! │  - per-type ordered subscriber lists (first-subscribed-first-called)│
//! │  - taps (every fired signal, for sinks/loggers)                     │
//! │  - re-entrant fire queue (drained after the current pass)           │
//! └───────┬──────────────────────────────────────────────────┬──────────┘
//!         │ fire(signal)                                     │ tap
//!         ▼                                                  ▼
//!   typed callbacks, one synchronous             ┌───────────────────┐
//!   delivery pass in subscription order          │  SinkSet          │
//!                                                │  per-sink queue + │
//!                                                │  worker task      │
//!                                                └───┬───────────┬───┘
//!                                                    ▼           ▼
//!                                                LogWriter    custom sinks
//! ```
//!
//! ### Delivery rules
//! - Firing a signal runs **one synchronous pass** over a snapshot of the
//!   subscriber list, in subscription order. Subscribing or unsubscribing
//!   during a pass mutates only the canonical list, never the snapshot.
//! - A handler that fires another signal does **not** re-enter delivery:
//!   the new signal is queued and delivered after the current pass.
//! - Unsubscribing an unknown key is a silent no-op.
//! - A closed bus fails every operation with [`SignalError::BusClosed`].
//!
//! ## Features
//! | Area           | Description                                              | Key types                           |
//! |----------------|----------------------------------------------------------|-------------------------------------|
//! | **Bus**        | Type-indexed publish/subscribe with queued re-entry.     | [`SignalBus`], [`SubscriptionKey`]  |
//! | **Handlers**   | Owner-scoped handler sets with idempotent toggling.      | [`SignalHandlers`]                  |
//! | **Waits**      | Await the first of up to four signal types.              | [`WaitOutcome`], [`WaitSwitch`]     |
//! | **Taxonomy**   | Command / Event / Unspecified classification.            | [`Signal`], [`SignalCategory`]      |
//! | **Sinks**      | Async observers with bounded queues and panic isolation. | [`SignalSink`], [`SinkSet`]         |
//! | **Errors**     | Typed errors for bus and registration failures.          | [`SignalError`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] sink _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use signalhub::{Signal, SignalBus, SignalCategory, SignalHandlers};
//!
//! #[derive(Clone, Debug)]
//! struct ShowWindow { name: &'static str }
//! impl Signal for ShowWindow {
//!     const CATEGORY: SignalCategory = SignalCategory::Command;
//! }
//!
//! # fn main() -> Result<(), signalhub::SignalError> {
//! let bus = SignalBus::new();
//!
//! let mut handlers = SignalHandlers::new(bus.clone());
//! handlers.register(|signal: &ShowWindow| {
//!     println!("showing window: {}", signal.name);
//! })?;
//!
//! bus.fire(ShowWindow { name: "Inventory" })?;
//!
//! handlers.unsubscribe_all();
//! bus.fire(ShowWindow { name: "Inventory" })?; // delivered to nobody
//! # Ok(())
//! # }
//! ```
//!
//! Awaiting signals:
//! ```rust,no_run
//! use signalhub::{Signal, SignalBus, WaitOutcome};
//!
//! #[derive(Clone, Debug)]
//! struct Saved;
//! impl Signal for Saved {}
//!
//! #[derive(Clone, Debug)]
//! struct Aborted;
//! impl Signal for Aborted {}
//!
//! # async fn demo(bus: SignalBus) -> Result<(), signalhub::SignalError> {
//! match bus.wait::<(Saved, Aborted)>().await? {
//!     WaitOutcome::Signal(signal) if signal.is::<Saved>() => { /* saved */ }
//!     WaitOutcome::Signal(_) => { /* aborted */ }
//!     WaitOutcome::Cancelled | WaitOutcome::TimedOut => { /* gave up */ }
//! }
//! # Ok(())
//! # }
//! ```

mod bus;
mod config;
mod error;
mod handlers;
mod observe;
mod signals;
mod wait;

// ---- Public re-exports ----

pub use bus::{BusBuilder, SignalBus, SubscriptionKey, TapKey};
pub use config::BusConfig;
pub use error::SignalError;
pub use handlers::SignalHandlers;
pub use observe::{SignalSink, SinkSet};
pub use signals::{classify, AnySignal, Signal, SignalCategory, SignalId, SignalSet};
pub use wait::{WaitBuilder, WaitOutcome, WaitSwitch};

// Optional: expose a simple built-in logging sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observe::LogWriter;
