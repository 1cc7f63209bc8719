//! # Async signal observers.
//!
//! This module provides the [`SignalSink`] trait and [`SinkSet`], the
//! fan-out that feeds every fired signal to sinks through per-sink bounded
//! queues, without blocking the delivery pass.
//!
//! ## Architecture
//! ```text
//! Signal flow:
//!   fire(signal) ──► SignalBus ──► tap (non-blocking try_send)
//!                                     │
//!                                     ├──► [queue S1] ─► worker S1 ─► sink1.on_signal()
//!                                     ├──► [queue S2] ─► worker S2 ─► sink2.on_signal()
//!                                     └──► [queue SN] ─► worker SN ─► sinkN.on_signal()
//! ```
//!
//! ## Sink types
//! - **Passive sinks** observe and react (logging, metrics, alerts).
//! - **Stateful sinks** maintain state from signals (counters, recorders).

mod set;
mod sink;

#[cfg(feature = "logging")]
mod log;

pub use set::SinkSet;
pub use sink::SignalSink;

#[cfg(feature = "logging")]
pub use log::LogWriter;
