//! # Signal sink trait.
//!
//! [`SignalSink`] is the extension point for plugging async observers onto a
//! bus. Each sink gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-sink bounded queue** (capacity via [`SignalSink::queue_capacity`])
//! - **Panic isolation** (a panicking sink never disturbs delivery or other
//!   sinks)
//!
//! ## Rules
//! - A slow sink only affects its own queue.
//! - Queue overflow drops the signal **for this sink only**; other sinks and
//!   the delivery pass are unaffected.
//! - Signals are processed sequentially (FIFO) per sink.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use signalhub::{AnySignal, SignalCategory, SignalSink};
//!
//! struct CommandCounter;
//!
//! #[async_trait]
//! impl SignalSink for CommandCounter {
//!     async fn on_signal(&self, signal: &AnySignal) {
//!         if signal.category() == SignalCategory::Command {
//!             // export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "command-counter" }
//!     fn queue_capacity(&self) -> usize { 2048 }
//! }
//! ```

use async_trait::async_trait;

use crate::signals::AnySignal;

/// Async observer of fired signals.
///
/// Attached to a bus through [`SinkSet::attach`](super::SinkSet::attach).
/// Runs in isolation: a bounded queue buffers signals, a dedicated worker
/// delivers them in FIFO order, and panics are caught and reported.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait SignalSink: Send + Sync + 'static {
    /// Processes one fired signal.
    ///
    /// Called from the sink's worker task, never from the delivery pass.
    async fn on_signal(&self, signal: &AnySignal);

    /// Name used in drop/panic diagnostics.
    ///
    /// Prefer short, descriptive names (e.g., "log", "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred queue capacity for this sink; clamped to a minimum of 1.
    ///
    /// Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
