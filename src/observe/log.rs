//! # Simple logging sink for debugging and demos.
//!
//! [`LogWriter`] prints fired signals to stdout in a human-readable format,
//! prefixed with their taxonomy category.
//!
//! ## Output format
//! ```text
//! [command] ShowWindow { name: "Inventory" } seq=12
//! [event]   WindowShown { name: "Inventory" } seq=13
//! [signal]  Heartbeat seq=14
//! ```

use async_trait::async_trait;

use crate::signals::{AnySignal, SignalId};

use super::SignalSink;

type Filter = Box<dyn Fn(&SignalId) -> bool + Send + Sync>;

/// Simple stdout logging sink.
///
/// Enabled via the `logging` feature. Prints every fired signal with its
/// category, `Debug` fields, and fire sequence number.
///
/// Not intended for production use - implement a custom [`SignalSink`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter {
    filter: Option<Filter>,
}

impl LogWriter {
    /// A writer that logs every signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer that logs only signals whose type passes the predicate.
    ///
    /// ```rust
    /// use signalhub::{LogWriter, SignalCategory};
    ///
    /// let commands_only =
    ///     LogWriter::with_filter(|id| id.category() == SignalCategory::Command);
    /// ```
    pub fn with_filter(filter: impl Fn(&SignalId) -> bool + Send + Sync + 'static) -> Self {
        Self {
            filter: Some(Box::new(filter)),
        }
    }
}

#[async_trait]
impl SignalSink for LogWriter {
    async fn on_signal(&self, signal: &AnySignal) {
        let id = signal.id();
        if let Some(filter) = &self.filter {
            if !filter(&id) {
                return;
            }
        }
        println!(
            "[{}] {:?} seq={}",
            id.category().as_label(),
            signal,
            signal.seq()
        );
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
