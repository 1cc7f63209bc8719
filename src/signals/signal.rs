//! # The `Signal` trait and the Command/Event taxonomy.
//!
//! Signals are immutable values broadcast through the bus. Every subscriber
//! of a fired signal sees the same value by shared reference; no subscriber
//! may assume exclusive ownership.
//!
//! The taxonomy expresses *intent*, not mechanism:
//! - **Command**: processed by exactly one consumer.
//! - **Event**: processed by an arbitrary number of consumers.
//! - **Unspecified**: no declared intent (the default).
//!
//! A type states its category once, via the associated constant. Because the
//! category is a single enum value, a type can never be both a command and an
//! event.
//!
//! ## Example
//! ```rust
//! use signalhub::{classify, Signal, SignalCategory};
//!
//! #[derive(Clone, Debug)]
//! struct SaveGame { slot: u8 }
//! impl Signal for SaveGame {
//!     const CATEGORY: SignalCategory = SignalCategory::Command;
//! }
//!
//! #[derive(Clone, Debug)]
//! struct GameSaved { slot: u8 }
//! impl Signal for GameSaved {
//!     const CATEGORY: SignalCategory = SignalCategory::Event;
//! }
//!
//! assert_eq!(classify::<SaveGame>(), SignalCategory::Command);
//! assert_eq!(classify::<GameSaved>(), SignalCategory::Event);
//! ```

use std::any::Any;
use std::fmt;

/// Intent classification of a signal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalCategory {
    /// Intended for exactly one consumer.
    Command,
    /// Intended for an arbitrary number of consumers.
    Event,
    /// No declared intent.
    Unspecified,
}

impl SignalCategory {
    /// Returns a short stable label (lowercase) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            SignalCategory::Command => "command",
            SignalCategory::Event => "event",
            SignalCategory::Unspecified => "signal",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// # A typed, immutable value broadcast through the bus.
///
/// Implementors are plain data: `Clone` because delivery fans the value out
/// to every subscriber, `Debug` because sinks print fired signals.
///
/// Override [`Signal::CATEGORY`] to mark the type as a command or an event;
/// the default is [`SignalCategory::Unspecified`].
pub trait Signal: Any + Clone + fmt::Debug + Send + Sync + 'static {
    /// The declared intent of this signal type.
    const CATEGORY: SignalCategory = SignalCategory::Unspecified;
}

/// Classifies a signal type by its declared intent.
///
/// Pure function of the type; equivalent to reading `S::CATEGORY`.
pub fn classify<S: Signal>() -> SignalCategory {
    S::CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct DoThing;
    impl Signal for DoThing {
        const CATEGORY: SignalCategory = SignalCategory::Command;
    }

    #[derive(Clone, Debug)]
    struct ThingDone;
    impl Signal for ThingDone {
        const CATEGORY: SignalCategory = SignalCategory::Event;
    }

    #[derive(Clone, Debug)]
    struct Plain;
    impl Signal for Plain {}

    #[test]
    fn classify_follows_declared_category() {
        assert_eq!(classify::<DoThing>(), SignalCategory::Command);
        assert_eq!(classify::<ThingDone>(), SignalCategory::Event);
        assert_eq!(classify::<Plain>(), SignalCategory::Unspecified);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(SignalCategory::Command.as_label(), "command");
        assert_eq!(SignalCategory::Event.as_label(), "event");
        assert_eq!(SignalCategory::Unspecified.as_label(), "signal");
    }
}
