//! Bus-wide configuration.
//!
//! Provides [`BusConfig`], the settings applied when a [`SignalBus`](crate::SignalBus)
//! is built. Both knobs default to off, which gives an open bus: any signal
//! type may be fired or subscribed without prior declaration, and command
//! signals accept any number of consumers.

/// Configuration for a [`SignalBus`](crate::SignalBus).
///
/// ## Field semantics
/// - `require_declaration`: when `true`, firing or subscribing a type that was
///   not listed via [`BusBuilder::declare`](crate::BusBuilder::declare) fails
///   with [`SignalError::NotDeclared`](crate::SignalError). Declarations are
///   the composition root's explicit registration list, fixed at build time.
/// - `enforce_command_consumers`: when `true`, a second concurrent
///   subscription to a [`Command`](crate::SignalCategory::Command)-classified
///   type fails with [`SignalError::CommandConsumerConflict`](crate::SignalError).
///   Commands are single-consumer by intent; this turns the intent into a
///   registration-time check.
#[derive(Clone, Debug, Default)]
pub struct BusConfig {
    /// Reject fires and subscriptions for undeclared signal types.
    pub require_declaration: bool,

    /// Reject a second concurrent consumer for command signals.
    pub enforce_command_consumers: bool,
}

impl BusConfig {
    /// An open configuration: no declarations required, no consumer limits.
    ///
    /// Same as [`BusConfig::default`], spelled out for call sites that want
    /// to be explicit about it.
    pub fn open() -> Self {
        Self::default()
    }

    /// A strict configuration: declarations required and command signals
    /// limited to one consumer.
    pub fn strict() -> Self {
        Self {
            require_declaration: true,
            enforce_command_consumers: true,
        }
    }
}
