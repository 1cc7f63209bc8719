//! Builder for constructing a bus with configuration and declarations.

use std::any::TypeId;
use std::collections::HashSet;

use crate::config::BusConfig;
use crate::signals::Signal;

use super::SignalBus;

/// Builder for a [`SignalBus`].
///
/// The declaration list is the composition root's explicit registry of
/// signal types, fixed at build time. It only gates operations when
/// [`BusConfig::require_declaration`] is set; on an open bus declarations
/// are inert.
///
/// ## Example
/// ```rust
/// use signalhub::{BusConfig, Signal, SignalBus};
///
/// #[derive(Clone, Debug)]
/// struct LevelLoaded;
/// impl Signal for LevelLoaded {}
///
/// let bus = SignalBus::builder()
///     .with_config(BusConfig::strict())
///     .declare::<LevelLoaded>()
///     .build();
/// ```
pub struct BusBuilder {
    config: BusConfig,
    declared: HashSet<TypeId>,
}

impl BusBuilder {
    pub(crate) fn new() -> Self {
        Self {
            config: BusConfig::default(),
            declared: HashSet::new(),
        }
    }

    /// Sets the bus configuration.
    pub fn with_config(mut self, config: BusConfig) -> Self {
        self.config = config;
        self
    }

    /// Declares signal type `S` on the bus. Declaring a type twice is a
    /// no-op.
    pub fn declare<S: Signal>(mut self) -> Self {
        self.declared.insert(TypeId::of::<S>());
        self
    }

    /// Builds the bus.
    pub fn build(self) -> SignalBus {
        SignalBus::with_parts(self.config, self.declared)
    }
}
