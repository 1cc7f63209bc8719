//! # Handler set with subscribe/unsubscribe lifecycle.
//!
//! [`SignalHandlers`] is the owner-side registration surface: an owner
//! registers one closure per signal type it handles, then the whole set is
//! toggled between subscribed and unsubscribed as a unit.
//!
//! ## Rules
//! - The set is either fully subscribed or fully unsubscribed; both toggles
//!   are idempotent.
//! - Registration order is preserved; subscribing attaches handlers in that
//!   order, which fixes their delivery order on the bus.
//! - A failed registration rejects only that handler; previously registered
//!   handlers are untouched.
//! - Dropping the set unsubscribes everything, so a handler never outlives
//!   its owner.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//! use signalhub::{Signal, SignalBus, SignalHandlers};
//!
//! #[derive(Clone, Debug)]
//! struct ShowWindow { name: &'static str }
//! impl Signal for ShowWindow {}
//!
//! # fn main() -> Result<(), signalhub::SignalError> {
//! let bus = SignalBus::new();
//! let shown = Arc::new(AtomicUsize::new(0));
//!
//! let mut handlers = SignalHandlers::manual(bus.clone());
//! let seen = Arc::clone(&shown);
//! handlers.register(move |_: &ShowWindow| {
//!     seen.fetch_add(1, Ordering::SeqCst);
//! })?;
//!
//! bus.fire(ShowWindow { name: "Map" })?;          // not subscribed yet
//! assert_eq!(shown.load(Ordering::SeqCst), 0);
//!
//! handlers.subscribe_all()?;
//! bus.fire(ShowWindow { name: "Map" })?;
//! assert_eq!(shown.load(Ordering::SeqCst), 1);
//! # Ok(())
//! # }
//! ```

use crate::bus::SignalBus;
use crate::error::SignalError;
use crate::signals::Signal;

use super::HandlerBinding;

/// An owner's signal handlers, toggled on and off the bus as one unit.
pub struct SignalHandlers {
    bus: SignalBus,
    bindings: Vec<HandlerBinding>,
    subscribed: bool,
}

impl SignalHandlers {
    /// Creates a set in **auto** mode: the set counts as subscribed from the
    /// start and every registered handler attaches immediately.
    pub fn new(bus: SignalBus) -> Self {
        Self {
            bus,
            bindings: Vec::new(),
            subscribed: true,
        }
    }

    /// Creates a set in **manual** mode: handlers accumulate detached until
    /// [`subscribe_all`](Self::subscribe_all) is called.
    pub fn manual(bus: SignalBus) -> Self {
        Self {
            bus,
            bindings: Vec::new(),
            subscribed: false,
        }
    }

    /// Registers a handler for signal type `S`.
    ///
    /// In auto mode (or after `subscribe_all`) the handler attaches to the
    /// bus immediately; otherwise it waits for the next `subscribe_all`.
    ///
    /// On error the handler is excluded; the rest of the set keeps its
    /// state. Handler signatures are checked by the compiler, so the
    /// remaining rejection causes are bus-side. A rejection specific to
    /// this handler (undeclared type, contested command signal) comes back
    /// as [`SignalError::InvalidHandler`] naming the signal type; a closed
    /// bus stays [`SignalError::BusClosed`].
    pub fn register<S: Signal>(
        &mut self,
        handler: impl Fn(&S) + Send + Sync + 'static,
    ) -> Result<(), SignalError> {
        let mut binding = HandlerBinding::new::<S>(handler);
        if self.subscribed {
            binding.attach(&self.bus).map_err(|error| match error {
                SignalError::BusClosed => SignalError::BusClosed,
                other => SignalError::InvalidHandler {
                    name: std::any::type_name::<S>(),
                    reason: other.as_message(),
                },
            })?;
        }
        self.bindings.push(binding);
        Ok(())
    }

    /// Attaches every handler in registration order.
    ///
    /// No-op when already subscribed. All-or-nothing: if the bus rejects a
    /// handler mid-way, the attachments made by this call are rolled back
    /// and the error propagates.
    pub fn subscribe_all(&mut self) -> Result<(), SignalError> {
        if self.subscribed {
            return Ok(());
        }
        for index in 0..self.bindings.len() {
            if let Err(error) = self.bindings[index].attach(&self.bus) {
                for binding in &mut self.bindings[..index] {
                    binding.detach(&self.bus);
                }
                return Err(error);
            }
        }
        self.subscribed = true;
        Ok(())
    }

    /// Detaches every handler in registration order. No-op when already
    /// unsubscribed.
    pub fn unsubscribe_all(&mut self) {
        if !self.subscribed {
            return;
        }
        self.subscribed = false;
        for binding in &mut self.bindings {
            binding.detach(&self.bus);
        }
    }

    /// True while the set is subscribed.
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bus this set registers against.
    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// Fires a signal on the underlying bus.
    pub fn fire<S: Signal>(&self, signal: S) -> Result<(), SignalError> {
        self.bus.fire(signal)
    }
}

impl Drop for SignalHandlers {
    fn drop(&mut self) {
        self.unsubscribe_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::config::BusConfig;
    use crate::signals::SignalCategory;

    #[derive(Clone, Debug)]
    struct Show {
        name: &'static str,
    }
    impl Signal for Show {}

    #[derive(Clone, Debug)]
    struct Hide;
    impl Signal for Hide {}

    #[derive(Clone, Debug)]
    struct DoQuit;
    impl Signal for DoQuit {
        const CATEGORY: SignalCategory = SignalCategory::Command;
    }

    fn counting_set(bus: &SignalBus) -> (SignalHandlers, Arc<AtomicUsize>) {
        let mut handlers = SignalHandlers::new(bus.clone());
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        handlers
            .register(move |_: &Show| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        (handlers, count)
    }

    #[test]
    fn auto_mode_attaches_on_register() {
        let bus = SignalBus::new();
        let (handlers, count) = counting_set(&bus);
        assert!(handlers.is_subscribed());

        bus.fire(Show { name: "Inventory" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn toggle_is_idempotent() {
        let bus = SignalBus::new();
        let (mut handlers, count) = counting_set(&bus);

        // Double subscribe must not create a second subscription.
        handlers.subscribe_all().unwrap();
        handlers.subscribe_all().unwrap();
        bus.fire(Show { name: "Map" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count::<Show>(), 1);

        handlers.unsubscribe_all();
        handlers.unsubscribe_all();
        bus.fire(Show { name: "Map" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count::<Show>(), 0);

        // And the cycle works again.
        handlers.subscribe_all().unwrap();
        bus.fire(Show { name: "Map" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn manual_mode_waits_for_subscribe_all() {
        let bus = SignalBus::new();
        let mut handlers = SignalHandlers::manual(bus.clone());
        let count = Arc::new(AtomicUsize::new(0));

        let seen = Arc::clone(&count);
        handlers
            .register(move |_: &Hide| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        assert!(!handlers.is_subscribed());

        bus.fire(Hide).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);

        handlers.subscribe_all().unwrap();
        bus.fire(Hide).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_unsubscribes_everything() {
        let bus = SignalBus::new();
        let count = {
            let (_handlers, count) = counting_set(&bus);
            assert_eq!(bus.subscriber_count::<Show>(), 1);
            count
        };
        assert_eq!(bus.subscriber_count::<Show>(), 0);

        bus.fire(Show { name: "Inventory" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn rejected_registration_leaves_others_intact() {
        let bus = SignalBus::builder()
            .with_config(BusConfig {
                enforce_command_consumers: true,
                ..BusConfig::default()
            })
            .build();

        // Another owner already consumes the command.
        bus.subscribe(|_: &DoQuit| {}).unwrap();

        let (mut handlers, count) = counting_set(&bus);
        match handlers.register(|_: &DoQuit| {}) {
            Err(SignalError::InvalidHandler { name, reason }) => {
                assert!(name.ends_with("DoQuit"));
                assert!(reason.contains("command already consumed"));
            }
            other => panic!("expected InvalidHandler, got {other:?}"),
        }

        // The earlier handler still works.
        bus.fire(Show { name: "Map" }).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(handlers.len(), 1);
    }

    #[test]
    fn closed_bus_rejection_is_not_wrapped() {
        let bus = SignalBus::new();
        bus.close();

        let mut handlers = SignalHandlers::new(bus);
        assert!(matches!(
            handlers.register(|_: &Show| {}),
            Err(SignalError::BusClosed)
        ));
    }

    #[test]
    fn subscribe_all_rolls_back_on_error() {
        let bus = SignalBus::builder()
            .with_config(BusConfig {
                enforce_command_consumers: true,
                ..BusConfig::default()
            })
            .build();

        let mut handlers = SignalHandlers::manual(bus.clone());
        handlers.register(|_: &Show| {}).unwrap();
        handlers.register(|_: &DoQuit| {}).unwrap();

        // Steal the command slot before subscribe_all runs.
        bus.subscribe(|_: &DoQuit| {}).unwrap();

        assert!(handlers.subscribe_all().is_err());
        assert!(!handlers.is_subscribed());
        // The Show attachment from the failed call was rolled back.
        assert_eq!(bus.subscriber_count::<Show>(), 0);
    }

    #[test]
    fn end_to_end_show_scenario() {
        let bus = SignalBus::new();
        let received = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let mut handlers = SignalHandlers::new(bus.clone());
        let seen = Arc::clone(&received);
        handlers
            .register(move |signal: &Show| seen.lock().push(signal.name))
            .unwrap();

        handlers.fire(Show { name: "Inventory" }).unwrap();
        assert_eq!(*received.lock(), vec!["Inventory"]);

        handlers.unsubscribe_all();
        handlers.fire(Show { name: "Inventory" }).unwrap();
        assert_eq!(*received.lock(), vec!["Inventory"]);
    }
}
