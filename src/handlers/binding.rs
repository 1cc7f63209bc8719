//! One registered (signal type, handler) pair.

use std::sync::Arc;

use crate::bus::{SignalBus, SubscriptionKey};
use crate::error::SignalError;
use crate::signals::Signal;

type AttachFn = Box<dyn Fn(&SignalBus) -> Result<SubscriptionKey, SignalError> + Send + Sync>;

/// A handler bound to one signal type, able to attach itself to a bus and
/// detach again.
///
/// The handler closure sits behind an `Arc` so the binding can re-attach
/// after an unsubscribe/subscribe cycle without re-registering.
pub(crate) struct HandlerBinding {
    subscribe: AttachFn,
    key: Option<SubscriptionKey>,
}

impl HandlerBinding {
    pub(crate) fn new<S: Signal>(handler: impl Fn(&S) + Send + Sync + 'static) -> Self {
        let handler = Arc::new(handler);
        let subscribe: AttachFn = Box::new(move |bus| {
            let handler = Arc::clone(&handler);
            bus.subscribe::<S>(move |signal| handler(signal))
        });
        Self {
            subscribe,
            key: None,
        }
    }

    /// Subscribes the handler on the bus. Attaching an attached binding is a
    /// no-op.
    pub(crate) fn attach(&mut self, bus: &SignalBus) -> Result<(), SignalError> {
        if self.key.is_none() {
            self.key = Some((self.subscribe)(bus)?);
        }
        Ok(())
    }

    /// Removes the handler from the bus. Detaching a detached binding is a
    /// no-op.
    pub(crate) fn detach(&mut self, bus: &SignalBus) {
        if let Some(key) = self.key.take() {
            bus.unsubscribe(key);
        }
    }
}
