//! Dispatch table and delivery loop.
//!
//! ## Delivery protocol
//! - One synchronous pass per fired signal: taps first, then the type's
//!   subscribers in subscription order.
//! - The pass iterates a snapshot of the callback lists. Structural
//!   mutation (subscribe/unsubscribe) during a pass touches only the
//!   canonical table, so an in-flight pass is never corrupted.
//! - A fire that lands while a pass is running (a handler firing, or another
//!   thread) is pushed onto a FIFO queue and drained by the active pass.
//!   This bounds the call stack and preserves total fire order.
//!
//! ## Rules
//! - Callbacks must not block; they run on the firing thread.
//! - Unsubscribing inside a delivery callback is legal but takes effect for
//!   the *next* pass, never the current one.
//! - After [`SignalBus::close`], every operation fails with
//!   [`SignalError::BusClosed`] and all registered callbacks are dropped.

use std::any::TypeId;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::BusConfig;
use crate::error::SignalError;
use crate::signals::{AnySignal, Signal, SignalCategory, SignalId, SignalSet};
use crate::wait::{WaitBuilder, WaitSwitch};

use super::{BusBuilder, SubscriptionKey, TapKey};

/// Type-erased delivery callback.
pub(crate) type Callback = Arc<dyn Fn(&AnySignal) + Send + Sync>;

struct Entry {
    id: u64,
    callback: Callback,
}

struct Inner {
    config: BusConfig,
    /// Declared signal types; checked only when `require_declaration` is set.
    declared: HashSet<TypeId>,
    /// Per-type subscriber lists, in subscription order.
    subscribers: HashMap<TypeId, Vec<Entry>>,
    /// Every-signal observers, in attachment order.
    taps: Vec<Entry>,
    /// Fires waiting for the active delivery pass to pick them up.
    queue: VecDeque<AnySignal>,
    delivering: bool,
    closed: bool,
    next_id: u64,
}

impl Inner {
    fn check_declared(&self, id: &SignalId) -> Result<(), SignalError> {
        if self.config.require_declaration && !self.declared.contains(&id.type_id()) {
            return Err(SignalError::NotDeclared { name: id.name() });
        }
        Ok(())
    }
}

/// Clears the `delivering` flag when the active pass ends, however it ends.
///
/// The lock is never held while callbacks run, so a panic unwinding out of
/// a callback reaches this drop with the lock free.
struct DeliveryReset<'a>(&'a Mutex<Inner>);

impl Drop for DeliveryReset<'_> {
    fn drop(&mut self) {
        self.0.lock().delivering = false;
    }
}

/// Type-indexed publish/subscribe bus.
///
/// Cloning yields another handle to the same bus. See the
/// [module docs](self) for the delivery protocol.
#[derive(Clone)]
pub struct SignalBus {
    inner: Arc<Mutex<Inner>>,
}

impl SignalBus {
    /// Creates an open bus with the default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a bus with explicit configuration and declarations.
    pub fn builder() -> BusBuilder {
        BusBuilder::new()
    }

    pub(crate) fn with_parts(config: BusConfig, declared: HashSet<TypeId>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                config,
                declared,
                subscribers: HashMap::new(),
                taps: Vec::new(),
                queue: VecDeque::new(),
                delivering: false,
                closed: false,
                next_id: 0,
            })),
        }
    }

    /// Registers a callback for signal type `S`.
    ///
    /// Delivery order among subscribers of one type is
    /// first-subscribed-first-called.
    pub fn subscribe<S: Signal>(
        &self,
        callback: impl Fn(&S) + Send + Sync + 'static,
    ) -> Result<SubscriptionKey, SignalError> {
        // The table is keyed by TypeId, so the downcast never misses for
        // signals delivered through it.
        let erased: Callback = Arc::new(move |any| {
            if let Some(signal) = any.downcast_ref::<S>() {
                callback(signal);
            }
        });
        self.subscribe_erased(SignalId::of::<S>(), erased)
    }

    pub(crate) fn subscribe_erased(
        &self,
        id: SignalId,
        callback: Callback,
    ) -> Result<SubscriptionKey, SignalError> {
        let mut inner = self.inner.lock();
        if inner.closed {
            return Err(SignalError::BusClosed);
        }
        inner.check_declared(&id)?;
        if inner.config.enforce_command_consumers
            && id.category() == SignalCategory::Command
            && inner
                .subscribers
                .get(&id.type_id())
                .is_some_and(|list| !list.is_empty())
        {
            return Err(SignalError::CommandConsumerConflict { name: id.name() });
        }

        let sub_id = inner.next_id;
        inner.next_id += 1;
        inner
            .subscribers
            .entry(id.type_id())
            .or_default()
            .push(Entry {
                id: sub_id,
                callback,
            });
        Ok(SubscriptionKey {
            type_id: id.type_id(),
            id: sub_id,
        })
    }

    /// Removes a subscription. Unknown or already-removed keys are a no-op.
    pub fn unsubscribe(&self, key: SubscriptionKey) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        if let Some(list) = inner.subscribers.get_mut(&key.type_id) {
            list.retain(|entry| entry.id != key.id);
            if list.is_empty() {
                inner.subscribers.remove(&key.type_id);
            }
        }
    }

    /// Registers an observer callback invoked for **every** fired signal,
    /// before per-type delivery.
    ///
    /// Taps feed observability collaborators (sinks, loggers, validators);
    /// they receive the erased [`AnySignal`] with its taxonomy metadata.
    pub fn tap(
        &self,
        callback: impl Fn(&AnySignal) + Send + Sync + 'static,
    ) -> Result<TapKey, SignalError> {
        let mut inner = self.inner.lock();
        if inner.closed {
            return Err(SignalError::BusClosed);
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.taps.push(Entry {
            id,
            callback: Arc::new(callback),
        });
        Ok(TapKey(id))
    }

    /// Removes a tap. Unknown keys are a no-op.
    pub fn untap(&self, key: TapKey) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        inner.taps.retain(|entry| entry.id != key.0);
    }

    /// Fires a signal: delivers it synchronously to all current subscribers
    /// of its type, in subscription order.
    ///
    /// If a delivery pass is already running on this bus, the signal is
    /// queued and delivered after the pass completes; the call still returns
    /// `Ok` immediately.
    ///
    /// A panicking callback aborts the rest of the pass and propagates to
    /// the firing call; the bus stays usable afterwards.
    pub fn fire<S: Signal>(&self, signal: S) -> Result<(), SignalError> {
        self.fire_any(AnySignal::new(signal))
    }

    fn fire_any(&self, signal: AnySignal) -> Result<(), SignalError> {
        let mut inner = self.inner.lock();
        if inner.closed {
            return Err(SignalError::BusClosed);
        }
        inner.check_declared(&signal.id())?;
        inner.queue.push_back(signal);
        if inner.delivering {
            // The active pass drains the queue.
            return Ok(());
        }

        inner.delivering = true;
        drop(inner);
        // The guard clears `delivering` on every exit from the pass,
        // including a panic unwinding out of a callback. Without it a
        // panicking handler would leave the flag set and every later fire
        // would queue forever.
        let _reset = DeliveryReset(&self.inner);

        let mut inner = self.inner.lock();
        while let Some(next) = inner.queue.pop_front() {
            let taps: Vec<Callback> = inner
                .taps
                .iter()
                .map(|entry| Arc::clone(&entry.callback))
                .collect();
            let subs: Vec<Callback> = inner
                .subscribers
                .get(&next.type_id())
                .map(|list| list.iter().map(|entry| Arc::clone(&entry.callback)).collect())
                .unwrap_or_default();

            // Callbacks run without the lock so they may subscribe,
            // unsubscribe, or fire.
            drop(inner);
            for callback in &taps {
                callback(&next);
            }
            for callback in &subs {
                callback(&next);
            }
            inner = self.inner.lock();
            if inner.closed {
                inner.queue.clear();
                break;
            }
        }
        drop(inner);
        Ok(())
    }

    /// Waits for the first fired signal among the types in set `S`.
    ///
    /// ```rust,no_run
    /// # use signalhub::{Signal, SignalBus};
    /// # #[derive(Clone, Debug)] struct A; impl Signal for A {}
    /// # #[derive(Clone, Debug)] struct B; impl Signal for B {}
    /// # async fn demo(bus: &SignalBus) -> Result<(), signalhub::SignalError> {
    /// let outcome = bus.wait::<(A, B)>().await?;
    /// # Ok(()) }
    /// ```
    pub fn wait<S: SignalSet>(&self) -> WaitBuilder {
        WaitBuilder::new(self.clone(), S::ids())
    }

    /// Waits for the first fired signal of the single type `S`.
    ///
    /// Shorthand for `wait::<(S,)>()`.
    pub fn wait_for<S: Signal>(&self) -> WaitBuilder {
        WaitBuilder::new(self.clone(), vec![SignalId::of::<S>()])
    }

    /// Starts a switch-style wait: one continuation per watched type, of
    /// which at most one runs.
    pub fn wait_switch(&self) -> WaitSwitch {
        WaitSwitch::new(self.clone())
    }

    /// Number of subscribers currently registered for type `S`.
    ///
    /// Intended for tests and validation collaborators.
    pub fn subscriber_count<S: Signal>(&self) -> usize {
        self.inner
            .lock()
            .subscribers
            .get(&TypeId::of::<S>())
            .map_or(0, Vec::len)
    }

    /// True once [`SignalBus::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    /// Closes the bus: drops all subscriptions, taps, and queued fires.
    ///
    /// Pending waits on this bus resolve as
    /// [`WaitOutcome::Cancelled`](crate::WaitOutcome); subsequent operations
    /// fail with [`SignalError::BusClosed`]. Closing twice is a no-op.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
        inner.taps.clear();
        inner.queue.clear();
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}
