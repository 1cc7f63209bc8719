//! Opaque handles returned by `subscribe` and `tap`.

use std::any::TypeId;

/// Handle to one typed subscription on the bus.
///
/// Pass it to [`SignalBus::unsubscribe`](super::SignalBus::unsubscribe) to
/// remove the callback. Unsubscribing a key that is no longer registered is
/// a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionKey {
    pub(crate) type_id: TypeId,
    pub(crate) id: u64,
}

/// Handle to one tap (an every-signal observer callback).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TapKey(pub(crate) u64);
