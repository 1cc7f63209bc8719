//! Tuple-based watch sets for multi-type waits.
//!
//! [`SignalSet`] turns a tuple of one to four signal types into the list of
//! type tokens a wait registers against. The single-type form is the
//! one-element tuple `(A,)`; see also
//! [`SignalBus::wait_for`](crate::SignalBus::wait_for) for the non-tuple
//! convenience.

use super::{Signal, SignalId};

mod sealed {
    pub trait Sealed {}
}

/// A compile-time set of signal types to watch in one wait.
///
/// Implemented for tuples `(A,)` through `(A, B, C, D)`. Duplicate types in
/// a set are harmless: the wait registers one callback per listed type and
/// resolves on the first delivery among them.
pub trait SignalSet: sealed::Sealed {
    /// The type tokens of the set, in tuple order.
    fn ids() -> Vec<SignalId>;
}

macro_rules! impl_signal_set {
    ($($name:ident),+) => {
        impl<$($name: Signal),+> sealed::Sealed for ($($name,)+) {}

        impl<$($name: Signal),+> SignalSet for ($($name,)+) {
            fn ids() -> Vec<SignalId> {
                vec![$(SignalId::of::<$name>()),+]
            }
        }
    };
}

impl_signal_set!(A);
impl_signal_set!(A, B);
impl_signal_set!(A, B, C);
impl_signal_set!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct One;
    impl Signal for One {}

    #[derive(Clone, Debug)]
    struct Two;
    impl Signal for Two {}

    #[test]
    fn ids_follow_tuple_order() {
        let ids = <(One, Two)>::ids();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], SignalId::of::<One>());
        assert_eq!(ids[1], SignalId::of::<Two>());
    }

    #[test]
    fn single_type_set() {
        assert_eq!(<(One,)>::ids(), vec![SignalId::of::<One>()]);
    }
}
