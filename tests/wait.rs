//! Integration tests for the awaitable signal API.
//!
//! All tests run on the current-thread runtime: a spawned wait registers its
//! subscriptions on its first poll, so a single `yield_now` after spawning
//! makes the registration visible before the test fires anything.

use std::future::IntoFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use signalhub::{Signal, SignalBus, SignalError, WaitOutcome};

#[derive(Clone, Debug, PartialEq)]
struct Saved {
    slot: u8,
}
impl Signal for Saved {}

#[derive(Clone, Debug)]
struct Aborted;
impl Signal for Aborted {}

#[derive(Clone, Debug)]
struct Unrelated;
impl Signal for Unrelated {}

#[tokio::test]
async fn resolves_with_first_of_two_types() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait::<(Saved, Aborted)>().await }
    });
    tokio::task::yield_now().await;
    assert_eq!(bus.subscriber_count::<Saved>(), 1);
    assert_eq!(bus.subscriber_count::<Aborted>(), 1);

    bus.fire(Saved { slot: 3 }).unwrap();

    let outcome = waiting.await.unwrap().unwrap();
    let signal = outcome.signal().expect("expected a signal");
    assert!(signal.is::<Saved>());
    assert_eq!(signal.to_owned::<Saved>(), Some(Saved { slot: 3 }));

    // Firing the other watched type afterward cannot disturb anything.
    bus.fire(Aborted).unwrap();
}

#[tokio::test]
async fn teardown_leaves_no_subscriptions_behind() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait::<(Saved, Aborted)>().await }
    });
    tokio::task::yield_now().await;

    bus.fire(Aborted).unwrap();
    waiting.await.unwrap().unwrap();

    assert_eq!(bus.subscriber_count::<Saved>(), 0);
    assert_eq!(bus.subscriber_count::<Aborted>(), 0);
}

#[tokio::test]
async fn back_to_back_fires_resolve_with_the_first() {
    let bus = SignalBus::new();

    // An independent subscriber of the losing type must still be served.
    let aborted_seen = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&aborted_seen);
    bus.subscribe(move |_: &Aborted| {
        seen.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait::<(Saved, Aborted)>().await }
    });
    tokio::task::yield_now().await;

    // Both fire before the waiting task gets to run again.
    bus.fire(Saved { slot: 1 }).unwrap();
    bus.fire(Aborted).unwrap();

    let outcome = waiting.await.unwrap().unwrap();
    assert!(outcome.signal().is_some_and(|signal| signal.is::<Saved>()));
    assert_eq!(aborted_seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unrelated_signals_do_not_resolve_the_wait() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait_for::<Saved>().await }
    });
    tokio::task::yield_now().await;

    bus.fire(Unrelated).unwrap();
    tokio::task::yield_now().await;
    assert!(!waiting.is_finished());

    bus.fire(Saved { slot: 0 }).unwrap();
    assert!(waiting.await.unwrap().unwrap().is_signal());
}

#[tokio::test]
async fn aborted_wait_drops_its_subscriptions() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait::<(Saved, Aborted)>().await }
    });
    tokio::task::yield_now().await;
    assert_eq!(bus.subscriber_count::<Saved>(), 1);
    assert_eq!(bus.subscriber_count::<Aborted>(), 1);

    // The wait future is dropped without ever resolving.
    waiting.abort();
    let _ = waiting.await;

    assert_eq!(bus.subscriber_count::<Saved>(), 0);
    assert_eq!(bus.subscriber_count::<Aborted>(), 0);

    // Nothing left to receive the fire.
    bus.fire(Saved { slot: 1 }).unwrap();
}

#[tokio::test]
async fn losing_select_arm_drops_its_subscriptions() {
    let bus = SignalBus::new();

    // The wait is polled once (registering its subscription), then loses the
    // race and is dropped mid-flight.
    tokio::select! {
        biased;
        _ = bus.wait_for::<Saved>().into_future() => unreachable!("nothing fired"),
        _ = tokio::task::yield_now() => {}
    }

    assert_eq!(bus.subscriber_count::<Saved>(), 0);
}

#[tokio::test]
async fn cancellation_is_a_first_class_outcome() {
    let bus = SignalBus::new();
    let token = CancellationToken::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        let token = token.clone();
        async move { bus.wait_for::<Saved>().with_cancel(token).await }
    });
    tokio::task::yield_now().await;
    assert_eq!(bus.subscriber_count::<Saved>(), 1);

    token.cancel();

    let outcome = waiting.await.unwrap().unwrap();
    assert!(matches!(outcome, WaitOutcome::Cancelled));
    assert_eq!(bus.subscriber_count::<Saved>(), 0);
}

#[tokio::test(start_paused = true)]
async fn timeout_is_a_first_class_outcome() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move {
            bus.wait_for::<Saved>()
                .with_timeout(Duration::from_secs(5))
                .await
        }
    });
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_secs(6)).await;

    let outcome = waiting.await.unwrap().unwrap();
    assert!(matches!(outcome, WaitOutcome::TimedOut));
    assert_eq!(bus.subscriber_count::<Saved>(), 0);
}

#[tokio::test]
async fn bus_close_cancels_pending_waits() {
    let bus = SignalBus::new();

    let waiting = tokio::spawn({
        let bus = bus.clone();
        async move { bus.wait::<(Saved, Aborted)>().await }
    });
    tokio::task::yield_now().await;

    bus.close();

    let outcome = waiting.await.unwrap().unwrap();
    assert!(matches!(outcome, WaitOutcome::Cancelled));
}

#[tokio::test]
async fn wait_on_closed_bus_fails_fast() {
    let bus = SignalBus::new();
    bus.close();

    let result = bus.wait_for::<Saved>().await;
    assert!(matches!(result, Err(SignalError::BusClosed)));
}

#[tokio::test]
async fn switch_runs_exactly_one_continuation() {
    let bus = SignalBus::new();
    let saved_runs = Arc::new(AtomicUsize::new(0));
    let aborted_runs = Arc::new(AtomicUsize::new(0));

    let waiting = tokio::spawn({
        let bus = bus.clone();
        let saved_runs = Arc::clone(&saved_runs);
        let aborted_runs = Arc::clone(&aborted_runs);
        async move {
            bus.wait_switch()
                .case(move |signal: Saved| {
                    let runs = Arc::clone(&saved_runs);
                    async move {
                        assert_eq!(signal.slot, 9);
                        runs.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .case(move |_: Aborted| {
                    let runs = Arc::clone(&aborted_runs);
                    async move {
                        runs.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .run()
                .await
        }
    });
    tokio::task::yield_now().await;

    bus.fire(Saved { slot: 9 }).unwrap();
    bus.fire(Aborted).unwrap();

    let outcome = waiting.await.unwrap().unwrap();
    assert!(outcome.is_signal());
    assert_eq!(saved_runs.load(Ordering::SeqCst), 1);
    assert_eq!(aborted_runs.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancelled_switch_runs_no_continuation() {
    let bus = SignalBus::new();
    let token = CancellationToken::new();
    let runs = Arc::new(AtomicUsize::new(0));

    let waiting = tokio::spawn({
        let bus = bus.clone();
        let token = token.clone();
        let runs = Arc::clone(&runs);
        async move {
            bus.wait_switch()
                .case(move |_: Saved| {
                    let runs = Arc::clone(&runs);
                    async move {
                        runs.fetch_add(1, Ordering::SeqCst);
                    }
                })
                .with_cancel(token)
                .run()
                .await
        }
    });
    tokio::task::yield_now().await;

    token.cancel();

    let outcome = waiting.await.unwrap().unwrap();
    assert!(matches!(outcome, WaitOutcome::Cancelled));
    assert_eq!(runs.load(Ordering::SeqCst), 0);
}
