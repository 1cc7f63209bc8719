//! # Example: wait_any
//!
//! Demonstrates awaiting the first of several signal types, with a timeout,
//! and the switch-style dispatcher.
//!
//! ## Flow
//! ```text
//! main ──► wait::<(Confirmed, Dismissed)>() ── suspends
//!   │
//!   └─► spawned task ──► fire(Confirmed) ──► wait resolves, teardown
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example wait_any
//! ```

use std::time::Duration;

use signalhub::{Signal, SignalBus, WaitOutcome};

#[derive(Clone, Debug)]
struct Confirmed {
    by: &'static str,
}
impl Signal for Confirmed {}

#[derive(Clone, Debug)]
struct Dismissed;
impl Signal for Dismissed {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = SignalBus::new();

    // Somebody eventually confirms.
    let answering = bus.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        answering.fire(Confirmed { by: "player" }).ok();
    });

    let outcome = bus
        .wait::<(Confirmed, Dismissed)>()
        .with_timeout(Duration::from_secs(1))
        .await?;

    match outcome {
        WaitOutcome::Signal(signal) if signal.is::<Confirmed>() => {
            let confirmed = signal.to_owned::<Confirmed>().expect("type checked above");
            println!("confirmed by {}", confirmed.by);
        }
        WaitOutcome::Signal(_) => println!("dismissed"),
        WaitOutcome::Cancelled => println!("cancelled"),
        WaitOutcome::TimedOut => println!("no answer within a second"),
    }

    // Same wait, switch-style: at most one continuation runs.
    let deciding = bus.clone();
    tokio::spawn(async move {
        deciding.fire(Dismissed).ok();
    });

    bus.wait_switch()
        .case(|signal: Confirmed| async move { println!("confirmed by {}", signal.by) })
        .case(|_: Dismissed| async move { println!("dismissed after all") })
        .with_timeout(Duration::from_secs(1))
        .run()
        .await?;

    Ok(())
}
