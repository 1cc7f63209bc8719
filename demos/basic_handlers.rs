//! # Example: basic_handlers
//!
//! Demonstrates owner-scoped handler sets and the logging sink.
//!
//! Shows how to:
//! - Declare command/event signal types via [`Signal::CATEGORY`].
//! - Register handlers on a [`SignalHandlers`] set and toggle them.
//! - Attach a [`LogWriter`] sink through [`SinkSet`].
//!
//! ## Flow
//! ```text
//! fire(OpenMenu) ──► SignalBus
//!     ├─► tap ──► [queue] ──► LogWriter.on_signal()
//!     └─► menu-owner handler ──► fire(MenuOpened)   (queued, next pass)
//!                                   └─► audio-owner handler
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_handlers --features logging
//! ```

use std::sync::Arc;

use signalhub::{LogWriter, Signal, SignalBus, SignalCategory, SignalHandlers, SinkSet};

#[derive(Clone, Debug)]
struct OpenMenu {
    menu: &'static str,
}
impl Signal for OpenMenu {
    const CATEGORY: SignalCategory = SignalCategory::Command;
}

#[derive(Clone, Debug)]
struct MenuOpened {
    menu: &'static str,
}
impl Signal for MenuOpened {
    const CATEGORY: SignalCategory = SignalCategory::Event;
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = SignalBus::new();

    // Every fired signal goes to the logging sink, with its category.
    let sinks = SinkSet::attach(&bus, vec![Arc::new(LogWriter::new())])?;

    // The menu owner handles the command and announces the result.
    let mut menu_owner = SignalHandlers::new(bus.clone());
    let announce = bus.clone();
    menu_owner.register(move |signal: &OpenMenu| {
        println!("opening menu: {}", signal.menu);
        announce.fire(MenuOpened { menu: signal.menu }).ok();
    })?;

    // The audio owner reacts to the announcement.
    let mut audio_owner = SignalHandlers::new(bus.clone());
    audio_owner.register(|signal: &MenuOpened| {
        println!("playing open sound for: {}", signal.menu);
    })?;

    bus.fire(OpenMenu { menu: "Inventory" })?;

    // Unsubscribed owners receive nothing.
    audio_owner.unsubscribe_all();
    bus.fire(OpenMenu { menu: "Map" })?;

    sinks.shutdown().await;
    Ok(())
}
