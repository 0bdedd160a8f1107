//! Counter/auth demo binary
//!
//! Wires the composed app reducer into a store, registers a logging
//! subscriber and a rendering subscriber, and maps stdin commands to
//! dispatched actions.

use std::io::BufRead;

use counter_auth::app::{AppEnvironment, AppState, app_reducer};
use counter_auth::view::{Command, parse_command, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniflow_core::environment::SystemClock;
use uniflow_runtime::Store;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter_auth=debug,uniflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create environment and store; the store is an explicit context object
    // owned here, torn down when main returns.
    let env = AppEnvironment::new(SystemClock);
    let store = Store::new(AppState::default(), app_reducer(), env);

    // Logging subscriber: emits the latest snapshot after every change.
    let _log_subscription = store.subscribe(|state: &AppState| {
        match serde_json::to_string(state) {
            Ok(json) => tracing::debug!(state = %json, "state changed"),
            Err(err) => tracing::warn!(error = %err, "failed to serialize state"),
        }
    });

    // Rendering subscriber: re-renders the view from the committed snapshot.
    let _render_subscription = store.subscribe(|state: &AppState| {
        println!("\n{}", render(state));
    });

    println!("{}", render(&store.get_state()));
    println!("\ncommands: +, -, <n>, toggle, login, logout, quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(Command::Dispatch(action)) => {
                // The view collaborator owns error display; the store only
                // guarantees state consistency.
                if let Err(err) = store.dispatch(action) {
                    eprintln!("dispatch failed: {err}");
                }
            },
            Some(Command::Quit) => break,
            None => println!("unrecognized command: {line}"),
        }
    }

    Ok(())
}
