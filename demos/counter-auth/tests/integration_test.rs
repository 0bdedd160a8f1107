//! Integration tests for the counter/auth demo with the Store
//!
//! These tests exercise the full dispatch → reduce → commit → notify flow
//! through the composed two-slice reducer.

#![allow(clippy::unwrap_used)] // Test code can unwrap

use std::cell::Cell;
use std::rc::Rc;

use counter_auth::app::{AppAction, AppEnvironment, AppState, AppStore, app_reducer};
use uniflow_runtime::{Store, StoreError};
use uniflow_testing::{FixedClock, test_clock};

fn test_store() -> AppStore<FixedClock> {
    let env = AppEnvironment::new(test_clock());
    Store::new(AppState::default(), app_reducer(), env)
}

#[test]
fn full_session_scenario() {
    let store = test_store();

    store.dispatch(AppAction::Login).unwrap();
    assert!(store.state(|s| s.auth.authenticated));

    for _ in 0..3 {
        store.dispatch(AppAction::Increment).unwrap();
    }
    assert_eq!(store.state(|s| s.counter.count), 3);

    store.dispatch(AppAction::IncreaseBy(5)).unwrap();
    assert_eq!(store.state(|s| s.counter.count), 8);

    store.dispatch(AppAction::ToggleVisibility).unwrap();
    assert!(!store.state(|s| s.counter.visible));

    store.dispatch(AppAction::Logout).unwrap();

    let final_state = store.get_state();
    assert_eq!(final_state.counter.count, 8);
    assert!(!final_state.counter.visible);
    assert!(!final_state.auth.authenticated);
}

#[test]
fn subscriber_sees_one_notification_per_dispatch() {
    let store = test_store();
    let hits = Rc::new(Cell::new(0));
    let probe = Rc::clone(&hits);
    let _sub = store.subscribe(move |_| probe.set(probe.get() + 1));

    store.dispatch(AppAction::Increment).unwrap();
    store.dispatch(AppAction::Login).unwrap();
    store.dispatch(AppAction::Logout).unwrap();

    assert_eq!(hits.get(), 3);
}

#[test]
fn unsubscribed_listener_misses_later_dispatches() {
    let store = test_store();
    let hits = Rc::new(Cell::new(0));
    let probe = Rc::clone(&hits);
    let subscription = store.subscribe(move |_| probe.set(probe.get() + 1));

    store.dispatch(AppAction::Increment).unwrap();
    subscription.unsubscribe();
    store.dispatch(AppAction::Increment).unwrap();

    assert_eq!(hits.get(), 1);
}

#[test]
fn subscriber_observes_committed_snapshot() {
    let store = test_store();
    let seen = Rc::new(Cell::new(0));
    let probe = Rc::clone(&seen);
    let _sub = store.subscribe(move |state: &AppState| probe.set(state.counter.count));

    store.dispatch(AppAction::IncreaseBy(21)).unwrap();
    assert_eq!(seen.get(), 21);
}

#[test]
fn reentrant_dispatch_from_subscriber_is_rejected() {
    let store = Rc::new(test_store());

    let handle = Rc::clone(&store);
    let _sub = store.subscribe(move |_| {
        assert_eq!(
            handle.dispatch(AppAction::IncreaseBy(1000)),
            Err(StoreError::ReentrantDispatch)
        );
    });

    store.dispatch(AppAction::Increment).unwrap();

    // Only the in-progress dispatch's own result landed.
    assert_eq!(store.state(|s| s.counter.count), 1);
}

#[test]
fn dispatch_without_short_circuit_notifies_on_identity_transition() {
    let store = test_store();
    let hits = Rc::new(Cell::new(0));
    let probe = Rc::clone(&hits);
    let _sub = store.subscribe(move |_| probe.set(probe.get() + 1));

    // Logout while already logged out reduces to an identical state, but
    // the commit and notification still happen.
    store.dispatch(AppAction::Logout).unwrap();
    assert_eq!(hits.get(), 1);
    assert_eq!(store.get_state(), AppState::default());
}
