//! # Counter/Auth Demo
//!
//! A two-slice demo application for the Uniflow architecture.
//!
//! This demo showcases:
//! - Slice-based state: independent `counter` and `auth` slices, each with
//!   its own reducer
//! - Reducer composition with `scope_reducer` and `combine_reducers`
//! - A single typed action vocabulary shared by every slice reducer
//! - A pure text view layer consuming state snapshots
//!
//! ## Architecture
//!
//! Both slices are **pure state machines** with no side effects beyond
//! logging through the injected clock:
//! - The counter slice handles increment/decrement/increase-by/toggle
//! - The auth slice handles login/logout
//! - Every slice reducer sees every action and treats foreign actions as
//!   identity, which is what makes the composition commute
//!
//! ## Example
//!
//! ```no_run
//! use counter_auth::app::{AppEnvironment, AppState, AppAction, app_reducer};
//! use uniflow_core::environment::SystemClock;
//! use uniflow_runtime::Store;
//!
//! let env = AppEnvironment::new(SystemClock);
//! let store = Store::new(AppState::default(), app_reducer(), env);
//!
//! let _ = store.dispatch(AppAction::Increment);
//! let count = store.state(|s| s.counter.count);
//! assert_eq!(count, 1);
//! ```

/// Application state, actions, environment, and the composed reducer
pub mod app;

/// Authentication slice: state and reducer
pub mod auth;

/// Counter slice: state and reducer
pub mod counter;

/// Pure text view layer and command parsing
pub mod view;

pub use app::{AppAction, AppEnvironment, AppState, app_reducer};
pub use auth::{AuthReducer, AuthState};
pub use counter::{CounterReducer, CounterState};
