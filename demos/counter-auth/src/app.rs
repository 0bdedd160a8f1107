//! Application state, actions, and the composed reducer
//!
//! The app state is the composite of the two slices. The app reducer is
//! built from the slice reducers: each is scoped onto its field with
//! `scope_reducer`, then both scoped reducers are combined so every
//! dispatched action reaches every slice.

use serde::{Deserialize, Serialize};
use uniflow_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use uniflow_core::environment::Clock;
use uniflow_runtime::Store;

use crate::auth::{AuthReducer, AuthState};
use crate::counter::{CounterReducer, CounterState};

/// Composite application state
///
/// Created once by the host with fixed defaults (`count = 0`,
/// `visible = true`, `authenticated = false`); every subsequent value is a
/// full replacement committed by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Counter slice
    pub counter: CounterState,
    /// Authentication slice
    pub auth: AuthState,
}

/// Application action vocabulary
///
/// One variant per action kind, each carrying only the payload its kind
/// requires. The serialized names match the externally observable command
/// vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum AppAction {
    /// Add one to the count
    Increment,
    /// Subtract one from the count
    Decrement,
    /// Add an integer delta to the count
    #[serde(rename = "increase")]
    IncreaseBy(i64),
    /// Flip whether the count is displayed
    ToggleVisibility,
    /// Mark the session authenticated
    Login,
    /// Clear the authenticated flag
    Logout,
}

/// Application environment
///
/// Injected dependencies for the reducers. The demo only needs a clock,
/// used by the auth slice to timestamp login and logout log lines.
#[derive(Debug, Clone)]
pub struct AppEnvironment<C: Clock> {
    /// Clock for timestamping auth transitions
    pub clock: C,
}

impl<C: Clock> AppEnvironment<C> {
    /// Create a new application environment with the given clock
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// The composed application reducer type
pub type AppReducer<C> = CombinedReducer<AppState, AppAction, AppEnvironment<C>>;

/// The application store type
pub type AppStore<C> = Store<AppState, AppAction, AppEnvironment<C>, AppReducer<C>>;

/// Build the composed application reducer
///
/// Scopes the counter reducer onto `state.counter` and the auth reducer
/// onto `state.auth`, then combines them. Each slice reducer receives every
/// action; foreign actions are identity, so slices stay independent.
#[must_use]
pub fn app_reducer<C: Clock + 'static>() -> AppReducer<C> {
    combine_reducers(vec![
        Box::new(scope_reducer(
            CounterReducer::new(),
            |app: &AppState| &app.counter,
            |app: &mut AppState, counter| app.counter = counter,
        )),
        Box::new(scope_reducer(
            AuthReducer::new(),
            |app: &AppState| &app.auth,
            |app: &mut AppState, auth| app.auth = auth,
        )),
    ])
}
