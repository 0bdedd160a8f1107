//! Authentication slice
//!
//! A single flag gating which view renders. Login and logout transitions are
//! logged with the injected clock, the demo's only environment use.

use serde::{Deserialize, Serialize};
use uniflow_core::environment::Clock;
use uniflow_core::reducer::Reducer;

use crate::app::{AppAction, AppEnvironment};

/// Authentication slice state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Whether a user is currently authenticated
    pub authenticated: bool,
}

/// Authentication slice reducer
///
/// Reacts to [`AppAction::Login`] and [`AppAction::Logout`] and treats every
/// other action as identity. Transitions are idempotent: logging in while
/// authenticated commits the same state again.
#[derive(Debug, Clone, Copy)]
pub struct AuthReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> AuthReducer<C> {
    /// Create a new auth reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for AuthReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for AuthReducer<C> {
    type State = AuthState;
    type Action = AppAction;
    type Environment = AppEnvironment<C>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        match action {
            AppAction::Login => {
                tracing::info!(at = %env.clock.now(), "logged in");
                state.authenticated = true;
            },
            AppAction::Logout => {
                tracing::info!(at = %env.clock.now(), "logged out");
                state.authenticated = false;
            },
            // Foreign actions are identity
            AppAction::Increment
            | AppAction::Decrement
            | AppAction::IncreaseBy(_)
            | AppAction::ToggleVisibility => {},
        }
    }
}
