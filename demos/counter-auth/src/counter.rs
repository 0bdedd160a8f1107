//! Counter slice
//!
//! Holds the numeric count and the visibility flag. Arithmetic actions never
//! touch `visible`; toggling never touches `count`.

use serde::{Deserialize, Serialize};
use uniflow_core::environment::Clock;
use uniflow_core::reducer::Reducer;

use crate::app::{AppAction, AppEnvironment};

/// Counter slice state
///
/// `count` is an unbounded integer and may go negative. `visible` controls
/// whether the view displays the count; it has no effect on the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    /// Whether the view should display the count
    pub visible: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            visible: true,
        }
    }
}

/// Counter slice reducer
///
/// Reacts to the counter vocabulary of [`AppAction`] and treats every other
/// action as identity.
///
/// Generic over the Clock type C to work with any clock implementation.
#[derive(Debug, Clone, Copy)]
pub struct CounterReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> CounterReducer<C> {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for CounterReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for CounterReducer<C> {
    type State = CounterState;
    type Action = AppAction;
    type Environment = AppEnvironment<C>;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            AppAction::Increment => {
                state.count += 1;
            },
            AppAction::Decrement => {
                state.count -= 1;
            },
            AppAction::IncreaseBy(delta) => {
                state.count += delta;
            },
            AppAction::ToggleVisibility => {
                state.visible = !state.visible;
            },
            // Foreign actions are identity
            AppAction::Login | AppAction::Logout => {},
        }
    }
}
