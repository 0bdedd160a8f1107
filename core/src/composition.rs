//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a slice of a larger state
//!
//! Together they express the "slice" pattern: independent sub-portions of the
//! application state, each with its own reducer. Every slice reducer receives
//! every action and treats foreign actions as identity.
//!
//! # Examples
//!
//! ## Combining scoped slice reducers
//!
//! ```
//! use uniflow_core::reducer::Reducer;
//! use uniflow_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Default)]
//! struct CounterState { count: i64 }
//!
//! #[derive(Clone, Default)]
//! struct AppState { counter: CounterState, name: String }
//!
//! #[derive(Clone)]
//! enum AppAction { Increment, SetName(String) }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: AppAction, _env: &()) {
//!         if matches!(action, AppAction::Increment) {
//!             state.count += 1;
//!         }
//!     }
//! }
//!
//! let scoped = scope_reducer(
//!     CounterReducer,
//!     |app: &AppState| &app.counter,
//!     |app: &mut AppState, counter| app.counter = counter,
//! );
//!
//! let combined = combine_reducers(vec![Box::new(scoped)]);
//!
//! let mut state = AppState::default();
//! combined.reduce(&mut state, AppAction::Increment, &());
//! assert_eq!(state.counter.count, 1);
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in sequence over the same state value. This is the glue
/// for slice-based state: scope each slice reducer onto its field with
/// [`scope_reducer`], then combine the scoped reducers so that every dispatch
/// reaches every slice.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a slice of a larger state.
///
/// This allows a reducer written against a slice type to participate in a
/// composed application reducer: the slice is extracted, reduced, and written
/// back. The rest of the parent state is untouched by construction.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The slice type (a field of `S`)
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use uniflow_core::reducer::Reducer;
/// use uniflow_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct AuthState { authenticated: bool }
///
/// #[derive(Clone, Default)]
/// struct AppState { auth: AuthState }
///
/// #[derive(Clone)]
/// enum AppAction { Login, Logout }
///
/// struct AuthReducer;
///
/// impl Reducer for AuthReducer {
///     type State = AuthState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut AuthState, action: AppAction, _env: &()) {
///         match action {
///             AppAction::Login => state.authenticated = true,
///             AppAction::Logout => state.authenticated = false,
///         }
///     }
/// }
///
/// let scoped = scope_reducer(
///     AuthReducer,
///     |app: &AppState| &app.auth,
///     |app: &mut AppState, auth| app.auth = auth,
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, AppAction::Login, &());
/// assert!(state.auth.authenticated);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_slice: fn(&S) -> &SubS,
    set_slice: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_slice,
        set_slice,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_slice: fn(&S) -> &SubS,
    set_slice: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        // Extract the slice, reduce a copy, write it back
        let mut slice = (self.get_slice)(state).clone();
        self.reducer.reduce(&mut slice, action, env);
        (self.set_slice)(state, slice);
    }
}
