//! # Uniflow Core
//!
//! Core traits and types for the Uniflow state-container architecture.
//!
//! This crate provides the fundamental abstractions for building small,
//! predictable state machines using the Reducer pattern with unidirectional
//! data flow.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned by the store
//! - **Action**: All possible inputs to a reducer, one enum variant per kind
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - No hidden I/O in reducers
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use uniflow_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for state-transition logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
///
/// They contain all state-transition logic and are deterministic and
/// testable. An action the reducer does not recognize must leave the state
/// unchanged (identity), which is what makes slice reducers composable: every
/// reducer sees every action and reacts only to its own vocabulary.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Purity
    ///
    /// `reduce` must be deterministic given `(state, action, env)` and must
    /// not perform I/O beyond what the environment explicitly provides
    /// (e.g. reading an injected clock). The store relies on this: a
    /// dispatch either commits the fully reduced state or nothing at all.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for AuthReducer {
    ///     type State = AuthState;
    ///     type Action = AppAction;
    ///     type Environment = AppEnvironment<SystemClock>;
    ///
    ///     fn reduce(&self, state: &mut AuthState, action: AppAction, env: &Self::Environment) {
    ///         match action {
    ///             AppAction::Login => state.authenticated = true,
    ///             AppAction::Logout => state.authenticated = false,
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// Mutates `state` in place to produce the next state. The store
        /// always hands the reducer a scratch copy of the committed state,
        /// so an unrecognized action handled as a no-op yields an identity
        /// transition.
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter of a [`reducer::Reducer`].
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use uniflow_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// ```
    pub trait Clock {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
