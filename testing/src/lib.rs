//! # Uniflow Testing
//!
//! Testing utilities and helpers for the Uniflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Algebraic property assertions (inverse pairs, involutions, identity)
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(CounterReducer)
//!     .with_env(AppEnvironment::new(test_clock()))
//!     .given_state(CounterState::default())
//!     .when_action(AppAction::Increment)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use uniflow_core::environment::Clock;


/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use uniflow_testing::mocks::FixedClock;
    /// use uniflow_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Algebraic property assertions for reducers
///
/// These encode the laws a well-behaved reducer satisfies: an unrecognized
/// action is identity, paired actions undo each other, and a toggle applied
/// twice lands where it started.
pub mod properties {
    use uniflow_core::reducer::Reducer;

    /// Assert that reducing `action` leaves `state` unchanged
    ///
    /// # Panics
    ///
    /// Panics if the reduced state differs from the original.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_identity<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
        env: &R::Environment,
    ) where
        R: Reducer,
        R::State: Clone + PartialEq + std::fmt::Debug,
    {
        let mut reduced = state.clone();
        reducer.reduce(&mut reduced, action, env);
        assert_eq!(
            &reduced, state,
            "expected identity transition, but state changed"
        );
    }

    /// Assert that `forward` followed by `backward` returns to the original state
    ///
    /// # Panics
    ///
    /// Panics if the round trip does not restore the original state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_inverse_pair<R>(
        reducer: &R,
        state: &R::State,
        forward: R::Action,
        backward: R::Action,
        env: &R::Environment,
    ) where
        R: Reducer,
        R::State: Clone + PartialEq + std::fmt::Debug,
    {
        let mut reduced = state.clone();
        reducer.reduce(&mut reduced, forward, env);
        reducer.reduce(&mut reduced, backward, env);
        assert_eq!(
            &reduced, state,
            "expected inverse pair to restore the original state"
        );
    }

    /// Assert that applying `action` twice returns to the original state
    ///
    /// # Panics
    ///
    /// Panics if the double application does not restore the original state.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_involution<R>(
        reducer: &R,
        state: &R::State,
        action: R::Action,
        env: &R::Environment,
    ) where
        R: Reducer,
        R::State: Clone + PartialEq + std::fmt::Debug,
        R::Action: Clone,
    {
        let mut reduced = state.clone();
        reducer.reduce(&mut reduced, action.clone(), env);
        reducer.reduce(&mut reduced, action, env);
        assert_eq!(
            &reduced, state,
            "expected double application to restore the original state"
        );
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, test_clock};
pub use reducer_test::ReducerTest;
