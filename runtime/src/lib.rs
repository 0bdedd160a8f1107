//! # Uniflow Runtime
//!
//! Runtime implementation for the Uniflow architecture.
//!
//! This crate provides the [`Store`]: the single owner of application state,
//! coordinating reducer execution and subscriber notification.
//!
//! ## Core Components
//!
//! - **Store**: owns the current state, applies the reducer on dispatch, and
//!   notifies subscribers after every committed change
//! - **Subscription**: handle returned by [`Store::subscribe`] that removes
//!   the listener when consumed
//! - **`StoreError`**: dispatch failures (currently only re-entrancy)
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! let subscription = store.subscribe(|state| println!("{state:?}"));
//!
//! store.dispatch(Action::DoSomething)?;
//!
//! let value = store.state(|s| s.some_field);
//! subscription.unsubscribe();
//! ```
//!
//! ## Threading
//!
//! The store is synchronous and single-threaded by design: `dispatch` runs
//! the reducer and every subscriber within the calling invocation, with no
//! suspension and no background work. The type is intentionally not `Send`;
//! a multi-threaded embedding must wrap it behind its own serialization
//! (e.g. a mutex owned by one thread driving the UI).

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use uniflow_core::reducer::Reducer;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// A dispatch was issued while another dispatch was in flight
        ///
        /// Only one dispatch may run at a time: a reducer or a subscriber
        /// calling back into `dispatch` would observe state mid-transition,
        /// so the store rejects the nested call and leaves its own state
        /// untouched.
        #[error("re-entrant dispatch: a dispatch is already in progress")]
        ReentrantDispatch,
    }
}

pub use error::StoreError;

/// Boxed subscriber callback, invoked with the freshly committed state.
type Listener<S> = Box<dyn FnMut(&S)>;

struct SubscriberEntry<S> {
    id: u64,
    listener: Rc<RefCell<Listener<S>>>,
}

type SubscriberList<S> = Rc<RefCell<Vec<SubscriberEntry<S>>>>;

/// Handle returned by [`Store::subscribe`]
///
/// Consuming the handle with [`Subscription::unsubscribe`] removes the
/// listener; merely dropping it leaves the listener registered for the
/// lifetime of the store, matching the semantics of an ignored unsubscribe
/// function.
#[must_use = "dropping the handle without calling unsubscribe leaves the listener registered"]
pub struct Subscription<S> {
    subscribers: Weak<RefCell<Vec<SubscriberEntry<S>>>>,
    id: u64,
}

impl<S> Subscription<S> {
    /// Remove the associated listener from the store
    ///
    /// A listener removed before a dispatch is never invoked for that
    /// dispatch. Unsubscribing after the store has been dropped is a no-op.
    pub fn unsubscribe(self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.borrow_mut().retain(|entry| entry.id != self.id);
        }
    }
}

impl<S> std::fmt::Debug for Subscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Resets the dispatch flag when the dispatch scope unwinds.
struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// The Store - single owner of application state
///
/// A `Store` holds one state value, a reducer, and an environment of
/// injected dependencies. All mutation goes through [`Store::dispatch`]:
/// the reducer computes the next state from a scratch copy, the store
/// commits it unconditionally (no equality short-circuit), then notifies
/// every subscriber in registration order with the committed snapshot.
///
/// Consumers read state through [`Store::get_state`] (owned snapshot) or
/// [`Store::state`] (borrowing projection); both are side-effect free.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: RefCell<S>,
    reducer: R,
    environment: E,
    subscribers: SubscriberList<S>,
    next_subscriber_id: Cell<u64>,
    dispatching: Cell<bool>,
    _phantom: std::marker::PhantomData<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
    A: std::fmt::Debug,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The store is an explicit context object: construction and teardown
    /// are controlled by the host application, never by module-load side
    /// effects.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: RefCell::new(initial_state),
            reducer,
            environment,
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_subscriber_id: Cell::new(0),
            dispatching: Cell::new(false),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get an owned snapshot of the current state
    ///
    /// No side effects; the snapshot is detached from the store and never
    /// changes under the caller.
    #[must_use]
    pub fn get_state(&self) -> S {
        self.state.borrow().clone()
    }

    /// Read a projection of the current state without cloning all of it
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state(|s| s.counter.count);
    /// ```
    pub fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Dispatch an action to the store
    ///
    /// 1. Rejects the call if another dispatch is in flight
    /// 2. Runs the reducer on a scratch copy of the current state
    /// 3. Commits the result as a full replacement, even if unchanged
    /// 4. Notifies every subscriber in registration order
    ///
    /// Subscribers run only after the commit; a dispatch that fails leaves
    /// the state exactly as it was and notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReentrantDispatch`] if called from inside a
    /// reducer or a subscriber of this store.
    #[tracing::instrument(skip_all, name = "store_dispatch")]
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self.dispatching.replace(true) {
            tracing::warn!(action = ?action, "re-entrant dispatch rejected");
            return Err(StoreError::ReentrantDispatch);
        }
        let _guard = DispatchGuard(&self.dispatching);

        tracing::debug!(action = ?action, "dispatching");

        // Reduce a scratch copy: the committed state is replaced wholesale,
        // never mutated in place, so an unwinding reducer cannot leave a
        // half-applied transition behind.
        let mut next = self.state.borrow().clone();
        self.reducer.reduce(&mut next, action, &self.environment);
        *self.state.borrow_mut() = next;

        self.notify();
        Ok(())
    }

    /// Register a listener invoked after every committed state change
    ///
    /// Listeners are invoked in registration order with a reference to the
    /// committed snapshot. Registering the same closure twice registers it
    /// twice; both registrations are invoked per dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<S>
    where
        F: FnMut(&S) + 'static,
    {
        let id = self.next_subscriber_id.get();
        self.next_subscriber_id.set(id + 1);
        self.subscribers.borrow_mut().push(SubscriberEntry {
            id,
            listener: Rc::new(RefCell::new(Box::new(listener))),
        });
        tracing::debug!(subscriber_id = id, "subscriber registered");
        Subscription {
            subscribers: Rc::downgrade(&self.subscribers),
            id,
        }
    }

    /// Number of currently registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Invoke subscribers registered at commit time, in registration order.
    ///
    /// The listener set is snapshotted first: a listener registered during
    /// notification runs from the next dispatch on, and a listener removed
    /// during notification is skipped for the remainder of this one.
    fn notify(&self) {
        let entries: Vec<(u64, Rc<RefCell<Listener<S>>>)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.listener)))
            .collect();

        tracing::trace!(subscribers = entries.len(), "notifying subscribers");

        let snapshot = self.state.borrow().clone();
        for (id, listener) in entries {
            let still_subscribed = self
                .subscribers
                .borrow()
                .iter()
                .any(|entry| entry.id == id);
            if still_subscribed {
                (listener.borrow_mut())(&snapshot);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can unwrap
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TestState {
        value: i64,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Set(i64),
        Noop,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut TestState, action: TestAction, _env: &()) {
            if let TestAction::Set(value) = action {
                state.value = value;
            }
        }
    }

    fn test_store() -> Store<TestState, TestAction, (), TestReducer> {
        Store::new(TestState::default(), TestReducer, ())
    }

    #[test]
    fn dispatch_commits_reduced_state() {
        let store = test_store();
        store.dispatch(TestAction::Set(9)).unwrap();
        assert_eq!(store.get_state(), TestState { value: 9 });
    }

    #[test]
    fn state_projection_reads_without_cloning_whole_state() {
        let store = test_store();
        store.dispatch(TestAction::Set(4)).unwrap();
        assert_eq!(store.state(|s| s.value), 4);
    }

    #[test]
    fn identity_action_still_notifies() {
        let store = test_store();
        let hits = Rc::new(Cell::new(0));
        let probe = Rc::clone(&hits);
        let _sub = store.subscribe(move |_| probe.set(probe.get() + 1));

        // No equality short-circuit: a no-op transition is still a commit.
        store.dispatch(TestAction::Noop).unwrap();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let store = test_store();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            let _ = store.subscribe(move |_| order.borrow_mut().push(tag));
        }

        store.dispatch(TestAction::Set(1)).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribed_listener_is_not_invoked() {
        let store = test_store();
        let hits = Rc::new(Cell::new(0));
        let probe = Rc::clone(&hits);
        let subscription = store.subscribe(move |_| probe.set(probe.get() + 1));

        store.dispatch(TestAction::Set(1)).unwrap();
        subscription.unsubscribe();
        store.dispatch(TestAction::Set(2)).unwrap();

        assert_eq!(hits.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn duplicate_subscription_is_invoked_twice() {
        let store = test_store();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let probe = Rc::clone(&hits);
            let _ = store.subscribe(move |_| probe.set(probe.get() + 1));
        }

        store.dispatch(TestAction::Set(1)).unwrap();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn reentrant_dispatch_is_rejected() {
        let store = Rc::new(test_store());
        let inner_result = Rc::new(RefCell::new(None));

        let handle = Rc::clone(&store);
        let probe = Rc::clone(&inner_result);
        let _sub = store.subscribe(move |_| {
            *probe.borrow_mut() = Some(handle.dispatch(TestAction::Set(99)));
        });

        store.dispatch(TestAction::Set(1)).unwrap();

        assert_eq!(*inner_result.borrow(), Some(Err(StoreError::ReentrantDispatch)));
        // The outer dispatch's own result stands; the nested one changed nothing.
        assert_eq!(store.get_state(), TestState { value: 1 });
    }

    #[test]
    fn subscribe_during_notification_takes_effect_next_dispatch() {
        let store = Rc::new(test_store());
        let late_hits = Rc::new(Cell::new(0));

        let handle = Rc::clone(&store);
        let probe = Rc::clone(&late_hits);
        let registered = Rc::new(Cell::new(false));
        let once = Rc::clone(&registered);
        let _sub = store.subscribe(move |_| {
            if !once.replace(true) {
                let probe = Rc::clone(&probe);
                let _ = handle.subscribe(move |_| probe.set(probe.get() + 1));
            }
        });

        store.dispatch(TestAction::Set(1)).unwrap();
        assert_eq!(late_hits.get(), 0);

        store.dispatch(TestAction::Set(2)).unwrap();
        assert_eq!(late_hits.get(), 1);
    }

    #[test]
    fn unsubscribe_during_notification_skips_remaining_invocation() {
        let store = Rc::new(test_store());
        let victim_hits = Rc::new(Cell::new(0));

        let slot: Rc<RefCell<Option<Subscription<TestState>>>> =
            Rc::new(RefCell::new(None));

        let slot_handle = Rc::clone(&slot);
        let _first = store.subscribe(move |_| {
            if let Some(subscription) = slot_handle.borrow_mut().take() {
                subscription.unsubscribe();
            }
        });

        let probe = Rc::clone(&victim_hits);
        let victim = store.subscribe(move |_| probe.set(probe.get() + 1));
        *slot.borrow_mut() = Some(victim);

        store.dispatch(TestAction::Set(1)).unwrap();
        assert_eq!(victim_hits.get(), 0);
    }
}
