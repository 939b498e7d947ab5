//! # Taskdeck Runtime
//!
//! Runtime implementation for the Taskdeck architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and executes effects
//! - **Run-to-completion loop**: actions produced by effects are processed
//!   before `send` returns, so every interaction is atomic from the
//!   caller's point of view
//!
//! The store is synchronous and single-threaded. It owns its state
//! directly: no locks, no channels, no async runtime. One caller sends
//! one action at a time and observes the fully settled state afterwards.
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use std::collections::VecDeque;

    use taskdeck_core::{effect::Effect, reducer::Reducer};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned directly, mutated in place)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(
    ///     TodoState::default(),
    ///     TodoReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(TodoAction::Submit)?;
    /// let count = store.state(TodoState::count);
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
        R::Error: std::fmt::Display,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
            }
        }

        /// Send an action through the reducer and run its effects
        ///
        /// The action is reduced immediately. Any actions produced by
        /// [`Effect::Dispatch`] are queued and reduced in order until the
        /// queue is empty, so the state is fully settled when this returns.
        ///
        /// # Errors
        ///
        /// Returns the reducer's error unchanged when it rejects an action.
        /// Reducers validate before they mutate, so the rejected action has
        /// not touched state; any feedback actions still queued behind it
        /// are discarded.
        pub fn send(&mut self, action: A) -> Result<(), R::Error> {
            let mut queue = VecDeque::new();
            queue.push_back(action);

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, "Processing action");

                let effects =
                    match self
                        .reducer
                        .reduce(&mut self.state, action, &self.environment)
                    {
                        Ok(effects) => effects,
                        Err(error) => {
                            tracing::warn!(%error, "Action rejected");
                            return Err(error);
                        },
                    };

                for effect in effects {
                    match effect {
                        Effect::None => {},
                        Effect::Dispatch(action) => queue.push_back(*action),
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure so the caller never holds a
        /// reference across a `send`:
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len());
        /// ```
        ///
        /// # Arguments
        ///
        /// - `f`: Closure that receives a reference to state and returns a value
        ///
        /// # Returns
        ///
        /// The value returned by the closure
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }
    }
}

pub use store::Store;
