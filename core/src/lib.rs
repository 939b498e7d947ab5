//! # Taskdeck Core
//!
//! Core traits and types for the Taskdeck architecture.
//!
//! This crate provides the fundamental abstractions for building interactive,
//! single-screen applications around the Reducer pattern with unidirectional
//! data flow.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (user intents)
//! - **Reducer**: Fallible pure function `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: Follow-up action descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Validate Before Mutate (an `Err` means state is untouched)
//! - Dependency Injection via Environment
//! - Typed domain errors surfaced to the caller, never swallowed
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_core::*;
//!
//! // Define your state
//! #[derive(Clone, Debug)]
//! struct ListState {
//!     entries: Vec<Entry>,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum ListAction {
//!     Append { title: String },
//!     Remove { id: EntryId },
//! }
//!
//! // Implement the reducer
//! impl Reducer for ListReducer {
//!     type State = ListState;
//!     type Action = ListAction;
//!     type Environment = ListEnvironment;
//!     type Error = ListError;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ListState,
//!         action: ListAction,
//!         env: &ListEnvironment,
//!     ) -> Result<Effects<ListAction>, ListError> {
//!         // Business logic goes here
//!         Ok(smallvec![Effect::None])
//!     }
//! }
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

pub use effect::{Effect, Effects};
pub use reducer::Reducer;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → Result<Effects, Error>`
///
/// They contain all business logic and are deterministic and testable.
/// A reducer validates an action against current state before touching it,
/// so a rejected action leaves state exactly as it was.
pub mod reducer {
    use super::effect::Effects;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: The domain error returned when an action is rejected
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for ListReducer {
    ///     type State = ListState;
    ///     type Action = ListAction;
    ///     type Environment = ListEnvironment;
    ///     type Error = ListError;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut ListState,
    ///         action: ListAction,
    ///         env: &ListEnvironment,
    ///     ) -> Result<Effects<ListAction>, ListError> {
    ///         match action {
    ///             ListAction::Append { title } => {
    ///                 // Business logic here
    ///                 Ok(smallvec![Effect::None])
    ///             }
    ///             _ => Ok(smallvec![Effect::None]),
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

        /// The domain error type for rejected actions
        type Error;

        /// Reduce an action into state changes and follow-up effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Validation comes first: when this returns `Err`, the state has
        /// not been modified in any field.
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Errors
        ///
        /// Returns the domain error describing why the action was rejected.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<Effects<Self::Action>, Self::Error>;
    }
}

/// Effect module - Follow-up action descriptions
///
/// Effects describe work the runtime performs after the reducer returns.
/// They are values (not execution). In a synchronous store the only work
/// an effect can describe is feeding another action back into the reducer,
/// which the store does before `send` returns.
pub mod effect {
    use smallvec::SmallVec;

    /// Effect type - describes follow-up work produced by a reducer
    ///
    /// Effects are NOT executed by the reducer. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store runtime
    /// within the same interaction.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        ///
        /// The store drains dispatched actions to completion before `send`
        /// returns, so the feedback stays within one interaction.
        Dispatch(Box<Action>),
    }

    /// Inline collection of effects returned by a single reduce call
    ///
    /// Reducers rarely produce more than a handful of effects, so the
    /// collection stays on the stack up to four entries.
    pub type Effects<Action> = SmallVec<[Effect<Action>; 4]>;

    impl<Action> Effect<Action> {
        /// Wrap an action for dispatch back into the reducer
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Check whether this effect performs no work
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. The one dependency an in-memory list
/// domain has is id assignment, so that is the trait defined here,
/// together with its production implementation.
pub mod environment {
    use std::cell::Cell;

    /// `IdGenerator` trait - abstracts id assignment for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_core::environment::{CountingIdGenerator, IdGenerator};
    ///
    /// // Production - monotonic counter
    /// let ids = CountingIdGenerator::new();
    /// assert_eq!(ids.next_id(), 1);
    /// assert_eq!(ids.next_id(), 2);
    /// ```
    pub trait IdGenerator {
        /// Produce the next id
        ///
        /// Every call returns a value this generator has never returned
        /// before. Ids are never reused, regardless of what happens to the
        /// entities they were assigned to.
        fn next_id(&self) -> u64;
    }

    /// Monotonic counter-backed id generator
    ///
    /// Hands out ids in increasing order starting from a configurable
    /// floor. The counter only moves forward, so deleting an entity never
    /// frees its id for reuse within the session.
    #[derive(Debug)]
    pub struct CountingIdGenerator {
        next: Cell<u64>,
    }

    impl CountingIdGenerator {
        /// Create a generator whose first id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self { next: Cell::new(1) }
        }

        /// Create a generator whose first id is `last + 1`
        ///
        /// Used when some ids are already taken at startup (seed data).
        #[must_use]
        pub const fn starting_after(last: u64) -> Self {
            Self {
                next: Cell::new(last + 1),
            }
        }
    }

    impl Default for CountingIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for CountingIdGenerator {
        fn next_id(&self) -> u64 {
            let id = self.next.get();
            self.next.set(id + 1);
            id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{CountingIdGenerator, IdGenerator};

    #[test]
    fn counting_generator_is_monotonic() {
        let ids = CountingIdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn counting_generator_starts_after_floor() {
        let ids = CountingIdGenerator::starting_after(41);
        assert_eq!(ids.next_id(), 42);
        assert_eq!(ids.next_id(), 43);
    }

    #[test]
    fn dispatch_boxes_the_action() {
        let effect = Effect::dispatch(7_u32);
        assert_eq!(effect, Effect::Dispatch(Box::new(7)));
        assert!(!effect.is_none());
        assert!(Effect::<u32>::None.is_none());
    }
}
