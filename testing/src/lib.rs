//! # Taskdeck Testing
//!
//! Testing utilities and helpers for the Taskdeck architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use taskdeck_runtime::Store;
//! use taskdeck_testing::test_ids;
//!
//! #[test]
//! fn test_submit_flow() {
//!     let env = TodoEnvironment::new(test_ids());
//!     let mut store = Store::new(TodoState::default(), TodoReducer::new(), env);
//!
//!     store.send(TodoAction::SetDraft { text: "Buy milk".into() }).unwrap();
//!     store.send(TodoAction::Submit).unwrap();
//!
//!     assert_eq!(store.state(|s| s.tasks.len()), 1);
//! }
//! ```

use taskdeck_core::environment::IdGenerator;


/// Mock implementations of Environment traits
///
/// Mock implementations for testing:
/// - `SequentialIdGenerator`: Predictable ids, with a count of how many
///   were handed out
pub mod mocks {
    use std::cell::Cell;

    use super::IdGenerator;

    /// Sequential id generator for deterministic tests
    ///
    /// Hands out consecutive ids from a known starting point, so tests can
    /// assert exact id values. Also counts how many ids were drawn, which
    /// lets tests verify that rejected actions never consumed one.
    ///
    /// # Example
    ///
    /// ```
    /// use taskdeck_core::environment::IdGenerator;
    /// use taskdeck_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::starting_at(100);
    /// assert_eq!(ids.next_id(), 100);
    /// assert_eq!(ids.next_id(), 101);
    /// assert_eq!(ids.issued(), 2);
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: Cell<u64>,
        issued: Cell<u64>,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: Cell::new(first),
                issued: Cell::new(0),
            }
        }

        /// Number of ids handed out so far
        #[must_use]
        pub fn issued(&self) -> u64 {
            self.issued.get()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            let id = self.next.get();
            self.next.set(id + 1);
            self.issued.set(self.issued.get() + 1);
            id
        }
    }

    /// Create a default sequential generator for tests (ids start at 100)
    ///
    /// Starting at 100 keeps generated ids visually distinct from the
    /// low-numbered ids fixtures tend to use.
    #[must_use]
    pub const fn test_ids() -> SequentialIdGenerator {
        SequentialIdGenerator::starting_at(100)
    }
}

// Re-export commonly used items
pub use mocks::{SequentialIdGenerator, test_ids};
pub use reducer_test::{ReducerTest, assertions};
