//! Taskdeck: a single-screen to-do list.
//!
//! One text field stages a task title, one submit control adds a new
//! task or applies an in-place edit, and every listed task carries edit
//! and delete actions. All state lives in one store for the lifetime of
//! the process; there is no persistence, no networking, no second
//! screen.
//!
//! The crate follows the Taskdeck architecture: domain state and
//! actions in [`types`], a validating reducer in [`reducer`], typed
//! rejections in [`error`], a render projection in [`view`], and the
//! terminal frontend in [`tui`].
//!
//! # Quick Start
//!
//! ```
//! use taskdeck_app::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use taskdeck_core::environment::CountingIdGenerator;
//! use taskdeck_runtime::Store;
//!
//! # fn example() -> Result<(), taskdeck_app::TodoError> {
//! let env = TodoEnvironment::new(CountingIdGenerator::new());
//! let mut store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::SetDraft {
//!     text: "Buy milk".to_string(),
//! })?;
//! store.send(TodoAction::Submit)?;
//!
//! assert_eq!(store.state(|s| s.count()), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod reducer;
pub mod tui;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use tui::{Screen, ScreenCommand, TodoStore};
pub use types::{Mode, Task, TaskId, TodoAction, TodoState};
pub use view::{TaskRow, ViewModel};
