//! Typed errors for the todo screen.

use thiserror::Error;

use crate::types::TaskId;

/// Errors a todo action can be rejected with
///
/// Both are recoverable: the action is dropped, state is left untouched,
/// and the presentation layer decides how to surface the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Submit was attempted with an empty draft
    #[error("Please enter your todo")]
    EmptyTitle,

    /// The referenced task is not on the list
    ///
    /// The id rides along for logging; the displayed message is fixed.
    #[error("Todo not found")]
    NotFound {
        /// Id that failed to resolve
        id: TaskId,
    },
}
