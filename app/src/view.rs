//! View model for the todo screen.
//!
//! The renderer never reads `TodoState` directly: it draws an owned
//! snapshot projected here. Rows come out as explicit (id, render data)
//! pairs so every action handler is parameterized by id instead of
//! capturing list positions.

use crate::types::{TaskId, TodoState};

/// Screen header
pub const HEADER: &str = "Todo List";

/// Hint shown in the input field while the draft is empty
pub const PLACEHOLDER: &str = "Enter your todo";

/// Title of the error modal
pub const ALERT_TITLE: &str = "Error";

/// Submit label while adding
const LABEL_ADD: &str = "Add Todo";

/// Submit label while editing
const LABEL_EDIT: &str = "Edit Todo";

/// One task as the renderer sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    /// Id the row's edit/delete handlers act on
    pub id: TaskId,
    /// Displayed title
    pub title: String,
    /// Completion flag (rendered, never toggled here)
    pub completed: bool,
}

/// Owned snapshot of everything the screen draws
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel {
    /// Tasks in display order
    pub rows: Vec<TaskRow>,
    /// Current contents of the input field
    pub draft: String,
    /// Whether the next submit applies an edit
    pub is_editing: bool,
}

impl ViewModel {
    /// Projects the current state into a render snapshot
    #[must_use]
    pub fn project(state: &TodoState) -> Self {
        Self {
            rows: state
                .tasks
                .iter()
                .map(|task| TaskRow {
                    id: task.id,
                    title: task.title.clone(),
                    completed: task.completed,
                })
                .collect(),
            draft: state.draft.clone(),
            is_editing: state.is_editing(),
        }
    }

    /// Label of the submit control for the current mode
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_editing { LABEL_EDIT } else { LABEL_ADD }
    }
}
