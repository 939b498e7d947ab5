//! Reducer logic for the todo screen.
//!
//! Validate first, then mutate: a rejected action returns its error with
//! state exactly as it was, so the store never needs to roll back.

use taskdeck_core::{Effect, Effects, Reducer, environment::IdGenerator, smallvec};

use crate::error::TodoError;
use crate::types::{Mode, Task, TaskId, TodoAction, TodoState};

/// Environment dependencies for the todo reducer
///
/// Generic over the id source so production wires a counting generator
/// and tests inject a sequential one.
#[derive(Debug, Clone)]
pub struct TodoEnvironment<G: IdGenerator> {
    /// Source of ids for newly created tasks
    pub ids: G,
}

impl<G: IdGenerator> TodoEnvironment<G> {
    /// Creates a new environment with the given id source
    #[must_use]
    pub const fn new(ids: G) -> Self {
        Self { ids }
    }
}

/// Reducer for the todo screen
///
/// Generic over the id generator type G to work with any id source.
#[derive(Debug, Clone, Copy)]
pub struct TodoReducer<G> {
    _phantom: std::marker::PhantomData<G>,
}

impl<G> TodoReducer<G> {
    /// Creates a new todo reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<G> Default for TodoReducer<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TodoReducer<G> {
    /// Commits the draft: appends a task or applies the pending edit
    fn submit(
        state: &mut TodoState,
        env: &TodoEnvironment<G>,
    ) -> Result<Effects<TodoAction>, TodoError> {
        // The empty-string check is the whole contract: a draft of blanks
        // is a valid title.
        if state.draft.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        match state.mode {
            Mode::Editing(id) => {
                // StartEdit and Delete keep the mode consistent, but the
                // lookup stays fallible rather than trusting that.
                let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) else {
                    return Err(TodoError::NotFound { id });
                };
                task.title = std::mem::take(&mut state.draft);
                state.mode = Mode::Adding;
            },
            Mode::Adding => {
                let id = TaskId::new(env.ids.next_id());
                let title = std::mem::take(&mut state.draft);
                state.tasks.push(Task::new(id, title));
            },
        }

        Ok(smallvec![Effect::None])
    }

    /// Stages a task's title for editing
    fn start_edit(state: &mut TodoState, id: TaskId) -> Result<Effects<TodoAction>, TodoError> {
        let Some(task) = state.task(id) else {
            return Err(TodoError::NotFound { id });
        };
        let title = task.title.clone();

        state.draft = title;
        state.mode = Mode::Editing(id);
        Ok(smallvec![Effect::None])
    }

    /// Removes a task; removing an absent id is a no-op
    fn delete(state: &mut TodoState, id: TaskId) -> Result<Effects<TodoAction>, TodoError> {
        state.tasks.retain(|t| t.id != id);

        // Dropping the task under edit also ends the edit. The draft is
        // kept: it becomes the staged title for a future add.
        if state.mode == Mode::Editing(id) {
            state.mode = Mode::Adding;
        }

        Ok(smallvec![Effect::None])
    }
}

impl<G: IdGenerator> Reducer for TodoReducer<G> {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment<G>;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Effects<Self::Action>, Self::Error> {
        match action {
            TodoAction::SetDraft { text } => {
                state.draft = text;
                Ok(smallvec![Effect::None])
            },
            TodoAction::Submit => Self::submit(state, env),
            TodoAction::StartEdit { id } => Self::start_edit(state, id),
            TodoAction::Delete { id } => Self::delete(state, id),
        }
    }
}
