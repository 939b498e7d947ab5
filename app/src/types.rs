//! Domain types for the todo screen.
//!
//! The whole screen is one aggregate: the list of tasks, the text staged
//! in the input field, and the mode deciding what the next submit does.

/// Unique identifier for a task
///
/// Ids are assigned once at creation from a monotonic counter and are
/// never reused within a session, even after the task is deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task on the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Title of the task
    pub title: String,
    /// Whether the task is completed
    pub completed: bool,
}

impl Task {
    /// Creates a new task, initially not completed
    #[must_use]
    pub const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// What the next submit does
///
/// The screen is always in exactly one of these modes. `Editing` carries
/// the id of the task whose title the next submit rewrites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Submit appends a new task
    #[default]
    Adding,
    /// Submit rewrites the title of the referenced task
    Editing(TaskId),
}

/// State of the todo screen
///
/// Tasks are kept in insertion order, which is also display order.
/// Two invariants hold between actions: task ids are unique, and
/// `Mode::Editing` always references a task that is on the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Text staged in the input field (always present, possibly empty)
    pub draft: String,
    /// What the next submit does
    pub mode: Mode,
}

impl TodoState {
    /// Creates an empty state in add mode
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
            mode: Mode::Adding,
        }
    }

    /// Creates a state holding the given tasks, in add mode with an
    /// empty draft
    #[must_use]
    pub const fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            draft: String::new(),
            mode: Mode::Adding,
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns a task by id
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Checks whether the next submit applies an edit
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    /// Returns the id of the task under edit, if any
    #[must_use]
    pub const fn editing_id(&self) -> Option<TaskId> {
        match self.mode {
            Mode::Editing(id) => Some(id),
            Mode::Adding => None,
        }
    }
}

/// User intents for the todo screen
///
/// Every interaction the screen supports is one of these actions. The
/// reducer validates each against current state: `SetDraft` and `Delete`
/// always succeed, `Submit` and `StartEdit` can be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Replace the staged input text
    SetDraft {
        /// Full contents of the input field
        text: String,
    },

    /// Commit the draft: append a new task, or apply the pending edit
    Submit,

    /// Begin editing a task, staging its title in the input field
    StartEdit {
        /// Task to edit
        id: TaskId,
    },

    /// Remove a task from the list
    Delete {
        /// Task to remove
        id: TaskId,
    },
}
