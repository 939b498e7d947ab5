//! Terminal frontend for the todo screen.
//!
//! One screen: the input field, the submit label, the task list, and an
//! error modal. Key events map to [`ScreenCommand`]s through a pure
//! function (unit-tested below); commands turn into store actions. A
//! rejected action becomes a pending alert the modal displays until any
//! key dismisses it, which is the blocking-alert behavior of the screen.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use taskdeck_core::environment::CountingIdGenerator;
use taskdeck_runtime::Store;

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TaskId, TodoAction, TodoState};
use crate::view::{ALERT_TITLE, HEADER, PLACEHOLDER, ViewModel};

/// The production store: counting id generator, todo reducer
pub type TodoStore = Store<
    TodoState,
    TodoAction,
    TodoEnvironment<CountingIdGenerator>,
    TodoReducer<CountingIdGenerator>,
>;

/// What a key press asks the screen to do
///
/// Produced by [`map_key`], consumed by [`Screen::apply`]. Keeping the
/// mapping a pure function keeps the key bindings testable without a
/// terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenCommand {
    /// Append a character to the draft
    Insert(char),
    /// Remove the last character of the draft
    Backspace,
    /// Commit the draft (add or edit, decided by the store)
    Submit,
    /// Move the row selection up
    SelectUp,
    /// Move the row selection down
    SelectDown,
    /// Start editing the selected row
    EditSelected,
    /// Delete the selected row
    DeleteSelected,
    /// Close the error modal
    DismissAlert,
    /// Leave the application
    Quit,
    /// Key has no binding
    Ignore,
}

/// Maps a key press to a screen command
///
/// While the alert modal is up, every key dismisses it and does nothing
/// else.
#[must_use]
pub fn map_key(key: KeyEvent, alert_shown: bool) -> ScreenCommand {
    if alert_shown {
        return ScreenCommand::DismissAlert;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => ScreenCommand::Quit,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => ScreenCommand::EditSelected,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::Delete, _) => {
            ScreenCommand::DeleteSelected
        },
        (KeyCode::Enter, _) => ScreenCommand::Submit,
        (KeyCode::Up, _) => ScreenCommand::SelectUp,
        (KeyCode::Down, _) => ScreenCommand::SelectDown,
        (KeyCode::Backspace, _) => ScreenCommand::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            ScreenCommand::Insert(c)
        },
        _ => ScreenCommand::Ignore,
    }
}

/// The todo screen
///
/// Owns the store, the row selection, and the pending alert. The store
/// is the single source of truth for tasks, draft, and mode; the screen
/// keeps only presentation state on top of it.
pub struct Screen {
    store: TodoStore,
    selected: usize,
    alert: Option<String>,
    tick: Duration,
    should_quit: bool,
}

impl Screen {
    /// Creates a screen over the given store
    #[must_use]
    pub const fn new(store: TodoStore, tick: Duration) -> Self {
        Self {
            store,
            selected: 0,
            alert: None,
            tick,
            should_quit: false,
        }
    }

    /// Runs the screen until the user quits
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup, drawing, or event polling
    /// fails. Store rejections never end up here; they become alerts.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let command = map_key(key, self.alert.is_some());
                        self.apply(command);
                    }
                }
            }
        }
    }

    /// Applies a command: sends actions, updates presentation state
    pub fn apply(&mut self, command: ScreenCommand) {
        match command {
            ScreenCommand::Insert(c) => {
                let mut text = self.store.state(|s| s.draft.clone());
                text.push(c);
                self.send(TodoAction::SetDraft { text });
            },
            ScreenCommand::Backspace => {
                let mut text = self.store.state(|s| s.draft.clone());
                if text.pop().is_some() {
                    self.send(TodoAction::SetDraft { text });
                }
            },
            ScreenCommand::Submit => self.send(TodoAction::Submit),
            ScreenCommand::SelectUp => {
                self.selected = self.selected.saturating_sub(1);
            },
            ScreenCommand::SelectDown => {
                let last = self.store.state(TodoState::count).saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            },
            ScreenCommand::EditSelected => {
                if let Some(id) = self.selected_id() {
                    self.send(TodoAction::StartEdit { id });
                }
            },
            ScreenCommand::DeleteSelected => {
                if let Some(id) = self.selected_id() {
                    self.send(TodoAction::Delete { id });
                    self.clamp_selection();
                }
            },
            ScreenCommand::DismissAlert => self.alert = None,
            ScreenCommand::Quit => self.should_quit = true,
            ScreenCommand::Ignore => {},
        }
    }

    /// Sends an action; a rejection becomes the pending alert
    fn send(&mut self, action: TodoAction) {
        if let Err(error) = self.store.send(action) {
            self.alert = Some(error.to_string());
        }
    }

    /// Pending alert message, if a rejected action is being displayed
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Currently selected row index
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Reads a projection of store state (test seam)
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.store.state(f)
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.store
            .state(|s| s.tasks.get(self.selected).map(|t| t.id))
    }

    fn clamp_selection(&mut self) {
        let last = self.store.state(TodoState::count).saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    fn draw(&self, frame: &mut Frame) {
        let view = self.store.state(ViewModel::project);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Paragraph::new(HEADER)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        frame.render_widget(input_field(&view), chunks[1]);

        let button = Paragraph::new(view.button_label())
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(button, chunks[2]);

        let items: Vec<ListItem> = view
            .rows
            .iter()
            .map(|row| {
                let marker = if row.completed { "[x] " } else { "[ ] " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::DarkGray)),
                    Span::raw(row.title.clone()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut list_state = ListState::default();
        if !view.rows.is_empty() {
            list_state.select(Some(self.selected.min(view.rows.len() - 1)));
        }
        frame.render_stateful_widget(list, chunks[3], &mut list_state);

        let hints = Paragraph::new("Enter submit | Ctrl-E edit | Ctrl-D delete | Esc quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, chunks[4]);

        if let Some(message) = &self.alert {
            draw_alert(frame, message);
        }
    }
}

/// Renders the input field: the draft with a block cursor, or the
/// placeholder hint while empty
fn input_field(view: &ViewModel) -> Paragraph<'_> {
    let content = if view.draft.is_empty() {
        Line::from(vec![
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(view.draft.as_str()),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
        ])
    };

    Paragraph::new(content).block(Block::default().borders(Borders::ALL))
}

/// Draws the blocking error modal over the screen
fn draw_alert(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 5, frame.area());

    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(ALERT_TITLE)
            .style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

/// Centers a fixed-height, percentage-width rectangle inside `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
