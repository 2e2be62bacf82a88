//! Browser state and the input-mode state machine.
//!
//! The browser is a pure reducer: [`step`] takes the current [`BrowserState`]
//! and one [`Event`] and returns the next state, its rendered [`Frame`] and an
//! optional [`Effect`] for the host loop. Nothing here touches the terminal.
//!
//! Keys are routed by [`Mode`]. In [`Mode::Scroll`] keys are looked up in the
//! [`KeyBindings`]; in [`Mode::FilterEntry`] everything except commit and
//! cancel edits the filter expression.

use super::details::DetailPane;
use super::events::{Event, Key};
use super::frame::{clip_to_width, Frame, FrameLine, LineKind};
use super::input::TextInput;
use super::layout::PaneSplit;
use super::table::TableModel;
use super::theme::RenderConfig;
use crate::error::FindError;
use crate::model::{Match, MatchStore};
use std::sync::Arc;

/// Input routing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys navigate the list
    #[default]
    Scroll,
    /// Keys edit the filter expression
    FilterEntry,
}

/// Side effect requested from the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop delivering events and exit
    Quit,
    /// Start blinking the terminal cursor on the filter line
    CursorBlink,
}

/// Commands available while scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToStart,
    JumpToEnd,
    EnterSearch,
    RepeatSearchForward,
    RepeatSearchBackward,
    ToggleDetails,
}

/// Key to action table for [`Mode::Scroll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(Key, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Key::Char('q'), Action::Quit),
                (Key::Up, Action::MoveUp),
                (Key::Char('k'), Action::MoveUp),
                (Key::Down, Action::MoveDown),
                (Key::Char('j'), Action::MoveDown),
                (Key::Char('g'), Action::JumpToStart),
                (Key::Home, Action::JumpToStart),
                (Key::Char('G'), Action::JumpToEnd),
                (Key::End, Action::JumpToEnd),
                (Key::Char('w'), Action::PageUp),
                (Key::PageUp, Action::PageUp),
                (Key::Char('z'), Action::PageDown),
                (Key::PageDown, Action::PageDown),
                (Key::Char('/'), Action::EnterSearch),
                (Key::Char('n'), Action::RepeatSearchForward),
                (Key::Char('N'), Action::RepeatSearchBackward),
                (Key::Char('d'), Action::ToggleDetails),
                (Key::Tab, Action::ToggleDetails),
                (Key::Enter, Action::ToggleDetails),
            ],
        }
    }
}

impl KeyBindings {
    pub fn resolve(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }

    /// Bind `key` to `action`, replacing any existing binding for that key.
    #[must_use]
    pub fn bind(mut self, key: Key, action: Action) -> Self {
        self.bindings.retain(|(bound, _)| *bound != key);
        self.bindings.push((key, action));
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum SearchDirection {
    Forward,
    Backward,
}

/// Complete state of a browsing session.
#[derive(Debug, Clone)]
pub struct BrowserState {
    table: TableModel,
    details: DetailPane,
    bindings: Arc<KeyBindings>,
    mode: Mode,
    filter: TextInput,
    search_expression: String,
    show_details: bool,
    height: usize,
    width: usize,
    status: Option<String>,
}

/// Result of feeding one event to the browser.
#[derive(Debug, Clone)]
pub struct Step {
    pub state: BrowserState,
    pub frame: Frame,
    pub effect: Option<Effect>,
}

/// Apply one event and render the resulting state.
pub fn step(state: BrowserState, event: &Event) -> Step {
    let (state, effect) = state.update(event);
    let frame = state.view();
    Step {
        state,
        frame,
        effect,
    }
}

impl BrowserState {
    pub fn new(store: Arc<MatchStore>, config: RenderConfig) -> Self {
        let config = Arc::new(config);
        Self {
            table: TableModel::new(store, Arc::clone(&config)),
            details: DetailPane::new(config),
            bindings: Arc::new(KeyBindings::default()),
            mode: Mode::Scroll,
            filter: TextInput::filter(),
            search_expression: String::new(),
            show_details: false,
            height: 0,
            width: 0,
            status: None,
        }
    }

    /// Start with the detail pane open or closed.
    #[must_use]
    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self.apply_layout()
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = Arc::new(bindings);
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table.selected_index()
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.table.selected_match()
    }

    /// Last committed search expression, reused by repeat-search keys.
    pub fn search_expression(&self) -> &str {
        &self.search_expression
    }

    pub const fn show_details(&self) -> bool {
        self.show_details
    }

    /// Pending user-visible message, e.g. a failed search.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub const fn table(&self) -> &TableModel {
        &self.table
    }

    pub const fn details(&self) -> &DetailPane {
        &self.details
    }

    pub const fn filter(&self) -> &TextInput {
        &self.filter
    }

    pub fn split(&self) -> PaneSplit {
        PaneSplit::compute(self.height, self.mode, self.show_details)
    }

    // ------------------------------------------------------------------
    // Event handling
    // ------------------------------------------------------------------

    /// Apply one event, returning the next state and any requested effect.
    #[must_use]
    pub fn update(self, event: &Event) -> (Self, Option<Effect>) {
        match *event {
            Event::Resize { width, height } => {
                (self.resize(usize::from(width), usize::from(height)), None)
            }
            Event::Key(key) => self.handle_key(key),
        }
    }

    fn resize(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self.apply_layout()
    }

    fn handle_key(mut self, key: Key) -> (Self, Option<Effect>) {
        self.status = None;

        if key == Key::Ctrl('c') {
            return (self, Some(Effect::Quit));
        }

        match self.mode {
            Mode::Scroll => self.handle_scroll_key(key),
            Mode::FilterEntry => self.handle_filter_key(key),
        }
    }

    fn handle_scroll_key(mut self, key: Key) -> (Self, Option<Effect>) {
        let Some(action) = self.bindings.resolve(key) else {
            // keeps the widget's state consistent; it is blurred, so nothing changes
            self.filter = self.filter.handle_key(key);
            return (self, None);
        };

        let next = match action {
            Action::Quit => return (self, Some(Effect::Quit)),
            Action::MoveUp => self.map_table(TableModel::move_up),
            Action::MoveDown => self.map_table(TableModel::move_down),
            Action::PageUp => self.map_table(TableModel::page_up),
            Action::PageDown => self.map_table(TableModel::page_down),
            Action::JumpToStart => self.map_table(TableModel::jump_to_start),
            Action::JumpToEnd => self.map_table(TableModel::jump_to_end),
            Action::EnterSearch => {
                tracing::debug!("entering filter mode");
                self.mode = Mode::FilterEntry;
                self.filter = TextInput::filter().focus();
                return (self.apply_layout(), Some(Effect::CursorBlink));
            }
            Action::RepeatSearchForward => self.repeat_search(SearchDirection::Forward),
            Action::RepeatSearchBackward => self.repeat_search(SearchDirection::Backward),
            Action::ToggleDetails => {
                self.show_details = !self.show_details;
                tracing::debug!(show_details = self.show_details, "toggled detail pane");
                self.apply_layout()
            }
        };

        (next, None)
    }

    fn handle_filter_key(mut self, key: Key) -> (Self, Option<Effect>) {
        match key {
            Key::Enter => {
                let expr = self.filter.value().to_string();
                match self.table.find(&expr) {
                    Ok(table) => {
                        tracing::debug!(expression = %expr, row = ?table.selected_index(), "search committed");
                        self.table = table;
                        self.search_expression = expr;
                        self = self.leave_filter_mode();
                    }
                    Err(err) => self = self.report_not_found(&err),
                }
                (self, None)
            }
            Key::Esc => {
                tracing::debug!("filter entry cancelled");
                (self.leave_filter_mode(), None)
            }
            other => {
                self.filter = self.filter.handle_key(other);
                (self, None)
            }
        }
    }

    fn leave_filter_mode(mut self) -> Self {
        self.filter = self.filter.blur();
        self.mode = Mode::Scroll;
        self.apply_layout()
    }

    fn repeat_search(mut self, direction: SearchDirection) -> Self {
        if self.search_expression.is_empty() {
            return self;
        }

        let found = match direction {
            SearchDirection::Forward => self.table.find_next(&self.search_expression),
            SearchDirection::Backward => self.table.find_previous(&self.search_expression),
        };

        match found {
            Ok(table) => {
                tracing::debug!(row = ?table.selected_index(), ?direction, "repeat search hit");
                self.table = table;
                self
            }
            Err(err) => self.report_not_found(&err),
        }
    }

    fn report_not_found(mut self, err: &FindError) -> Self {
        tracing::debug!("{err}");
        self.status = Some(format!("no match for {:?}", err.expression()));
        self
    }

    fn map_table(mut self, f: impl FnOnce(TableModel) -> TableModel) -> Self {
        self.table = f(self.table);
        self
    }

    /// Recompute the pane split and hand the new sizes to the table and detail pane.
    fn apply_layout(mut self) -> Self {
        let split = self.split();
        tracing::debug!(
            height = self.height,
            table = split.table,
            filter = split.filter,
            details = split.details,
            "layout"
        );
        self.table = self.table.set_height(split.table).set_width(self.width);
        self.details = self.details.set_height(split.details).set_width(self.width);
        self
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Table, then the filter line while typing, then the detail pane.
    pub fn view(&self) -> Frame {
        let split = self.split();
        let mut lines = self.table.render();
        let mut cursor = None;

        if split.filter > 0 {
            let row = lines.len();
            lines.push(FrameLine::new(
                clip_to_width(&self.filter.render(), self.width),
                LineKind::Filter,
            ));
            if self.filter.is_focused() {
                cursor = Some((
                    u16::try_from(self.filter.cursor_column()).unwrap_or(u16::MAX),
                    u16::try_from(row).unwrap_or(u16::MAX),
                ));
            }
        }

        lines.extend(self.details.render(self.table.selected_match()));

        Frame {
            lines,
            cursor,
            status: self.status.clone(),
        }
    }
}
