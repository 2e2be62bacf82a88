//! Viewport over the match store: selection, windowing, paging and search.
//!
//! Every operation takes the model by value and returns the updated model, so
//! a caller always holds a complete, consistent snapshot. The selected row is
//! kept inside the rendered window after every operation; the window only
//! moves when the selection would otherwise leave it, and then only as far as
//! needed.

use super::frame::{clip_to_width, pad_cell, FrameLine, LineKind};
use super::theme::RenderConfig;
use crate::error::FindError;
use crate::model::{Match, MatchStore};
use std::sync::Arc;

/// Lines taken by the column headings.
const HEADER_LINES: usize = 1;

/// Prefix marking the selected row.
const SELECTED_MARKER: &str = "> ";
const UNSELECTED_MARKER: &str = "  ";

#[derive(Debug, Clone)]
pub struct TableModel {
    store: Arc<MatchStore>,
    config: Arc<RenderConfig>,
    height: usize,
    width: usize,
    first_row_shown: usize,
    row_selected: usize,
}

impl TableModel {
    pub fn new(store: Arc<MatchStore>, config: Arc<RenderConfig>) -> Self {
        Self {
            store,
            config,
            height: 0,
            width: 0,
            first_row_shown: 0,
            row_selected: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of data rows rendered below the header.
    pub const fn window_size(&self) -> usize {
        self.height.saturating_sub(HEADER_LINES)
    }

    /// Index of the first rendered row.
    pub const fn first_row_shown(&self) -> usize {
        self.first_row_shown
    }

    /// Index of the selected row, `None` when there are no rows.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.store.is_empty()).then_some(self.row_selected)
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.store.get(self.row_selected)
    }

    /// Index of the last rendered row position, `None` for a zero-size window.
    fn window_end(&self) -> Option<usize> {
        match self.window_size() {
            0 => None,
            size => Some(self.first_row_shown + size - 1),
        }
    }

    // ------------------------------------------------------------------
    // Dimensions
    // ------------------------------------------------------------------

    #[must_use]
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self.update_window()
    }

    #[must_use]
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self.update_window()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn move_up(self) -> Self {
        if self.row_selected == 0 {
            return self;
        }
        let row = self.row_selected - 1;
        self.select_and_show_row(row)
    }

    #[must_use]
    pub fn move_down(self) -> Self {
        match self.store.last_index() {
            Some(last) if self.row_selected < last => {
                let row = self.row_selected + 1;
                self.select_and_show_row(row)
            }
            _ => self,
        }
    }

    #[must_use]
    pub fn jump_to_start(self) -> Self {
        self.select_and_show_row(0)
    }

    #[must_use]
    pub fn jump_to_end(self) -> Self {
        match self.store.last_index() {
            Some(last) => self.select_and_show_row(last),
            None => self,
        }
    }

    /// Snap to the top of the window, or scroll back a full page when already there.
    #[must_use]
    pub fn page_up(mut self) -> Self {
        if self.store.is_empty() {
            return self;
        }

        if self.row_selected > self.first_row_shown {
            self.row_selected = self.first_row_shown;
            return self;
        }

        // already at the top of the window
        let row = self.row_selected.saturating_sub(self.window_size());
        self.select_and_show_row(row)
    }

    /// Snap to the bottom of the window, or scroll forward a full page when already there.
    #[must_use]
    pub fn page_down(mut self) -> Self {
        let (Some(last), Some(window_end)) = (self.store.last_index(), self.window_end()) else {
            return self;
        };

        if self.row_selected < window_end {
            // the window may extend past the last row
            self.row_selected = window_end.min(last);
            return self;
        }

        // already at the bottom of the window
        let row = (self.row_selected + self.window_size()).min(last);
        self.select_and_show_row(row)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Select the first row matching `expr`, scanning from the top.
    pub fn find(&self, expr: &str) -> Result<Self, FindError> {
        let found = self
            .find_index(expr)
            .ok_or_else(|| FindError::not_found(expr))?;
        Ok(self.clone().select_and_show_row(found))
    }

    /// Select the next matching row after the selection, wrapping at the end.
    pub fn find_next(&self, expr: &str) -> Result<Self, FindError> {
        let found = self
            .find_next_index(expr)
            .ok_or_else(|| FindError::not_found(expr))?;
        Ok(self.clone().select_and_show_row(found))
    }

    /// Select the previous matching row before the selection, wrapping at the start.
    pub fn find_previous(&self, expr: &str) -> Result<Self, FindError> {
        let found = self
            .find_previous_index(expr)
            .ok_or_else(|| FindError::not_found(expr))?;
        Ok(self.clone().select_and_show_row(found))
    }

    fn find_index(&self, expr: &str) -> Option<usize> {
        self.store.iter().position(|m| m.matches_expression(expr))
    }

    /// Circular scan that stops on returning to the selection, so it visits
    /// every other row at most once.
    fn find_next_index(&self, expr: &str) -> Option<usize> {
        let total = self.store.len();
        (1..total)
            .map(|offset| (self.row_selected + offset) % total)
            .find(|&i| self.row_matches(i, expr))
    }

    fn find_previous_index(&self, expr: &str) -> Option<usize> {
        let total = self.store.len();
        (1..total)
            .map(|offset| (self.row_selected + total - offset) % total)
            .find(|&i| self.row_matches(i, expr))
    }

    fn row_matches(&self, index: usize, expr: &str) -> bool {
        self.store
            .get(index)
            .is_some_and(|m| m.matches_expression(expr))
    }

    // ------------------------------------------------------------------
    // Windowing
    // ------------------------------------------------------------------

    /// Select a row and move the window just enough for it to be shown.
    #[must_use]
    pub fn select_and_show_row(mut self, index: usize) -> Self {
        self.row_selected = match self.store.last_index() {
            Some(last) => index.min(last),
            None => 0,
        };
        self.update_window()
    }

    fn update_window(mut self) -> Self {
        let selected = self.row_selected;

        let Some(window_end) = self.window_end() else {
            // nothing is rendered; keep the window pinned to the selection
            self.first_row_shown = selected;
            return self;
        };

        if selected < self.first_row_shown {
            // jump window backward to start at selection
            self.first_row_shown = selected;
        } else if selected > window_end {
            // jump window forward so that the last shown row is the selection
            self.first_row_shown = selected + 1 - self.window_size();
        }

        self
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Header plus exactly `window_size` body lines; rows past the end are blank.
    pub fn render(&self) -> Vec<FrameLine> {
        if self.height == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(self.height);
        lines.push(FrameLine::new(
            clip_to_width(&self.render_header_row(), self.width),
            LineKind::Header,
        ));

        let window = self.first_row_shown..self.first_row_shown + self.window_size();
        lines.extend(window.map(|i| match self.store.get(i) {
            Some(m) => {
                let selected = i == self.row_selected;
                FrameLine::new(
                    clip_to_width(&self.render_data_row(m, selected), self.width),
                    LineKind::Row {
                        selected,
                        severity: m.severity(),
                    },
                )
            }
            None => FrameLine::filler(),
        }));

        lines
    }

    fn render_header_row(&self) -> String {
        let widths = &self.config.columns;
        [
            UNSELECTED_MARKER.to_string(),
            pad_cell("Package", widths.package),
            pad_cell("Version", widths.version),
            pad_cell("Type", widths.kind),
            pad_cell("Vulnerability", widths.vulnerability),
            pad_cell("Severity", widths.severity),
        ]
        .concat()
    }

    fn render_data_row(&self, m: &Match, selected: bool) -> String {
        let widths = &self.config.columns;
        let marker = if selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };
        [
            marker.to_string(),
            pad_cell(&m.package.name, widths.package),
            pad_cell(&m.package.version, widths.version),
            pad_cell(&m.package.kind, widths.kind),
            pad_cell(&m.vulnerability.id, widths.vulnerability),
            pad_cell(&m.vulnerability.severity, widths.severity),
        ]
        .concat()
    }
}
