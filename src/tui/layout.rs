//! Splits the terminal height between the table, the filter line and the detail pane.

use super::app::Mode;

/// Heights assigned to each pane. Always sums to the total height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneSplit {
    /// Table height, header line included
    pub table: usize,
    /// 1 while a filter expression is being typed, otherwise 0
    pub filter: usize,
    pub details: usize,
}

impl PaneSplit {
    /// Compute the split for a terminal `height`.
    ///
    /// The detail pane takes the lower half (rounded down) when shown; the
    /// filter line is then taken from the table's share.
    pub fn compute(height: usize, mode: Mode, show_details: bool) -> Self {
        let details = if show_details { height / 2 } else { 0 };
        let remaining = height - details;

        let filter = match mode {
            Mode::FilterEntry => remaining.min(1),
            Mode::Scroll => 0,
        };

        Self {
            table: remaining - filter,
            filter,
            details,
        }
    }

    pub const fn total(&self) -> usize {
        self.table + self.filter + self.details
    }
}
