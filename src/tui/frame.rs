//! Rendered output of the browser: plain text lines tagged with their role.
//!
//! Frames are produced by pure functions of browser state, which keeps every
//! transition testable without a terminal. The terminal host maps each
//! [`LineKind`] to a style.

use crate::model::Severity;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Role of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Table column headings
    Header,
    /// A table data row
    Row { selected: bool, severity: Severity },
    /// Blank table line past the last row
    Filler,
    /// The filter input line
    Filter,
    /// A line of the detail pane
    Detail,
}

/// One line of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub text: String,
    pub kind: LineKind,
}

impl FrameLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn filler() -> Self {
        Self::new(String::new(), LineKind::Filler)
    }
}

/// A complete rendered screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
    /// Terminal cursor position as (column, row), shown only while typing
    pub cursor: Option<(u16, u16)>,
    /// Transient message shown alongside the header, e.g. a failed search
    pub status: Option<String>,
}

impl Frame {
    /// Text of every line, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Lines of the given kind.
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &FrameLine> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    /// The row line marked as selected, if any is visible.
    pub fn selected_row(&self) -> Option<&FrameLine> {
        self.lines
            .iter()
            .find(|l| matches!(l.kind, LineKind::Row { selected: true, .. }))
    }
}

/// Pad `content` with spaces to `width` display columns.
///
/// Content wider than the column is left intact so identifiers are never cut.
pub fn pad_cell(content: &str, width: u16) -> String {
    let used = content.width();
    let pad = usize::from(width).saturating_sub(used);
    let mut cell = String::with_capacity(content.len() + pad);
    cell.push_str(content);
    cell.extend(std::iter::repeat(' ').take(pad));
    cell
}

/// Clip `content` to at most `width` display columns.
pub fn clip_to_width(content: &str, width: usize) -> String {
    let mut used = 0;
    let mut clipped = String::new();
    for ch in content.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        clipped.push(ch);
    }
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_pads_to_width() {
        assert_eq!(pad_cell("zlib", 8), "zlib    ");
    }

    #[test]
    fn test_pad_cell_never_truncates() {
        assert_eq!(pad_cell("a-very-long-package", 4), "a-very-long-package");
    }

    #[test]
    fn test_pad_cell_counts_wide_chars() {
        // each CJK char occupies two columns
        assert_eq!(pad_cell("包", 4), "包  ");
    }

    #[test]
    fn test_clip_to_width() {
        assert_eq!(clip_to_width("description", 4), "desc");
        assert_eq!(clip_to_width("short", 40), "short");
        assert_eq!(clip_to_width("包包包", 3), "包");
        assert_eq!(clip_to_width("anything", 0), "");
    }
}
