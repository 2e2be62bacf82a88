//! Rendering configuration: column widths and color scheme.
//!
//! A [`RenderConfig`] is built once from [`TuiConfig`] and shared, immutable,
//! by the table and the detail pane. There is no global theme state.

use crate::config::{ColumnWidths, TuiConfig};
use crate::model::Severity;
use ratatui::prelude::*;

/// Color scheme for the TUI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // Table rows
    pub header: Color,
    pub row: Color,
    pub row_selected: Color,

    // Severity colors
    pub critical: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub negligible: Color,

    // Detail pane
    pub details_bg: Color,
    pub field_name: Color,
    pub field_value: Color,

    // Filter line and status
    pub prompt: Color,
    pub placeholder: Color,
    pub warning: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            header: Color::Rgb(0x77, 0x77, 0x77),
            row: Color::Rgb(0x77, 0x77, 0x77),
            row_selected: Color::Rgb(0xff, 0xff, 0xff),

            critical: Color::Magenta,
            high: Color::Red,
            medium: Color::Yellow,
            low: Color::Cyan,
            negligible: Color::Blue,

            details_bg: Color::Rgb(0x22, 0x22, 0x33),
            field_name: Color::Rgb(0xaa, 0xaa, 0xaa),
            field_value: Color::Rgb(0xff, 0xff, 0xff),

            prompt: Color::Cyan,
            placeholder: Color::DarkGray,
            warning: Color::Yellow,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            header: Color::Rgb(100, 100, 100),
            row: Color::Rgb(120, 120, 120),
            row_selected: Color::Rgb(20, 20, 20),

            critical: Color::Rgb(128, 0, 128),
            high: Color::Rgb(200, 0, 0),
            medium: Color::Rgb(180, 140, 0),
            low: Color::Rgb(0, 128, 128),
            negligible: Color::Rgb(0, 0, 200),

            details_bg: Color::Rgb(240, 240, 245),
            field_name: Color::Rgb(100, 100, 100),
            field_value: Color::Rgb(30, 30, 30),

            prompt: Color::Rgb(0, 100, 150),
            placeholder: Color::Rgb(150, 150, 150),
            warning: Color::Rgb(180, 140, 0),
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            header: Color::White,
            row: Color::Gray,
            row_selected: Color::White,

            critical: Color::LightMagenta,
            high: Color::LightRed,
            medium: Color::LightYellow,
            low: Color::LightCyan,
            negligible: Color::LightBlue,

            details_bg: Color::Black,
            field_name: Color::Gray,
            field_value: Color::White,

            prompt: Color::LightCyan,
            placeholder: Color::Gray,
            warning: Color::LightYellow,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get color for severity level; `None` keeps the row color.
    pub const fn severity_color(&self, severity: Severity) -> Option<Color> {
        match severity {
            Severity::Critical => Some(self.critical),
            Severity::High => Some(self.high),
            Severity::Medium => Some(self.medium),
            Severity::Low => Some(self.low),
            Severity::Negligible => Some(self.negligible),
            Severity::Unknown => None,
        }
    }
}

/// Immutable rendering configuration handed to the table and detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub columns: ColumnWidths,
    pub colors: ColorScheme,
}

impl RenderConfig {
    pub fn from_tui_config(config: &TuiConfig) -> Self {
        Self {
            columns: config.columns,
            colors: ColorScheme::from_name(&config.theme),
        }
    }
}

// ============================================================================
// Style Helpers
// ============================================================================

impl RenderConfig {
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.colors.header).bold()
    }

    pub fn row_style(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.colors.row_selected).bold()
        } else {
            Style::default().fg(self.colors.row)
        }
    }

    pub fn field_name_style(&self) -> Style {
        Style::default()
            .fg(self.colors.field_name)
            .bg(self.colors.details_bg)
    }

    pub fn field_value_style(&self) -> Style {
        Style::default()
            .fg(self.colors.field_value)
            .bg(self.colors.details_bg)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.colors.warning).bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ColorScheme::from_name("light"), ColorScheme::light());
        assert_eq!(ColorScheme::from_name("HC"), ColorScheme::high_contrast());
        assert_eq!(ColorScheme::from_name("anything"), ColorScheme::dark());
    }

    #[test]
    fn test_unknown_severity_keeps_row_color() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.severity_color(Severity::Unknown), None);
        assert_eq!(scheme.severity_color(Severity::High), Some(Color::Red));
    }

    #[test]
    fn test_render_config_from_tui_config() {
        let mut tui = TuiConfig::default();
        tui.theme = "light".to_string();
        tui.columns.package = 40;

        let config = RenderConfig::from_tui_config(&tui);
        assert_eq!(config.colors, ColorScheme::light());
        assert_eq!(config.columns.package, 40);
    }
}
