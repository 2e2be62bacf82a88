//! Detail pane: every field of the selected match.

use super::frame::{clip_to_width, FrameLine, LineKind};
use super::theme::RenderConfig;
use crate::model::Match;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct DetailPane {
    config: Arc<RenderConfig>,
    height: usize,
    width: usize,
}

impl DetailPane {
    pub fn new(config: Arc<RenderConfig>) -> Self {
        Self {
            config,
            height: 0,
            width: 0,
        }
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Exactly `height` lines, each clipped to `width` columns.
    pub fn render(&self, data: Option<&Match>) -> Vec<FrameLine> {
        let mut lines: Vec<FrameLine> = data
            .map(|m| self.field_lines(m))
            .unwrap_or_default()
            .into_iter()
            .take(self.height)
            .map(|text| FrameLine::new(clip_to_width(&text, self.width), LineKind::Detail))
            .collect();

        lines.resize(self.height, FrameLine::new(String::new(), LineKind::Detail));
        lines
    }

    fn field_lines(&self, m: &Match) -> Vec<String> {
        let mut lines = vec![
            field("Package", &m.package.name),
            field("Version", &m.package.version),
            field("Type", &m.package.kind),
            field("Origin", &m.package.origin_name),
        ];
        lines.extend(locations(&m.package.locations));

        lines.push(String::new());

        lines.push(field("Vulnerability", &m.vulnerability.id));
        lines.push(field("Severity", &m.vulnerability.severity));
        lines.push(field("URL", &m.vulnerability.url));
        lines.extend(wrapped_field(
            "Description",
            &m.vulnerability.description,
            self.width,
        ));

        lines
    }
}

fn field(name: &str, value: &str) -> String {
    format!("{name}: {value}")
}

fn locations(paths: &[String]) -> Vec<String> {
    match paths {
        [] => vec![field("Location", "")],
        [only] => vec![field("Location", only)],
        [first, rest @ ..] => {
            let label = "Locations: ";
            let indent = " ".repeat(label.len());
            std::iter::once(format!("{label}{first}"))
                .chain(rest.iter().map(|p| format!("{indent}{p}")))
                .collect()
        }
    }
}

/// Word-wrap a long value onto continuation lines aligned under its first line.
///
/// Line breaks and runs of whitespace in the value collapse to single spaces.
fn wrapped_field(name: &str, value: &str, width: usize) -> Vec<String> {
    let label = format!("{name}: ");
    let indent = " ".repeat(label.width());
    let available = width.saturating_sub(label.width());
    let words: Vec<&str> = value.split_whitespace().collect();

    let joined = words.join(" ");
    if available == 0 || joined.width() <= available {
        return vec![format!("{label}{joined}")];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        if !current.is_empty() && current.width() + 1 + word.width() > available {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{label}{line}")
            } else {
                format!("{indent}{line}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Match {
        let mut m = Match::new("zlib", "CVE-2022-37434");
        m.package.version = "1.2.12-r1".to_string();
        m.package.kind = "apk".to_string();
        m.package.origin_name = "zlib-src".to_string();
        m.package.locations = vec!["/lib/apk/db/installed".to_string()];
        m.vulnerability.severity = "Critical".to_string();
        m.vulnerability.url = "https://nvd.nist.gov/vuln/detail/CVE-2022-37434".to_string();
        m.vulnerability.description = "heap-based buffer over-read".to_string();
        m
    }

    fn pane(height: usize, width: usize) -> DetailPane {
        DetailPane::new(Arc::new(RenderConfig::default()))
            .set_height(height)
            .set_width(width)
    }

    fn texts(lines: &[FrameLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_renders_fixed_field_list() {
        let m = sample();
        let lines = pane(12, 200).render(Some(&m));

        assert_eq!(
            texts(&lines),
            vec![
                "Package: zlib",
                "Version: 1.2.12-r1",
                "Type: apk",
                "Origin: zlib-src",
                "Location: /lib/apk/db/installed",
                "",
                "Vulnerability: CVE-2022-37434",
                "Severity: Critical",
                "URL: https://nvd.nist.gov/vuln/detail/CVE-2022-37434",
                "Description: heap-based buffer over-read",
                "",
                "",
            ]
        );
        assert!(lines.iter().all(|l| l.kind == LineKind::Detail));
    }

    #[test]
    fn test_multiple_locations() {
        let mut m = sample();
        m.package.locations = vec!["/a".to_string(), "/b".to_string()];

        let lines = pane(20, 200).render(Some(&m));
        assert_eq!(lines[4].text, "Locations: /a");
        assert_eq!(lines[5].text, "           /b");
    }

    #[test]
    fn test_no_locations() {
        let mut m = sample();
        m.package.locations.clear();

        let lines = pane(20, 200).render(Some(&m));
        assert_eq!(lines[4].text, "Location: ");
    }

    #[test]
    fn test_clipped_to_height_and_width() {
        let m = sample();
        let lines = pane(3, 8).render(Some(&m));

        assert_eq!(texts(&lines), vec!["Package:", "Version:", "Type: ap"]);
    }

    #[test]
    fn test_zero_height_renders_nothing() {
        let m = sample();
        assert!(pane(0, 80).render(Some(&m)).is_empty());
    }

    #[test]
    fn test_no_selection_renders_blank_block() {
        let lines = pane(4, 80).render(None);
        assert_eq!(texts(&lines), vec!["", "", "", ""]);
    }

    #[test]
    fn test_long_description_wraps() {
        let mut m = sample();
        m.vulnerability.description = "one two three four five".to_string();

        let lines = pane(20, 24).render(Some(&m));
        let description: Vec<&str> = texts(&lines[9..12]).into_iter().collect();
        assert_eq!(
            description,
            vec!["Description: one two", "             three four", "             five"]
        );
    }

    #[test]
    fn test_description_line_breaks_collapse() {
        let mut m = sample();
        m.vulnerability.description = "line one\nline two".to_string();

        let lines = pane(12, 120).render(Some(&m));
        assert_eq!(lines[9].text, "Description: line one line two");
        assert!(lines.iter().all(|l| !l.text.contains('\n')));
    }

    #[test]
    fn test_wrapped_description_has_no_line_breaks() {
        let mut m = sample();
        m.vulnerability.description = "first\r\n\nsecond third\tfourth".to_string();

        let lines = pane(20, 26).render(Some(&m));
        assert_eq!(
            texts(&lines[9..11]),
            vec!["Description: first second", "             third fourth"]
        );
        assert!(lines.iter().all(|l| !l.text.contains(['\n', '\r', '\t'])));
    }
}
