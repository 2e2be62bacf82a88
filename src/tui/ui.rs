//! Terminal host: owns the terminal, feeds events to the browser and paints frames.

use super::app::{step, BrowserState, Effect, Step};
use super::events::{Event, EventHandler};
use super::frame::{FrameLine, LineKind};
use super::input::FILTER_PROMPT;
use super::theme::RenderConfig;
use crate::model::{Match, Severity};
use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{layout::Position, prelude::*, widgets::Paragraph};
use std::io::{self, stdout, Stdout};

/// What the user was looking at when the browser exited.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub selected: Option<Match>,
}

/// Run the browser until the user quits.
pub fn run_tui(state: BrowserState) -> io::Result<Outcome> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, state);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        SetCursorStyle::DefaultUserShape
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: BrowserState,
) -> io::Result<Outcome> {
    let events = EventHandler::new();

    // The first frame needs the real terminal size
    let (width, height) = size()?;
    let mut current = step(state, &Event::Resize { width, height });

    loop {
        match current.effect {
            Some(Effect::Quit) => break,
            Some(Effect::CursorBlink) => {
                execute!(terminal.backend_mut(), SetCursorStyle::BlinkingBar)?;
            }
            None => {}
        }

        terminal.draw(|frame| render(frame, &current))?;

        let event = events.next()?;
        tracing::trace!(?event, "event");
        current = step(current.state, &event);
    }

    tracing::debug!(selected = ?current.state.selected_index(), "browser closed");
    Ok(Outcome {
        selected: current.state.selected_match().cloned(),
    })
}

fn render(frame: &mut Frame, current: &Step) {
    let area = frame.area();
    let config = current.state.details().config();
    let placeholder = current.state.filter().value().is_empty();

    let lines: Vec<Line> = current
        .frame
        .lines
        .iter()
        .map(|line| styled_line(line, config, placeholder))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    if let Some(status) = &current.frame.status {
        if area.height > 0 {
            let header = Rect { height: 1, ..area };
            let message = Paragraph::new(Span::styled(status.as_str(), config.status_style()))
                .alignment(Alignment::Right);
            frame.render_widget(message, header);
        }
    }

    if let Some((column, row)) = current.frame.cursor {
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(column),
            area.y.saturating_add(row),
        ));
    }
}

fn styled_line<'a>(line: &'a FrameLine, config: &RenderConfig, placeholder: bool) -> Line<'a> {
    let text = line.text.as_str();
    match line.kind {
        LineKind::Header => Line::styled(text, config.header_style()),
        LineKind::Filler => Line::raw(text),
        LineKind::Row { selected, severity } => {
            let style = config.row_style(selected);
            // a clipped row may end in another column; color only the severity word
            let cell =
                last_word_start(text).filter(|&at| Severity::parse(&text[at..]) == severity);
            match (config.colors.severity_color(severity), cell) {
                (Some(color), Some(at)) => Line::from(vec![
                    Span::styled(&text[..at], style),
                    Span::styled(&text[at..], style.fg(color)),
                ]),
                _ => Line::styled(text, style),
            }
        }
        LineKind::Filter => {
            let prompt_len = FILTER_PROMPT.len().min(text.len());
            let rest = if placeholder {
                Style::default().fg(config.colors.placeholder)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(&text[..prompt_len], Style::default().fg(config.colors.prompt)),
                Span::styled(&text[prompt_len..], rest),
            ])
        }
        LineKind::Detail => {
            let background = Style::default().bg(config.colors.details_bg);
            let spans = match text.find(": ") {
                Some(at) if !text.starts_with(' ') => vec![
                    Span::styled(&text[..at + 1], config.field_name_style()),
                    Span::styled(&text[at + 1..], config.field_value_style()),
                ],
                _ => vec![Span::styled(text, config.field_value_style())],
            };
            Line::from(spans).style(background)
        }
    }
}

/// Byte offset of the last whitespace-separated word, ignoring trailing padding.
fn last_word_start(text: &str) -> Option<usize> {
    let trimmed = text.trim_end();
    let at = trimmed.rfind(' ')? + 1;
    (at < trimmed.len()).then_some(at)
}
