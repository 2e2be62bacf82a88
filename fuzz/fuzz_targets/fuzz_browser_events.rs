#![no_main]
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use vex_triage::model::{Match, MatchStore};
use vex_triage::tui::{step, BrowserState, Event, Key, RenderConfig};

/// Drive the browser with an arbitrary byte stream of events.
///
/// Each byte picks an event; the frame must always have the terminal's height.
fuzz_target!(|data: &[u8]| {
    let matches = (0..data.first().copied().unwrap_or(0) % 32)
        .map(|i| Match::new(format!("pkg-{i}"), format!("CVE-{i}")))
        .collect();
    let state = BrowserState::new(Arc::new(MatchStore::new(matches)), RenderConfig::default());

    let mut height = 24u16;
    let mut current = step(state, &Event::Resize { width: 80, height });
    for &byte in data.iter().skip(1) {
        let event = match byte % 16 {
            0 => Event::Key(Key::Up),
            1 => Event::Key(Key::Down),
            2 => Event::Key(Key::PageUp),
            3 => Event::Key(Key::PageDown),
            4 => Event::Key(Key::Home),
            5 => Event::Key(Key::End),
            6 => Event::Key(Key::Enter),
            7 => Event::Key(Key::Esc),
            8 => Event::Key(Key::Char('/')),
            9 => Event::Key(Key::Char('n')),
            10 => Event::Key(Key::Char('N')),
            11 => Event::Key(Key::Char('d')),
            12 => Event::Key(Key::Backspace),
            13 => Event::Key(Key::Char(char::from(b'0' + byte % 10))),
            _ => {
                height = u16::from(byte / 4);
                Event::Resize { width: u16::from(byte), height }
            }
        };
        current = step(current.state, &event);
        assert_eq!(current.frame.lines.len(), usize::from(height));
    }
});
