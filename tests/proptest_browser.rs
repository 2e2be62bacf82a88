//! Property-based tests for the browser state machine.
//!
//! Random stores and random event sequences must never break the viewport
//! guarantees: the selection stays in range and on screen, every frame has
//! exactly the terminal's height, and a failed search changes nothing.

use proptest::prelude::*;
use std::sync::Arc;
use vex_triage::{
    model::{Match, MatchStore},
    tui::{step, BrowserState, Event, Key, LineKind, Mode, PaneSplit, RenderConfig},
};

fn arb_store() -> impl Strategy<Value = MatchStore> {
    prop::collection::vec(("[a-d]{1,3}", "CVE-[0-9]{1,2}"), 0..40).prop_map(|pairs| {
        MatchStore::new(
            pairs
                .into_iter()
                .map(|(name, id)| Match::new(name, id))
                .collect(),
        )
    })
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Key(Key::Up)),
        Just(Event::Key(Key::Down)),
        Just(Event::Key(Key::PageUp)),
        Just(Event::Key(Key::PageDown)),
        Just(Event::Key(Key::Home)),
        Just(Event::Key(Key::End)),
        Just(Event::Key(Key::Enter)),
        Just(Event::Key(Key::Esc)),
        Just(Event::Key(Key::Backspace)),
        Just(Event::Key(Key::Char('/'))),
        Just(Event::Key(Key::Char('n'))),
        Just(Event::Key(Key::Char('N'))),
        Just(Event::Key(Key::Char('d'))),
        Just(Event::Key(Key::Char('a'))),
        Just(Event::Key(Key::Char('b'))),
        (1u16..200, 0u16..60).prop_map(|(width, height)| Event::Resize { width, height }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn viewport_invariants_hold(
        store in arb_store(),
        events in prop::collection::vec(arb_event(), 0..80),
        height in 0u16..40,
    ) {
        let state = BrowserState::new(Arc::new(store), RenderConfig::default());
        let mut current = step(state, &Event::Resize { width: 100, height });
        let mut terminal_height = usize::from(height);

        for event in &events {
            if let Event::Resize { height, .. } = event {
                terminal_height = usize::from(*height);
            }
            current = step(current.state, event);

            let state = &current.state;
            let table = state.table();
            let total = table.store().len();

            // frame fills the terminal exactly
            prop_assert_eq!(current.frame.lines.len(), terminal_height);

            // split is consistent with mode and detail flag
            let split = PaneSplit::compute(terminal_height, state.mode(), state.show_details());
            prop_assert_eq!(split.total(), terminal_height);
            prop_assert_eq!(table.height(), split.table);
            prop_assert_eq!(state.details().height(), split.details);

            match state.selected_index() {
                None => prop_assert_eq!(total, 0),
                Some(selected) => {
                    prop_assert!(selected < total);
                    let first = table.first_row_shown();
                    prop_assert!(first <= selected);
                    if table.window_size() > 0 {
                        prop_assert!(selected < first + table.window_size());
                        prop_assert!(current.frame.selected_row().is_some());
                    }
                }
            }

            let filter_lines = current.frame.lines_of(LineKind::Filter).count();
            prop_assert_eq!(filter_lines, split.filter);
            if state.mode() == Mode::Scroll {
                prop_assert_eq!(filter_lines, 0);
            }
        }
    }

    #[test]
    fn failed_repeat_search_changes_nothing(
        store in arb_store(),
        moves in 0usize..40,
    ) {
        let state = BrowserState::new(Arc::new(store), RenderConfig::default());
        let mut current = step(state, &Event::Resize { width: 100, height: 8 });
        for _ in 0..moves {
            current = step(current.state, &Event::Key(Key::Down));
        }

        // 'z' never occurs in generated names or ids
        for key in ['/', 'z'] {
            current = step(current.state, &Event::Key(Key::Char(key)));
        }
        let before = (current.state.selected_index(), current.state.table().first_row_shown());
        current = step(current.state, &Event::Key(Key::Enter));

        prop_assert_eq!(current.state.mode(), Mode::FilterEntry);
        prop_assert_eq!(
            (current.state.selected_index(), current.state.table().first_row_shown()),
            before
        );
        prop_assert!(current.frame.status.is_some());
    }

    #[test]
    fn find_next_cycles_through_every_hit(store in arb_store(), needle in "[a-d]") {
        let hits: Vec<usize> = store
            .iter()
            .enumerate()
            .filter(|(_, m)| m.matches_expression(&needle))
            .map(|(i, _)| i)
            .collect();
        prop_assume!(hits.len() >= 2);

        let state = BrowserState::new(Arc::new(store), RenderConfig::default());
        let mut current = step(state, &Event::Resize { width: 100, height: 10 });
        current = step(current.state, &Event::Key(Key::Char('/')));
        current = step(current.state, &Event::Key(Key::Char(needle.chars().next().unwrap())));
        current = step(current.state, &Event::Key(Key::Enter));
        prop_assert_eq!(current.state.selected_index(), Some(hits[0]));

        let mut visited = vec![hits[0]];
        for _ in 1..hits.len() {
            current = step(current.state, &Event::Key(Key::Char('n')));
            visited.push(current.state.selected_index().unwrap());
        }
        prop_assert_eq!(&visited, &hits);

        // one more wraps to the first hit
        current = step(current.state, &Event::Key(Key::Char('n')));
        prop_assert_eq!(current.state.selected_index(), Some(hits[0]));
    }
}
