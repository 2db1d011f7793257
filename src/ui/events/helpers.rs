//! Helper functions for event handling
//!
//! This module contains utility functions used across event handlers:
//! - State locking helpers (apply actions)
//! - Paste batching

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Read the shared state. A panicked writer can't leave AppState half-built
/// in a way that matters for drawing, so poisoning is ignored.
pub fn read_state(state: &Arc<RwLock<AppState>>) -> RwLockReadGuard<'_, AppState> {
    state.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn write_state(state: &Arc<RwLock<AppState>>) -> RwLockWriteGuard<'_, AppState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = write_state(state);
    apply_action(action, &mut s);
}

/// Join a typed character with any character events already queued behind it,
/// so a terminal paste lands as one edit instead of one redraw per key.
pub fn collect_paste_batch(initial: char) -> String {
    let queued = std::iter::from_fn(|| match event::poll(Duration::ZERO) {
        Ok(true) => event::read().ok(),
        _ => None,
    });
    batch_chars(initial, queued)
}

/// Stops at the first event that is not a plain character; that event is dropped.
fn batch_chars(initial: char, queued: impl IntoIterator<Item = Event>) -> String {
    std::iter::once(initial)
        .chain(queued.into_iter().map_while(|e| plain_char(&e)))
        .collect()
}

fn plain_char(event: &Event) -> Option<char> {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char(c),
            modifiers,
            ..
        }) if !modifiers.contains(KeyModifiers::CONTROL) => Some(*c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_batch_joins_queued_characters() {
        let queued = "CC123".chars().map(|c| key(KeyCode::Char(c), KeyModifiers::NONE));
        assert_eq!(batch_chars('A', queued), "ACC123");

        let shifted = vec![key(KeyCode::Char('B'), KeyModifiers::SHIFT)];
        assert_eq!(batch_chars('a', shifted), "aB");

        assert_eq!(batch_chars('x', Vec::new()), "x");
    }

    #[test]
    fn test_batch_stops_at_non_character() {
        let queued = vec![
            key(KeyCode::Char('1'), KeyModifiers::NONE),
            key(KeyCode::Enter, KeyModifiers::NONE),
            key(KeyCode::Char('2'), KeyModifiers::NONE),
        ];
        assert_eq!(batch_chars('0', queued), "01");

        let queued = vec![
            key(KeyCode::Char('w'), KeyModifiers::CONTROL),
            key(KeyCode::Char('z'), KeyModifiers::NONE),
        ];
        assert_eq!(batch_chars('q', queued), "q");
    }
}
