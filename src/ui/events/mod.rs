//! Event handling system for banking-api-tui
//!
//! Key presses are first mapped to a [`KeyCommand`] (pure, testable), then
//! carried out against the shared state. Form edits and scrolling become
//! `AppAction`s applied through `apply_action`; sending a request goes
//! through the execution handler, which never blocks the UI loop.
//!
//! # Lock Management
//!
//! Handlers take the `AppState` lock only for the duration of a single action.
//! Background requests take the same lock from their own tasks.

mod execution;
mod helpers;
mod yank;

pub use helpers::read_state;

use crate::actions::{AppAction, PAGE_SCROLL_LINES, SIDE_SCROLL_COLUMNS};
use crate::config::EndpointsConfig;
use crate::endpoints::BankingAction;
use crate::request::{Invoker, Transport};
use crate::state::AppState;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use helpers::{apply, collect_paste_batch};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::debug;

/// What a key press asks for
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    Quit,
    Apply(AppAction),
    Send(BankingAction),
    Type(char),
    Yank,
}

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Poll for one input event and handle it
    pub fn handle_events<T: Transport + 'static>(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        invoker: &Arc<Invoker<T>>,
        endpoints: &EndpointsConfig,
    ) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let selected = read_state(state).selected_action();
                    if let Some(command) = key_command(key, selected) {
                        self.run_command(command, state, invoker, endpoints);
                    }
                }
            }
        }

        Ok(())
    }

    fn run_command<T: Transport + 'static>(
        &mut self,
        command: KeyCommand,
        state: &Arc<RwLock<AppState>>,
        invoker: &Arc<Invoker<T>>,
        endpoints: &EndpointsConfig,
    ) {
        match command {
            KeyCommand::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCommand::Apply(action) => apply(state, action),
            KeyCommand::Send(action) => {
                apply(state, AppAction::SelectField(action));
                // completion is observed through the shared state
                drop(execution::handle_execute(action, state, invoker, endpoints));
            }
            KeyCommand::Type(c) => {
                apply(state, AppAction::AppendToField(collect_paste_batch(c)));
            }
            KeyCommand::Yank => yank::handle_yank_result(Arc::clone(state)),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a key press to a command. `selected` is the row Enter would send.
pub fn key_command(key: KeyEvent, selected: BankingAction) -> Option<KeyCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let command = match key.code {
        KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('c') if ctrl => KeyCommand::Quit,

        // form navigation
        KeyCode::Up | KeyCode::BackTab => KeyCommand::Apply(AppAction::SelectPreviousField),
        KeyCode::Down | KeyCode::Tab => KeyCommand::Apply(AppAction::SelectNextField),

        // sending
        KeyCode::Enter => KeyCommand::Send(selected),
        KeyCode::F(n) => KeyCommand::Send(BankingAction::from_function_key(n)?),

        // result panel
        KeyCode::PageUp => KeyCommand::Apply(AppAction::ScrollResultUp(PAGE_SCROLL_LINES)),
        KeyCode::PageDown => KeyCommand::Apply(AppAction::ScrollResultDown(PAGE_SCROLL_LINES)),
        KeyCode::Left => KeyCommand::Apply(AppAction::ScrollResultLeft(SIDE_SCROLL_COLUMNS)),
        KeyCode::Right => KeyCommand::Apply(AppAction::ScrollResultRight(SIDE_SCROLL_COLUMNS)),
        KeyCode::Home => KeyCommand::Apply(AppAction::ScrollResultTop),
        KeyCode::Char('k') if ctrl => KeyCommand::Apply(AppAction::ScrollResultUp(1)),
        KeyCode::Char('j') if ctrl => KeyCommand::Apply(AppAction::ScrollResultDown(1)),
        KeyCode::Char('y') if ctrl => KeyCommand::Yank,

        // field editing
        KeyCode::Backspace => KeyCommand::Apply(AppAction::BackspaceField),
        KeyCode::Char('u') if ctrl => KeyCommand::Apply(AppAction::ClearField),
        KeyCode::Char('w') if ctrl => KeyCommand::Apply(AppAction::DeleteWordField),
        KeyCode::Char(c) if !ctrl => KeyCommand::Type(c),

        _ => return None,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_enter_sends_selected_row() {
        assert_eq!(
            key_command(key(KeyCode::Enter), BankingAction::AccountDetail),
            Some(KeyCommand::Send(BankingAction::AccountDetail))
        );
    }

    #[test]
    fn test_function_keys_send_their_row() {
        let selected = BankingAction::CustomerInformation;
        assert_eq!(
            key_command(key(KeyCode::F(3)), selected),
            Some(KeyCommand::Send(BankingAction::BalanceInquiry))
        );
        assert_eq!(key_command(key(KeyCode::F(9)), selected), None);
    }

    #[test]
    fn test_letters_are_typed_not_commands() {
        let selected = BankingAction::CustomerInformation;
        assert_eq!(
            key_command(key(KeyCode::Char('q')), selected),
            Some(KeyCommand::Type('q'))
        );
        assert_eq!(
            key_command(key(KeyCode::Char('?')), selected),
            Some(KeyCommand::Type('?'))
        );
    }

    #[test]
    fn test_control_keys() {
        let selected = BankingAction::CustomerInformation;
        assert_eq!(key_command(ctrl('c'), selected), Some(KeyCommand::Quit));
        assert_eq!(key_command(ctrl('y'), selected), Some(KeyCommand::Yank));
        assert_eq!(
            key_command(ctrl('u'), selected),
            Some(KeyCommand::Apply(AppAction::ClearField))
        );
        assert_eq!(
            key_command(ctrl('w'), selected),
            Some(KeyCommand::Apply(AppAction::DeleteWordField))
        );
        // unbound control chords are swallowed rather than typed
        assert_eq!(key_command(ctrl('x'), selected), None);
    }

    #[test]
    fn test_navigation_and_scroll() {
        let selected = BankingAction::CustomerInformation;
        assert_eq!(
            key_command(key(KeyCode::Tab), selected),
            Some(KeyCommand::Apply(AppAction::SelectNextField))
        );
        assert_eq!(
            key_command(key(KeyCode::BackTab), selected),
            Some(KeyCommand::Apply(AppAction::SelectPreviousField))
        );
        assert_eq!(
            key_command(key(KeyCode::PageDown), selected),
            Some(KeyCommand::Apply(AppAction::ScrollResultDown(
                PAGE_SCROLL_LINES
            )))
        );
        assert_eq!(
            key_command(key(KeyCode::Right), selected),
            Some(KeyCommand::Apply(AppAction::ScrollResultRight(
                SIDE_SCROLL_COLUMNS
            )))
        );
        assert_eq!(key_command(key(KeyCode::Esc), selected), Some(KeyCommand::Quit));
    }
}
