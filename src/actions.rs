use crate::endpoints::BankingAction;
use crate::state::AppState;

/// Lines moved per page scroll
pub const PAGE_SCROLL_LINES: usize = 10;

/// Columns moved per Left/Right press
pub const SIDE_SCROLL_COLUMNS: usize = 8;

/// Every state change driven by a key press goes through one of these.
/// Request execution is not an action: it has side effects beyond AppState.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Form navigation
    SelectNextField,
    SelectPreviousField,
    SelectField(BankingAction),

    // Editing the selected field
    AppendToField(String),
    BackspaceField,
    ClearField,
    DeleteWordField,

    // Result panel
    ScrollResultUp(usize),
    ScrollResultDown(usize),
    ScrollResultLeft(usize),
    ScrollResultRight(usize),
    ScrollResultTop,
    SetYankFlash(bool),
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    let field_count = state.form.values.len().max(1);

    match action {
        AppAction::SelectNextField => {
            state.form.selected = (state.form.selected + 1) % field_count;
        }
        AppAction::SelectPreviousField => {
            state.form.selected = (state.form.selected + field_count - 1) % field_count;
        }
        AppAction::SelectField(action) => {
            state.form.selected = action.index();
        }

        AppAction::AppendToField(text) => {
            if let Some(value) = state.selected_value_mut() {
                value.push_str(&text);
            }
        }
        AppAction::BackspaceField => {
            if let Some(value) = state.selected_value_mut() {
                value.pop();
            }
        }
        AppAction::ClearField => {
            if let Some(value) = state.selected_value_mut() {
                value.clear();
            }
        }
        AppAction::DeleteWordField => {
            if let Some(value) = state.selected_value_mut() {
                delete_word(value);
            }
        }

        AppAction::ScrollResultUp(lines) => {
            state.display.scroll = state.display.scroll.saturating_sub(lines);
        }
        AppAction::ScrollResultDown(lines) => {
            // keep at least the last line on screen
            let max_scroll = state.display.text.lines().count().saturating_sub(1);
            state.display.scroll = state.display.scroll.saturating_add(lines).min(max_scroll);
        }
        AppAction::ScrollResultLeft(columns) => {
            state.display.h_scroll = state.display.h_scroll.saturating_sub(columns);
        }
        AppAction::ScrollResultRight(columns) => {
            // keep at least the last column of the widest line on screen
            let widest = state
                .display
                .text
                .lines()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            state.display.h_scroll = state
                .display
                .h_scroll
                .saturating_add(columns)
                .min(widest.saturating_sub(1));
        }
        AppAction::ScrollResultTop => {
            state.display.scroll = 0;
            state.display.h_scroll = 0;
        }
        AppAction::SetYankFlash(flash) => {
            state.display.yank_flash = flash;
        }
    }
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Find last whitespace and truncate there
    if let Some(pos) = s.rfind(char::is_whitespace) {
        s.truncate(pos);
    } else {
        s.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_next_wraps() {
        let mut state = AppState::default();
        assert_eq!(state.selected_action(), BankingAction::CustomerInformation);

        apply_action(AppAction::SelectNextField, &mut state);
        assert_eq!(state.selected_action(), BankingAction::CustomerContract);

        for _ in 0..4 {
            apply_action(AppAction::SelectNextField, &mut state);
        }
        assert_eq!(state.selected_action(), BankingAction::CustomerInformation);
    }

    #[test]
    fn test_select_previous_wraps() {
        let mut state = AppState::default();

        apply_action(AppAction::SelectPreviousField, &mut state);
        assert_eq!(state.selected_action(), BankingAction::AccountDetail);

        apply_action(AppAction::SelectPreviousField, &mut state);
        assert_eq!(state.selected_action(), BankingAction::TransactionsInquiry);
    }

    #[test]
    fn test_select_field() {
        let mut state = AppState::default();
        apply_action(
            AppAction::SelectField(BankingAction::BalanceInquiry),
            &mut state,
        );
        assert_eq!(state.form.selected, 2);
    }

    #[test]
    fn test_field_editing_only_touches_selected() {
        let mut state = AppState::default();
        apply_action(
            AppAction::SelectField(BankingAction::AccountDetail),
            &mut state,
        );

        apply_action(AppAction::AppendToField("ACC-99".to_string()), &mut state);
        assert_eq!(state.field_value(BankingAction::AccountDetail), "ACC-99");
        assert_eq!(state.field_value(BankingAction::BalanceInquiry), "");

        apply_action(AppAction::BackspaceField, &mut state);
        assert_eq!(state.field_value(BankingAction::AccountDetail), "ACC-9");

        apply_action(AppAction::ClearField, &mut state);
        assert_eq!(state.field_value(BankingAction::AccountDetail), "");

        // backspace on empty is a no-op
        apply_action(AppAction::BackspaceField, &mut state);
        assert_eq!(state.field_value(BankingAction::AccountDetail), "");
    }

    #[test]
    fn test_delete_word_action() {
        let mut state = AppState::default();
        apply_action(AppAction::AppendToField("ACC 123".to_string()), &mut state);
        apply_action(AppAction::DeleteWordField, &mut state);
        assert_eq!(state.field_value(BankingAction::CustomerInformation), "ACC");
    }

    #[test]
    fn test_delete_word() {
        let mut s = "hello world foo".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello world");

        delete_word(&mut s);
        assert_eq!(s, "hello");

        delete_word(&mut s);
        assert_eq!(s, "");

        delete_word(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn test_delete_word_with_trailing_space() {
        let mut s = "hello world   ".to_string();
        delete_word(&mut s);
        assert_eq!(s, "hello");
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::default();
        state.display.text = "{\n    \"a\": 1,\n    \"b\": 2\n}".to_string();

        apply_action(AppAction::ScrollResultUp(5), &mut state);
        assert_eq!(state.display.scroll, 0);

        apply_action(AppAction::ScrollResultDown(2), &mut state);
        assert_eq!(state.display.scroll, 2);

        apply_action(AppAction::ScrollResultDown(PAGE_SCROLL_LINES), &mut state);
        assert_eq!(state.display.scroll, 3);

        apply_action(AppAction::ScrollResultTop, &mut state);
        assert_eq!(state.display.scroll, 0);
    }

    #[test]
    fn test_long_line_scrolls_sideways_to_its_end() {
        let mut state = AppState::default();
        let error = format!("Request failed: {}", "x".repeat(300));
        state.display.text = error.clone();

        // a single line never scrolls down
        apply_action(AppAction::ScrollResultDown(PAGE_SCROLL_LINES), &mut state);
        assert_eq!(state.display.scroll, 0);

        for _ in 0..100 {
            apply_action(AppAction::ScrollResultRight(SIDE_SCROLL_COLUMNS), &mut state);
        }
        assert_eq!(state.display.h_scroll, error.chars().count() - 1);

        apply_action(AppAction::ScrollResultLeft(SIDE_SCROLL_COLUMNS), &mut state);
        assert_eq!(state.display.h_scroll, error.chars().count() - 1 - SIDE_SCROLL_COLUMNS);

        apply_action(AppAction::ScrollResultTop, &mut state);
        assert_eq!(state.display.h_scroll, 0);
    }

    #[test]
    fn test_scroll_empty_display() {
        let mut state = AppState::default();
        apply_action(AppAction::ScrollResultDown(1), &mut state);
        apply_action(AppAction::ScrollResultRight(1), &mut state);
        assert_eq!(state.display.scroll, 0);
        assert_eq!(state.display.h_scroll, 0);
    }
}
