//! Main panel rendering
//!
//! This module contains rendering functions for the two main panels:
//! - Form panel (left side) - one editable row per gateway action
//! - Result panel (right side) - the shared display target

use super::styling::{self, outcome_color, status_color};
use crate::endpoints::BankingAction;
use crate::state::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the left panel with one row per action
pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    for action in BankingAction::ALL {
        let selected = action.index() == state.form.selected;
        lines.extend(form_row_lines(action, state.field_value(action), selected));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title("[1] Requests")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::focused_border()));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the right panel with the last accepted outcome
pub fn render_result_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let display = &state.display;

    let mut title = vec![Span::raw("[2] Result ")];
    if let Some(ticket) = display.shown_ticket {
        title.push(Span::styled(
            format!("{ticket} "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(status) = display.status {
        title.push(Span::styled(
            format!("[{status}] "),
            Style::default()
                .fg(status_color(status))
                .add_modifier(Modifier::BOLD),
        ));
    } else if display.outcome.is_some() {
        title.push(Span::styled(
            "[no response] ",
            Style::default().fg(Color::Red),
        ));
    }

    let border_color = if display.yank_flash {
        Color::Green
    } else {
        Color::White
    };

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = if display.outcome.is_none() {
        Paragraph::new("Type an id into a field and press [Enter] to send the request")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(display.text.as_str())
            .style(Style::default().fg(outcome_color(display.outcome)))
            .scroll((clamp_u16(display.scroll), clamp_u16(display.h_scroll)))
    };

    // no wrapping: one text line is one screen row, so scroll limits are line based
    frame.render_widget(paragraph.block(block), area);
}

fn clamp_u16(offset: usize) -> u16 {
    offset.min(u16::MAX as usize) as u16
}

fn form_row_lines(action: BankingAction, value: &str, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let heading = Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(
            format!("F{} ", action.function_key()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(action.label(), label_style),
        Span::styled("  GET ", Style::default().fg(Color::Green)),
        Span::styled(action.path(), Style::default().fg(Color::Gray)),
    ]);

    let value_line = if value.is_empty() && !selected {
        Line::from(Span::styled(
            format!("    <{}>", action.field_hint()),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if selected { "_" } else { "" };
        Line::from(Span::styled(
            format!("    {value}{cursor}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    vec![heading, value_line]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Outcome, Ticket};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_result_panel_shows_display_text() {
        let mut state = AppState::default();
        state.busy.latest_issued = Some(Ticket(1));
        state.apply_outcome(
            Ticket(1),
            &Outcome::Failure {
                status: Some(404),
                text: "not found".to_string(),
            },
        );

        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|frame| render_result_panel(frame, frame.area(), &state))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("not found"));
        assert!(text.contains("[404]"));
    }

    #[test]
    fn test_result_panel_scrolls_long_line_sideways() {
        let mut state = AppState::default();
        state.busy.latest_issued = Some(Ticket(1));
        state.apply_outcome(
            Ticket(1),
            &Outcome::Failure {
                status: None,
                text: format!("Request failed: {}TAIL", "-".repeat(80)),
            },
        );

        let draw = |state: &AppState| {
            let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
            terminal
                .draw(|frame| render_result_panel(frame, frame.area(), state))
                .unwrap();
            buffer_text(&terminal)
        };

        let text = draw(&state);
        assert!(text.contains("Request failed"));
        assert!(!text.contains("TAIL"));

        state.display.h_scroll = 80;
        let text = draw(&state);
        assert!(text.contains("TAIL"));
        assert!(!text.contains("Request failed"));
    }

    #[test]
    fn test_form_panel_lists_every_action() {
        let state = AppState::default();

        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| render_form_panel(frame, frame.area(), &state))
            .unwrap();

        let text = buffer_text(&terminal);
        for action in BankingAction::ALL {
            assert!(text.contains(action.label()), "missing {}", action.label());
        }
    }
}
