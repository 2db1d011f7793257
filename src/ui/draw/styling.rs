//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::types::OutcomeKind;
use ratatui::style::Color;

/// Busy spinner frames, advanced every UI tick
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub fn spinner_frame(index: usize) -> &'static str {
    SPINNER_FRAMES[index % SPINNER_FRAMES.len()]
}

/// Color of the result text for the last outcome
pub fn outcome_color(outcome: Option<OutcomeKind>) -> Color {
    match outcome {
        Some(OutcomeKind::Success) => Color::Green,
        Some(OutcomeKind::Failure) => Color::Red,
        None => Color::DarkGray,
    }
}

/// Color for an HTTP status code in panel titles
pub fn status_color(status: u16) -> Color {
    match status {
        200..=299 => Color::Green,
        400..=499 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(4));
    }

    #[test]
    fn test_status_color() {
        assert_eq!(status_color(204), Color::Green);
        assert_eq!(status_color(404), Color::Yellow);
        assert_eq!(status_color(503), Color::Red);
    }
}
