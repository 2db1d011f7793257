//! Modal dialog rendering
//!
//! Only one modal exists: the "please wait" overlay shown while requests are in flight.

use super::styling::spinner_frame;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the busy overlay in the middle of the screen
pub fn render_busy_modal(frame: &mut Frame, in_flight: usize, spinner_index: usize) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.4).clamp(24.0, 40.0) as u16;
    let modal_height = 5;
    let modal_area = centered(area, modal_width, modal_height);

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Please wait ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let detail = if in_flight > 1 {
        format!("{in_flight} requests in flight")
    } else {
        "Calling the gateway".to_string()
    };

    let text = format!("{} {detail}", spinner_frame(spinner_index));
    let paragraph = Paragraph::new(format!("\n{text}"))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, modal_area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
