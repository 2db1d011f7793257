//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (gateway, credentials, busy status)
//! - Footer (command help)

use super::styling::spinner_frame;
use crate::config::GatewayConfig;
use crate::utils::mask_secret;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Render the application header with gateway and credential info
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    gateway: &GatewayConfig,
    in_flight: usize,
    spinner_index: usize,
) {
    let status_text = if in_flight > 0 {
        format!("{} {in_flight} in flight", spinner_frame(spinner_index))
    } else {
        "Idle".to_string()
    };

    let credentials = credentials_status_text(gateway);

    let header_text = format!(
        "banking api tui - {} [{status_text}] | {credentials}",
        gateway.base_url
    );

    let color = if gateway.has_credentials() {
        Color::Cyan
    } else {
        Color::Yellow
    };

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer_text = "↑/↓/Tab:Field Enter:Send F1-F5:Send row | PgUp/PgDn/←/→:Scroll Ctrl+Y:Copy Ctrl+U:Clear Esc:Quit";

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Get credential status display text
fn credentials_status_text(gateway: &GatewayConfig) -> String {
    if gateway.has_credentials() {
        format!("🔒 client {}", mask_secret(&gateway.client_id))
    } else {
        "🔓 credentials not configured (see config.toml)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_status_text() {
        let mut gateway = GatewayConfig::default();
        assert!(credentials_status_text(&gateway).contains("not configured"));

        gateway.client_id = "8819a44d-30c0-4d95-8b5c-b13efdf0b900".to_string();
        gateway.client_secret = "s3cr3t".to_string();
        let text = credentials_status_text(&gateway);
        assert!(text.contains("8819...b900"));
        assert!(!text.contains("s3cr3t"));
    }
}
