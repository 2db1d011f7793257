//! Yank (copy) handlers
//!
//! This module handles copying the result panel to the system clipboard.

use super::helpers::{apply, read_state};
use crate::actions::AppAction;
use crate::state::AppState;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Copy whatever the result panel shows, success or failure
pub fn handle_yank_result(state: Arc<RwLock<AppState>>) {
    let Some(text) = yank_text(&read_state(&state)) else {
        debug!("Nothing to yank");
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            debug!("Copied result to clipboard");
            apply(&state, AppAction::SetYankFlash(true));

            // Spawn task to clear flash after delay
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                apply(&state, AppAction::SetYankFlash(false));
            });
        }
        Err(e) => {
            warn!("Failed to copy to clipboard: {}", e);
        }
    }
}

/// Text to put on the clipboard, if any outcome is on screen
fn yank_text(state: &AppState) -> Option<String> {
    state.display.outcome?;

    if state.display.text.is_empty() {
        None
    } else {
        Some(state.display.text.clone())
    }
}
