use crate::endpoints::BankingAction;
use crate::request::RequestLifecycle;
use crate::types::{Outcome, OutcomeKind, Ticket};
use std::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AppState {
    pub form: FormState,
    pub display: DisplayState,
    pub busy: BusyState,
    /// Drop completions that arrive for anything but the latest request
    pub discard_stale: bool,
}

/// One editable value per action, in `BankingAction::ALL` order
#[derive(Debug, Clone)]
pub struct FormState {
    pub values: Vec<String>,
    pub selected: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: vec![String::new(); BankingAction::ALL.len()],
            selected: 0,
        }
    }
}

/// The result panel: whatever the last accepted outcome said
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub text: String,
    pub outcome: Option<OutcomeKind>,
    pub status: Option<u16>,
    /// Ticket whose outcome is on screen
    pub shown_ticket: Option<Ticket>,
    /// Scroll offset for the result text (lines)
    pub scroll: usize,
    /// Horizontal offset (columns); the result panel does not wrap
    pub h_scroll: usize,
    pub yank_flash: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BusyState {
    /// Requests between `before_send` and `complete`
    pub in_flight: usize,
    pub latest_issued: Option<Ticket>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AppState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            form: FormState::default(),
            display: DisplayState::default(),
            busy: BusyState::default(),
            discard_stale,
        }
    }

    pub fn selected_action(&self) -> BankingAction {
        BankingAction::from_index(self.form.selected).unwrap_or(BankingAction::CustomerInformation)
    }

    pub fn field_value(&self, action: BankingAction) -> &str {
        self.form
            .values
            .get(action.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn selected_value_mut(&mut self) -> Option<&mut String> {
        self.form.values.get_mut(self.form.selected)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.in_flight > 0
    }

    /// Put an outcome on screen unless a newer request has been issued since.
    /// Returns whether the display changed.
    pub fn apply_outcome(&mut self, ticket: Ticket, outcome: &Outcome) -> bool {
        if self.discard_stale && self.busy.latest_issued.is_some_and(|latest| latest != ticket) {
            return false;
        }

        self.display.text = outcome.text().to_string();
        self.display.outcome = Some(OutcomeKind::from(outcome));
        self.display.status = outcome.status();
        self.display.shown_ticket = Some(ticket);
        self.display.scroll = 0;
        self.display.h_scroll = 0;
        true
    }
}

impl RequestLifecycle for RwLock<AppState> {
    fn before_send(&self, ticket: Ticket) {
        if let Ok(mut s) = self.write() {
            s.busy.in_flight += 1;
            s.busy.latest_issued = s.busy.latest_issued.max(Some(ticket));
        }
    }

    fn publish(&self, ticket: Ticket, outcome: &Outcome) {
        if let Ok(mut s) = self.write() {
            if !s.apply_outcome(ticket, outcome) {
                debug!(%ticket, latest = ?s.busy.latest_issued, "discarding stale response");
            }
        }
    }

    fn complete(&self, _ticket: Ticket) {
        if let Ok(mut s) = self.write() {
            s.busy.in_flight = s.busy.in_flight.saturating_sub(1);
        }
    }
}
