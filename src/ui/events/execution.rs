//! Request execution handlers
//!
//! Turns a form row into a request descriptor and hands it to the invoker.
//! The shared state doubles as the invoker's lifecycle, so the busy overlay
//! and the result panel update on their own as the request progresses.

use super::helpers::read_state;
use crate::config::EndpointsConfig;
use crate::endpoints::BankingAction;
use crate::request::{execute_request_background, Invoker, Transport};
use crate::state::AppState;
use crate::types::Outcome;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use tracing::info;

/// Send the request for `action` using the current value of its field
pub fn handle_execute<T: Transport + 'static>(
    action: BankingAction,
    state: &Arc<RwLock<AppState>>,
    invoker: &Arc<Invoker<T>>,
    endpoints: &EndpointsConfig,
) -> JoinHandle<Outcome> {
    let descriptor = {
        let s = read_state(state);
        action.descriptor(s.field_value(action), endpoints)
    };

    info!(action = action.label(), path = %descriptor.path, "sending request");
    execute_request_background(Arc::clone(invoker), descriptor, Arc::clone(state))
}
