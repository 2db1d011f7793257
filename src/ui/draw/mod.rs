//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer)
//! - `modals`: The busy overlay
//! - `panels`: Main panels (request form, result)
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;

// Re-export public API
pub use components::{render_footer, render_header};
pub use modals::render_busy_modal;
pub use panels::{render_form_panel, render_result_panel};
pub use styling::SPINNER_FRAMES;
