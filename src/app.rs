use crate::config::{Config, EndpointsConfig};
use crate::request::Invoker;
use crate::state::AppState;
use crate::ui;
use crate::ui::draw;
use crate::ui::events::read_state;
use color_eyre::Result;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::info;

pub struct App {
    state: Arc<RwLock<AppState>>,
    invoker: Arc<Invoker>,
    endpoints: EndpointsConfig,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    /// Build the app from a loaded configuration. The gateway settings are
    /// frozen here for the rest of the process.
    pub fn new(config: Config) -> Result<Self> {
        let Config {
            gateway,
            endpoints,
            display,
        } = config;

        let invoker = Invoker::from_config(Arc::new(gateway))?;
        let state = AppState::new(display.discard_stale);

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            invoker: Arc::new(invoker),
            endpoints,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!(base_url = %self.invoker.gateway().base_url, "UI started");

        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % draw::SPINNER_FRAMES.len();
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler
                .handle_events(&self.state, &self.invoker, &self.endpoints)?;
        }

        info!("UI stopped");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let state = read_state(&self.state);

        // Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1]);

        draw::render_header(
            frame,
            main_chunks[0],
            self.invoker.gateway(),
            state.busy.in_flight,
            self.spinner_index,
        );
        draw::render_form_panel(frame, body_chunks[0], &state);
        draw::render_result_panel(frame, body_chunks[1], &state);
        draw::render_footer(frame, main_chunks[2]);

        // Render modals LAST - after everything else
        if state.is_busy() {
            draw::render_busy_modal(frame, state.busy.in_flight, self.spinner_index);
        }
    }
}
