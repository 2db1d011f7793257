mod actions;
mod app;
mod config;
mod endpoints;
mod logging;
mod request;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;
use config::Config;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let log_path = logging::init()?;
    let config = Config::load()?;

    info!(
        log = %log_path.display(),
        base_url = %config.gateway.base_url,
        client_id = %utils::mask_secret(&config.gateway.client_id),
        discard_stale = config.display.discard_stale,
        "starting"
    );
    if !config.gateway.has_credentials() {
        warn!(
            "No client credentials configured; set them in {} or via {}/{}",
            Config::config_path()?.display(),
            config::ENV_CLIENT_ID,
            config::ENV_CLIENT_SECRET
        );
    }

    let app = App::new(config)?;

    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
