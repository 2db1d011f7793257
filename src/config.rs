use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "banking-api-tui";

pub const DEFAULT_BASE_URL: &str =
    "https://api.us.apiconnect.ibmcloud.com/spbodieusibmcom-prod/developer-contest/mplbank";
pub const DEFAULT_CLIENT_ID_HEADER: &str = "x-ibm-client-id";
pub const DEFAULT_CLIENT_SECRET_HEADER: &str = "x-ibm-client-secret";
pub const DEFAULT_BALANCE_DATE: &str = "2019-10-10";

pub const ENV_BASE_URL: &str = "BANKING_API_BASE_URL";
pub const ENV_CLIENT_ID: &str = "BANKING_API_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BANKING_API_CLIENT_SECRET";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub endpoints: EndpointsConfig,
    pub display: DisplayConfig,
}

/// Where requests go and how they authenticate. Fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub client_id_header: String,
    pub client_secret_header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            client_id_header: DEFAULT_CLIENT_ID_HEADER.to_string(),
            client_secret_header: DEFAULT_CLIENT_SECRET_HEADER.to_string(),
            timeout_secs: None,
        }
    }
}

impl GatewayConfig {
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Literal `date` filter appended to balance inquiries; omitted when unset or empty
    pub balance_date: Option<String>,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            balance_date: Some(DEFAULT_BALANCE_DATE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Only the most recently issued request may update the result panel
    pub discard_stale: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            discard_stale: true,
        }
    }
}

impl Config {
    /// Get the app directory under ~/.config, creating it if needed
    pub fn app_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not find home directory"))?;

        let app_dir = home_dir.join(".config").join(APP_DIR);

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// Load config from file (writing a template on first run), then apply
    /// environment overrides and validate
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            Self::from_toml(&contents)?
        } else {
            let config = Self::default();
            config.save()?;
            config
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        validate_url(&config.gateway.base_url).map_err(|e| {
            color_eyre::eyre::eyre!("Invalid gateway.base_url in {}: {e}", config_path.display())
        })?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(&config_path, toml_string)?;
        Ok(())
    }

    /// Override gateway settings from the environment. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.gateway.base_url = base_url;
        }
        if let Some(client_id) = lookup(ENV_CLIENT_ID) {
            self.gateway.client_id = client_id;
        }
        if let Some(client_secret) = lookup(ENV_CLIENT_SECRET) {
            self.gateway.client_secret = client_secret;
        }
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(url).map_err(|e| format!("Invalid URL format: {e}"))?;

    Ok(())
}
