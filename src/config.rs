use crate::error::{CompassError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.compasslabs.ai/beta/v0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompassConfig {
    pub api: ApiConfig,
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    // Public wallet address sent as `sender`
    pub sender: String,
}

fn default_user_agent() -> String {
    format!("compass-allowance/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                user_agent: default_user_agent(),
            },
            wallet: WalletConfig {
                sender: String::new(),
            },
        }
    }
}

impl CompassConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("COMPASS_API_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.api.base_url = base_url;
            }
        }

        if let Ok(user_agent) = std::env::var("COMPASS_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.api.user_agent = user_agent;
            }
        }

        config.wallet.sender = std::env::var("COMPASS_SENDER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| CompassError::config_error("COMPASS_SENDER must be set"))?;

        Ok(config)
    }

    /// Reads the TOML file named by `COMPASS_CONFIG` when set, otherwise the
    /// `COMPASS_*` environment variables.
    pub fn load() -> Result<Self> {
        match std::env::var("COMPASS_CONFIG") {
            Ok(path) => Self::from_file(&path),
            Err(_) => Self::from_env(),
        }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CompassError::config_error(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CompassConfig = toml::from_str(content).map_err(|e| {
            CompassError::config_error(format!("Failed to parse config file: {}", e))
        })?;

        if config.wallet.sender.trim().is_empty() {
            return Err(CompassError::config_error("wallet.sender must be set"));
        }

        Ok(config)
    }
}
