//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Credentials (the Telegram
//! token and chat ID) stay in environment variables and never appear in
//! the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::Asset;
use crate::error::{ConfigError, Result};

/// One tracked asset and its alert boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    pub asset: Asset,
    /// Minimum gain percentage that triggers a notification. Inclusive.
    pub boundary: f64,
}

/// Main application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Assets to process, in declared order, with per-asset boundaries.
    pub assets: Vec<AssetConfig>,
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub telegram: TelegramToggle,
}

/// Transaction ledger location.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Path to the JSON ledger document.
    pub path: PathBuf,
}

/// Alert-state store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Directory holding one `<asset>.txt` flag file per asset.
    pub dir: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("state"),
        }
    }
}

/// Upstream quote endpoint URLs, one per asset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub bitcoin: String,
    pub ethereum: String,
    pub cardano: String,
    pub polkadot: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            bitcoin: "https://api.coindesk.com/v1/bpi/currentprice.json".into(),
            ethereum: "https://api.coincap.io/v2/assets/ethereum".into(),
            cardano: "https://api.coingecko.com/api/v3/simple/price?ids=cardano&vs_currencies=usd"
                .into(),
            polkadot:
                "https://api.coingecko.com/api/v3/simple/price?ids=polkadot&vs_currencies=usd"
                    .into(),
        }
    }
}

impl EndpointConfig {
    /// The endpoint serving the given asset.
    #[must_use]
    pub fn url_for(&self, asset: Asset) -> &str {
        match asset {
            Asset::Bitcoin => &self.bitcoin,
            Asset::Ethereum => &self.ethereum,
            Asset::Cardano => &self.cardano,
            Asset::Polkadot => &self.polkadot,
        }
    }
}

/// Telegram delivery toggle. Credentials come from the environment; with
/// delivery disabled, notifications go to the log.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TelegramToggle {
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.assets.is_empty() {
            return Err(ConfigError::MissingField { field: "assets" }.into());
        }

        for entry in &self.assets {
            if !entry.boundary.is_finite() || entry.boundary < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "boundary",
                    reason: format!("{} for {}", entry.boundary, entry.asset),
                }
                .into());
            }
        }

        for (i, entry) in self.assets.iter().enumerate() {
            if self.assets[..i].iter().any(|e| e.asset == entry.asset) {
                return Err(ConfigError::InvalidValue {
                    field: "assets",
                    reason: format!("{} is listed twice", entry.asset),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
