//! The closed set of tracked assets.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PriceError;

/// A tracked cryptocurrency.
///
/// The set is closed: any other symbol fails to parse with
/// [`PriceError::UnsupportedAsset`] at the string boundary (configuration,
/// ledger keys, CLI) and never enters the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Asset {
    Bitcoin,
    Ethereum,
    Cardano,
    Polkadot,
}

impl Asset {
    /// All tracked assets, in the reference configuration order.
    pub const ALL: [Asset; 4] = [
        Asset::Bitcoin,
        Asset::Ethereum,
        Asset::Cardano,
        Asset::Polkadot,
    ];

    /// Display name as it appears in the ledger and configuration.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Asset::Bitcoin => "Bitcoin",
            Asset::Ethereum => "Ethereum",
            Asset::Cardano => "Cardano",
            Asset::Polkadot => "Polkadot",
        }
    }

    /// Lowercase key used by the alert-state store and the CoinGecko feed.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Asset::Bitcoin => "bitcoin",
            Asset::Ethereum => "ethereum",
            Asset::Cardano => "cardano",
            Asset::Polkadot => "polkadot",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Asset {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bitcoin" => Ok(Asset::Bitcoin),
            "Ethereum" => Ok(Asset::Ethereum),
            "Cardano" => Ok(Asset::Cardano),
            "Polkadot" => Ok(Asset::Polkadot),
            other => Err(PriceError::UnsupportedAsset {
                symbol: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Asset {
    type Error = PriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
