//! Response schema families for the upstream quote sources.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::Asset;
use crate::error::PriceError;

/// The known upstream response shapes.
///
/// A closed set selected by asset; each variant pulls a USD price out of
/// its raw body through the same `extract` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSchema {
    /// Coindesk current-price document: `{"bpi":{"USD":{"rate_float":..}}}`.
    Coindesk,
    /// CoinCap asset document: `{"data":{"priceUsd":"<decimal string>"}}`.
    CoinCap,
    /// CoinGecko simple-price document: `{"<asset>":{"usd":..}}`, keyed by
    /// lowercase asset symbol.
    CoinGecko,
}

impl QuoteSchema {
    /// The schema family serving the given asset.
    #[must_use]
    pub fn for_asset(asset: Asset) -> Self {
        match asset {
            Asset::Bitcoin => QuoteSchema::Coindesk,
            Asset::Ethereum => QuoteSchema::CoinCap,
            Asset::Cardano | Asset::Polkadot => QuoteSchema::CoinGecko,
        }
    }

    /// Extract the USD price for `asset` from a raw response body.
    ///
    /// A CoinGecko payload without an entry for the requested asset is a
    /// [`PriceError::MissingQuote`], distinct from a legitimately-zero
    /// price.
    pub fn extract(&self, asset: Asset, body: &[u8]) -> Result<f64, PriceError> {
        match self {
            QuoteSchema::Coindesk => {
                let quote: CoindeskQuote = parse(body)?;
                Ok(quote.bpi.usd.rate_float)
            }
            QuoteSchema::CoinCap => {
                let quote: CoinCapQuote = parse(body)?;
                quote
                    .data
                    .price_usd
                    .parse::<f64>()
                    .map_err(|_| PriceError::Parse {
                        reason: format!("priceUsd is not numeric: {:?}", quote.data.price_usd),
                    })
            }
            QuoteSchema::CoinGecko => {
                let quote: CoinGeckoQuote = parse(body)?;
                quote
                    .0
                    .get(asset.key())
                    .map(|entry| entry.usd)
                    .ok_or(PriceError::MissingQuote { asset })
            }
        }
    }
}

fn parse<'de, T: Deserialize<'de>>(body: &'de [u8]) -> Result<T, PriceError> {
    serde_json::from_slice(body).map_err(|e| PriceError::Parse {
        reason: e.to_string(),
    })
}

#[derive(Deserialize)]
struct CoindeskQuote {
    bpi: CoindeskBpi,
}

#[derive(Deserialize)]
struct CoindeskBpi {
    #[serde(rename = "USD")]
    usd: CoindeskUsd,
}

#[derive(Deserialize)]
struct CoindeskUsd {
    rate_float: f64,
}

#[derive(Deserialize)]
struct CoinCapQuote {
    data: CoinCapData,
}

#[derive(Deserialize)]
struct CoinCapData {
    #[serde(rename = "priceUsd")]
    price_usd: String,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct CoinGeckoQuote(HashMap<String, CoinGeckoEntry>);

#[derive(Deserialize)]
struct CoinGeckoEntry {
    usd: f64,
}
