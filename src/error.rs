use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Asset, GainError};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Price retrieval errors.
///
/// One upstream call is made per asset per cycle; every failure here routes
/// that asset to the failure-notification path and the cycle moves on.
#[derive(Error, Debug)]
pub enum PriceError {
    /// Symbol outside the tracked set. Surfaces at the string boundary
    /// (configuration, ledger keys), before any network call.
    #[error("unsupported crypto asset: {symbol}")]
    UnsupportedAsset { symbol: String },

    /// Transport failure or non-success status from a quote endpoint.
    #[error("failed to fetch quote: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Malformed or non-numeric quote payload.
    #[error("failed to parse quote payload: {reason}")]
    Parse { reason: String },

    /// Payload parsed but carries no entry for the requested asset.
    #[error("quote payload has no entry for {asset}")]
    MissingQuote { asset: Asset },
}

/// Ledger file errors. Fatal at startup only.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to read ledger file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ledger file: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Alert-state store errors. Logged, never fatal to a cycle: a read
/// failure reads as "not yet alerted", a write failure means a future run
/// may re-alert.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to read alert state for {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write alert state for {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Notification delivery errors. Logged, never escalated.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to deliver notification: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notification rejected: {status} {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Gain(#[from] GainError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
