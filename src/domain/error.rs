//! Domain validation errors.
//!
//! Errors returned when a valuation cannot be computed from the data at
//! hand. These are per-asset: the orchestrator logs them and moves on to
//! the next asset.

use thiserror::Error;

/// Errors from the gain computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GainError {
    /// Percentage change over a zero cost basis is undefined.
    #[error("total invested is zero, percentage change is undefined")]
    ZeroInvested,
}
