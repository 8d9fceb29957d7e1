//! Portfolio valuation domain logic. Pure, no I/O.

mod asset;
mod error;
mod gain;
mod gate;
mod portfolio;
mod transaction;

// Core domain types
pub use asset::Asset;
pub use error::GainError;
pub use portfolio::PortfolioTotals;
pub use transaction::Transaction;

// Gain computation
pub use gain::percent_change;

// Alert gating and message presentation
pub use gate::{fetch_failure_message, gain_message, AlertDecision, AlertGate};
