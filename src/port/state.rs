//! Alert-state persistence port.

use crate::domain::Asset;
use crate::error::StateError;

/// Per-asset boolean alert-state store, keyed by lowercase asset symbol.
///
/// `true` means an alert already went out for the asset's current gain
/// cycle and must not repeat. The pipeline never resets a flag to `false`;
/// reset happens out-of-band.
pub trait AlertStateStore: Send + Sync {
    /// Read the flag. Missing or unparseable state reads as `false`
    /// (eligible to alert).
    fn get(&self, asset: Asset) -> Result<bool, StateError>;

    /// Persist the flag.
    fn set(&self, asset: Asset, alerted: bool) -> Result<(), StateError>;
}
