//! Threshold and de-duplication decision for one asset.

use super::asset::Asset;

/// Outcome of evaluating one asset against its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertDecision {
    /// Whether a gain notification goes out.
    pub should_alert: bool,
    /// Alert-state flag to persist after a positive decision.
    pub new_state: bool,
}

/// Decides whether a gain notification goes out.
///
/// Holds no state; the per-asset "already alerted" flag lives behind the
/// [`AlertStateStore`](crate::port::AlertStateStore) port and is passed in
/// by the caller.
pub struct AlertGate;

impl AlertGate {
    /// Evaluate one asset's gain against its boundary.
    ///
    /// An asset already alerted this cycle is never re-alerted, regardless
    /// of gain magnitude. The boundary is inclusive: a gain exactly at the
    /// boundary alerts.
    #[must_use]
    pub fn evaluate(gain_percent: f64, boundary: f64, already_alerted: bool) -> AlertDecision {
        if already_alerted {
            return AlertDecision {
                should_alert: false,
                new_state: true,
            };
        }

        if gain_percent >= boundary {
            AlertDecision {
                should_alert: true,
                new_state: true,
            }
        } else {
            AlertDecision {
                should_alert: false,
                new_state: false,
            }
        }
    }
}

/// Gain notification body. The percentage is rounded to two decimals here
/// and nowhere else.
#[must_use]
pub fn gain_message(asset: Asset, gain_percent: f64) -> String {
    format!("You have gained in {asset}: {gain_percent:.2}%")
}

/// Failure notification body for an asset whose price could not be
/// fetched. Sent regardless of the alert-state flag.
#[must_use]
pub fn fetch_failure_message(asset: Asset) -> String {
    format!("Error fetching current {asset} price")
}
