//! App orchestration module.
//!
//! One valuation-and-alert cycle: value every configured asset against a
//! live quote and push a notification when its gain crosses the boundary.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::adapter::ledger::Ledger;
use crate::config::AssetConfig;
use crate::domain::{
    fetch_failure_message, gain_message, percent_change, AlertGate, PortfolioTotals,
};
use crate::port::{AlertStateStore, Notifier, QuoteFeed};

/// Drives one pass over all tracked assets.
///
/// Assets are processed sequentially in declared order; a failure in one
/// asset never aborts the remaining assets.
pub struct Orchestrator {
    assets: Vec<AssetConfig>,
    ledger: Ledger,
    quotes: Arc<dyn QuoteFeed>,
    notifier: Arc<dyn Notifier>,
    state: Arc<dyn AlertStateStore>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(
        assets: Vec<AssetConfig>,
        ledger: Ledger,
        quotes: Arc<dyn QuoteFeed>,
        notifier: Arc<dyn Notifier>,
        state: Arc<dyn AlertStateStore>,
    ) -> Self {
        Self {
            assets,
            ledger,
            quotes,
            notifier,
            state,
        }
    }

    /// Run one cycle over the configured assets.
    pub async fn run_cycle(&self) {
        for entry in &self.assets {
            self.process_asset(entry).await;
        }
    }

    async fn process_asset(&self, entry: &AssetConfig) {
        let asset = entry.asset;

        let Some(transactions) = self.ledger.transactions_for(asset) else {
            debug!(asset = asset.key(), "No ledger entry, skipping");
            return;
        };

        let totals = PortfolioTotals::from_transactions(transactions);

        // A quote of exactly zero is "no usable price": it routes to the
        // failure notification, and the alert-state flag is neither read
        // nor written this cycle.
        let price = match self.quotes.current_price(asset).await {
            Ok(price) if price != 0.0 => price,
            Ok(_) => {
                warn!(asset = asset.key(), "Quote came back as zero, no usable price");
                self.notify(&fetch_failure_message(asset)).await;
                return;
            }
            Err(e) => {
                warn!(asset = asset.key(), error = %e, "Price fetch failed");
                self.notify(&fetch_failure_message(asset)).await;
                return;
            }
        };

        let already_alerted = match self.state.get(asset) {
            Ok(flag) => flag,
            Err(e) => {
                warn!(
                    asset = asset.key(),
                    error = %e,
                    "Alert state read failed, treating as not yet alerted"
                );
                false
            }
        };

        let current_value = totals.current_value(price);

        let gain = match percent_change(totals.total_invested, current_value) {
            Ok(gain) => gain,
            Err(e) => {
                error!(asset = asset.key(), error = %e, "Skipping asset with unusable cost basis");
                return;
            }
        };

        info!(
            asset = asset.key(),
            invested = totals.total_invested,
            units = totals.total_units,
            price_usd = price,
            current_value,
            gain_percent = gain,
            "Valuation"
        );

        let decision = AlertGate::evaluate(gain, entry.boundary, already_alerted);
        if !decision.should_alert {
            debug!(
                asset = asset.key(),
                already_alerted,
                gain_percent = gain,
                boundary = entry.boundary,
                "No alert"
            );
            return;
        }

        self.notify(&gain_message(asset, gain)).await;

        if let Err(e) = self.state.set(asset, decision.new_state) {
            warn!(
                asset = asset.key(),
                error = %e,
                "Alert state write failed, a future run may re-alert"
            );
        }
    }

    async fn notify(&self, message: &str) {
        if let Err(e) = self.notifier.send(message).await {
            warn!(error = %e, "Notification delivery failed");
        }
    }
}
