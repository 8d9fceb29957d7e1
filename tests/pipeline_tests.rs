//! End-to-end valuation-and-alert cycles over stub ports.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use bagwatch::adapter::ledger::Ledger;
use bagwatch::adapter::state::MemoryAlertStore;
use bagwatch::app::Orchestrator;
use bagwatch::config::AssetConfig;
use bagwatch::domain::{Asset, Transaction};
use bagwatch::error::{NotifyError, PriceError};
use bagwatch::port::{AlertStateStore, Notifier, QuoteFeed};

/// Quote feed with a scripted outcome per asset.
#[derive(Default)]
struct ScriptedQuotes {
    prices: HashMap<Asset, f64>,
    failing: Vec<Asset>,
}

impl ScriptedQuotes {
    fn price(mut self, asset: Asset, price: f64) -> Self {
        self.prices.insert(asset, price);
        self
    }

    fn fails(mut self, asset: Asset) -> Self {
        self.failing.push(asset);
        self
    }
}

#[async_trait]
impl QuoteFeed for ScriptedQuotes {
    async fn current_price(&self, asset: Asset) -> Result<f64, PriceError> {
        if self.failing.contains(&asset) {
            return Err(PriceError::MissingQuote { asset });
        }

        self.prices
            .get(&asset)
            .copied()
            .ok_or(PriceError::UnsupportedAsset {
                symbol: asset.name().to_string(),
            })
    }
}

/// Collects every delivered message.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.lock().push(message.to_string());
        Ok(())
    }
}

/// Rejects every delivery.
struct BrokenNotifier;

#[async_trait]
impl Notifier for BrokenNotifier {
    async fn send(&self, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: "stubbed outage".into(),
        })
    }
}

fn lot(price: f64, amount: f64) -> Transaction {
    Transaction {
        purchase_date: "2021-01-01".into(),
        purchase_price: price,
        crypto_amount: amount,
    }
}

fn ledger_with(entries: Vec<(&str, Vec<Transaction>)>) -> Ledger {
    Ledger::from_entries(
        entries
            .into_iter()
            .map(|(name, lots)| (name.to_string(), lots))
            .collect(),
    )
}

fn tracked(asset: Asset, boundary: f64) -> AssetConfig {
    AssetConfig { asset, boundary }
}

#[tokio::test]
async fn gain_at_boundary_alerts_and_persists_state() {
    let ledger = ledger_with(vec![("Bitcoin", vec![lot(100.0, 1.0), lot(200.0, 2.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    // invested 300, units 3, price 150 -> value 450, gain exactly 50%
    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Bitcoin, 150.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert_eq!(notifier.sent(), vec!["You have gained in Bitcoin: 50.00%"]);
    assert!(state.get(Asset::Bitcoin).unwrap());
}

#[tokio::test]
async fn second_cycle_does_not_realert() {
    let ledger = ledger_with(vec![("Bitcoin", vec![lot(100.0, 1.0), lot(200.0, 2.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Bitcoin, 150.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;
    orchestrator.run_cycle().await;

    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn preexisting_alert_state_suppresses_the_gain_message() {
    let ledger = ledger_with(vec![("Bitcoin", vec![lot(100.0, 1.0), lot(200.0, 2.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());
    state.seed(Asset::Bitcoin, true);

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Bitcoin, 150.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert!(notifier.sent().is_empty());
    assert!(state.get(Asset::Bitcoin).unwrap());
}

#[tokio::test]
async fn below_boundary_stays_silent_and_eligible() {
    let ledger = ledger_with(vec![("Ethereum", vec![lot(1000.0, 2.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    // invested 1000, value 1200, gain 20% < boundary 100%
    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Ethereum, 100.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Ethereum, 600.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert!(notifier.sent().is_empty());
    assert!(!state.get(Asset::Ethereum).unwrap());
}

#[tokio::test]
async fn fetch_failure_sends_the_failure_message() {
    let ledger = ledger_with(vec![("Cardano", vec![lot(50.0, 100.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Cardano, 100.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().fails(Asset::Cardano)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert_eq!(notifier.sent(), vec!["Error fetching current Cardano price"]);
    assert!(!state.get(Asset::Cardano).unwrap());
}

#[tokio::test]
async fn fetch_failure_ignores_the_alert_state_flag() {
    let ledger = ledger_with(vec![("Cardano", vec![lot(50.0, 100.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());
    state.seed(Asset::Cardano, true);

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Cardano, 100.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().fails(Asset::Cardano)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    // The failure notification bypasses de-duplication and leaves the
    // flag as it was.
    assert_eq!(notifier.sent(), vec!["Error fetching current Cardano price"]);
    assert!(state.get(Asset::Cardano).unwrap());
}

#[tokio::test]
async fn zero_price_routes_to_the_failure_path() {
    let ledger = ledger_with(vec![("Polkadot", vec![lot(10.0, 5.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Polkadot, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Polkadot, 0.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert_eq!(
        notifier.sent(),
        vec!["Error fetching current Polkadot price"]
    );
    assert!(!state.get(Asset::Polkadot).unwrap());
}

#[tokio::test]
async fn asset_without_ledger_entry_is_skipped_silently() {
    let ledger = ledger_with(vec![("Bitcoin", vec![lot(100.0, 1.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Ethereum, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Ethereum, 1000.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn zero_cost_basis_is_skipped_without_notification() {
    let ledger = ledger_with(vec![("Bitcoin", vec![lot(0.0, 1.0)])]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 50.0)],
        ledger,
        Arc::new(ScriptedQuotes::default().price(Asset::Bitcoin, 150.0)),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert!(notifier.sent().is_empty());
    assert!(!state.get(Asset::Bitcoin).unwrap());
}

#[tokio::test]
async fn one_failing_asset_does_not_block_the_rest() {
    let ledger = ledger_with(vec![
        ("Bitcoin", vec![lot(100.0, 1.0)]),
        ("Polkadot", vec![lot(10.0, 5.0)]),
    ]);
    let notifier = Arc::new(RecordingNotifier::default());
    let state = Arc::new(MemoryAlertStore::new());

    // Bitcoin's feed fails; Polkadot still values and alerts (invested 10,
    // value 50, gain 400%).
    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 50.0), tracked(Asset::Polkadot, 50.0)],
        ledger,
        Arc::new(
            ScriptedQuotes::default()
                .fails(Asset::Bitcoin)
                .price(Asset::Polkadot, 10.0),
        ),
        notifier.clone(),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    assert_eq!(
        notifier.sent(),
        vec![
            "Error fetching current Bitcoin price",
            "You have gained in Polkadot: 400.00%"
        ]
    );
    assert!(state.get(Asset::Polkadot).unwrap());
}

#[tokio::test]
async fn delivery_failure_does_not_abort_the_cycle() {
    let ledger = ledger_with(vec![
        ("Bitcoin", vec![lot(100.0, 1.0)]),
        ("Polkadot", vec![lot(10.0, 5.0)]),
    ]);
    let state = Arc::new(MemoryAlertStore::new());

    let orchestrator = Orchestrator::new(
        vec![tracked(Asset::Bitcoin, 0.0), tracked(Asset::Polkadot, 50.0)],
        ledger,
        Arc::new(
            ScriptedQuotes::default()
                .price(Asset::Bitcoin, 150.0)
                .price(Asset::Polkadot, 10.0),
        ),
        Arc::new(BrokenNotifier),
        state.clone(),
    );
    orchestrator.run_cycle().await;

    // Both alert decisions still landed in the store.
    assert!(state.get(Asset::Bitcoin).unwrap());
    assert!(state.get(Asset::Polkadot).unwrap());
}
