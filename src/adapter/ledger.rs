//! JSON transaction ledger loading.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use crate::domain::{Asset, Transaction};
use crate::error::LedgerError;

/// Transaction history for all tracked assets.
///
/// Loaded once at startup from a JSON document mapping asset display name
/// to an ordered array of purchase lots. Entries for unknown asset names
/// are skipped with a warning; an asset without an entry is silently
/// skipped by the cycle.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: HashMap<Asset, Vec<Transaction>>,
}

impl Ledger {
    /// Load the ledger from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LedgerError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let entries: HashMap<String, Vec<Transaction>> =
            serde_json::from_str(&content).map_err(LedgerError::Parse)?;

        Ok(Self::from_entries(entries))
    }

    /// Build a ledger from already-parsed entries.
    #[must_use]
    pub fn from_entries(entries: HashMap<String, Vec<Transaction>>) -> Self {
        let mut transactions = HashMap::new();

        for (name, lots) in entries {
            match name.parse::<Asset>() {
                Ok(asset) => {
                    transactions.insert(asset, lots);
                }
                Err(_) => warn!(asset = %name, "Ignoring ledger entry for unsupported asset"),
            }
        }

        Self { transactions }
    }

    /// Transactions for one asset, `None` if the ledger has no entry.
    #[must_use]
    pub fn transactions_for(&self, asset: Asset) -> Option<&[Transaction]> {
        self.transactions.get(&asset).map(Vec::as_slice)
    }

    /// Number of assets with recorded history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
