use serde::Deserialize;

/// One historical purchase lot, supplied wholesale by the ledger.
///
/// Immutable once loaded. `purchase_date` is carried for display but never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub purchase_date: String,
    /// Cost paid for this lot, in USD.
    pub purchase_price: f64,
    /// Units acquired.
    pub crypto_amount: f64,
}
