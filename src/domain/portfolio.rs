use super::transaction::Transaction;

/// Totals for one asset's holdings, derived fresh each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioTotals {
    /// Sum of purchase cost across all lots, in USD.
    pub total_invested: f64,
    /// Sum of units acquired across all lots.
    pub total_units: f64,
}

impl PortfolioTotals {
    /// Sum purchase cost and units across a transaction list.
    ///
    /// An empty list yields zero totals; the caller decides whether that
    /// asset is processed at all.
    #[must_use]
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_invested = 0.0;
        let mut total_units = 0.0;

        for transaction in transactions {
            total_invested += transaction.purchase_price;
            total_units += transaction.crypto_amount;
        }

        Self {
            total_invested,
            total_units,
        }
    }

    /// Market value of the held units at the given USD price.
    #[must_use]
    pub fn current_value(&self, price_usd: f64) -> f64 {
        self.total_units * price_usd
    }
}
