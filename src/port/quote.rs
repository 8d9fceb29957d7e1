//! Quote retrieval port.

use async_trait::async_trait;

use crate::domain::Asset;
use crate::error::PriceError;

/// Source of current USD prices.
///
/// One upstream call per invocation; implementations do not retry, cache,
/// or rate-limit. A cycle takes the quote it gets or routes the asset to
/// the failure-notification path.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    /// Fetch the current USD price for one asset.
    async fn current_price(&self, asset: Asset) -> Result<f64, PriceError>;
}
