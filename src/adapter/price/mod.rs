//! HTTP quote retrieval.
//!
//! Each asset maps to exactly one upstream endpoint and one response
//! schema family; the parser is selected by asset, never by sniffing the
//! body.

mod schema;

pub use schema::QuoteSchema;

use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::config::EndpointConfig;
use crate::domain::Asset;
use crate::error::PriceError;
use crate::port::QuoteFeed;

/// HTTP client for the upstream quote endpoints.
pub struct QuoteClient {
    http: HttpClient,
    endpoints: EndpointConfig,
}

impl QuoteClient {
    /// Create a client over the given endpoint URLs.
    ///
    /// [`EndpointConfig::default`] carries the upstream production URLs.
    #[must_use]
    pub fn new(endpoints: EndpointConfig) -> Self {
        Self {
            http: HttpClient::new(),
            endpoints,
        }
    }
}

#[async_trait]
impl QuoteFeed for QuoteClient {
    async fn current_price(&self, asset: Asset) -> Result<f64, PriceError> {
        let url = self.endpoints.url_for(asset);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        QuoteSchema::for_asset(asset).extract(asset, &body)
    }
}
