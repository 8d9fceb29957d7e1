//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the extension points between the valuation-and-alert pipeline
//! and the outside world. Adapters implement them against real systems
//! (quote endpoints, Telegram, the state directory); tests implement them
//! as stubs.
//!
//! # Available Ports
//!
//! - [`QuoteFeed`] - current USD price retrieval, one upstream call per ask
//! - [`Notifier`] - plain-text chat delivery (Telegram, logging, null)
//! - [`AlertStateStore`] - per-asset "already alerted" boolean persistence

mod notifier;
mod quote;
mod state;

pub use notifier::{LogNotifier, Notifier, NullNotifier};
pub use quote::QuoteFeed;
pub use state::AlertStateStore;
