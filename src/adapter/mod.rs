//! Adapters implementing the ports against external systems.

pub mod ledger;
pub mod notifier;
pub mod price;
pub mod state;
