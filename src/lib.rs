//! Bagwatch - crypto portfolio gain alerting.
//!
//! Tracks holdings in a fixed set of crypto assets, values them against
//! live quotes, and pushes a chat notification when an asset's gain
//! crosses its configured boundary. One cycle per invocation; an external
//! scheduler provides the cadence.
//!
//! # Architecture
//!
//! Hexagonal: pure domain arithmetic behind ports, adapters for the
//! outside world.
//!
//! - [`domain`] - asset set, transaction lots, portfolio totals, gain
//!   computation, alert gate
//! - [`port`] - traits for quote retrieval, chat delivery, and alert-state
//!   persistence
//! - [`adapter`] - reqwest quote client with per-source schema parsers,
//!   Telegram notifier, file-backed alert-state store, JSON ledger loader
//! - [`app`] - the orchestrator driving one valuation-and-alert cycle
//! - [`config`] - TOML configuration with environment-variable credentials
//! - [`error`] - error types for the crate
//! - [`cli`] - command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use bagwatch::adapter::ledger::Ledger;
//! use bagwatch::adapter::price::QuoteClient;
//! use bagwatch::adapter::state::FileAlertStore;
//! use bagwatch::app::Orchestrator;
//! use bagwatch::config::Config;
//! use bagwatch::port::LogNotifier;
//!
//! # async fn run() -> bagwatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let ledger = Ledger::load(&config.ledger.path)?;
//!
//! let orchestrator = Orchestrator::new(
//!     config.assets,
//!     ledger,
//!     Arc::new(QuoteClient::new(config.endpoints)),
//!     Arc::new(LogNotifier),
//!     Arc::new(FileAlertStore::new(config.state.dir)),
//! );
//! orchestrator.run_cycle().await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
