//! Configuration and delivery validation commands.

use std::path::Path;

use crate::adapter::ledger::Ledger;
use crate::adapter::notifier::{TelegramConfig, TelegramNotifier};
use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::port::Notifier;

/// Validate configuration and ledger without starting a cycle.
pub fn execute_config<P: AsRef<Path>>(config_path: P) {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    if !path.exists() {
        eprintln!("Error: Configuration file not found: {}", path.display());
        eprintln!();
        eprintln!("Create one by copying the example:");
        eprintln!("  cp config.toml.example config.toml");
        std::process::exit(1);
    }

    let config = match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Assets:");
    for entry in &config.assets {
        println!("    {} (boundary {}%)", entry.asset, entry.boundary);
    }
    println!("  Ledger: {}", config.ledger.path.display());
    println!("  State dir: {}", config.state.dir.display());
    println!();

    match Ledger::load(&config.ledger.path) {
        Ok(ledger) => println!("✓ Ledger loaded ({} assets with history)", ledger.len()),
        Err(e) => {
            eprintln!("✗ Ledger error: {e}");
            std::process::exit(1);
        }
    }

    if config.telegram.enabled {
        if TelegramConfig::from_env().is_some() {
            println!("✓ Telegram configured and enabled");
        } else {
            println!("⚠ Telegram enabled but missing environment variables:");
            if std::env::var("TELEGRAM_BOT_TOKEN").is_err() {
                println!("    - TELEGRAM_BOT_TOKEN");
            }
            if std::env::var("TELEGRAM_CHAT_ID").is_err() {
                println!("    - TELEGRAM_CHAT_ID");
            }
        }
    } else {
        println!("  Telegram: disabled (notifications go to the log)");
    }

    println!();
    println!("Configuration is ready to use.");
}

/// Send a Telegram test message using the configured credentials.
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;

    let telegram = TelegramConfig::from_env().ok_or(ConfigError::MissingField {
        field: "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID environment variables",
    })?;

    let assets: Vec<&str> = config.assets.iter().map(|a| a.asset.name()).collect();
    let message = format!("Bagwatch test message. Tracking: {}", assets.join(", "));

    TelegramNotifier::new(telegram).send(&message).await?;

    println!("✓ Telegram test message sent");
    println!("  Check Telegram for the message.");

    Ok(())
}
