use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::{error, info};

use bagwatch::adapter::ledger::Ledger;
use bagwatch::adapter::notifier::{TelegramConfig, TelegramNotifier};
use bagwatch::adapter::price::QuoteClient;
use bagwatch::adapter::state::FileAlertStore;
use bagwatch::app::Orchestrator;
use bagwatch::cli::{check, CheckCommand, Cli, Commands};
use bagwatch::config::Config;
use bagwatch::error::{ConfigError, Result};
use bagwatch::port::{LogNotifier, Notifier};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = match Config::load(&args.config) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load config: {e}");
                    std::process::exit(1);
                }
            };

            config.init_logging();
            info!("bagwatch starting");

            tokio::select! {
                result = run(config) => {
                    if let Err(e) = result {
                        error!(error = %e, "Fatal error");
                        std::process::exit(1);
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }

            info!("bagwatch stopped");
        }
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => check::execute_config(&args.config),
            CheckCommand::Telegram(args) => {
                if let Err(e) = check::execute_telegram(&args.config).await {
                    eprintln!("✗ Telegram check failed: {e}");
                    std::process::exit(1);
                }
            }
        },
    }
}

/// Assemble the adapters and run one cycle.
async fn run(config: Config) -> Result<()> {
    let ledger = Ledger::load(&config.ledger.path)?;

    let notifier: Arc<dyn Notifier> = if config.telegram.enabled {
        let telegram = TelegramConfig::from_env().ok_or(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID environment variables",
        })?;
        Arc::new(TelegramNotifier::new(telegram))
    } else {
        info!("Telegram disabled, notifications go to the log");
        Arc::new(LogNotifier)
    };

    let quotes = Arc::new(QuoteClient::new(config.endpoints.clone()));
    let state = Arc::new(FileAlertStore::new(config.state.dir.clone()));

    let orchestrator = Orchestrator::new(config.assets, ledger, quotes, notifier, state);
    orchestrator.run_cycle().await;

    Ok(())
}
