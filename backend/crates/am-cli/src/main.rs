//! automate - AutoMate portal CLI
//!
//! Log in with a demo account and talk to the workflow assistants through
//! the configured automation webhook.
//!
//! # Examples
//!
//! ```bash
//! # Point at the webhook
//! export AUTOMATE_WEBHOOK_URL=https://n8n.example.com/webhook/automate
//!
//! # Log in and check connectivity
//! automate login --username developer --password workflow123
//! automate test-webhook --card email
//!
//! # Talk to an assistant
//! automate chat "Hvor finder jeg afsnittet om revisionsprotokol?"
//! automate economics --customer 1042 --period 2026-Q1 --pretty
//! ```

use am_cli::{Cli, CliResult, SendIndicators, WebhookClient, execute, logger};
use am_config::Config;
use am_session::{FileStorage, SessionStore, UserDataStorage};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use serde_json::{Value, json};

const MAINTENANCE_MESSAGE: &str =
    "AutoMate is undergoing maintenance. Please check back again shortly.";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting automate v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.app.maintenance_mode {
        info!("Maintenance mode enabled; no commands are run");
        print_json(
            &json!({ "maintenance": true, "message": MAINTENANCE_MESSAGE }),
            cli.pretty,
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    let backend = Arc::new(FileStorage::new(config.storage_path()?));
    let storage = UserDataStorage::new(backend);
    let mut session = SessionStore::initialize(storage.clone());
    let client = WebhookClient::from_config(&config, storage);

    let indicators = SendIndicators::new();
    let outcome = execute(cli.command, &mut session, &client, &indicators).await?;
    print_json(&outcome.value, cli.pretty)?;

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json(value: &Value, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{json}");
    Ok(())
}
