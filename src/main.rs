use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;
mod utils;

use crate::breach::{LeakChecker, PwnedPasswordsClient};
use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();
    args.apply(&mut config);

    logging::init(&config)?;
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    if let Some(command) = args.command {
        return cli::handlers::run(command, &config).await;
    }

    log::info!("🔒 Starting PassGuard - password generator & breach checker");

    let lookup = PwnedPasswordsClient::new(&config)?;
    let checker = LeakChecker::new(Arc::new(lookup), config.breach_source_name.clone());

    api::start_server(&config, checker).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })?;

    log::info!("✅ PassGuard shutdown complete.");
    Ok(())
}
