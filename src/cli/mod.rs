// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;

use crate::core::config::Config;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the API server to
    #[arg(long)]
    pub address: Option<String>,

    /// API server port
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Run a single operation instead of the API server
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    // Command line flags win over environment configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
        if self.debug {
            config.log_level = LevelFilter::Debug;
        }
    }
}
