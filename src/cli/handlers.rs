// src/cli/handlers.rs
use anyhow::Context;
use serde::Serialize;
use std::sync::Arc;

use super::CliCommand;
use crate::api::types::{CheckPasswordResponse, PasswordResponse};
use crate::breach::{LeakChecker, PwnedPasswordsClient};
use crate::core::config::Config;
use crate::generators::{ComplexGenerator, QuantumGenerator, COMPLEX_LENGTH, QUANTUM_LENGTH};
use crate::strength::StrengthScorer;

// Run one command and print its result as JSON on stdout
pub async fn run(command: CliCommand, config: &Config) -> anyhow::Result<()> {
    match command {
        CliCommand::Generate { length } => {
            let password = ComplexGenerator::new()
                .generate(COMPLEX_LENGTH.clamp(length))
                .context("Failed to generate password")?;
            print_json(&PasswordResponse { password })
        }
        CliCommand::Quantum { length } => {
            let password = QuantumGenerator::new()
                .generate(QUANTUM_LENGTH.clamp(length))
                .context("Failed to generate quantum-secure password")?;
            print_json(&PasswordResponse { password })
        }
        CliCommand::Check { password, offline } => {
            let report = StrengthScorer::new().score(&password);
            if offline {
                return print_json(&report);
            }

            let lookup = PwnedPasswordsClient::new(config).context("Failed to build HTTP client")?;
            let checker = LeakChecker::new(Arc::new(lookup), config.breach_source_name.clone());
            let leak_check = checker.check_leak(&password).await;
            print_json(&CheckPasswordResponse { report, leak_check })
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
