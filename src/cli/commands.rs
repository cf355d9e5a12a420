// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a complex password (16-100 characters)
    Generate {
        /// Password length
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,
    },

    /// Generate a quantum-secure password (24-100 characters plus an 8 character tag)
    Quantum {
        /// Password length, before the tag
        #[arg(long, short, allow_negative_numbers = true)]
        length: Option<i64>,
    },

    /// Score a password and check it against the breach corpus
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,

        /// Skip the breach lookup
        #[arg(long)]
        offline: bool,
    },
}
