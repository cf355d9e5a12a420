// src/generators/mod.rs
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

pub mod charset;
pub mod complex;
pub mod quantum;

pub use complex::{ComplexGenerator, COMPLEX_LENGTH};
pub use quantum::{QuantumGenerator, QUANTUM_LENGTH};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length {length} is below the minimum of {minimum}")]
    LengthTooShort { length: usize, minimum: usize },

    #[error("Random source error: {0}")]
    Rng(#[from] rand::Error),

    #[error("Could not produce a password satisfying all constraints")]
    Unsatisfiable,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Accepted and default lengths for one generator, applied at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    pub default: usize,
    pub min: usize,
    pub max: usize,
}

impl LengthPolicy {
    /// Clamp a requested length into range; no request means the default.
    pub fn clamp(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(length) => length.clamp(self.min as i64, self.max as i64) as usize,
            None => self.default,
        }
    }

    /// Same as [`clamp`](Self::clamp) for raw input. Anything that is not an
    /// integer falls back to the default instead of failing.
    pub fn parse(&self, requested: Option<&str>) -> usize {
        self.clamp(requested.and_then(|raw| raw.trim().parse::<i64>().ok()))
    }
}

// A fresh generator per call, seeded from the OS. Nothing is shared between requests.
pub(crate) fn fresh_rng() -> Result<ChaCha20Rng> {
    Ok(ChaCha20Rng::from_rng(OsRng)?)
}
