// src/breach/mod.rs
use async_trait::async_trait;
use log::{debug, info, warn};
use sha1::{Digest, Sha1};
use std::sync::Arc;
use thiserror::Error;

use crate::models::LeakReport;

pub mod pwned;

pub use pwned::PwnedPasswordsClient;

/// Hex characters of the SHA-1 digest sent to the lookup service.
pub const PREFIX_LEN: usize = 5;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup service returned status {0}")]
    Status(u16),

    #[error("Invalid hash prefix: {0}")]
    InvalidPrefix(String),
}

pub type Result<T> = std::result::Result<T, BreachError>;

/// One line of a range response: a hash suffix and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

/// A k-anonymity range query over a breach corpus, keyed by the first five
/// hex characters of an uppercase SHA-1 digest.
#[async_trait]
pub trait BreachLookup: Send + Sync {
    async fn lookup_by_prefix(&self, prefix: &str) -> Result<Vec<RangeEntry>>;
}

/// Checks passwords against a breach corpus without sending the password or
/// its full hash.
pub struct LeakChecker {
    lookup: Arc<dyn BreachLookup>,
    source_name: String,
}

impl LeakChecker {
    pub fn new(lookup: Arc<dyn BreachLookup>, source_name: impl Into<String>) -> Self {
        Self {
            lookup,
            source_name: source_name.into(),
        }
    }

    /// Never fails: an unreachable or failing lookup yields a report that is
    /// not leaked, with zero exposures and a note in `details`.
    pub async fn check_leak(&self, password: &str) -> LeakReport {
        let (prefix, suffix) = hash_password(password);
        let mut report = LeakReport::default();

        debug!("🔍 Querying {} for prefix {}", self.source_name, prefix);
        match self.lookup.lookup_by_prefix(&prefix).await {
            Ok(entries) => {
                for entry in entries
                    .iter()
                    .filter(|entry| entry.count > 0 && entry.suffix.eq_ignore_ascii_case(&suffix))
                {
                    report.record_exposure(&self.source_name, entry.count);
                }
                if report.leaked {
                    info!("⚠️ Password hash prefix {} matched a breached entry", prefix);
                }
            }
            Err(e) => {
                warn!("❌ Breach lookup failed for prefix {}: {}", prefix, e);
                report.record_failure(format!("Error checking {}", self.source_name));
            }
        }

        report
    }
}

/// Uppercase SHA-1 of the UTF-8 password, split into a 5-character prefix
/// and a 35-character suffix.
pub fn hash_password(password: &str) -> (String, String) {
    let digest = hex::encode_upper(Sha1::digest(password.as_bytes()));
    let (prefix, suffix) = digest.split_at(PREFIX_LEN);
    (prefix.to_string(), suffix.to_string())
}
