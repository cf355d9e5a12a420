// src/breach/pwned.rs
use async_trait::async_trait;
use log::debug;

use super::{BreachError, BreachLookup, RangeEntry, Result, PREFIX_LEN};
use crate::core::config::Config;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Client for the Pwned Passwords range API.
pub struct PwnedPasswordsClient {
    client: reqwest::Client,
    base_url: String,
    padding: bool,
}

impl PwnedPasswordsClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.breach_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.breach_api_url.trim_end_matches('/').to_string(),
            padding: config.breach_padding,
        })
    }
}

#[async_trait]
impl BreachLookup for PwnedPasswordsClient {
    async fn lookup_by_prefix(&self, prefix: &str) -> Result<Vec<RangeEntry>> {
        if prefix.len() != PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BreachError::InvalidPrefix(prefix.to_string()));
        }

        let url = format!("{}/{}", self.base_url, prefix);
        let mut request = self.client.get(&url);
        if self.padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let entries = parse_range_body(&body);
        debug!("Range query for {} returned {} entries", prefix, entries.len());
        Ok(entries)
    }
}

/// Parses `SUFFIX:COUNT` lines. Malformed lines are skipped.
pub fn parse_range_body(body: &str) -> Vec<RangeEntry> {
    body.lines()
        .filter_map(|line| {
            let (suffix, count) = line.trim().split_once(':')?;
            let count = count.trim().parse().ok()?;
            Some(RangeEntry {
                suffix: suffix.trim().to_string(),
                count,
            })
        })
        .collect()
}
