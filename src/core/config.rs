// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::breach::pwned::DEFAULT_API_URL;

// Runtime configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub cors_origin: Option<String>,

    // Breach Lookup
    pub breach_api_url: String,
    pub breach_timeout: Duration,
    pub breach_padding: bool,
    pub breach_source_name: String,
    pub user_agent: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,
            cors_origin: None,

            // Breach Lookup
            breach_api_url: DEFAULT_API_URL.to_string(),
            breach_timeout: Duration::from_secs(5),
            breach_padding: true,
            breach_source_name: "HaveIBeenPwned Database".to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Ignoring invalid WEB_PORT '{}'", val),
            }
        }

        if let Ok(origin) = env::var("CORS_ORIGIN") {
            if !origin.trim().is_empty() {
                config.cors_origin = Some(origin);
            }
        }

        // Breach Lookup
        if let Ok(url) = env::var("BREACH_API_URL") {
            config.breach_api_url = url;
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.breach_timeout = Duration::from_secs(secs),
                _ => log::warn!("Ignoring invalid BREACH_TIMEOUT_SECS '{}'", val),
            }
        }

        if let Ok(val) = env::var("BREACH_PADDING") {
            match val.parse() {
                Ok(padding) => config.breach_padding = padding,
                Err(_) => log::warn!("Ignoring invalid BREACH_PADDING '{}'", val),
            }
        }

        if let Ok(name) = env::var("BREACH_SOURCE_NAME") {
            config.breach_source_name = name;
        }

        if let Ok(agent) = env::var("BREACH_USER_AGENT") {
            config.user_agent = agent;
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Ignoring invalid LOG_LEVEL '{}'", level),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 5000));
        assert_eq!(config.breach_api_url, "https://api.pwnedpasswords.com/range");
        assert_eq!(config.breach_timeout, Duration::from_secs(5));
        assert!(config.breach_padding);
        assert!(config.user_agent.starts_with("rust_passguard/"));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
