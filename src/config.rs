//! Process configuration
//!
//! Read once from the environment at startup. Every variable has a default
//! so a bare `polyglot-relay` starts against a local LibreTranslate.

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_PATH: &str = "relay.db";
const DEFAULT_STORAGE_DIR: &str = "translated";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080/files";
const DEFAULT_TRANSLATE_URL: &str = "http://localhost:5000";
const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings needed to wire the ports and serve the endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub storage_dir: PathBuf,
    /// Base of the URLs handed back for stored documents
    pub public_url: String,
    pub translate_url: String,
    pub translate_api_key: Option<String>,
    pub translate_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from `RELAY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let public_url = var("RELAY_PUBLIC_URL").unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());
        let translate_url =
            var("RELAY_TRANSLATE_URL").unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string());

        Ok(Self {
            bind_addr: parse(
                "RELAY_BIND_ADDR",
                var("RELAY_BIND_ADDR").as_deref().unwrap_or(DEFAULT_BIND_ADDR),
            )?,
            database_path: var("RELAY_DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
                .into(),
            storage_dir: var("RELAY_STORAGE_DIR")
                .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string())
                .into(),
            public_url: require_http_url("RELAY_PUBLIC_URL", public_url)?,
            translate_url: require_http_url("RELAY_TRANSLATE_URL", translate_url)?,
            translate_api_key: var("RELAY_TRANSLATE_API_KEY"),
            translate_timeout: Duration::from_secs(match var("RELAY_TRANSLATE_TIMEOUT_SECS") {
                Some(value) => parse("RELAY_TRANSLATE_TIMEOUT_SECS", &value)?,
                None => DEFAULT_TRANSLATE_TIMEOUT_SECS,
            }),
            max_upload_bytes: match var("RELAY_MAX_UPLOAD_BYTES") {
                Some(value) => parse("RELAY_MAX_UPLOAD_BYTES", &value)?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{} has invalid value {:?}: {}", name, value, e)))
}

fn require_http_url(name: &str, value: String) -> Result<String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err(AppError::Config(format!(
            "{} must be an http(s) URL, got {:?}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.database_path, PathBuf::from("relay.db"));
        assert_eq!(config.storage_dir, PathBuf::from("translated"));
        assert_eq!(config.public_url, "http://localhost:8080/files");
        assert_eq!(config.translate_url, "http://localhost:5000");
        assert_eq!(config.translate_api_key, None);
        assert_eq!(config.translate_timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("RELAY_BIND_ADDR", "127.0.0.1:9000"),
            ("RELAY_DATABASE_PATH", "/var/lib/relay/records.db"),
            ("RELAY_PUBLIC_URL", "https://files.example.com/t/"),
            ("RELAY_TRANSLATE_API_KEY", "secret"),
            ("RELAY_TRANSLATE_TIMEOUT_SECS", "15"),
            ("RELAY_MAX_UPLOAD_BYTES", "1024"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database_path, PathBuf::from("/var/lib/relay/records.db"));
        assert_eq!(config.public_url, "https://files.example.com/t");
        assert_eq!(config.translate_api_key.as_deref(), Some("secret"));
        assert_eq!(config.translate_timeout, Duration::from_secs(15));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[("RELAY_TRANSLATE_API_KEY", "  "), ("RELAY_STORAGE_DIR", "")]).unwrap();
        assert_eq!(config.translate_api_key, None);
        assert_eq!(config.storage_dir, PathBuf::from("translated"));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        assert!(matches!(
            load(&[("RELAY_BIND_ADDR", "not-an-address")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            load(&[("RELAY_MAX_UPLOAD_BYTES", "ten")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            load(&[("RELAY_TRANSLATE_URL", "localhost:5000")]),
            Err(AppError::Config(_))
        ));
    }
}
