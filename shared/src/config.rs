//! Configuration management for the readings Lambda.

use std::env;

use crate::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://bible.usccb.org";
const DEFAULT_CACHE_MAX_AGE: u32 = 3600;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the readings source
    pub usccb_base_url: String,
    /// Whether each section carries the full reading text
    pub include_text: bool,
    /// Seconds clients may cache a response
    pub cache_max_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            usccb_base_url: DEFAULT_BASE_URL.to_string(),
            include_text: false,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_max_age = match lookup("CACHE_MAX_AGE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("CACHE_MAX_AGE must be a number of seconds, got {:?}", raw)))?,
            None => DEFAULT_CACHE_MAX_AGE,
        };

        Ok(Self {
            usccb_base_url: lookup("USCCB_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            include_text: lookup("READINGS_INCLUDE_TEXT")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(false),
            cache_max_age,
        })
    }
}
