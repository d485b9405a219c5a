// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Both pipelines receive the same `Config`; nothing is read from the
//! environment after startup.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Outings API ---
    /// Base URL of the outings/summits/routes API
    pub api_base_url: String,
    /// Bearer credential for the outings API (anonymous when unset)
    pub api_token: Option<String>,
    /// User whose outings are fetched
    pub user_id: u64,
    /// Summit search centre latitude
    pub search_lat: f64,
    /// Summit search centre longitude
    pub search_lng: f64,
    /// Summit search radius in metres
    pub search_radius_m: u32,
    /// Page size for paginated endpoints
    pub page_size: u32,
    /// Page size for the single-page summit query
    pub summit_page_size: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Pause between per-route fetches
    pub route_fetch_delay: Duration,

    // --- Local storage ---
    /// Directory holding the JSON dumps
    pub data_dir: PathBuf,

    // --- Recommendation ---
    /// Name of the athlete, used in the prompt
    pub athlete_name: String,
    /// Chat completion API key
    pub openai_api_key: Option<String>,
    /// Chat completion API base URL
    pub openai_base_url: String,
    /// Model name
    pub openai_model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of generated tokens
    pub max_tokens: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.whympr.com".to_string(),
            api_token: None,
            user_id: 15,
            search_lat: 45.92375,
            search_lng: 6.86933,
            search_radius_m: 20_000,
            page_size: 100,
            summit_page_size: 200,
            request_timeout: Duration::from_secs(30),
            route_fetch_delay: Duration::from_millis(150),
            data_dir: PathBuf::from("data"),
            athlete_name: "Tim".to_string(),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to `Config::default()`; blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Ok(Self {
            api_base_url: get("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            api_token: get("API_TOKEN"),
            user_id: parse_or(&get, "OUTINGS_USER_ID", defaults.user_id)?,
            search_lat: parse_or(&get, "SEARCH_LAT", defaults.search_lat)?,
            search_lng: parse_or(&get, "SEARCH_LNG", defaults.search_lng)?,
            search_radius_m: parse_or(&get, "SEARCH_RADIUS_M", defaults.search_radius_m)?,
            page_size: parse_or(&get, "PAGE_SIZE", defaults.page_size)?,
            summit_page_size: parse_or(&get, "SUMMIT_PAGE_SIZE", defaults.summit_page_size)?,
            request_timeout: Duration::from_secs(parse_or(
                &get,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
            route_fetch_delay: Duration::from_millis(parse_or(
                &get,
                "ROUTE_FETCH_DELAY_MS",
                defaults.route_fetch_delay.as_millis() as u64,
            )?),
            data_dir: get("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            athlete_name: get("ATHLETE_NAME").unwrap_or(defaults.athlete_name),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            temperature: parse_or(&get, "OPENAI_TEMPERATURE", defaults.temperature)?,
            max_tokens: parse_or(&get, "OPENAI_MAX_TOKENS", defaults.max_tokens)?,
        })
    }

    /// The chat API key, or a configuration error if it was not provided.
    pub fn require_openai_key(&self) -> Result<&str, ConfigError> {
        self.openai_api_key
            .as_deref()
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
