//! Environment configuration.
//!
//! All settings are read from environment variables (a `.env` file is loaded by `main` first).
//! Only `DATABASE_URL` is required, every other value falls back to the defaults the Steam
//! inventory endpoint is known to tolerate.

use std::{str::FromStr, time::Duration};

use reqwest::Url;

use crate::server::{
    error::config::ConfigError,
    service::{inventory::SyncPolicy, retry::RetryPolicy},
};

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
static DEFAULT_APP_URL: &str = "http://localhost:3000";
static DEFAULT_STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com";
static DEFAULT_INVENTORY_LANGUAGE: &str = "english";

/// Counter-Strike 2
const DEFAULT_APP_ID: u32 = 730;
const DEFAULT_CONTEXT_ID: u32 = 2;
/// Larger pages are rejected by Steam with 400
const DEFAULT_PAGE_SIZE: u32 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Settings for requests made to the Steam community inventory endpoint
#[derive(Clone, Debug)]
pub struct SteamConfig {
    /// Base URL of the Steam community site
    pub community_url: Url,
    /// Steam app whose inventory is fetched
    pub app_id: u32,
    /// Inventory context within the app
    pub context_id: u32,
    /// Language of the returned descriptions
    pub language: String,
    /// Assets requested per page
    pub page_size: u32,
    /// Deadline for each individual page request
    pub request_timeout: Duration,
}

impl SteamConfig {
    /// Builds a config against the provided community URL with default request settings
    pub fn new(community_url: &str) -> Result<Self, ConfigError> {
        let community_url = Url::parse(community_url)
            .map_err(|e| ConfigError::invalid("STEAM_COMMUNITY_URL", e))?;

        Ok(Self {
            community_url,
            app_id: DEFAULT_APP_ID,
            context_id: DEFAULT_CONTEXT_ID,
            language: DEFAULT_INVENTORY_LANGUAGE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }
}

/// Server configuration read from the environment
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Public base URL of this server, image URLs point at its `/image-proxy` path
    pub app_url: String,
    /// Steam inventory request settings
    pub steam: SteamConfig,
    /// Freshness, paging, and persistence retry settings of the sync
    pub sync_policy: SyncPolicy,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A set variable could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let community_url = var_or("STEAM_COMMUNITY_URL", DEFAULT_STEAM_COMMUNITY_URL);
        let mut steam = SteamConfig::new(&community_url)?;
        steam.app_id = parse_var_or("STEAM_APP_ID", DEFAULT_APP_ID)?;
        steam.context_id = parse_var_or("STEAM_CONTEXT_ID", DEFAULT_CONTEXT_ID)?;
        steam.language = var_or("STEAM_INVENTORY_LANGUAGE", DEFAULT_INVENTORY_LANGUAGE);
        steam.page_size = parse_var_or("STEAM_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        steam.request_timeout = Duration::from_secs(parse_var_or(
            "STEAM_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        let defaults = SyncPolicy::default();
        let sync_policy = SyncPolicy {
            freshness: Duration::from_secs(
                60 * parse_var_or("INVENTORY_CACHE_MINUTES", defaults.freshness.as_secs() / 60)?,
            ),
            page_delay: Duration::from_secs(parse_var_or(
                "INVENTORY_PAGE_DELAY_SECS",
                defaults.page_delay.as_secs(),
            )?),
            max_pages: parse_var_or("INVENTORY_MAX_PAGES", defaults.max_pages)?,
            persistence_retry: RetryPolicy::default(),
        };

        if sync_policy.max_pages == 0 {
            return Err(ConfigError::invalid("INVENTORY_MAX_PAGES", "must be at least 1"));
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            app_url: var_or("APP_URL", DEFAULT_APP_URL),
            steam,
            sync_policy,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| ConfigError::invalid(name, e)),
        Err(_) => Ok(default),
    }
}
