//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Command-line flags are applied on top by the binary.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::constants::{async_tasks, generation, musixmatch};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Musixmatch API key
    pub api_key: String,
    /// Base URL of the Musixmatch web service, ending in `/`
    pub base_url: String,
    /// Timeout applied to each API request
    pub request_timeout: Duration,
    /// Maximum number of lyric requests in flight
    pub concurrency: usize,
    /// Number of tracks sampled for the corpus, always within the accepted range
    sample_size: u32,
    /// Number of tokens to generate, at least one
    word_count: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Number of tracks sampled for the corpus.
    pub const fn sample_size(&self) -> u32 {
        self.sample_size
    }

    /// Set the sample size, clamped to what a single search page allows.
    pub fn set_sample_size(&mut self, sample_size: i64) {
        let clamped = sample_size.clamp(
            i64::from(musixmatch::MIN_SAMPLE_SIZE),
            i64::from(musixmatch::MAX_SAMPLE_SIZE),
        );
        self.sample_size = u32::try_from(clamped).unwrap_or(musixmatch::MIN_SAMPLE_SIZE);
    }

    /// Number of tokens to generate.
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Set the word count, raised to the minimum if needed.
    pub fn set_word_count(&mut self, word_count: i64) {
        self.word_count = usize::try_from(word_count)
            .unwrap_or(if word_count < 0 { 0 } else { usize::MAX })
            .max(generation::MIN_WORD_COUNT);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            api_key: String::new(),
            base_url: musixmatch::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(musixmatch::DEFAULT_TIMEOUT_SECS),
            concurrency: async_tasks::DEFAULT_CONCURRENCY,
            sample_size: musixmatch::DEFAULT_SAMPLE_SIZE,
            word_count: generation::DEFAULT_WORD_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("MUSIXMATCH_API_KEY") {
            config.api_key = api_key;
        }

        if let Ok(url) = env::var("MUSIXMATCH_API_URL") {
            config.base_url = normalize_base_url(&url)?;
        }

        if let Some(secs) = parse_var::<u64>("PARROT_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(concurrency) = parse_var::<usize>("PARROT_CONCURRENCY") {
            config.concurrency = concurrency.max(1);
        }

        if let Some(sample_size) = parse_var::<i64>("PARROT_SAMPLE_SIZE") {
            config.set_sample_size(sample_size);
        }

        if let Some(word_count) = parse_var::<i64>("PARROT_WORD_COUNT") {
            config.set_word_count(word_count);
        }

        Ok(config)
    }

    /// Check if a Musixmatch API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Read and parse an environment variable, ignoring unparsable values.
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!("Ignoring {name}={raw:?}: not a valid number");
    }
    parsed
}

/// Ensure the base URL is non-empty and ends with a slash so method names append cleanly.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::config(
            "MUSIXMATCH_API_URL is empty",
            "Unset it to use the public Musixmatch endpoint",
        ));
    }
    Ok(if url.ends_with('/') { url.to_string() } else { format!("{url}/") })
}
