//! HTTP client for public profile lookups.
//!
//! Deposit validators for Cash App, Venmo and Revolut confirm that a handle
//! exists by fetching the platform's public profile page (or profile API)
//! and extracting an account identifier from it. [`LookupClient`] owns the
//! shared HTTP client, applies the configured timeout and retries transient
//! failures with exponential backoff.
//!
//! # Feature Flags
//!
//! Actual requests require the `http-lookup` feature (on by default).
//! Without it, every request fails with [`LookupError::Unavailable`].
//!
//! # Example
//!
//! ```rust,ignore
//! use rampkit_lib::lookup::{LookupClient, LookupConfig};
//! use rampkit_lib::PaymentPlatform;
//!
//! let client = LookupClient::new(LookupConfig::from_env())?;
//! let url = client.profile_url(PaymentPlatform::Revolut, "api/web-profile/alice")?;
//! let body = client.get_text(&url).await?;
//! ```

mod config;

pub use config::{
    LookupConfig, ENV_BACKOFF_MS, ENV_CASHAPP_URL, ENV_REVOLUT_URL, ENV_RETRIES,
    ENV_TIMEOUT_SECS, ENV_VENMO_URL,
};

use crate::errors::LookupError;
use crate::platforms::PaymentPlatform;
use crate::Result;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

#[cfg(not(feature = "http-lookup"))]
const NOT_COMPILED: &str = "HTTP lookups not compiled - enable the 'http-lookup' feature";

/// Shared client for profile lookups.
pub struct LookupClient {
    config: LookupConfig,
    #[cfg(feature = "http-lookup")]
    client: reqwest::Client,
}

impl LookupClient {
    /// Create a client with the given configuration.
    #[cfg(feature = "http-lookup")]
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                crate::RampkitError::Internal(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Create a client with the given configuration (stub when feature disabled).
    #[cfg(not(feature = "http-lookup"))]
    pub fn new(config: LookupConfig) -> Result<Self> {
        Ok(Self { config })
    }

    /// Client configured from `RAMPKIT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(LookupConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Full URL for `path` under a platform's lookup base.
    pub fn profile_url(
        &self,
        platform: PaymentPlatform,
        path: &str,
    ) -> std::result::Result<String, LookupError> {
        let base = self
            .config
            .base_url(platform)
            .ok_or(LookupError::Unavailable("platform has no profile lookup"))?;
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }

    /// GET `url` and return the body as text.
    ///
    /// Any status other than 429 and 5xx yields its body, so a "not found"
    /// page is left to the caller's pattern match. Transient failures are
    /// retried up to `max_retries` times.
    #[cfg(feature = "http-lookup")]
    pub async fn get_text(&self, url: &str) -> std::result::Result<String, LookupError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    let delay = self.config.backoff(attempt);
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        url,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying profile lookup"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// GET `url` (stub when feature disabled).
    #[cfg(not(feature = "http-lookup"))]
    pub async fn get_text(&self, _url: &str) -> std::result::Result<String, LookupError> {
        Err(LookupError::Unavailable(NOT_COMPILED))
    }

    /// GET `url` and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<T, LookupError> {
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Malformed(e.to_string()))
    }

    #[cfg(feature = "http-lookup")]
    async fn fetch_once(&self, url: &str) -> std::result::Result<String, LookupError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))?;

        let status = response.status().as_u16();
        if status == 429 || (500..=599).contains(&status) {
            return Err(LookupError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))
    }

    #[cfg(feature = "http-lookup")]
    fn map_reqwest_error(&self, url: &str, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            LookupError::Timeout {
                url: url.to_string(),
                timeout_ms: self.config.timeout_secs * 1000,
            }
        } else if e.is_connect() {
            LookupError::Connection {
                url: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            LookupError::Transport(e.to_string())
        }
    }
}

/// A regular expression compiled on first use.
pub(crate) struct Pattern {
    source: &'static str,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl Pattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// First capture group of the first match in `body`.
    pub(crate) fn first_capture(&self, body: &str) -> std::result::Result<String, LookupError> {
        let regex = self
            .compiled
            .get_or_init(|| Regex::new(self.source))
            .as_ref()
            .map_err(|e| LookupError::Malformed(format!("invalid pattern: {}", e)))?;

        regex
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(LookupError::PatternNotFound)
    }
}

impl std::fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
