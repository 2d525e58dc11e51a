//! Configuration for profile lookups.
//!
//! # Environment Variables
//!
//! [`LookupConfig::from_env`] overlays the defaults with:
//!
//! - `RAMPKIT_CASHAPP_URL` - Cash App profile site (default `https://cash.app`)
//! - `RAMPKIT_VENMO_URL` - Venmo account site (default `https://account.venmo.com`)
//! - `RAMPKIT_REVOLUT_URL` - Revolut profile site (default `https://revolut.me`)
//! - `RAMPKIT_LOOKUP_TIMEOUT_SECS` - per-request timeout
//! - `RAMPKIT_LOOKUP_RETRIES` - retries after a transient failure
//! - `RAMPKIT_LOOKUP_BACKOFF_MS` - delay before the first retry

use crate::platforms::PaymentPlatform;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding the Cash App base URL.
pub const ENV_CASHAPP_URL: &str = "RAMPKIT_CASHAPP_URL";
/// Environment variable overriding the Venmo base URL.
pub const ENV_VENMO_URL: &str = "RAMPKIT_VENMO_URL";
/// Environment variable overriding the Revolut base URL.
pub const ENV_REVOLUT_URL: &str = "RAMPKIT_REVOLUT_URL";
/// Environment variable overriding the request timeout.
pub const ENV_TIMEOUT_SECS: &str = "RAMPKIT_LOOKUP_TIMEOUT_SECS";
/// Environment variable overriding the retry count.
pub const ENV_RETRIES: &str = "RAMPKIT_LOOKUP_RETRIES";
/// Environment variable overriding the retry backoff.
pub const ENV_BACKOFF_MS: &str = "RAMPKIT_LOOKUP_BACKOFF_MS";

/// Settings shared by every profile lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Cash App profile site.
    #[serde(default = "default_cashapp_url")]
    pub cashapp_url: String,

    /// Venmo account site.
    #[serde(default = "default_venmo_url")]
    pub venmo_url: String,

    /// Revolut profile site.
    #[serde(default = "default_revolut_url")]
    pub revolut_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of retries after a transient failure.
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Delay before the first retry in milliseconds; doubled on each retry.
    #[serde(default = "default_backoff")]
    pub retry_backoff_ms: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_cashapp_url() -> String {
    "https://cash.app".to_string()
}

fn default_venmo_url() -> String {
    "https://account.venmo.com".to_string()
}

fn default_revolut_url() -> String {
    "https://revolut.me".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_retries() -> u32 {
    2
}

fn default_backoff() -> u64 {
    250
}

fn default_user_agent() -> String {
    format!("rampkit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cashapp_url: default_cashapp_url(),
            venmo_url: default_venmo_url(),
            revolut_url: default_revolut_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            retry_backoff_ms: default_backoff(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    /// Create a configuration pointing at the live platform sites.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `RAMPKIT_*` environment variables.
    ///
    /// Numeric variables that fail to parse are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_CASHAPP_URL) {
            config.cashapp_url = url;
        }
        if let Ok(url) = std::env::var(ENV_VENMO_URL) {
            config.venmo_url = url;
        }
        if let Ok(url) = std::env::var(ENV_REVOLUT_URL) {
            config.revolut_url = url;
        }
        if let Some(secs) = env_number(ENV_TIMEOUT_SECS) {
            config.timeout_secs = secs;
        }
        if let Some(retries) = env_number(ENV_RETRIES) {
            config.max_retries = retries;
        }
        if let Some(ms) = env_number(ENV_BACKOFF_MS) {
            config.retry_backoff_ms = ms;
        }

        config
    }

    /// Set the base URL for one platform's lookups.
    ///
    /// Platforms without a remote lookup ignore this.
    pub fn with_base_url(mut self, platform: PaymentPlatform, url: impl Into<String>) -> Self {
        match platform {
            PaymentPlatform::CashApp => self.cashapp_url = url.into(),
            PaymentPlatform::Venmo => self.venmo_url = url.into(),
            PaymentPlatform::Revolut => self.revolut_url = url.into(),
            PaymentPlatform::Wise | PaymentPlatform::MercadoPago => {}
        }
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the retry policy.
    pub fn with_retries(mut self, max_retries: u32, backoff_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_ms = backoff_ms;
        self
    }

    /// Base URL for a platform's lookups, without a trailing slash.
    pub fn base_url(&self, platform: PaymentPlatform) -> Option<&str> {
        let url = match platform {
            PaymentPlatform::CashApp => &self.cashapp_url,
            PaymentPlatform::Venmo => &self.venmo_url,
            PaymentPlatform::Revolut => &self.revolut_url,
            PaymentPlatform::Wise | PaymentPlatform::MercadoPago => return None,
        };
        Some(url.trim_end_matches('/'))
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.saturating_sub(1).min(16);
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}
