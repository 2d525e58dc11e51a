//! Platform plugin traits.
//!
//! This module defines the seams between the registry and the per-platform
//! implementations: [`PlatformPlugin`] for the pure, synchronous behaviour
//! every platform has, and [`DepositValidator`] for the optional identity
//! check some platforms perform before a deposit is accepted.

use super::PaymentPlatform;
use crate::currency::Currency;
use crate::{RampkitError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key under which every platform stores the depositor's Telegram handle.
pub const TELEGRAM_USERNAME_KEY: &str = "telegramUsername";

/// Field name to value mapping submitted for verification and storage when a
/// deposit is created.
///
/// # Example
///
/// ```
/// use rampkit_lib::platforms::DepositData;
///
/// let data = DepositData::for_payee("cashtag", "alice", None);
/// assert_eq!(data.get("cashtag"), Some("alice"));
/// assert_eq!(data.get("telegramUsername"), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepositData(BTreeMap<String, String>);

impl DepositData {
    /// Create empty deposit data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard two-field record: the payee handle under
    /// `payee_id_key` and the Telegram username (empty when absent).
    pub fn for_payee(
        payee_id_key: &str,
        payee_details: &str,
        telegram_username: Option<&str>,
    ) -> Self {
        let mut data = Self::new();
        data.insert(payee_id_key, payee_details);
        data.insert(TELEGRAM_USERNAME_KEY, telegram_username.unwrap_or_default());
        data
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get a field value, failing with [`RampkitError::MissingField`] when absent.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| RampkitError::missing_field(key))
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for DepositData {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Normalized record parsed out of a proof-of-payment context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofExtractedParameters {
    /// Decimal amount. Non-negative for every platform except Cash App,
    /// which passes the provider's value through untouched.
    pub amount: String,
    /// Provider identifier of the recipient.
    pub recipient: String,
    /// Currency code as reported (or implied) by the provider.
    pub currency: String,
    /// Platform that produced the proof.
    pub payment_platform: PaymentPlatform,
    /// Payment time formatted for the platform's locale.
    pub date: String,
    /// Provider-assigned payment identifier.
    pub payment_id: String,
    /// Intent the proof is bound to (the context message).
    pub intent_hash: String,
    /// Hash of the provider specification used to produce the proof.
    pub provider_hash: String,
}

/// Per-platform behaviour.
///
/// Implementations are stateless; one exists for each [`PaymentPlatform`].
pub trait PlatformPlugin: Send + Sync {
    /// The platform this plugin implements.
    fn platform(&self) -> PaymentPlatform;

    /// Deposit data key holding the payee handle.
    fn payee_id_key(&self) -> &'static str;

    /// Link that opens the payment flow for `recipient_id`.
    fn formatted_send_link(
        &self,
        recipient_id: &str,
        send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String;

    /// Fallback link offered when the QR code cannot be scanned.
    fn trouble_scanning_link(
        &self,
        recipient_id: &str,
        send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String {
        self.formatted_send_link(recipient_id, send_currency, amount)
    }

    /// Deposit data record built from user input.
    fn deposit_data(&self, payee_details: &str, telegram_username: Option<&str>) -> DepositData {
        DepositData::for_payee(self.payee_id_key(), payee_details, telegram_username)
    }

    /// Warning shown to the sender before paying, if the platform has one.
    fn send_payment_warning(&self, _send_currency: Currency, _amount: &str) -> Option<String> {
        None
    }

    /// Parses a serialized proof context into its normalized form.
    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters>;
}

/// Confirms a payee exists and resolves its canonical identifier.
#[async_trait]
pub trait DepositValidator: Send + Sync {
    /// The platform this validator checks.
    fn platform(&self) -> PaymentPlatform;

    /// Validates the deposit data and returns the canonical payee identifier.
    async fn validate(&self, deposit: &DepositData) -> Result<String>;
}
