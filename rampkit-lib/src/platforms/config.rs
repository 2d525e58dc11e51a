//! Per-platform configuration records.

use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Deposit form copy and the optional identity check for a platform.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositSpec {
    /// Placeholder shown in the payee detail input.
    pub payee_detail_input_placeholder: &'static str,
    /// Helper text shown under the payee detail input.
    pub payee_detail_input_helper_text: &'static str,
    /// Message shown when validation fails.
    pub payee_detail_validation_failure_message: &'static str,
    /// Deposit data key holding the payee handle.
    pub payee_id_key: &'static str,
    /// Identity check, when the platform has one.
    #[serde(skip)]
    pub validator: Option<Arc<dyn DepositValidator>>,
}

impl fmt::Debug for DepositSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepositSpec")
            .field("payee_id_key", &self.payee_id_key)
            .field("has_validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Immutable configuration for one payment platform.
///
/// Built once by the [`PlatformRegistry`](super::PlatformRegistry) and never
/// mutated afterwards.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    pub platform: PaymentPlatform,
    pub platform_name: &'static str,
    pub platform_currencies: &'static [Currency],
    /// Portal the user signs in to when producing a proof.
    pub auth_link: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_fiat_amount: Decimal,
    /// BCP 47 locale used for proof dates.
    pub locale_time_string: &'static str,
    pub num_payments_fetched: u32,
    #[serde(rename = "useCustomQRCode")]
    pub use_custom_qr_code: bool,
    pub supports_appclip: bool,
    pub show_appclip_on_web: bool,
    pub deposit_requires_approval: bool,
    pub supports_sending_payment_on_web: bool,
    pub min_extension_version: &'static str,
    pub deposit: DepositSpec,
    #[serde(skip)]
    pub(crate) plugin: Arc<dyn PlatformPlugin>,
}

impl PlatformConfig {
    /// The plugin implementing this platform's behaviour.
    pub fn plugin(&self) -> &dyn PlatformPlugin {
        self.plugin.as_ref()
    }

    /// Whether `currency` can be sent on this platform.
    pub fn supports_currency(&self, currency: Currency) -> bool {
        self.platform_currencies.contains(&currency)
    }

    /// Link that opens the payment flow.
    pub fn formatted_send_link(
        &self,
        recipient_id: &str,
        send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String {
        self.plugin
            .formatted_send_link(recipient_id, send_currency, amount)
    }

    /// Fallback link offered when the QR code cannot be scanned.
    pub fn trouble_scanning_link(
        &self,
        recipient_id: &str,
        send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String {
        self.plugin
            .trouble_scanning_link(recipient_id, send_currency, amount)
    }

    /// Builds the deposit data record from user input.
    pub fn deposit_data(&self, payee_details: &str, telegram_username: Option<&str>) -> DepositData {
        self.plugin.deposit_data(payee_details, telegram_username)
    }

    /// Warning shown to the sender before paying.
    pub fn send_payment_warning(&self, send_currency: Currency, amount: &str) -> Option<String> {
        self.plugin.send_payment_warning(send_currency, amount)
    }

    /// Parses a serialized proof context.
    pub fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        self.plugin.parse_extracted_parameters(context)
    }

    /// The identity check, when the platform has one.
    pub fn validator(&self) -> Option<&Arc<dyn DepositValidator>> {
        self.deposit.validator.as_ref()
    }

    /// Returns the canonical payee identifier for a deposit.
    ///
    /// Runs the platform's validator when it has one. Otherwise the value
    /// under `payee_id_key` is returned as entered.
    pub async fn resolve_payee_id(&self, deposit: &DepositData) -> Result<String> {
        match &self.deposit.validator {
            Some(validator) => validator.validate(deposit).await,
            None => deposit.require(self.deposit.payee_id_key).map(str::to_string),
        }
    }
}

impl fmt::Debug for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformConfig")
            .field("platform", &self.platform)
            .field("platform_name", &self.platform_name)
            .field("platform_currencies", &self.platform_currencies)
            .field("min_fiat_amount", &self.min_fiat_amount)
            .field("deposit", &self.deposit)
            .finish_non_exhaustive()
    }
}
