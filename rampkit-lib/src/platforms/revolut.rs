//! Revolut.

use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::errors::LookupError;
use crate::lookup::LookupClient;
use crate::proof::{format_amount, format_en_us, ProofContext};
use crate::{RampkitError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

/// Deposit data key holding the Revtag.
pub const REVOLUT_USERNAME_KEY: &str = "revolutUsername";

pub(crate) const CURRENCIES: &[Currency] = &[
    Currency::Usd,
    Currency::Eur,
    Currency::Gbp,
    Currency::Sgd,
    Currency::Nzd,
    Currency::Aud,
    Currency::Cad,
    Currency::Hkd,
    Currency::Mxn,
    Currency::Sar,
    Currency::Aed,
    Currency::Thb,
    Currency::Try,
    Currency::Pln,
    Currency::Chf,
    Currency::Zar,
];

/// Revolut behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevolutPlugin;

impl PlatformPlugin for RevolutPlugin {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::Revolut
    }

    fn payee_id_key(&self) -> &'static str {
        REVOLUT_USERNAME_KEY
    }

    fn formatted_send_link(
        &self,
        recipient_id: &str,
        _send_currency: Option<Currency>,
        _amount: Option<&str>,
    ) -> String {
        format!("https://revolut.me/{recipient_id}")
    }

    fn send_payment_warning(&self, send_currency: Currency, _amount: &str) -> Option<String> {
        Some(format!(
            "Ensure you are sending {send_currency} and not performing a cross-currency swap."
        ))
    }

    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        parse_minor_unit_transfer(PaymentPlatform::Revolut, context)
    }
}

/// Shared by Revolut and Wise: amounts in minor units, millisecond dates.
pub(crate) fn parse_minor_unit_transfer(
    platform: PaymentPlatform,
    context: &str,
) -> Result<ProofExtractedParameters> {
    let ctx = ProofContext::parse(context)?;
    let amount = format_amount(ctx.unsigned_minor_units_amount("amount")?);
    let currency = ctx.param("currency")?;
    let date = format_en_us(ctx.epoch_millis("completedDate")?);
    let payment_id = ctx.param("id")?;
    let recipient = ctx.param("username")?;

    Ok(ctx.into_extracted(platform, amount, currency, date, payment_id, recipient))
}

#[derive(Debug, Deserialize)]
struct WebProfile {
    username: String,
}

/// Confirms a Revtag through the public web-profile API.
#[derive(Debug, Clone)]
pub struct RevolutValidator {
    client: Arc<LookupClient>,
}

impl RevolutValidator {
    pub fn new(client: Arc<LookupClient>) -> Self {
        Self { client }
    }

    async fn lookup(&self, revtag: &str) -> std::result::Result<String, LookupError> {
        let url = self
            .client
            .profile_url(PaymentPlatform::Revolut, &format!("api/web-profile/{revtag}"))?;
        let profile: WebProfile = self.client.get_json(&url).await?;
        if profile.username != revtag {
            return Err(LookupError::HandleMismatch {
                expected: revtag.to_string(),
                found: profile.username,
            });
        }
        Ok(profile.username)
    }
}

#[async_trait]
impl DepositValidator for RevolutValidator {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::Revolut
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deposit), fields(platform = "revolut")))]
    async fn validate(&self, deposit: &DepositData) -> Result<String> {
        let revtag = deposit.require(REVOLUT_USERNAME_KEY)?;
        self.lookup(revtag).await.map_err(|cause| {
            #[cfg(feature = "tracing")]
            tracing::debug!(revtag, error = %cause, "revtag lookup failed");
            RampkitError::DepositValidation {
                platform: PaymentPlatform::Revolut,
                handle: revtag.to_string(),
                cause,
            }
        })
    }
}
