//! Venmo.

use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::errors::LookupError;
use crate::lookup::{LookupClient, Pattern};
use crate::proof::{format_amount, format_en_us, ProofContext};
use crate::{RampkitError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Deposit data key holding the Venmo username.
pub const VENMO_USERNAME_KEY: &str = "venmoUsername";

pub(crate) const CURRENCIES: &[Currency] = &[Currency::Usd];

static USER_ID: Pattern = Pattern::new(r#""user":\{"displayName":"[^"]*","id":"(\d+)""#);

/// Venmo behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct VenmoPlugin;

impl PlatformPlugin for VenmoPlugin {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::Venmo
    }

    fn payee_id_key(&self) -> &'static str {
        VENMO_USERNAME_KEY
    }

    fn formatted_send_link(
        &self,
        recipient_id: &str,
        _send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String {
        format!(
            "venmo://paycharge?txn=pay&recipients={recipient_id}&note=💵&amount={}",
            amount.unwrap_or_default()
        )
    }

    fn trouble_scanning_link(
        &self,
        recipient_id: &str,
        _send_currency: Option<Currency>,
        amount: Option<&str>,
    ) -> String {
        format!(
            "https://account.venmo.com/pay?recipients={recipient_id}&note=💵&amount={}",
            amount.unwrap_or_default()
        )
    }

    fn send_payment_warning(&self, _send_currency: Currency, _amount: &str) -> Option<String> {
        Some(r#"Please do NOT toggle the "Turn on for purchases" option"#.to_string())
    }

    /// Venmo reports dates without an offset; they are UTC. The currency is
    /// always USD.
    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        let ctx = ProofContext::parse(context)?;
        let amount = format_amount(ctx.unsigned_amount("amount")?);
        let date = format_en_us(ctx.naive_utc("date")?);
        let payment_id = ctx.param("paymentId")?;
        let recipient = ctx.param("receiverId")?;

        Ok(ctx.into_extracted(
            PaymentPlatform::Venmo,
            amount,
            Currency::Usd.code().to_string(),
            date,
            payment_id,
            recipient,
        ))
    }
}

/// Resolves a Venmo username to its numeric user id from the public profile page.
#[derive(Debug, Clone)]
pub struct VenmoValidator {
    client: Arc<LookupClient>,
}

impl VenmoValidator {
    pub fn new(client: Arc<LookupClient>) -> Self {
        Self { client }
    }

    async fn lookup(&self, username: &str) -> std::result::Result<String, LookupError> {
        let url = self
            .client
            .profile_url(PaymentPlatform::Venmo, &format!("u/{username}"))?;
        let body = self.client.get_text(&url).await?;
        USER_ID.first_capture(&body)
    }
}

#[async_trait]
impl DepositValidator for VenmoValidator {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::Venmo
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deposit), fields(platform = "venmo")))]
    async fn validate(&self, deposit: &DepositData) -> Result<String> {
        let username = deposit.require(VENMO_USERNAME_KEY)?;
        self.lookup(username).await.map_err(|cause| {
            #[cfg(feature = "tracing")]
            tracing::debug!(username, error = %cause, "venmo lookup failed");
            RampkitError::DepositValidation {
                platform: PaymentPlatform::Venmo,
                handle: username.to_string(),
                cause,
            }
        })
    }
}
