//! Cash App.

use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::errors::LookupError;
use crate::lookup::{LookupClient, Pattern};
use crate::proof::{format_en_us, ProofContext};
use crate::{RampkitError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Deposit data key holding the Cashtag.
pub const CASHTAG_KEY: &str = "cashtag";

pub(crate) const CURRENCIES: &[Currency] = &[Currency::Usd];

static CASHTAG_TITLE: Pattern = Pattern::new(r"<title>Pay \$([A-Za-z0-9]+) on Cash App");

/// Cash App behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct CashAppPlugin;

impl PlatformPlugin for CashAppPlugin {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::CashApp
    }

    fn payee_id_key(&self) -> &'static str {
        CASHTAG_KEY
    }

    fn formatted_send_link(
        &self,
        recipient_id: &str,
        _send_currency: Option<Currency>,
        _amount: Option<&str>,
    ) -> String {
        let cashtag = recipient_id.strip_prefix('$').unwrap_or(recipient_id);
        format!("https://cash.app/qr/{cashtag}?size=288&margin=0")
    }

    /// Amounts and currency are passed through as reported; Cash App amounts
    /// keep their sign.
    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        let ctx = ProofContext::parse(context)?;
        let amount = ctx.param("amount")?;
        let currency = ctx.param("currency_code")?;
        let date = format_en_us(ctx.epoch_millis("date")?);
        let payment_id = ctx.param("paymentId")?;
        let recipient = ctx.param("receiverId")?;

        Ok(ctx.into_extracted(
            PaymentPlatform::CashApp,
            amount,
            currency,
            date,
            payment_id,
            recipient,
        ))
    }
}

/// Resolves a Cashtag to its account identifier by reading the title of the
/// public profile page.
#[derive(Debug, Clone)]
pub struct CashAppValidator {
    client: Arc<LookupClient>,
}

impl CashAppValidator {
    pub fn new(client: Arc<LookupClient>) -> Self {
        Self { client }
    }

    async fn lookup(&self, cashtag: &str) -> std::result::Result<String, LookupError> {
        let url = self
            .client
            .profile_url(PaymentPlatform::CashApp, &format!("${cashtag}"))?;
        let body = self.client.get_text(&url).await?;
        CASHTAG_TITLE.first_capture(&body)
    }
}

#[async_trait]
impl DepositValidator for CashAppValidator {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::CashApp
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, deposit), fields(platform = "cashapp")))]
    async fn validate(&self, deposit: &DepositData) -> Result<String> {
        let cashtag = deposit.require(CASHTAG_KEY)?;
        self.lookup(cashtag).await.map_err(|cause| {
            #[cfg(feature = "tracing")]
            tracing::debug!(cashtag, error = %cause, "cashtag lookup failed");
            RampkitError::DepositValidation {
                platform: PaymentPlatform::CashApp,
                handle: cashtag.to_string(),
                cause,
            }
        })
    }
}
