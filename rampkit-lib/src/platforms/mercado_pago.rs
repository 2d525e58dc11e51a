//! Mercado Pago (Argentina).

use super::traits::{DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::cvu::validate_cvu;
use crate::proof::{format_amount, format_es_ar, ProofContext};
use crate::Result;
use async_trait::async_trait;

/// Deposit data key holding the CVU.
pub const CVU_KEY: &str = "cvu";

pub(crate) const CURRENCIES: &[Currency] = &[Currency::Ars];

/// Mercado Pago behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct MercadoPagoPlugin;

impl PlatformPlugin for MercadoPagoPlugin {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::MercadoPago
    }

    fn payee_id_key(&self) -> &'static str {
        CVU_KEY
    }

    /// The transfer page takes no recipient parameters; the sender pastes the CVU.
    fn formatted_send_link(
        &self,
        _recipient_id: &str,
        _send_currency: Option<Currency>,
        _amount: Option<&str>,
    ) -> String {
        "https://www.mercadopago.com.ar/money-out/transfer/".to_string()
    }

    fn send_payment_warning(&self, _send_currency: Currency, _amount: &str) -> Option<String> {
        Some("Double check the CVU".to_string())
    }

    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        let ctx = ProofContext::parse(context)?;
        let amount = format_amount(ctx.unsigned_amount("amt")?);
        let currency = ctx.param("curr")?;
        let date = format_es_ar(ctx.buenos_aires_datetime("date")?);
        let payment_id = ctx.param("paymentId")?;
        let recipient = ctx.param("recipientId")?;

        Ok(ctx.into_extracted(
            PaymentPlatform::MercadoPago,
            amount,
            currency,
            date,
            payment_id,
            recipient,
        ))
    }
}

/// Validates the CVU checksum locally. Errors keep their specific reason.
#[derive(Clone, Copy, Debug, Default)]
pub struct MercadoPagoValidator;

#[async_trait]
impl DepositValidator for MercadoPagoValidator {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::MercadoPago
    }

    async fn validate(&self, deposit: &DepositData) -> Result<String> {
        validate_cvu(deposit.require(CVU_KEY)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RampkitError;

    #[test]
    fn test_link_ignores_recipient() {
        assert_eq!(
            MercadoPagoPlugin.formatted_send_link(
                "0000003100000000000000",
                Some(Currency::Ars),
                Some("100")
            ),
            "https://www.mercadopago.com.ar/money-out/transfer/"
        );
    }

    #[test]
    fn test_parse_proof_in_buenos_aires_time() {
        let context = serde_json::json!({
            "extractedParameters": {
                "amt": "-1500.50",
                "curr": "ARS",
                "date": "2024-01-05T15:07:00.000Z",
                "paymentId": "98765",
                "recipientId": "0000003100000000000000",
            },
            "contextMessage": "0x01",
            "providerHash": "0x02",
        })
        .to_string();

        let parsed = MercadoPagoPlugin
            .parse_extracted_parameters(&context)
            .unwrap();
        assert_eq!(parsed.amount, "1500.5");
        assert_eq!(parsed.currency, "ARS");
        assert_eq!(parsed.date, "5 ene 2024, 12:07");
        assert_eq!(parsed.payment_platform, PaymentPlatform::MercadoPago);
    }

    #[tokio::test]
    async fn test_validator_returns_cvu() {
        let data = MercadoPagoPlugin.deposit_data("0000003100000000000000", None);
        assert_eq!(
            MercadoPagoValidator.validate(&data).await.unwrap(),
            "0000003100000000000000"
        );
    }

    #[tokio::test]
    async fn test_validator_keeps_specific_errors() {
        let data = MercadoPagoPlugin.deposit_data("0000003100000000000005", None);
        let err = MercadoPagoValidator.validate(&data).await.unwrap_err();
        assert!(matches!(err, RampkitError::CvuChecksumMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid Mercado Pago CVU: second block checksum failed"
        );
    }
}
