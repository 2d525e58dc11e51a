//! Wise.
//!
//! Wise has no public profile lookup, so deposits are accepted with the
//! Wisetag as entered.

use super::revolut::parse_minor_unit_transfer;
use super::traits::{PlatformPlugin, ProofExtractedParameters};
use super::PaymentPlatform;
use crate::currency::Currency;
use crate::Result;

/// Deposit data key holding the Wisetag.
pub const WISETAG_KEY: &str = "wisetag";

pub(crate) const CURRENCIES: &[Currency] = &[
    Currency::Usd,
    Currency::Cny,
    Currency::Eur,
    Currency::Gbp,
    Currency::Aud,
    Currency::Nzd,
    Currency::Cad,
    Currency::Aed,
    Currency::Chf,
    Currency::Zar,
    Currency::Sgd,
    Currency::Ils,
    Currency::Hkd,
    Currency::Jpy,
    Currency::Pln,
    Currency::Try,
    Currency::Idr,
    Currency::Kes,
    Currency::Myr,
    Currency::Mxn,
    Currency::Thb,
    Currency::Vnd,
];

/// Wise behaviour.
#[derive(Clone, Copy, Debug, Default)]
pub struct WisePlugin;

impl PlatformPlugin for WisePlugin {
    fn platform(&self) -> PaymentPlatform {
        PaymentPlatform::Wise
    }

    fn payee_id_key(&self) -> &'static str {
        WISETAG_KEY
    }

    fn formatted_send_link(
        &self,
        recipient_id: &str,
        _send_currency: Option<Currency>,
        _amount: Option<&str>,
    ) -> String {
        format!("https://wise.com/pay/me/{recipient_id}")
    }

    fn send_payment_warning(&self, send_currency: Currency, amount: &str) -> Option<String> {
        Some(format!(
            "You can send any currency. But ensure recipient gets {send_currency} {amount} after fees."
        ))
    }

    fn parse_extracted_parameters(&self, context: &str) -> Result<ProofExtractedParameters> {
        parse_minor_unit_transfer(PaymentPlatform::Wise, context)
    }
}
