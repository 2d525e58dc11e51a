//! CLI command implementations

pub mod currencies;
pub mod cvu;
pub mod deposit;
pub mod links;
pub mod platforms;
pub mod proof;

use anyhow::{Context, Result};
use rampkit_lib::{Currency, PaymentPlatform};

/// Parse a platform identifier from the command line.
pub fn parse_platform(id: &str) -> Result<PaymentPlatform> {
    id.parse::<PaymentPlatform>().with_context(|| {
        format!(
            "expected one of: {}",
            rampkit_lib::PAYMENT_PLATFORMS.map(|p| p.as_str()).join(", ")
        )
    })
}

/// Parse a currency code, accepting lowercase input.
pub fn parse_currency(code: &str) -> Result<Currency> {
    Ok(code.to_ascii_uppercase().parse::<Currency>()?)
}
