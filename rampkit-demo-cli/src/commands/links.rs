//! Links command - payment links and sender warnings for a recipient

use anyhow::Result;
use rampkit_lib::platforms::global;

use crate::ui;

pub fn run(
    platform: &str,
    recipient: &str,
    currency: Option<&str>,
    amount: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = global::get(super::parse_platform(platform)?)?;
    let currency = currency.map(super::parse_currency).transpose()?;

    let send = config.formatted_send_link(recipient, currency, amount);
    let trouble = config.trouble_scanning_link(recipient, currency, amount);
    let warning = currency
        .and_then(|c| config.send_payment_warning(c, amount.unwrap_or_default()));

    if json {
        ui::json(&serde_json::json!({
            "sendLink": send,
            "troubleScanningLink": trouble,
            "warning": warning,
        }))?;
        return Ok(());
    }

    ui::header(&format!("{} links", config.platform_name));
    ui::key_value("Send", &send);
    if trouble != send {
        ui::key_value("Trouble scanning", &trouble);
    }
    if let Some(currency) = currency {
        if !config.supports_currency(currency) {
            ui::warning(&format!(
                "{} does not list {} as a supported currency",
                config.platform_name, currency
            ));
        }
    }
    if let Some(warning) = warning {
        ui::warning(&warning);
    }
    Ok(())
}
