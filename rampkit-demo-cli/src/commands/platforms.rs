//! Platforms command - list platforms and show their configuration

use anyhow::Result;
use colored::Colorize;
use rampkit_lib::platforms::{global, PlatformConfig};

use crate::ui;

pub fn list(currency: Option<&str>, json: bool) -> Result<()> {
    let registry = global::registry()?;
    let configs: Vec<&PlatformConfig> = match currency {
        Some(code) => registry.platforms_supporting(super::parse_currency(code)?),
        None => registry.iter().collect(),
    };

    if json {
        ui::json(&configs)?;
        return Ok(());
    }

    ui::header("Payment Platforms");
    if configs.is_empty() {
        ui::info("No platform supports that currency");
        return Ok(());
    }

    for config in configs {
        let currencies: Vec<&str> = config
            .platform_currencies
            .iter()
            .map(|c| c.code())
            .collect();
        println!(
            "  {:<14} {:<14} {}",
            config.platform.as_str().green().bold(),
            config.platform_name,
            currencies.join(" ").dimmed()
        );
    }
    Ok(())
}

pub fn show(id: &str, json: bool) -> Result<()> {
    let registry = global::registry()?;
    let config = registry.get(super::parse_platform(id)?);

    if json {
        ui::json(config)?;
        return Ok(());
    }

    ui::header(config.platform_name);
    ui::key_value("Identifier", config.platform.as_str());
    ui::key_value("Auth link", config.auth_link);
    ui::key_value("Minimum amount", &config.min_fiat_amount.to_string());
    ui::key_value("Locale", config.locale_time_string);
    ui::key_value("Payments fetched", &config.num_payments_fetched.to_string());
    ui::key_value("Min extension", config.min_extension_version);
    ui::flag("Custom QR code", config.use_custom_qr_code);
    ui::flag("App clip", config.supports_appclip);
    ui::flag("App clip on web", config.show_appclip_on_web);
    ui::flag("Deposit approval", config.deposit_requires_approval);
    ui::flag("Send on web", config.supports_sending_payment_on_web);

    ui::separator();
    ui::key_value("Payee field", config.deposit.payee_id_key);
    ui::key_value("Placeholder", config.deposit.payee_detail_input_placeholder);
    ui::key_value("Helper", config.deposit.payee_detail_input_helper_text);
    ui::key_value(
        "On failure",
        config.deposit.payee_detail_validation_failure_message,
    );
    ui::flag("Validator", config.validator().is_some());
    Ok(())
}
