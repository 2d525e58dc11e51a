//! Validate-deposit command - resolve a payee through the deposit validator

use anyhow::Result;
use rampkit_lib::platforms::global;
use std::error::Error;

use crate::ui;

pub async fn run(
    platform: &str,
    handle: &str,
    telegram: Option<&str>,
    verbose: bool,
    json: bool,
) -> Result<()> {
    let platform = super::parse_platform(platform)?;
    let registry = global::registry()?;
    let config = registry.get(platform);
    let deposit = config.deposit_data(handle, telegram);

    if config.validator().is_none() {
        ui::info(&format!(
            "{} has no deposit validator; the handle is used as entered",
            config.platform_name
        ));
    }

    let spinner = (!json).then(|| ui::spinner(&format!("Checking {}...", handle)));
    let outcome = registry.validate_deposit(platform, &deposit).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(payee_id) => {
            if json {
                ui::json(&serde_json::json!({
                    "platform": platform,
                    "payeeId": payee_id,
                    "depositData": deposit,
                }))?;
            } else {
                ui::success(&format!("Payee ID: {}", payee_id));
            }
            Ok(())
        }
        Err(e) => {
            tracing::debug!(retryable = e.is_retryable(), "deposit validation failed");
            if verbose {
                if let Some(cause) = e.source() {
                    ui::key_value("Cause", &cause.to_string());
                }
            }
            ui::info(config.deposit.payee_detail_validation_failure_message);
            Err(e.into())
        }
    }
}
