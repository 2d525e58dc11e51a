//! Parse-proof command - normalize a proof-of-payment context

use anyhow::{Context, Result};
use rampkit_lib::platforms::global;
use std::io::Read;
use std::path::Path;

use crate::ui;

pub fn run(platform: &str, file: Option<&Path>, json: bool) -> Result<()> {
    let platform = super::parse_platform(platform)?;
    let context = read_context(file)?;

    let parsed = global::parse_proof(platform, &context)?;

    if json {
        ui::json(&parsed)?;
        return Ok(());
    }

    ui::header("Extracted Payment");
    ui::key_value("Platform", parsed.payment_platform.as_str());
    ui::key_value("Amount", &parsed.amount);
    ui::key_value("Currency", &parsed.currency);
    ui::key_value("Date", &parsed.date);
    ui::key_value("Payment ID", &parsed.payment_id);
    ui::key_value("Recipient", &parsed.recipient);
    ui::separator();
    ui::key_value("Intent hash", &parsed.intent_hash);
    ui::key_value("Provider hash", &parsed.provider_hash);
    Ok(())
}

fn read_context(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read proof context from stdin")?;
            Ok(buf)
        }
    }
}
