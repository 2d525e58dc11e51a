//! CVU command - check a Mercado Pago CVU

use anyhow::Result;
use rampkit_lib::validate_cvu;

use crate::ui;

pub fn run(cvu: &str, json: bool) -> Result<()> {
    let valid = validate_cvu(cvu.trim())?;
    if json {
        ui::json(&serde_json::json!({ "cvu": valid, "valid": true }))?;
    } else {
        ui::success(&format!("{} is a valid Mercado Pago CVU", valid));
    }
    Ok(())
}
