//! Currency commands - browse the currency table

use anyhow::{bail, Result};
use colored::Colorize;
use rampkit_lib::{
    currency_info, get_currency_info_from_country_code, get_currency_info_from_hash, CurrencyInfo,
};

use crate::ui;

pub fn list(json: bool) -> Result<()> {
    let table = currency_info();
    if json {
        ui::json(table)?;
        return Ok(());
    }

    ui::header("Currencies");
    for info in table {
        println!(
            "  {} {:<4} {:<28} {}",
            info.currency_code.green().bold(),
            info.currency_symbol,
            info.currency_name,
            info.country_code.dimmed()
        );
    }
    Ok(())
}

pub fn lookup(
    code: Option<&str>,
    hash: Option<&str>,
    country: Option<&str>,
    json: bool,
) -> Result<()> {
    let found: Option<&CurrencyInfo> = match (code, hash, country) {
        (Some(code), _, _) => Some(super::parse_currency(code)?.info()),
        (None, Some(hash), _) => get_currency_info_from_hash(&hash.to_ascii_lowercase()),
        (None, None, Some(country)) => {
            get_currency_info_from_country_code(&country.to_ascii_lowercase())
        }
        (None, None, None) => bail!("pass one of --code, --hash or --country"),
    };

    let Some(info) = found else {
        ui::warning("No matching currency");
        return Ok(());
    };

    if json {
        ui::json(info)?;
        return Ok(());
    }

    ui::header(info.currency_name);
    ui::key_value("Code", info.currency_code);
    ui::key_value("Symbol", info.currency_symbol);
    ui::key_value("Country", info.country_code);
    ui::key_value("Code hash", &info.currency_code_hash);
    Ok(())
}
