//! Currency reference data.
//!
//! A closed set of fiat currencies with display metadata and a content hash
//! of each code. The hash is the Ethereum-style Keccak-256 of the UTF-8 code,
//! hex encoded with a `0x` prefix, so consumers can match currencies stored
//! on-chain without carrying the raw string. Hashes are part of the public
//! contract and must never change.

use crate::{RampkitError, Result};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Supported fiat currencies, serialized as their ISO 4217 code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United Arab Emirates Dirham
    Aed,
    /// Argentine Peso
    Ars,
    /// Australian Dollar
    Aud,
    /// Canadian Dollar
    Cad,
    /// Swiss Franc
    Chf,
    /// Chinese Yuan
    Cny,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Hong Kong Dollar
    Hkd,
    /// Indonesian Rupiah
    Idr,
    /// Israeli New Shekel
    Ils,
    /// Japanese Yen
    Jpy,
    /// Kenyan Shilling
    Kes,
    /// Mexican Peso
    Mxn,
    /// Malaysian Ringgit
    Myr,
    /// New Zealand Dollar
    Nzd,
    /// Polish Złoty
    Pln,
    /// Saudi Riyal
    Sar,
    /// Singapore Dollar
    Sgd,
    /// Thai Baht
    Thb,
    /// Turkish Lira
    Try,
    /// United States Dollar
    Usd,
    /// Vietnamese Dong
    Vnd,
    /// South African Rand
    Zar,
}

/// Static metadata for one currency: (currency, code, name, symbol, country).
type CurrencyRow = (Currency, &'static str, &'static str, &'static str, &'static str);

const CURRENCY_TABLE: [CurrencyRow; 24] = [
    (Currency::Aed, "AED", "United Arab Emirates Dirham", "د.إ", "ae"),
    (Currency::Ars, "ARS", "Argentine Peso", "$", "ar"),
    (Currency::Aud, "AUD", "Australian Dollar", "A$", "au"),
    (Currency::Cad, "CAD", "Canadian Dollar", "C$", "ca"),
    (Currency::Chf, "CHF", "Swiss Franc", "Fr", "ch"),
    (Currency::Cny, "CNY", "Chinese Yuan", "¥", "cn"),
    (Currency::Eur, "EUR", "Euro", "€", "eu"),
    (Currency::Gbp, "GBP", "British Pound", "£", "gb"),
    (Currency::Hkd, "HKD", "Hong Kong Dollar", "HK$", "hk"),
    (Currency::Idr, "IDR", "Indonesian Rupiah", "Rp", "id"),
    (Currency::Ils, "ILS", "Israeli New Shekel", "₪", "il"),
    (Currency::Jpy, "JPY", "Japanese Yen", "¥", "jp"),
    (Currency::Kes, "KES", "Kenyan Shilling", "KSh", "ke"),
    (Currency::Mxn, "MXN", "Mexican Peso", "$", "mx"),
    (Currency::Myr, "MYR", "Malaysian Ringgit", "RM", "my"),
    (Currency::Nzd, "NZD", "New Zealand Dollar", "NZ$", "nz"),
    (Currency::Pln, "PLN", "Polish Złoty", "zł", "pl"),
    (Currency::Sar, "SAR", "Saudi Riyal", "﷼", "sa"),
    (Currency::Sgd, "SGD", "Singapore Dollar", "S$", "sg"),
    (Currency::Thb, "THB", "Thai Baht", "฿", "th"),
    (Currency::Try, "TRY", "Turkish Lira", "₺", "tr"),
    (Currency::Usd, "USD", "United States Dollar", "$", "us"),
    (Currency::Vnd, "VND", "Vietnamese Dong", "₫", "vn"),
    (Currency::Zar, "ZAR", "South African Rand", "R", "za"),
];

impl Currency {
    /// All currencies in table order.
    pub const ALL: [Currency; 24] = [
        Self::Aed,
        Self::Ars,
        Self::Aud,
        Self::Cad,
        Self::Chf,
        Self::Cny,
        Self::Eur,
        Self::Gbp,
        Self::Hkd,
        Self::Idr,
        Self::Ils,
        Self::Jpy,
        Self::Kes,
        Self::Mxn,
        Self::Myr,
        Self::Nzd,
        Self::Pln,
        Self::Sar,
        Self::Sgd,
        Self::Thb,
        Self::Try,
        Self::Usd,
        Self::Vnd,
        Self::Zar,
    ];

    /// Position in [`Currency::ALL`] and the metadata table.
    fn index(self) -> usize {
        self as usize
    }

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        CURRENCY_TABLE[self.index()].1
    }

    /// Full metadata record for this currency.
    pub fn info(self) -> &'static CurrencyInfo {
        &currency_info()[self.index()]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = RampkitError;

    /// Case-sensitive: `"usd"` is not a currency code.
    fn from_str(s: &str) -> Result<Self> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code() == s)
            .ok_or_else(|| RampkitError::UnknownCurrency(s.to_string()))
    }
}

/// Display metadata for a currency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// The currency variant.
    pub currency: Currency,
    /// ISO 4217 code.
    pub currency_code: &'static str,
    /// English display name.
    pub currency_name: &'static str,
    /// Display symbol.
    pub currency_symbol: &'static str,
    /// `0x`-prefixed Keccak-256 of the code.
    pub currency_code_hash: String,
    /// Lowercase ISO 3166 alpha-2 country code (`eu` for the Euro).
    pub country_code: &'static str,
}

/// Keccak-256 of the UTF-8 bytes of `code`, as `0x`-prefixed lowercase hex.
pub fn currency_code_hash(code: &str) -> String {
    let digest = Keccak256::digest(code.as_bytes());
    format!("0x{}", hex::encode(digest))
}

/// The full currency table, in [`Currency::ALL`] order.
pub fn currency_info() -> &'static [CurrencyInfo] {
    static TABLE: OnceLock<Vec<CurrencyInfo>> = OnceLock::new();
    TABLE.get_or_init(|| {
        CURRENCY_TABLE
            .iter()
            .map(|&(currency, code, name, symbol, country)| CurrencyInfo {
                currency,
                currency_code: code,
                currency_name: name,
                currency_symbol: symbol,
                currency_code_hash: currency_code_hash(code),
                country_code: country,
            })
            .collect()
    })
}

/// All supported currency codes in table order.
pub fn currencies() -> Vec<&'static str> {
    Currency::ALL.iter().map(|c| c.code()).collect()
}

/// Finds the currency whose code hash equals `currency_code_hash`.
pub fn get_currency_info_from_hash(currency_code_hash: &str) -> Option<&'static CurrencyInfo> {
    currency_info()
        .iter()
        .find(|info| info.currency_code_hash == currency_code_hash)
}

/// Finds the first currency issued for `country_code` (lowercase alpha-2).
pub fn get_currency_info_from_country_code(country_code: &str) -> Option<&'static CurrencyInfo> {
    currency_info()
        .iter()
        .find(|info| info.country_code == country_code)
}

/// True iff `currency_code` exactly matches a supported code.
pub fn is_supported_currency(currency_code: &str) -> bool {
    currency_info()
        .iter()
        .any(|info| info.currency_code == currency_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (i, currency) in Currency::ALL.iter().enumerate() {
            assert_eq!(CURRENCY_TABLE[i].0, *currency);
            assert_eq!(currency.info().currency, *currency);
        }
    }

    #[test]
    fn test_keccak_not_sha3() {
        // Keccak-256 of the empty string; SHA3-256 would start with a7ffc6f8.
        assert_eq!(
            currency_code_hash(""),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_hash_shape() {
        let hash = Currency::Usd.info().currency_code_hash.clone();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert_eq!(hash, hash.to_lowercase());
        assert_eq!(hash, currency_code_hash("USD"));
    }

    #[test]
    fn test_lookups() {
        let usd = get_currency_info_from_country_code("us").unwrap();
        assert_eq!(usd.currency, Currency::Usd);
        assert_eq!(usd.currency_symbol, "$");

        let ars = get_currency_info_from_hash(&currency_code_hash("ARS")).unwrap();
        assert_eq!(ars.currency_name, "Argentine Peso");

        assert!(get_currency_info_from_hash("0xdeadbeef").is_none());
        assert!(get_currency_info_from_country_code("US").is_none());
        assert!(get_currency_info_from_country_code("xx").is_none());
    }

    #[test]
    fn test_is_supported_is_case_sensitive() {
        assert!(is_supported_currency("EUR"));
        assert!(!is_supported_currency("eur"));
        assert!(!is_supported_currency("BTC"));
        assert!(!is_supported_currency(""));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("gbp".parse::<Currency>().is_err());
        assert_eq!(Currency::Try.to_string(), "TRY");
        assert_eq!(serde_json::to_string(&Currency::Mxn).unwrap(), "\"MXN\"");
        assert_eq!(currencies().len(), 24);
    }
}
