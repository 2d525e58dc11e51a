//! Proof-of-payment context reading.
//!
//! Proof contexts arrive as a JSON string:
//!
//! ```json
//! {
//!   "extractedParameters": { "amount": "-1250", "...": "..." },
//!   "contextMessage": "<intent hash>",
//!   "providerHash": "<provider hash>"
//! }
//! ```
//!
//! [`ProofContext`] validates the envelope and offers typed accessors for
//! the platform-specific parameters. Every accessor fails with a structured
//! error naming the offending field instead of letting a missing value leak
//! into the output.

use crate::platforms::{PaymentPlatform, ProofExtractedParameters};
use crate::{RampkitError, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

const EXTRACTED_PARAMETERS: &str = "extractedParameters";
const CONTEXT_MESSAGE: &str = "contextMessage";
const PROVIDER_HASH: &str = "providerHash";

/// Seconds west of UTC for America/Argentina/Buenos_Aires (no DST since 2009).
const BUENOS_AIRES_UTC_OFFSET_WEST: i32 = 3 * 3600;

/// Parsed proof envelope.
#[derive(Clone, Debug)]
pub struct ProofContext {
    params: Map<String, Value>,
    intent_hash: String,
    provider_hash: String,
}

impl ProofContext {
    /// Parses the serialized context and checks the envelope fields.
    pub fn parse(context: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(context)?;
        let Value::Object(mut root) = value else {
            return Err(RampkitError::Parse(
                "proof context is not a JSON object".to_string(),
            ));
        };

        let params = match root.remove(EXTRACTED_PARAMETERS) {
            Some(Value::Object(params)) => params,
            Some(_) => {
                return Err(RampkitError::invalid_field(
                    EXTRACTED_PARAMETERS,
                    "expected an object",
                ))
            }
            None => return Err(RampkitError::missing_field(EXTRACTED_PARAMETERS)),
        };

        Ok(Self {
            params,
            intent_hash: text_field(&root, CONTEXT_MESSAGE)?,
            provider_hash: text_field(&root, PROVIDER_HASH)?,
        })
    }

    /// The context message, which carries the intent hash.
    pub fn intent_hash(&self) -> &str {
        &self.intent_hash
    }

    /// The provider hash.
    pub fn provider_hash(&self) -> &str {
        &self.provider_hash
    }

    /// A parameter as text. JSON numbers are accepted and rendered as written.
    pub fn param(&self, name: &str) -> Result<String> {
        text_field(&self.params, name)
    }

    /// A decimal amount parameter with its sign stripped.
    pub fn unsigned_amount(&self, name: &str) -> Result<Decimal> {
        let raw = self.param(name)?;
        parse_decimal(&raw)
            .map(|amount| amount.abs())
            .ok_or_else(|| RampkitError::invalid_field(name, format!("not a number: {raw}")))
    }

    /// An amount reported in minor units (cents), sign stripped and scaled
    /// to major units.
    pub fn unsigned_minor_units_amount(&self, name: &str) -> Result<Decimal> {
        Ok(self.unsigned_amount(name)? / Decimal::ONE_HUNDRED)
    }

    /// A millisecond Unix timestamp parameter.
    pub fn epoch_millis(&self, name: &str) -> Result<DateTime<Utc>> {
        let raw = self.param(name)?;
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .ok_or_else(|| {
                RampkitError::invalid_field(name, format!("not a millisecond timestamp: {raw}"))
            })
    }

    /// An ISO-8601 date-time without offset, interpreted as UTC.
    pub fn naive_utc(&self, name: &str) -> Result<DateTime<Utc>> {
        let raw = self.param(name)?;
        parse_naive(&raw)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| RampkitError::invalid_field(name, format!("not an ISO date-time: {raw}")))
    }

    /// An ISO-8601 date-time. Values without an offset are taken as
    /// Buenos Aires local time.
    pub fn buenos_aires_datetime(&self, name: &str) -> Result<DateTime<Utc>> {
        let raw = self.param(name)?;
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw.trim()) {
            return Ok(with_offset.with_timezone(&Utc));
        }
        parse_naive(&raw)
            .and_then(|naive| buenos_aires().from_local_datetime(&naive).single())
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| RampkitError::invalid_field(name, format!("not an ISO date-time: {raw}")))
    }

    /// Assembles the normalized record, carrying the envelope hashes over.
    pub fn into_extracted(
        self,
        platform: PaymentPlatform,
        amount: String,
        currency: String,
        date: String,
        payment_id: String,
        recipient: String,
    ) -> ProofExtractedParameters {
        ProofExtractedParameters {
            amount,
            recipient,
            currency,
            payment_platform: platform,
            date,
            payment_id,
            intent_hash: self.intent_hash,
            provider_hash: self.provider_hash,
        }
    }
}

fn text_field(object: &Map<String, Value>, name: &str) -> Result<String> {
    match object.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Null) | None => Err(RampkitError::missing_field(name)),
        Some(_) => Err(RampkitError::invalid_field(name, "expected a string")),
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

fn buenos_aires() -> FixedOffset {
    FixedOffset::west_opt(BUENOS_AIRES_UTC_OFFSET_WEST).unwrap_or(Utc.fix())
}

/// Renders a decimal the way a JavaScript number prints: no trailing zeros,
/// no exponent.
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// `Jan 5, 2024, 3:07 PM` in UTC.
pub fn format_en_us(datetime: DateTime<Utc>) -> String {
    datetime.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// `5 ene 2024, 15:07` in Buenos Aires time, 24-hour clock.
pub fn format_es_ar(datetime: DateTime<Utc>) -> String {
    const MONTHS: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ];
    let local = datetime.with_timezone(&buenos_aires());
    format!(
        "{} {} {}, {}",
        local.day(),
        MONTHS[local.month0() as usize],
        local.year(),
        local.format("%-H:%M")
    )
}
