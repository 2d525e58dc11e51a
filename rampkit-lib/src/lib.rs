//! Rampkit library.
//!
//! Reference data and small pure helpers for fiat on-ramp payment platforms:
//! the platforms a deposit can be paid through, the currencies they carry,
//! how to link a sender to them and how to read their proofs of payment.
//! Nothing here holds mutable state; the registry is built once and read
//! thereafter.
//!
//! # Features
//!
//! - **Currency Table**: display metadata and Keccak-256 code hashes for 24 fiat currencies
//! - **Platform Registry**: configuration for Venmo, Cash App, Revolut, Wise and Mercado Pago
//! - **Proof Parsers**: normalize provider proof contexts into [`ProofExtractedParameters`]
//! - **Deposit Validators**: confirm payee handles via public profile lookups
//! - **CVU Checksum**: local validation of Mercado Pago account identifiers
//!
//! # Cargo features
//!
//! - `http-lookup` (default): live profile lookups through `reqwest`
//! - `tracing` (default): spans and events for lookups and deposit validation
//!
//! # Example
//!
//! ```ignore
//! use rampkit_lib::prelude::*;
//!
//! let registry = PlatformRegistry::with_defaults()?;
//! let revolut = registry.get(PaymentPlatform::Revolut);
//!
//! let link = revolut.formatted_send_link("alice", Some(Currency::Eur), Some("25"));
//! assert_eq!(link, "https://revolut.me/alice");
//!
//! let deposit = revolut.deposit_data("alice", Some("alice_tg"));
//! let revtag = registry.validate_deposit(PaymentPlatform::Revolut, &deposit).await?;
//! ```

pub mod currency;
pub mod cvu;
pub mod errors;
pub mod lookup;
pub mod platforms;
pub mod prelude;
pub mod proof;

pub use currency::{
    currencies, currency_code_hash, currency_info, get_currency_info_from_country_code,
    get_currency_info_from_hash, is_supported_currency, Currency, CurrencyInfo,
};
pub use cvu::validate_cvu;
pub use errors::{LookupError, RampkitError, RampkitErrorCode};
pub use platforms::{
    DepositData, PaymentPlatform, PlatformConfig, PlatformRegistry, ProofExtractedParameters,
    PAYMENT_PLATFORMS,
};

/// Common result alias for Rampkit operations.
pub type Result<T> = std::result::Result<T, RampkitError>;
