//! Payment platforms.
//!
//! Each supported platform is a variant of [`PaymentPlatform`] and has one
//! [`PlatformConfig`] in the [`PlatformRegistry`]. Per-platform behaviour
//! (link formatting, deposit data, proof parsing) sits behind the
//! [`PlatformPlugin`] trait, and the optional identity check behind
//! [`DepositValidator`].
//!
//! # Example
//!
//! ```ignore
//! use rampkit_lib::platforms::{global, PaymentPlatform};
//!
//! let registry = global::registry()?;
//! let venmo = registry.get(PaymentPlatform::Venmo);
//! println!("{}", venmo.formatted_send_link("alice", None, Some("10")));
//! ```

mod cashapp;
mod config;
mod mercado_pago;
mod registry;
mod revolut;
mod traits;
mod venmo;
mod wise;

pub use cashapp::{CashAppPlugin, CashAppValidator, CASHTAG_KEY};
pub use config::{DepositSpec, PlatformConfig};
pub use mercado_pago::{MercadoPagoPlugin, MercadoPagoValidator, CVU_KEY};
pub use registry::{global, PlatformRegistry};
pub use revolut::{RevolutPlugin, RevolutValidator, REVOLUT_USERNAME_KEY};
pub use traits::{
    DepositData, DepositValidator, PlatformPlugin, ProofExtractedParameters, TELEGRAM_USERNAME_KEY,
};
pub use venmo::{VenmoPlugin, VenmoValidator, VENMO_USERNAME_KEY};
pub use wise::{WisePlugin, WISETAG_KEY};

use crate::{RampkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a supported payment platform.
///
/// The serialized identifiers are published to downstream consumers and must
/// stay byte-stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentPlatform {
    /// Venmo (`venmo`).
    #[serde(rename = "venmo")]
    Venmo,
    /// Cash App (`cashapp`).
    #[serde(rename = "cashapp")]
    CashApp,
    /// Revolut (`revolut`).
    #[serde(rename = "revolut")]
    Revolut,
    /// Wise (`wise`).
    #[serde(rename = "wise")]
    Wise,
    /// Mercado Pago (`mercado_pago`).
    #[serde(rename = "mercado_pago")]
    MercadoPago,
}

/// Every platform in its published order.
pub const PAYMENT_PLATFORMS: [PaymentPlatform; 5] = [
    PaymentPlatform::Venmo,
    PaymentPlatform::CashApp,
    PaymentPlatform::Revolut,
    PaymentPlatform::Wise,
    PaymentPlatform::MercadoPago,
];

impl PaymentPlatform {
    /// Well-known identifier for Venmo.
    pub const VENMO: &'static str = "venmo";

    /// Well-known identifier for Cash App.
    pub const CASHAPP: &'static str = "cashapp";

    /// Well-known identifier for Revolut.
    pub const REVOLUT: &'static str = "revolut";

    /// Well-known identifier for Wise.
    pub const WISE: &'static str = "wise";

    /// Well-known identifier for Mercado Pago.
    pub const MERCADO_PAGO: &'static str = "mercado_pago";

    /// The published identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Venmo => Self::VENMO,
            Self::CashApp => Self::CASHAPP,
            Self::Revolut => Self::REVOLUT,
            Self::Wise => Self::WISE,
            Self::MercadoPago => Self::MERCADO_PAGO,
        }
    }

    /// Name used in the collapsed "Failed to get <label> ID" message.
    pub fn lookup_label(self) -> &'static str {
        match self {
            Self::Venmo => "Venmo",
            Self::CashApp => "Cashapp",
            Self::Revolut => "Revolut",
            Self::Wise => "Wise",
            Self::MercadoPago => "Mercado Pago",
        }
    }

    /// Position in [`PAYMENT_PLATFORMS`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Venmo => 0,
            Self::CashApp => 1,
            Self::Revolut => 2,
            Self::Wise => 3,
            Self::MercadoPago => 4,
        }
    }
}

impl fmt::Display for PaymentPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentPlatform {
    type Err = RampkitError;

    /// Exact match on the published identifier only.
    fn from_str(s: &str) -> Result<Self> {
        PAYMENT_PLATFORMS
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RampkitError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_stable() {
        let ids: Vec<&str> = PAYMENT_PLATFORMS.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["venmo", "cashapp", "revolut", "wise", "mercado_pago"]);

        for platform in PAYMENT_PLATFORMS {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
        }
    }

    #[test]
    fn test_index_matches_order() {
        for (i, platform) in PAYMENT_PLATFORMS.iter().enumerate() {
            assert_eq!(platform.index(), i);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "mercado_pago".parse::<PaymentPlatform>().unwrap(),
            PaymentPlatform::MercadoPago
        );
        assert!("mercadopago".parse::<PaymentPlatform>().is_err());
        assert!("Venmo".parse::<PaymentPlatform>().is_err());
    }
}
