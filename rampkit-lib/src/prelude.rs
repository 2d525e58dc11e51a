//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use rampkit_lib::prelude::*;
//! ```

// Reference data
pub use crate::currency::{Currency, CurrencyInfo};

// Error handling
pub use crate::errors::{LookupError, RampkitError, RampkitErrorCode};
pub use crate::Result;

// Platforms
pub use crate::platforms::{
    DepositData, DepositSpec, DepositValidator, PaymentPlatform, PlatformConfig, PlatformPlugin,
    PlatformRegistry, ProofExtractedParameters, PAYMENT_PLATFORMS,
};

// Lookups
pub use crate::lookup::{LookupClient, LookupConfig};

// CVU
pub use crate::cvu::validate_cvu;
