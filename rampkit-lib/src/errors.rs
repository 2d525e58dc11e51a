//! Error types for Rampkit operations.
//!
//! Every fallible operation in the crate returns [`RampkitError`]. Deposit
//! lookups against third-party profile pages collapse into a single
//! user-facing message, while the underlying [`LookupError`] stays reachable
//! through [`std::error::Error::source`] for logging and retry decisions.

use crate::platforms::PaymentPlatform;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RampkitErrorCode {
    /// Input could not be parsed
    Parse = 1000,
    /// Required field absent from the input
    MissingField = 1001,
    /// Field present but of the wrong type or shape
    InvalidField = 1002,
    /// CVU is not 22 digits
    InvalidFormat = 2000,
    /// CVU does not carry the Mercado Pago prefix
    InvalidPrefix = 2001,
    /// CVU check digit mismatch
    ChecksumMismatch = 2002,
    /// Remote identity lookup failed
    ValidationFailed = 3000,
    /// Unknown payment platform identifier
    UnknownPlatform = 4000,
    /// Unknown currency code
    UnknownCurrency = 4001,
    /// Internal/unexpected error
    Internal = 9999,
}

/// Comprehensive error type for Rampkit operations.
#[derive(Debug, thiserror::Error)]
pub enum RampkitError {
    /// CVU is not exactly 22 ASCII digits.
    #[error("Invalid Mercado Pago CVU: must be exactly 22 digits")]
    InvalidCvuFormat,

    /// CVU does not start with the Mercado Pago entity prefix.
    #[error("Invalid Mercado Pago CVU: must start with {expected}")]
    InvalidCvuPrefix {
        /// The prefix every Mercado Pago CVU carries
        expected: &'static str,
    },

    /// The account block check digit does not match.
    #[error("Invalid Mercado Pago CVU: second block checksum failed")]
    CvuChecksumMismatch {
        /// Check digit computed from the account block
        expected: u8,
        /// Check digit found at the end of the CVU
        found: u8,
    },

    /// Proof context is not valid JSON or not a JSON object.
    #[error("malformed proof context: {0}")]
    Parse(String),

    /// A required field is absent.
    #[error("missing field `{field}`")]
    MissingField {
        /// Field name as it appears in the input
        field: String,
    },

    /// A field is present but unusable.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Field name as it appears in the input
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Remote identity lookup failed. The message is identical for unknown
    /// handles and network failures; `cause` keeps the distinction.
    #[error("Failed to get {} ID for {handle}", .platform.lookup_label())]
    DepositValidation {
        /// Platform whose profile was looked up
        platform: PaymentPlatform,
        /// Handle as entered by the user
        handle: String,
        /// Lower-level failure
        #[source]
        cause: LookupError,
    },

    /// Unknown payment platform identifier.
    #[error("unknown payment platform: {0}")]
    UnknownPlatform(String),

    /// Unknown currency code.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Internal/unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RampkitError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> RampkitErrorCode {
        match self {
            Self::InvalidCvuFormat => RampkitErrorCode::InvalidFormat,
            Self::InvalidCvuPrefix { .. } => RampkitErrorCode::InvalidPrefix,
            Self::CvuChecksumMismatch { .. } => RampkitErrorCode::ChecksumMismatch,
            Self::Parse(_) => RampkitErrorCode::Parse,
            Self::MissingField { .. } => RampkitErrorCode::MissingField,
            Self::InvalidField { .. } => RampkitErrorCode::InvalidField,
            Self::DepositValidation { .. } => RampkitErrorCode::ValidationFailed,
            Self::UnknownPlatform(_) => RampkitErrorCode::UnknownPlatform,
            Self::UnknownCurrency(_) => RampkitErrorCode::UnknownCurrency,
            Self::Internal(_) => RampkitErrorCode::Internal,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if retrying the same call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::DepositValidation { cause, .. } => cause.is_transient(),
            _ => false,
        }
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid field error.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RampkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Failure of a single profile lookup against a platform's public site.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// Requested URL
        url: String,
        /// Timeout in milliseconds
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection to {url} failed: {reason}")]
    Connection {
        /// Requested URL
        url: String,
        /// Underlying error message
        reason: String,
    },

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a throttling or server-side status.
    #[error("{url} responded with status {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body did not contain the account identifier.
    #[error("response did not contain an account identifier")]
    PatternNotFound,

    /// The profile returned belongs to a different handle.
    #[error("profile lookup returned `{found}` instead of `{expected}`")]
    HandleMismatch {
        /// Handle that was looked up
        expected: String,
        /// Handle found in the response
        found: String,
    },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The lookup cannot be performed by this build or for this platform.
    #[error("lookup unavailable: {0}")]
    Unavailable(&'static str),
}

impl LookupError {
    /// Returns true for failures worth retrying: timeouts, connection and
    /// transport errors, and HTTP 429 / 5xx answers.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection { .. } | Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RampkitError::InvalidCvuFormat.code(),
            RampkitErrorCode::InvalidFormat
        );
        assert_eq!(
            RampkitError::missing_field("amount").code(),
            RampkitErrorCode::MissingField
        );
        assert_eq!(
            RampkitError::invalid_field("date", "not a number").code(),
            RampkitErrorCode::InvalidField
        );
    }

    #[test]
    fn test_collapsed_validation_message() {
        let err = RampkitError::DepositValidation {
            platform: PaymentPlatform::CashApp,
            handle: "alice".to_string(),
            cause: LookupError::PatternNotFound,
        };
        assert_eq!(err.to_string(), "Failed to get Cashapp ID for alice");
        assert!(err.source().is_some());
        assert!(!err.is_retryable());

        let err = RampkitError::DepositValidation {
            platform: PaymentPlatform::Venmo,
            handle: "bob".to_string(),
            cause: LookupError::Status {
                url: "https://account.venmo.com/u/bob".to_string(),
                status: 503,
            },
        };
        assert_eq!(err.to_string(), "Failed to get Venmo ID for bob");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_cvu_messages() {
        let err = RampkitError::InvalidCvuPrefix {
            expected: "00000031",
        };
        assert_eq!(
            err.to_string(),
            "Invalid Mercado Pago CVU: must start with 00000031"
        );
    }

    #[test]
    fn test_transient_lookup_errors() {
        assert!(LookupError::Transport("reset".into()).is_transient());
        assert!(LookupError::Status {
            url: String::new(),
            status: 429
        }
        .is_transient());
        assert!(!LookupError::Status {
            url: String::new(),
            status: 404
        }
        .is_transient());
        assert!(!LookupError::HandleMismatch {
            expected: "a".into(),
            found: "b".into()
        }
        .is_transient());
    }
}
