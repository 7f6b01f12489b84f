//! Error types for DeviceCheck attestation handling

use thiserror::Error;

/// Errors raised while building or interpreting an attestation read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceCheckError {
    /// Last-update month supplied but not a valid `YYYY-MM` value
    #[error("malformed last update month '{value}': {reason}")]
    MalformedDate { value: String, reason: String },

    /// Month-dependent logic reached without a last-update month
    #[error("invalid attestation state: {0}")]
    InvalidState(String),

    /// Reference time configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DeviceCheckError {
    pub(crate) fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using DeviceCheckError
pub type Result<T> = std::result::Result<T, DeviceCheckError>;
