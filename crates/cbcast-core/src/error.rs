//! Shared error type across cbcast crates.

use thiserror::Error;

/// Stable error codes (used in logs and by host integrations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Carrier range element could not be decoded.
    InvalidRange,
    /// Device profile failed strict parsing or validation.
    BadConfig,
    /// Unsupported profile version.
    UnsupportedVersion,
    /// Reading a profile from disk failed.
    Io,
}

impl ErrorCode {
    /// String representation used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CbError>;

/// Unified error type used by core and service.
#[derive(Debug, Error)]
pub enum CbError {
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported profile version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
}

impl CbError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CbError::InvalidRange(_) => ErrorCode::InvalidRange,
            CbError::BadConfig(_) => ErrorCode::BadConfig,
            CbError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            CbError::Io(_) => ErrorCode::Io,
        }
    }
}
