//! Error taxonomy for JAUS message serialization
//!
//! Every failure in the serialization core is returned as a [`JausError`]; nothing
//! in the codec panics or aborts. Each variant carries enough context to tell a
//! truncated stream apart from a corrupted presence vector or a caller passing an
//! out-of-range value.

use thiserror::Error;

/// Serialization errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JausError {
    /// A setter was called with a value outside the field's declared limits
    #[error("Value {value} out of range for {field}: expected [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Bytes written did not match the bytes expected for the field configuration
    #[error("Write failure in {context}: expected {expected} bytes, wrote {actual}")]
    WriteFailure {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Bytes consumed did not match the bytes expected, or the stream ran dry
    #[error("Read failure in {context}: expected {expected} bytes, got {actual}")]
    ReadFailure {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Requested protocol version is newer than the message type supports
    #[error("Unsupported JAUS version {version}: maximum supported is {max}")]
    UnsupportedVersion { version: u8, max: u8 },

    /// A required field was read while its presence bit is unset
    #[error("Field {field} is not present")]
    FieldNotPresent { field: &'static str },

    /// No catalog entry exists for the command code
    #[error("Unknown command code {0:#06x}")]
    UnknownCommandCode(u16),

    /// Header field holds a value the protocol does not define
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Body exceeds what a single-packet header can describe
    #[error("Message too large: {size} bytes exceeds maximum {max}")]
    MessageTooLarge { size: usize, max: usize },
}

impl JausError {
    /// Create an OutOfRange error for a rejected setter value
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// Create a WriteFailure error from an expected/actual byte count pair
    pub fn write_failure(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::WriteFailure {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a ReadFailure error from an expected/actual byte count pair
    pub fn read_failure(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ReadFailure {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a ReadFailure for a received presence vector claiming illegal bits
    pub fn invalid_presence_vector(context: &str, vector: u32, mask: u32) -> Self {
        Self::ReadFailure {
            context: format!(
                "{context}: presence vector {vector:#x} sets bits outside mask {mask:#x}"
            ),
            expected: 0,
            actual: 0,
        }
    }

    /// Create an UnsupportedVersion error
    pub fn unsupported_version(version: u8, max: u8) -> Self {
        Self::UnsupportedVersion { version, max }
    }

    /// True for the byte-count integrity failures
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::WriteFailure { .. } | Self::ReadFailure { .. })
    }
}

/// Result type for serialization operations
pub type JausResult<T> = std::result::Result<T, JausError>;
