//! # Error Types
//!
//! Structured error types for steel_core. Every failure in the check pipeline
//! is surfaced to the caller; nothing is silently defaulted or recovered.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for steel_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis and design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (inverted span, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The requested code, method, support or bracing option has no implementation
    #[error("Unsupported configuration: {what} '{value}'")]
    UnsupportedConfiguration { what: String, value: String },

    /// A capacity check was requested on a beam with no assigned section
    #[error("Missing section: beam '{beam}' has no assigned section")]
    MissingSection { beam: String },

    /// Section designation not present in the section database
    #[error("Section not found: {label}")]
    SectionNotFound { label: String },

    /// Input that would produce an infinite or NaN result
    #[error("Degenerate input: {quantity} - {reason}")]
    DegenerateInput { quantity: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported(what: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnsupportedConfiguration {
            what: what.into(),
            value: value.into(),
        }
    }

    /// Create a MissingSection error
    pub fn missing_section(beam: impl Into<String>) -> Self {
        CalcError::MissingSection { beam: beam.into() }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(label: impl Into<String>) -> Self {
        CalcError::SectionNotFound { label: label.into() }
    }

    /// Create a DegenerateInput error
    pub fn degenerate(quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DegenerateInput {
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by an unsupported code, method or option
    pub fn is_configuration(&self) -> bool {
        matches!(self, CalcError::UnsupportedConfiguration { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            CalcError::MissingSection { .. } => "MISSING_SECTION",
            CalcError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            CalcError::DegenerateInput { .. } => "DEGENERATE_INPUT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("end", "2.0", "End must exceed start");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_section("B-1").error_code(), "MISSING_SECTION");
        assert_eq!(CalcError::section_not_found("W99X1").error_code(), "SECTION_NOT_FOUND");
        assert_eq!(
            CalcError::unsupported("support condition", "FixedFixed").error_code(),
            "UNSUPPORTED_CONFIGURATION"
        );
    }

    #[test]
    fn test_configuration_classification() {
        assert!(CalcError::unsupported("design method", "ASD").is_configuration());
        assert!(!CalcError::degenerate("capacity", "zero").is_configuration());
    }

    #[test]
    fn test_display_names_the_configuration() {
        let msg = CalcError::unsupported("load combinations", "NTC-CDMX-2023 / ASD").to_string();
        assert!(msg.contains("NTC-CDMX-2023 / ASD"));
    }
}
