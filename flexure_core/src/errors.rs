//! # Error Types
//!
//! Structured error types for flexure_core. Every rejected design carries
//! enough context (field, value, limit) for a caller to see what has to
//! change, and every error serializes to JSON for transport.
//!
//! ## Example
//!
//! ```rust
//! use flexure_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height: f64) -> CalcResult<()> {
//!     if height <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height",
//!             height.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for flexure_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (zero, negative, non-finite, inconsistent geometry)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Moment demand exceeds what the concrete section can carry
    #[error("Invalid section: resistance coefficient {resistance_coefficient:.4} exceeds {limit}")]
    OverStressedSection {
        resistance_coefficient: f64,
        limit: f64,
    },

    /// Required tension steel exceeds the code maximum
    #[error("Invalid section: required area {required_area:.1} mm2 exceeds maximum {maximum_area:.1} mm2")]
    NonCompliantSection {
        required_area: f64,
        maximum_area: f64,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Arithmetic fault that valid input should never reach
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Coarse classification used by boundaries to pick a transport code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The request itself is malformed
    BadRequest,
    /// The request is well formed but the section cannot be designed
    InvalidSection,
    /// Fault inside the engine
    Internal,
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OverStressedSection error
    pub fn over_stressed(resistance_coefficient: f64, limit: f64) -> Self {
        CalcError::OverStressedSection {
            resistance_coefficient,
            limit,
        }
    }

    /// Create a NonCompliantSection error
    pub fn non_compliant(required_area: f64, maximum_area: f64) -> Self {
        CalcError::NonCompliantSection {
            required_area,
            maximum_area,
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        CalcError::Internal {
            message: message.into(),
        }
    }

    /// Classify the error for the calling boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidInput { .. }
            | CalcError::MissingField { .. }
            | CalcError::SerializationError { .. } => ErrorKind::BadRequest,
            CalcError::OverStressedSection { .. } | CalcError::NonCompliantSection { .. } => {
                ErrorKind::InvalidSection
            }
            CalcError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OverStressedSection { .. } => "OVER_STRESSED_SECTION",
            CalcError::NonCompliantSection { .. } => "NON_COMPLIANT_SECTION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject a non-finite intermediate value as an internal fault.
///
/// Validated input never produces NaN or infinity, so reaching one here is
/// logged and surfaced generically instead of leaking into the result.
pub(crate) fn ensure_finite(quantity: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::error!(quantity, value, "non-finite intermediate value");
        Err(CalcError::internal(format!("{} evaluated to {}", quantity, value)))
    }
}
