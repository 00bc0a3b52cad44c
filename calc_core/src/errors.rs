//! # Error Types
//!
//! Structured error types for timberfire_core. Every failure a member can
//! hit during sizing is a variant here, so a batch run can report one error
//! per member and keep going with the rest.
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::errors::{CalcError, CalcResult};
//!
//! fn validate_minutes(minutes: f64) -> CalcResult<()> {
//!     if minutes < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "exposure_minutes",
//!             minutes.to_string(),
//!             "Exposure time cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_minutes(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for timberfire_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Strength class is not in the material catalog
    #[error("Unknown strength class: {name}")]
    UnknownStrengthClass { name: String },

    /// Wood type is not one of sawn, planed or glulam
    #[error("Unknown wood type: {name}")]
    UnknownWoodType { name: String },

    /// Exposed-sides code below 1 or not a number
    #[error("Invalid fire exposure configuration: {value}")]
    InvalidExposureConfig { value: String },

    /// Every geometrically valid candidate failed the capacity check
    #[error("No adequate section for '{member}': {reason}")]
    NoAdequateSection { member: String, reason: String },

    /// No candidate passed the minimum-section screen with a positive
    /// residual section after charring
    #[error("Degenerate geometry for '{member}': none of {candidates} candidate(s) leaves a usable residual section")]
    DegenerateGeometry { member: String, candidates: usize },

    /// An input value is invalid (out of range, wrong length, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Settings file could not be read or parsed
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },
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

    /// Create an UnknownStrengthClass error
    pub fn unknown_strength_class(name: impl Into<String>) -> Self {
        CalcError::UnknownStrengthClass { name: name.into() }
    }

    /// Create an UnknownWoodType error
    pub fn unknown_wood_type(name: impl Into<String>) -> Self {
        CalcError::UnknownWoodType { name: name.into() }
    }

    /// Create a NoAdequateSection error
    pub fn no_adequate_section(member: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NoAdequateSection {
            member: member.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(member: impl Into<String>, candidates: usize) -> Self {
        CalcError::DegenerateGeometry {
            member: member.into(),
            candidates,
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True when the failure means the member cannot be sized with the
    /// given inputs (as opposed to the inputs themselves being malformed).
    pub fn is_sizing_failure(&self) -> bool {
        matches!(
            self,
            CalcError::NoAdequateSection { .. } | CalcError::DegenerateGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownStrengthClass { .. } => "UNKNOWN_STRENGTH_CLASS",
            CalcError::UnknownWoodType { .. } => "UNKNOWN_WOOD_TYPE",
            CalcError::InvalidExposureConfig { .. } => "INVALID_EXPOSURE_CONFIG",
            CalcError::NoAdequateSection { .. } => "NO_ADEQUATE_SECTION",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }
}
