//! # Standard Fire Exposure
//!
//! Fire exposure configuration and the two design methods of
//! EN 1995-1-2 for ISO 834 standard fire:
//!
//! - **Reduced cross-section (RCS)**: strip the char layer plus a
//!   zero-strength pyrolysis layer, verify the rest at ambient strength.
//! - **Reduced properties (SR)**: strip the char layer only, round the
//!   exposed corners and reduce the residual strength and stiffness by
//!   perimeter/area dependent factors.
//!
//! ## Exposed sides
//!
//! | Code | Faces exposed      | Width loss | Height loss | Rounded corners |
//! |------|--------------------|------------|-------------|-----------------|
//! | 1    | Width              | 0          | d           | 0               |
//! | 2    | Height             | d          | 0           | 0               |
//! | 3    | Width + Height     | d          | d           | 1               |
//! | 4    | Width + 2·Height   | 2d         | d           | 2               |
//! | 5    | 2·Width + Height   | d          | 2d          | 2               |
//! | 6    | 2·Width            | 0          | 2d          | 0               |
//! | 7    | 2·Height           | 2d         | 0           | 0               |
//! | 8    | All                | 2d         | 2d          | 4               |

pub mod charring;
pub mod reduction;

pub use charring::{CharringModel, ResidualSection};
pub use reduction::ReductionFactors;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fire design method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DesignMethod {
    /// Reduced cross-section method
    #[default]
    #[serde(rename = "rcs")]
    ReducedCrossSection,
    /// Reduced properties (strength reduction) method
    #[serde(rename = "sr")]
    ReducedProperties,
}

impl DesignMethod {
    pub const ALL: [DesignMethod; 2] = [DesignMethod::ReducedCrossSection, DesignMethod::ReducedProperties];

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "rcs" | "reducedcrosssection" => Ok(DesignMethod::ReducedCrossSection),
            "sr" | "rpm" | "reducedproperties" | "strengthreduction" => Ok(DesignMethod::ReducedProperties),
            _ => Err(CalcError::invalid_input(
                "method",
                s,
                "Expected 'rcs' or 'sr'",
            )),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::ReducedCrossSection => "Reduced cross-section",
            DesignMethod::ReducedProperties => "Reduced properties",
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which faces of the rectangular section are exposed to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "f64", into = "u8")]
pub enum ExposedSides {
    Width,
    Height,
    WidthAndHeight,
    #[default]
    WidthAndTwoHeights,
    TwoWidthsAndHeight,
    TwoWidths,
    TwoHeights,
    All,
}

impl ExposedSides {
    pub const ALL: [ExposedSides; 8] = [
        ExposedSides::Width,
        ExposedSides::Height,
        ExposedSides::WidthAndHeight,
        ExposedSides::WidthAndTwoHeights,
        ExposedSides::TwoWidthsAndHeight,
        ExposedSides::TwoWidths,
        ExposedSides::TwoHeights,
        ExposedSides::All,
    ];

    /// Map an input code. Fractions round up, codes above 8 clamp to 8
    /// (all sides); codes below 1 are rejected.
    pub fn from_code(code: f64) -> CalcResult<Self> {
        if !code.is_finite() {
            return Err(CalcError::InvalidExposureConfig {
                value: code.to_string(),
            });
        }
        let rounded = code.ceil();
        if rounded < 1.0 {
            return Err(CalcError::InvalidExposureConfig {
                value: code.to_string(),
            });
        }
        if rounded > 8.0 {
            tracing::warn!("Exposed sides code {} clamped to 8 (all sides)", code);
            return Ok(ExposedSides::All);
        }
        Ok(Self::ALL[rounded as usize - 1])
    }

    /// Numeric code 1-8
    pub fn code(&self) -> u8 {
        match self {
            ExposedSides::Width => 1,
            ExposedSides::Height => 2,
            ExposedSides::WidthAndHeight => 3,
            ExposedSides::WidthAndTwoHeights => 4,
            ExposedSides::TwoWidthsAndHeight => 5,
            ExposedSides::TwoWidths => 6,
            ExposedSides::TwoHeights => 7,
            ExposedSides::All => 8,
        }
    }

    /// How many char depths come off the (width, height)
    pub fn char_layers(&self) -> (u8, u8) {
        match self {
            ExposedSides::Width => (0, 1),
            ExposedSides::Height => (1, 0),
            ExposedSides::WidthAndHeight => (1, 1),
            ExposedSides::WidthAndTwoHeights => (2, 1),
            ExposedSides::TwoWidthsAndHeight => (1, 2),
            ExposedSides::TwoWidths => (0, 2),
            ExposedSides::TwoHeights => (2, 0),
            ExposedSides::All => (2, 2),
        }
    }

    /// Corners exposed on both adjacent faces
    pub fn rounded_corners(&self) -> u8 {
        match self {
            ExposedSides::Width | ExposedSides::Height | ExposedSides::TwoWidths | ExposedSides::TwoHeights => 0,
            ExposedSides::WidthAndHeight => 1,
            ExposedSides::WidthAndTwoHeights | ExposedSides::TwoWidthsAndHeight => 2,
            ExposedSides::All => 4,
        }
    }

    /// Factor `a` of the minimum section width bmin = a·dchar + 80
    pub fn min_section_factor(&self) -> f64 {
        match self {
            ExposedSides::Width
            | ExposedSides::Height
            | ExposedSides::WidthAndHeight
            | ExposedSides::TwoWidthsAndHeight
            | ExposedSides::TwoWidths => 1.0,
            ExposedSides::WidthAndTwoHeights | ExposedSides::TwoHeights | ExposedSides::All => 2.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExposedSides::Width => "Width",
            ExposedSides::Height => "Height",
            ExposedSides::WidthAndHeight => "Width+Height",
            ExposedSides::WidthAndTwoHeights => "Width+2*Height",
            ExposedSides::TwoWidthsAndHeight => "2*Width+Height",
            ExposedSides::TwoWidths => "2*Width",
            ExposedSides::TwoHeights => "2*Height",
            ExposedSides::All => "All",
        }
    }
}

impl TryFrom<f64> for ExposedSides {
    type Error = CalcError;

    fn try_from(code: f64) -> Result<Self, Self::Error> {
        ExposedSides::from_code(code)
    }
}

impl TryFrom<u8> for ExposedSides {
    type Error = CalcError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ExposedSides::from_code(f64::from(code))
    }
}

impl From<ExposedSides> for u8 {
    fn from(sides: ExposedSides) -> Self {
        sides.code()
    }
}

impl std::fmt::Display for ExposedSides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Standard fire exposure: faces exposed and duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireExposure {
    pub sides: ExposedSides,
    pub minutes: f64,
}

impl Default for FireExposure {
    fn default() -> Self {
        Self {
            sides: ExposedSides::default(),
            minutes: 60.0,
        }
    }
}

impl FireExposure {
    pub fn new(sides: ExposedSides, minutes: f64) -> Self {
        Self { sides, minutes }
    }

    /// Validate exposure parameters
    pub fn validate(&self) -> CalcResult<()> {
        if !self.minutes.is_finite() || self.minutes < 0.0 {
            return Err(CalcError::invalid_input(
                "exposure_minutes",
                self.minutes.to_string(),
                "Exposure time must be zero or positive",
            ));
        }
        Ok(())
    }
}
