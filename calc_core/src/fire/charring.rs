//! Charring depth and residual cross sections (EN 1995-1-2 §3.4, §4.2)

use serde::{Deserialize, Serialize};

use super::{DesignMethod, ExposedSides, FireExposure};
use crate::materials::{Candidate, WoodSpecies};

/// Full pyrolysis layer depth k0·d0 once t ≥ 20 min (mm)
const PYROLYSIS_DEPTH_MM: f64 = 7.0;

/// Time after which the pyrolysis layer is fully developed (min)
const PYROLYSIS_FULL_MINUTES: f64 = 20.0;

/// Char depth below which bmin = 8.15·dchar (mm)
const SMALL_CHAR_DEPTH_MM: f64 = 13.0;

/// Charring model for one species, exposure and design method
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharringModel {
    pub method: DesignMethod,
    pub species: WoodSpecies,
    pub exposure: FireExposure,
    /// Notional charring rate βn (mm/min)
    pub charring_rate: f64,
}

impl CharringModel {
    pub fn new(method: DesignMethod, species: WoodSpecies, exposure: FireExposure) -> Self {
        Self {
            method,
            species,
            exposure,
            charring_rate: species.charring_rate(method),
        }
    }

    /// Zero-strength layer added to the char depth (RCS only)
    pub fn pyrolysis_depth_mm(&self) -> f64 {
        match self.method {
            DesignMethod::ReducedCrossSection => {
                let t = self.exposure.minutes;
                if t < PYROLYSIS_FULL_MINUTES {
                    PYROLYSIS_DEPTH_MM / PYROLYSIS_FULL_MINUTES * t
                } else {
                    PYROLYSIS_DEPTH_MM
                }
            }
            DesignMethod::ReducedProperties => 0.0,
        }
    }

    /// Depth removed from each exposed face (mm)
    pub fn char_depth_mm(&self) -> f64 {
        self.charring_rate * self.exposure.minutes + self.pyrolysis_depth_mm()
    }

    /// Minimum original dimension bmin for the reduced properties method.
    /// `None` under RCS, which has no such screen.
    pub fn min_dimension_mm(&self) -> Option<f64> {
        match self.method {
            DesignMethod::ReducedCrossSection => None,
            DesignMethod::ReducedProperties => {
                let r = self.char_depth_mm();
                if r < SMALL_CHAR_DEPTH_MM {
                    Some(8.15 * r)
                } else {
                    Some(self.exposure.sides.min_section_factor() * r + 80.0)
                }
            }
        }
    }

    /// True when the candidate is too small to be verified at all
    pub fn is_screened(&self, candidate: &Candidate) -> bool {
        match self.min_dimension_mm() {
            Some(bmin) => candidate.width_mm <= bmin || candidate.height_mm <= bmin,
            None => false,
        }
    }

    /// Section left after the char (and pyrolysis) layers are stripped.
    ///
    /// Returns `None` when either residual dimension is zero or negative.
    pub fn residual(&self, candidate: &Candidate) -> Option<ResidualSection> {
        let d = self.char_depth_mm();
        let (width_layers, height_layers) = self.exposure.sides.char_layers();
        let width_mm = candidate.width_mm - f64::from(width_layers) * d;
        let height_mm = candidate.height_mm - f64::from(height_layers) * d;
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return None;
        }
        let corner_radius_mm = match self.method {
            DesignMethod::ReducedCrossSection => 0.0,
            DesignMethod::ReducedProperties => self.char_depth_mm(),
        };
        Some(ResidualSection {
            original: *candidate,
            width_mm,
            height_mm,
            char_depth_mm: d,
            corner_radius_mm,
            sides: self.exposure.sides,
        })
    }
}

/// Residual cross section after fire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualSection {
    /// Section before fire
    pub original: Candidate,
    pub width_mm: f64,
    pub height_mm: f64,
    pub char_depth_mm: f64,
    /// Radius of the rounded fire-exposed corners (0 for RCS)
    pub corner_radius_mm: f64,
    pub sides: ExposedSides,
}
