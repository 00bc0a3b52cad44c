//! # Beam Bending in Fire
//!
//! Verifies the residual section of a single-span member for the peak
//! bending moment after standard fire exposure.
//!
//! ## Procedure
//!
//! 1. Maximum moment from the support condition and load
//!    (see [`crate::equations::beam`])
//! 2. Bending stress on the residual section, σ = M/Iy · hr/2
//! 3. Design strength: fm (reduced cross-section) or fm · kmod,fi,flex
//!    (reduced properties)
//! 4. Adequate when 0 < σ < f; utilization = σ/f · 100 %
//!
//! The moment capacity MRd = f · Iy/(hr/2) is reported with the largest load
//! of the same kind the section could carry.
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::calculations::{beam, BeamInput, BeamLoad, FireSection, SupportCondition};
//! use timberfire_core::fire::{CharringModel, DesignMethod, FireExposure};
//! use timberfire_core::materials::{Candidate, StrengthClass, WoodSpecies};
//!
//! let model = CharringModel::new(
//!     DesignMethod::ReducedCrossSection,
//!     WoodSpecies::Conifer,
//!     FireExposure::default(),
//! );
//! let section = FireSection::prepare(&model, &Candidate::new(200.0, 200.0)).unwrap();
//! let input = BeamInput {
//!     span_m: 4.0,
//!     support: SupportCondition::PinnedPinned,
//!     load: BeamLoad::Line { kn_per_m: 2.0 },
//! };
//! let result = beam::check(&input, &section, &StrengthClass::C24.properties());
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::{FireSection, SupportCondition};
use crate::equations::beam::{bending_stress, moment_capacity};
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialProperties;
use crate::units::{KiloNewtonMeters, Megapascals, NewtonMillimeters};

/// Transverse load on a beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BeamLoad {
    /// Full-length line load (kN/m)
    Line { kn_per_m: f64 },
    /// Concentrated load at mid-span, or at the free end of a cantilever (kN)
    Point { kn: f64 },
}

impl BeamLoad {
    pub fn magnitude(&self) -> f64 {
        match self {
            BeamLoad::Line { kn_per_m } => *kn_per_m,
            BeamLoad::Point { kn } => *kn,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            BeamLoad::Line { .. } => "kN/m",
            BeamLoad::Point { .. } => "kN",
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        let value = self.magnitude();
        if !value.is_finite() || value <= 0.0 {
            return Err(CalcError::invalid_input(
                "load",
                value.to_string(),
                "Load must be positive",
            ));
        }
        Ok(())
    }
}

/// Input parameters for a beam check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 4.0,
///   "support": 1,
///   "load": { "type": "line", "kn_per_m": 2.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Span length in metres
    pub span_m: f64,

    #[serde(default)]
    pub support: SupportCondition,

    pub load: BeamLoad,
}

impl BeamInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.span_m.is_finite() || self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        self.load.validate()
    }

    /// Moment coefficient for the load kind and support condition
    pub fn moment_coefficient(&self) -> f64 {
        match self.load {
            BeamLoad::Line { .. } => self.support.line_load_coefficient(),
            BeamLoad::Point { .. } => self.support.point_load_coefficient(),
        }
    }

    /// Peak bending moment (kN·m)
    pub fn max_moment(&self) -> KiloNewtonMeters {
        let c = self.moment_coefficient();
        let m = match self.load {
            BeamLoad::Line { kn_per_m } => c * kn_per_m * self.span_m.powi(2),
            BeamLoad::Point { kn } => c * kn * self.span_m,
        };
        KiloNewtonMeters(m)
    }

    /// Largest load of this kind that produces `moment` (kN/m or kN)
    pub fn load_for_moment(&self, moment: KiloNewtonMeters) -> f64 {
        let c = self.moment_coefficient();
        match self.load {
            BeamLoad::Line { .. } => moment.0 / (c * self.span_m.powi(2)),
            BeamLoad::Point { .. } => moment.0 / (c * self.span_m),
        }
    }
}

/// Results of a beam check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_moment_knm": 4.0,
///   "bending_stress_mpa": 12.68,
///   "design_strength_mpa": 24.0,
///   "utilization_percent": 52.85,
///   "moment_capacity_knm": 7.57,
///   "allowable_load": 3.78
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Peak bending moment (kN·m)
    pub max_moment_knm: f64,

    /// Extreme fibre stress on the residual section (MPa)
    pub bending_stress_mpa: f64,

    /// Bending strength after any fire reduction (MPa)
    pub design_strength_mpa: f64,

    /// σ / f · 100
    pub utilization_percent: f64,

    /// Moment the residual section resists (kN·m)
    pub moment_capacity_knm: f64,

    /// Largest load of the input kind the section carries (kN/m or kN)
    pub allowable_load: f64,
}

impl BeamResult {
    /// Strictly positive stress below the design strength
    pub fn passes(&self) -> bool {
        self.bending_stress_mpa > 0.0 && self.bending_stress_mpa < self.design_strength_mpa
    }
}

/// Check one residual section in bending.
pub fn check(input: &BeamInput, section: &FireSection, material: &MaterialProperties) -> BeamResult {
    let depth = section.residual.height_mm;
    let iy = section.properties.iy_mm4;

    let max_moment = input.max_moment();
    let moment_nmm: NewtonMillimeters = max_moment.into();
    let sigma = bending_stress(moment_nmm.0, iy, depth);

    let design_strength = Megapascals(material.fm_mpa) * section.factors.flexural;

    let capacity: KiloNewtonMeters = NewtonMillimeters(moment_capacity(design_strength.0, iy, depth)).into();

    BeamResult {
        max_moment_knm: max_moment.0,
        bending_stress_mpa: sigma,
        design_strength_mpa: design_strength.0,
        utilization_percent: sigma / design_strength.0 * 100.0,
        moment_capacity_knm: capacity.0,
        allowable_load: input.load_for_moment(capacity),
    }
}

/// Validate the input, then check one residual section in bending.
pub fn calculate(input: &BeamInput, section: &FireSection, material: &MaterialProperties) -> CalcResult<BeamResult> {
    input.validate()?;
    Ok(check(input, section, material))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fire::{CharringModel, DesignMethod, ExposedSides, FireExposure};
    use crate::materials::{Candidate, StrengthClass, WoodSpecies};

    fn rcs_section(w: f64, h: f64) -> FireSection {
        let model = CharringModel::new(
            DesignMethod::ReducedCrossSection,
            WoodSpecies::Conifer,
            FireExposure::new(ExposedSides::WidthAndTwoHeights, 60.0),
        );
        FireSection::prepare(&model, &Candidate::new(w, h)).unwrap()
    }

    fn line_beam(span_m: f64, q: f64) -> BeamInput {
        BeamInput {
            span_m,
            support: SupportCondition::PinnedPinned,
            load: BeamLoad::Line { kn_per_m: q },
        }
    }

    #[test]
    fn test_reference_beam_200x200() {
        let result = check(&line_beam(4.0, 2.0), &rcs_section(200.0, 200.0), &StrengthClass::C24.properties());
        assert!((result.max_moment_knm - 4.0).abs() < 1e-12);
        assert!((result.bending_stress_mpa - 12.6833).abs() < 1e-3);
        assert!((result.utilization_percent - 52.847).abs() < 1e-2);
        assert!(result.passes());
    }

    #[test]
    fn test_reference_beam_175x175_fails() {
        let result = check(&line_beam(4.0, 2.0), &rcs_section(175.0, 175.0), &StrengthClass::C24.properties());
        assert!((result.bending_stress_mpa - 25.64).abs() < 0.01);
        assert!(!result.passes());
    }

    #[test]
    fn test_allowable_load_reaches_full_utilization() {
        let input = line_beam(4.0, 2.0);
        let result = check(&input, &rcs_section(200.0, 200.0), &StrengthClass::C24.properties());
        let at_capacity = check(
            &line_beam(4.0, result.allowable_load),
            &rcs_section(200.0, 200.0),
            &StrengthClass::C24.properties(),
        );
        assert!((at_capacity.utilization_percent - 100.0).abs() < 1e-9);
        // Utilization scales linearly with load
        assert!((result.allowable_load - 2.0 * 100.0 / result.utilization_percent).abs() < 1e-9);
    }

    #[test]
    fn test_point_load_moment() {
        let input = BeamInput {
            span_m: 3.0,
            support: SupportCondition::FixedFree,
            load: BeamLoad::Point { kn: 5.0 },
        };
        assert!((input.max_moment().0 - 15.0).abs() < 1e-12);
        let result = check(&input, &rcs_section(200.0, 400.0), &StrengthClass::C24.properties());
        assert!((result.allowable_load * 3.0 - result.moment_capacity_knm).abs() < 1e-9);
    }

    #[test]
    fn test_sr_uses_reduced_strength() {
        let model = CharringModel::new(
            DesignMethod::ReducedProperties,
            WoodSpecies::Conifer,
            FireExposure::new(ExposedSides::WidthAndTwoHeights, 60.0),
        );
        let section = FireSection::prepare(&model, &Candidate::new(200.0, 300.0)).unwrap();
        let result = check(&line_beam(4.0, 2.0), &section, &StrengthClass::C24.properties());
        assert!(result.design_strength_mpa < 24.0);
        assert!((result.design_strength_mpa - 24.0 * section.factors.flexural).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        let material = StrengthClass::C24.properties();
        let section = rcs_section(200.0, 200.0);
        assert!(calculate(&line_beam(0.0, 2.0), &section, &material).is_err());
        assert!(calculate(&line_beam(4.0, -1.0), &section, &material).is_err());
        assert!(calculate(&line_beam(4.0, 0.0), &section, &material).is_err());
        assert!(calculate(&line_beam(4.0, 2.0), &section, &material).is_ok());
    }
}
