//! # Column Buckling in Fire
//!
//! Verifies the residual section of an axially loaded member for flexural
//! buckling about its weak axis.
//!
//! ## Procedure
//!
//! 1. Buckling length ls = L · l0 from the support condition
//! 2. Weak-axis inertia: Iz when the residual height exceeds the width, else Iy
//! 3. Slenderness λ = ls / sqrt(I/A)
//! 4. Relative slenderness, which differs per design method:
//!    - reduced cross-section: σE = π²E/λ², λrel = 1/sqrt(σE/fc)
//!    - reduced properties: σE = π²(E·kE)/(fc·kC), λrel = λ/sqrt(σE)
//! 5. kc from λrel and the imperfection factor βc
//! 6. Capacity N = kc · fc · A (fc · kC under reduced properties)
//! 7. Adequate when N > F; utilization = F/N · 100 %
//!
//! ## Assumptions
//!
//! - Centric axial load only
//! - The same buckling length about both axes

use serde::{Deserialize, Serialize};

use super::{FireSection, SupportCondition};
use crate::equations::column::{buckling_factor, euler_stress, instability_factor, slenderness};
use crate::errors::{CalcError, CalcResult};
use crate::fire::DesignMethod;
use crate::materials::MaterialProperties;
use crate::units::{KiloNewtons, Megapascals, Meters, Millimeters, Newtons};

/// Input parameters for a column check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 3.0,
///   "support": 1,
///   "axial_kn": 50.0,
///   "imperfection_factor": 0.1
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// Member length in metres
    pub length_m: f64,

    #[serde(default)]
    pub support: SupportCondition,

    /// Axial compression load (kN)
    pub axial_kn: f64,

    /// Straightness imperfection factor βc
    pub imperfection_factor: f64,
}

impl ColumnInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_m.is_finite() || self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if !self.axial_kn.is_finite() || self.axial_kn <= 0.0 {
            return Err(CalcError::invalid_input(
                "axial_kn",
                self.axial_kn.to_string(),
                "Axial load must be positive",
            ));
        }
        Ok(())
    }

    /// Buckling length ls = L · l0 (mm)
    pub fn buckling_length(&self) -> Millimeters {
        Millimeters::from(Meters(self.length_m * self.support.buckling_length_factor()))
    }
}

/// Results of a column check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnResult {
    /// Applied axial load (kN)
    pub axial_load_kn: f64,

    /// Buckling resistance of the residual section (kN)
    pub capacity_kn: f64,

    /// F / N · 100
    pub utilization_percent: f64,

    pub buckling_length_mm: f64,

    /// λ
    pub slenderness: f64,

    /// σE, in the form used by the design method
    pub euler_stress: f64,

    /// λrel
    pub relative_slenderness: f64,

    /// kfire
    pub instability_factor: f64,

    /// kc
    pub buckling_factor: f64,
}

impl ColumnResult {
    pub fn passes(&self) -> bool {
        self.capacity_kn > self.axial_load_kn
    }
}

/// Check one residual section for buckling.
pub fn check(input: &ColumnInput, section: &FireSection, material: &MaterialProperties) -> ColumnResult {
    let props = &section.properties;
    let area = props.area_mm2;
    let inertia = props.buckling_inertia(section.residual.width_mm, section.residual.height_mm);

    let ls = input.buckling_length();
    let lambda = slenderness(ls.0, inertia, area);

    let (sigma_e, lambda_rel, fc_design) = match section.method {
        DesignMethod::ReducedCrossSection => {
            let sigma_e = euler_stress(material.e_mpa, lambda);
            (sigma_e, 1.0 / (sigma_e / material.fc_mpa).sqrt(), material.fc_mpa)
        }
        DesignMethod::ReducedProperties => {
            let fc = Megapascals(material.fc_mpa) * section.factors.compression;
            let e = Megapascals(material.e_mpa) * section.factors.tension_and_modulus;
            let sigma_e = euler_stress(e.0, 1.0) / fc.0;
            (sigma_e, lambda / sigma_e.sqrt(), fc.0)
        }
    };

    let kc = buckling_factor(input.imperfection_factor, lambda_rel);
    let capacity: KiloNewtons = Newtons(kc * fc_design * area).into();

    ColumnResult {
        axial_load_kn: input.axial_kn,
        capacity_kn: capacity.0,
        utilization_percent: input.axial_kn / capacity.0 * 100.0,
        buckling_length_mm: ls.0,
        slenderness: lambda,
        euler_stress: sigma_e,
        relative_slenderness: lambda_rel,
        instability_factor: instability_factor(input.imperfection_factor, lambda_rel),
        buckling_factor: kc,
    }
}

/// Validate the input, then check one residual section for buckling.
pub fn calculate(input: &ColumnInput, section: &FireSection, material: &MaterialProperties) -> CalcResult<ColumnResult> {
    input.validate()?;
    Ok(check(input, section, material))
}
