//! Strength and stiffness modification factors for the reduced properties
//! method (EN 1995-1-2 Annex B, kmod,fi).
//!
//! ```text
//! kmod,fi = 1 - k/C · p/Ar
//!
//!   C = 200  bending strength
//!   C = 125  compression strength
//!   C = 330  tension strength and modulus of elasticity
//!   k = t/20 for t < 20 min, else 1
//! ```
//!
//! `p` is the fire-exposed residual perimeter and `Ar` the residual area,
//! taken in metres so that p/Ar is in m⁻¹. Inputs arrive in millimetres.

use serde::{Deserialize, Serialize};

/// kmod,fi factors for one residual section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionFactors {
    pub flexural: f64,
    pub compression: f64,
    pub tension_and_modulus: f64,
}

impl ReductionFactors {
    /// No reduction (all factors 1.0)
    pub const NONE: ReductionFactors = ReductionFactors {
        flexural: 1.0,
        compression: 1.0,
        tension_and_modulus: 1.0,
    };

    pub fn new(perimeter_mm: f64, area_mm2: f64, minutes: f64) -> Self {
        let ramp = if minutes < 20.0 { minutes / 20.0 } else { 1.0 };
        // mm / mm² -> m / m²
        let ratio = perimeter_mm / area_mm2 * 1000.0;
        Self {
            flexural: 1.0 - ramp / 200.0 * ratio,
            compression: 1.0 - ramp / 125.0 * ratio,
            tension_and_modulus: 1.0 - ramp / 330.0 * ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_exposure_factors() {
        // 100 x 100 square: p/A = 0.4 m / 0.01 m² = 40 m⁻¹
        let f = ReductionFactors::new(400.0, 10_000.0, 60.0);
        assert!((f.flexural - 0.8).abs() < 1e-12);
        assert!((f.compression - 0.68).abs() < 1e-12);
        assert!((f.tension_and_modulus - (1.0 - 40.0 / 330.0)).abs() < 1e-12);
    }

    #[test]
    fn test_factors_ramp_before_twenty_minutes() {
        let f = ReductionFactors::new(400.0, 10_000.0, 10.0);
        assert!((f.flexural - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_zero_time_no_reduction() {
        let f = ReductionFactors::new(400.0, 10_000.0, 0.0);
        assert_eq!(f, ReductionFactors::NONE);
    }

    #[test]
    fn test_compression_reduced_most() {
        let f = ReductionFactors::new(380.0, 8_000.0, 45.0);
        assert!(f.compression < f.flexural);
        assert!(f.flexural < f.tension_and_modulus);
    }
}
