//! # Unit Types
//!
//! Type-safe wrappers for the SI units the fire design works in. They are
//! plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## Units used by the engine
//!
//! - Cross-section dimensions: millimetres (mm)
//! - Spans and member lengths: metres (m)
//! - Forces: kilonewtons (kN), newtons (N)
//! - Moments: kilonewton-metres (kN·m), newton-millimetres (N·mm)
//! - Stresses: megapascals (MPa = N/mm²)
//!
//! Stresses come out in MPa when moments are in N·mm and section
//! properties in mm, so the engine converts at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::units::{Meters, Millimeters, KiloNewtonMeters, NewtonMillimeters};
//!
//! let span = Meters(4.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 4000.0);
//!
//! let moment: NewtonMillimeters = KiloNewtonMeters(4.0).into();
//! assert_eq!(moment.0, 4.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(Megapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(3.5).into();
        assert_eq!(mm.0, 3500.0);
        let back: Meters = mm.into();
        assert_eq!(back.0, 3.5);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let kn: KiloNewtons = Newtons(42_500.0).into();
        assert_eq!(kn.0, 42.5);
    }

    #[test]
    fn test_moment_conversion() {
        let nmm: NewtonMillimeters = KiloNewtonMeters(2.5).into();
        assert_eq!(nmm.0, 2.5e6);
        let knm: KiloNewtonMeters = nmm.into();
        assert!((knm.0 - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = KiloNewtons(10.0);
        let b = KiloNewtons(4.0);
        assert_eq!((a + b).value(), 14.0);
        assert_eq!((a - b).value(), 6.0);
        assert_eq!((a * 2.0).value(), 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_stress_scaling() {
        let reduced = Megapascals(24.0) * 0.8;
        assert!((reduced.value() - 19.2).abs() < 1e-12);
        assert!(reduced < Megapascals(24.0));
    }

    #[test]
    fn test_serialization() {
        let stress = Megapascals(24.0);
        let json = serde_json::to_string(&stress).unwrap();
        assert_eq!(json, "24.0");
        let roundtrip: Megapascals = serde_json::from_str(&json).unwrap();
        assert_eq!(stress, roundtrip);
    }
}
