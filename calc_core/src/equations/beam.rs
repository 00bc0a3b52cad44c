//! # Maximum Bending Moment by Support Condition
//!
//! Peak moment of a single-span member under a full-length line load or a
//! single concentrated load.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `q` = Line load intensity (force per unit length)
//! - `P` = Concentrated load, at mid-span or at the free end of a cantilever
//! - `M` = Maximum bending moment
//!
//! ## Coefficients
//!
//! | Support               | Line load  | Point load |
//! |-----------------------|------------|------------|
//! | Pinned - pinned       | qL²/8      | PL/4       |
//! | Fixed - free          | qL²/2      | PL         |
//! | Fixed - pinned        | 9qL²/128   | 3PL/16     |
//! | Fixed - fixed         | qL²/8      | PL/4       |
//!
//! The fixed-fixed row reuses the simply-supported coefficients, which
//! bounds the span moment from above.
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// LINE LOAD
// =============================================================================

/// Maximum moment of a simply-supported span under line load, M = qL²/8
///
/// ```text
///    q q q q q q q q
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
///    ────────────────
///    △              △
/// ```
#[inline]
pub fn simply_supported_line_moment(q: f64, l: f64) -> f64 {
    q * l.powi(2) / 8.0
}

/// Maximum (root) moment of a cantilever under line load, M = qL²/2
///
/// ```text
///    q q q q q q q q
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓
///  ▐────────────────
///  ▐
/// ```
#[inline]
pub fn cantilever_line_moment(q: f64, l: f64) -> f64 {
    q * l.powi(2) / 2.0
}

/// Maximum span moment of a propped cantilever under line load, M = 9qL²/128
#[inline]
pub fn propped_cantilever_line_moment(q: f64, l: f64) -> f64 {
    9.0 * q * l.powi(2) / 128.0
}

// =============================================================================
// CONCENTRATED LOAD
// =============================================================================

/// Simply-supported span, load at mid-span, M = PL/4
#[inline]
pub fn simply_supported_point_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Cantilever, load at the free end, M = PL
#[inline]
pub fn cantilever_point_moment(p: f64, l: f64) -> f64 {
    p * l
}

/// Propped cantilever, load at mid-span, M = 3PL/16 (at the fixed end)
#[inline]
pub fn propped_cantilever_point_moment(p: f64, l: f64) -> f64 {
    3.0 * p * l / 16.0
}

// =============================================================================
// BENDING STRESS
// =============================================================================

/// Extreme fibre stress of a symmetric section, σ = M·(d/2)/I
///
/// # Arguments
/// * `m` - Bending moment (N·mm)
/// * `i` - Moment of inertia about the bending axis (mm⁴)
/// * `d` - Section depth perpendicular to the bending axis (mm)
///
/// # Returns
/// Stress in MPa
#[inline]
pub fn bending_stress(m: f64, i: f64, d: f64) -> f64 {
    m / i * d / 2.0
}

/// Moment at which the extreme fibre reaches `f`, M = f·I/(d/2)
#[inline]
pub fn moment_capacity(f: f64, i: f64, d: f64) -> f64 {
    f * i / (d / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_moments() {
        assert!((simply_supported_line_moment(2.0, 4.0) - 4.0).abs() < 1e-12);
        assert!((cantilever_line_moment(2.0, 4.0) - 16.0).abs() < 1e-12);
        assert!((propped_cantilever_line_moment(2.0, 4.0) - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_point_moments() {
        assert!((simply_supported_point_moment(10.0, 4.0) - 10.0).abs() < 1e-12);
        assert!((cantilever_point_moment(10.0, 4.0) - 40.0).abs() < 1e-12);
        assert!((propped_cantilever_point_moment(10.0, 4.0) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_stress_and_capacity_are_inverse() {
        let i = 22_864_687.5;
        let sigma = bending_stress(4.0e6, i, 145.0);
        assert!((sigma - 12.683_3).abs() < 1e-3);
        assert!((moment_capacity(sigma, i, 145.0) - 4.0e6).abs() < 1e-6);
    }
}
