//! # Column Buckling in Fire
//!
//! Flexural buckling of an axially loaded member (EN 1995-1-1 §6.3.2, with
//! fire design values per EN 1995-1-2).
//!
//! ## Notation
//!
//! - `ls` = Buckling length = L · l0
//! - `λ` = Slenderness ratio = ls / i, with i = sqrt(I/A)
//! - `λrel` = Relative slenderness
//! - `βc` = Straightness imperfection factor
//! - `k` = Instability factor (kfire)
//! - `kc` = Buckling reduction factor

use std::f64::consts::PI;

/// Below this relative slenderness the column does not buckle (kc = 1)
pub const STOCKY_LIMIT: f64 = 0.5;

/// Radius of gyration, i = sqrt(I/A)
#[inline]
pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

/// Slenderness ratio, λ = ls / sqrt(I/A)
#[inline]
pub fn slenderness(ls: f64, i: f64, a: f64) -> f64 {
    ls / radius_of_gyration(i, a)
}

/// Euler critical stress, σE = π²E/λ²
#[inline]
pub fn euler_stress(e: f64, lambda: f64) -> f64 {
    PI.powi(2) * e / lambda.powi(2)
}

/// Instability factor
///
/// ```text
/// k = 0.5 · (1 + βc·(λrel − 0.5) + λrel²)
/// ```
#[inline]
pub fn instability_factor(beta_c: f64, lambda_rel: f64) -> f64 {
    0.5 * (1.0 + beta_c * (lambda_rel - STOCKY_LIMIT) + lambda_rel.powi(2))
}

/// Buckling reduction factor
///
/// ```text
/// kc = 1                              λrel < 0.5
/// kc = 1 / (k + sqrt(k² − λrel²))     otherwise
/// ```
pub fn buckling_factor(beta_c: f64, lambda_rel: f64) -> f64 {
    if lambda_rel < STOCKY_LIMIT {
        return 1.0;
    }
    let k = instability_factor(beta_c, lambda_rel);
    1.0 / (k + (k.powi(2) - lambda_rel.powi(2)).sqrt())
}
