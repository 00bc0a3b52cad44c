//! # Residual Cross-Section Properties
//!
//! Area, fire-exposed perimeter and second moments of area of a residual
//! section after charring.
//!
//! ## Notation
//!
//! - `w`, `h` = residual width and height (mm)
//! - `Iy` = strong-axis moment of inertia (bending about the axis parallel to `w`)
//! - `Iz` = weak-axis moment of inertia (bending about the axis parallel to `h`)
//! - `r` = corner radius, equal to the char depth under the reduced
//!   properties method and zero under the reduced cross-section method
//!
//! ## Rounded corners
//!
//! A corner exposed on both adjacent faces chars into a quarter circle of
//! radius `r`. The material lost at one corner is the square `r²` minus
//! the quarter disc:
//!
//! ```text
//!   ┌──────╮        Acr = r²(1 − π/4)
//!   │       ╲       Ir  = 0.00742·r⁴   (own inertia of the cut-off)
//!   │        │      sr  = 0.223·r      (cut-off centroid from the outer edges)
//!   │        │
//!   └────────┘
//! ```
//!
//! ## References
//!
//! - EN 1995-1-2 Annex B (corner rounding with the reduced properties method)
//! - Any structural mechanics textbook for the parallel axis theorem

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::fire::ResidualSection;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Cross-sectional area of a rectangle, A = b × d
///
/// # Example
/// ```rust
/// use timberfire_core::equations::section::rectangular_area;
///
/// assert_eq!(rectangular_area(90.0, 145.0), 13_050.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Moment of inertia of a rectangle about its centroidal axis
/// parallel to `b`, I = bd³/12.
///
/// For the other axis swap the arguments.
///
/// # Example
/// ```rust
/// use timberfire_core::equations::section::rectangular_moment_of_inertia;
///
/// let iy = rectangular_moment_of_inertia(90.0, 145.0);
/// assert!((iy - 22_864_687.5).abs() < 1e-6);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

// =============================================================================
// ROUNDED CORNER TERMS
// =============================================================================

/// Area removed at one rounded corner, Acr = r²(1 − π/4)
#[inline]
pub fn corner_area(r: f64) -> f64 {
    r.powi(2) * (1.0 - PI / 4.0)
}

/// Own moment of inertia of one corner cut-off, Ir = 0.00742·r⁴
#[inline]
pub fn corner_inertia(r: f64) -> f64 {
    0.00742 * r.powi(4)
}

/// Distance of the corner cut-off centroid from the section edges, sr = 0.223·r
#[inline]
pub fn corner_centroid_offset(r: f64) -> f64 {
    0.223 * r
}

/// Inertia of a `b × d` rectangle about an axis moved by `shift` from
/// mid-depth, evaluated as the rectangle split at the shifted centroid.
///
/// ```text
/// I = b(d − 2Δ)³/12 + b(2Δ)³/12 + b·2Δ·(d/2)²
/// ```
#[inline]
fn shifted_rectangle_inertia(b: f64, d: f64, shift: f64) -> f64 {
    b * (d - 2.0 * shift).powi(3) / 12.0 + b * (2.0 * shift).powi(3) / 12.0 + b * 2.0 * shift * (d / 2.0).powi(2)
}

// =============================================================================
// RESIDUAL SECTION PROPERTIES
// =============================================================================

/// Geometric properties of a residual section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    pub area_mm2: f64,
    /// Fire-exposed perimeter of the residual section
    pub perimeter_mm: f64,
    /// Strong-axis inertia
    pub iy_mm4: f64,
    /// Weak-axis inertia
    pub iz_mm4: f64,
    /// Number of rounded corners deducted
    pub rounded_corners: u8,
}

impl SectionProperties {
    /// Properties of a sharp-cornered `w × h` rectangle
    pub fn rectangle(w: f64, h: f64) -> Self {
        Self {
            area_mm2: rectangular_area(w, h),
            perimeter_mm: 2.0 * w + 2.0 * h,
            iy_mm4: rectangular_moment_of_inertia(w, h),
            iz_mm4: rectangular_moment_of_inertia(h, w),
            rounded_corners: 0,
        }
    }

    /// A section whose area or inertia is not strictly positive cannot be
    /// verified.
    pub fn is_admissible(&self) -> bool {
        self.area_mm2 > 0.0 && self.iy_mm4 > 0.0 && self.iz_mm4 > 0.0 && self.perimeter_mm > 0.0
    }

    /// Inertia about which a column buckles: the weak axis of the larger
    /// residual dimension.
    pub fn buckling_inertia(&self, width_mm: f64, height_mm: f64) -> f64 {
        if height_mm > width_mm {
            self.iz_mm4
        } else {
            self.iy_mm4
        }
    }
}

/// Properties of a residual section, with corner rounding when the
/// section carries a corner radius.
///
/// ```rust
/// use timberfire_core::equations::section::residual_properties;
/// use timberfire_core::fire::{CharringModel, DesignMethod, ExposedSides, FireExposure};
/// use timberfire_core::materials::{Candidate, WoodSpecies};
///
/// let model = CharringModel::new(
///     DesignMethod::ReducedProperties,
///     WoodSpecies::Conifer,
///     FireExposure::new(ExposedSides::All, 30.0),
/// );
/// let residual = model.residual(&Candidate::new(200.0, 300.0)).unwrap();
/// let props = residual_properties(&residual);
/// assert_eq!(props.rounded_corners, 4);
/// assert!(props.area_mm2 < residual.width_mm * residual.height_mm);
/// ```
pub fn residual_properties(residual: &ResidualSection) -> SectionProperties {
    let w = residual.width_mm;
    let h = residual.height_mm;
    let r = residual.corner_radius_mm;

    let corners = if r > 0.0 { residual.sides.rounded_corners() } else { 0 };

    let acr = corner_area(r);
    let ir = corner_inertia(r);
    let sr = corner_centroid_offset(r);

    match corners {
        1 => {
            let area = w * h - acr;

            let drh = acr * (h / 2.0 - sr) / area;
            let iy = shifted_rectangle_inertia(w, h, drh) - (ir + acr * (h / 2.0 + drh - sr).powi(2));

            let drw = acr * (w / 2.0 - sr) / area;
            let iz = shifted_rectangle_inertia(h, w, drw) - (ir + acr * (w / 2.0 + drw - sr).powi(2));

            SectionProperties {
                area_mm2: area,
                perimeter_mm: h + (h - r) + w + (w - r) + PI * r / 2.0,
                iy_mm4: iy,
                iz_mm4: iz,
                rounded_corners: 1,
            }
        }
        2 => {
            let area = w * h - 2.0 * acr;
            match residual.sides.char_layers() {
                // Corners along one width edge; centroid moves along h
                (2, 1) => {
                    let drh = 2.0 * acr * (h / 2.0 - sr) / area;
                    let iy = shifted_rectangle_inertia(w, h, drh)
                        - (2.0 * ir + 2.0 * acr * (h / 2.0 + drh - sr).powi(2));
                    let iz = rectangular_moment_of_inertia(h, w) - (2.0 * ir + 2.0 * acr * (w / 2.0 - sr).powi(2));
                    SectionProperties {
                        area_mm2: area,
                        perimeter_mm: w + 2.0 * (h - r) + (w - 2.0 * r) + PI * r,
                        iy_mm4: iy,
                        iz_mm4: iz,
                        rounded_corners: 2,
                    }
                }
                // Corners along one height edge; centroid moves along w
                _ => {
                    let drw = 2.0 * acr * (w / 2.0 - sr) / area;
                    let iz = shifted_rectangle_inertia(h, w, drw)
                        - (2.0 * ir + 2.0 * acr * (w / 2.0 + drw - sr).powi(2));
                    let iy = rectangular_moment_of_inertia(w, h) - (2.0 * ir + 2.0 * acr * (h / 2.0 - sr).powi(2));
                    SectionProperties {
                        area_mm2: area,
                        perimeter_mm: h + 2.0 * (w - r) + (h - 2.0 * r) + PI * r,
                        iy_mm4: iy,
                        iz_mm4: iz,
                        rounded_corners: 2,
                    }
                }
            }
        }
        4 => {
            let cut = r.powi(2) * (4.0 - PI);
            SectionProperties {
                area_mm2: w * h - 4.0 * acr,
                perimeter_mm: 2.0 * (h - 2.0 * r) + 2.0 * (w - 2.0 * r) + 2.0 * PI * r,
                iy_mm4: rectangular_moment_of_inertia(w, h) - cut * (h / 2.0 - sr).powi(2) - 4.0 * ir,
                iz_mm4: rectangular_moment_of_inertia(h, w) - cut * (w / 2.0 - sr).powi(2) - 4.0 * ir,
                rounded_corners: 4,
            }
        }
        _ => SectionProperties::rectangle(w, h),
    }
}
