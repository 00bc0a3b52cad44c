//! # Structural Equations
//!
//! The mechanics formulas used by the fire checks, kept in one place so
//! each can be verified against its reference on its own:
//!
//! - [`beam`] - Maximum moment by support condition, bending stress
//! - [`column`] - Slenderness, Euler stress, buckling reduction factor
//! - [`section`] - Residual section properties with corner rounding
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction) for beams, positive
//!   in compression for columns
//! - **Moment**: Magnitudes only; every check uses the peak moment
//!
//! ## References
//!
//! - EN 1995-1-1: Design of timber structures, general rules
//! - EN 1995-1-2: Design of timber structures, structural fire design
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod column;
pub mod section;

pub use section::{
    rectangular_area,
    rectangular_moment_of_inertia,
    residual_properties,
    SectionProperties,
};
