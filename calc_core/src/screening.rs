//! # Section Screening
//!
//! Pre-selection of sections by required moment of inertia, and the
//! element-wise merge used to combine two screens.
//!
//! ```rust
//! use timberfire_core::screening::{combine, inertia_pattern, CombineMode};
//! use timberfire_core::materials::Candidate;
//!
//! let sections = [Candidate::new(100.0, 200.0), Candidate::new(200.0, 100.0)];
//! let (strong, weak) = inertia_pattern(50.0e6, &sections);
//! assert_eq!(strong, vec![true, false]);
//! assert_eq!(weak, vec![false, true]);
//!
//! let either = combine(&strong, &weak, CombineMode::Union).unwrap();
//! assert_eq!(either, vec![true, true]);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section::rectangular_moment_of_inertia;
use crate::errors::{CalcError, CalcResult};
use crate::materials::Candidate;

/// How two boolean screens are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    /// Either screen passes
    #[default]
    Union,
    /// Both screens pass
    Intersection,
}

/// Element-wise merge of two equally long screens.
pub fn combine(a: &[bool], b: &[bool], mode: CombineMode) -> CalcResult<Vec<bool>> {
    if a.len() != b.len() {
        return Err(CalcError::invalid_input(
            "patterns",
            format!("{} vs {}", a.len(), b.len()),
            "Patterns must have the same length",
        ));
    }
    let merged = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| match mode {
            CombineMode::Union => x || y,
            CombineMode::Intersection => x && y,
        })
        .collect();
    Ok(merged)
}

/// For each section, whether its strong-axis and its weak-axis inertia
/// exceed `required_mm4`.
pub fn inertia_pattern(required_mm4: f64, sections: &[Candidate]) -> (Vec<bool>, Vec<bool>) {
    sections
        .iter()
        .map(|s| {
            let iy = rectangular_moment_of_inertia(s.width_mm, s.height_mm);
            let iz = rectangular_moment_of_inertia(s.height_mm, s.width_mm);
            (iy > required_mm4, iz > required_mm4)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_modes() {
        let a = [true, true, false, false];
        let b = [true, false, true, false];
        assert_eq!(combine(&a, &b, CombineMode::Union).unwrap(), vec![true, true, true, false]);
        assert_eq!(
            combine(&a, &b, CombineMode::Intersection).unwrap(),
            vec![true, false, false, false]
        );
    }

    #[test]
    fn test_combine_empty() {
        assert!(combine(&[], &[], CombineMode::Union).unwrap().is_empty());
    }

    #[test]
    fn test_combine_length_mismatch() {
        let err = combine(&[true], &[true, false], CombineMode::Union).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_inertia_pattern_strict() {
        let square = Candidate::new(120.0, 120.0);
        let exact = rectangular_moment_of_inertia(120.0, 120.0);
        let (strong, weak) = inertia_pattern(exact, &[square]);
        assert_eq!((strong[0], weak[0]), (false, false));
        let (strong, weak) = inertia_pattern(exact - 1.0, &[square]);
        assert_eq!((strong[0], weak[0]), (true, true));
    }
}
