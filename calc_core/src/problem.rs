//! # Sizing Problems
//!
//! A `SizingProblem` is a batch of members that share one material and fire
//! configuration. Problems are plain JSON files.
//!
//! ## Structure
//!
//! ```text
//! SizingProblem
//! ├── meta: ProblemMetadata (schema version, engineer, job)
//! ├── basis: BasisInput (strength class, species, exposure, method, section)
//! └── members: Vec<MemberInput> (label, length or centre line, load)
//! ```
//!
//! Any basis field left out takes its value from [`GlobalSettings`].
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::problem::SizingProblem;
//! use timberfire_core::settings::GlobalSettings;
//!
//! let problem = SizingProblem::from_json(r#"{
//!     "basis": { "exposure_minutes": 60, "exposed_sides": 4 },
//!     "members": [
//!         { "label": "B-1", "length_m": 4.0,
//!           "load": { "type": "Beam", "load": { "type": "line", "kn_per_m": 2.0 } } }
//!     ]
//! }"#).unwrap();
//!
//! let report = problem.solve(&GlobalSettings::default()).unwrap();
//! assert_eq!(report.sized, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{CalcError, CalcResult};
use crate::fire::{DesignMethod, ExposedSides, FireExposure};
use crate::geometry::{NullSink, SectionSink};
use crate::materials::{SectionSource, StrengthClass, WoodSpecies, WoodType};
use crate::selector::{select_batch, DesignBasis, MemberInput, MemberOutcome};
use crate::settings::{GlobalSettings, InputDefaults};

/// Current schema version for problem files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Batch sizing problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SizingProblem {
    #[serde(default)]
    pub meta: ProblemMetadata,

    #[serde(default)]
    pub basis: BasisInput,

    pub members: Vec<MemberInput>,
}

impl SizingProblem {
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            meta: ProblemMetadata {
                engineer: engineer.into(),
                job_id: job_id.into(),
                ..ProblemMetadata::default()
            },
            ..Self::default()
        }
    }

    pub fn add_member(&mut self, member: MemberInput) {
        self.members.push(member);
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::invalid_input("problem", "<json>", e.to_string()))
    }

    pub fn load_from(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalcError::invalid_input("problem", path.display().to_string(), e.to_string()))?;
        let problem = Self::from_json(&contents)?;
        tracing::info!("Loaded {} member(s) from {:?}", problem.member_count(), path);
        Ok(problem)
    }

    /// Size every member, discarding accepted geometry
    pub fn solve(&self, settings: &GlobalSettings) -> CalcResult<BatchReport> {
        self.solve_with_sink(settings, &mut NullSink)
    }

    /// Size every member, handing each accepted section to `sink`.
    ///
    /// Fails only when the shared basis is invalid; member failures are
    /// reported inside the [`BatchReport`].
    pub fn solve_with_sink(&self, settings: &GlobalSettings, sink: &mut dyn SectionSink) -> CalcResult<BatchReport> {
        let basis = self.basis.resolve(&settings.defaults)?;
        let catalog = basis.catalog(settings.sort_catalogs_by_area)?;

        let members: Vec<MemberInput> = self
            .members
            .iter()
            .map(|m| MemberInput {
                load: m.load.with_default_support(settings.defaults.support),
                ..m.clone()
            })
            .collect();

        Ok(BatchReport::new(basis, select_batch(&members, &catalog, &basis, sink)))
    }
}

/// Problem file header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,
    pub engineer: String,
    pub job_id: String,
    pub description: String,
}

impl Default for ProblemMetadata {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            engineer: String::new(),
            job_id: String::new(),
            description: String::new(),
        }
    }
}

/// Design basis as written by a user: every field optional, strings
/// parsed leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasisInput {
    pub strength_class: Option<String>,
    pub species: Option<String>,
    pub wood_type: Option<String>,
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub exposure_minutes: Option<f64>,
    /// Exposed sides code; fractions round up, values above 8 mean all sides
    pub exposed_sides: Option<f64>,
    pub method: Option<String>,
}

impl BasisInput {
    /// Fill the gaps from `defaults` and parse every field.
    pub fn resolve(&self, defaults: &InputDefaults) -> CalcResult<DesignBasis> {
        let strength_class = match &self.strength_class {
            Some(name) => StrengthClass::from_str_flexible(name)?,
            None => defaults.strength_class,
        };
        let species = match &self.species {
            Some(name) => WoodSpecies::from_str_flexible(name),
            None => defaults.species,
        };
        let wood_type = match &self.wood_type {
            Some(name) => WoodType::from_str_flexible(name)?,
            None => defaults.wood_type,
        };
        let sides = match self.exposed_sides {
            Some(code) => ExposedSides::from_code(code)?,
            None => defaults.exposed_sides,
        };
        let method = match &self.method {
            Some(name) => DesignMethod::from_str_flexible(name)?,
            None => defaults.method,
        };

        let basis = DesignBasis {
            strength_class,
            species,
            exposure: FireExposure::new(sides, self.exposure_minutes.unwrap_or(defaults.exposure_minutes)),
            method,
            section: SectionSource::resolve(self.width_mm, self.height_mm, wood_type),
        };
        basis.validate()?;
        Ok(basis)
    }
}

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub basis: DesignBasis,
    pub sized: usize,
    pub failed: usize,
    pub results: Vec<MemberOutcome>,
}

impl BatchReport {
    pub fn new(basis: DesignBasis, results: Vec<MemberOutcome>) -> Self {
        let sized = results.iter().filter(|r| r.is_sized()).count();
        Self {
            basis,
            sized,
            failed: results.len() - sized,
            results,
        }
    }

    pub fn all_sized(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BeamLoad, MemberLoad, SupportCondition};
    use crate::geometry::MemberCurve;

    const PROBLEM: &str = r#"{
        "meta": { "engineer": "A. Builder", "job_id": "26-014" },
        "basis": { "strength_class": "gl24h", "wood_type": "glulam", "exposed_sides": 3.5 },
        "members": [
            { "label": "B-1", "length_m": 5.0,
              "load": { "type": "Beam", "load": { "type": "line", "kn_per_m": 4.0 } } },
            { "label": "C-1", "start": [0, 0, 0], "end": [0, 0, 3.2],
              "load": { "type": "Column", "axial_kn": 120.0 } },
            { "label": "B-2", "length_m": 40.0,
              "load": { "type": "Beam", "support": 2, "load": { "type": "point", "kn": 400.0 } } }
        ]
    }"#;

    #[test]
    fn test_problem_creation() {
        let problem = SizingProblem::new("A. Builder", "26-014");
        assert_eq!(problem.meta.engineer, "A. Builder");
        assert_eq!(problem.meta.version, SCHEMA_VERSION);
        assert_eq!(problem.member_count(), 0);
    }

    #[test]
    fn test_parse_problem() {
        let problem = SizingProblem::from_json(PROBLEM).unwrap();
        assert_eq!(problem.member_count(), 3);
        assert_eq!(problem.meta.job_id, "26-014");
        assert!((problem.members[1].axis.length_m() - 3.2).abs() < 1e-12);
    }

    #[test]
    fn test_basis_resolution() {
        let problem = SizingProblem::from_json(PROBLEM).unwrap();
        let basis = problem.basis.resolve(&InputDefaults::default()).unwrap();
        assert_eq!(basis.strength_class, StrengthClass::GL24h);
        assert_eq!(basis.exposure.sides, ExposedSides::WidthAndTwoHeights);
        assert_eq!(basis.exposure.minutes, 60.0);
        assert_eq!(basis.section, SectionSource::Standard { wood_type: WoodType::Glulam });
    }

    #[test]
    fn test_basis_errors() {
        let defaults = InputDefaults::default();
        let bad_class = BasisInput {
            strength_class: Some("C99".into()),
            ..BasisInput::default()
        };
        assert_eq!(bad_class.resolve(&defaults).unwrap_err().error_code(), "UNKNOWN_STRENGTH_CLASS");

        let bad_type = BasisInput {
            wood_type: Some("bamboo".into()),
            ..BasisInput::default()
        };
        assert_eq!(bad_type.resolve(&defaults).unwrap_err().error_code(), "UNKNOWN_WOOD_TYPE");

        let bad_sides = BasisInput {
            exposed_sides: Some(0.0),
            ..BasisInput::default()
        };
        assert_eq!(bad_sides.resolve(&defaults).unwrap_err().error_code(), "INVALID_EXPOSURE_CONFIG");

        let clamped = BasisInput {
            exposed_sides: Some(12.0),
            ..BasisInput::default()
        };
        assert_eq!(clamped.resolve(&defaults).unwrap().exposure.sides, ExposedSides::All);
    }

    #[test]
    fn test_explicit_section_wins_over_wood_type() {
        let basis = BasisInput {
            wood_type: Some("glulam".into()),
            width_mm: Some(140.0),
            height_mm: Some(360.0),
            ..BasisInput::default()
        }
        .resolve(&InputDefaults::default())
        .unwrap();
        assert_eq!(
            basis.section,
            SectionSource::Explicit {
                width_mm: 140.0,
                height_mm: 360.0
            }
        );
    }

    #[test]
    fn test_solve_reports_each_member() {
        let problem = SizingProblem::from_json(PROBLEM).unwrap();
        let report = problem.solve(&GlobalSettings::default()).unwrap();
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.sized, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.results[2].label(), "B-2");
        assert!(!report.all_sized());
    }

    #[test]
    fn test_settings_support_applies_to_unset_members() {
        let mut problem = SizingProblem::new("", "");
        problem.add_member(MemberInput::span(
            "B-1",
            4.0,
            MemberLoad::Beam {
                support: None,
                load: BeamLoad::Line { kn_per_m: 2.0 },
            },
        ));
        let mut settings = GlobalSettings::default();
        let pinned = problem.solve(&settings).unwrap();
        settings.defaults.support = SupportCondition::FixedFree;
        let cantilever = problem.solve(&settings).unwrap();

        let moment = |report: &BatchReport| match &report.results[0] {
            MemberOutcome::Sized(r) => match r.check {
                crate::calculations::MemberCheck::Beam(b) => b.max_moment_knm,
                _ => panic!("expected a beam"),
            },
            MemberOutcome::Failed { error, .. } => panic!("{}", error),
        };
        assert!((moment(&pinned) - 4.0).abs() < 1e-12);
        assert!((moment(&cantilever) - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_basis_fails_whole_problem() {
        let mut problem = SizingProblem::from_json(PROBLEM).unwrap();
        problem.basis.exposure_minutes = Some(-1.0);
        assert!(problem.solve(&GlobalSettings::default()).is_err());
    }
}
