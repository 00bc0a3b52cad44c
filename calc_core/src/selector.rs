//! # Section Selection
//!
//! Walks a catalog in order and returns the first candidate whose residual
//! section carries the member's load after fire exposure. With an explicit
//! section the catalog has one entry and selection is plain verification.
//!
//! ```text
//! candidate ─► min-size screen (reduced properties only)
//!           ─► char + residual section      (skip if burnt through)
//!           ─► section properties           (skip if degenerate)
//!           ─► beam / column check          (accept first that passes)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use timberfire_core::calculations::{BeamLoad, MemberLoad};
//! use timberfire_core::materials::{SectionCatalog, WoodType};
//! use timberfire_core::selector::{select, DesignBasis, MemberInput};
//!
//! let basis = DesignBasis::default();
//! let catalog = SectionCatalog::standard(WoodType::Sawn, false);
//! let member = MemberInput::span(
//!     "B-1",
//!     4.0,
//!     MemberLoad::Beam { support: None, load: BeamLoad::Line { kn_per_m: 2.0 } },
//! );
//!
//! let result = select(&member, &catalog, &basis).unwrap();
//! assert_eq!((result.width_mm, result.height_mm), (200.0, 200.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{beam, column, BeamInput, ColumnInput, FireSection, MemberCheck, MemberLoad};
use crate::equations::SectionProperties;
use crate::errors::{CalcError, CalcResult};
use crate::fire::{CharringModel, DesignMethod, FireExposure, ReductionFactors, ResidualSection};
use crate::geometry::{MemberAxis, MemberCurve, NullSink, SectionSink};
use crate::materials::{Candidate, MaterialProperties, SectionCatalog, SectionSource, StrengthClass, WoodSpecies};

// ============================================================================
// Inputs
// ============================================================================

/// Material and fire configuration shared by every member of a problem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DesignBasis {
    pub strength_class: StrengthClass,
    pub species: WoodSpecies,
    pub exposure: FireExposure,
    pub method: DesignMethod,
    pub section: SectionSource,
}

impl DesignBasis {
    pub fn validate(&self) -> CalcResult<()> {
        self.exposure.validate()
    }

    pub fn charring_model(&self) -> CharringModel {
        CharringModel::new(self.method, self.species, self.exposure)
    }

    pub fn material(&self) -> MaterialProperties {
        self.strength_class.properties()
    }

    /// Catalog described by the section source
    pub fn catalog(&self, sort_all_by_area: bool) -> CalcResult<SectionCatalog> {
        SectionCatalog::from_source(self.section, sort_all_by_area)
    }
}

/// One member to size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInput {
    pub label: String,

    /// `length_m`, or a `start`/`end` centre line
    #[serde(flatten)]
    pub axis: MemberAxis,

    pub load: MemberLoad,
}

impl MemberInput {
    /// Member given by its length alone
    pub fn span(label: impl Into<String>, length_m: f64, load: MemberLoad) -> Self {
        Self {
            label: label.into(),
            axis: MemberAxis::Span { length_m },
            load,
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Accepted section for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub label: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub method: DesignMethod,
    pub residual: ResidualSection,
    pub properties: SectionProperties,
    pub factors: ReductionFactors,
    pub check: MemberCheck,
    pub utilization_percent: f64,
    /// Catalog entries looked at, the accepted one included
    pub candidates_evaluated: usize,
}

impl VerificationResult {
    /// Moment resistance (kN·m) for beams, buckling resistance (kN) for columns
    pub fn capacity(&self) -> f64 {
        self.check.capacity()
    }

    /// Maximum moment (kN·m) for beams, axial load (kN) for columns
    pub fn demand(&self) -> f64 {
        self.check.demand()
    }
}

/// Result for one member of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum MemberOutcome {
    Sized(VerificationResult),
    Failed { label: String, error: CalcError },
}

impl MemberOutcome {
    pub fn label(&self) -> &str {
        match self {
            MemberOutcome::Sized(r) => &r.label,
            MemberOutcome::Failed { label, .. } => label,
        }
    }

    pub fn is_sized(&self) -> bool {
        matches!(self, MemberOutcome::Sized(_))
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Catalog walker for one design basis.
///
/// Holds nothing that changes between calls, so one selector can size any
/// number of members.
#[derive(Debug, Clone)]
pub struct SectionSelector<'a> {
    catalog: &'a SectionCatalog,
    model: CharringModel,
    material: MaterialProperties,
}

impl<'a> SectionSelector<'a> {
    pub fn new(catalog: &'a SectionCatalog, basis: &DesignBasis) -> CalcResult<Self> {
        basis.validate()?;
        Ok(Self {
            catalog,
            model: basis.charring_model(),
            material: basis.material(),
        })
    }

    /// Size one member whose length comes from `curve`.
    pub fn select(&self, label: &str, curve: &dyn MemberCurve, load: &MemberLoad) -> CalcResult<VerificationResult> {
        let length_m = curve.length_m();
        let prepared = self.prepare(length_m, load)?;

        let mut evaluated = 0;
        let mut valid = 0;
        let mut last_utilization = None;

        for candidate in self.catalog.iter() {
            evaluated += 1;

            if self.model.is_screened(candidate) {
                tracing::debug!("{}: {} below minimum section, skipped", label, candidate);
                continue;
            }

            let Some(section) = FireSection::prepare(&self.model, candidate) else {
                tracing::debug!("{}: {} has no residual section, skipped", label, candidate);
                continue;
            };
            valid += 1;

            let check = prepared.run(&section, &self.material);
            if check.passes() {
                tracing::info!(
                    "{}: selected {} ({:.1}% utilization)",
                    label,
                    candidate,
                    check.utilization_percent()
                );
                return Ok(self.accept(label, candidate, section, check, evaluated));
            }

            tracing::debug!(
                "{}: {} fails ({:.1}% utilization)",
                label,
                candidate,
                check.utilization_percent()
            );
            last_utilization = Some(check.utilization_percent());
        }

        if valid == 0 {
            return Err(CalcError::degenerate_geometry(label, self.catalog.len()));
        }

        let reason = match (self.catalog.is_explicit(), self.catalog.entries.first(), last_utilization) {
            (true, Some(candidate), Some(utilization)) => {
                format!("section {} fails at {:.1}% utilization", candidate, utilization)
            }
            _ => format!(
                "none of {} valid candidate(s) carries the {} load",
                valid,
                load.kind().to_lowercase()
            ),
        };
        Err(CalcError::no_adequate_section(label, reason))
    }

    /// Validate the load once and fix everything but the section.
    fn prepare(&self, length_m: f64, load: &MemberLoad) -> CalcResult<PreparedCheck> {
        let support = load.support();
        let prepared = match *load {
            MemberLoad::Beam { load, .. } => PreparedCheck::Beam(BeamInput {
                span_m: length_m,
                support,
                load,
            }),
            MemberLoad::Column { axial_kn, .. } => PreparedCheck::Column(ColumnInput {
                length_m,
                support,
                axial_kn,
                imperfection_factor: self.catalog.imperfection_factor(),
            }),
        };
        match &prepared {
            PreparedCheck::Beam(input) => input.validate()?,
            PreparedCheck::Column(input) => input.validate()?,
        }
        Ok(prepared)
    }

    fn accept(
        &self,
        label: &str,
        candidate: &Candidate,
        section: FireSection,
        check: MemberCheck,
        evaluated: usize,
    ) -> VerificationResult {
        VerificationResult {
            label: label.to_string(),
            width_mm: candidate.width_mm,
            height_mm: candidate.height_mm,
            method: section.method,
            residual: section.residual,
            properties: section.properties,
            factors: section.factors,
            utilization_percent: check.utilization_percent(),
            check,
            candidates_evaluated: evaluated,
        }
    }
}

/// Member check with everything fixed but the section
#[derive(Debug, Clone, Copy)]
enum PreparedCheck {
    Beam(BeamInput),
    Column(ColumnInput),
}

impl PreparedCheck {
    fn run(&self, section: &FireSection, material: &MaterialProperties) -> MemberCheck {
        match self {
            PreparedCheck::Beam(input) => MemberCheck::Beam(beam::check(input, section, material)),
            PreparedCheck::Column(input) => MemberCheck::Column(column::check(input, section, material)),
        }
    }
}

/// Size one member against a catalog.
pub fn select(member: &MemberInput, catalog: &SectionCatalog, basis: &DesignBasis) -> CalcResult<VerificationResult> {
    SectionSelector::new(catalog, basis)?.select(&member.label, &member.axis, &member.load)
}

/// Size every member, in order. A member that cannot be sized is reported
/// and the rest carry on. Each accepted section is handed to `sink`.
pub fn select_batch(
    members: &[MemberInput],
    catalog: &SectionCatalog,
    basis: &DesignBasis,
    sink: &mut dyn SectionSink,
) -> Vec<MemberOutcome> {
    let selector = match SectionSelector::new(catalog, basis) {
        Ok(selector) => selector,
        Err(error) => {
            return members
                .iter()
                .map(|m| MemberOutcome::Failed {
                    label: m.label.clone(),
                    error: error.clone(),
                })
                .collect();
        }
    };

    let outcomes: Vec<MemberOutcome> = members
        .iter()
        .map(|member| match selector.select(&member.label, &member.axis, &member.load) {
            Ok(result) => {
                sink.accept(result.width_mm, result.height_mm, &member.axis);
                MemberOutcome::Sized(result)
            }
            Err(error) => {
                tracing::warn!("{}: {}", member.label, error);
                MemberOutcome::Failed {
                    label: member.label.clone(),
                    error,
                }
            }
        })
        .collect();

    let sized = outcomes.iter().filter(|o| o.is_sized()).count();
    tracing::info!("Sized {} of {} member(s)", sized, outcomes.len());
    outcomes
}

/// [`select_batch`] without a geometry consumer
pub fn select_all(members: &[MemberInput], catalog: &SectionCatalog, basis: &DesignBasis) -> Vec<MemberOutcome> {
    select_batch(members, catalog, basis, &mut NullSink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{BeamLoad, SupportCondition};
    use crate::fire::ExposedSides;
    use crate::geometry::StraightMember;
    use crate::materials::WoodType;

    fn line_beam(label: &str, span: f64, q: f64) -> MemberInput {
        MemberInput::span(
            label,
            span,
            MemberLoad::Beam {
                support: None,
                load: BeamLoad::Line { kn_per_m: q },
            },
        )
    }

    fn pinned_column(label: &str, length: f64, f: f64) -> MemberInput {
        MemberInput::span(
            label,
            length,
            MemberLoad::Column {
                support: Some(SupportCondition::PinnedPinned),
                axial_kn: f,
            },
        )
    }

    fn column_basis() -> DesignBasis {
        DesignBasis {
            exposure: FireExposure::new(ExposedSides::All, 60.0),
            section: SectionSource::Explicit {
                width_mm: 200.0,
                height_mm: 200.0,
            },
            ..DesignBasis::default()
        }
    }

    #[test]
    fn test_reference_beam_selection() {
        crate::logging::init_test();
        let basis = DesignBasis::default();
        let catalog = SectionCatalog::standard(WoodType::Sawn, false);
        let result = select(&line_beam("B-1", 4.0, 2.0), &catalog, &basis).unwrap();
        assert_eq!((result.width_mm, result.height_mm), (200.0, 200.0));
        assert!((result.utilization_percent - 52.847).abs() < 0.01);
        assert!((result.residual.width_mm - 90.0).abs() < 1e-9);
        assert!((result.residual.height_mm - 145.0).abs() < 1e-9);
        assert!((result.demand() - 4.0).abs() < 1e-12);
        // MRd = 24 · (90 · 145³ / 12) / 72.5
        assert!((result.capacity() - 7.569).abs() < 1e-9);
        assert!((result.demand() / result.capacity() * 100.0 - result.utilization_percent).abs() < 1e-9);
        match result.check {
            MemberCheck::Beam(b) => {
                assert!((b.bending_stress_mpa - 12.6833).abs() < 1e-3);
                assert_eq!(b.design_strength_mpa, 24.0);
            }
            MemberCheck::Column(_) => panic!("expected a beam check"),
        }
    }

    #[test]
    fn test_first_adequate_in_catalog_order() {
        // Every earlier candidate with a residual section fails
        let basis = DesignBasis::default();
        let catalog = SectionCatalog::standard(WoodType::Sawn, false);
        let model = basis.charring_model();
        let material = basis.material();
        let result = select(&line_beam("B-1", 4.0, 2.0), &catalog, &basis).unwrap();
        let input = BeamInput {
            span_m: 4.0,
            support: SupportCondition::PinnedPinned,
            load: BeamLoad::Line { kn_per_m: 2.0 },
        };
        for candidate in catalog.iter().take(result.candidates_evaluated - 1) {
            if let Some(section) = FireSection::prepare(&model, candidate) {
                assert!(!beam::check(&input, &section, &material).passes(), "{}", candidate);
            }
        }
    }

    #[test]
    fn test_selection_is_repeatable() {
        let basis = DesignBasis::default();
        let catalog = SectionCatalog::standard(WoodType::Glulam, false);
        let member = line_beam("B-2", 6.0, 5.0);
        let first = select(&member, &catalog, &basis).unwrap();
        let second = select(&member, &catalog, &basis).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explicit_column_fails_at_three_metres() {
        let basis = column_basis();
        let catalog = basis.catalog(false).unwrap();
        let err = select(&pinned_column("C-1", 3.0, 50.0), &catalog, &basis).unwrap_err();
        assert!(matches!(err, CalcError::NoAdequateSection { .. }));
        assert!(err.to_string().contains("200x200"));
    }

    #[test]
    fn test_explicit_column_passes_at_two_metres() {
        let basis = column_basis();
        let catalog = basis.catalog(false).unwrap();
        let result = select(&pinned_column("C-1", 2.0, 50.0), &catalog, &basis).unwrap();
        assert!((result.capacity() - 90.656).abs() < 0.01);
        assert!((result.utilization_percent - 55.154).abs() < 0.01);
        assert_eq!(result.candidates_evaluated, 1);
    }

    #[test]
    fn test_zero_exposure_matches_ambient_check() {
        let basis = DesignBasis {
            exposure: FireExposure::new(ExposedSides::All, 0.0),
            ..column_basis()
        };
        let catalog = basis.catalog(false).unwrap();
        let result = select(&pinned_column("C-1", 3.0, 50.0), &catalog, &basis).unwrap();
        assert_eq!(result.residual.width_mm, 200.0);
        assert_eq!(result.residual.height_mm, 200.0);

        let ambient = FireSection {
            method: DesignMethod::ReducedCrossSection,
            residual: result.residual,
            properties: SectionProperties::rectangle(200.0, 200.0),
            factors: ReductionFactors::NONE,
        };
        let input = ColumnInput {
            length_m: 3.0,
            support: SupportCondition::PinnedPinned,
            axial_kn: 50.0,
            imperfection_factor: 0.1,
        };
        let expected = column::check(&input, &ambient, &StrengthClass::C24.properties());
        assert_eq!(result.check, MemberCheck::Column(expected));
    }

    #[test]
    fn test_burnt_through_catalog_is_degenerate() {
        let basis = DesignBasis {
            exposure: FireExposure::new(ExposedSides::All, 60.0),
            section: SectionSource::Explicit {
                width_mm: 100.0,
                height_mm: 300.0,
            },
            ..DesignBasis::default()
        };
        let catalog = basis.catalog(false).unwrap();
        let err = select(&line_beam("B-3", 3.0, 1.0), &catalog, &basis).unwrap_err();
        assert_eq!(err, CalcError::degenerate_geometry("B-3", 1));
    }

    #[test]
    fn test_sr_screen_skips_small_sections() {
        let basis = DesignBasis {
            method: DesignMethod::ReducedProperties,
            exposure: FireExposure::new(ExposedSides::All, 60.0),
            ..DesignBasis::default()
        };
        let catalog = SectionCatalog::standard(WoodType::Glulam, false);
        let result = select(&line_beam("B-4", 4.0, 2.0), &catalog, &basis).unwrap();
        let bmin = basis.charring_model().min_dimension_mm().unwrap();
        assert!(result.width_mm > bmin && result.height_mm > bmin);
        assert!(result.properties.rounded_corners == 4);
    }

    #[test]
    fn test_screened_out_catalog_is_degenerate() {
        // bmin = 2 · 39 + 80 = 158; the residual itself would be 72 x 322
        let basis = DesignBasis {
            method: DesignMethod::ReducedProperties,
            exposure: FireExposure::new(ExposedSides::All, 60.0),
            section: SectionSource::Explicit {
                width_mm: 150.0,
                height_mm: 400.0,
            },
            ..DesignBasis::default()
        };
        let catalog = basis.catalog(false).unwrap();
        let err = select(&line_beam("B-6", 3.0, 1.0), &catalog, &basis).unwrap_err();
        assert_eq!(err, CalcError::degenerate_geometry("B-6", 1));
        assert!(err.to_string().contains("usable residual section"));
    }

    #[test]
    fn test_invalid_span_reported() {
        let basis = DesignBasis::default();
        let catalog = SectionCatalog::standard(WoodType::Sawn, false);
        let err = select(&line_beam("B-5", 0.0, 2.0), &catalog, &basis).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_batch_continues_past_failures() {
        let basis = DesignBasis::default();
        let catalog = SectionCatalog::standard(WoodType::Sawn, false);
        let members = vec![
            line_beam("ok-1", 4.0, 2.0),
            line_beam("too-heavy", 12.0, 500.0),
            MemberInput {
                label: "ok-2".to_string(),
                axis: MemberAxis::Line(StraightMember::new([0.0, 0.0, 3.0], [3.0, 0.0, 3.0])),
                load: MemberLoad::Beam {
                    support: None,
                    load: BeamLoad::Line { kn_per_m: 2.0 },
                },
            },
        ];

        let mut accepted = Vec::new();
        let mut sink = |w: f64, h: f64, curve: &dyn MemberCurve| accepted.push((w, h, curve.length_m()));
        let outcomes = select_batch(&members, &catalog, &basis, &mut sink);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].is_sized());
        assert!(!outcomes[1].is_sized());
        assert!(outcomes[2].is_sized());
        assert_eq!(outcomes[1].label(), "too-heavy");
        assert_eq!(accepted.len(), 2);
        assert!((accepted[1].2 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_batch_with_bad_basis_fails_every_member() {
        let basis = DesignBasis {
            exposure: FireExposure::new(ExposedSides::All, -10.0),
            ..DesignBasis::default()
        };
        let catalog = SectionCatalog::standard(WoodType::Sawn, false);
        let outcomes = select_all(&[line_beam("a", 4.0, 2.0), line_beam("b", 4.0, 2.0)], &catalog, &basis);
        assert!(outcomes.iter().all(|o| !o.is_sized()));
    }

    #[test]
    fn test_member_input_json() {
        let member: MemberInput = serde_json::from_str(
            r#"{"label": "C-7", "length_m": 2.5, "load": {"type": "Column", "support": 4, "axial_kn": 80.0}}"#,
        )
        .unwrap();
        assert_eq!(member.axis.length_m(), 2.5);
        assert_eq!(member.load.support(), SupportCondition::FixedFixed);
    }
}
