//! # Fire Resistance Checks
//!
//! Each check follows the pattern:
//!
//! - `*Input` - Member length, support condition and load (JSON-serializable)
//! - `*Result` - Demand, capacity and utilization (JSON-serializable)
//! - `check(input, section, material) -> *Result` - Pure verification of one
//!   residual section
//!
//! The residual section itself is prepared once per candidate as a
//! [`FireSection`], so the selector can screen candidates before running
//! any member check.
//!
//! ## Available Checks
//!
//! - [`beam`] - Bending of a single-span member
//! - [`column`] - Flexural buckling of an axially loaded member

pub mod beam;
pub mod column;

use serde::{Deserialize, Serialize};

use crate::equations::beam as formulas;
use crate::equations::section::{residual_properties, SectionProperties};
use crate::errors::{CalcError, CalcResult};
use crate::fire::{CharringModel, DesignMethod, ReductionFactors, ResidualSection};
use crate::materials::Candidate;

pub use beam::{BeamInput, BeamLoad, BeamResult};
pub use column::{ColumnInput, ColumnResult};

// ============================================================================
// Support Conditions
// ============================================================================

/// End conditions of a single-span member, input codes 1-4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum SupportCondition {
    /// Both ends pinned (simply supported)
    #[default]
    PinnedPinned,
    /// One end fixed, one free (cantilever)
    FixedFree,
    /// One end fixed, one pinned (propped cantilever)
    FixedPinned,
    /// Both ends fixed
    FixedFixed,
}

impl SupportCondition {
    pub const ALL: [SupportCondition; 4] = [
        SupportCondition::PinnedPinned,
        SupportCondition::FixedFree,
        SupportCondition::FixedPinned,
        SupportCondition::FixedFixed,
    ];

    pub fn from_code(code: u8) -> CalcResult<Self> {
        match code {
            1 => Ok(SupportCondition::PinnedPinned),
            2 => Ok(SupportCondition::FixedFree),
            3 => Ok(SupportCondition::FixedPinned),
            4 => Ok(SupportCondition::FixedFixed),
            other => Err(CalcError::invalid_input(
                "support",
                other.to_string(),
                "Support condition must be 1-4",
            )),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            SupportCondition::PinnedPinned => 1,
            SupportCondition::FixedFree => 2,
            SupportCondition::FixedPinned => 3,
            SupportCondition::FixedFixed => 4,
        }
    }

    /// Buckling length factor l0, ls = L · l0
    pub fn buckling_length_factor(&self) -> f64 {
        match self {
            SupportCondition::PinnedPinned => 1.0,
            SupportCondition::FixedFree => 2.0,
            SupportCondition::FixedPinned => 0.699,
            SupportCondition::FixedFixed => 0.5,
        }
    }

    /// Coefficient c of M = c·qL² for a full-length line load
    pub fn line_load_coefficient(&self) -> f64 {
        match self {
            SupportCondition::PinnedPinned | SupportCondition::FixedFixed => {
                formulas::simply_supported_line_moment(1.0, 1.0)
            }
            SupportCondition::FixedFree => formulas::cantilever_line_moment(1.0, 1.0),
            SupportCondition::FixedPinned => formulas::propped_cantilever_line_moment(1.0, 1.0),
        }
    }

    /// Coefficient c of M = c·PL for a concentrated load
    pub fn point_load_coefficient(&self) -> f64 {
        match self {
            SupportCondition::PinnedPinned | SupportCondition::FixedFixed => {
                formulas::simply_supported_point_moment(1.0, 1.0)
            }
            SupportCondition::FixedFree => formulas::cantilever_point_moment(1.0, 1.0),
            SupportCondition::FixedPinned => formulas::propped_cantilever_point_moment(1.0, 1.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::PinnedPinned => "Pinned-pinned",
            SupportCondition::FixedFree => "Fixed-free",
            SupportCondition::FixedPinned => "Fixed-pinned",
            SupportCondition::FixedFixed => "Fixed-fixed",
        }
    }
}

impl TryFrom<u8> for SupportCondition {
    type Error = CalcError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SupportCondition::from_code(code)
    }
}

impl From<SupportCondition> for u8 {
    fn from(support: SupportCondition) -> Self {
        support.code()
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Member Loads
// ============================================================================

/// What a member carries: a transverse load (beam) or an axial load (column)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MemberLoad {
    Beam {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        support: Option<SupportCondition>,
        load: BeamLoad,
    },
    Column {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        support: Option<SupportCondition>,
        axial_kn: f64,
    },
}

impl MemberLoad {
    /// Support condition, pinned-pinned when not given
    pub fn support(&self) -> SupportCondition {
        match self {
            MemberLoad::Beam { support, .. } | MemberLoad::Column { support, .. } => support.unwrap_or_default(),
        }
    }

    /// Fill a missing support condition
    pub fn with_default_support(mut self, default: SupportCondition) -> Self {
        match &mut self {
            MemberLoad::Beam { support, .. } | MemberLoad::Column { support, .. } => {
                support.get_or_insert(default);
            }
        }
        self
    }

    pub fn kind(&self) -> &'static str {
        match self {
            MemberLoad::Beam { .. } => "Beam",
            MemberLoad::Column { .. } => "Column",
        }
    }
}

/// Outcome of a beam or column check on one residual section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MemberCheck {
    Beam(BeamResult),
    Column(ColumnResult),
}

impl MemberCheck {
    pub fn passes(&self) -> bool {
        match self {
            MemberCheck::Beam(b) => b.passes(),
            MemberCheck::Column(c) => c.passes(),
        }
    }

    pub fn utilization_percent(&self) -> f64 {
        match self {
            MemberCheck::Beam(b) => b.utilization_percent,
            MemberCheck::Column(c) => c.utilization_percent,
        }
    }

    /// Governing demand: maximum moment (kN·m) or axial load (kN)
    pub fn demand(&self) -> f64 {
        match self {
            MemberCheck::Beam(b) => b.max_moment_knm,
            MemberCheck::Column(c) => c.axial_load_kn,
        }
    }

    /// Capacity in the same unit as [`MemberCheck::demand`]: moment
    /// resistance (kN·m) or buckling resistance (kN)
    pub fn capacity(&self) -> f64 {
        match self {
            MemberCheck::Beam(b) => b.moment_capacity_knm,
            MemberCheck::Column(c) => c.capacity_kn,
        }
    }
}

// ============================================================================
// Fire Section
// ============================================================================

/// A candidate after fire: residual geometry, section properties and the
/// strength/stiffness factors of the design method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireSection {
    pub method: DesignMethod,
    pub residual: ResidualSection,
    pub properties: SectionProperties,
    /// All 1.0 under the reduced cross-section method
    pub factors: ReductionFactors,
}

impl FireSection {
    /// Char a candidate and compute what is left.
    ///
    /// Returns `None` when the residual has a non-positive dimension, area
    /// or inertia.
    pub fn prepare(model: &CharringModel, candidate: &Candidate) -> Option<Self> {
        let residual = model.residual(candidate)?;
        let properties = residual_properties(&residual);
        if !properties.is_admissible() {
            return None;
        }
        let factors = match model.method {
            DesignMethod::ReducedCrossSection => ReductionFactors::NONE,
            DesignMethod::ReducedProperties => {
                ReductionFactors::new(properties.perimeter_mm, properties.area_mm2, model.exposure.minutes)
            }
        };
        Some(Self {
            method: model.method,
            residual,
            properties,
            factors,
        })
    }
}
