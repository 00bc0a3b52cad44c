//! Standard Section Catalogs
//!
//! Candidate cross sections searched by the selector, in millimetres.
//!
//! ## Ordering
//!
//! - **Sawn** and **planed** lists are searched in the order declared here.
//!   The lists run roughly from small to large but are not strictly sorted
//!   by area.
//! - **Glulam** is generated as every lamella width against every lamella
//!   height and then stably sorted by ascending area, so the first adequate
//!   entry is the smallest adequate glulam section.
//!
//! `GlobalSettings::sort_catalogs_by_area` applies the glulam ordering to
//! the sawn and planed lists as well.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Sawn timber sizes (width, height)
const SAWN_MM: [(f64, f64); 22] = [
    (50.0, 50.0),
    (38.0, 73.0),
    (50.0, 75.0),
    (50.0, 100.0),
    (75.0, 75.0),
    (50.0, 125.0),
    (50.0, 150.0),
    (63.0, 125.0),
    (50.0, 175.0),
    (50.0, 200.0),
    (100.0, 100.0),
    (50.0, 225.0),
    (75.0, 150.0),
    (75.0, 175.0),
    (75.0, 200.0),
    (125.0, 125.0),
    (75.0, 225.0),
    (100.0, 200.0),
    (150.0, 150.0),
    (100.0, 225.0),
    (175.0, 175.0),
    (200.0, 200.0),
];

/// Planed timber sizes (width, height)
const PLANED_MM: [(f64, f64); 20] = [
    (45.0, 45.0),
    (45.0, 70.0),
    (45.0, 95.0),
    (70.0, 70.0),
    (45.0, 120.0),
    (45.0, 145.0),
    (45.0, 170.0),
    (45.0, 195.0),
    (95.0, 95.0),
    (45.0, 220.0),
    (70.0, 145.0),
    (70.0, 170.0),
    (70.0, 195.0),
    (120.0, 120.0),
    (70.0, 220.0),
    (95.0, 195.0),
    (145.0, 145.0),
    (95.0, 220.0),
    (170.0, 170.0),
    (195.0, 195.0),
];

/// Glulam lamella widths, in generation order
const GLULAM_WIDTHS_MM: [f64; 6] = [185.0, 160.0, 140.0, 115.0, 90.0, 65.0];

/// Glulam depths (multiples of a 33⅓ mm lamella)
const GLULAM_HEIGHTS_MM: [f64; 43] = [
    100.0, 133.0, 167.0, 200.0, 233.0, 267.0, 300.0, 333.0, 367.0, 400.0, 433.0, 467.0, 500.0,
    533.0, 567.0, 600.0, 633.0, 667.0, 700.0, 733.0, 767.0, 800.0, 833.0, 867.0, 900.0, 933.0,
    967.0, 1000.0, 1033.0, 1067.0, 1100.0, 1133.0, 1167.0, 1200.0, 1233.0, 1267.0, 1300.0,
    1333.0, 1367.0, 1400.0, 1433.0, 1467.0, 1500.0,
];

static GLULAM_CATALOG: Lazy<Vec<Candidate>> = Lazy::new(|| {
    let mut entries: Vec<Candidate> = GLULAM_HEIGHTS_MM
        .iter()
        .flat_map(|&h| GLULAM_WIDTHS_MM.iter().map(move |&w| Candidate::new(w, h)))
        .collect();
    sort_by_area(&mut entries);
    entries
});

/// Stable ascending-area sort; equal areas keep their original order.
fn sort_by_area(entries: &mut [Candidate]) {
    entries.sort_by(|a, b| a.area_mm2().total_cmp(&b.area_mm2()));
}

/// Type of wood product, selecting which standard list is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    #[default]
    Sawn,
    Planed,
    Glulam,
}

impl WoodType {
    pub const ALL: [WoodType; 3] = [WoodType::Sawn, WoodType::Planed, WoodType::Glulam];

    /// Parse from a case-insensitive name
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sawn" => Ok(WoodType::Sawn),
            "planed" => Ok(WoodType::Planed),
            "glulam" | "gl" | "glued laminated" => Ok(WoodType::Glulam),
            _ => Err(CalcError::unknown_wood_type(s)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WoodType::Sawn => "Sawn",
            WoodType::Planed => "Planed",
            WoodType::Glulam => "Glulam",
        }
    }
}

impl std::fmt::Display for WoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for WoodType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WoodType::from_str_flexible(s)
    }
}

/// A cross section before fire exposure (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Candidate {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self { width_mm, height_mm }
    }

    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width_mm, self.height_mm)
    }
}

/// Where the candidates of a catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionSource {
    /// Search a standard list
    Standard { wood_type: WoodType },
    /// Verify one user-given section
    Explicit { width_mm: f64, height_mm: f64 },
}

impl Default for SectionSource {
    fn default() -> Self {
        SectionSource::Standard {
            wood_type: WoodType::default(),
        }
    }
}

impl SectionSource {
    /// Resolve the width/height XOR wood-type choice: a section is explicit
    /// only when both dimensions are given and positive.
    pub fn resolve(width_mm: Option<f64>, height_mm: Option<f64>, wood_type: WoodType) -> Self {
        match (width_mm, height_mm) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => SectionSource::Explicit {
                width_mm: w,
                height_mm: h,
            },
            _ => SectionSource::Standard { wood_type },
        }
    }
}

/// Ordered list of candidate sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCatalog {
    pub source: SectionSource,
    pub entries: Vec<Candidate>,
}

impl SectionCatalog {
    /// Standard catalog for a wood type.
    ///
    /// Glulam is always area-sorted; sawn and planed keep declaration order
    /// unless `sort_all_by_area` is set.
    pub fn standard(wood_type: WoodType, sort_all_by_area: bool) -> Self {
        let mut entries: Vec<Candidate> = match wood_type {
            WoodType::Sawn => SAWN_MM.iter().map(|&(w, h)| Candidate::new(w, h)).collect(),
            WoodType::Planed => PLANED_MM.iter().map(|&(w, h)| Candidate::new(w, h)).collect(),
            WoodType::Glulam => GLULAM_CATALOG.clone(),
        };
        if sort_all_by_area && wood_type != WoodType::Glulam {
            sort_by_area(&mut entries);
        }
        Self {
            source: SectionSource::Standard { wood_type },
            entries,
        }
    }

    /// Singleton catalog for verifying one user-given section
    pub fn explicit(width_mm: f64, height_mm: f64) -> CalcResult<Self> {
        if !(width_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "width_mm",
                width_mm.to_string(),
                "Width must be positive",
            ));
        }
        if !(height_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "height_mm",
                height_mm.to_string(),
                "Height must be positive",
            ));
        }
        Ok(Self {
            source: SectionSource::Explicit { width_mm, height_mm },
            entries: vec![Candidate::new(width_mm, height_mm)],
        })
    }

    /// Build the catalog a section source describes
    pub fn from_source(source: SectionSource, sort_all_by_area: bool) -> CalcResult<Self> {
        match source {
            SectionSource::Standard { wood_type } => Ok(Self::standard(wood_type, sort_all_by_area)),
            SectionSource::Explicit { width_mm, height_mm } => Self::explicit(width_mm, height_mm),
        }
    }

    /// True when this catalog verifies a single user-given section
    pub fn is_explicit(&self) -> bool {
        matches!(self.source, SectionSource::Explicit { .. })
    }

    /// Imperfection factor βc for straightness: 0.2 for sawn and planed
    /// timber, 0.1 for glulam and user-specified sections.
    pub fn imperfection_factor(&self) -> f64 {
        match self.source {
            SectionSource::Standard {
                wood_type: WoodType::Sawn | WoodType::Planed,
            } => 0.2,
            _ => 0.1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
