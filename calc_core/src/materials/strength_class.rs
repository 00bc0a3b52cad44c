//! Strength Classes (EN 338 solid timber, EN 14080 glulam)
//!
//! Characteristic values used by the fire checks: bending strength fm,k,
//! compression strength parallel to grain fc,0,k and the 5 % modulus
//! E0,05 that governs buckling.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Strength classes supported by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthClass {
    C14,
    C18,
    #[default]
    C24,
    C30,
    #[serde(rename = "GL24h")]
    GL24h,
    #[serde(rename = "GL28h")]
    GL28h,
    #[serde(rename = "GL32h")]
    GL32h,
}

impl StrengthClass {
    /// All strength classes for UI selection
    pub const ALL: [StrengthClass; 7] = [
        StrengthClass::C14,
        StrengthClass::C18,
        StrengthClass::C24,
        StrengthClass::C30,
        StrengthClass::GL24h,
        StrengthClass::GL28h,
        StrengthClass::GL32h,
    ];

    /// Parse from common string representations ("C24", "c24", "24C", "GL28h", "GL28")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "C14" | "14C" => Ok(StrengthClass::C14),
            "C18" | "18C" => Ok(StrengthClass::C18),
            "C24" | "24C" => Ok(StrengthClass::C24),
            "C30" | "30C" => Ok(StrengthClass::C30),
            "GL24H" | "GL24" => Ok(StrengthClass::GL24h),
            "GL28H" | "GL28" => Ok(StrengthClass::GL28h),
            "GL32H" | "GL32" => Ok(StrengthClass::GL32h),
            _ => Err(CalcError::unknown_strength_class(s)),
        }
    }

    /// Characteristic properties for this class
    pub fn properties(&self) -> MaterialProperties {
        let (fm_mpa, fc_mpa, e_mpa) = match self {
            StrengthClass::C14 => (14.0, 16.0, 4700.0),
            StrengthClass::C18 => (18.0, 18.0, 6000.0),
            StrengthClass::C24 => (24.0, 21.0, 7400.0),
            StrengthClass::C30 => (30.0, 23.0, 8000.0),
            StrengthClass::GL24h => (24.0, 24.0, 9400.0),
            StrengthClass::GL28h => (28.0, 26.5, 10200.0),
            StrengthClass::GL32h => (32.0, 29.0, 11100.0),
        };
        MaterialProperties {
            class: *self,
            fm_mpa,
            fc_mpa,
            e_mpa,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StrengthClass::C14 => "C14",
            StrengthClass::C18 => "C18",
            StrengthClass::C24 => "C24",
            StrengthClass::C30 => "C30",
            StrengthClass::GL24h => "GL24h",
            StrengthClass::GL28h => "GL28h",
            StrengthClass::GL32h => "GL32h",
        }
    }

    /// Glued laminated classes
    pub fn is_glulam(&self) -> bool {
        matches!(
            self,
            StrengthClass::GL24h | StrengthClass::GL28h | StrengthClass::GL32h
        )
    }
}

impl std::fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for StrengthClass {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrengthClass::from_str_flexible(s)
    }
}

/// Characteristic material values (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Strength class these values belong to
    pub class: StrengthClass,
    /// Bending strength fm,k
    pub fm_mpa: f64,
    /// Compression strength parallel to grain fc,0,k
    pub fc_mpa: f64,
    /// Modulus of elasticity E0,05
    pub e_mpa: f64,
}

/// Look up a strength class by name.
///
/// Fails with [`CalcError::UnknownStrengthClass`] for anything outside the
/// catalog.
///
/// ```rust
/// use timberfire_core::materials::lookup;
///
/// let props = lookup("c24").unwrap();
/// assert_eq!(props.fm_mpa, 24.0);
/// assert!(lookup("C99").is_err());
/// ```
pub fn lookup(name: &str) -> CalcResult<MaterialProperties> {
    StrengthClass::from_str_flexible(name).map(|class| class.properties())
}
