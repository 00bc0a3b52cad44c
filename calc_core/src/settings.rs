//! # Global Settings
//!
//! Defaults applied to any input field the caller leaves out, plus the
//! catalog ordering switch. Loaded from a TOML file:
//!
//! ```toml
//! sort_catalogs_by_area = false
//!
//! [defaults]
//! strength_class = "C24"
//! support = 1
//! wood_type = "sawn"
//! species = "conifer"
//! exposure_minutes = 60.0
//! exposed_sides = 4
//! method = "rcs"
//! ```
//!
//! Every field is optional; missing ones take the values above.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calculations::SupportCondition;
use crate::errors::{CalcError, CalcResult};
use crate::fire::{DesignMethod, ExposedSides, FireExposure};
use crate::materials::{StrengthClass, WoodSpecies, WoodType};

/// Global settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GlobalSettings {
    /// Search sawn and planed lists smallest-area first, like glulam.
    /// Off by default: those lists are searched in declaration order.
    #[serde(default)]
    pub sort_catalogs_by_area: bool,

    #[serde(default)]
    pub defaults: InputDefaults,
}

/// Default value for each optional input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub strength_class: StrengthClass,

    #[serde(default)]
    pub support: SupportCondition,

    #[serde(default)]
    pub wood_type: WoodType,

    #[serde(default)]
    pub species: WoodSpecies,

    #[serde(default = "default_exposure_minutes")]
    pub exposure_minutes: f64,

    #[serde(default)]
    pub exposed_sides: ExposedSides,

    #[serde(default)]
    pub method: DesignMethod,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            strength_class: StrengthClass::default(),
            support: SupportCondition::default(),
            wood_type: WoodType::default(),
            species: WoodSpecies::default(),
            exposure_minutes: default_exposure_minutes(),
            exposed_sides: ExposedSides::default(),
            method: DesignMethod::default(),
        }
    }
}

fn default_exposure_minutes() -> f64 {
    60.0
}

impl InputDefaults {
    pub fn exposure(&self) -> FireExposure {
        FireExposure::new(self.exposed_sides, self.exposure_minutes)
    }
}

impl GlobalSettings {
    /// Load settings from a TOML file
    pub fn load_from(path: &Path) -> CalcResult<Self> {
        let display = path.display().to_string();
        let contents =
            std::fs::read_to_string(path).map_err(|e| CalcError::config_error(display.clone(), e.to_string()))?;
        let settings = Self::from_toml(&contents).map_err(|e| match e {
            CalcError::ConfigError { reason, .. } => CalcError::config_error(display.clone(), reason),
            other => other,
        })?;
        tracing::info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Ok(Self::default()),
        }
    }

    /// Parse settings from TOML text
    pub fn from_toml(contents: &str) -> CalcResult<Self> {
        let settings: GlobalSettings =
            toml::from_str(contents).map_err(|e| CalcError::config_error("<inline>", e.to_string()))?;
        settings.defaults.exposure().validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::config_error("<inline>", e.to_string()))
    }
}
