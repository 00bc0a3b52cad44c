//! Wood species groups and their notional charring rates (EN 1995-1-2 Table 3.1)

use serde::{Deserialize, Serialize};

use crate::fire::DesignMethod;

/// Wood species group, which selects the charring rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WoodSpecies {
    /// Coniferous solid timber, ρk ≥ 290 kg/m³
    #[default]
    Conifer,
    /// Glued laminated softwood, ρk ≥ 290 kg/m³
    Laminated,
    /// Hardwood, ρk ≥ 450 kg/m³
    Hardwood,
    /// Plywood, thickness ≥ 20 mm and ρk ≥ 450 kg/m³
    Plywood,
}

impl WoodSpecies {
    pub const ALL: [WoodSpecies; 4] = [
        WoodSpecies::Conifer,
        WoodSpecies::Laminated,
        WoodSpecies::Hardwood,
        WoodSpecies::Plywood,
    ];

    /// Map the numeric input code (1 = conifer ... 4 = plywood).
    ///
    /// Unrecognized codes fall back to conifer.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => WoodSpecies::Conifer,
            2 => WoodSpecies::Laminated,
            3 => WoodSpecies::Hardwood,
            4 => WoodSpecies::Plywood,
            other => {
                tracing::warn!("Unknown wood species code {}, using conifer", other);
                WoodSpecies::Conifer
            }
        }
    }

    /// Numeric input code
    pub fn code(&self) -> u8 {
        match self {
            WoodSpecies::Conifer => 1,
            WoodSpecies::Laminated => 2,
            WoodSpecies::Hardwood => 3,
            WoodSpecies::Plywood => 4,
        }
    }

    /// Parse a species name or numeric code. Like [`WoodSpecies::from_code`],
    /// anything unrecognized falls back to conifer.
    pub fn from_str_flexible(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        if let Ok(code) = normalized.parse::<u8>() {
            return Self::from_code(code);
        }
        match normalized.as_str() {
            "conifer" | "softwood" => WoodSpecies::Conifer,
            "laminated" | "glulam" => WoodSpecies::Laminated,
            "hardwood" => WoodSpecies::Hardwood,
            "plywood" => WoodSpecies::Plywood,
            other => {
                tracing::warn!("Unknown wood species '{}', using conifer", other);
                WoodSpecies::Conifer
            }
        }
    }

    /// Notional charring rate βn in mm/min for the given design method.
    ///
    /// The reduced cross-section method uses the notional rates that
    /// include corner rounding and fissures; the reduced properties method
    /// uses the one-dimensional rate β0 and models corners explicitly.
    pub fn charring_rate(&self, method: DesignMethod) -> f64 {
        match method {
            DesignMethod::ReducedCrossSection => match self {
                WoodSpecies::Conifer => 0.80,
                WoodSpecies::Laminated => 0.70,
                WoodSpecies::Hardwood => 0.55,
                WoodSpecies::Plywood => 0.80,
            },
            DesignMethod::ReducedProperties => match self {
                WoodSpecies::Conifer | WoodSpecies::Laminated => 0.65,
                WoodSpecies::Hardwood => 0.50,
                WoodSpecies::Plywood => 1.0,
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WoodSpecies::Conifer => "Conifer",
            WoodSpecies::Laminated => "Laminated softwood",
            WoodSpecies::Hardwood => "Hardwood",
            WoodSpecies::Plywood => "Plywood",
        }
    }
}

impl std::fmt::Display for WoodSpecies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_cross_section_rates() {
        let m = DesignMethod::ReducedCrossSection;
        assert_eq!(WoodSpecies::Conifer.charring_rate(m), 0.80);
        assert_eq!(WoodSpecies::Laminated.charring_rate(m), 0.70);
        assert_eq!(WoodSpecies::Hardwood.charring_rate(m), 0.55);
    }

    #[test]
    fn test_reduced_properties_rates() {
        let m = DesignMethod::ReducedProperties;
        assert_eq!(WoodSpecies::Conifer.charring_rate(m), 0.65);
        assert_eq!(WoodSpecies::Laminated.charring_rate(m), 0.65);
        assert_eq!(WoodSpecies::Hardwood.charring_rate(m), 0.50);
        assert_eq!(WoodSpecies::Plywood.charring_rate(m), 1.0);
    }

    #[test]
    fn test_codes_roundtrip() {
        for species in WoodSpecies::ALL {
            assert_eq!(WoodSpecies::from_code(species.code()), species);
        }
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(WoodSpecies::from_str_flexible("Hardwood"), WoodSpecies::Hardwood);
        assert_eq!(WoodSpecies::from_str_flexible("2"), WoodSpecies::Laminated);
        assert_eq!(WoodSpecies::from_str_flexible("bamboo"), WoodSpecies::Conifer);
    }

    #[test]
    fn test_unknown_code_falls_back_to_conifer() {
        assert_eq!(WoodSpecies::from_code(0), WoodSpecies::Conifer);
        assert_eq!(WoodSpecies::from_code(9), WoodSpecies::Conifer);
    }
}
