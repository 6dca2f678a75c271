//! Units of measure recognized by the engine.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Which physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    /// Base unit is the milliliter.
    Volume,
    /// Base unit is the gram.
    Weight,
}

/// Display convention a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// ml/L and g/kg.
    Metric,
    /// cups/tbsp/tsp and oz/lb.
    Imperial,
}

/// Returned when a string names neither unit system.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown unit system '{0}', expected 'metric' or 'imperial'")]
pub struct UnknownUnitSystem(pub String);

impl FromStr for UnitSystem {
    type Err = UnknownUnitSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(UnknownUnitSystem(s.to_string())),
        }
    }
}

impl Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("metric"),
            Self::Imperial => f.write_str("imperial"),
        }
    }
}

/// The closed vocabulary of units.
///
/// Bare `oz` is the weight ounce. The volume ounce only comes from `fl oz`, so the two
/// never share a conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Milliliter.
    #[serde(rename = "ml")]
    Milliliter,
    /// Liter.
    #[serde(rename = "l")]
    Liter,
    /// US cup.
    #[serde(rename = "cup")]
    Cup,
    /// Tablespoon.
    #[serde(rename = "tbsp")]
    Tablespoon,
    /// Teaspoon.
    #[serde(rename = "tsp")]
    Teaspoon,
    /// Fluid ounce.
    #[serde(rename = "fl oz")]
    FluidOunce,
    /// Gram.
    #[serde(rename = "g")]
    Gram,
    /// Kilogram.
    #[serde(rename = "kg")]
    Kilogram,
    /// Weight ounce.
    #[serde(rename = "oz")]
    Ounce,
    /// Pound.
    #[serde(rename = "lb")]
    Pound,
}

/// Every spelling the parser accepts, lowercase.
const ALIASES: &[(&str, Unit)] = &[
    ("ml", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("milliliters", Unit::Milliliter),
    ("millilitre", Unit::Milliliter),
    ("millilitres", Unit::Milliliter),
    ("l", Unit::Liter),
    ("liter", Unit::Liter),
    ("liters", Unit::Liter),
    ("litre", Unit::Liter),
    ("litres", Unit::Liter),
    ("cup", Unit::Cup),
    ("cups", Unit::Cup),
    ("tbsp", Unit::Tablespoon),
    ("tbs", Unit::Tablespoon),
    ("tablespoon", Unit::Tablespoon),
    ("tablespoons", Unit::Tablespoon),
    ("tsp", Unit::Teaspoon),
    ("teaspoon", Unit::Teaspoon),
    ("teaspoons", Unit::Teaspoon),
    ("fl oz", Unit::FluidOunce),
    ("floz", Unit::FluidOunce),
    ("fluid ounce", Unit::FluidOunce),
    ("fluid ounces", Unit::FluidOunce),
    ("g", Unit::Gram),
    ("gram", Unit::Gram),
    ("grams", Unit::Gram),
    ("kg", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kilograms", Unit::Kilogram),
    ("oz", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("ounces", Unit::Ounce),
    ("lb", Unit::Pound),
    ("lbs", Unit::Pound),
    ("pound", Unit::Pound),
    ("pounds", Unit::Pound),
];

impl Unit {
    /// Accepted spellings with the unit each maps to.
    pub fn aliases() -> &'static [(&'static str, Unit)] {
        ALIASES
    }

    /// Look up a single token, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == token)
            .map(|(_, unit)| *unit)
    }

    /// Volume or weight.
    #[must_use]
    pub fn family(self) -> UnitFamily {
        match self {
            Self::Milliliter
            | Self::Liter
            | Self::Cup
            | Self::Tablespoon
            | Self::Teaspoon
            | Self::FluidOunce => UnitFamily::Volume,
            Self::Gram | Self::Kilogram | Self::Ounce | Self::Pound => UnitFamily::Weight,
        }
    }

    /// Metric or imperial.
    #[must_use]
    pub fn system(self) -> UnitSystem {
        match self {
            Self::Milliliter | Self::Liter | Self::Gram | Self::Kilogram => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        }
    }

    /// Multiplier to the family base: ml for volume, g for weight.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Milliliter | Self::Gram => 1.0,
            Self::Liter | Self::Kilogram => 1000.0,
            Self::Cup => 236.588,
            Self::Tablespoon => 14.787,
            Self::Teaspoon => 4.929,
            Self::FluidOunce => 29.574,
            Self::Ounce => 28.3495,
            Self::Pound => 453.592,
        }
    }

    /// Singular display label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Milliliter => "ml",
            Self::Liter => "L",
            Self::Cup => "cup",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::FluidOunce => "fl oz",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ounce => "oz",
            Self::Pound => "lb",
        }
    }

    /// Display label for a given displayed quantity. Only cups and pounds pluralize.
    #[must_use]
    pub fn label(self, quantity: f64) -> &'static str {
        let singular = (quantity - 1.0).abs() < f64::EPSILON;
        match self {
            Self::Cup if !singular => "cups",
            Self::Pound if !singular => "lbs",
            _ => self.as_str(),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
