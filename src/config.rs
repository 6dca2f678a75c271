//! Configuration struct for report generation.
use crate::model::UnitSystem;
use std::path::PathBuf;

/// Struct for template configuration.
///
/// Configuration holds the scale applied to every ingredient, an optional unit system to
/// display ingredients in, and optional paths to a [rules file][`crate::rules::Rules`] and a
/// household inventory.
///
/// Construct via [`ConfigBuilder`] or [`default()`][`Self::default`].
///
/// # Examples
///
/// Use [`Config::builder()`][`Config::builder`] to get a [`ConfigBuilder`] and then chain calls to set the desired configuration.
/// Call [`build()`][`ConfigBuilder::build`] to get a `Config`.
///
/// ```
/// use grocery_engine::config::Config;
/// use grocery_engine::model::UnitSystem;
///
/// let config = Config::builder()
///     .scale(2.0)
///     .unit_system(UnitSystem::Imperial)
///     .inventory_path("inventory.yaml")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) scale: f64,
    pub(crate) unit_system: Option<UnitSystem>,
    pub(crate) rules_path: Option<PathBuf>,
    pub(crate) inventory_path: Option<PathBuf>,
}

impl Default for Config {
    /// Return a default [`Config`] with a scale of 1, native units, built-in rules and no inventory.
    fn default() -> Self {
        Self {
            scale: 1.0,
            unit_system: None,
            rules_path: None,
            inventory_path: None,
        }
    }
}

impl Config {
    /// Return a [`ConfigBuilder`] for building a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for building a [`Config`].
#[derive(Debug)]
pub struct ConfigBuilder {
    scale: f64,
    unit_system: Option<UnitSystem>,
    rules_path: Option<PathBuf>,
    inventory_path: Option<PathBuf>,
}

impl Default for ConfigBuilder {
    /// Return a default [`ConfigBuilder`] with the same values as [`Config::default`].
    fn default() -> Self {
        Self {
            scale: 1.0,
            unit_system: None,
            rules_path: None,
            inventory_path: None,
        }
    }
}

impl ConfigBuilder {
    /// Set the scale property. Every ingredient quantity is multiplied by it, and it is itself passed to the template.
    pub fn scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Display ingredients in this unit system instead of the units they were written in.
    pub fn unit_system(&mut self, unit_system: UnitSystem) -> &mut Self {
        self.unit_system = Some(unit_system);
        self
    }

    /// Set a path to a YAML rules file replacing the built-in synonym and category tables.
    pub fn rules_path<P: Into<PathBuf>>(&mut self, rules_path: P) -> &mut Self {
        self.rules_path = Some(rules_path.into());
        self
    }

    /// Set a path to a YAML list of ingredient names already at home.
    pub fn inventory_path<P: Into<PathBuf>>(&mut self, inventory_path: P) -> &mut Self {
        self.inventory_path = Some(inventory_path.into());
        self
    }

    /// Return a new [`Config`] based on the builder's properties.
    pub fn build(&mut self) -> Config {
        Config {
            scale: self.scale,
            unit_system: self.unit_system,
            rules_path: self.rules_path.clone(),
            inventory_path: self.inventory_path.clone(),
        }
    }
}
