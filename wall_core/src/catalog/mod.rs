//! # Config Catalog
//!
//! Read-only reference data consumed by every calculation: stone types,
//! the concrete mix, loss buffer, warning thresholds, reinforcement rule,
//! price defaults, wall templates and rendering limits.
//!
//! The catalog is an ordinary value. Callers load it once (from a JSON file
//! via [`crate::file_io::load_catalog`] or the built-in reference data via
//! [`Catalog::builtin`]) and pass it by reference into each calculation.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let stone = catalog.stone("abmessung_1").unwrap();
//! assert_eq!(stone.stones_per_m2, 11.0);
//!
//! assert!(catalog.stone("does_not_exist").is_err());
//! ```

mod builtin;
pub mod rules;
pub mod stone;

pub use rules::{
    BufferConfig, ConcreteRecommendation, LayoutLimits, MixRatio, PriceDefaults,
    ReinforcementRule, WallDefaults, WarningThresholds,
};
pub use stone::StoneType;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculations::{WallInput, WallSpec};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for catalog files
pub const CATALOG_SCHEMA_VERSION: &str = "0.1.0";

fn schema_version() -> String {
    CATALOG_SCHEMA_VERSION.to_string()
}

/// A named wall preset offered as a quick start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallTemplate {
    pub name: String,
    pub description: String,
    /// Catalog identifier of the stone to use
    pub stone_type: String,
    pub wall_length_m: f64,
    pub wall_start_height_m: f64,
    pub wall_end_height_m: f64,
    pub wall_width_cm: f64,
}

impl WallTemplate {
    /// Simple-wall input prefilled from this template, labelled with its name.
    pub fn to_input(&self) -> WallInput {
        WallInput {
            label: self.name.clone(),
            spec: WallSpec::simple(self.wall_length_m, self.wall_start_height_m, self.wall_end_height_m),
            width_cm: self.wall_width_cm,
            stone_type: self.stone_type.clone(),
            backfilled: false,
            prices: None,
        }
    }
}

/// The complete configuration catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema version of the file this catalog was read from
    #[serde(default = "schema_version")]
    pub version: String,

    /// Stone types keyed by identifier (e.g. "abmessung_1")
    pub stone_types: BTreeMap<String, StoneType>,

    pub concrete_mix: MixRatio,

    pub buffer: BufferConfig,

    pub warnings: WarningThresholds,

    pub reinforcement_steel: ReinforcementRule,

    pub prices: PriceDefaults,

    pub defaults: WallDefaults,

    #[serde(default)]
    pub templates: BTreeMap<String, WallTemplate>,

    pub concrete_recommendation: ConcreteRecommendation,

    #[serde(default)]
    pub layout: LayoutLimits,
}

impl Catalog {
    /// The built-in reference catalog.
    pub fn builtin() -> &'static Catalog {
        &builtin::BUILTIN_CATALOG
    }

    /// Look up a stone type by identifier.
    pub fn stone(&self, id: &str) -> CalcResult<&StoneType> {
        self.stone_types
            .get(id)
            .ok_or_else(|| CalcError::stone_type_not_found(id))
    }

    /// The stone flagged as default, falling back to the first identifier.
    pub fn default_stone(&self) -> Option<(&str, &StoneType)> {
        self.stone_types
            .iter()
            .find(|(_, stone)| stone.default)
            .or_else(|| self.stone_types.iter().next())
            .map(|(id, stone)| (id.as_str(), stone))
    }

    /// Look up a wall template by key.
    pub fn template(&self, key: &str) -> CalcResult<&WallTemplate> {
        self.templates.get(key).ok_or_else(|| CalcError::TemplateNotFound {
            template: key.to_string(),
        })
    }

    /// Check the catalog for internal consistency.
    ///
    /// Applied when a catalog is loaded from or saved to disk so that a bad
    /// admin edit is caught before any calculation runs against it.
    pub fn validate(&self) -> CalcResult<()> {
        if self.stone_types.is_empty() {
            return Err(CalcError::invalid_catalog("stone_types", "at least one stone type is required"));
        }
        for (id, stone) in &self.stone_types {
            stone.validate(id)?;
        }
        let defaults = self.stone_types.values().filter(|s| s.default).count();
        if defaults > 1 {
            return Err(CalcError::invalid_catalog(
                "stone_types",
                format!("{} stone types are flagged as default, at most one allowed", defaults),
            ));
        }

        self.concrete_mix.validate()?;

        if self.buffer.percentage < 0.0 {
            return Err(CalcError::invalid_catalog("buffer.percentage", "cannot be negative"));
        }
        if self.warnings.min_width_cm < 0.0 {
            return Err(CalcError::invalid_catalog("warnings.min_width_cm", "cannot be negative"));
        }

        let rule = &self.reinforcement_steel;
        if rule.rod_length_m <= 0.0 {
            return Err(CalcError::invalid_catalog("reinforcement_steel.rod_length_m", "must be positive"));
        }
        if rule.price_per_rod_eur < 0.0 {
            return Err(CalcError::invalid_catalog("reinforcement_steel.price_per_rod_eur", "cannot be negative"));
        }

        for (key, template) in &self.templates {
            if !self.stone_types.contains_key(&template.stone_type) {
                return Err(CalcError::invalid_catalog(
                    format!("templates.{}.stone_type", key),
                    format!("unknown stone type '{}'", template.stone_type),
                ));
            }
        }

        if self.layout.max_rendered_stones == 0 {
            return Err(CalcError::invalid_catalog("layout.max_rendered_stones", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(Catalog::builtin().validate().is_ok());
    }

    #[test]
    fn test_unknown_stone_names_identifier() {
        let err = Catalog::builtin().stone("invalid_type").unwrap_err();
        assert!(err.to_string().contains("invalid_type"));
    }

    #[test]
    fn test_default_stone() {
        let (id, stone) = Catalog::builtin().default_stone().unwrap();
        assert_eq!(id, "abmessung_1");
        assert!(stone.default);
    }

    #[test]
    fn test_default_stone_falls_back_to_first() {
        let mut catalog = Catalog::builtin().clone();
        for stone in catalog.stone_types.values_mut() {
            stone.default = false;
        }
        let (id, _) = catalog.default_stone().unwrap();
        assert_eq!(id, "abmessung_1");
    }

    #[test]
    fn test_two_defaults_rejected() {
        let mut catalog = Catalog::builtin().clone();
        for stone in catalog.stone_types.values_mut() {
            stone.default = true;
        }
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
    }

    #[test]
    fn test_template_with_unknown_stone_rejected() {
        let mut catalog = Catalog::builtin().clone();
        let key = catalog.templates.keys().next().unwrap().clone();
        catalog.templates.get_mut(&key).unwrap().stone_type = "nope".to_string();
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.field(), Some(format!("templates.{}.stone_type", key).as_str()));
    }

    #[test]
    fn test_missing_template() {
        let err = Catalog::builtin().template("missing").unwrap_err();
        assert_eq!(err.error_code(), "TEMPLATE_NOT_FOUND");
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string_pretty(catalog).unwrap();
        let roundtrip: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(&roundtrip, catalog);
    }
}
