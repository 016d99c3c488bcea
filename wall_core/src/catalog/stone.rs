//! # Hollow Block Stone Types
//!
//! Physical data for one hollow-core formwork block. Dimensions are stored
//! in centimetres (as printed in manufacturer data sheets); the metre
//! accessors are what the geometry code consumes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Centimeters, CubicMeters, Liters, Meters};

/// Reference data for one stone type.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Schalstein 36.5",
///   "length_cm": 36.0,
///   "width_cm": 36.5,
///   "height_cm": 24.8,
///   "weight_kg": 22.0,
///   "stones_per_m2": 11.0,
///   "fill_volume_per_m2_liters": 230.0,
///   "fill_volume_per_stone_liters": 20.91,
///   "default": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoneType {
    /// Display name
    pub name: String,

    /// Length along the wall (cm)
    pub length_cm: f64,

    /// Width, i.e. wall thickness (cm)
    pub width_cm: f64,

    /// Course height (cm)
    pub height_cm: f64,

    /// Weight of one block (kg)
    pub weight_kg: f64,

    /// Blocks needed per m² of wall face
    pub stones_per_m2: f64,

    /// Concrete fill per m² of wall face (L)
    pub fill_volume_per_m2_liters: f64,

    /// Concrete fill per block (L)
    pub fill_volume_per_stone_liters: f64,

    /// Preselected stone in front ends
    #[serde(default)]
    pub default: bool,
}

impl StoneType {
    pub fn length_m(&self) -> f64 {
        Meters::from(Centimeters(self.length_cm)).value()
    }

    pub fn width_m(&self) -> f64 {
        Meters::from(Centimeters(self.width_cm)).value()
    }

    pub fn height_m(&self) -> f64 {
        Meters::from(Centimeters(self.height_cm)).value()
    }

    /// Fill volume of a single block in m³
    pub fn fill_per_stone_m3(&self) -> f64 {
        CubicMeters::from(Liters(self.fill_volume_per_stone_liters)).value()
    }

    /// Short label such as `36 × 36.5 × 24.8 cm, 22 kg`
    pub fn dimensions_label(&self) -> String {
        format!(
            "{} × {} × {} cm, {} kg",
            self.length_cm, self.width_cm, self.height_cm, self.weight_kg
        )
    }

    /// Check that every physical quantity is usable by the calculations.
    pub fn validate(&self, id: &str) -> CalcResult<()> {
        let checks = [
            ("length_cm", self.length_cm),
            ("width_cm", self.width_cm),
            ("height_cm", self.height_cm),
            ("stones_per_m2", self.stones_per_m2),
            ("fill_volume_per_stone_liters", self.fill_volume_per_stone_liters),
        ];
        for (field, value) in checks {
            if value <= 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_catalog(
                    format!("stone_types.{}.{}", id, field),
                    format!("must be positive, got {}", value),
                ));
            }
        }
        if self.weight_kg < 0.0 || self.fill_volume_per_m2_liters < 0.0 {
            return Err(CalcError::invalid_catalog(
                format!("stone_types.{}", id),
                "weight and fill per m² cannot be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StoneType {
        StoneType {
            name: "Test".to_string(),
            length_cm: 36.0,
            width_cm: 30.0,
            height_cm: 24.8,
            weight_kg: 19.5,
            stones_per_m2: 11.0,
            fill_volume_per_m2_liters: 171.0,
            fill_volume_per_stone_liters: 15.55,
            default: false,
        }
    }

    #[test]
    fn test_metric_accessors() {
        let stone = sample();
        assert!((stone.length_m() - 0.36).abs() < 1e-12);
        assert!((stone.height_m() - 0.248).abs() < 1e-12);
        assert!((stone.fill_per_stone_m3() - 0.01555).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_zero_height() {
        let mut stone = sample();
        stone.height_cm = 0.0;
        let err = stone.validate("s1").unwrap_err();
        assert_eq!(err.field(), Some("stone_types.s1.height_cm"));
    }

    #[test]
    fn test_default_flag_is_optional_in_json() {
        let json = r#"{
            "name": "X", "length_cm": 50.0, "width_cm": 17.5, "height_cm": 25.0,
            "weight_kg": 14.0, "stones_per_m2": 8.0,
            "fill_volume_per_m2_liters": 88.0, "fill_volume_per_stone_liters": 11.0
        }"#;
        let stone: StoneType = serde_json::from_str(json).unwrap();
        assert!(!stone.default);
    }
}
