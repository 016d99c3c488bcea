//! # Catalog Rules
//!
//! The non-stone parts of the catalog: concrete mix, loss buffer, warning
//! thresholds, reinforcement rule, default prices and rendering limits.
//! All of it is plain data; the calculations read it, nothing writes it.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete mix ratio and the absolute quantities per m³ of fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixRatio {
    /// Volumetric parts cement
    pub cement_parts: f64,
    /// Volumetric parts gravel
    pub gravel_parts: f64,
    /// Volumetric parts water
    pub water_parts: f64,
    pub cement_kg_per_m3: f64,
    pub gravel_kg_per_m3: f64,
    pub water_liters_per_m3: f64,
    /// Cement is sold in bags of this size
    pub cement_bag_size_kg: f64,
}

impl MixRatio {
    /// Human-readable ratio, e.g. `1 : 4 : 0.5`
    pub fn ratio_label(&self) -> String {
        format!("{} : {} : {}", self.cement_parts, self.gravel_parts, self.water_parts)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let rates = [
            ("concrete_mix.cement_kg_per_m3", self.cement_kg_per_m3),
            ("concrete_mix.gravel_kg_per_m3", self.gravel_kg_per_m3),
            ("concrete_mix.water_liters_per_m3", self.water_liters_per_m3),
        ];
        for (field, value) in rates {
            if value < 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_catalog(field, format!("cannot be negative, got {}", value)));
            }
        }
        if self.cement_bag_size_kg <= 0.0 || !self.cement_bag_size_kg.is_finite() {
            return Err(CalcError::invalid_catalog(
                "concrete_mix.cement_bag_size_kg",
                "bag size must be positive",
            ));
        }
        Ok(())
    }
}

/// Waste/loss allowance applied to the computed fill volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Extra volume in percent (15 → ×1.15)
    pub percentage: f64,
}

impl BufferConfig {
    /// Multiplier applied to the base volume
    pub fn factor(&self) -> f64 {
        1.0 + self.percentage / 100.0
    }
}

/// Validation minimum and advisory height limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningThresholds {
    /// Walls thinner than this are rejected
    pub min_width_cm: f64,
    /// Advisory limit for walls standing free
    pub max_height_freestanding_m: f64,
    /// Advisory limit for walls retaining soil
    pub max_height_backfilled_m: f64,
    /// Above this height reinforcement is recommended
    #[serde(default = "default_reinforcement_advice_height")]
    pub reinforcement_advice_height_m: f64,
}

fn default_reinforcement_advice_height() -> f64 {
    1.0
}

/// Steel reinforcement rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementRule {
    /// Walls lower than this need no steel
    pub min_height_m: f64,
    /// Rods laid into every course
    pub rods_per_row: u32,
    /// Stock rod length
    pub rod_length_m: f64,
    pub diameter_mm: f64,
    pub price_per_rod_eur: f64,
}

/// Default unit prices offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDefaults {
    pub cement_per_bag_eur: f64,
    pub gravel_per_ton_eur: f64,
    /// Net price, VAT is added on top
    pub stone_per_piece_eur: f64,
}

/// Default wall dimensions for new calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDefaults {
    pub wall_length_m: f64,
    pub wall_start_height_m: f64,
    pub wall_end_height_m: f64,
    pub wall_width_cm: f64,
}

/// Advisory limits for rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLimits {
    /// Layout expansion stops after this many stone elements
    pub max_rendered_stones: usize,
    /// Above this estimate a 2-D view is preferred over 3-D
    pub detail_view_stone_limit: usize,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        LayoutLimits {
            max_rendered_stones: 800,
            detail_view_stone_limit: 500,
        }
    }
}

/// Recommended concrete for filling the blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcreteRecommendation {
    /// Strength class, e.g. "C25/30"
    pub quality: String,
    pub max_grain_size_mm: u32,
    /// Consistency class, e.g. "F3"
    pub consistency: String,
    pub reinforcement_note: String,
}

impl ConcreteRecommendation {
    pub fn text(&self) -> String {
        format!(
            "Recommended concrete: {} with max. {} mm grain (round gravel 0-{}), {} consistency.\n\
             Reinforcement: {}",
            self.quality,
            self.max_grain_size_mm,
            self.max_grain_size_mm,
            self.consistency,
            self.reinforcement_note
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_factor() {
        let buffer = BufferConfig { percentage: 15.0 };
        assert!((buffer.factor() - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_mix_rejects_zero_bag() {
        let mix = MixRatio {
            cement_parts: 1.0,
            gravel_parts: 4.0,
            water_parts: 0.5,
            cement_kg_per_m3: 300.0,
            gravel_kg_per_m3: 1200.0,
            water_liters_per_m3: 150.0,
            cement_bag_size_kg: 0.0,
        };
        assert!(mix.validate().is_err());
        assert_eq!(mix.ratio_label(), "1 : 4 : 0.5");
    }

    #[test]
    fn test_advice_height_defaults_when_missing() {
        let json = r#"{"min_width_cm": 10.0, "max_height_freestanding_m": 2.0, "max_height_backfilled_m": 1.3}"#;
        let thresholds: WarningThresholds = serde_json::from_str(json).unwrap();
        assert_eq!(thresholds.reinforcement_advice_height_m, 1.0);
    }
}
