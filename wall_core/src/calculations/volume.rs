//! # Fill Volume and Materials
//!
//! Turns a stone count into the concrete volume poured into the hollow
//! cores, then into purchasable cement, gravel and water quantities.
//!
//! Cement is rounded up to whole bags and gravel up to the next 0.1 t.
//! Water is assumed to be available on site and is reported in litres only.

use serde::{Deserialize, Serialize};

use crate::catalog::{BufferConfig, MixRatio, StoneType};
use crate::units::{ceil_to_tenth_tonne, round_to, CubicMeters, Kilograms, Liters};

/// Fill volume before and after the loss buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillVolume {
    pub base_m3: f64,
    pub buffered_m3: f64,
}

/// Concrete volume needed to fill `total_stones` blocks.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::volume::calculate_fill_volume;
/// use wall_core::catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// let stone = catalog.stone("abmessung_1").unwrap();
/// let volume = calculate_fill_volume(100, stone, &catalog.buffer);
/// assert!((volume.base_m3 - 2.091).abs() < 1e-3);
/// assert!((volume.buffered_m3 - 2.40465).abs() < 1e-3);
/// ```
pub fn calculate_fill_volume(total_stones: u32, stone: &StoneType, buffer: &BufferConfig) -> FillVolume {
    let base = CubicMeters(stone.fill_per_stone_m3() * f64::from(total_stones));
    FillVolume {
        base_m3: base.value(),
        buffered_m3: (base * buffer.factor()).value(),
    }
}

/// Material quantities for one fill volume.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cement_kg": 300.0,
///   "cement_bags": 12,
///   "cement_bag_size_kg": 25.0,
///   "gravel_kg": 1200.0,
///   "gravel_tons": 1.2,
///   "water_liters": 150.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    /// Cement mass, one decimal
    pub cement_kg: f64,
    /// Whole bags to buy
    pub cement_bags: u32,
    pub cement_bag_size_kg: f64,
    /// Gravel mass, one decimal
    pub gravel_kg: f64,
    /// Gravel to buy, in 0.1 t steps
    pub gravel_tons: f64,
    /// Water, one decimal, not purchased
    pub water_liters: f64,
}

/// Derive cement, gravel and water for a (buffered) fill volume.
pub fn calculate_materials(volume_m3: f64, mix: &MixRatio) -> MaterialQuantities {
    let cement = Kilograms(volume_m3 * mix.cement_kg_per_m3);
    let gravel = Kilograms(volume_m3 * mix.gravel_kg_per_m3);
    let water = Liters(volume_m3 * mix.water_liters_per_m3);

    let cement_bags = (cement.value() / mix.cement_bag_size_kg).ceil() as u32;
    let gravel_tons = ceil_to_tenth_tonne(gravel).value();

    MaterialQuantities {
        cement_kg: round_to(cement.value(), 1),
        cement_bags,
        cement_bag_size_kg: mix.cement_bag_size_kg,
        gravel_kg: round_to(gravel.value(), 1),
        gravel_tons,
        water_liters: round_to(water.value(), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn mix() -> &'static MixRatio {
        &Catalog::builtin().concrete_mix
    }

    #[test]
    fn test_volume_with_buffer() {
        let catalog = Catalog::builtin();
        let volume = calculate_fill_volume(100, catalog.stone("abmessung_1").unwrap(), &catalog.buffer);
        assert!((volume.base_m3 - 2.091).abs() < 0.001);
        assert!((volume.buffered_m3 - 2.40465).abs() < 0.001);
    }

    #[test]
    fn test_volume_per_stone_type() {
        let catalog = Catalog::builtin();
        let cases = [("abmessung_2", 0.7775), ("abmessung_3", 0.6045), ("abmessung_4", 0.55)];
        for (id, expected) in cases {
            let volume = calculate_fill_volume(50, catalog.stone(id).unwrap(), &catalog.buffer);
            assert!((volume.base_m3 - expected).abs() < 0.001, "{}: {}", id, volume.base_m3);
        }
    }

    #[test]
    fn test_zero_buffer_keeps_volume() {
        let catalog = Catalog::builtin();
        let volume = calculate_fill_volume(10, catalog.stone("abmessung_4").unwrap(), &BufferConfig { percentage: 0.0 });
        assert_eq!(volume.base_m3, volume.buffered_m3);
    }

    #[test]
    fn test_materials_for_one_cubic_meter() {
        let materials = calculate_materials(1.0, mix());
        assert_eq!(materials.cement_kg, 300.0);
        assert_eq!(materials.cement_bags, 12);
        assert_eq!(materials.gravel_kg, 1200.0);
        assert_eq!(materials.gravel_tons, 1.2);
        assert_eq!(materials.water_liters, 150.0);
    }

    #[test]
    fn test_materials_for_half_cubic_meter() {
        let materials = calculate_materials(0.5, mix());
        assert_eq!(materials.cement_kg, 150.0);
        assert_eq!(materials.cement_bags, 6);
        assert_eq!(materials.gravel_kg, 600.0);
        assert_eq!(materials.gravel_tons, 0.6);
        assert_eq!(materials.water_liters, 75.0);
    }

    #[test]
    fn test_cement_bag_rounding() {
        // 2.1 m³ -> 630 kg -> 25.2 bags -> 26
        let materials = calculate_materials(2.1, mix());
        assert_eq!(materials.cement_kg, 630.0);
        assert_eq!(materials.cement_bags, 26);
    }

    #[test]
    fn test_gravel_rounds_up_to_tenth_tonne() {
        let mut mix = mix().clone();
        mix.gravel_kg_per_m3 = 1250.0;
        let materials = calculate_materials(1.0, &mix);
        assert_eq!(materials.gravel_kg, 1250.0);
        assert_eq!(materials.gravel_tons, 1.3);
    }
}
