//! # Cost Aggregation
//!
//! Combines unit prices with the computed quantities.
//!
//! VAT is added to the stone line only. Stone prices are quoted net by the
//! block supplier; cement, gravel and rebar prices are taken as gross.

use serde::{Deserialize, Serialize};

use super::volume::MaterialQuantities;
use crate::units::round_to;

/// VAT rate applied to the stone line item
pub const STONE_VAT_RATE: f64 = 0.19;

/// Cost breakdown, all figures in € with two decimals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "cement_cost": 60.0,
///   "gravel_cost": 75.0,
///   "stone_cost": 250.0,
///   "stone_vat": 47.5,
///   "stone_cost_with_vat": 297.5,
///   "reinforcement_cost": 0.0,
///   "subtotal": 385.0,
///   "total_cost": 432.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cement_cost: f64,
    pub gravel_cost: f64,
    /// Net stone cost
    pub stone_cost: f64,
    pub stone_vat: f64,
    pub stone_cost_with_vat: f64,
    pub reinforcement_cost: f64,
    /// Net total: stones without VAT
    pub subtotal: f64,
    /// Gross total: stones with VAT
    pub total_cost: f64,
}

/// Price every line item and total them.
///
/// `stone_price` of `None` prices the stones at zero.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::costs::calculate_costs;
/// use wall_core::calculations::volume::calculate_materials;
/// use wall_core::catalog::Catalog;
///
/// let materials = calculate_materials(1.0, &Catalog::builtin().concrete_mix);
/// let costs = calculate_costs(&materials, 5.0, 50.0, 100, Some(2.5), 0.0);
/// assert_eq!(costs.stone_vat, 47.5);
/// assert_eq!(costs.total_cost, 60.0 + 60.0 + 297.5);
/// ```
pub fn calculate_costs(
    materials: &MaterialQuantities,
    cement_price: f64,
    gravel_price: f64,
    stone_count: u32,
    stone_price: Option<f64>,
    reinforcement_cost: f64,
) -> CostBreakdown {
    let cement_cost = f64::from(materials.cement_bags) * cement_price;
    let gravel_cost = materials.gravel_tons * gravel_price;
    let stone_cost = stone_price.map_or(0.0, |price| f64::from(stone_count) * price);
    let stone_vat = stone_cost * STONE_VAT_RATE;
    let stone_cost_with_vat = stone_cost + stone_vat;

    let subtotal = cement_cost + gravel_cost + stone_cost + reinforcement_cost;
    let total_cost = cement_cost + gravel_cost + stone_cost_with_vat + reinforcement_cost;

    CostBreakdown {
        cement_cost: round_to(cement_cost, 2),
        gravel_cost: round_to(gravel_cost, 2),
        stone_cost: round_to(stone_cost, 2),
        stone_vat: round_to(stone_vat, 2),
        stone_cost_with_vat: round_to(stone_cost_with_vat, 2),
        reinforcement_cost: round_to(reinforcement_cost, 2),
        subtotal: round_to(subtotal, 2),
        total_cost: round_to(total_cost, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materials(cement_bags: u32, gravel_tons: f64) -> MaterialQuantities {
        MaterialQuantities {
            cement_kg: f64::from(cement_bags) * 25.0,
            cement_bags,
            cement_bag_size_kg: 25.0,
            gravel_kg: gravel_tons * 1000.0,
            gravel_tons,
            water_liters: 0.0,
        }
    }

    #[test]
    fn test_concrete_only() {
        let costs = calculate_costs(&materials(12, 1.5), 5.0, 50.0, 0, None, 0.0);
        assert_eq!(costs.cement_cost, 60.0);
        assert_eq!(costs.gravel_cost, 75.0);
        assert_eq!(costs.stone_cost, 0.0);
        assert_eq!(costs.total_cost, 135.0);
        assert_eq!(costs.subtotal, 135.0);
    }

    #[test]
    fn test_different_prices() {
        let costs = calculate_costs(&materials(10, 2.0), 7.5, 45.0, 0, None, 0.0);
        assert_eq!(costs.cement_cost, 75.0);
        assert_eq!(costs.gravel_cost, 90.0);
        assert_eq!(costs.total_cost, 165.0);
    }

    #[test]
    fn test_vat_only_on_stones() {
        let costs = calculate_costs(&materials(12, 1.5), 5.0, 50.0, 100, Some(2.50), 0.0);
        assert_eq!(costs.stone_cost, 250.0);
        assert_eq!(costs.stone_vat, 47.50);
        assert_eq!(costs.stone_cost_with_vat, 297.50);
        assert_eq!(costs.cement_cost, 60.0);
        assert_eq!(costs.gravel_cost, 75.0);
        assert_eq!(costs.subtotal, 385.0);
        assert_eq!(costs.total_cost, 432.50);
    }

    #[test]
    fn test_reinforcement_is_untaxed() {
        let costs = calculate_costs(&materials(12, 1.5), 5.0, 50.0, 100, Some(2.50), 40.5);
        assert_eq!(costs.reinforcement_cost, 40.5);
        assert_eq!(costs.subtotal, 425.5);
        assert_eq!(costs.total_cost, 473.0);
        assert_eq!(costs.total_cost - costs.subtotal, costs.stone_vat);
    }
}
