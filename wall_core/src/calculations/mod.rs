//! # Wall Calculations
//!
//! Each step of the derivation lives in its own module as a pure function.
//! [`wall::calculate_wall`] chains them:
//!
//! - `WallInput` - wall geometry, width, stone identifier, optional prices
//! - `CalculationResult` - every derived quantity (JSON-serializable)
//! - `calculate_wall(input, catalog) -> Result<CalculationResult, CalcError>`
//!
//! ## Steps
//!
//! - [`geometry`] - face area, stone count, course count, two-zone split
//! - [`volume`] - fill volume with loss buffer, cement/gravel/water
//! - [`reinforcement`] - steel rods for walls above the threshold height
//! - [`costs`] - priced line items with VAT on stones
//! - [`warnings`] - advisory height warnings

pub mod costs;
pub mod geometry;
pub mod reinforcement;
pub mod volume;
pub mod wall;
pub mod warnings;

pub use costs::{calculate_costs, CostBreakdown, STONE_VAT_RATE};
pub use geometry::{
    calculate_stone_count, calculate_two_zone_wall, calculate_wall_area, rows_by_average, rows_by_max,
    StoneCount, TwoZoneGeometry, ZoneBreakdown,
};
pub use reinforcement::{calculate_reinforcement, ReinforcementPlan};
pub use volume::{calculate_fill_volume, calculate_materials, FillVolume, MaterialQuantities};
pub use wall::{calculate_wall, CalculationResult, NormalizedWall, PriceInput, WallInput, WallSpec, DISCLAIMER};
pub use warnings::{get_height_warnings, HeightWarning};
