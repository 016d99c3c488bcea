//! # Wall Calculation
//!
//! The full derivation for one wall: validation, height warnings, geometry,
//! fill volume, materials, reinforcement, costs and the stone layout.
//!
//! ## Wall variants
//!
//! - [`WallSpec::Simple`]: one straight or linearly sloped wall.
//! - [`WallSpec::TwoZone`]: a flat zone followed by a sloped zone. It is
//!   normalized into an equivalent combined wall for volume and layout, while
//!   the per-zone figures are kept in [`CalculationResult::zones`].
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::{calculate_wall, WallInput, WallSpec};
//! use wall_core::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let input = WallInput::new("Garden wall", WallSpec::simple(5.0, 1.0, 1.0), 36.5, "abmessung_1");
//! let result = calculate_wall(&input, catalog).unwrap();
//!
//! assert_eq!(result.area_m2, 5.0);
//! assert_eq!(result.total_stones, 55);
//! assert!(result.costs.is_none());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::costs::{calculate_costs, CostBreakdown};
use super::geometry::{calculate_stone_count, calculate_two_zone_wall, calculate_wall_area, ZoneBreakdown};
use super::reinforcement::{calculate_reinforcement, ReinforcementPlan};
use super::volume::{calculate_fill_volume, calculate_materials, MaterialQuantities};
use super::warnings::get_height_warnings;
use crate::catalog::{Catalog, MixRatio, PriceDefaults, ReinforcementRule, StoneType};
use crate::errors::{CalcError, CalcResult};
use crate::layout::{expand_to_grid, get_stone_layout, LayoutGrid};
use crate::units::{round_to, Centimeters, Meters};

/// Largest stone, course, rod or bag count a result can carry.
const MAX_COUNT: f64 = u32::MAX as f64;

/// Appended to every result and report.
pub const DISCLAIMER: &str = "All figures are estimates for planning purposes. \
They do not replace a structural calculation or professional advice. \
Check quantities and prices with your supplier before ordering.";

/// Wall geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum WallSpec {
    /// One straight or linearly sloped wall
    Simple {
        length_m: f64,
        start_height_m: f64,
        end_height_m: f64,
    },
    /// Flat zone 1 followed by zone 2 sloping from zone 1's height
    TwoZone {
        zone1_length_m: f64,
        zone1_height_m: f64,
        zone2_length_m: f64,
        zone2_end_height_m: f64,
    },
}

/// Combined single-trapezoid view of any wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWall {
    pub length_m: f64,
    pub start_height_m: f64,
    pub end_height_m: f64,
}

impl WallSpec {
    pub fn simple(length_m: f64, start_height_m: f64, end_height_m: f64) -> Self {
        WallSpec::Simple {
            length_m,
            start_height_m,
            end_height_m,
        }
    }

    pub fn two_zone(zone1_length_m: f64, zone1_height_m: f64, zone2_length_m: f64, zone2_end_height_m: f64) -> Self {
        WallSpec::TwoZone {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        }
    }

    /// Collapse into total length with start and end heights.
    pub fn normalized(&self) -> NormalizedWall {
        match *self {
            WallSpec::Simple {
                length_m,
                start_height_m,
                end_height_m,
            } => NormalizedWall {
                length_m,
                start_height_m,
                end_height_m,
            },
            WallSpec::TwoZone {
                zone1_length_m,
                zone1_height_m,
                zone2_length_m,
                zone2_end_height_m,
            } => NormalizedWall {
                length_m: zone1_length_m + zone2_length_m,
                start_height_m: zone1_height_m,
                end_height_m: zone2_end_height_m,
            },
        }
    }

    pub fn max_height(&self) -> f64 {
        let wall = self.normalized();
        wall.start_height_m.max(wall.end_height_m)
    }

    pub fn is_two_zone(&self) -> bool {
        matches!(self, WallSpec::TwoZone { .. })
    }

    /// Named dimensions, in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            WallSpec::Simple {
                length_m,
                start_height_m,
                end_height_m,
            } => vec![
                ("length_m", length_m),
                ("start_height_m", start_height_m),
                ("end_height_m", end_height_m),
            ],
            WallSpec::TwoZone {
                zone1_length_m,
                zone1_height_m,
                zone2_length_m,
                zone2_end_height_m,
            } => vec![
                ("zone1_length_m", zone1_length_m),
                ("zone1_height_m", zone1_height_m),
                ("zone2_length_m", zone2_length_m),
                ("zone2_end_height_m", zone2_end_height_m),
            ],
        }
    }
}

/// Unit prices for the cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    /// € per cement bag
    pub cement_per_bag: f64,
    /// € per tonne of gravel
    pub gravel_per_ton: f64,
    /// € per stone, net; stones are free when absent
    #[serde(default)]
    pub stone_per_piece: Option<f64>,
    /// € per stock rod; the catalog rule's price when absent
    #[serde(default)]
    pub rebar_per_rod: Option<f64>,
}

impl PriceInput {
    /// All prices taken from the catalog defaults.
    pub fn from_defaults(prices: &PriceDefaults, rule: &ReinforcementRule) -> Self {
        PriceInput {
            cement_per_bag: prices.cement_per_bag_eur,
            gravel_per_ton: prices.gravel_per_ton_eur,
            stone_per_piece: Some(prices.stone_per_piece_eur),
            rebar_per_rod: Some(rule.price_per_rod_eur),
        }
    }

    fn validate(&self) -> CalcResult<()> {
        let prices = [
            ("prices.cement_per_bag", Some(self.cement_per_bag)),
            ("prices.gravel_per_ton", Some(self.gravel_per_ton)),
            ("prices.stone_per_piece", self.stone_per_piece),
            ("prices.rebar_per_rod", self.rebar_per_rod),
        ];
        for (field, price) in prices {
            if let Some(price) = price {
                if price < 0.0 || !price.is_finite() {
                    return Err(CalcError::invalid_input(
                        field,
                        price.to_string(),
                        "Price cannot be negative",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Everything needed to calculate one wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallInput {
    /// Free-form name shown in reports
    #[serde(default)]
    pub label: String,
    pub spec: WallSpec,
    /// Wall thickness (cm)
    pub width_cm: f64,
    /// Catalog identifier of the stone
    pub stone_type: String,
    /// Soil is backfilled against the wall
    #[serde(default)]
    pub backfilled: bool,
    /// Costs are only calculated when prices are given
    #[serde(default)]
    pub prices: Option<PriceInput>,
}

impl WallInput {
    pub fn new(label: impl Into<String>, spec: WallSpec, width_cm: f64, stone_type: impl Into<String>) -> Self {
        WallInput {
            label: label.into(),
            spec,
            width_cm,
            stone_type: stone_type.into(),
            backfilled: false,
            prices: None,
        }
    }

    pub fn with_prices(mut self, prices: PriceInput) -> Self {
        self.prices = Some(prices);
        self
    }

    pub fn backfilled(mut self, backfilled: bool) -> Self {
        self.backfilled = backfilled;
        self
    }

    /// Input from a catalog template.
    pub fn from_template(catalog: &Catalog, key: &str) -> CalcResult<Self> {
        Ok(catalog.template(key)?.to_input())
    }

    /// Validate against the catalog, returning the selected stone.
    ///
    /// Stops at the first failure; the error names the offending field.
    pub fn validate<'c>(&self, catalog: &'c Catalog) -> CalcResult<&'c StoneType> {
        for (field, value) in self.spec.dimensions() {
            if value <= 0.0 || !value.is_finite() {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be greater than zero",
                ));
            }
        }

        if self.width_cm <= 0.0 || !self.width_cm.is_finite() {
            return Err(CalcError::invalid_input(
                "width_cm",
                self.width_cm.to_string(),
                "Width must be greater than zero",
            ));
        }

        let min_width = catalog.warnings.min_width_cm;
        if self.width_cm < min_width {
            return Err(CalcError::invalid_input(
                "width_cm",
                self.width_cm.to_string(),
                format!("Width must be at least {} cm", min_width),
            ));
        }

        let stone = catalog.stone(&self.stone_type)?;
        self.check_counts(stone, catalog)?;

        if let Some(prices) = &self.prices {
            prices.validate()?;
        }

        Ok(stone)
    }

    /// Reject walls whose stone, course, rod or bag counts exceed `u32`.
    fn check_counts(&self, stone: &StoneType, catalog: &Catalog) -> CalcResult<()> {
        let per_m2 = stone.stones_per_m2;
        let ((length_field, length_m), (height_field, height_m), stones) = match self.spec {
            WallSpec::Simple {
                length_m,
                start_height_m,
                end_height_m,
            } => {
                let height = if end_height_m > start_height_m {
                    ("end_height_m", end_height_m)
                } else {
                    ("start_height_m", start_height_m)
                };
                let stones = (calculate_wall_area(length_m, start_height_m, end_height_m) * per_m2).ceil();
                (("length_m", length_m), height, stones)
            }
            WallSpec::TwoZone {
                zone1_length_m,
                zone1_height_m,
                zone2_length_m,
                zone2_end_height_m,
            } => {
                let zone1 = (zone1_length_m * zone1_height_m * per_m2).ceil();
                let zone2 = (calculate_wall_area(zone2_length_m, zone1_height_m, zone2_end_height_m) * per_m2).ceil();
                let length = if zone2 > zone1 {
                    ("zone2_length_m", zone2_length_m)
                } else {
                    ("zone1_length_m", zone1_length_m)
                };
                let height = if zone2_end_height_m > zone1_height_m {
                    ("zone2_end_height_m", zone2_end_height_m)
                } else {
                    ("zone1_height_m", zone1_height_m)
                };
                (length, height, zone1 + zone2)
            }
        };

        let rule = &catalog.reinforcement_steel;
        let mix = &catalog.concrete_mix;
        let wall_length_m = self.spec.normalized().length_m;
        let courses = (height_m / stone.height_m()).ceil();
        let rod_runs = courses * f64::from(rule.rods_per_row.max(1));
        let stock_rods = (wall_length_m * rod_runs / rule.rod_length_m).ceil();
        let stones_per_course = (wall_length_m / stone.length_m()).ceil();
        let fill_m3 = stones * stone.fill_per_stone_m3() * catalog.buffer.factor();
        let cement_bags = (fill_m3 * mix.cement_kg_per_m3 / mix.cement_bag_size_kg).ceil();

        let counts = [
            (height_field, height_m, "rod runs", rod_runs),
            (length_field, length_m, "stones", stones),
            (length_field, length_m, "stones per course", stones_per_course),
            (length_field, length_m, "stock rods", stock_rods),
            (length_field, length_m, "cement bags", cement_bags),
        ];
        for (field, value, what, count) in counts {
            if !(count.is_finite() && count <= MAX_COUNT) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Wall too large: needs {:.0} {}, at most {} supported", count, what, u32::MAX),
                ));
            }
        }
        Ok(())
    }
}

/// Output of [`calculate_wall`].
///
/// Quantities are rounded for presentation: area to 2 decimals, volumes to
/// 3, materials per [`MaterialQuantities`], money to 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub label: String,
    /// Geometry as entered
    pub spec: WallSpec,
    /// Combined wall used for volume and layout
    pub wall: NormalizedWall,
    pub width_cm: f64,
    pub backfilled: bool,

    pub area_m2: f64,
    pub total_stones: u32,
    pub rows: u32,
    pub base_volume_m3: f64,
    pub buffered_volume_m3: f64,
    pub buffer_percentage: f64,

    pub materials: MaterialQuantities,
    pub mix: MixRatio,
    pub costs: Option<CostBreakdown>,
    pub reinforcement: Option<ReinforcementPlan>,
    /// Per-zone figures for two-zone walls
    pub zones: Option<ZoneBreakdown>,
    pub layout: LayoutGrid,

    pub stone_type: String,
    pub stone: StoneType,
    pub warnings: Vec<String>,
    pub concrete_recommendation: String,
    pub disclaimer: String,
}

/// Run the full derivation for one wall.
///
/// Pure: identical input and catalog give an identical result.
pub fn calculate_wall(input: &WallInput, catalog: &Catalog) -> CalcResult<CalculationResult> {
    let stone = input.validate(catalog)?;
    let wall = input.spec.normalized();
    debug!(label = %input.label, stone_type = %input.stone_type, ?wall, "calculating wall");

    let warnings: Vec<String> = get_height_warnings(
        wall.start_height_m,
        wall.end_height_m,
        input.backfilled,
        &catalog.warnings,
    )
    .iter()
    .map(|w| w.to_string())
    .collect();
    for message in &warnings {
        warn!("{}", message);
    }

    let (area_m2, total_stones, rows, zones) = match input.spec {
        WallSpec::Simple {
            length_m,
            start_height_m,
            end_height_m,
        } => {
            let count = calculate_stone_count(length_m, start_height_m, end_height_m, stone);
            (count.area_m2, count.total_stones, count.rows, None)
        }
        WallSpec::TwoZone {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        } => {
            let geometry =
                calculate_two_zone_wall(zone1_length_m, zone1_height_m, zone2_length_m, zone2_end_height_m, stone);
            (
                geometry.total_area_m2,
                geometry.total_stones,
                geometry.rows,
                Some(geometry.zone_breakdown),
            )
        }
    };
    debug!(area_m2, total_stones, rows, "geometry");

    let volume = calculate_fill_volume(total_stones, stone, &catalog.buffer);
    let materials = calculate_materials(volume.buffered_m3, &catalog.concrete_mix);
    debug!(
        base_m3 = volume.base_m3,
        buffered_m3 = volume.buffered_m3,
        cement_bags = materials.cement_bags,
        gravel_tons = materials.gravel_tons,
        "fill volume and materials"
    );

    let rule = &catalog.reinforcement_steel;
    let rod_price = input
        .prices
        .and_then(|p| p.rebar_per_rod)
        .unwrap_or(rule.price_per_rod_eur);
    let reinforcement = calculate_reinforcement(rows, wall.length_m, input.spec.max_height(), rule, rod_price);
    debug!(rods = reinforcement.map(|r| r.rods_6m_needed), "reinforcement");

    let costs = input.prices.map(|prices| {
        calculate_costs(
            &materials,
            prices.cement_per_bag,
            prices.gravel_per_ton,
            total_stones,
            prices.stone_per_piece,
            reinforcement.map_or(0.0, |r| r.cost),
        )
    });
    if let Some(costs) = &costs {
        debug!(subtotal = costs.subtotal, total = costs.total_cost, "costs");
    }

    let depth = Meters::from(Centimeters(input.width_cm)).value();
    let layout = expand_to_grid(&get_stone_layout(&input.spec, stone), depth, &catalog.layout);

    Ok(CalculationResult {
        label: input.label.clone(),
        spec: input.spec,
        wall,
        width_cm: input.width_cm,
        backfilled: input.backfilled,
        area_m2: round_to(area_m2, 2),
        total_stones,
        rows,
        base_volume_m3: round_to(volume.base_m3, 3),
        buffered_volume_m3: round_to(volume.buffered_m3, 3),
        buffer_percentage: catalog.buffer.percentage,
        materials,
        mix: catalog.concrete_mix.clone(),
        costs,
        reinforcement,
        zones,
        layout,
        stone_type: input.stone_type.clone(),
        stone: stone.clone(),
        warnings,
        concrete_recommendation: catalog.concrete_recommendation.text(),
        disclaimer: DISCLAIMER.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin()
    }

    fn default_prices() -> PriceInput {
        PriceInput::from_defaults(&catalog().prices, &catalog().reinforcement_steel)
    }

    #[test]
    fn test_simple_wall_full_derivation() {
        let input = WallInput::new("Test", WallSpec::simple(10.0, 1.0, 1.0), 36.5, "abmessung_1")
            .with_prices(default_prices());
        let result = calculate_wall(&input, catalog()).unwrap();

        assert_eq!(result.area_m2, 10.0);
        assert_eq!(result.total_stones, 110);
        // ceil(1.0 / 0.248)
        assert_eq!(result.rows, 5);
        assert!((result.base_volume_m3 - 2.3).abs() < 1e-3);
        assert!((result.buffered_volume_m3 - 2.645).abs() < 1e-3);
        assert_eq!(result.buffer_percentage, 15.0);

        assert_eq!(result.materials.cement_bags, 32);
        assert_eq!(result.materials.gravel_tons, 3.2);

        let rebar = result.reinforcement.unwrap();
        assert_eq!(rebar.total_length_m, 100.0);
        assert_eq!(rebar.rods_6m_needed, 17);
        assert_eq!(rebar.cost, 76.5);

        let costs = result.costs.unwrap();
        assert_eq!(costs.cement_cost, 176.0);
        assert_eq!(costs.gravel_cost, 144.0);
        assert_eq!(costs.stone_cost, 275.0);
        assert_eq!(costs.stone_vat, 52.25);
        assert_eq!(costs.reinforcement_cost, 76.5);
        assert_eq!(costs.subtotal, 671.5);
        assert_eq!(costs.total_cost, 723.75);

        assert!(result.warnings.is_empty());
        assert!(result.zones.is_none());
        assert_eq!(result.stone_type, "abmessung_1");
        assert_eq!(result.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_no_prices_no_costs() {
        let input = WallInput::new("", WallSpec::simple(5.0, 0.5, 0.5), 24.0, "abmessung_3");
        let result = calculate_wall(&input, catalog()).unwrap();
        assert!(result.costs.is_none());
        assert!(result.reinforcement.is_none());
    }

    #[test]
    fn test_rebar_price_falls_back_to_catalog() {
        let prices = PriceInput {
            cement_per_bag: 5.0,
            gravel_per_ton: 50.0,
            stone_per_piece: None,
            rebar_per_rod: None,
        };
        let input = WallInput::new("", WallSpec::simple(5.0, 1.2, 1.2), 36.5, "abmessung_1").with_prices(prices);
        let result = calculate_wall(&input, catalog()).unwrap();
        let rebar = result.reinforcement.unwrap();
        assert_eq!(rebar.price_per_rod, 4.5);
        let costs = result.costs.unwrap();
        assert_eq!(costs.stone_cost, 0.0);
        assert_eq!(costs.reinforcement_cost, rebar.cost);
    }

    #[test]
    fn test_two_zone_wall() {
        let input = WallInput::new("Slope", WallSpec::two_zone(5.0, 1.0, 5.0, 2.0), 36.5, "abmessung_1");
        let result = calculate_wall(&input, catalog()).unwrap();

        assert_eq!(result.area_m2, 12.5);
        // 55 + ceil(82.5)
        assert_eq!(result.total_stones, 138);
        assert_eq!(result.rows, 9);
        assert_eq!(
            result.wall,
            NormalizedWall {
                length_m: 10.0,
                start_height_m: 1.0,
                end_height_m: 2.0,
            }
        );

        let zones = result.zones.unwrap();
        assert_eq!(zones.zone1.stones, 55);
        assert_eq!(zones.zone2.stones, 83);
        assert_eq!(zones.zone2.avg_height_m, 1.5);

        // 2.0 m is at, not above, the freestanding limit
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Reinforcement"));

        let layout = &result.layout.layout;
        assert!(layout.zones.is_some());
        assert_eq!(layout.total_length_m, 10.0);
    }

    #[test]
    fn test_backfilled_warning() {
        let input = WallInput::new("", WallSpec::simple(4.0, 1.5, 1.5), 36.5, "abmessung_1").backfilled(true);
        let result = calculate_wall(&input, catalog()).unwrap();
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[0].contains("backfilled"));
    }

    #[test]
    fn test_idempotent() {
        let input = WallInput::new("Twice", WallSpec::two_zone(3.5, 1.3, 4.5, 3.3), 30.0, "abmessung_2")
            .with_prices(default_prices());
        let first = calculate_wall(&input, catalog()).unwrap();
        let second = calculate_wall(&input, catalog()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_negative_length_names_field() {
        let input = WallInput::new("", WallSpec::simple(-5.0, 1.0, 1.0), 36.5, "abmessung_1");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));
        assert!(err.to_string().contains("length_m"));
    }

    #[test]
    fn test_zero_zone_height_names_field() {
        let input = WallInput::new("", WallSpec::two_zone(5.0, 0.0, 5.0, 2.0), 36.5, "abmessung_1");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("zone1_height_m"));
    }

    #[test]
    fn test_width_below_minimum() {
        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 5.0, "abmessung_1");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("width_cm"));
        assert!(err.to_string().contains("width_cm"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_stone_type() {
        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 36.5, "invalid_type");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert!(err.to_string().contains("invalid_type"));
        assert_eq!(err.field(), Some("stone_type"));
    }

    #[test]
    fn test_width_checked_before_stone_type() {
        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 5.0, "nope");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("width_cm"));
    }

    #[test]
    fn test_oversized_height_rejected_without_panic() {
        let input = WallInput::new("", WallSpec::simple(1.0, 2.0e9, 2.0e9), 36.5, "abmessung_1");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("start_height_m"));
    }

    #[test]
    fn test_oversized_length_rejected() {
        let input = WallInput::new("", WallSpec::simple(1.0e9, 1.0, 1.0), 36.5, "abmessung_1");
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("length_m"));
        assert!(err.to_string().contains("stones"));

        let two_zone = WallInput::new("", WallSpec::two_zone(1.0, 1.0, 1.0e9, 1.0), 36.5, "abmessung_1");
        let err = calculate_wall(&two_zone, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("zone2_length_m"));
    }

    #[test]
    fn test_large_wall_within_limits() {
        let input = WallInput::new("", WallSpec::simple(1.0e6, 2.0, 2.0), 36.5, "abmessung_1");
        let result = calculate_wall(&input, catalog()).unwrap();
        assert_eq!(result.total_stones, 22_000_000);
        assert!(result.layout.truncated);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut prices = default_prices();
        prices.stone_per_piece = Some(-1.0);
        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 36.5, "abmessung_1").with_prices(prices);
        let err = calculate_wall(&input, catalog()).unwrap_err();
        assert_eq!(err.field(), Some("prices.stone_per_piece"));
    }

    #[test]
    fn test_rising_wall_is_valid() {
        let input = WallInput::new("", WallSpec::simple(6.0, 0.5, 1.5), 36.5, "abmessung_1");
        let result = calculate_wall(&input, catalog()).unwrap();
        assert_eq!(result.area_m2, 6.0);
        assert!(result.reinforcement.is_some());
    }

    #[test]
    fn test_from_template() {
        let input = WallInput::from_template(catalog(), "garden_bed").unwrap();
        assert_eq!(input.stone_type, "abmessung_3");
        assert_eq!(input.width_cm, 24.0);
        assert!(calculate_wall(&input, catalog()).is_ok());

        let err = WallInput::from_template(catalog(), "castle").unwrap_err();
        assert_eq!(err.error_code(), "TEMPLATE_NOT_FOUND");
    }

    #[test]
    fn test_synthetic_catalog() {
        let mut catalog = catalog().clone();
        catalog.buffer.percentage = 0.0;
        catalog.warnings.min_width_cm = 40.0;

        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 36.5, "abmessung_1");
        assert_eq!(
            calculate_wall(&input, &catalog).unwrap_err().field(),
            Some("width_cm")
        );

        let input = WallInput::new("", WallSpec::simple(5.0, 1.0, 1.0), 40.0, "abmessung_1");
        let result = calculate_wall(&input, &catalog).unwrap();
        assert_eq!(result.base_volume_m3, result.buffered_volume_m3);
    }

    #[test]
    fn test_spec_serializes_tagged() {
        let json = serde_json::to_value(WallSpec::two_zone(1.0, 1.0, 1.0, 1.0)).unwrap();
        assert_eq!(json["variant"], "two_zone");
        let back: WallSpec = serde_json::from_value(json).unwrap();
        assert!(back.is_two_zone());
    }
}
