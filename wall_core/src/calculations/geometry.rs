//! # Wall Geometry
//!
//! Converts wall dimensions into face area, stone count and course count.
//!
//! ## Assumptions
//!
//! - The wall face is a trapezoid: area = length × average height. Exact for
//!   a straight slope, used as the working model for every wall.
//! - Stones are only sold whole, so every stone count is rounded up.
//! - Simple walls count courses from the **average** height
//!   ([`rows_by_average`]); the sloped zone of a two-zone wall counts them
//!   from the **maximum** height ([`rows_by_max`]). Both policies are kept
//!   side by side on purpose because quantities downstream depend on them.
//! - Two-zone walls round the stone count per zone and then add, which can
//!   exceed a single rounding of the combined area by one stone.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::geometry::calculate_stone_count;
//! use wall_core::catalog::Catalog;
//!
//! let stone = Catalog::builtin().stone("abmessung_1").unwrap();
//! let count = calculate_stone_count(5.0, 1.0, 1.0, stone);
//! assert_eq!(count.area_m2, 5.0);
//! assert_eq!(count.total_stones, 55);
//! assert_eq!(count.rows, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::StoneType;

/// Face area of a linearly sloped wall (m²).
pub fn calculate_wall_area(length_m: f64, start_height_m: f64, end_height_m: f64) -> f64 {
    let avg_height = (start_height_m + end_height_m) / 2.0;
    length_m * avg_height
}

/// Course count from the average of the two end heights.
pub fn rows_by_average(start_height_m: f64, end_height_m: f64, stone_height_m: f64) -> u32 {
    let avg_height = (start_height_m + end_height_m) / 2.0;
    (avg_height / stone_height_m).ceil() as u32
}

/// Course count from the larger of the two end heights.
pub fn rows_by_max(start_height_m: f64, end_height_m: f64, stone_height_m: f64) -> u32 {
    (start_height_m.max(end_height_m) / stone_height_m).ceil() as u32
}

/// Stones needed to cover an area, rounded up to whole stones.
pub fn stones_for_area(area_m2: f64, stone: &StoneType) -> u32 {
    (area_m2 * stone.stones_per_m2).ceil() as u32
}

/// Stone count for a simple (single-zone) wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneCount {
    pub total_stones: u32,
    pub rows: u32,
    pub area_m2: f64,
}

/// Calculate stones and courses for a simple wall.
pub fn calculate_stone_count(
    length_m: f64,
    start_height_m: f64,
    end_height_m: f64,
    stone: &StoneType,
) -> StoneCount {
    let area_m2 = calculate_wall_area(length_m, start_height_m, end_height_m);
    StoneCount {
        total_stones: stones_for_area(area_m2, stone),
        rows: rows_by_average(start_height_m, end_height_m, stone.height_m()),
        area_m2,
    }
}

/// The flat, rectangular first zone of a two-zone wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatZone {
    pub length_m: f64,
    pub height_m: f64,
    pub area_m2: f64,
    pub stones: u32,
    pub rows: u32,
}

/// The sloped second zone, running from the flat zone's height to the end height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopedZone {
    pub length_m: f64,
    pub start_height_m: f64,
    pub end_height_m: f64,
    pub avg_height_m: f64,
    pub area_m2: f64,
    pub stones: u32,
    pub rows: u32,
}

/// Per-zone figures of a two-zone wall, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBreakdown {
    pub zone1: FlatZone,
    pub zone2: SlopedZone,
}

/// Combined geometry of a two-zone wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoZoneGeometry {
    pub total_area_m2: f64,
    /// Sum of the per-zone stone counts
    pub total_stones: u32,
    /// Larger of the two zones' course counts
    pub rows: u32,
    pub zone_breakdown: ZoneBreakdown,
}

/// Calculate a wall made of a flat zone followed by a sloped zone.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::geometry::calculate_two_zone_wall;
/// use wall_core::catalog::Catalog;
///
/// let stone = Catalog::builtin().stone("abmessung_1").unwrap();
/// let wall = calculate_two_zone_wall(5.0, 1.0, 5.0, 2.0, stone);
/// assert_eq!(wall.zone_breakdown.zone1.area_m2, 5.0);
/// assert_eq!(wall.zone_breakdown.zone2.area_m2, 7.5);
/// assert_eq!(wall.total_area_m2, 12.5);
/// ```
pub fn calculate_two_zone_wall(
    zone1_length_m: f64,
    zone1_height_m: f64,
    zone2_length_m: f64,
    zone2_end_height_m: f64,
    stone: &StoneType,
) -> TwoZoneGeometry {
    let stone_height_m = stone.height_m();

    let area1 = zone1_length_m * zone1_height_m;
    let zone1 = FlatZone {
        length_m: zone1_length_m,
        height_m: zone1_height_m,
        area_m2: area1,
        stones: stones_for_area(area1, stone),
        rows: rows_by_average(zone1_height_m, zone1_height_m, stone_height_m),
    };

    let avg2 = (zone1_height_m + zone2_end_height_m) / 2.0;
    let area2 = zone2_length_m * avg2;
    let zone2 = SlopedZone {
        length_m: zone2_length_m,
        start_height_m: zone1_height_m,
        end_height_m: zone2_end_height_m,
        avg_height_m: avg2,
        area_m2: area2,
        stones: stones_for_area(area2, stone),
        rows: rows_by_max(zone1_height_m, zone2_end_height_m, stone_height_m),
    };

    TwoZoneGeometry {
        total_area_m2: area1 + area2,
        total_stones: zone1.stones + zone2.stones,
        rows: zone1.rows.max(zone2.rows),
        zone_breakdown: ZoneBreakdown { zone1, zone2 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn stone(id: &str) -> &'static StoneType {
        Catalog::builtin().stone(id).unwrap()
    }

    #[test]
    fn test_rectangular_area_is_exact() {
        for (length, height) in [(10.0, 2.0), (1.0, 0.5), (7.3, 1.24)] {
            assert_eq!(calculate_wall_area(length, height, height), length * height);
        }
    }

    #[test]
    fn test_trapezoidal_area() {
        assert_eq!(calculate_wall_area(10.0, 2.0, 1.0), 15.0);
    }

    #[test]
    fn test_standard_stone_straight_wall() {
        let count = calculate_stone_count(5.0, 1.0, 1.0, stone("abmessung_1"));
        assert_eq!(count.area_m2, 5.0);
        assert_eq!(count.total_stones, 55);
        // 1.0 / 0.248 = 4.03 -> 5 courses
        assert_eq!(count.rows, 5);
    }

    #[test]
    fn test_eight_per_square_meter_stone() {
        let count = calculate_stone_count(8.0, 1.5, 1.5, stone("abmessung_4"));
        assert_eq!(count.area_m2, 12.0);
        assert_eq!(count.total_stones, 96);
    }

    #[test]
    fn test_sloped_wall_uses_average_height_for_rows() {
        let count = calculate_stone_count(8.0, 2.0, 1.0, stone("abmessung_1"));
        assert_eq!(count.area_m2, 12.0);
        assert_eq!(count.total_stones, 132);
        // avg 1.5 / 0.248 = 6.05 -> 7, max would give 9
        assert_eq!(count.rows, 7);
    }

    #[test]
    fn test_row_policies_differ() {
        assert_eq!(rows_by_average(2.0, 1.0, 0.248), 7);
        assert_eq!(rows_by_max(2.0, 1.0, 0.248), 9);
        assert_eq!(rows_by_max(1.0, 2.0, 0.248), 9);
    }

    #[test]
    fn test_two_zone_rising() {
        let wall = calculate_two_zone_wall(5.0, 1.0, 5.0, 2.0, stone("abmessung_1"));
        let zones = wall.zone_breakdown;
        assert_eq!(zones.zone1.area_m2, 5.0);
        assert_eq!(zones.zone1.stones, 55);
        assert_eq!(zones.zone2.avg_height_m, 1.5);
        assert_eq!(zones.zone2.area_m2, 7.5);
        // 7.5 * 11 = 82.5 -> 83
        assert_eq!(zones.zone2.stones, 83);
        assert_eq!(wall.total_area_m2, 12.5);
        assert_eq!(wall.total_stones, 138);
        assert_eq!(zones.zone1.rows, 5);
        assert_eq!(zones.zone2.rows, 9);
        assert_eq!(wall.rows, 9);
    }

    #[test]
    fn test_two_zone_falling() {
        let wall = calculate_two_zone_wall(3.0, 2.0, 2.0, 1.0, stone("abmessung_1"));
        assert_eq!(wall.zone_breakdown.zone1.area_m2, 6.0);
        assert_eq!(wall.zone_breakdown.zone2.area_m2, 3.0);
        assert_eq!(wall.total_area_m2, 9.0);
    }

    #[test]
    fn test_two_zone_rounds_per_zone() {
        // 2.5 m² per zone at 11/m² = 27.5 each; per-zone rounding gives 56,
        // a single rounding of 5 m² would give 55.
        let wall = calculate_two_zone_wall(2.5, 1.0, 2.5, 1.0, stone("abmessung_1"));
        assert_eq!(wall.zone_breakdown.zone1.stones, 28);
        assert_eq!(wall.zone_breakdown.zone2.stones, 28);
        assert_eq!(wall.total_stones, 56);
        assert_eq!(stones_for_area(wall.total_area_m2, stone("abmessung_1")), 55);
    }

    #[test]
    fn test_two_zone_equal_heights() {
        let wall = calculate_two_zone_wall(4.0, 1.5, 4.0, 1.5, stone("abmessung_1"));
        assert_eq!(wall.zone_breakdown.zone1.area_m2, 6.0);
        assert_eq!(wall.zone_breakdown.zone2.area_m2, 6.0);
        assert_eq!(wall.zone_breakdown.zone2.avg_height_m, 1.5);
    }
}
