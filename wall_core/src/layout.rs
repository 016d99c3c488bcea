//! # Stone Layout
//!
//! Expands the continuous wall description into discrete stone positions
//! for rendering front ends (2-D elevation or 3-D cuboids).
//!
//! ## Rules
//!
//! - Courses alternate a half-stone offset (running bond): odd courses,
//!   counted from zero at the bottom, start half a stone to the left.
//! - Each stone segment is clipped to `[0, total_length]`; segments fully
//!   outside are dropped.
//! - The permissible height at `x` is interpolated linearly from the start
//!   height to the end height. A stone is placed only if its course bottom
//!   lies below the permissible height at the segment midpoint.
//! - Expansion stops after [`LayoutLimits::max_rendered_stones`] elements.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::calculations::WallSpec;
//! use wall_core::catalog::Catalog;
//! use wall_core::layout::{expand_to_grid, get_stone_layout};
//!
//! let catalog = Catalog::builtin();
//! let stone = catalog.stone("abmessung_1").unwrap();
//! let spec = WallSpec::simple(10.0, 2.0, 2.0);
//!
//! let layout = get_stone_layout(&spec, stone);
//! assert_eq!(layout.stones_per_row, 28);
//! assert_eq!(layout.rows_start, 9);
//!
//! let grid = expand_to_grid(&layout, 0.365, &catalog.layout);
//! assert!(grid.stone_count <= catalog.layout.max_rendered_stones);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::WallSpec;
use crate::catalog::{LayoutLimits, StoneType};

/// Zone dimensions echoed for two-zone walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub zone1_length_m: f64,
    pub zone1_height_m: f64,
    pub zone2_length_m: f64,
    pub zone2_end_height_m: f64,
}

/// Summary dimensions of the stone layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneLayout {
    pub stone_length_m: f64,
    pub stone_width_m: f64,
    pub stone_height_m: f64,
    /// Stones along the wall, rounded up
    pub stones_per_row: u32,
    /// Courses at the start of the wall
    pub rows_start: u32,
    /// Courses at the end of the wall
    pub rows_end: u32,
    pub total_length_m: f64,
    pub start_height_m: f64,
    pub end_height_m: f64,
    /// Present for two-zone walls only
    pub zones: Option<ZoneLayout>,
}

impl StoneLayout {
    /// Courses at the taller end
    pub fn max_rows(&self) -> u32 {
        self.rows_start.max(self.rows_end)
    }

    /// Height drop per metre of length (negative for a rising wall)
    pub fn slope(&self) -> f64 {
        if self.total_length_m > 0.0 {
            (self.start_height_m - self.end_height_m) / self.total_length_m
        } else {
            0.0
        }
    }

    /// Permissible wall height at horizontal position `x_m`
    pub fn height_at(&self, x_m: f64) -> f64 {
        self.start_height_m - self.slope() * x_m
    }

    /// Upper bound on stone elements, used for view advice
    pub fn estimated_stones(&self) -> usize {
        self.stones_per_row as usize * self.max_rows() as usize
    }
}

/// Compute the layout summary for a wall.
pub fn get_stone_layout(spec: &WallSpec, stone: &StoneType) -> StoneLayout {
    let wall = spec.normalized();
    let stone_length_m = stone.length_m();
    let stone_height_m = stone.height_m();

    let zones = match *spec {
        WallSpec::Simple { .. } => None,
        WallSpec::TwoZone {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        } => Some(ZoneLayout {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        }),
    };

    StoneLayout {
        stone_length_m,
        stone_width_m: stone.width_m(),
        stone_height_m,
        stones_per_row: (wall.length_m / stone_length_m).ceil() as u32,
        rows_start: (wall.start_height_m / stone_height_m).ceil() as u32,
        rows_end: (wall.end_height_m / stone_height_m).ceil() as u32,
        total_length_m: wall.length_m,
        start_height_m: wall.start_height_m,
        end_height_m: wall.end_height_m,
        zones,
    }
}

/// One placed stone (a rectangle in elevation, a cuboid in 3-D).
///
/// `x_m` runs along the wall, `z_m` is the course bottom and `y_m` the front
/// face. 2-D consumers ignore `y_m` and `depth_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoneBlock {
    pub row: u32,
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
    /// Visible length after clipping
    pub length_m: f64,
    pub height_m: f64,
    pub depth_m: f64,
}

impl StoneBlock {
    pub fn x_end_m(&self) -> f64 {
        self.x_m + self.length_m
    }
}

/// One course of placed stones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub row: u32,
    /// Leftward running-bond shift of this course
    pub offset_m: f64,
    pub bottom_m: f64,
    pub blocks: Vec<StoneBlock>,
}

/// Full placement grid handed to rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGrid {
    pub layout: StoneLayout,
    /// Cuboid depth, normally the wall width
    pub depth_m: f64,
    /// Non-empty courses, bottom first
    pub courses: Vec<Course>,
    pub stone_count: usize,
    /// Expansion hit the element limit
    pub truncated: bool,
    pub estimated_stones: usize,
    /// Renderers should favour a 2-D view
    pub prefer_2d: bool,
}

impl LayoutGrid {
    /// Iterate all placed stones, bottom course first
    pub fn blocks(&self) -> impl Iterator<Item = &StoneBlock> {
        self.courses.iter().flat_map(|course| course.blocks.iter())
    }

    /// Advisory text for renderers when the wall is large
    pub fn view_advice(&self) -> Option<String> {
        self.prefer_2d.then(|| {
            format!(
                "The wall has about {} stones. A 3-D view may load slowly for walls this large; the 2-D view is much faster.",
                self.estimated_stones
            )
        })
    }
}

/// Whether a 2-D view should be preferred, with the estimated stone count.
pub fn should_prefer_2d(layout: &StoneLayout, limits: &LayoutLimits) -> (bool, usize) {
    let estimated = layout.estimated_stones();
    (estimated > limits.detail_view_stone_limit, estimated)
}

/// Expand a layout into placed stones.
pub fn expand_to_grid(layout: &StoneLayout, depth_m: f64, limits: &LayoutLimits) -> LayoutGrid {
    let stone_length = layout.stone_length_m;
    let stone_height = layout.stone_height_m;
    let total_length = layout.total_length_m;

    let mut courses = Vec::new();
    let mut stone_count = 0usize;
    let mut truncated = false;

    'rows: for row in 0..layout.max_rows() {
        let bottom = f64::from(row) * stone_height;
        let offset = if row % 2 == 1 { stone_length / 2.0 } else { 0.0 };
        let mut blocks = Vec::new();

        // one extra slot covers the stone pushed in by the offset
        for idx in 0..=layout.stones_per_row {
            let mut x_start = f64::from(idx) * stone_length - offset;
            let mut x_end = x_start + stone_length;
            if x_start >= total_length || x_end <= 0.0 {
                continue;
            }
            x_start = x_start.max(0.0);
            x_end = x_end.min(total_length);

            let x_mid = (x_start + x_end) / 2.0;
            if bottom >= layout.height_at(x_mid) {
                continue;
            }

            if stone_count >= limits.max_rendered_stones {
                truncated = true;
                if !blocks.is_empty() {
                    courses.push(Course { row, offset_m: offset, bottom_m: bottom, blocks });
                }
                break 'rows;
            }

            blocks.push(StoneBlock {
                row,
                x_m: x_start,
                y_m: 0.0,
                z_m: bottom,
                length_m: x_end - x_start,
                height_m: stone_height,
                depth_m,
            });
            stone_count += 1;
        }

        if !blocks.is_empty() {
            courses.push(Course { row, offset_m: offset, bottom_m: bottom, blocks });
        }
    }

    if truncated {
        warn!(
            limit = limits.max_rendered_stones,
            "stone layout truncated at the rendering limit"
        );
    }

    let (prefer_2d, estimated_stones) = should_prefer_2d(layout, limits);
    debug!(stone_count, courses = courses.len(), prefer_2d, "expanded stone layout");

    LayoutGrid {
        layout: *layout,
        depth_m,
        courses,
        stone_count,
        truncated,
        estimated_stones,
        prefer_2d,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    /// 50 × 20 × 25 cm block, exact in binary
    fn even_stone() -> StoneType {
        StoneType {
            name: "Even".to_string(),
            length_cm: 50.0,
            width_cm: 20.0,
            height_cm: 25.0,
            weight_kg: 15.0,
            stones_per_m2: 8.0,
            fill_volume_per_m2_liters: 88.0,
            fill_volume_per_stone_liters: 11.0,
            default: false,
        }
    }

    fn grid(spec: WallSpec, limits: &LayoutLimits) -> LayoutGrid {
        let layout = get_stone_layout(&spec, &even_stone());
        expand_to_grid(&layout, 0.2, limits)
    }

    #[test]
    fn test_layout_straight_wall() {
        let stone = Catalog::builtin().stone("abmessung_1").unwrap();
        let layout = get_stone_layout(&WallSpec::simple(10.0, 2.0, 2.0), stone);
        assert_eq!(layout.total_length_m, 10.0);
        assert_eq!(layout.start_height_m, 2.0);
        assert_eq!(layout.end_height_m, 2.0);
        assert_eq!(layout.stone_length_m, 0.36);
        assert_eq!(layout.stone_height_m, 0.248);
        // ceil(10 / 0.36) = 28, ceil(2.0 / 0.248) = 9
        assert_eq!(layout.stones_per_row, 28);
        assert_eq!(layout.rows_start, 9);
        assert_eq!(layout.rows_end, 9);
        assert!(layout.zones.is_none());
    }

    #[test]
    fn test_running_bond_and_clipping() {
        let grid = grid(WallSpec::simple(2.0, 0.5, 0.5), &LayoutLimits::default());
        assert_eq!(grid.courses.len(), 2);

        let first = &grid.courses[0];
        assert_eq!(first.blocks.len(), 4);
        assert_eq!(first.blocks[0].x_m, 0.0);
        assert_eq!(first.blocks[3].x_end_m(), 2.0);

        let second = &grid.courses[1];
        assert_eq!(second.offset_m, 0.25);
        assert_eq!(second.blocks.len(), 5);
        // half stones at both edges
        assert_eq!(second.blocks[0].x_m, 0.0);
        assert_eq!(second.blocks[0].length_m, 0.25);
        assert_eq!(second.blocks[4].x_m, 1.75);
        assert_eq!(second.blocks[4].x_end_m(), 2.0);
        assert_eq!(second.bottom_m, 0.25);

        assert_eq!(grid.stone_count, 9);
        assert!(!grid.truncated);
        assert!(grid.blocks().all(|b| b.x_m >= 0.0 && b.x_end_m() <= 2.0));
    }

    #[test]
    fn test_sloped_wall_steps_down() {
        // height(x) = 0.75 - 0.25 x
        let grid = grid(WallSpec::simple(2.0, 0.75, 0.25), &LayoutLimits::default());
        let counts: Vec<usize> = grid.courses.iter().map(|c| c.blocks.len()).collect();
        assert_eq!(counts, vec![4, 5, 2]);
        assert_eq!(grid.stone_count, 11);
        assert!(grid.courses[2].blocks.iter().all(|b| b.x_end_m() <= 1.0));
    }

    #[test]
    fn test_rising_wall_mirrors() {
        let grid = grid(WallSpec::simple(2.0, 0.25, 0.75), &LayoutLimits::default());
        let top = grid.courses.last().unwrap();
        assert_eq!(top.row, 2);
        assert!(top.blocks.iter().all(|b| b.x_m >= 1.0));
    }

    #[test]
    fn test_element_guard_truncates() {
        let limits = LayoutLimits {
            max_rendered_stones: 5,
            detail_view_stone_limit: 500,
        };
        let grid = grid(WallSpec::simple(2.0, 0.5, 0.5), &limits);
        assert_eq!(grid.stone_count, 5);
        assert!(grid.truncated);
        assert_eq!(grid.courses.len(), 2);
        assert_eq!(grid.courses[1].blocks.len(), 1);
    }

    #[test]
    fn test_guard_at_exact_count_is_not_truncation() {
        let limits = LayoutLimits {
            max_rendered_stones: 9,
            detail_view_stone_limit: 500,
        };
        let grid = grid(WallSpec::simple(2.0, 0.5, 0.5), &limits);
        assert_eq!(grid.stone_count, 9);
        assert!(!grid.truncated);
    }

    #[test]
    fn test_prefer_2d_for_large_walls() {
        let stone = Catalog::builtin().stone("abmessung_1").unwrap();
        let limits = LayoutLimits::default();

        let small = get_stone_layout(&WallSpec::simple(5.0, 1.0, 1.0), stone);
        assert_eq!(should_prefer_2d(&small, &limits), (false, 14 * 5));

        // 28 per row * 21 courses = 588
        let large = get_stone_layout(&WallSpec::simple(10.0, 5.0, 5.0), stone);
        let (prefer, estimated) = should_prefer_2d(&large, &limits);
        assert!(prefer);
        assert_eq!(estimated, 588);

        let grid = expand_to_grid(&large, 0.365, &limits);
        assert!(grid.view_advice().unwrap().contains("588"));
    }

    #[test]
    fn test_two_zone_layout_info() {
        let stone = Catalog::builtin().stone("abmessung_1").unwrap();
        let layout = get_stone_layout(&WallSpec::two_zone(3.5, 1.3, 4.5, 3.3), stone);
        let zones = layout.zones.unwrap();
        assert_eq!(zones.zone1_length_m, 3.5);
        assert_eq!(zones.zone2_length_m, 4.5);
        assert_eq!(zones.zone1_height_m, 1.3);
        assert_eq!(zones.zone2_end_height_m, 3.3);
        assert_eq!(layout.total_length_m, 8.0);
        assert_eq!(layout.start_height_m, 1.3);
        assert_eq!(layout.end_height_m, 3.3);
    }
}
