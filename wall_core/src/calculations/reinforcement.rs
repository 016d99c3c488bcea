//! # Reinforcement Estimate
//!
//! Decides whether a wall needs steel and how many stock rods to buy.
//!
//! Every course is assumed to carry `rods_per_row` rods over the full wall
//! length, including courses below the height threshold. This is a
//! deliberate simplification, not a structural design.

use serde::{Deserialize, Serialize};

use crate::catalog::ReinforcementRule;
use crate::units::round_to;

/// Steel needed for one wall.
///
/// ## JSON Example
///
/// ```json
/// {
///   "rows": 5,
///   "rods_per_row": 2,
///   "total_rods_needed": 10,
///   "total_length_m": 50.0,
///   "rod_length_m": 6.0,
///   "rods_6m_needed": 9,
///   "diameter_mm": 8.0,
///   "price_per_rod": 4.5,
///   "cost": 40.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementPlan {
    pub rows: u32,
    pub rods_per_row: u32,
    /// Rod runs across all courses
    pub total_rods_needed: u32,
    /// Running metres of steel, two decimals
    pub total_length_m: f64,
    /// Stock length the rods are bought in
    pub rod_length_m: f64,
    /// Stock rods to buy
    pub rods_6m_needed: u32,
    pub diameter_mm: f64,
    pub price_per_rod: f64,
    /// Rod cost, two decimals
    pub cost: f64,
}

/// Plan reinforcement for a wall, or `None` when it is lower than the
/// rule's minimum height.
///
/// Counts saturate at `u32::MAX`; [`calculate_wall`](super::calculate_wall)
/// rejects walls that would reach it.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::reinforcement::calculate_reinforcement;
/// use wall_core::catalog::Catalog;
///
/// let rule = &Catalog::builtin().reinforcement_steel;
/// assert!(calculate_reinforcement(4, 5.0, 0.9, rule, rule.price_per_rod_eur).is_none());
///
/// let plan = calculate_reinforcement(5, 5.0, 1.0, rule, rule.price_per_rod_eur).unwrap();
/// assert_eq!(plan.rods_6m_needed, 9);
/// ```
pub fn calculate_reinforcement(
    rows: u32,
    wall_length_m: f64,
    max_height_m: f64,
    rule: &ReinforcementRule,
    price_per_rod: f64,
) -> Option<ReinforcementPlan> {
    if max_height_m < rule.min_height_m {
        return None;
    }

    let total_rods_needed = rows.saturating_mul(rule.rods_per_row);
    let total_length_m = wall_length_m * f64::from(rows) * f64::from(rule.rods_per_row);
    let rods_6m_needed = (total_length_m / rule.rod_length_m).ceil() as u32;

    Some(ReinforcementPlan {
        rows,
        rods_per_row: rule.rods_per_row,
        total_rods_needed,
        total_length_m: round_to(total_length_m, 2),
        rod_length_m: rule.rod_length_m,
        rods_6m_needed,
        diameter_mm: rule.diameter_mm,
        price_per_rod,
        cost: round_to(f64::from(rods_6m_needed) * price_per_rod, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn rule() -> &'static ReinforcementRule {
        &Catalog::builtin().reinforcement_steel
    }

    #[test]
    fn test_below_threshold_has_no_plan() {
        assert!(calculate_reinforcement(4, 5.0, 0.9, rule(), 4.5).is_none());
    }

    #[test]
    fn test_at_threshold_has_plan() {
        assert!(calculate_reinforcement(5, 5.0, 1.0, rule(), 4.5).is_some());
    }

    #[test]
    fn test_rod_counts() {
        let plan = calculate_reinforcement(5, 5.0, 1.2, rule(), 4.5).unwrap();
        assert_eq!(plan.total_rods_needed, 10);
        // 5 m * 5 courses * 2 rods = 50 m -> 50 / 6 = 8.33 -> 9 rods
        assert_eq!(plan.total_length_m, 50.0);
        assert_eq!(plan.rods_6m_needed, 9);
        assert_eq!(plan.cost, 40.5);
        assert_eq!(plan.diameter_mm, 8.0);
    }

    #[test]
    fn test_huge_course_count_saturates() {
        let plan = calculate_reinforcement(u32::MAX, 1.0, 2.0, rule(), 4.5).unwrap();
        assert_eq!(plan.total_rods_needed, u32::MAX);
    }

    #[test]
    fn test_custom_rule() {
        let custom = ReinforcementRule {
            min_height_m: 0.5,
            rods_per_row: 3,
            rod_length_m: 12.0,
            diameter_mm: 10.0,
            price_per_rod_eur: 9.0,
        };
        let plan = calculate_reinforcement(2, 4.0, 0.6, &custom, 9.0).unwrap();
        assert_eq!(plan.total_rods_needed, 6);
        assert_eq!(plan.total_length_m, 24.0);
        assert_eq!(plan.rods_6m_needed, 2);
        assert_eq!(plan.cost, 18.0);
    }
}
