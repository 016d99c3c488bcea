//! # Height Warnings
//!
//! Advisory messages that never block a calculation. They are appended to
//! the result's warning list for the front end to show.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::WarningThresholds;

/// One advisory warning about wall height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum HeightWarning {
    /// Freestanding wall taller than the catalog limit
    FreestandingLimitExceeded { limit_m: f64 },
    /// Backfilled wall taller than the catalog limit
    BackfilledLimitExceeded { limit_m: f64 },
    /// Tall enough that steel reinforcement is advisable
    ReinforcementRecommended { threshold_m: f64 },
}

impl fmt::Display for HeightWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightWarning::FreestandingLimitExceeded { limit_m } => write!(
                f,
                "Maximum height for freestanding walls ({} m) exceeded! A structural calculation is required.",
                limit_m
            ),
            HeightWarning::BackfilledLimitExceeded { limit_m } => write!(
                f,
                "Maximum height for backfilled walls ({} m) exceeded! A structural calculation is required.",
                limit_m
            ),
            HeightWarning::ReinforcementRecommended { threshold_m } => write!(
                f,
                "Reinforcement is recommended for heights above {} m. Consult a professional!",
                threshold_m
            ),
        }
    }
}

/// Collect the height warnings for a wall.
///
/// The applicable limit (backfilled or freestanding) is checked first, then
/// the reinforcement advice.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::warnings::get_height_warnings;
/// use wall_core::catalog::Catalog;
///
/// let thresholds = &Catalog::builtin().warnings;
/// assert!(get_height_warnings(0.8, 0.8, false, thresholds).is_empty());
/// assert_eq!(get_height_warnings(2.5, 2.0, false, thresholds).len(), 2);
/// ```
pub fn get_height_warnings(
    start_height_m: f64,
    end_height_m: f64,
    backfilled: bool,
    thresholds: &WarningThresholds,
) -> Vec<HeightWarning> {
    let max_height = start_height_m.max(end_height_m);
    let mut warnings = Vec::new();

    if backfilled {
        if max_height > thresholds.max_height_backfilled_m {
            warnings.push(HeightWarning::BackfilledLimitExceeded {
                limit_m: thresholds.max_height_backfilled_m,
            });
        }
    } else if max_height > thresholds.max_height_freestanding_m {
        warnings.push(HeightWarning::FreestandingLimitExceeded {
            limit_m: thresholds.max_height_freestanding_m,
        });
    }

    if max_height > thresholds.reinforcement_advice_height_m {
        warnings.push(HeightWarning::ReinforcementRecommended {
            threshold_m: thresholds.reinforcement_advice_height_m,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn thresholds() -> &'static WarningThresholds {
        &Catalog::builtin().warnings
    }

    #[test]
    fn test_low_wall_has_no_warnings() {
        assert!(get_height_warnings(0.8, 0.8, false, thresholds()).is_empty());
    }

    #[test]
    fn test_exactly_one_meter_has_no_warnings() {
        assert!(get_height_warnings(1.0, 1.0, false, thresholds()).is_empty());
    }

    #[test]
    fn test_above_one_meter_recommends_reinforcement() {
        let warnings = get_height_warnings(1.5, 1.0, false, thresholds());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].to_string().contains("Reinforcement"));
    }

    #[test]
    fn test_freestanding_limit() {
        let warnings = get_height_warnings(2.5, 2.0, false, thresholds());
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], HeightWarning::FreestandingLimitExceeded { limit_m: 2.0 });
        assert!(warnings[0].to_string().contains("(2 m)"));
    }

    #[test]
    fn test_backfilled_limit() {
        let warnings = get_height_warnings(1.5, 1.2, true, thresholds());
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.to_string().contains("1.3")));
    }

    #[test]
    fn test_backfilled_ignores_freestanding_limit() {
        // 1.2 m stays under the 1.3 m backfilled limit
        let warnings = get_height_warnings(1.2, 1.2, true, thresholds());
        assert_eq!(warnings, vec![HeightWarning::ReinforcementRecommended { threshold_m: 1.0 }]);
    }
}
