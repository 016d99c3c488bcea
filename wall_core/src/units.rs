//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the wall calculator mixes:
//! the catalog records stone dimensions in centimetres and fill volumes in
//! litres, while wall geometry and concrete volumes are metres and cubic
//! metres. Conversions happen here and nowhere else.
//!
//! ## Example
//!
//! ```rust
//! use wall_core::units::{Centimeters, Meters, Liters, CubicMeters};
//!
//! let stone_height: Meters = Centimeters(24.8).into();
//! assert!((stone_height.0 - 0.248).abs() < 1e-12);
//!
//! let fill: CubicMeters = Liters(2091.0).into();
//! assert!((fill.0 - 2.091).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in litres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<Liters> for CubicMeters {
    fn from(l: Liters) -> Self {
        CubicMeters(l.0 / 1000.0)
    }
}

impl From<CubicMeters> for Liters {
    fn from(m3: CubicMeters) -> Self {
        Liters(m3.0 * 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Liters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Tonnes);

// ============================================================================
// Rounding
// ============================================================================

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a tonnage up to the next tenth, working at 100 kg granularity.
pub fn ceil_to_tenth_tonne(kg: Kilograms) -> Tonnes {
    Tonnes((kg.0 / 100.0).ceil() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centimeters_to_meters() {
        let m: Meters = Centimeters(36.0).into();
        assert!((m.0 - 0.36).abs() < 1e-12);
        let back: Centimeters = m.into();
        assert!((back.0 - 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_liters_to_cubic_meters() {
        let m3: CubicMeters = (Liters(20.91) * 100.0).into();
        assert!((m3.0 - 2.091).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(5.0);
        let b = Meters(2.5);
        assert_eq!((a + b).0, 7.5);
        assert_eq!((a - b).0, 2.5);
        assert_eq!((a * 2.0).0, 10.0);
        assert_eq!((a / 2.0).0, 2.5);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.40465, 3), 2.405);
        assert_eq!(round_to(47.499, 2), 47.5);
        assert_eq!(round_to(12.0, 1), 12.0);
    }

    #[test]
    fn test_ceil_to_tenth_tonne() {
        assert_eq!(ceil_to_tenth_tonne(Kilograms(1250.0)).0, 1.3);
        assert_eq!(ceil_to_tenth_tonne(Kilograms(1200.0)).0, 1.2);
        assert_eq!(ceil_to_tenth_tonne(Kilograms(1.0)).0, 0.1);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(12.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
