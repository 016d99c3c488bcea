//! # wall_core - Hollow-Block Wall Calculation Engine
//!
//! `wall_core` derives material quantities for a masonry wall built from
//! hollow-core blocks that are filled with concrete: stones, fill volume,
//! cement, gravel, water, reinforcing steel and costs. It also discretizes
//! the wall into stone courses for rendering.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculation is a pure function of its input and
//!   the catalog passed in
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: validation errors name the offending field
//!
//! ## Quick Start
//!
//! ```rust
//! use wall_core::{calculate_wall, Catalog, PriceInput, WallInput, WallSpec};
//!
//! let catalog = Catalog::builtin();
//! let prices = PriceInput::from_defaults(&catalog.prices, &catalog.reinforcement_steel);
//! let input = WallInput::new("Garden", WallSpec::simple(10.0, 1.0, 1.0), 36.5, "abmessung_1")
//!     .with_prices(prices);
//!
//! let result = calculate_wall(&input, catalog).unwrap();
//! assert_eq!(result.total_stones, 110);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"total_stones\": 110"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - geometry, volume, materials, reinforcement, costs, warnings
//! - [`catalog`] - stone types, mix ratio, prices, templates (reference data)
//! - [`layout`] - stone course layout for 2-D/3-D rendering
//! - [`report`] - shopping list, text export, PDF
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types
//! - [`file_io`] - catalog files with atomic saves and version checks

pub mod calculations;
pub mod catalog;
pub mod errors;
#[cfg(not(target_arch = "wasm32"))]
pub mod file_io;
pub mod layout;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_wall, CalculationResult, PriceInput, WallInput, WallSpec};
pub use catalog::{Catalog, StoneType, WallTemplate};
pub use errors::{CalcError, CalcResult};
#[cfg(not(target_arch = "wasm32"))]
pub use file_io::{load_catalog, save_catalog};
pub use layout::{expand_to_grid, get_stone_layout, LayoutGrid, StoneLayout};
