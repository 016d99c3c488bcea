//! # Reports
//!
//! Renderings of a finished [`crate::calculations::CalculationResult`]. They
//! only read the result; nothing here feeds back into the calculation.
//!
//! - [`shopping_list`] - numbered purchase list with totals
//! - [`export_text`] - complete plain-text summary
//! - [`render_wall_pdf`] - A4 PDF report via Typst

pub mod pdf;
pub mod text;

pub use pdf::render_wall_pdf;
pub use text::{export_text, shopping_list};
