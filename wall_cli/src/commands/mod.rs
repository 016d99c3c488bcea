//! Subcommand implementations and the argument groups they share.

pub mod calc;
pub mod catalog;
pub mod export;
pub mod interactive;
pub mod layout;
pub mod stones;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use tracing::debug;
use wall_core::calculations::{PriceInput, WallInput, WallSpec};
use wall_core::catalog::Catalog;

/// State shared by every subcommand.
pub struct Context {
    pub catalog: Catalog,
    /// Print machine-readable JSON instead of text
    pub json: bool,
}

impl Context {
    /// Load the catalog from `path`, or use the built-in one.
    pub fn new(catalog_path: Option<&Path>, json: bool) -> Result<Self> {
        let catalog = match catalog_path {
            Some(path) => wall_core::load_catalog(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?,
            None => {
                debug!("using built-in catalog");
                Catalog::builtin().clone()
            }
        };
        Ok(Context { catalog, json })
    }

    /// Pretty JSON to stdout.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Options common to every wall calculation.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Name shown in reports
    #[arg(long)]
    pub label: Option<String>,

    /// Wall width in cm [default: catalog default]
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Stone type identifier [default: catalog default stone]
    #[arg(short, long)]
    pub stone: Option<String>,

    /// Soil is backfilled against the wall
    #[arg(long)]
    pub backfilled: bool,

    /// Calculate costs with the catalog's default prices
    #[arg(long)]
    pub prices: bool,

    /// Cement price per bag (€); implies --prices
    #[arg(long)]
    pub cement_price: Option<f64>,

    /// Gravel price per tonne (€); implies --prices
    #[arg(long)]
    pub gravel_price: Option<f64>,

    /// Stone price per piece (€, net); implies --prices
    #[arg(long)]
    pub stone_price: Option<f64>,

    /// Price per rebar rod (€); implies --prices
    #[arg(long)]
    pub rebar_price: Option<f64>,
}

impl CommonArgs {
    fn wants_prices(&self) -> bool {
        self.prices
            || self.cement_price.is_some()
            || self.gravel_price.is_some()
            || self.stone_price.is_some()
            || self.rebar_price.is_some()
    }

    fn price_input(&self, catalog: &Catalog) -> Option<PriceInput> {
        if !self.wants_prices() {
            return None;
        }
        let defaults = PriceInput::from_defaults(&catalog.prices, &catalog.reinforcement_steel);
        Some(PriceInput {
            cement_per_bag: self.cement_price.unwrap_or(defaults.cement_per_bag),
            gravel_per_ton: self.gravel_price.unwrap_or(defaults.gravel_per_ton),
            stone_per_piece: self.stone_price.or(defaults.stone_per_piece),
            rebar_per_rod: self.rebar_price.or(defaults.rebar_per_rod),
        })
    }

    /// Build an input for `spec`, filling gaps from the catalog.
    pub fn build(&self, spec: WallSpec, catalog: &Catalog) -> Result<WallInput> {
        let stone_type = match &self.stone {
            Some(id) => id.clone(),
            None => catalog
                .default_stone()
                .map(|(id, _)| id.to_string())
                .context("catalog has no stone types")?,
        };
        let input = WallInput {
            label: self.label.clone().unwrap_or_default(),
            spec,
            width_cm: self.width.unwrap_or(catalog.defaults.wall_width_cm),
            stone_type,
            backfilled: self.backfilled,
            prices: None,
        };
        Ok(self.apply(input, catalog))
    }

    /// Override fields of an existing input with the given options.
    pub fn apply(&self, mut input: WallInput, catalog: &Catalog) -> WallInput {
        if let Some(label) = &self.label {
            input.label = label.clone();
        }
        if let Some(width) = self.width {
            input.width_cm = width;
        }
        if let Some(stone) = &self.stone {
            input.stone_type = stone.clone();
        }
        input.backfilled |= self.backfilled;
        if let Some(prices) = self.price_input(catalog) {
            input.prices = Some(prices);
        }
        input
    }
}

/// Dimensions of a simple wall.
#[derive(Args, Debug, Clone, Default)]
pub struct SimpleArgs {
    /// Wall length in m [default: catalog default]
    #[arg(short, long)]
    pub length: Option<f64>,

    /// Height at the start in m [default: catalog default]
    #[arg(long)]
    pub start_height: Option<f64>,

    /// Height at the end in m [default: start height]
    #[arg(long)]
    pub end_height: Option<f64>,
}

impl SimpleArgs {
    pub fn spec(&self, catalog: &Catalog) -> WallSpec {
        let defaults = &catalog.defaults;
        let start = self.start_height.unwrap_or(defaults.wall_start_height_m);
        let end = self
            .end_height
            .or(self.start_height)
            .unwrap_or(defaults.wall_end_height_m);
        WallSpec::simple(self.length.unwrap_or(defaults.wall_length_m), start, end)
    }
}

/// Where a wall description comes from: a JSON file, a template, or
/// command-line dimensions of a simple wall.
#[derive(Args, Debug, Clone, Default)]
pub struct WallSource {
    /// Read a wall input (JSON) from this file
    #[arg(long, conflicts_with = "template")]
    pub input: Option<PathBuf>,

    /// Start from a catalog template
    #[arg(short, long)]
    pub template: Option<String>,

    #[command(flatten)]
    pub simple: SimpleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl WallSource {
    pub fn resolve(&self, catalog: &Catalog) -> Result<WallInput> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
            let input: WallInput =
                serde_json::from_str(&text).with_context(|| format!("invalid wall input in {}", path.display()))?;
            return Ok(self.common.apply(input, catalog));
        }
        if let Some(key) = &self.template {
            let input = WallInput::from_template(catalog, key)?;
            return Ok(self.common.apply(input, catalog));
        }
        self.common.build(self.simple.spec(catalog), catalog)
    }
}
