//! Wall calculations: simple walls, two-zone walls and templates.

use anyhow::Result;
use clap::Args;
use tracing::info;
use wall_core::calculations::{calculate_wall, CalculationResult, WallInput, WallSpec};
use wall_core::report::export_text;

use super::{CommonArgs, Context, SimpleArgs};

/// Simple (single-zone) wall
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub simple: SimpleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Flat zone followed by a sloped zone
#[derive(Args, Debug)]
pub struct TwoZoneArgs {
    /// Length of the flat zone 1 in m
    #[arg(long)]
    pub zone1_length: f64,

    /// Height of zone 1 in m (also where zone 2 starts)
    #[arg(long)]
    pub zone1_height: f64,

    /// Length of the sloped zone 2 in m
    #[arg(long)]
    pub zone2_length: f64,

    /// Height at the end of zone 2 in m
    #[arg(long)]
    pub zone2_end_height: f64,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Calculate a catalog template
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template key, see `templates`
    pub key: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn execute_calc(args: CalcArgs, ctx: &Context) -> Result<()> {
    let input = args.common.build(args.simple.spec(&ctx.catalog), &ctx.catalog)?;
    run(&input, ctx)
}

pub fn execute_two_zone(args: TwoZoneArgs, ctx: &Context) -> Result<()> {
    let spec = WallSpec::two_zone(
        args.zone1_length,
        args.zone1_height,
        args.zone2_length,
        args.zone2_end_height,
    );
    let input = args.common.build(spec, &ctx.catalog)?;
    run(&input, ctx)
}

pub fn execute_template(args: TemplateArgs, ctx: &Context) -> Result<()> {
    let input = WallInput::from_template(&ctx.catalog, &args.key)?;
    let input = args.common.apply(input, &ctx.catalog);
    run(&input, ctx)
}

fn run(input: &WallInput, ctx: &Context) -> Result<()> {
    let result = calculate_wall(input, &ctx.catalog)?;
    info!(stones = result.total_stones, "calculation complete");

    if ctx.json {
        return ctx.print_json(&without_courses(&result));
    }
    print!("{}", export_text(&result));
    if let Some(advice) = result.layout.view_advice() {
        println!();
        println!("Note: {}", advice);
    }
    Ok(())
}

/// The result with the per-stone grid dropped; `layout` prints it on request.
pub fn without_courses(result: &CalculationResult) -> CalculationResult {
    let mut trimmed = result.clone();
    trimmed.layout.courses.clear();
    trimmed
}
