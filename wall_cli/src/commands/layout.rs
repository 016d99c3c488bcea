//! Stone layout summary and course listing.

use anyhow::Result;
use clap::Args;
use wall_core::layout::{expand_to_grid, get_stone_layout};
use wall_core::units::{Centimeters, Meters};

use super::{Context, WallSource};

#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: WallSource,

    /// List every course with its stone positions
    #[arg(long)]
    pub courses: bool,
}

pub fn execute(args: LayoutArgs, ctx: &Context) -> Result<()> {
    let input = args.source.resolve(&ctx.catalog)?;
    let stone = input.validate(&ctx.catalog)?;

    let layout = get_stone_layout(&input.spec, stone);
    let depth = Meters::from(Centimeters(input.width_cm)).value();
    let grid = expand_to_grid(&layout, depth, &ctx.catalog.layout);

    if ctx.json {
        return ctx.print_json(&grid);
    }

    println!("Stone:            {} ({} m x {} m)", stone.name, layout.stone_length_m, layout.stone_height_m);
    println!("Wall:             {:.2} m, {:.2} m -> {:.2} m", layout.total_length_m, layout.start_height_m, layout.end_height_m);
    println!("Stones per row:   {}", layout.stones_per_row);
    println!("Courses:          {} at start, {} at end", layout.rows_start, layout.rows_end);
    println!("Placed stones:    {} in {} courses", grid.stone_count, grid.courses.len());
    if grid.truncated {
        println!(
            "                  [truncated at {} stones]",
            ctx.catalog.layout.max_rendered_stones
        );
    }
    if let Some(advice) = grid.view_advice() {
        println!("Note: {}", advice);
    }

    if args.courses {
        println!();
        for course in grid.courses.iter().rev() {
            let spans: Vec<String> = course
                .blocks
                .iter()
                .map(|b| format!("{:.2}-{:.2}", b.x_m, b.x_end_m()))
                .collect();
            println!("{:>3} @ {:.3} m: {}", course.row, course.bottom_m, spans.join(" "));
        }
    }
    Ok(())
}
