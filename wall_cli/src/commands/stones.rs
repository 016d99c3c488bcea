//! Catalog listings: stone types and wall templates.

use anyhow::Result;

use super::Context;

pub fn execute_stones(ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    if ctx.json {
        return ctx.print_json(&catalog.stone_types);
    }

    println!("{:<14} {:<20} {:<28} {:>8} {:>10}", "ID", "NAME", "DIMENSIONS", "PER m²", "FILL (L)");
    for (id, stone) in &catalog.stone_types {
        let marker = if stone.default { " *" } else { "" };
        println!(
            "{:<14} {:<20} {:<28} {:>8} {:>10}{}",
            id,
            stone.name,
            stone.dimensions_label(),
            stone.stones_per_m2,
            stone.fill_volume_per_stone_liters,
            marker
        );
    }
    println!();
    println!("* default stone. Minimum wall width: {} cm", catalog.warnings.min_width_cm);
    Ok(())
}

pub fn execute_templates(ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    if ctx.json {
        return ctx.print_json(&catalog.templates);
    }
    if catalog.templates.is_empty() {
        println!("The catalog has no templates.");
        return Ok(());
    }

    for (key, template) in &catalog.templates {
        println!("{} - {}", key, template.name);
        println!("    {}", template.description);
        println!(
            "    {} m long, {} m -> {} m high, {} cm wide, stone {}",
            template.wall_length_m,
            template.wall_start_height_m,
            template.wall_end_height_m,
            template.wall_width_cm,
            template.stone_type
        );
    }
    Ok(())
}
