//! Prompted wall entry with catalog defaults.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use wall_core::calculations::{calculate_wall, PriceInput, WallInput, WallSpec};
use wall_core::report::{export_text, shopping_list};

use super::Context;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(&format!("{} [{}]: ", prompt, default))
        .and_then(|s| s.replace(',', ".").parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    read_line(&format!("{} [{}]: ", prompt, default)).unwrap_or_else(|| default.to_string())
}

fn prompt_yes(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    match read_line(&format!("{} [{}]: ", prompt, hint)) {
        Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes" | "j" | "ja"),
        None => default,
    }
}

pub fn execute(ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    let defaults = &catalog.defaults;

    println!("Blockwall - Hollow-Block Wall Calculator");
    println!("========================================");
    println!();
    println!("Stone types:");
    for (id, stone) in &catalog.stone_types {
        println!("  {:<14} {} ({})", id, stone.name, stone.dimensions_label());
    }
    println!();

    let default_stone = catalog.default_stone().map(|(id, _)| id).unwrap_or_default();
    let stone_type = prompt_string("Stone type", default_stone);
    let width_cm = prompt_f64("Wall width (cm)", defaults.wall_width_cm);

    let spec = if prompt_yes("Two-zone wall (flat zone, then slope)?", false) {
        let zone1_length = prompt_f64("Zone 1 length (m)", defaults.wall_length_m / 2.0);
        let zone1_height = prompt_f64("Zone 1 height (m)", defaults.wall_start_height_m);
        let zone2_length = prompt_f64("Zone 2 length (m)", defaults.wall_length_m / 2.0);
        let zone2_end = prompt_f64("Zone 2 end height (m)", defaults.wall_end_height_m);
        WallSpec::two_zone(zone1_length, zone1_height, zone2_length, zone2_end)
    } else {
        let length = prompt_f64("Wall length (m)", defaults.wall_length_m);
        let start = prompt_f64("Start height (m)", defaults.wall_start_height_m);
        let end = prompt_f64("End height (m)", start);
        WallSpec::simple(length, start, end)
    };

    let backfilled = prompt_yes("Backfilled with soil?", false);

    let prices = if prompt_yes("Calculate costs?", true) {
        let p = &catalog.prices;
        Some(PriceInput {
            cement_per_bag: prompt_f64("Cement price per bag (€)", p.cement_per_bag_eur),
            gravel_per_ton: prompt_f64("Gravel price per tonne (€)", p.gravel_per_ton_eur),
            stone_per_piece: Some(prompt_f64("Stone price per piece, net (€)", p.stone_per_piece_eur)),
            rebar_per_rod: Some(prompt_f64(
                "Rebar price per rod (€)",
                catalog.reinforcement_steel.price_per_rod_eur,
            )),
        })
    } else {
        None
    };

    let input = WallInput {
        label: String::new(),
        spec,
        width_cm,
        stone_type,
        backfilled,
        prices,
    };

    println!();
    match calculate_wall(&input, catalog) {
        Ok(result) => {
            print!("{}", export_text(&result));
            println!();
            print!("{}", shopping_list(&result));
        }
        Err(e) => {
            println!("[FAIL] {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                println!();
                println!("Error JSON:");
                println!("{}", json);
            }
        }
    }
    Ok(())
}
