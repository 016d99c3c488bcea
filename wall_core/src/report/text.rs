//! Plain-text renderings of a [`CalculationResult`].

use std::fmt::Write;

use crate::calculations::{CalculationResult, WallSpec};

/// Fixed-precision number.
fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Numbered purchase list.
///
/// Prices and totals are included when the result carries costs; otherwise
/// only quantities are listed.
///
/// # Example
///
/// ```rust
/// use wall_core::calculations::{calculate_wall, WallInput, WallSpec};
/// use wall_core::catalog::Catalog;
/// use wall_core::report::shopping_list;
///
/// let input = WallInput::new("Bed", WallSpec::simple(5.0, 0.5, 0.5), 24.0, "abmessung_3");
/// let result = calculate_wall(&input, Catalog::builtin()).unwrap();
/// let list = shopping_list(&result);
/// assert!(list.contains("1. 28 x"));
/// ```
pub fn shopping_list(result: &CalculationResult) -> String {
    let costs = result.costs.as_ref();
    let materials = &result.materials;
    let mut out = String::new();

    let _ = writeln!(out, "SHOPPING LIST");
    if !result.label.is_empty() {
        let _ = writeln!(out, "{}", result.label);
    }
    let _ = writeln!(out, "{}", "=".repeat(40));

    let mut items: Vec<(String, Option<f64>)> = vec![
        (
            format!("{} x {} ({})", result.total_stones, result.stone.name, result.stone.dimensions_label()),
            costs.map(|c| c.stone_cost_with_vat),
        ),
        (
            format!(
                "{} bags of cement ({} kg each)",
                materials.cement_bags, materials.cement_bag_size_kg
            ),
            costs.map(|c| c.cement_cost),
        ),
        (
            format!("{} t of gravel (0/16)", fixed(materials.gravel_tons, 1)),
            costs.map(|c| c.gravel_cost),
        ),
        (format!("{} L of water", fixed(materials.water_liters, 0)), None),
    ];
    if let Some(rebar) = &result.reinforcement {
        items.push((
            format!(
                "{} rebar rods Ø{} mm, {} m",
                rebar.rods_6m_needed, rebar.diameter_mm, rebar.rod_length_m
            ),
            costs.map(|c| c.reinforcement_cost),
        ));
    }

    for (i, (item, price)) in items.iter().enumerate() {
        match price {
            Some(price) => {
                let _ = writeln!(out, "{}. {:<44} {:>10} €", i + 1, item, fixed(*price, 2));
            }
            None => {
                let _ = writeln!(out, "{}. {}", i + 1, item);
            }
        }
        // stones are the only line priced with VAT
        if let (0, Some(costs)) = (i, costs) {
            let _ = writeln!(
                out,
                "   {} € net + {} € VAT = {} €",
                fixed(costs.stone_cost, 2),
                fixed(costs.stone_vat, 2),
                fixed(costs.stone_cost_with_vat, 2)
            );
        }
    }

    if let Some(costs) = costs {
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "{:<47} {:>10} €", "Subtotal (net)", fixed(costs.subtotal, 2));
        let _ = writeln!(out, "{:<47} {:>10} €", "VAT 19% on stones", fixed(costs.stone_vat, 2));
        let _ = writeln!(out, "{:<47} {:>10} €", "TOTAL", fixed(costs.total_cost, 2));
    }

    out
}

/// Full plain-text summary of one calculation.
pub fn export_text(result: &CalculationResult) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "HOLLOW-BLOCK WALL CALCULATION");
    if !result.label.is_empty() {
        let _ = writeln!(out, "{}", result.label);
    }
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out);

    let _ = writeln!(out, "WALL DIMENSIONS");
    match result.spec {
        WallSpec::Simple {
            length_m,
            start_height_m,
            end_height_m,
        } => {
            let _ = writeln!(out, "  Length:          {} m", fixed(length_m, 2));
            let _ = writeln!(out, "  Start height:    {} m", fixed(start_height_m, 2));
            let _ = writeln!(out, "  End height:      {} m", fixed(end_height_m, 2));
        }
        WallSpec::TwoZone {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        } => {
            let _ = writeln!(out, "  Zone 1 (flat):   {} m long, {} m high", fixed(zone1_length_m, 2), fixed(zone1_height_m, 2));
            let _ = writeln!(
                out,
                "  Zone 2 (slope):  {} m long, {} m -> {} m",
                fixed(zone2_length_m, 2),
                fixed(zone1_height_m, 2),
                fixed(zone2_end_height_m, 2)
            );
            let _ = writeln!(out, "  Total length:    {} m", fixed(result.wall.length_m, 2));
        }
    }
    let _ = writeln!(out, "  Width:           {} cm", fixed(result.width_cm, 1));
    let _ = writeln!(out, "  Backfilled:      {}", if result.backfilled { "yes" } else { "no" });
    let _ = writeln!(out);

    let stone = &result.stone;
    let _ = writeln!(out, "STONE");
    let _ = writeln!(out, "  Type:            {} [{}]", stone.name, result.stone_type);
    let _ = writeln!(out, "  Dimensions:      {}", stone.dimensions_label());
    let _ = writeln!(out, "  Weight:          {} kg", stone.weight_kg);
    let _ = writeln!(out, "  Fill per stone:  {} L", stone.fill_volume_per_stone_liters);
    let _ = writeln!(out);

    let _ = writeln!(out, "RESULTS");
    let _ = writeln!(out, "  Wall area:       {} m²", fixed(result.area_m2, 2));
    let _ = writeln!(out, "  Stones:          {}", result.total_stones);
    let _ = writeln!(out, "  Courses:         {}", result.rows);
    let _ = writeln!(out, "  Fill volume:     {} m³", fixed(result.base_volume_m3, 3));
    let _ = writeln!(
        out,
        "  With buffer:     {} m³ (+{}%)",
        fixed(result.buffered_volume_m3, 3),
        result.buffer_percentage
    );
    if let Some(zones) = &result.zones {
        let _ = writeln!(
            out,
            "  Zone 1:          {} m², {} stones, {} courses",
            fixed(zones.zone1.area_m2, 2),
            zones.zone1.stones,
            zones.zone1.rows
        );
        let _ = writeln!(
            out,
            "  Zone 2:          {} m², {} stones, {} courses",
            fixed(zones.zone2.area_m2, 2),
            zones.zone2.stones,
            zones.zone2.rows
        );
    }
    let _ = writeln!(out);

    let materials = &result.materials;
    let _ = writeln!(out, "CONCRETE MATERIALS (mix {})", result.mix.ratio_label());
    let _ = writeln!(
        out,
        "  Cement:          {} kg = {} bags of {} kg",
        fixed(materials.cement_kg, 1),
        materials.cement_bags,
        materials.cement_bag_size_kg
    );
    let _ = writeln!(
        out,
        "  Gravel:          {} kg = {} t",
        fixed(materials.gravel_kg, 1),
        fixed(materials.gravel_tons, 1)
    );
    let _ = writeln!(out, "  Water:           {} L", fixed(materials.water_liters, 1));
    let _ = writeln!(out);

    let _ = writeln!(out, "REINFORCEMENT");
    match &result.reinforcement {
        Some(rebar) => {
            let _ = writeln!(
                out,
                "  {} courses x {} rods = {} m of Ø{} mm steel",
                rebar.rows,
                rebar.rods_per_row,
                fixed(rebar.total_length_m, 2),
                rebar.diameter_mm
            );
            let _ = writeln!(out, "  Rods to buy:     {} x {} m", rebar.rods_6m_needed, rebar.rod_length_m);
        }
        None => {
            let _ = writeln!(out, "  Not required");
        }
    }
    let _ = writeln!(out);

    if let Some(costs) = &result.costs {
        let _ = writeln!(out, "COSTS");
        let _ = writeln!(out, "  Cement:          {} €", fixed(costs.cement_cost, 2));
        let _ = writeln!(out, "  Gravel:          {} €", fixed(costs.gravel_cost, 2));
        let _ = writeln!(out, "  Stones (net):    {} €", fixed(costs.stone_cost, 2));
        let _ = writeln!(out, "  VAT on stones:   {} €", fixed(costs.stone_vat, 2));
        if result.reinforcement.is_some() {
            let _ = writeln!(out, "  Reinforcement:   {} €", fixed(costs.reinforcement_cost, 2));
        }
        let _ = writeln!(out, "  Subtotal (net):  {} €", fixed(costs.subtotal, 2));
        let _ = writeln!(out, "  TOTAL:           {} €", fixed(costs.total_cost, 2));
        let _ = writeln!(out);
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out, "WARNINGS");
        for warning in &result.warnings {
            let _ = writeln!(out, "  ! {}", warning);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "CONCRETE RECOMMENDATION");
    for line in result.concrete_recommendation.lines() {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "{}", result.disclaimer);

    out
}
