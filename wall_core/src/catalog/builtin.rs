//! Built-in reference catalog (FCN hollow blocks, standard C25/30 fill).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::{
    Catalog, ConcreteRecommendation, LayoutLimits, MixRatio, PriceDefaults, ReinforcementRule,
    StoneType, WallDefaults, WallTemplate, WarningThresholds, BufferConfig, CATALOG_SCHEMA_VERSION,
};

pub(super) static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(build);

fn stone(
    name: &str,
    (length_cm, width_cm, height_cm): (f64, f64, f64),
    weight_kg: f64,
    stones_per_m2: f64,
    fill_volume_per_stone_liters: f64,
    default: bool,
) -> StoneType {
    StoneType {
        name: name.to_string(),
        length_cm,
        width_cm,
        height_cm,
        weight_kg,
        stones_per_m2,
        fill_volume_per_m2_liters: (stones_per_m2 * fill_volume_per_stone_liters).round(),
        fill_volume_per_stone_liters,
        default,
    }
}

fn template(
    name: &str,
    description: &str,
    stone_type: &str,
    wall_length_m: f64,
    (wall_start_height_m, wall_end_height_m): (f64, f64),
    wall_width_cm: f64,
) -> WallTemplate {
    WallTemplate {
        name: name.to_string(),
        description: description.to_string(),
        stone_type: stone_type.to_string(),
        wall_length_m,
        wall_start_height_m,
        wall_end_height_m,
        wall_width_cm,
    }
}

fn build() -> Catalog {
    let mut stone_types = BTreeMap::new();
    stone_types.insert(
        "abmessung_1".to_string(),
        stone("Schalstein 36.5", (36.0, 36.5, 24.8), 22.0, 11.0, 20.91, true),
    );
    stone_types.insert(
        "abmessung_2".to_string(),
        stone("Schalstein 30", (36.0, 30.0, 24.8), 19.5, 11.0, 15.55, false),
    );
    stone_types.insert(
        "abmessung_3".to_string(),
        stone("Schalstein 24", (36.0, 24.0, 24.8), 16.5, 11.0, 12.09, false),
    );
    stone_types.insert(
        "abmessung_4".to_string(),
        stone("Schalstein 17.5", (50.0, 17.5, 25.0), 14.0, 8.0, 11.0, false),
    );

    let mut templates = BTreeMap::new();
    templates.insert(
        "garden_bed".to_string(),
        template(
            "Raised bed border",
            "Low border around a raised garden bed, two courses high",
            "abmessung_3",
            6.0,
            (0.496, 0.496),
            24.0,
        ),
    );
    templates.insert(
        "privacy_wall".to_string(),
        template(
            "Privacy wall",
            "Freestanding screen wall along a property line",
            "abmessung_2",
            8.0,
            (1.736, 1.736),
            30.0,
        ),
    );
    templates.insert(
        "slope_retaining".to_string(),
        template(
            "Slope retaining wall",
            "Backfilled wall following a falling terrain",
            "abmessung_1",
            10.0,
            (1.24, 0.744),
            36.5,
        ),
    );

    Catalog {
        version: CATALOG_SCHEMA_VERSION.to_string(),
        stone_types,
        concrete_mix: MixRatio {
            cement_parts: 1.0,
            gravel_parts: 4.0,
            water_parts: 0.5,
            cement_kg_per_m3: 300.0,
            gravel_kg_per_m3: 1200.0,
            water_liters_per_m3: 150.0,
            cement_bag_size_kg: 25.0,
        },
        buffer: BufferConfig { percentage: 15.0 },
        warnings: WarningThresholds {
            min_width_cm: 10.0,
            max_height_freestanding_m: 2.0,
            max_height_backfilled_m: 1.3,
            reinforcement_advice_height_m: 1.0,
        },
        reinforcement_steel: ReinforcementRule {
            min_height_m: 1.0,
            rods_per_row: 2,
            rod_length_m: 6.0,
            diameter_mm: 8.0,
            price_per_rod_eur: 4.5,
        },
        prices: PriceDefaults {
            cement_per_bag_eur: 5.5,
            gravel_per_ton_eur: 45.0,
            stone_per_piece_eur: 2.5,
        },
        defaults: WallDefaults {
            wall_length_m: 10.0,
            wall_start_height_m: 1.0,
            wall_end_height_m: 1.0,
            wall_width_cm: 36.5,
        },
        templates,
        concrete_recommendation: ConcreteRecommendation {
            quality: "C25/30".to_string(),
            max_grain_size_mm: 16,
            consistency: "F3".to_string(),
            reinforcement_note: "For heights above 1 m or load-bearing walls reinforcement is \
                                 recommended (e.g. 2 × Ø 8 mm per course)."
                .to_string(),
        },
        layout: LayoutLimits::default(),
    }
}
