//! # PDF Report
//!
//! Renders a [`CalculationResult`] to an A4 PDF with Typst.
//!
//! The Typst source is an embedded template with `{{PLACEHOLDER}}` markers;
//! variable-length tables are built as row strings and spliced in before
//! compilation. Fonts come from `typst-assets`, so no system fonts are
//! needed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wall_core::calculations::{calculate_wall, WallInput, WallSpec};
//! use wall_core::catalog::Catalog;
//! use wall_core::report::render_wall_pdf;
//!
//! let input = WallInput::new("Terrace", WallSpec::simple(8.0, 1.2, 0.8), 36.5, "abmessung_1");
//! let result = calculate_wall(&input, Catalog::builtin()).unwrap();
//! let pdf_bytes = render_wall_pdf(&result, "Jane Builder").unwrap();
//! std::fs::write("wall_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use tracing::debug;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::{CalculationResult, WallSpec};
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Single-document Typst world with bundled fonts and no file access.
struct PdfWorld {
    main: Source,
    book: LazyHash<FontBook>,
    fonts: Vec<Font>,
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Template
// ============================================================================

const WALL_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.2cm, bottom: 2.2cm, left: 2cm, right: 2cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Blockwall Material Calculation]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{{AUTHOR}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 10.5pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Hollow-Block Wall]
    #v(4pt)
    #text(size: 13pt)[{{LABEL}}]
  ]
]

#v(12pt)

== Wall Dimensions

#table(
  columns: (1fr, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right),
  table.header([*Dimension*], [*Value*]),
{{DIMENSION_ROWS}}
)

== Stone

#table(
  columns: (1fr, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right),
  [Type], [{{STONE_NAME}}],
  [Dimensions], [{{STONE_DIMENSIONS}}],
  [Fill volume per stone], [{{STONE_FILL}} L],
)

== Results

#table(
  columns: (1fr, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right),
  [Wall area], [{{AREA}} m#super[2]],
  [Stones], [{{STONES}}],
  [Courses], [{{ROWS}}],
  [Fill volume], [{{BASE_VOLUME}} m#super[3]],
  [Fill volume incl. {{BUFFER}} % buffer], [{{BUFFERED_VOLUME}} m#super[3]],
{{ZONE_ROWS}}
)

== Concrete Materials (mix {{MIX}})

#table(
  columns: (1fr, auto, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right, right),
  table.header([*Material*], [*Quantity*], [*To buy*]),
  [Cement], [{{CEMENT_KG}} kg], [{{CEMENT_BAGS}} × {{BAG_SIZE}} kg bags],
  [Gravel], [{{GRAVEL_KG}} kg], [{{GRAVEL_TONS}} t],
  [Water], [{{WATER}} L], [],
)

== Reinforcement

{{REINFORCEMENT}}

{{COSTS}}

{{WARNINGS}}

== Concrete Recommendation

{{RECOMMENDATION}}

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#text(size: 9pt, fill: gray)[{{DISCLAIMER}}]
"##;

fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn table_row(label: &str, value: String) -> String {
    format!("  [{}], [{}],", escape_typst(label), value)
}

fn dimension_rows(result: &CalculationResult) -> String {
    let mut rows = match result.spec {
        WallSpec::Simple {
            length_m,
            start_height_m,
            end_height_m,
        } => vec![
            table_row("Length", format!("{:.2} m", length_m)),
            table_row("Start height", format!("{:.2} m", start_height_m)),
            table_row("End height", format!("{:.2} m", end_height_m)),
        ],
        WallSpec::TwoZone {
            zone1_length_m,
            zone1_height_m,
            zone2_length_m,
            zone2_end_height_m,
        } => vec![
            table_row("Zone 1 length (flat)", format!("{:.2} m", zone1_length_m)),
            table_row("Zone 1 height", format!("{:.2} m", zone1_height_m)),
            table_row("Zone 2 length (sloped)", format!("{:.2} m", zone2_length_m)),
            table_row("Zone 2 end height", format!("{:.2} m", zone2_end_height_m)),
            table_row("Total length", format!("{:.2} m", result.wall.length_m)),
        ],
    };
    rows.push(table_row("Width", format!("{:.1} cm", result.width_cm)));
    rows.push(table_row("Backfilled", if result.backfilled { "yes" } else { "no" }.to_string()));
    rows.join("\n")
}

fn zone_rows(result: &CalculationResult) -> String {
    match &result.zones {
        Some(zones) => [
            table_row(
                "Zone 1",
                format!(
                    "{:.2} m#super[2], {} stones, {} courses",
                    zones.zone1.area_m2, zones.zone1.stones, zones.zone1.rows
                ),
            ),
            table_row(
                "Zone 2",
                format!(
                    "{:.2} m#super[2], {} stones, {} courses",
                    zones.zone2.area_m2, zones.zone2.stones, zones.zone2.rows
                ),
            ),
        ]
        .join("\n"),
        None => String::new(),
    }
}

fn reinforcement_block(result: &CalculationResult) -> String {
    match &result.reinforcement {
        Some(rebar) => format!(
            r#"#table(
  columns: (1fr, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right),
  [Courses × rods per course], [{} × {}],
  [Steel length], [{:.2} m],
  [Diameter], [{} mm],
  [Rods to buy], [{} × {} m],
)"#,
            rebar.rows,
            rebar.rods_per_row,
            rebar.total_length_m,
            rebar.diameter_mm,
            rebar.rods_6m_needed,
            rebar.rod_length_m
        ),
        None => "Not required for this wall height.".to_string(),
    }
}

fn costs_block(result: &CalculationResult) -> String {
    let Some(costs) = &result.costs else {
        return String::new();
    };
    let mut rows = vec![
        table_row("Cement", format!("{:.2} €", costs.cement_cost)),
        table_row("Gravel", format!("{:.2} €", costs.gravel_cost)),
        table_row("Stones (net)", format!("{:.2} €", costs.stone_cost)),
        table_row("VAT 19 % on stones", format!("{:.2} €", costs.stone_vat)),
    ];
    if result.reinforcement.is_some() {
        rows.push(table_row("Reinforcement", format!("{:.2} €", costs.reinforcement_cost)));
    }
    rows.push(table_row("Subtotal (net)", format!("{:.2} €", costs.subtotal)));
    rows.push(format!("  [*Total*], [*{:.2} €*],", costs.total_cost));

    format!(
        r#"== Costs

#table(
  columns: (1fr, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right),
{}
)"#,
        rows.join("\n")
    )
}

fn warnings_block(result: &CalculationResult) -> String {
    if result.warnings.is_empty() {
        return String::new();
    }
    let items: Vec<String> = result
        .warnings
        .iter()
        .map(|w| format!("- {}", escape_typst(w)))
        .collect();
    format!(
        "== Warnings\n\n#block(fill: rgb(\"#fff4e5\"), inset: 10pt, radius: 4pt, width: 100%)[\n{}\n]",
        items.join("\n")
    )
}

/// Render one calculation to PDF bytes.
///
/// `author` is printed in the footer.
pub fn render_wall_pdf(result: &CalculationResult, author: &str) -> CalcResult<Vec<u8>> {
    let materials = &result.materials;
    let label = if result.label.is_empty() {
        result.stone.name.as_str()
    } else {
        result.label.as_str()
    };

    let source = WALL_TEMPLATE
        .replace("{{AUTHOR}}", &escape_typst(author))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{LABEL}}", &escape_typst(label))
        .replace("{{DIMENSION_ROWS}}", &dimension_rows(result))
        .replace("{{STONE_NAME}}", &escape_typst(&result.stone.name))
        .replace("{{STONE_DIMENSIONS}}", &escape_typst(&result.stone.dimensions_label()))
        .replace("{{STONE_FILL}}", &result.stone.fill_volume_per_stone_liters.to_string())
        .replace("{{AREA}}", &format!("{:.2}", result.area_m2))
        .replace("{{STONES}}", &result.total_stones.to_string())
        .replace("{{ROWS}}", &result.rows.to_string())
        .replace("{{BASE_VOLUME}}", &format!("{:.3}", result.base_volume_m3))
        .replace("{{BUFFER}}", &result.buffer_percentage.to_string())
        .replace("{{BUFFERED_VOLUME}}", &format!("{:.3}", result.buffered_volume_m3))
        .replace("{{ZONE_ROWS}}", &zone_rows(result))
        .replace("{{MIX}}", &result.mix.ratio_label())
        .replace("{{CEMENT_KG}}", &format!("{:.1}", materials.cement_kg))
        .replace("{{CEMENT_BAGS}}", &materials.cement_bags.to_string())
        .replace("{{BAG_SIZE}}", &materials.cement_bag_size_kg.to_string())
        .replace("{{GRAVEL_KG}}", &format!("{:.1}", materials.gravel_kg))
        .replace("{{GRAVEL_TONS}}", &format!("{:.1}", materials.gravel_tons))
        .replace("{{WATER}}", &format!("{:.1}", materials.water_liters))
        .replace("{{REINFORCEMENT}}", &reinforcement_block(result))
        .replace("{{COSTS}}", &costs_block(result))
        .replace("{{WARNINGS}}", &warnings_block(result))
        .replace(
            "{{RECOMMENDATION}}",
            &escape_typst(&result.concrete_recommendation).replace('\n', " \\\n"),
        )
        .replace("{{DISCLAIMER}}", &escape_typst(&result.disclaimer));

    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    debug!(bytes = pdf_bytes.len(), "rendered wall pdf");
    Ok(pdf_bytes)
}
