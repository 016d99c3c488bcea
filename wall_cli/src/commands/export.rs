//! Export a calculation as text, shopping list, PDF or JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use tracing::info;
use wall_core::calculations::calculate_wall;
use wall_core::report::{export_text, render_wall_pdf, shopping_list};

use super::{Context, WallSource};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Full plain-text summary
    Text,
    /// Numbered purchase list
    Shopping,
    /// A4 PDF report (requires --output)
    Pdf,
    /// Complete result including the stone layout
    Json,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: WallSource,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Output file [default: stdout]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Author printed in the PDF footer
    #[arg(long, default_value = "")]
    pub author: String,
}

pub fn execute(args: ExportArgs, ctx: &Context) -> Result<()> {
    let input = args.source.resolve(&ctx.catalog)?;
    let result = calculate_wall(&input, &ctx.catalog)?;

    let bytes = match args.format {
        ExportFormat::Text => export_text(&result).into_bytes(),
        ExportFormat::Shopping => shopping_list(&result).into_bytes(),
        ExportFormat::Json => serde_json::to_vec_pretty(&result)?,
        ExportFormat::Pdf => {
            if args.output.is_none() {
                anyhow::bail!("PDF export needs --output <FILE>");
            }
            render_wall_pdf(&result, &args.author)?
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = ?args.format, "export written");
            println!("[OK] Wrote {} ({} bytes)", path.display(), bytes.len());
        }
        None => print!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}
