//! # Blockwall CLI
//!
//! Material estimates for hollow-block walls from the terminal.
//!
//! ```text
//! wall_cli calc --length 10 --start-height 1.2 --end-height 0.8 --prices
//! wall_cli two-zone --zone1-length 3.5 --zone1-height 1.3 --zone2-length 4.5 --zone2-end-height 2.4
//! wall_cli export --template privacy_wall --format pdf --output wall.pdf
//! ```
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wall_core::CalcError;

use commands::Context;

#[derive(Parser)]
#[command(name = "wall_cli")]
#[command(author = "Blockwall Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hollow-block wall material calculator", long_about = None)]
struct Cli {
    /// Catalog file (JSON) [default: built-in catalog]
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a simple wall
    Calc(commands::calc::CalcArgs),
    /// Calculate a wall with a flat and a sloped zone
    TwoZone(commands::calc::TwoZoneArgs),
    /// Calculate a catalog template
    Template(commands::calc::TemplateArgs),
    /// List stone types
    Stones,
    /// List wall templates
    Templates,
    /// Show the stone layout
    Layout(commands::layout::LayoutArgs),
    /// Export a calculation (text, shopping list, PDF, JSON)
    Export(commands::export::ExportArgs),
    /// Catalog file administration
    #[command(subcommand)]
    Catalog(commands::catalog::CatalogCommand),
    /// Enter a wall step by step
    Interactive,
}

fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = Context::new(cli.catalog.as_deref(), cli.json)?;

    match cli.command {
        Commands::Calc(args) => commands::calc::execute_calc(args, &ctx),
        Commands::TwoZone(args) => commands::calc::execute_two_zone(args, &ctx),
        Commands::Template(args) => commands::calc::execute_template(args, &ctx),
        Commands::Stones => commands::stones::execute_stones(&ctx),
        Commands::Templates => commands::stones::execute_templates(&ctx),
        Commands::Layout(args) => commands::layout::execute(args, &ctx),
        Commands::Export(args) => commands::export::execute(args, &ctx),
        Commands::Catalog(command) => commands::catalog::execute(command, &ctx),
        Commands::Interactive => commands::interactive::execute(&ctx),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let json = cli.json;
    let outcome = run(cli);

    if json {
        if let Err(err) = &outcome {
            if let Some(calc_err) = err.downcast_ref::<CalcError>() {
                println!("{}", serde_json::to_string_pretty(calc_err)?);
                std::process::exit(1);
            }
        }
    }
    outcome
}
