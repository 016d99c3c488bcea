//! Catalog file administration.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use wall_core::catalog::Catalog;
use wall_core::file_io::{load_catalog, save_catalog};

use super::Context;

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Write the built-in catalog to a file for editing
    Init {
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a catalog file
    Check { path: PathBuf },
}

pub fn execute(command: CatalogCommand, ctx: &Context) -> Result<()> {
    match command {
        CatalogCommand::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
            }
            save_catalog(Catalog::builtin(), &path)
                .with_context(|| format!("failed to write catalog {}", path.display()))?;
            println!("[OK] Wrote built-in catalog to {}", path.display());
        }
        CatalogCommand::Check { path } => {
            let catalog = load_catalog(&path)?;
            if ctx.json {
                return ctx.print_json(&serde_json::json!({
                    "valid": true,
                    "version": catalog.version,
                    "stone_types": catalog.stone_types.len(),
                    "templates": catalog.templates.len(),
                }));
            }
            println!("[OK] {} is valid (schema {})", path.display(), catalog.version);
            println!("     {} stone types, {} templates", catalog.stone_types.len(), catalog.templates.len());
        }
    }
    Ok(())
}
