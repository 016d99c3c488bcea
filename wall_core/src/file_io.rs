//! # Catalog File I/O
//!
//! Loads and saves the configuration catalog as JSON:
//! - **Atomic saves**: write to `catalog.json.tmp`, sync, rename over the
//!   target
//! - **Validation**: schema version and catalog consistency checked on load
//!   and before save
//!
//! ## Example
//!
//! ```rust,no_run
//! use wall_core::catalog::Catalog;
//! use wall_core::file_io::{load_catalog, save_catalog};
//! use std::path::Path;
//!
//! let path = Path::new("catalog.json");
//! let mut catalog = load_catalog(path).unwrap();
//! catalog.prices.cement_per_bag_eur = 6.10;
//! save_catalog(&catalog, path).unwrap();
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::{Catalog, CATALOG_SCHEMA_VERSION};
use crate::errors::{CalcError, CalcResult};

/// `catalog.json` -> `catalog.json.<suffix>`
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Parse and validate a catalog from JSON text.
pub fn parse_catalog(json: &str) -> CalcResult<Catalog> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid catalog JSON: {}", e),
    })?;
    validate_version(&catalog.version)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog file.
///
/// # Returns
///
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - invalid JSON or missing fields
/// * `Err(CalcError::VersionMismatch)` - incompatible schema version
/// * `Err(CalcError::InvalidCatalog)` - inconsistent catalog content
pub fn load_catalog(path: &Path) -> CalcResult<Catalog> {
    let mut contents = String::new();
    File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?
        .read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let catalog = parse_catalog(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("{} ({})", reason, path.display()),
        },
        other => other,
    })?;

    info!(
        path = %path.display(),
        stone_types = catalog.stone_types.len(),
        templates = catalog.templates.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Validate and save a catalog with an atomic write.
///
/// The JSON goes to `<path>.tmp`, is synced to disk, then renamed over
/// `path`. An interrupted save leaves the previous file intact.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> CalcResult<()> {
    catalog.validate()?;

    let json = serde_json::to_string_pretty(catalog).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = sibling_with_suffix(path, "tmp");
    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string()))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), "catalog saved");
    Ok(())
}

/// Check a catalog file's schema version against [`CATALOG_SCHEMA_VERSION`].
///
/// Major versions must match. For 0.x the file's minor version may not be
/// newer than ours.
pub fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: CATALOG_SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(CATALOG_SCHEMA_VERSION);

    let (Some(file_major), Some(current_major)) = (file_parts.first(), current_parts.first()) else {
        return Err(mismatch());
    };
    if file_major != current_major {
        return Err(mismatch());
    }

    if *current_major == 0 {
        if let (Some(file_minor), Some(current_minor)) = (file_parts.get(1), current_parts.get(1)) {
            if file_minor > current_minor {
                return Err(mismatch());
            }
        }
    }

    Ok(())
}
