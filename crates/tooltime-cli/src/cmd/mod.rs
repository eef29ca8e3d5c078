//! Subcommand implementations

pub mod checkout;
pub mod completions;
pub mod demo;
pub mod holidays;
pub mod tools;

use anyhow::{Context, Result};
use std::path::Path;
use tooltime_core::{Catalog, try_tooltime_home};

/// Load the session catalog: `--catalog`, then `$TOOLTIME_HOME/catalog.toml`,
/// then the standard stock.
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    let home = try_tooltime_home();
    Catalog::resolve(explicit, home.as_deref()).with_context(|| match explicit {
        Some(path) => format!("Failed to load catalog {}", path.display()),
        None => "Failed to load catalog from tooltime home".to_string(),
    })
}
