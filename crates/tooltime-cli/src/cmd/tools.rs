//! Tools command

use anyhow::Result;
use std::path::Path;

use crate::ui::Output;
use crate::ui::table::catalog_table;

/// List the tools in the active catalog
pub fn tools(catalog_path: Option<&Path>, output: &Output) -> Result<()> {
    let catalog = super::load_catalog(catalog_path)?;

    if catalog.is_empty() {
        output.warning("The tool catalog is empty.");
        return Ok(());
    }

    output.section("Tools for rent");
    output.data(catalog_table(&catalog, output.theme()));
    output.info(&format!("{} tools", catalog.len()));

    Ok(())
}
