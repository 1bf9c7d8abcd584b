//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const BREADCRUMB: &str = include_str!("../assets/components/breadcrumb.css");

/// Bundled stylesheet file name, relative to the assets directory.
pub const STYLESHEET: &str = "breadcrumb.css";

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, STYLESHEET, &[BASE, BREADCRUMB])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
