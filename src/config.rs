//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::host::Attributes;
use crate::options::{DEFAULT_MAX_DISPLAYED_ITEMS, DEFAULT_OVERFLOW_INDEX, DisplayOptions};

/// Output format for breadcrumbs written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Breadcrumb navigation markup
    Html,
    /// Single line, crumbs separated by slashes
    Text,
}

/// Command line configuration for Sitecrumb.
#[derive(Debug, Clone, Parser)]
#[command(name = "sitecrumb", version, about, long_about = None)]
pub struct Config {
    /// Full path of the item, e.g. https://host/sites/site/Shared Documents/Doc.docx
    pub original_path: Option<String>,

    /// URL of the site the item belongs to, e.g. https://host/sites/site
    pub site_url: Option<String>,

    /// Start the trail below the site instead of at the site name
    #[arg(long)]
    pub no_site_name: bool,

    /// Leave out the item itself, ending the trail at its parent
    #[arg(long)]
    pub no_entity_name: bool,

    /// Render crumbs as plain text instead of links
    #[arg(long)]
    pub no_links: bool,

    /// Number of crumbs shown before collapsing into an overflow menu
    #[arg(long, default_value_t = DEFAULT_MAX_DISPLAYED_ITEMS)]
    pub max_displayed_items: usize,

    /// Position where collapsing starts
    #[arg(long, default_value_t = DEFAULT_OVERFLOW_INDEX)]
    pub overflow_index: usize,

    /// CSS font size applied to the breadcrumb (e.g. 14px)
    #[arg(long)]
    pub font_size: Option<String>,

    /// Theme slots as slot=value pairs separated by semicolons
    #[arg(long)]
    pub theme: Option<String>,

    /// Host attribute override as KEY=VALUE (repeatable)
    #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    pub attrs: Vec<(String, String)>,

    /// Output format when printing to stdout
    #[arg(long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Mount the breadcrumb as a page in this directory instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the mounted page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `--open` is given without an output directory.
    pub fn validate(&self) -> Result<()> {
        if self.open && self.output.is_none() {
            bail!("--open requires --output");
        }

        Ok(())
    }

    /// Builds host attributes from flags, then applies `--attr` overrides.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();

        if let Some(path) = &self.original_path {
            attributes.set("originalPath", path.as_str());
        }
        if let Some(url) = &self.site_url {
            attributes.set("siteUrl", url.as_str());
        }
        attributes.set("includeSiteName", (!self.no_site_name).to_string());
        attributes.set("includeEntityName", (!self.no_entity_name).to_string());
        attributes.set("itemsAsLinks", (!self.no_links).to_string());
        attributes.set("maxDisplayedItems", self.max_displayed_items.to_string());
        attributes.set("overflowIndex", self.overflow_index.to_string());
        if let Some(size) = &self.font_size {
            attributes.set("fontSize", size.as_str());
        }
        if let Some(theme) = &self.theme {
            attributes.set("theme", theme.as_str());
        }

        attributes.extend(self.attrs.iter().map(|(k, v)| (k, v.as_str())));
        attributes
    }
}

/// Validates resolved display options.
///
/// Runs on options after flags and `--attr` overrides are merged, so both
/// spellings of a setting are held to the same bounds.
///
/// # Errors
///
/// Returns error if the overflow index lies beyond the displayed items while
/// the maximum is non-zero.
pub fn validate_options(options: &DisplayOptions) -> Result<()> {
    if options.max_displayed_items > 0 && options.overflow_index >= options.max_displayed_items {
        bail!(
            "Overflow index {} must be less than max displayed items {}",
            options.overflow_index,
            options.max_displayed_items
        );
    }

    Ok(())
}

/// Parses a `KEY=VALUE` host attribute.
fn parse_attribute(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Attribute must be KEY=VALUE: {}", raw))?;
    if key.trim().is_empty() {
        bail!("Attribute name is empty: {}", raw);
    }
    Ok((key.trim().to_string(), value.to_string()))
}
