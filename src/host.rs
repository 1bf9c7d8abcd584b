//! Host integration: attribute resolution and widget lifecycle.
//!
//! A host element carries named string attributes. [`WidgetProps`] resolves
//! them into typed inputs, and [`HostAdapter`] renders and mounts the widget
//! as a standalone page, removing it again on unmount.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{STYLESHEET, write_css_assets};
use crate::components::layout::page_wrapper;
use crate::options::DisplayOptions;
use crate::render::{BreadcrumbRenderer, BreadcrumbView, HtmlRenderer};
use crate::segment::PathInput;
use crate::theme::Theme;

/// Page file written by [`HostAdapter::mount`].
pub const PAGE_FILE: &str = "index.html";

/// Named attributes read from a host element.
///
/// Names match regardless of casing, separators and a leading `data-`, so
/// `originalPath`, `original-path` and `data-original-path` are the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any earlier value under the same key.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(normalize(name), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&normalize(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.set(name.as_ref(), value);
        }
        attributes
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name.as_ref(), value);
        }
    }
}

fn normalize(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_prefix("data-").unwrap_or(name);
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Typed widget inputs resolved from host attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetProps {
    /// `None` when either path attribute is missing or empty.
    pub input: Option<PathInput>,
    pub options: DisplayOptions,
    pub font_size: Option<String>,
    pub theme: Theme,
}

impl WidgetProps {
    /// Resolves props from attributes.
    ///
    /// Missing attributes take their defaults. Unparseable booleans and
    /// numbers also fall back to defaults, with a warning event.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let defaults = DisplayOptions::default();
        let present = |name: &str| attributes.get(name).filter(|v| !v.trim().is_empty());

        let options = DisplayOptions {
            include_site_name: flag(attributes, "includeSiteName", defaults.include_site_name),
            include_entity_name: flag(
                attributes,
                "includeEntityName",
                defaults.include_entity_name,
            ),
            items_as_links: flag(attributes, "itemsAsLinks", defaults.items_as_links),
            max_displayed_items: count(
                attributes,
                "maxDisplayedItems",
                defaults.max_displayed_items,
            ),
            overflow_index: count(attributes, "overflowIndex", defaults.overflow_index),
        };

        Self {
            input: PathInput::from_parts(present("originalPath"), present("siteUrl")),
            options,
            font_size: present("fontSize").map(|s| s.trim().to_string()),
            theme: present("theme").map(Theme::parse).unwrap_or_default(),
        }
    }
}

fn flag(attributes: &Attributes, name: &str, default: bool) -> bool {
    let Some(raw) = attributes.get(name) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        "" => default,
        other => {
            tracing::warn!(attribute = name, value = other, "Unrecognized boolean, using default");
            default
        }
    }
}

fn count(attributes: &Attributes, name: &str, default: usize) -> usize {
    let Some(raw) = attributes.get(name) else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(attribute = name, value = raw, "Unrecognized count, using default");
        default
    })
}

/// Owns the widget lifecycle for one host element.
#[derive(Debug)]
pub struct HostAdapter {
    props: WidgetProps,
    mounted: Option<PathBuf>,
}

impl HostAdapter {
    pub fn new(props: WidgetProps) -> Self {
        Self {
            props,
            mounted: None,
        }
    }

    pub fn from_attributes(attributes: &Attributes) -> Self {
        Self::new(WidgetProps::from_attributes(attributes))
    }

    pub fn props(&self) -> &WidgetProps {
        &self.props
    }

    /// Renders the widget through `renderer`.
    ///
    /// Returns `None` when path inputs are absent: the widget renders
    /// nothing rather than failing.
    pub fn render<R: BreadcrumbRenderer>(&self, renderer: &R) -> Option<R::Output> {
        self.view().map(|view| renderer.render(&view))
    }

    /// Segments the current props once into a renderable view.
    fn view(&self) -> Option<BreadcrumbView<'_>> {
        let Some(input) = &self.props.input else {
            tracing::debug!("Path inputs absent, rendering nothing");
            return None;
        };

        let view = BreadcrumbView::new(
            input,
            &self.props.options,
            self.props.font_size.as_deref(),
            &self.props.theme,
        );
        tracing::debug!(
            items = view.items().len(),
            overflow = view.collapsed().overflow().len(),
            "Rendering breadcrumb"
        );
        Some(view)
    }

    /// Mounts the widget as a standalone HTML page inside `dir`.
    ///
    /// Writes `index.html` and the bundled stylesheet. A previously mounted
    /// page is unmounted first.
    ///
    /// # Returns
    ///
    /// `true` when a page was written, `false` when there was nothing to render
    ///
    /// # Errors
    ///
    /// Returns error if the output directory or files cannot be written
    pub fn mount(&mut self, dir: &Path) -> Result<bool> {
        self.unmount()?;

        let Some(view) = self.view() else {
            return Ok(false);
        };

        let assets_dir = dir.join("assets");
        fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
        write_css_assets(&assets_dir)?;

        let title = view.items().last().map_or("Breadcrumb", |item| item.text());
        let stylesheet = format!("assets/{}", STYLESHEET);
        let page = page_wrapper(title, &[&stylesheet], HtmlRenderer.render(&view));

        let page_path = dir.join(PAGE_FILE);
        fs::write(&page_path, page.into_string())
            .with_context(|| format!("Failed to write page: {}", page_path.display()))?;

        tracing::debug!(page = %page_path.display(), "Mounted breadcrumb");
        self.mounted = Some(page_path);
        Ok(true)
    }

    /// Removes the page written by the last successful mount.
    ///
    /// Does nothing when not mounted. Shared assets stay in place.
    ///
    /// # Errors
    ///
    /// Returns error if the mounted page exists but cannot be removed
    pub fn unmount(&mut self) -> Result<()> {
        if let Some(page_path) = self.mounted.take()
            && page_path.exists()
        {
            fs::remove_file(&page_path)
                .with_context(|| format!("Failed to remove page: {}", page_path.display()))?;
            tracing::debug!(page = %page_path.display(), "Unmounted breadcrumb");
        }
        Ok(())
    }

    /// Path of the currently mounted page.
    pub fn mounted_page(&self) -> Option<&Path> {
        self.mounted.as_deref()
    }
}
