//! Path segmentation into breadcrumb items.
//!
//! Turns an item path and the site URL it lives under into an ordered list
//! of labeled, optionally linked crumbs. The transform is pure: no I/O, no
//! shared state, identical inputs always produce identical output.

use crate::options::DisplayOptions;
use crate::path::{base_path, path_components, strip_first};

/// Item path and owning site URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathInput {
    original_path: String,
    site_url: String,
}

impl PathInput {
    pub fn new(original_path: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            original_path: original_path.into(),
            site_url: site_url.into(),
        }
    }

    /// Builds input only when both parts are present.
    ///
    /// A missing part means the widget renders nothing, so `None` is a
    /// signal to skip rendering rather than an error.
    pub fn from_parts(original_path: Option<&str>, site_url: Option<&str>) -> Option<Self> {
        Some(Self::new(original_path?, site_url?))
    }

    /// Full path of the item being described.
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// Absolute URL of the site the item belongs to.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Segments this input with the toggles from `options`.
    pub fn segment(&self, options: &DisplayOptions) -> Vec<BreadcrumbItem> {
        segment(
            &self.original_path,
            &self.site_url,
            options.include_site_name,
            options.include_entity_name,
            options.items_as_links,
        )
    }
}

/// Single crumb of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    text: String,
    key: String,
    href: Option<String>,
}

impl BreadcrumbItem {
    /// Path segment shown to the user.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stable key, `item<N>` with N starting at 1.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cumulative link to this level, absent when links are disabled.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Prefix removed from the item path before splitting.
///
/// The base path keeps the site name inside the remainder; the full site URL
/// removes it.
pub fn strip_prefix(site_url: &str, include_site_name: bool) -> String {
    if include_site_name {
        base_path(site_url)
    } else {
        site_url.to_string()
    }
}

/// Computes breadcrumb items for an item path under a site.
///
/// Strips the site prefix (first literal occurrence, not anchored), splits
/// the remainder on `/` dropping empty segments, optionally drops the leaf
/// segment and attaches cumulative hrefs.
///
/// # Arguments
///
/// * `original_path`: Full item path
/// * `site_url`: Site URL the item lives under
/// * `include_site_name`: Keep the site name as the first crumb
/// * `include_entity_name`: Keep the leaf item as the last crumb
/// * `items_as_links`: Attach an href to every crumb
///
/// # Returns
///
/// Ordered crumbs keyed `item1..itemN`. Malformed inputs yield a best-effort,
/// possibly empty, sequence.
///
/// # Examples
///
/// ```
/// use sitecrumb::segment;
///
/// let items = segment(
///     "https://contoso.sharepoint.com/sites/hr/Shared Documents/Doc.docx",
///     "https://contoso.sharepoint.com/sites/hr",
///     true,
///     false,
///     true,
/// );
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[1].text(), "Shared Documents");
/// assert_eq!(
///     items[1].href(),
///     Some("https://contoso.sharepoint.com/sites/hr/Shared Documents")
/// );
/// ```
pub fn segment(
    original_path: &str,
    site_url: &str,
    include_site_name: bool,
    include_entity_name: bool,
    items_as_links: bool,
) -> Vec<BreadcrumbItem> {
    let prefix = strip_prefix(site_url, include_site_name);
    let remainder = strip_first(original_path, &prefix);

    let mut segments = path_components(&remainder);
    if !include_entity_name {
        segments.pop();
    }

    // Links hang off the same root that was stripped
    let anchor_base = prefix.as_str();

    segments
        .iter()
        .enumerate()
        .map(|(idx, text)| BreadcrumbItem {
            text: (*text).to_string(),
            key: format!("item{}", idx + 1),
            href: items_as_links
                .then(|| format!("{}/{}", anchor_base, segments[..=idx].join("/"))),
        })
        .collect()
}
