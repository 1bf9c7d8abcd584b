//! Breadcrumb display toggles.

/// Default number of items shown before collapsing into overflow.
pub const DEFAULT_MAX_DISPLAYED_ITEMS: usize = 3;

/// Default position where collapsing starts.
pub const DEFAULT_OVERFLOW_INDEX: usize = 0;

/// Display options controlling segmentation and overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Keep the site name as the first crumb.
    pub include_site_name: bool,
    /// Keep the leaf item (file, folder or list item) as the last crumb.
    pub include_entity_name: bool,
    /// Attach cumulative hrefs to every crumb.
    pub items_as_links: bool,
    pub max_displayed_items: usize,
    pub overflow_index: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            include_site_name: true,
            include_entity_name: true,
            items_as_links: true,
            max_displayed_items: DEFAULT_MAX_DISPLAYED_ITEMS,
            overflow_index: DEFAULT_OVERFLOW_INDEX,
        }
    }
}
