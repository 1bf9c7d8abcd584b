//! Overflow collapsing for long breadcrumb trails.

use crate::segment::BreadcrumbItem;

/// Breadcrumb items split into displayed and overflowed runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsed {
    displayed: Vec<BreadcrumbItem>,
    overflow: Vec<BreadcrumbItem>,
    overflow_at: usize,
}

impl Collapsed {
    /// Items rendered inline, in order.
    pub fn displayed(&self) -> &[BreadcrumbItem] {
        &self.displayed
    }

    /// Items hidden behind the overflow affordance, in order.
    pub fn overflow(&self) -> &[BreadcrumbItem] {
        &self.overflow
    }

    /// Position in `displayed` before which the overflow affordance sits.
    pub fn overflow_at(&self) -> usize {
        self.overflow_at
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Collapses items exceeding `max_displayed_items` into an overflow run.
///
/// The run starts at `overflow_index` (clamped to the sequence length) and
/// spans `len - max_displayed_items` items, clipped at the end of the
/// sequence. Sequences that fit are returned untouched. A maximum of zero
/// moves every item from `overflow_index` onward into overflow.
///
/// # Arguments
///
/// * `items`: Full breadcrumb sequence
/// * `max_displayed_items`: Number of items allowed inline
/// * `overflow_index`: Position where collapsing starts
///
/// # Returns
///
/// Displayed and overflowed runs preserving original order
pub fn collapse(
    items: &[BreadcrumbItem],
    max_displayed_items: usize,
    overflow_index: usize,
) -> Collapsed {
    let start = overflow_index.min(items.len());
    let count = items.len().saturating_sub(max_displayed_items);
    let end = (start + count).min(items.len());

    let mut displayed = Vec::with_capacity(items.len() - (end - start));
    displayed.extend_from_slice(&items[..start]);
    displayed.extend_from_slice(&items[end..]);

    Collapsed {
        displayed,
        overflow: items[start..end].to_vec(),
        overflow_at: start,
    }
}
