//! Breadcrumb navigation component

use maud::{Markup, html};

use crate::render::BreadcrumbView;
use crate::segment::BreadcrumbItem;
use crate::theme::Theme;

/// Inline slot in the rendered trail.
enum Entry<'a> {
    Crumb { item: &'a BreadcrumbItem, current: bool },
    Overflow(&'a [BreadcrumbItem]),
}

/// Renders breadcrumb navigation
///
/// Displays the collapsed trail as an ordered list with separators between
/// entries. Items with an href become links, others plain text. Hidden items
/// sit behind a disclosure placed where collapsing started. The last inline
/// crumb is marked current only when the view asks for last-item emphasis.
///
/// # Arguments
///
/// * `view`: Segmented and collapsed breadcrumb view
///
/// # Returns
///
/// Breadcrumb navigation markup
pub fn breadcrumb(view: &BreadcrumbView<'_>) -> Markup {
    let entries = entries(view);
    let style = inline_style(view.font_size(), view.theme());

    html! {
        nav class="breadcrumb" aria-label="Breadcrumb" style=[style] {
            ol class="breadcrumb-list" {
                @for (idx, entry) in entries.iter().enumerate() {
                    @if idx > 0 {
                        li class="breadcrumb-separator" aria-hidden="true" { "/" }
                    }
                    li class="breadcrumb-entry" {
                        @match entry {
                            Entry::Crumb { item, current } => {
                                (crumb(item, *current))
                            },
                            Entry::Overflow(hidden) => {
                                (overflow_menu(hidden))
                            },
                        }
                    }
                }
            }
        }
    }
}

fn entries<'a>(view: &'a BreadcrumbView<'_>) -> Vec<Entry<'a>> {
    let collapsed = view.collapsed();
    let displayed = collapsed.displayed();
    let last = displayed.len().checked_sub(1);

    let mut entries: Vec<Entry<'a>> = displayed
        .iter()
        .enumerate()
        .map(|(idx, item)| Entry::Crumb {
            item,
            current: view.emphasize_last() && Some(idx) == last,
        })
        .collect();

    if collapsed.has_overflow() {
        entries.insert(collapsed.overflow_at(), Entry::Overflow(collapsed.overflow()));
    }

    entries
}

fn crumb(item: &BreadcrumbItem, current: bool) -> Markup {
    let class = if current {
        "breadcrumb-item breadcrumb-current"
    } else {
        "breadcrumb-item"
    };
    let aria_current = current.then_some("page");

    html! {
        @if let Some(href) = item.href() {
            a href=(href) class=(class) data-key=(item.key()) aria-current=[aria_current] {
                (item.text())
            }
        } @else {
            span class=(class) data-key=(item.key()) aria-current=[aria_current] {
                (item.text())
            }
        }
    }
}

/// Renders collapsed items as a disclosure menu
fn overflow_menu(hidden: &[BreadcrumbItem]) -> Markup {
    html! {
        details class="breadcrumb-overflow" {
            summary class="breadcrumb-overflow-button" aria-label="More items" { "…" }
            ul class="breadcrumb-overflow-menu" {
                @for item in hidden {
                    li { (crumb(item, false)) }
                }
            }
        }
    }
}

/// Builds the inline style carrying font size and theme custom properties.
///
/// Declarations whose name or value would break out of a single declaration
/// are skipped.
fn inline_style(font_size: Option<&str>, theme: &Theme) -> Option<String> {
    let mut style = String::new();
    if let Some(size) = font_size {
        if is_plain_css(size) {
            style.push_str(&format!("font-size: {};", size));
        } else {
            tracing::warn!(value = size, "Skipping font size with CSS delimiters");
        }
    }
    for (slot, value) in theme.slots() {
        if is_plain_css(slot) && is_plain_css(value) {
            style.push_str(&format!("--{}: {};", slot, value));
        } else {
            tracing::warn!(slot, value, "Skipping theme slot with CSS delimiters");
        }
    }
    (!style.is_empty()).then_some(style)
}

fn is_plain_css(value: &str) -> bool {
    !value.contains([';', '{', '}'])
}
