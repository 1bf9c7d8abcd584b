//! Rendering port for breadcrumb trails.
//!
//! The segmenter knows nothing about presentation. Any UI layer consumes a
//! [`BreadcrumbView`] through the [`BreadcrumbRenderer`] trait; HTML and plain
//! text renderers ship with the crate.

use maud::Markup;

use crate::components::breadcrumb::breadcrumb;
use crate::options::DisplayOptions;
use crate::overflow::{Collapsed, collapse};
use crate::segment::{BreadcrumbItem, PathInput};
use crate::theme::Theme;

/// Renderable breadcrumb with presentation flags derived from options.
#[derive(Debug, Clone)]
pub struct BreadcrumbView<'a> {
    items: Vec<BreadcrumbItem>,
    collapsed: Collapsed,
    emphasize_last: bool,
    font_size: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> BreadcrumbView<'a> {
    /// Segments `input` and derives the view state.
    ///
    /// Last-item emphasis is dropped when the entity name is excluded, since
    /// the final crumb is then an ancestor rather than the item itself.
    pub fn new(
        input: &PathInput,
        options: &DisplayOptions,
        font_size: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        let items = input.segment(options);
        let collapsed = collapse(
            &items,
            options.max_displayed_items,
            options.overflow_index,
        );
        Self {
            items,
            collapsed,
            emphasize_last: options.include_entity_name,
            font_size,
            theme,
        }
    }

    /// Full, uncollapsed item sequence.
    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn collapsed(&self) -> &Collapsed {
        &self.collapsed
    }

    pub fn emphasize_last(&self) -> bool {
        self.emphasize_last
    }

    pub fn font_size(&self) -> Option<&str> {
        self.font_size
    }

    pub fn theme(&self) -> &Theme {
        self.theme
    }
}

/// Turns a breadcrumb view into a concrete output.
pub trait BreadcrumbRenderer {
    type Output;

    fn render(&self, view: &BreadcrumbView<'_>) -> Self::Output;
}

/// Renders breadcrumb markup with maud.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl BreadcrumbRenderer for HtmlRenderer {
    type Output = Markup;

    fn render(&self, view: &BreadcrumbView<'_>) -> Markup {
        breadcrumb(view)
    }
}

/// Renders breadcrumbs as a single line of text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Append `<href>` after linked crumbs.
    pub show_links: bool,
}

const TEXT_SEPARATOR: &str = " / ";
const TEXT_OVERFLOW: &str = "…";

impl BreadcrumbRenderer for TextRenderer {
    type Output = String;

    fn render(&self, view: &BreadcrumbView<'_>) -> String {
        let collapsed = view.collapsed();
        let mut parts: Vec<String> = collapsed
            .displayed()
            .iter()
            .map(|item| match item.href() {
                Some(href) if self.show_links => format!("{} <{}>", item.text(), href),
                _ => item.text().to_string(),
            })
            .collect();

        if collapsed.has_overflow() {
            parts.insert(collapsed.overflow_at(), TEXT_OVERFLOW.to_string());
        }

        parts.join(TEXT_SEPARATOR)
    }
}
