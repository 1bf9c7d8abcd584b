//! Integration tests for Sitecrumb.
//!
//! Tests segmentation, collapsing and rendering through the public API.

mod common;

use common::{DOC, SITE, site_path};
use sitecrumb::{
    BreadcrumbItem, BreadcrumbRenderer, BreadcrumbView, DisplayOptions, HtmlRenderer, PathInput,
    TextRenderer, Theme, collapse, segment, strip_prefix,
};

fn texts(items: &[BreadcrumbItem]) -> Vec<&str> {
    items.iter().map(BreadcrumbItem::text).collect()
}

/// Tests the documented example with every toggle on.
#[test]
fn test_segment_document_example() {
    // Arrange & Act
    let items = segment(DOC, SITE, true, true, true);

    // Assert
    let expected = [
        ("sitename", "item1", "https://contoso.sharepoint.com/sites/sitename"),
        (
            "Shared Documents",
            "item2",
            "https://contoso.sharepoint.com/sites/sitename/Shared Documents",
        ),
        ("Doc.docx", "item3", DOC),
    ];
    assert_eq!(items.len(), expected.len());
    for (item, (text, key, href)) in items.iter().zip(expected) {
        assert_eq!(item.text(), text);
        assert_eq!(item.key(), key);
        assert_eq!(item.href(), Some(href));
    }
}

/// Tests that the site name toggle moves the anchor to the site URL.
#[test]
fn test_segment_without_site_name_roots_at_site() {
    // Arrange & Act
    let items = segment(DOC, SITE, false, true, true);

    // Assert
    assert_eq!(items[0].text(), "Shared Documents");
    assert_eq!(items[0].key(), "item1");
    let href = items[0].href().expect("Links enabled");
    assert!(href.starts_with(SITE));
    assert_eq!(href, site_path("Shared Documents"));
}

/// Tests sequence length against segment count for each toggle combination.
#[test]
fn test_segment_length_invariant() {
    // Arrange
    let path = site_path("Lists/Tasks/Sprint 4/Item 12");

    for include_site_name in [true, false] {
        for include_entity_name in [true, false] {
            // Act
            let items = segment(&path, SITE, include_site_name, include_entity_name, true);

            // Assert
            let segments = if include_site_name { 5 } else { 4 };
            let expected = if include_entity_name { segments } else { segments - 1 };
            assert_eq!(
                items.len(),
                expected,
                "site={} entity={}",
                include_site_name,
                include_entity_name
            );
            for (idx, item) in items.iter().enumerate() {
                assert_eq!(item.key(), format!("item{}", idx + 1));
            }
        }
    }
}

/// Tests that joined crumbs after the strip prefix rebuild the original path.
#[test]
fn test_segment_reconstructs_original_path() {
    for include_site_name in [true, false] {
        // Arrange
        let prefix = strip_prefix(SITE, include_site_name);

        // Act
        let items = segment(DOC, SITE, include_site_name, true, false);

        // Assert
        assert_eq!(format!("{}/{}", prefix, texts(&items).join("/")), DOC);
    }
}

/// Tests that missing inputs signal nothing to render.
#[test]
fn test_missing_inputs_render_nothing() {
    assert!(PathInput::from_parts(Some(DOC), None).is_none());
    assert!(PathInput::from_parts(None, Some(SITE)).is_none());
}

/// Tests collapsing a deep folder trail through the public API.
#[test]
fn test_collapse_deep_trail() {
    // Arrange
    let items = segment(&site_path("a/b/c/d/e/f"), SITE, true, true, true);

    // Act
    let collapsed = collapse(&items, 3, 1);

    // Assert
    assert_eq!(texts(collapsed.displayed()), vec!["sitename", "e", "f"]);
    assert_eq!(texts(collapsed.overflow()), vec!["a", "b", "c", "d"]);
    assert_eq!(collapsed.overflow_at(), 1);
}

/// Tests that both renderers consume the same view.
#[test]
fn test_renderers_share_view() {
    // Arrange
    let theme = Theme::default();
    let input = PathInput::new(DOC, SITE);
    let options = DisplayOptions {
        include_entity_name: false,
        ..DisplayOptions::default()
    };
    let view = BreadcrumbView::new(&input, &options, None, &theme);

    // Act
    let html = HtmlRenderer.render(&view).into_string();
    let text = TextRenderer::default().render(&view);

    // Assert
    assert_eq!(text, "sitename / Shared Documents");
    assert!(html.contains("Shared Documents"));
    assert!(!html.contains("Doc.docx"));
    assert!(!html.contains("breadcrumb-current"));
}
