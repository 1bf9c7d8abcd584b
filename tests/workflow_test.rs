//! Workflow integration tests for Sitecrumb.
//!
//! Tests complete pipelines from host attributes through mounted pages.

mod common;

use anyhow::Result;
use common::{DOC, SITE, site_path};
use sitecrumb::{Attributes, HostAdapter, PAGE_FILE, STYLESHEET, TextRenderer};
use std::fs;
use tempfile::TempDir;

/// Tests the host workflow: resolve attributes, mount, read back, unmount.
#[test]
fn test_workflow_attributes_to_mounted_page() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let attributes: Attributes = [
        ("data-original-path", DOC),
        ("data-site-url", SITE),
        ("data-include-site-name", "false"),
        ("data-font-size", "13px"),
        ("data-theme", "themePrimary=#8764b8"),
    ]
    .into_iter()
    .collect();
    let mut host = HostAdapter::from_attributes(&attributes);

    // Act
    let mounted = host.mount(dir.path())?;

    // Assert
    assert!(mounted, "Page should be written when paths are present");
    let page = fs::read_to_string(dir.path().join(PAGE_FILE))?;
    assert!(page.contains(&format!(r#"href="{}""#, site_path("Shared Documents"))));
    assert!(!page.contains(">sitename<"));
    assert!(page.contains("font-size: 13px;"));
    assert!(page.contains("--themePrimary: #8764b8;"));
    assert!(page.contains(&format!("assets/{}", STYLESHEET)));

    // Act
    host.unmount()?;

    // Assert
    assert!(!dir.path().join(PAGE_FILE).exists());
    assert!(dir.path().join("assets").join(STYLESHEET).exists());

    Ok(())
}

/// Tests that re-rendering after props change is not cached.
#[test]
fn test_workflow_recomputes_each_render() {
    // Arrange
    let first = HostAdapter::from_attributes(
        &[("originalPath", DOC), ("siteUrl", SITE)]
            .into_iter()
            .collect::<Attributes>(),
    );
    let second = HostAdapter::from_attributes(
        &[
            ("originalPath", site_path("Lists/Tasks").as_str()),
            ("siteUrl", SITE),
        ]
        .into_iter()
        .collect::<Attributes>(),
    );

    // Act
    let first_text = first.render(&TextRenderer::default());
    let again = first.render(&TextRenderer::default());
    let second_text = second.render(&TextRenderer::default());

    // Assert
    assert_eq!(first_text, again);
    assert_eq!(second_text.as_deref(), Some("sitename / Lists / Tasks"));
}

/// Tests that a host without paths mounts nothing.
#[test]
fn test_workflow_missing_site_url_mounts_nothing() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let mut host = HostAdapter::from_attributes(&[("originalPath", DOC)].into_iter().collect::<Attributes>());

    // Act
    let mounted = host.mount(dir.path())?;

    // Assert
    assert!(!mounted);
    assert!(fs::read_dir(dir.path())?.next().is_none(), "Nothing written");

    Ok(())
}
