//! Shared test utilities for integration tests.
//!
//! Provides sample site paths and a helper for running the compiled binary
//! used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::process::{Command, Output};

/// Site URL used throughout the tests.
pub const SITE: &str = "https://contoso.sharepoint.com/sites/sitename";

/// Document path under [`SITE`].
pub const DOC: &str = "https://contoso.sharepoint.com/sites/sitename/Shared Documents/Doc.docx";

/// Builds a path under [`SITE`] from slash separated segments.
pub fn site_path(segments: &str) -> String {
    format!("{}/{}", SITE, segments)
}

/// Runs the sitecrumb binary with arguments.
///
/// # Errors
///
/// Returns error if the process cannot be spawned
pub fn run_sitecrumb(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_sitecrumb"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}
