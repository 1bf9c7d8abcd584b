//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps widget markup with standard HTML structure
///
/// Provides DOCTYPE, html, head, and container structure for a mounted
/// breadcrumb. The wrapper handles viewport configuration, charset, and
/// stylesheet loading while the caller provides the widget body.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Widget markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Sitecrumb" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" id="sitecrumb-root" {
                    (body)
                }
            }
        }
    }
}
