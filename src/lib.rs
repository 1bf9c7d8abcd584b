//! Breadcrumb trails for content-management site paths.

mod assets;
pub mod components;
mod config;
pub mod host;
mod options;
mod overflow;
mod path;
pub mod render;
mod segment;
mod theme;

pub use assets::{STYLESHEET, write_css_assets};
pub use config::{Config, Format, validate_options};
pub use host::{Attributes, HostAdapter, PAGE_FILE, WidgetProps};
pub use options::{DEFAULT_MAX_DISPLAYED_ITEMS, DEFAULT_OVERFLOW_INDEX, DisplayOptions};
pub use overflow::{Collapsed, collapse};
pub use path::{base_path, path_components, strip_first};
pub use render::{BreadcrumbRenderer, BreadcrumbView, HtmlRenderer, TextRenderer};
pub use segment::{BreadcrumbItem, PathInput, segment, strip_prefix};
pub use theme::Theme;
