//! Reusable HTML components for breadcrumb rendering
//!
//! This module provides Maud component functions used by the HTML renderer
//! and by the mounted preview page. Components handle specific UI elements
//! with consistent class names so the bundled stylesheet applies to both.

pub mod breadcrumb;
pub mod layout;
