//! Path utilities for breadcrumb segmentation

/// Number of `/` separated components kept from a site URL to form the base
/// path: scheme, empty authority separator, host, first collection segment.
const BASE_COMPONENTS: usize = 4;

/// Computes the structural base path of a site URL.
///
/// Keeps scheme, host and the first path segment after the host (usually the
/// site collection, e.g. `sites` or `teams`). Assumes the shape
/// `scheme://host/<collection>/<sitename>[/<subsite>...]`.
///
/// # Arguments
///
/// * `site_url`: Absolute site URL
///
/// # Returns
///
/// Base path such as `https://contoso.sharepoint.com/sites`
pub fn base_path(site_url: &str) -> String {
    site_url
        .split('/')
        .take(BASE_COMPONENTS)
        .collect::<Vec<_>>()
        .join("/")
}

/// Removes the first literal occurrence of `prefix` from `path`.
///
/// The match is not anchored at the start of `path`. When the prefix also
/// occurs earlier inside the path by coincidence, that earlier occurrence is
/// the one removed.
pub fn strip_first(path: &str, prefix: &str) -> String {
    path.replacen(prefix, "", 1)
}

/// Extracts path components from a slash separated string
///
/// Splits on forward slashes and filters empty components, which absorbs
/// leading, trailing and doubled slashes.
///
/// # Arguments
///
/// * `path`: Slash separated path string
///
/// # Returns
///
/// Vector of non-empty path components
pub fn path_components(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
