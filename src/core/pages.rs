//! Route translation for the `pages/` router.

use crate::{config::Config, utils::split_extension};

use super::{entry::RouteKind, segment::join_route};

const API_PREFIX: &str = "api/";

/// Translates a path relative to `pages/` into a route.
///
/// Returns `None` for files whose extension is not a page extension.
/// Files under `api/` become [`RouteKind::Api`] routes whose path is kept
/// verbatim: bracket segments, `index` and `_`-prefixed segments are not
/// rewritten.
pub fn pages_route(rel: &str, config: &Config) -> Option<(String, RouteKind)> {
    let (without_ext, ext) = split_extension(rel);
    if !config.is_page_extension(ext) {
        return None;
    }

    if let Some(api_path) = without_ext.strip_prefix(API_PREFIX) {
        let route = if api_path.is_empty() {
            "/api".to_string()
        } else {
            format!("/api/{}", api_path)
        };
        return Some((route, RouteKind::Api));
    }

    let path = if without_ext == "index" {
        ""
    } else {
        without_ext.strip_suffix("/index").unwrap_or(without_ext)
    };

    let segments = path
        .split('/')
        .filter(|s| !s.is_empty())
        .filter(|s| !s.starts_with('_'));

    Some((join_route(segments), RouteKind::Pages))
}
