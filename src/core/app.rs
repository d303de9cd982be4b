//! Route translation for the `app/` router.

use super::segment::join_route;

/// Translates the path of a `page.*` file relative to `app/` into a route.
///
/// The file name itself is dropped; route groups like `(marketing)` and
/// private folders like `_components` contribute no segment.
pub fn app_route(rel: &str) -> String {
    let mut parts: Vec<&str> = rel.split('/').collect();
    parts.pop();

    join_route(parts.into_iter().filter(|s| !is_hidden_segment(s)))
}

fn is_hidden_segment(segment: &str) -> bool {
    is_route_group(segment) || segment.starts_with('_')
}

fn is_route_group(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('(') && segment.ends_with(')')
}
