//! Common path helpers shared across the codebase.

use std::path::{Component, Path};

use anyhow::{Context, Result};

/// Returns `path` relative to `base`, joined with `/` on every platform.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nextroutes::utils::relative_slash_path;
///
/// let rel = relative_slash_path(Path::new("site/pages/blog/a.tsx"), Path::new("site")).unwrap();
/// assert_eq!(rel, "pages/blog/a.tsx");
/// ```
pub fn relative_slash_path(path: &Path, base: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(base)
        .with_context(|| format!("{} is not inside {}", path.display(), base.display()))?;

    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}

/// Splits a `/`-separated path into the part before the extension and the
/// extension itself (without the dot).
///
/// Only the final component is considered, and a leading dot does not start
/// an extension, so `.env` has none.
///
/// # Examples
///
/// ```
/// use nextroutes::utils::split_extension;
///
/// assert_eq!(split_extension("blog/[id].tsx"), ("blog/[id]", "tsx"));
/// assert_eq!(split_extension("v1.js/users.js"), ("v1.js/users", "js"));
/// assert_eq!(split_extension("docs/.env"), ("docs/.env", ""));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
pub fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = name_start + dot;
            (&path[..dot], &path[dot + 1..])
        }
        _ => (path, ""),
    }
}
