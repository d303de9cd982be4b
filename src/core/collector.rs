use std::collections::HashSet;

use anyhow::Result;
use colored::Colorize;

use crate::{config::Config, utils::relative_slash_path};

use super::{
    app::app_route,
    collation::locale_compare,
    entry::{RouteEntry, RouteKind},
    pages::pages_route,
    scanner::scan_files,
};

/// Result of collecting routes from a project.
#[derive(Debug)]
pub struct CollectResult {
    /// Unique routes, sorted.
    pub routes: Vec<RouteEntry>,
    /// Files walked under the pages directory.
    pub pages_files_scanned: usize,
    /// Files walked under the app directory.
    pub app_files_scanned: usize,
    /// Routes dropped because an earlier file produced the same route.
    pub duplicate_count: usize,
}

/// Walks the pages and app directories of `config.root` and returns every
/// route they define.
///
/// Pages routes are collected before app routes, and when two files map to
/// the same route the first one wins.
pub fn collect_routes(config: &Config, verbose: bool) -> Result<CollectResult> {
    let mut entries = Vec::new();

    let pages_dir = config.pages_path();
    let pages_files = scan_files(&pages_dir, verbose)?;
    for file in &pages_files {
        let rel = relative_slash_path(file, &pages_dir)?;
        match pages_route(&rel, config) {
            Some((route, kind)) => {
                entries.push(RouteEntry::new(
                    route,
                    relative_slash_path(file, &config.root)?,
                    kind,
                ));
            }
            None if verbose => {
                eprintln!(
                    "{} Skipping {}: not a page extension",
                    "note:".bold().cyan(),
                    file.display()
                );
            }
            None => {}
        }
    }

    let app_dir = config.app_path();
    let app_files = scan_files(&app_dir, verbose)?;
    for file in &app_files {
        let is_page = file
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| config.is_app_page_file(name));
        if !is_page {
            continue;
        }

        let rel = relative_slash_path(file, &app_dir)?;
        entries.push(RouteEntry::new(
            app_route(&rel),
            relative_slash_path(file, &config.root)?,
            RouteKind::App,
        ));
    }

    let before = entries.len();
    let routes = dedup_and_sort(entries, verbose);

    Ok(CollectResult {
        duplicate_count: before - routes.len(),
        routes,
        pages_files_scanned: pages_files.len(),
        app_files_scanned: app_files.len(),
    })
}

/// Keeps the first entry for each route, then sorts by route.
pub fn dedup_and_sort(entries: Vec<RouteEntry>, verbose: bool) -> Vec<RouteEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<RouteEntry> = Vec::new();

    for entry in entries {
        if seen.insert(entry.route.clone()) {
            kept.push(entry);
        } else if verbose {
            let winner = kept
                .iter()
                .find(|e| e.route == entry.route)
                .map(|e| e.file.as_str())
                .unwrap_or_default();
            eprintln!(
                "{} Duplicate route {} from {} (already defined by {})",
                "warning:".bold().yellow(),
                entry.route,
                entry.file,
                winner
            );
        }
    }

    kept.sort_by(|a, b| locale_compare(&a.route, &b.route));
    kept
}
