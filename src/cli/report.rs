//! Route list formatting and printing.
//!
//! Routes go to stdout; the verbose summary goes to stderr so that the
//! stdout stream stays machine-readable. Separate from core logic to allow
//! nextroutes to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{CollectResult, RouteEntry};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<route>\t[<type>]\t<file>`, one line per route.
    Table,
    /// Pretty-printed JSON array with two-space indentation.
    Json,
}

/// Print the collected routes to stdout, then the summary when verbose.
pub fn print(result: &CollectResult, format: OutputFormat, verbose: bool) -> Result<()> {
    print_routes_to(&result.routes, format, &mut io::stdout().lock())
        .context("Failed to write routes")?;

    if verbose {
        print_summary_to(result, &mut io::stderr().lock());
    }

    Ok(())
}

/// Print routes to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_routes_to<W: Write>(
    routes: &[RouteEntry],
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(routes)?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Table => {
            for entry in routes {
                writeln!(writer, "{}\t[{}]\t{}", entry.route, entry.kind, entry.file)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Print the run summary to a custom writer.
pub fn print_summary_to<W: Write>(result: &CollectResult, writer: &mut W) {
    let routes = result.routes.len();
    let mut msg = format!(
        "Found {} {} ({} pages {}, {} app {} scanned)",
        routes,
        if routes == 1 { "route" } else { "routes" },
        result.pages_files_scanned,
        plural_files(result.pages_files_scanned),
        result.app_files_scanned,
        plural_files(result.app_files_scanned),
    );
    if result.duplicate_count > 0 {
        msg.push_str(&format!(", {} duplicate(s) dropped", result.duplicate_count));
    }
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural_files(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
