//! CLI argument definitions using clap.
//!
//! nextroutes has no subcommands: it scans the project root and prints the
//! route list, as a table by default or as JSON with `--json`.

use std::path::PathBuf;

use clap::Parser;

use super::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Print routes as a JSON array instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Project root containing the pages/ and app/ directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}
