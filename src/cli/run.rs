use anyhow::Result;

use super::args::Arguments;
use crate::{
    config::Config,
    core::{CollectResult, collect_routes},
};

/// Collects the routes of the project named by the arguments.
///
/// # Returns
/// - `Ok(CollectResult)` with the sorted, deduplicated routes
/// - `Err` if the root is invalid or a directory cannot be walked
pub fn run(args: &Arguments) -> Result<CollectResult> {
    let config = Config::for_root(&args.root)?;
    collect_routes(&config, args.verbose)
}
