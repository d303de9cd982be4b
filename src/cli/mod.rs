use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use report::{OutputFormat, print_routes_to};

pub fn run_cli(args: Arguments) -> Result<()> {
    let result = run::run(&args)?;
    report::print(&result, args.output_format(), args.verbose)
}
