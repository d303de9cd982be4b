//! nextroutes - route inventory for Next.js projects
//!
//! nextroutes is a CLI tool and library that lists the routes a Next.js
//! project defines by reading its `pages/` and `app/` directories, without
//! building or running the project.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, output, exit status)
//! - `config`: Directory names and page extensions for a run
//! - `core`: Route collection engine (scan, translate, collect)
//! - `utils`: Shared path helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
