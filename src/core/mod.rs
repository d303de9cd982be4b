//! Route collection engine.
//!
//! The pipeline runs in a single pass:
//!
//! 1. **Scan**: walk `pages/` and `app/` under the project root
//! 2. **Translate**: map each file path to a route (`pages`, `app`)
//! 3. **Collect**: drop duplicate routes (first wins) and sort

pub mod app;
pub mod collation;
pub mod collector;
pub mod entry;
pub mod pages;
pub mod scanner;
pub mod segment;

pub use collector::{CollectResult, collect_routes, dedup_and_sort};
pub use entry::{RouteEntry, RouteKind};
pub use segment::Segment;
