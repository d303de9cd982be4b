use std::fmt;

use serde::{Deserialize, Serialize};

/// Which routing convention produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// A page under `pages/`.
    Pages,
    /// A `page.*` file under `app/`.
    App,
    /// An API handler under `pages/api/`.
    Api,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Pages => "pages",
            RouteKind::App => "app",
            RouteKind::Api => "api",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single route derived from a source file.
///
/// Field order is the order of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL pattern, always starting with `/`.
    pub route: String,
    /// Source file relative to the project root, `/`-separated.
    pub file: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
}

impl RouteEntry {
    pub fn new(route: impl Into<String>, file: impl Into<String>, kind: RouteKind) -> Self {
        Self {
            route: route.into(),
            file: file.into(),
            kind,
        }
    }
}
