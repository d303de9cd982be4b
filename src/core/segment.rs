//! Bracket syntax for dynamic route segments.
//!
//! | Folder / file name | Route segment |
//! |--------------------|---------------|
//! | `[...slug]`        | `*slug`       |
//! | `[[...slug]]`      | `*slug`       |
//! | `[[id]]`           | `:id`         |
//! | `[id]`             | `:id`         |
//! | anything else      | unchanged     |

use std::{fmt, sync::LazyLock};

use regex::Regex;

static CATCH_ALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\.\.\.(.+)\]$").unwrap());

// Must be tried before DYNAMIC_REGEX, which would otherwise read `[[id]]` as `:[id]`.
static OPTIONAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[(\.\.\.)?(.+)\]\]$").unwrap());

static DYNAMIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(.+)\]$").unwrap());

/// A parsed route segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Dynamic(String),
    CatchAll(String),
}

impl Segment {
    pub fn parse(segment: &str) -> Self {
        if let Some(caps) = CATCH_ALL_REGEX.captures(segment) {
            return Segment::CatchAll(caps[1].to_string());
        }
        if let Some(caps) = OPTIONAL_REGEX.captures(segment) {
            let name = caps[2].to_string();
            return if caps.get(1).is_some() {
                Segment::CatchAll(name)
            } else {
                Segment::Dynamic(name)
            };
        }
        if let Some(caps) = DYNAMIC_REGEX.captures(segment) {
            return Segment::Dynamic(caps[1].to_string());
        }
        Segment::Static(segment.to_string())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(name) => f.write_str(name),
            Segment::Dynamic(name) => write!(f, ":{}", name),
            Segment::CatchAll(name) => write!(f, "*{}", name),
        }
    }
}

/// Converts segments and joins them into a route starting with `/`.
pub fn join_route<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let converted: Vec<String> = segments
        .into_iter()
        .map(|s| Segment::parse(s).to_string())
        .collect();
    format!("/{}", converted.join("/"))
}
