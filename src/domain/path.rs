//! Dot-separated target paths and their resolution against a context.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::{EvaluationContext, FilterError, Value, ROOT_KEY};

/// Well-formed path: root key followed by non-empty segments.
fn path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^{}(\.[^.]+)*$", regex::escape(ROOT_KEY)))
            .expect("target path pattern is valid")
    })
}

/// Parsed target path such as `event.data.user.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    raw: String,
    segments: Vec<String>,
}

impl TargetPath {
    /// Parse a path, checking that it starts at the root key and has no empty segments.
    pub fn parse(raw: &str) -> Result<Self, FilterError> {
        if !path_pattern().is_match(raw) {
            return Err(FilterError::validation(format!(
                "target '{}' must be a dot-separated path starting with '{}'",
                raw, ROOT_KEY
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Resolve a path inside the wrapped record.
pub fn resolve<'a>(
    context: &'a EvaluationContext,
    path: &TargetPath,
) -> Result<&'a Value, FilterError> {
    resolve_segments(context.root(), path.as_str(), path.segments())
}

/// Walk `segments` down from `root`, one mapping lookup per segment.
///
/// Indexing into anything other than a mapping is reported as a missing segment.
pub fn resolve_segments<'a>(
    root: &'a Value,
    path: &str,
    segments: &[String],
) -> Result<&'a Value, FilterError> {
    segments.iter().try_fold(root, |current, segment| {
        current
            .as_mapping()
            .and_then(|map| map.get(segment))
            .ok_or_else(|| FilterError::PathNotFound {
                path: path.to_string(),
                segment: segment.clone(),
            })
    })
}
