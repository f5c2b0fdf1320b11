// crates/shared-kernel/src/value_objects/version_tag.rs
use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;

use crate::error::{DomainError, DomainResult};

/// Dot-separated sequence of non-negative integer segments, e.g. `2.14.0`.
///
/// The pattern is anchored at both ends, so trailing garbage (`1.2.3abc`,
/// `1.2.3\n`) is rejected. Segment count, digit length and leading zeros are
/// unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionTag(String);

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").expect("tag pattern is valid"))
}

impl VersionTag {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidTag`] carrying the offending input when it
    /// does not match the tag pattern.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if tag_pattern().is_match(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(DomainError::InvalidTag { tag: raw.to_owned() })
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl FromStr for VersionTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
