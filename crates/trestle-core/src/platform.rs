//! Platform classification for workers and builders.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a worker can build for, inferred from its name.
///
/// Classification is substring containment of the tag in the worker
/// name. A name matching several tags is assigned to each platform
/// independently; a name matching none is silently excluded. There is
/// no stronger signal than the naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlatformTag {
    Linux,
    Osx,
    Windows,
}

impl PlatformTag {
    /// Fixed evaluation order used throughout derivation. Keeping this
    /// order stable makes repeated derivation byte-identical.
    pub const ALL: [PlatformTag; 3] = [PlatformTag::Linux, PlatformTag::Osx, PlatformTag::Windows];

    /// The substring looked for in worker names.
    pub fn tag(&self) -> &'static str {
        match self {
            PlatformTag::Linux => "linux",
            PlatformTag::Osx => "osx",
            PlatformTag::Windows => "windows",
        }
    }

    pub fn matches(&self, worker_name: &str) -> bool {
        worker_name.contains(self.tag())
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_substring() {
        assert!(PlatformTag::Linux.matches("linux-big-01"));
        assert!(PlatformTag::Linux.matches("fastlinux"));
        assert!(!PlatformTag::Linux.matches("osx-01"));
    }

    #[test]
    fn test_name_can_match_multiple_platforms() {
        let name = "linux-osx-dual";
        let matched: Vec<_> = PlatformTag::ALL
            .iter()
            .filter(|p| p.matches(name))
            .collect();
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_display_is_tag() {
        assert_eq!(PlatformTag::Osx.to_string(), "osx");
    }
}
