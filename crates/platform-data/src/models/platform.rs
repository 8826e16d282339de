//! Platform identity and per-platform policy.

use serde::{Deserialize, Serialize};

/// A supported competitive programming platform.
///
/// The platform determines which adapter fetches rating data, how contest
/// URLs are derived, and which title-matching strategy the reconciler uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Codeforces,
    Leetcode,
    Codechef,
}

impl Platform {
    /// Stable string identifier, used in cache keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Codeforces => "codeforces",
            Platform::Leetcode => "leetcode",
            Platform::Codechef => "codechef",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::Leetcode => "LeetCode",
            Platform::Codechef => "CodeChef",
        }
    }

    /// Parse a platform from its stable identifier.
    ///
    /// Accepts the same strings produced by [`as_str`](Self::as_str),
    /// case-insensitively. Returns `None` for anything else.
    pub fn from_str_opt(s: &str) -> Option<Platform> {
        match s.to_ascii_lowercase().as_str() {
            "codeforces" => Some(Platform::Codeforces),
            "leetcode" => Some(Platform::Leetcode),
            "codechef" => Some(Platform::Codechef),
            _ => None,
        }
    }

    /// All supported platforms, in display order.
    pub fn all() -> &'static [Platform] {
        &[Platform::Codeforces, Platform::Leetcode, Platform::Codechef]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trips() {
        for platform in Platform::all() {
            assert_eq!(Platform::from_str_opt(platform.as_str()), Some(*platform));
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(Platform::from_str_opt("CodeForces"), Some(Platform::Codeforces));
        assert_eq!(Platform::from_str_opt("LEETCODE"), Some(Platform::Leetcode));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(Platform::from_str_opt("atcoder"), None);
        assert_eq!(Platform::from_str_opt(""), None);
    }
}
