//! Contest to video reconciliation.
//!
//! Links a contest name to the editorial videos that cover it. Matching is
//! heuristic and text-based; each platform names contests differently, so
//! each gets its own strategy:
//!
//! - [`MatchStrategy::StructuredToken`] (CodeChef): extract the contest type
//!   and number, compare against a compacted form of the video title
//! - [`MatchStrategy::RoundNumber`] (Codeforces): compare the integer after
//!   "Round" on both sides
//! - [`MatchStrategy::NormalizedSubstring`] (LeetCode): normalized contest
//!   title as a substring of the normalized video title
//!
//! Matching is deterministic: the same inputs always produce the same
//! matches, in catalog order. There is no scoring or ranking.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{Platform, VideoRecord};

lazy_static! {
    /// CodeChef contest type and number, e.g. "Starters 173", "Cook-Off 112".
    static ref CODECHEF_CONTEST_RE: Regex =
        Regex::new(r"(?i)(starters|cook-off|lunchtime)\s+(\d+)").expect("valid regex");
    /// Codeforces round number, e.g. "Round 950", "round950".
    static ref ROUND_RE: Regex = Regex::new(r"(?i)round\s*(\d+)").expect("valid regex");
    /// Anything that is not a lowercase letter, digit, or space.
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9 ]").expect("valid regex");
    /// Runs of whitespace.
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// How a platform's contest names are matched against video titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Contest-type token plus number ("starters173").
    StructuredToken,
    /// Integer extracted after "round" on both sides.
    RoundNumber,
    /// Normalized contest title contained in the normalized video title.
    NormalizedSubstring,
}

impl Platform {
    /// The matching strategy used for this platform's contest names.
    pub fn match_strategy(&self) -> MatchStrategy {
        match self {
            Platform::Codechef => MatchStrategy::StructuredToken,
            Platform::Codeforces => MatchStrategy::RoundNumber,
            Platform::Leetcode => MatchStrategy::NormalizedSubstring,
        }
    }
}

/// Select the videos from `catalog` that cover `contest_name`.
///
/// Returns matches in catalog order. An unparseable contest name (no token,
/// no round number) yields an empty result rather than an error.
pub fn related_videos<'a>(
    strategy: MatchStrategy,
    contest_name: &str,
    catalog: &'a [VideoRecord],
) -> Vec<&'a VideoRecord> {
    match strategy {
        MatchStrategy::StructuredToken => {
            let token = match codechef_token(contest_name) {
                Some(token) => token,
                None => return Vec::new(),
            };
            catalog
                .iter()
                .filter(|video| compact(&video.title).contains(&token))
                .collect()
        }
        MatchStrategy::RoundNumber => {
            let number = match round_number(contest_name) {
                Some(number) => number,
                None => return Vec::new(),
            };
            catalog
                .iter()
                .filter(|video| round_number(&video.title) == Some(number))
                .collect()
        }
        MatchStrategy::NormalizedSubstring => {
            let needle = normalize(contest_name);
            if needle.is_empty() {
                return Vec::new();
            }
            catalog
                .iter()
                .filter(|video| normalize(&video.title).contains(&needle))
                .collect()
        }
    }
}

/// Extract the CodeChef contest token, e.g.
/// "Starters 173 (Rated for Div 2, 3 & 4)" -> "starters173".
fn codechef_token(contest_name: &str) -> Option<String> {
    let caps = CODECHEF_CONTEST_RE.captures(contest_name)?;
    let contest_type = caps[1].to_lowercase().replace('-', "");
    Some(format!("{}{}", contest_type, &caps[2]))
}

/// Extract the round number from a Codeforces contest or video title.
fn round_number(text: &str) -> Option<u64> {
    ROUND_RE.captures(text)?[1].parse().ok()
}

/// Compacted form used for token containment: lowercase, punctuation
/// stripped, then all spaces removed.
fn compact(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_ALNUM_RE.replace_all(&lower, "");
    let collapsed = WHITESPACE_RE.replace_all(stripped.trim(), " ");
    collapsed.replace(' ', "")
}

/// Loose normalization: trimmed, lowercased, internal whitespace collapsed.
fn normalize(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    WHITESPACE_RE.replace_all(&lower, " ").into_owned()
}
