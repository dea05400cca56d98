//! Token/Set Normalizer: turns skill lists and free text into comparable lower-cased forms.
//!
//! Literal comparison only: no stemming, no synonyms. Tokens of four characters or fewer
//! are dropped, which suppresses most stop-words without carrying a stop-word list.

use std::collections::HashSet;

use crate::models::CandidateProfile;

/// Tokens must be strictly longer than this (in characters) to count as keywords.
pub const MIN_TOKEN_CHARS: usize = 4;

/// Lower-cases, trims, drops blanks and de-duplicates, keeping first-seen order.
///
/// Idempotent: normalizing an already-normalized set returns it unchanged.
pub fn normalize_set<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// De-duplicates case-insensitively but keeps the first spelling seen.
///
/// Used on target lists (job skills, peer skills) so results can echo the
/// target's own wording while still partitioning a true set.
pub fn dedup_preserving_case<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

/// The candidate's comparable skill set: technical ∪ tools.
pub fn candidate_skill_set(candidate: &CandidateProfile) -> Vec<String> {
    normalize_set(
        candidate
            .skills
            .technical
            .iter()
            .chain(candidate.skills.tools.iter()),
    )
}

/// Whitespace-tokenizes lower-cased text, keeping unique tokens longer than
/// `MIN_TOKEN_CHARS`, in first-seen order.
pub fn tokenize<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for text in texts {
        for word in text.as_ref().to_lowercase().split_whitespace() {
            if word.chars().count() > MIN_TOKEN_CHARS && seen.insert(word.to_string()) {
                tokens.push(word.to_string());
            }
        }
    }
    tokens
}

/// Joins text fragments into one lower-cased haystack for containment checks.
pub fn joined_text<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| t.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the leading integer of free text: `"3 years"` → 3, `"no data"` → None.
pub fn parse_leading_years(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Whole years in a duration such as `"2 years"`. Durations stated in a sub-year unit
/// (`"6 months"`, `"10 weeks"`) count as none rather than as that many years.
pub fn parse_duration_years(text: &str) -> Option<u32> {
    let years = parse_leading_years(text)?;
    let unit = text
        .trim_start()
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '+')
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    let sub_year = ["month", "week", "day"].iter().any(|u| unit.starts_with(u))
        || matches!(unit.as_str(), "mo" | "mos" | "wk" | "wks");
    if sub_year {
        None
    } else {
        Some(years)
    }
}
