//! Fuzzy Set Matcher: decides whether two skill strings refer to the same thing.
//!
//! Default: `SubstringMatcher` (bidirectional containment, deterministic).
//! Scorers only see `dyn SkillMatcher`, so a synonym-table or embedding backend can
//! replace it without touching any scorer.

use serde::{Deserialize, Serialize};

/// Pluggable skill equivalence check. Carried by `ComparisonEngine` as `Arc<dyn SkillMatcher>`.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, a: &str, b: &str) -> bool;

    /// Backend label echoed in results, for transparency.
    fn name(&self) -> &'static str;
}

/// `a ⊆ b or b ⊆ a` on lower-cased forms.
///
/// "React" matches "React.js" in both directions. Short strings over-match
/// ("Java" ⊆ "JavaScript"); that is part of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SkillMatcher for SubstringMatcher {
    fn matches(&self, a: &str, b: &str) -> bool {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        a.contains(&b) || b.contains(&a)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Partition of a target list into the items a candidate covers and the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SetMatch {
    /// matched / target, 0.0 when the target was empty.
    pub fn ratio(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / total as f64
        }
    }
}

/// A target item is matched iff at least one candidate item `matches` it.
/// Target items keep their order and spelling in the output.
pub fn match_set(
    matcher: &dyn SkillMatcher,
    candidate: &[String],
    target: &[String],
) -> SetMatch {
    let (matched, missing): (Vec<String>, Vec<String>) = target
        .iter()
        .cloned()
        .partition(|t| candidate.iter().any(|c| matcher.matches(c, t)));
    SetMatch { matched, missing }
}

/// True if any candidate item matches `target`.
pub fn contains_match<'a, I>(matcher: &dyn SkillMatcher, candidate: I, target: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    candidate.into_iter().any(|c| matcher.matches(c, target))
}
