//! Suggestion Generator: ordered decision tables of independent rules.
//!
//! Each rule is a tagged variant with an `evaluate` that either yields exactly one
//! `Suggestion` or nothing. Adding a rule means adding a variant and appending it to
//! the table; existing rules are untouched.

pub mod job_rules;
pub mod market_rules;

use serde::{Deserialize, Serialize};

pub use job_rules::{job_suggestions, JobRule, JobRuleInput};
pub use market_rules::{market_suggestions, MarketRule, MarketRuleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Important,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Keywords,
    Formatting,
    Certifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// One actionable improvement item, tagged with its estimated score uplift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
    pub impact: Impact,
    pub estimated_score_increase: u32,
}

/// "a, b, c" over the first `n` items.
pub(crate) fn preview(items: &[String], n: usize) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
