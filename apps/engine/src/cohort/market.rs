//! Market Aggregator: frequency statistics over a peer cohort.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matching::normalize::{dedup_preserving_case, parse_leading_years};
use crate::matching::weights::MarketLimits;
use crate::models::PeerProfile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub common_skills: Vec<String>,
    pub common_roles: Vec<String>,
    pub common_employers: Vec<String>,
    /// Mean of the parseable tenure years; 0.0 when none parse.
    pub average_tenure_years: f64,
}

/// Aggregates skills, roles and employers across `peers`.
///
/// Skills count once per peer. Ties keep first-seen order.
pub fn aggregate_market(peers: &[PeerProfile], limits: &MarketLimits) -> MarketInsights {
    let skills = peers
        .iter()
        .flat_map(|p| dedup_preserving_case(&p.skills));
    let roles = peers.iter().map(|p| p.role.clone());
    let employers = peers.iter().map(|p| p.employer.clone());

    MarketInsights {
        common_skills: top_by_frequency(skills, limits.common_skills),
        common_roles: top_by_frequency(roles, limits.common_roles),
        common_employers: top_by_frequency(employers, limits.common_employers),
        average_tenure_years: average_tenure_years(peers),
    }
}

/// Mean leading-integer tenure over peers whose tenure text parses.
pub fn average_tenure_years(peers: &[PeerProfile]) -> f64 {
    let years: Vec<u32> = peers
        .iter()
        .filter_map(|p| p.tenure.as_deref().and_then(parse_leading_years))
        .collect();
    if years.is_empty() {
        return 0.0;
    }
    years.iter().map(|&y| f64::from(y)).sum::<f64>() / years.len() as f64
}

/// Case-insensitive counts, first spelling kept, sorted by count descending (stable).
fn top_by_frequency<I>(items: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let display = item.trim();
        let key = display.to_lowercase();
        if key.is_empty() {
            continue;
        }
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((display.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(item, _)| item).collect()
}
