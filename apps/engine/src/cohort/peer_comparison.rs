//! Candidate × cohort comparison: per-peer gap analysis, market aggregation, market rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cohort::gap::{analyze_gap, CandidateFacts, GapSettings, PeerComparisonItem};
use crate::cohort::market::{aggregate_market, MarketInsights};
use crate::engine::ComparisonEngine;
use crate::matching::normalize::parse_duration_years;
use crate::matching::weights::ScoringWeights;
use crate::models::{CandidateProfile, PeerProfile};
use crate::suggestions::{market_suggestions, MarketRuleInput, Suggestion};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerComparisonResult {
    pub candidate_id: String,
    /// One item per peer, in input order.
    pub top_peers: Vec<PeerComparisonItem>,
    pub market_insights: MarketInsights,
    pub suggestions: Vec<Suggestion>,
    pub weights_version: String,
    pub matcher_backend: String,
}

impl ComparisonEngine {
    /// Compares against the cohort exactly as given; selecting peers is the caller's job.
    pub fn compare_with_peers(
        &self,
        candidate: &CandidateProfile,
        peers: &[PeerProfile],
    ) -> PeerComparisonResult {
        let facts = CandidateFacts::from_profile(candidate);
        let settings = GapSettings {
            matcher: self.matcher(),
            weights: &self.competitiveness,
            max_recommendations: self.limits.peer_recommendations,
        };

        let top_peers: Vec<PeerComparisonItem> = peers
            .iter()
            .map(|peer| analyze_gap(settings, &facts, peer))
            .collect();

        let market_insights = aggregate_market(peers, &self.limits);
        debug!(?market_insights, cohort = peers.len(), "Market insights computed");

        let suggestions = market_suggestions(&MarketRuleInput {
            matcher: self.matcher(),
            candidate_skills: &facts.skills,
            candidate_titles: &facts.titles,
            candidate_years: candidate_experience_years(candidate),
            insights: &market_insights,
        });

        info!(
            candidate_id = %candidate.id,
            cohort = peers.len(),
            suggestions = suggestions.len(),
            "Peer comparison complete"
        );

        PeerComparisonResult {
            candidate_id: candidate.id.clone(),
            top_peers,
            market_insights,
            suggestions,
            weights_version: ScoringWeights::VERSION.to_string(),
            matcher_backend: self.matcher().name().to_string(),
        }
    }
}

/// Compares with the default v1 engine.
pub fn compare_with_peers(candidate: &CandidateProfile, peers: &[PeerProfile]) -> PeerComparisonResult {
    ComparisonEngine::default().compare_with_peers(candidate, peers)
}

/// Whole years summed across experience entries, saturating at `u32::MAX`.
/// Unparseable and sub-year durations add 0.
pub fn candidate_experience_years(candidate: &CandidateProfile) -> u32 {
    candidate
        .experience
        .iter()
        .filter_map(|e| parse_duration_years(&e.duration_text))
        .fold(0u32, |total, years| total.saturating_add(years))
}
