use serde::{Deserialize, Serialize};

/// Composite weights over the five dimensions. Must sum to 1.0.
///
/// Changing the defaults changes product behaviour: bump `VERSION` with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
    pub soft_skills: f64,
}

impl ScoringWeights {
    pub const VERSION: &'static str = "v1";

    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.education + self.keywords + self.soft_skills
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.30,
            experience: 0.25,
            education: 0.15,
            keywords: 0.20,
            soft_skills: 0.10,
        }
    }
}

/// Fixed scores emitted by the binary experience/education heuristics.
/// Placeholder values carried over unchanged; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicScores {
    pub experience_match: u32,
    pub experience_no_match: u32,
    pub education_present: u32,
    pub education_absent: u32,
    /// Experience scores below this trigger the low-experience suggestion.
    pub low_experience_threshold: u32,
}

impl Default for HeuristicScores {
    fn default() -> Self {
        Self {
            experience_match: 70,
            experience_no_match: 40,
            education_present: 90,
            education_absent: 50,
            low_experience_threshold: 60,
        }
    }
}

/// Weights of the per-peer competitiveness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitivenessWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    /// Experience factor when any experience gap exists.
    pub experience_partial: f64,
    /// Education factor when any education gap exists.
    pub education_partial: f64,
}

impl Default for CompetitivenessWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
            experience_partial: 0.5,
            education_partial: 0.7,
        }
    }
}

/// Output caps for lists surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketLimits {
    pub common_skills: usize,
    pub common_roles: usize,
    pub common_employers: usize,
    pub missing_keywords: usize,
    pub peer_recommendations: usize,
}

impl Default for MarketLimits {
    fn default() -> Self {
        Self {
            common_skills: 10,
            common_roles: 5,
            common_employers: 5,
            missing_keywords: 10,
            peer_recommendations: 3,
        }
    }
}

/// Rounds a 0–100 float score and clamps it into range.
pub fn clamp_score(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u32
}

/// `100 * part / whole`, clamped; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        clamp_score(100.0 * part as f64 / whole as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!(ScoringWeights::default().is_normalized());
    }

    #[test]
    fn test_competitiveness_weights_sum_to_one() {
        let w = CompetitivenessWeights::default();
        assert!((w.skills + w.experience + w.education - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(150.0), 100);
        assert_eq!(clamp_score(66.666), 67);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_percentage_zero_whole() {
        assert_eq!(percentage(3, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 4), 25);
    }
}
