use serde::{Deserialize, Serialize};

use crate::matching::weights::{clamp_score, ScoringWeights};

/// The five dimension scores feeding the composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub keywords: u32,
    pub soft_skills: u32,
}

/// Overall score: round(Σ weight × dimension), clamped to 0–100.
pub fn compute_overall_score(scores: &DimensionScores, weights: &ScoringWeights) -> u32 {
    clamp_score(
        weights.skills * scores.skills as f64
            + weights.experience * scores.experience as f64
            + weights.education * scores.education as f64
            + weights.keywords * scores.keywords as f64
            + weights.soft_skills * scores.soft_skills as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_full_marks() {
        let scores = DimensionScores {
            skills: 100,
            experience: 100,
            education: 100,
            keywords: 100,
            soft_skills: 100,
        };
        assert_eq!(compute_overall_score(&scores, &ScoringWeights::default()), 100);
    }

    #[test]
    fn test_overall_weighted_mix() {
        // 0.30*67 + 0.25*40 + 0.15*50 + 0.20*0 + 0.10*0 = 20.1 + 10 + 7.5 = 37.6
        let scores = DimensionScores {
            skills: 67,
            experience: 40,
            education: 50,
            keywords: 0,
            soft_skills: 0,
        };
        assert_eq!(compute_overall_score(&scores, &ScoringWeights::default()), 38);
    }

    #[test]
    fn test_overall_clamped_with_oversized_weights() {
        let weights = ScoringWeights {
            skills: 2.0,
            experience: 0.0,
            education: 0.0,
            keywords: 0.0,
            soft_skills: 0.0,
        };
        let scores = DimensionScores {
            skills: 100,
            ..Default::default()
        };
        assert_eq!(compute_overall_score(&scores, &weights), 100);
    }

    #[test]
    fn test_overall_zero_scores() {
        assert_eq!(
            compute_overall_score(&DimensionScores::default(), &ScoringWeights::default()),
            0
        );
    }
}
